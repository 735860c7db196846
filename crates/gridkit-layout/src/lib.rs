//! # GridKit Layout
//!
//! The layout state engine: a document holding one widget arrangement per
//! screen-size breakpoint, and the pure placement functions that transform it.
//!
//! ## Core Components
//!
//! - **Breakpoints**: the fixed `xl`/`lg`/`md`/`sm` table and width selection
//! - **Layout Document**: per-breakpoint ordered item lists
//! - **Placement Engine**: drop with collision push, keyboard moves,
//!   attribute updates and removal
//! - **Wire format**: the template store's item representation
//! - **Widget Registry**: default sizes and configs per widget type
//!
//! ## Architecture
//!
//! ```text
//! Breakpoint table ──► select_breakpoint(width)
//!
//! LayoutDocument ──► placement::* ──► LayoutDocument (new value)
//!      ▲                                   │
//!      └──── from_template_config ◄── wire ┘ to_partial_config
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gridkit_layout::{placement, Breakpoint, LayoutDocument, StaticWidgetRegistry};
//!
//! let doc = LayoutDocument::new();
//! let outcome = placement::drop_widget(&doc, Breakpoint::Lg, &request, &definition);
//! ```

pub mod breakpoint;
pub mod document;
pub mod item;
pub mod placement;
pub mod registry;
pub mod wire;

pub use breakpoint::{select_breakpoint, Breakpoint};
pub use document::LayoutDocument;
pub use item::{widget_identifier, widget_type_of, LayoutItem, WidgetAttribute};
pub use placement::{Direction, DropOutcome, DropRequest};
pub use registry::{StaticWidgetRegistry, WidgetDefaults, WidgetDefinition, WidgetRegistry};
pub use wire::{PartialTemplateConfig, TemplateConfig, WireItem};
