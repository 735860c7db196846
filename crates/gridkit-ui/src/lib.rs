//! # GridKit UI
//!
//! The interaction controller sits between a grid host (the component that
//! draws tiles and reports drags, drops and key presses) and the layout
//! engine. It owns the application state, applies placement operations,
//! forwards changes to the persistence synchronizer and produces the render
//! slice for the active breakpoint.

pub mod controller;
pub mod host;
pub mod render;
pub mod state;

pub use controller::InteractionController;
pub use host::{DropEvent, GridEventHandler, KeyEvent};
pub use render::{column_width, RenderedGrid, RenderedItem, DROPPING_ITEM_ID};
pub use state::AppState;
