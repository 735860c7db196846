//! # Event Bus Module
//!
//! Decoupled delivery of layout events and user-facing notifications.
//!
//! ## Overview
//!
//! - Publishers emit typed events without knowing subscribers
//! - Subscribers filter and receive events of interest
//! - The notification sink (toasts) is just another subscriber
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gridkit_core::event_bus::{AppEvent, EventBus, EventCategory, EventFilter, Notification};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Notification]),
//!     |event| {
//!         if let AppEvent::Notification(n) = event {
//!             println!("{}: {}", n.title, n.description);
//!         }
//!     },
//! );
//!
//! bus.emit(AppEvent::Notification(Notification::danger(
//!     "Failed to fetch dashboard template",
//!     "Try reloading the page.",
//! )));
//!
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
