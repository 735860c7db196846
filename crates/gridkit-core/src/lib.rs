//! # GridKit Core
//!
//! Core types and utilities shared by every GridKit crate.
//! Provides the unified error taxonomy, the application event bus used for
//! notifications and layout events, and shared-state aliases.

pub mod error;
pub mod event_bus;
pub mod types;

pub use error::{Error, LayoutError, Result, StoreError};

// Re-export event bus for convenience
pub use event_bus::{
    AppEvent, EventBus, EventBusConfig, EventBusError, EventCategory, EventFilter, LayoutEvent,
    Notification, NotificationVariant, SubscriptionId,
};

pub use types::{thread_safe, ThreadSafe};
