//! Event type definitions for the event bus.
//!
//! Events are cloneable and serializable so a host can forward them across
//! a process or FFI boundary unchanged.

use serde::{Deserialize, Serialize};

/// Root event enum for all application events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppEvent {
    /// User-visible, non-fatal notifications
    Notification(Notification),
    /// Layout document lifecycle events
    Layout(LayoutEvent),
}

impl AppEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            AppEvent::Notification(_) => EventCategory::Notification,
            AppEvent::Layout(_) => EventCategory::Layout,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            AppEvent::Notification(n) => format!("[{}] {}", n.variant, n.title),
            AppEvent::Layout(e) => e.description(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Notification events.
    Notification,
    /// Layout document events.
    Layout,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Notification => write!(f, "Notification"),
            EventCategory::Layout => write!(f, "Layout"),
        }
    }
}

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    Success,
    Danger,
    Warning,
    Info,
}

impl std::fmt::Display for NotificationVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Danger => write!(f, "danger"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// A notification for the external toast sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub variant: NotificationVariant,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(
        variant: NotificationVariant,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            variant,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Shorthand for a `danger` notification
    pub fn danger(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationVariant::Danger, title, description)
    }
}

/// Layout document lifecycle events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutEvent {
    /// The default template was fetched and populated.
    TemplateLoaded {
        /// Id of the bound template.
        template_id: i64,
        /// Breakpoint selected at bootstrap.
        breakpoint: String,
    },
    /// The active breakpoint changed.
    BreakpointChanged {
        /// Previous breakpoint, if any was active.
        from: Option<String>,
        /// Newly active breakpoint.
        to: String,
    },
    /// A widget was dropped onto the grid.
    WidgetDropped {
        /// Id of the new item.
        id: String,
        /// Widget type of the new item.
        widget_type: String,
    },
    /// A widget was removed from every breakpoint.
    WidgetRemoved {
        /// Id of the removed item.
        id: String,
    },
    /// A patch succeeded and the canonical template replaced the document.
    LayoutSaved {
        /// Id of the saved template.
        template_id: i64,
    },
}

impl LayoutEvent {
    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            LayoutEvent::TemplateLoaded {
                template_id,
                breakpoint,
            } => format!("Template {} loaded at {}", template_id, breakpoint),
            LayoutEvent::BreakpointChanged { from, to } => match from {
                Some(from) => format!("Breakpoint changed {} -> {}", from, to),
                None => format!("Breakpoint set to {}", to),
            },
            LayoutEvent::WidgetDropped { id, .. } => format!("Widget {} dropped", id),
            LayoutEvent::WidgetRemoved { id } => format!("Widget {} removed", id),
            LayoutEvent::LayoutSaved { template_id } => {
                format!("Template {} saved", template_id)
            }
        }
    }
}
