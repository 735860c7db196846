//! Error handling for GridKit
//!
//! Provides error types for each layer of the layout engine:
//! - Layout errors (placement, bounds, identifiers)
//! - Store errors (template fetch/patch against the remote store)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Layout error type
///
/// Represents violations of the layout document's invariants and lookups
/// that could not be resolved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Widget type is not present in the widget registry
    #[error("Unknown widget type: {widget_type}")]
    UnknownWidgetType {
        /// The widget type that failed to resolve.
        widget_type: String,
    },

    /// No item with the given id exists in the document
    #[error("Layout item not found: {id}")]
    ItemNotFound {
        /// The missing item id.
        id: String,
    },

    /// Item extends past the column count of its breakpoint
    #[error("Item {id} exceeds {columns} columns on {breakpoint} (x={x}, w={w})")]
    OutOfBounds {
        /// The offending item id.
        id: String,
        /// The breakpoint name.
        breakpoint: String,
        /// The item's column.
        x: u32,
        /// The item's width in cells.
        w: u32,
        /// The breakpoint's column count.
        columns: u32,
    },

    /// The same id appears twice in one breakpoint
    #[error("Duplicate item id {id} on {breakpoint}")]
    DuplicateId {
        /// The duplicated id.
        id: String,
        /// The breakpoint name.
        breakpoint: String,
    },

    /// Item has a zero width or height
    #[error("Item {id} has an empty size ({w}x{h})")]
    EmptySize {
        /// The offending item id.
        id: String,
        /// The item's width in cells.
        w: u32,
        /// The item's height in cells.
        h: u32,
    },

    /// Breakpoint name could not be parsed
    #[error("Unknown breakpoint: {name}")]
    UnknownBreakpoint {
        /// The unparsed name.
        name: String,
    },
}

/// Store error type
///
/// Represents failures talking to the remote template store.
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    /// The request could not be sent or the connection failed
    #[error("Template store request failed: {message}")]
    Request {
        /// The transport error message.
        message: String,
    },

    /// The store answered with a non-success status
    #[error("Template store returned {status}: {body}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The response body, if any.
        body: String,
    },

    /// The response body could not be decoded
    #[error("Failed to decode template store response: {reason}")]
    Decode {
        /// The decoding failure.
        reason: String,
    },

    /// The request did not complete in time
    #[error("Template store request timed out after {timeout_ms}ms")]
    Timeout {
        /// The timeout duration in milliseconds.
        timeout_ms: u64,
    },

    /// No template is flagged as the default for the layout type
    #[error("No default template found for layout type {layout_type}")]
    NoDefaultTemplate {
        /// The requested layout type.
        layout_type: String,
    },
}

/// Main error type for GridKit
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Layout error
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Store error
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a store error
    pub fn is_store_error(&self) -> bool {
        matches!(self, Error::Store(_))
    }

    /// Check if this is a layout error
    pub fn is_layout_error(&self) -> bool {
        matches!(self, Error::Layout(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_error_display() {
        let err = LayoutError::OutOfBounds {
            id: "chart#1".to_string(),
            breakpoint: "md".to_string(),
            x: 1,
            w: 2,
            columns: 2,
        };
        assert_eq!(
            err.to_string(),
            "Item chart#1 exceeds 2 columns on md (x=1, w=2)"
        );

        let err = LayoutError::UnknownWidgetType {
            widget_type: "bogus".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown widget type: bogus");
    }

    #[test]
    fn test_store_error_display() {
        let err = StoreError::Status {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert_eq!(err.to_string(), "Template store returned 502: bad gateway");

        let err = StoreError::NoDefaultTemplate {
            layout_type: "landingPage".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "No default template found for layout type landingPage"
        );
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = StoreError::Timeout { timeout_ms: 10 }.into();
        assert!(err.is_store_error());
        assert!(!err.is_layout_error());

        let err: Error = LayoutError::ItemNotFound {
            id: "x".to_string(),
        }
        .into();
        assert!(err.is_layout_error());

        let err = Error::other("boom");
        assert_eq!(err.to_string(), "boom");
    }
}
