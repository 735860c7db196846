//! Grid host boundary.
//!
//! A host draws the active breakpoint's tiles and reports user interaction
//! through [`GridEventHandler`]. The controller implements it; hosts never
//! touch the layout document directly.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use gridkit_layout::{Breakpoint, WireItem};

/// Key code that toggles the active item
pub const ENTER_KEY: &str = "Enter";

/// A widget released over a grid cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropEvent {
    pub x: u32,
    pub y: u32,
    /// Placeholder size as reported by the grid
    #[serde(default)]
    pub w: Option<u32>,
    #[serde(default)]
    pub h: Option<u32>,
    /// Drag payload text; a widget type when dragged from the widget bank
    pub payload: String,
}

/// A key event on a rendered tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// DOM-style key code, e.g. `Enter` or `ArrowUp`
    pub code: String,
    pub item_id: String,
}

impl KeyEvent {
    pub fn new(code: impl Into<String>, item_id: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            item_id: item_id.into(),
        }
    }
}

/// Callbacks a grid host delivers
#[async_trait]
pub trait GridEventHandler: Send + Sync {
    /// A drag from the widget bank ended over a cell
    async fn on_drop(&self, event: DropEvent);

    /// A drag or resize ended; carries the full item list of the active
    /// breakpoint
    async fn on_layout_change(&self, items: Vec<WireItem>);

    /// The grid crossed a breakpoint threshold
    async fn on_breakpoint_change(&self, breakpoint: Breakpoint);

    /// Key released on a tile
    async fn on_key_up(&self, event: KeyEvent);

    /// Key pressed inside the grid while an item is active
    async fn on_key_down(&self, _code: &str) {}
}
