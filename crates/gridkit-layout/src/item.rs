//! Placed widget instances.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::wire::WireItem;

/// Separator between widget type and unique suffix in item ids
pub const ID_SEPARATOR: char = '#';

/// A widget placed on one breakpoint's grid.
///
/// The id is shared by every breakpoint variant of the same logical widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutItem {
    pub id: String,
    pub widget_type: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    pub min_w: Option<u32>,
    pub max_w: Option<u32>,
    pub min_h: Option<u32>,
    pub max_h: Option<u32>,
    pub locked: bool,
    pub title: String,
    /// Widget-owned payload, not interpreted by the engine
    pub config: Option<serde_json::Value>,
}

impl LayoutItem {
    /// Column just past the item's right edge
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.w)
    }

    /// Row just past the item's bottom edge
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.h)
    }

    /// Build an in-memory item from its wire form.
    ///
    /// The widget type is recovered from the id prefix; config stays empty
    /// until the registry supplies it.
    pub fn from_wire(wire: WireItem) -> Self {
        let widget_type = widget_type_of(&wire.i).to_string();
        Self {
            id: wire.i,
            widget_type,
            x: wire.x,
            y: wire.y,
            w: wire.w,
            h: wire.h,
            min_w: wire.min_w,
            max_w: wire.max_w,
            min_h: wire.min_h,
            max_h: wire.max_h,
            locked: wire.is_static,
            title: wire.title,
            config: None,
        }
    }

    /// Strip to the fields the store persists
    pub fn to_wire(&self) -> WireItem {
        WireItem {
            i: self.id.clone(),
            x: self.x,
            y: self.y,
            w: self.w,
            h: self.h,
            title: self.title.clone(),
            is_static: self.locked,
            min_w: self.min_w,
            max_w: self.max_w,
            min_h: self.min_h,
            max_h: self.max_h,
        }
    }

    /// Copy geometry reported by the grid, keeping widget-owned fields
    pub fn with_geometry(&self, wire: &WireItem) -> Self {
        Self {
            x: wire.x,
            y: wire.y,
            w: wire.w,
            h: wire.h,
            ..self.clone()
        }
    }
}

/// A named field update applied by [`crate::placement::set_widget_attribute`]
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetAttribute {
    Title(String),
    Locked(bool),
    Config(serde_json::Value),
    Height(u32),
}

impl WidgetAttribute {
    /// Field name as exposed to widget tiles
    pub fn name(&self) -> &'static str {
        match self {
            WidgetAttribute::Title(_) => "title",
            WidgetAttribute::Locked(_) => "locked",
            WidgetAttribute::Config(_) => "config",
            WidgetAttribute::Height(_) => "h",
        }
    }

    pub(crate) fn apply(&self, item: &LayoutItem) -> LayoutItem {
        let mut next = item.clone();
        match self {
            WidgetAttribute::Title(title) => next.title = title.clone(),
            WidgetAttribute::Locked(locked) => next.locked = *locked,
            WidgetAttribute::Config(config) => next.config = Some(config.clone()),
            WidgetAttribute::Height(h) => next.h = (*h).max(1),
        }
        next
    }
}

/// Widget type encoded in an item id
pub fn widget_type_of(id: &str) -> &str {
    id.split(ID_SEPARATOR).next().unwrap_or(id)
}

/// Generate a new id for a widget of the given type
pub fn widget_identifier(widget_type: &str) -> String {
    format!("{}{}{}", widget_type, ID_SEPARATOR, Uuid::new_v4())
}
