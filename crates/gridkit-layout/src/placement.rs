//! Placement engine.
//!
//! Pure functions from a [`LayoutDocument`] to a new one:
//! - [`drop_widget`]: insert a widget on every breakpoint and push colliding
//!   items down; [`drop_registered`] resolves the widget type first
//! - [`move_item`]: one-cell keyboard nudge on a single breakpoint
//! - [`apply_geometry`]: adopt positions reported by the grid after a drag
//!   or resize
//! - [`set_widget_attribute`] / [`remove_widget`]: per-id updates on every
//!   breakpoint
//!
//! # Collision resolution
//!
//! Drop uses a single deterministic pass. Each pre-existing item whose span
//! reaches past the new item's left edge and is not entirely above the new
//! item's top is moved down by its own height. Pushed items are not checked
//! again against each other, so a push can leave a secondary overlap in
//! place. This is a known limitation of the heuristic and is kept as is;
//! keyboard moves perform no collision pass at all.

use crate::breakpoint::Breakpoint;
use crate::document::LayoutDocument;
use crate::item::{widget_identifier, LayoutItem, WidgetAttribute};
use crate::registry::{WidgetDefinition, WidgetRegistry};
use crate::wire::WireItem;
use gridkit_core::LayoutError;

/// Title given to freshly dropped widgets
pub const NEW_WIDGET_TITLE: &str = "New title";

/// A widget dropped on a grid cell of the active breakpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropRequest {
    pub widget_type: String,
    pub x: u32,
    pub y: u32,
    /// Dropped width; defaults to the registry width
    pub w: Option<u32>,
    /// Dropped height; defaults to the registry height
    pub h: Option<u32>,
}

impl DropRequest {
    pub fn at(widget_type: impl Into<String>, x: u32, y: u32) -> Self {
        Self {
            widget_type: widget_type.into(),
            x,
            y,
            w: None,
            h: None,
        }
    }
}

/// Result of a successful drop
#[derive(Debug, Clone, PartialEq)]
pub struct DropOutcome {
    pub document: LayoutDocument,
    /// Id shared by the new item on every breakpoint
    pub id: String,
}

/// Keyboard nudge direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Map a DOM-style key code (`ArrowUp`, ...) to a direction
    pub fn from_key_code(code: &str) -> Option<Self> {
        match code {
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Insert a widget on every breakpoint.
///
/// The active breakpoint receives the dropped geometry; the others get the
/// registry size with width and column clamped to their column count.
pub fn drop_widget(
    doc: &LayoutDocument,
    active: Breakpoint,
    request: &DropRequest,
    definition: &WidgetDefinition,
) -> DropOutcome {
    drop_widget_with(doc, active, request, definition, widget_identifier)
}

/// [`drop_widget`] for a type resolved through the registry
pub fn drop_registered(
    doc: &LayoutDocument,
    active: Breakpoint,
    request: &DropRequest,
    registry: &dyn WidgetRegistry,
) -> Result<DropOutcome, LayoutError> {
    let definition =
        registry
            .lookup(&request.widget_type)
            .ok_or_else(|| LayoutError::UnknownWidgetType {
                widget_type: request.widget_type.clone(),
            })?;
    Ok(drop_widget(doc, active, request, definition))
}

/// [`drop_widget`] with a caller-supplied id generator.
///
/// The generator is called until it yields an id that no breakpoint of the
/// document already holds.
pub fn drop_widget_with<G>(
    doc: &LayoutDocument,
    active: Breakpoint,
    request: &DropRequest,
    definition: &WidgetDefinition,
    generate_id: G,
) -> DropOutcome
where
    G: FnMut(&str) -> String,
{
    let id = unique_widget_id(doc, &request.widget_type, generate_id);
    let defaults = definition.defaults;

    let document = doc.map_breakpoints(|bp, items| {
        let columns = bp.columns();
        let (w, h) = if bp == active {
            (
                request.w.unwrap_or(defaults.w),
                request.h.unwrap_or(defaults.h),
            )
        } else {
            (defaults.w, defaults.h)
        };
        let w = w.clamp(1, columns);
        let placed = LayoutItem {
            id: id.clone(),
            widget_type: request.widget_type.clone(),
            x: request.x.min(columns - w),
            y: request.y,
            w,
            h: h.max(1),
            min_w: defaults.min_w,
            max_w: defaults.max_w,
            min_h: defaults.min_h,
            max_h: defaults.max_h,
            locked: false,
            title: NEW_WIDGET_TITLE.to_string(),
            config: Some(definition.config.clone()),
        };
        push_down_colliding(items, placed)
    });

    tracing::debug!("Dropped {} on {}", id, active);
    DropOutcome { document, id }
}

/// Draw ids until one is free across all breakpoints
pub fn unique_widget_id<G>(doc: &LayoutDocument, widget_type: &str, mut generate_id: G) -> String
where
    G: FnMut(&str) -> String,
{
    loop {
        let id = generate_id(widget_type);
        if !doc.contains_id(&id) {
            return id;
        }
        tracing::warn!("Generated widget id {} already in use, retrying", id);
    }
}

/// Single-pass vertical push; the new item goes first in the result.
fn push_down_colliding(existing: &[LayoutItem], placed: LayoutItem) -> Vec<LayoutItem> {
    let mut result = Vec::with_capacity(existing.len() + 1);
    let (left, top) = (placed.x, placed.y);
    result.push(placed);
    for item in existing {
        if item.right() > left && item.bottom() > top {
            result.push(LayoutItem {
                y: item.y + item.h,
                ..item.clone()
            });
        } else {
            result.push(item.clone());
        }
    }
    result
}

/// Move one item by a single cell on one breakpoint.
///
/// Up and left stop at zero. Down is unbounded; right stops where the item
/// would leave the breakpoint's columns. Returns `None` if the item is not on
/// that breakpoint.
pub fn move_item(
    doc: &LayoutDocument,
    breakpoint: Breakpoint,
    id: &str,
    direction: Direction,
) -> Option<LayoutDocument> {
    let current = doc.find(breakpoint, id)?;
    let mut moved = current.clone();
    match direction {
        Direction::Up => moved.y = moved.y.saturating_sub(1),
        Direction::Down => moved.y += 1,
        Direction::Left => moved.x = moved.x.saturating_sub(1),
        Direction::Right => {
            moved.x = (moved.x + 1).min(breakpoint.columns().saturating_sub(moved.w))
        }
    }

    let items = doc
        .items(breakpoint)
        .iter()
        .map(|item| {
            if item.id == id {
                moved.clone()
            } else {
                item.clone()
            }
        })
        .collect();
    Some(doc.with_items(breakpoint, items))
}

/// Adopt the item list reported by the grid for one breakpoint.
///
/// Known ids keep their widget-owned fields and take the reported geometry;
/// unknown ids are built from the wire form. Widths and columns are clamped
/// to the breakpoint.
pub fn apply_geometry(
    doc: &LayoutDocument,
    breakpoint: Breakpoint,
    reported: &[WireItem],
) -> LayoutDocument {
    let columns = breakpoint.columns();
    let items = reported
        .iter()
        .map(|wire| {
            let mut item = match doc.find(breakpoint, &wire.i) {
                Some(existing) => existing.with_geometry(wire),
                None => LayoutItem::from_wire(wire.clone()),
            };
            item.w = item.w.clamp(1, columns);
            item.h = item.h.max(1);
            item.x = item.x.min(columns - item.w);
            item
        })
        .collect();
    doc.with_items(breakpoint, items)
}

/// Replace a field on the item with this id, on every breakpoint
pub fn set_widget_attribute(
    doc: &LayoutDocument,
    id: &str,
    attribute: &WidgetAttribute,
) -> LayoutDocument {
    doc.map_breakpoints(|_, items| {
        items
            .iter()
            .map(|item| {
                if item.id == id {
                    attribute.apply(item)
                } else {
                    item.clone()
                }
            })
            .collect()
    })
}

/// Remove the item with this id from every breakpoint
pub fn remove_widget(doc: &LayoutDocument, id: &str) -> LayoutDocument {
    doc.map_breakpoints(|_, items| items.iter().filter(|item| item.id != id).cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::WidgetDefaults;
    use serde_json::json;

    fn definition(w: u32, h: u32) -> WidgetDefinition {
        WidgetDefinition {
            defaults: WidgetDefaults::new(w, h),
            config: json!({"icon": "x"}),
        }
    }

    fn item(id: &str, x: u32, y: u32, w: u32, h: u32) -> LayoutItem {
        LayoutItem::from_wire(WireItem::new(id, x, y, w, h))
    }

    fn doc_with(bp: Breakpoint, items: Vec<LayoutItem>) -> LayoutDocument {
        LayoutDocument::new().with_items(bp, items)
    }

    #[test]
    fn test_push_down_puts_new_item_first() {
        let existing = vec![item("a#1", 0, 0, 2, 2)];
        let out = push_down_colliding(&existing, item("b#1", 1, 0, 2, 2));
        assert_eq!(out[0].id, "b#1");
        assert_eq!(out[1].y, 2);
    }

    #[test]
    fn test_push_uses_pushed_items_own_height() {
        let existing = vec![item("a#1", 0, 1, 1, 5)];
        let out = push_down_colliding(&existing, item("b#1", 0, 0, 1, 1));
        assert_eq!(out[1].y, 6);
    }

    #[test]
    fn test_item_left_of_drop_is_not_pushed() {
        let existing = vec![item("a#1", 0, 0, 1, 2)];
        let out = push_down_colliding(&existing, item("b#1", 2, 0, 1, 2));
        assert_eq!(out[1].y, 0);
    }

    #[test]
    fn test_drop_synthesizes_clamped_variants() {
        let doc = LayoutDocument::new();
        let request = DropRequest::at("chart", 3, 1);
        let outcome = drop_widget(&doc, Breakpoint::Xl, &request, &definition(3, 2));

        let xl = outcome.document.find(Breakpoint::Xl, &outcome.id).unwrap();
        assert_eq!((xl.x, xl.w), (1, 3));
        let md = outcome.document.find(Breakpoint::Md, &outcome.id).unwrap();
        assert_eq!((md.x, md.w, md.h), (0, 2, 2));
        let sm = outcome.document.find(Breakpoint::Sm, &outcome.id).unwrap();
        assert_eq!((sm.x, sm.w), (0, 1));
        assert_eq!(sm.title, NEW_WIDGET_TITLE);
        assert_eq!(sm.config, Some(json!({"icon": "x"})));
        assert!(outcome.document.validate().is_ok());
    }

    #[test]
    fn test_drop_uses_exact_geometry_on_active_breakpoint() {
        let doc = LayoutDocument::new();
        let request = DropRequest {
            widget_type: "chart".to_string(),
            x: 1,
            y: 4,
            w: Some(2),
            h: Some(5),
        };
        let outcome = drop_widget(&doc, Breakpoint::Lg, &request, &definition(1, 1));
        let lg = outcome.document.find(Breakpoint::Lg, &outcome.id).unwrap();
        assert_eq!((lg.x, lg.y, lg.w, lg.h), (1, 4, 2, 5));
        let xl = outcome.document.find(Breakpoint::Xl, &outcome.id).unwrap();
        assert_eq!((xl.x, xl.y, xl.w, xl.h), (1, 4, 1, 1));
    }

    #[test]
    fn test_move_clamps_and_leaves_other_breakpoints() {
        let doc = doc_with(Breakpoint::Lg, vec![item("a#1", 0, 0, 1, 1)])
            .with_items(Breakpoint::Md, vec![item("a#1", 0, 0, 1, 1)]);

        let up = move_item(&doc, Breakpoint::Lg, "a#1", Direction::Up).unwrap();
        assert_eq!(up, doc);
        let left = move_item(&doc, Breakpoint::Lg, "a#1", Direction::Left).unwrap();
        assert_eq!(left, doc);

        let down = move_item(&doc, Breakpoint::Lg, "a#1", Direction::Down).unwrap();
        assert_eq!(down.find(Breakpoint::Lg, "a#1").unwrap().y, 1);
        assert_eq!(down.find(Breakpoint::Md, "a#1").unwrap().y, 0);

        assert!(move_item(&doc, Breakpoint::Xl, "a#1", Direction::Down).is_none());
    }

    #[test]
    fn test_move_right_stops_at_column_bound() {
        let doc = doc_with(Breakpoint::Md, vec![item("a#1", 0, 0, 1, 1)]);
        let once = move_item(&doc, Breakpoint::Md, "a#1", Direction::Right).unwrap();
        assert_eq!(once.find(Breakpoint::Md, "a#1").unwrap().x, 1);
        let twice = move_item(&once, Breakpoint::Md, "a#1", Direction::Right).unwrap();
        assert_eq!(twice.find(Breakpoint::Md, "a#1").unwrap().x, 1);
    }

    #[test]
    fn test_direction_from_key_code() {
        assert_eq!(Direction::from_key_code("ArrowUp"), Some(Direction::Up));
        assert_eq!(Direction::from_key_code("ArrowRight"), Some(Direction::Right));
        assert_eq!(Direction::from_key_code("Enter"), None);
    }

    #[test]
    fn test_apply_geometry_keeps_widget_fields() {
        let mut a = item("a#1", 0, 0, 1, 1);
        a.title = "Kept".to_string();
        a.config = Some(json!({"k": 1}));
        let doc = doc_with(Breakpoint::Lg, vec![a]);

        let reported = vec![
            WireItem::new("a#1", 2, 3, 1, 2),
            WireItem::new("b#9", 2, 0, 5, 1),
        ];
        let next = apply_geometry(&doc, Breakpoint::Lg, &reported);
        let a = next.find(Breakpoint::Lg, "a#1").unwrap();
        assert_eq!((a.x, a.y, a.h), (2, 3, 2));
        assert_eq!(a.title, "Kept");
        assert_eq!(a.config, Some(json!({"k": 1})));

        let b = next.find(Breakpoint::Lg, "b#9").unwrap();
        assert_eq!((b.x, b.w), (0, 3));
        assert_eq!(b.widget_type, "b");
    }

    #[test]
    fn test_attribute_and_removal_touch_every_breakpoint() {
        let doc = doc_with(Breakpoint::Xl, vec![item("a#1", 0, 0, 1, 1), item("b#1", 1, 0, 1, 1)])
            .with_items(Breakpoint::Sm, vec![item("a#1", 0, 0, 1, 1)]);

        let titled = set_widget_attribute(&doc, "a#1", &WidgetAttribute::Title("T".into()));
        assert_eq!(titled.find(Breakpoint::Xl, "a#1").unwrap().title, "T");
        assert_eq!(titled.find(Breakpoint::Sm, "a#1").unwrap().title, "T");
        assert_eq!(titled.find(Breakpoint::Xl, "b#1").unwrap().title, "");

        let removed = remove_widget(&titled, "a#1");
        assert!(!removed.contains_id("a#1"));
        assert!(removed.contains_id("b#1"));
    }
}
