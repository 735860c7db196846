//! Render slice for the grid host.

use serde::Serialize;

use gridkit_layout::{Breakpoint, LayoutItem, WidgetRegistry};
use gridkit_settings::GridSettings;

use crate::state::AppState;

/// Id of the placeholder shown while a widget is dragged over the grid
pub const DROPPING_ITEM_ID: &str = "__dropping-elem__";

/// Title given to the dropping placeholder
const DROPPING_ITEM_TITLE: &str = "New title";

/// One tile as handed to the host
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedItem {
    pub id: String,
    pub widget_type: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    pub title: String,
    pub locked: bool,
    pub active: bool,
    pub config: Option<serde_json::Value>,
}

/// Everything the host needs to draw the active breakpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedGrid {
    pub breakpoint: Option<Breakpoint>,
    pub columns: u32,
    /// Width of one column in pixels
    pub col_width: f64,
    pub row_height: u32,
    pub margin: u32,
    pub items: Vec<RenderedItem>,
    pub dropping_item: Option<RenderedItem>,
    pub show_empty_state: bool,
    pub is_draggable: bool,
    pub is_resizable: bool,
    pub is_droppable: bool,
}

/// `(container - 2 * padding - margin * (columns - 1)) / columns`, floored at 0
pub fn column_width(container_width: u32, padding: u32, margin: u32, columns: u32) -> f64 {
    if columns == 0 {
        return 0.0;
    }
    let gaps = f64::from(margin) * f64::from(columns - 1);
    let usable = f64::from(container_width) - 2.0 * f64::from(padding) - gaps;
    (usable / f64::from(columns)).max(0.0)
}

pub(crate) fn render(
    state: &AppState,
    registry: &dyn WidgetRegistry,
    grid: &GridSettings,
) -> RenderedGrid {
    let columns = state.breakpoint.map(Breakpoint::columns).unwrap_or(0);
    let locked = state.layout_locked;

    let items: Vec<RenderedItem> = state
        .active_items()
        .iter()
        .filter_map(|item| {
            let definition = registry.lookup(&item.widget_type)?;
            Some(rendered(
                item,
                locked,
                state.active_item.as_deref() == Some(item.id.as_str()),
                item.config.clone().unwrap_or_else(|| definition.config.clone()),
            ))
        })
        .collect();

    let dropping_item = state.drop_candidate.as_deref().and_then(|widget_type| {
        let definition = registry.lookup(widget_type)?;
        Some(RenderedItem {
            id: DROPPING_ITEM_ID.to_string(),
            widget_type: widget_type.to_string(),
            x: 0,
            y: 0,
            w: definition.defaults.w,
            h: definition.defaults.h,
            title: DROPPING_ITEM_TITLE.to_string(),
            locked: false,
            active: false,
            config: Some(definition.config.clone()),
        })
    });

    RenderedGrid {
        breakpoint: state.breakpoint,
        columns,
        col_width: column_width(
            state.container_width,
            grid.container_padding,
            grid.margin,
            columns,
        ),
        row_height: grid.row_height,
        margin: grid.margin,
        show_empty_state: state.active_items().is_empty()
            && !state.drop_pending()
            && state.loaded,
        items,
        dropping_item,
        is_draggable: !locked,
        is_resizable: !locked,
        is_droppable: !locked,
    }
}

fn rendered(
    item: &LayoutItem,
    layout_locked: bool,
    active: bool,
    config: serde_json::Value,
) -> RenderedItem {
    RenderedItem {
        id: item.id.clone(),
        widget_type: item.widget_type.clone(),
        x: item.x,
        y: item.y,
        w: item.w,
        h: item.h,
        title: item.title.clone(),
        locked: layout_locked || item.locked,
        active,
        config: Some(config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridkit_layout::{
        StaticWidgetRegistry, WidgetDefaults, WidgetDefinition, WireItem,
    };
    use serde_json::json;

    fn registry() -> StaticWidgetRegistry {
        StaticWidgetRegistry::new().with_widget(
            "chart",
            WidgetDefinition {
                defaults: WidgetDefaults::new(2, 3),
                config: json!({"icon": "chart"}),
            },
        )
    }

    fn state() -> AppState {
        let mut state = AppState::new(false);
        state.breakpoint = Some(Breakpoint::Xl);
        state.container_width = 1264;
        state.loaded = true;
        let items = vec![
            LayoutItem::from_wire(WireItem::new("chart#1", 0, 0, 2, 3)),
            LayoutItem::from_wire(WireItem::new("retired#1", 2, 0, 1, 1)),
        ];
        state.document = state.document.with_items(Breakpoint::Xl, items);
        state
    }

    #[test]
    fn test_column_width() {
        assert_eq!(column_width(1264, 0, 16, 4), 304.0);
        assert_eq!(column_width(500, 10, 16, 1), 480.0);
        assert_eq!(column_width(10, 0, 16, 4), 0.0);
        assert_eq!(column_width(1000, 0, 16, 0), 0.0);
    }

    #[test]
    fn test_unknown_widgets_are_hidden() {
        let grid = render(&state(), &registry(), &GridSettings::default());
        assert_eq!(grid.items.len(), 1);
        assert_eq!(grid.items[0].id, "chart#1");
        assert_eq!(grid.items[0].config, Some(json!({"icon": "chart"})));
        assert_eq!(grid.col_width, 304.0);
        assert!(!grid.show_empty_state);
    }

    #[test]
    fn test_locked_layout_locks_every_tile() {
        let mut state = state();
        state.layout_locked = true;
        let grid = render(&state, &registry(), &GridSettings::default());
        assert!(grid.items.iter().all(|item| item.locked));
        assert!(!grid.is_draggable && !grid.is_resizable && !grid.is_droppable);
    }

    #[test]
    fn test_dropping_placeholder_and_empty_state() {
        let mut state = state();
        state.document = gridkit_layout::LayoutDocument::new();
        let grid = render(&state, &registry(), &GridSettings::default());
        assert!(grid.show_empty_state);

        state.drop_candidate = Some("chart".to_string());
        let grid = render(&state, &registry(), &GridSettings::default());
        assert!(!grid.show_empty_state);
        let placeholder = grid.dropping_item.unwrap();
        assert_eq!(placeholder.id, DROPPING_ITEM_ID);
        assert_eq!((placeholder.w, placeholder.h), (2, 3));

        state.drop_candidate = Some("unknown".to_string());
        assert!(render(&state, &registry(), &GridSettings::default())
            .dropping_item
            .is_none());
    }

    #[test]
    fn test_active_item_flag() {
        let mut state = state();
        state.active_item = Some("chart#1".to_string());
        let grid = render(&state, &registry(), &GridSettings::default());
        assert!(grid.items[0].active);
    }
}
