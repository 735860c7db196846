//! Template store wire format.
//!
//! The store keeps a per-breakpoint list of grid items. Items carry only
//! geometry, a title and the `static` lock flag; the widget type is encoded
//! in the id prefix (`"{widget_type}#{unique}"`) and widget config is not
//! persisted.

use serde::{Deserialize, Serialize};

use crate::breakpoint::Breakpoint;

/// One grid item as stored remotely
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireItem {
    /// Item id, `"{widget_type}#{unique}"`
    pub i: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    #[serde(default)]
    pub title: String,
    /// Lock flag, named after the grid library's `static` property
    #[serde(rename = "static", default, skip_serializing_if = "std::ops::Not::not")]
    pub is_static: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_w: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_w: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_h: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_h: Option<u32>,
}

impl WireItem {
    /// Geometry-only item, as emitted by the grid after a drag or resize
    pub fn new(i: impl Into<String>, x: u32, y: u32, w: u32, h: u32) -> Self {
        Self {
            i: i.into(),
            x,
            y,
            w,
            h,
            title: String::new(),
            is_static: false,
            min_w: None,
            max_w: None,
            min_h: None,
            max_h: None,
        }
    }
}

/// Breakpoint-keyed item lists.
///
/// A full config has every key present. The same type doubles as the partial
/// patch payload, in which only changed breakpoints are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xl: Option<Vec<WireItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lg: Option<Vec<WireItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md: Option<Vec<WireItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sm: Option<Vec<WireItem>>,
}

/// Patch payload containing only the breakpoints that changed
pub type PartialTemplateConfig = TemplateConfig;

impl TemplateConfig {
    /// Items for a breakpoint, if that key is present
    pub fn get(&self, breakpoint: Breakpoint) -> Option<&[WireItem]> {
        self.slot(breakpoint).as_deref()
    }

    /// Set the items for a breakpoint
    pub fn set(&mut self, breakpoint: Breakpoint, items: Vec<WireItem>) {
        *self.slot_mut(breakpoint) = Some(items);
    }

    /// Breakpoints present in this config, widest first
    pub fn breakpoints(&self) -> Vec<Breakpoint> {
        Breakpoint::ALL
            .into_iter()
            .filter(|bp| self.slot(*bp).is_some())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.breakpoints().is_empty()
    }

    fn slot(&self, breakpoint: Breakpoint) -> &Option<Vec<WireItem>> {
        match breakpoint {
            Breakpoint::Xl => &self.xl,
            Breakpoint::Lg => &self.lg,
            Breakpoint::Md => &self.md,
            Breakpoint::Sm => &self.sm,
        }
    }

    fn slot_mut(&mut self, breakpoint: Breakpoint) -> &mut Option<Vec<WireItem>> {
        match breakpoint {
            Breakpoint::Xl => &mut self.xl,
            Breakpoint::Lg => &mut self.lg,
            Breakpoint::Md => &mut self.md,
            Breakpoint::Sm => &mut self.sm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_item_field_names() {
        let mut item = WireItem::new("chart#1", 0, 2, 1, 3);
        item.is_static = true;
        item.max_h = Some(6);
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            json!({"i": "chart#1", "x": 0, "y": 2, "w": 1, "h": 3, "title": "", "static": true, "maxH": 6})
        );
    }

    #[test]
    fn test_wire_item_ignores_grid_only_fields() {
        let item: WireItem = serde_json::from_value(json!({
            "i": "a#1", "x": 1, "y": 0, "w": 2, "h": 2, "moved": false, "isDraggable": true
        }))
        .unwrap();
        assert_eq!(item, WireItem::new("a#1", 1, 0, 2, 2));
    }

    #[test]
    fn test_partial_config_omits_missing_breakpoints() {
        let mut partial = PartialTemplateConfig::default();
        assert!(partial.is_empty());
        partial.set(Breakpoint::Md, vec![WireItem::new("a#1", 0, 0, 1, 1)]);

        let value = serde_json::to_value(&partial).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["md"]);
        assert_eq!(partial.breakpoints(), vec![Breakpoint::Md]);
        assert!(partial.get(Breakpoint::Xl).is_none());
    }
}
