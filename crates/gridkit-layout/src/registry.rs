//! Widget registry: default size and config per widget type.
//!
//! The registry itself is owned by the host application; the engine only
//! looks entries up through [`WidgetRegistry`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use gridkit_core::{Error, Result};

/// Default grid size of a freshly dropped widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetDefaults {
    pub w: u32,
    pub h: u32,
    #[serde(default)]
    pub min_w: Option<u32>,
    #[serde(default)]
    pub max_w: Option<u32>,
    #[serde(default)]
    pub min_h: Option<u32>,
    #[serde(default)]
    pub max_h: Option<u32>,
}

impl WidgetDefaults {
    pub fn new(w: u32, h: u32) -> Self {
        Self {
            w,
            h,
            min_w: None,
            max_w: None,
            min_h: None,
            max_h: None,
        }
    }
}

/// Registry entry for one widget type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetDefinition {
    pub defaults: WidgetDefaults,
    #[serde(default)]
    pub config: serde_json::Value,
}

/// Lookup of widget types known to the host
pub trait WidgetRegistry: Send + Sync {
    /// Definition for a widget type, or `None` if the type is unknown
    fn lookup(&self, widget_type: &str) -> Option<&WidgetDefinition>;

    fn contains(&self, widget_type: &str) -> bool {
        self.lookup(widget_type).is_some()
    }
}

/// Registry backed by an in-memory map
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticWidgetRegistry {
    widgets: HashMap<String, WidgetDefinition>,
}

impl StaticWidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style registration
    pub fn with_widget(mut self, widget_type: impl Into<String>, def: WidgetDefinition) -> Self {
        self.register(widget_type, def);
        self
    }

    pub fn register(&mut self, widget_type: impl Into<String>, def: WidgetDefinition) {
        self.widgets.insert(widget_type.into(), def);
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Load a registry from a JSON object keyed by widget type
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let registry: Self = serde_json::from_str(&content)
            .map_err(|e| Error::other(format!("Invalid widget registry: {}", e)))?;
        tracing::debug!(
            "Loaded {} widget definitions from {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }
}

impl WidgetRegistry for StaticWidgetRegistry {
    fn lookup(&self, widget_type: &str) -> Option<&WidgetDefinition> {
        self.widgets.get(widget_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup() {
        let registry = StaticWidgetRegistry::new().with_widget(
            "recentlyVisited",
            WidgetDefinition {
                defaults: WidgetDefaults::new(1, 4),
                config: json!({"title": "Recently visited"}),
            },
        );
        assert!(registry.contains("recentlyVisited"));
        assert!(!registry.contains("nope"));
        assert_eq!(
            registry.lookup("recentlyVisited").map(|d| d.defaults.h),
            Some(4)
        );
    }

    #[test]
    fn test_deserialize_registry_map() {
        let registry: StaticWidgetRegistry = serde_json::from_value(json!({
            "chart": {"defaults": {"w": 2, "h": 3, "maxH": 6}, "config": {"icon": "chart"}},
            "notes": {"defaults": {"w": 1, "h": 1}}
        }))
        .unwrap();
        assert_eq!(registry.len(), 2);
        let chart = registry.lookup("chart").unwrap();
        assert_eq!(chart.defaults.max_h, Some(6));
        assert_eq!(registry.lookup("notes").unwrap().config, serde_json::Value::Null);
    }
}
