//! The layout document: one ordered item list per breakpoint.
//!
//! Documents are values. Every placement operation returns a new document
//! instead of editing one in place, so a reader holding the previous value
//! never observes a half-applied change.

use std::collections::{BTreeMap, BTreeSet};

use gridkit_core::LayoutError;

use crate::breakpoint::Breakpoint;
use crate::item::LayoutItem;
use crate::wire::{PartialTemplateConfig, TemplateConfig};

/// Widget placement across all breakpoints of one dashboard template
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutDocument {
    layouts: BTreeMap<Breakpoint, Vec<LayoutItem>>,
}

impl Default for LayoutDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutDocument {
    /// Empty document with an empty arrangement for every breakpoint
    pub fn new() -> Self {
        Self {
            layouts: Breakpoint::ALL.into_iter().map(|bp| (bp, Vec::new())).collect(),
        }
    }

    /// Convert a stored template config; absent breakpoints become empty
    pub fn from_template_config(config: &TemplateConfig) -> Self {
        let layouts = Breakpoint::ALL
            .into_iter()
            .map(|bp| {
                let items = config
                    .get(bp)
                    .unwrap_or_default()
                    .iter()
                    .cloned()
                    .map(LayoutItem::from_wire)
                    .collect();
                (bp, items)
            })
            .collect();
        Self { layouts }
    }

    /// Full wire config with every breakpoint present
    pub fn to_template_config(&self) -> TemplateConfig {
        self.to_partial_config(Breakpoint::ALL)
    }

    /// Wire config containing only the given breakpoints
    pub fn to_partial_config<I>(&self, breakpoints: I) -> PartialTemplateConfig
    where
        I: IntoIterator<Item = Breakpoint>,
    {
        let mut config = PartialTemplateConfig::default();
        for bp in breakpoints {
            config.set(bp, self.items(bp).iter().map(LayoutItem::to_wire).collect());
        }
        config
    }

    /// Items of one breakpoint in document order
    pub fn items(&self, breakpoint: Breakpoint) -> &[LayoutItem] {
        self.layouts
            .get(&breakpoint)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Iterate over all breakpoints, widest first
    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, &[LayoutItem])> {
        self.layouts.iter().map(|(bp, items)| (*bp, items.as_slice()))
    }

    /// New document with one breakpoint's arrangement replaced
    pub fn with_items(&self, breakpoint: Breakpoint, items: Vec<LayoutItem>) -> Self {
        let mut layouts = self.layouts.clone();
        layouts.insert(breakpoint, items);
        Self { layouts }
    }

    /// New document built by transforming every breakpoint's arrangement
    pub fn map_breakpoints<F>(&self, mut f: F) -> Self
    where
        F: FnMut(Breakpoint, &[LayoutItem]) -> Vec<LayoutItem>,
    {
        let layouts = self
            .layouts
            .iter()
            .map(|(bp, items)| (*bp, f(*bp, items)))
            .collect();
        Self { layouts }
    }

    pub fn find(&self, breakpoint: Breakpoint, id: &str) -> Option<&LayoutItem> {
        self.items(breakpoint).iter().find(|item| item.id == id)
    }

    /// Whether any breakpoint holds an item with this id
    pub fn contains_id(&self, id: &str) -> bool {
        self.layouts
            .values()
            .any(|items| items.iter().any(|item| item.id == id))
    }

    /// Breakpoints whose arrangement holds the id
    pub fn breakpoints_containing(&self, id: &str) -> Vec<Breakpoint> {
        self.layouts
            .iter()
            .filter(|(_, items)| items.iter().any(|item| item.id == id))
            .map(|(bp, _)| *bp)
            .collect()
    }

    /// True when no breakpoint holds any item
    pub fn is_empty(&self) -> bool {
        self.layouts.values().all(Vec::is_empty)
    }

    /// Check per-breakpoint id uniqueness, non-empty sizes and column bounds
    pub fn validate(&self) -> Result<(), LayoutError> {
        for (bp, items) in self.iter() {
            let mut seen = BTreeSet::new();
            for item in items {
                if !seen.insert(item.id.as_str()) {
                    return Err(LayoutError::DuplicateId {
                        id: item.id.clone(),
                        breakpoint: bp.to_string(),
                    });
                }
                if item.w == 0 || item.h == 0 {
                    return Err(LayoutError::EmptySize {
                        id: item.id.clone(),
                        w: item.w,
                        h: item.h,
                    });
                }
                if item.right() > bp.columns() {
                    return Err(LayoutError::OutOfBounds {
                        id: item.id.clone(),
                        breakpoint: bp.to_string(),
                        x: item.x,
                        w: item.w,
                        columns: bp.columns(),
                    });
                }
            }
        }
        Ok(())
    }
}
