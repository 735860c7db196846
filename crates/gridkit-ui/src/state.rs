//! Application state owned by the interaction controller.

use std::collections::BTreeSet;

use gridkit_layout::{Breakpoint, LayoutDocument, LayoutItem, PartialTemplateConfig};
use gridkit_sync::SyncGuard;

/// Template id before bootstrap binds one
pub const UNBOUND_TEMPLATE_ID: i64 = -1;

/// Everything the controller tracks between host events.
///
/// Document changes go through [`AppState::replace_document`] or
/// [`AppState::reconcile`], which keep the revision counter and the set of
/// breakpoints edited since the last save in step with the document.
#[derive(Debug, Clone)]
pub struct AppState {
    pub document: LayoutDocument,
    pub breakpoint: Option<Breakpoint>,
    pub template_id: i64,
    /// Item focused for keyboard moves
    pub active_item: Option<String>,
    /// Widget type being dragged from the widget bank
    pub drop_candidate: Option<String>,
    pub layout_locked: bool,
    /// True until the host's first layout report has been swallowed
    pub initial_render: bool,
    /// Set once bootstrap finished, successfully or not
    pub loaded: bool,
    pub container_width: u32,
    dirty: BTreeSet<Breakpoint>,
    revision: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            document: LayoutDocument::new(),
            breakpoint: None,
            template_id: UNBOUND_TEMPLATE_ID,
            active_item: None,
            drop_candidate: None,
            layout_locked: false,
            initial_render: true,
            loaded: false,
            container_width: 0,
            dirty: BTreeSet::new(),
            revision: 0,
        }
    }
}

impl AppState {
    pub fn new(layout_locked: bool) -> Self {
        Self {
            layout_locked,
            ..Self::default()
        }
    }

    /// Items of the active breakpoint; empty when none is active
    pub fn active_items(&self) -> &[LayoutItem] {
        match self.breakpoint {
            Some(bp) => self.document.items(bp),
            None => &[],
        }
    }

    pub fn drop_pending(&self) -> bool {
        self.drop_candidate.is_some()
    }

    pub fn sync_guard(&self) -> SyncGuard {
        SyncGuard {
            layout_locked: self.layout_locked,
            template_id: self.template_id,
            breakpoint: self.breakpoint,
            drop_pending: self.drop_pending(),
        }
    }

    /// Install a locally edited document and mark the touched breakpoints
    pub fn replace_document<I>(&mut self, document: LayoutDocument, touched: I)
    where
        I: IntoIterator<Item = Breakpoint>,
    {
        self.document = document;
        self.dirty.extend(touched);
        self.revision += 1;
    }

    /// Install the canonical document returned by the store
    pub fn reconcile(&mut self, document: LayoutDocument) {
        self.document = document;
        self.dirty.clear();
        self.revision += 1;
    }

    /// Breakpoints edited since the last successful save
    pub fn dirty(&self) -> impl Iterator<Item = Breakpoint> + '_ {
        self.dirty.iter().copied()
    }

    /// Wire payload of every dirty breakpoint
    pub fn dirty_payload(&self) -> PartialTemplateConfig {
        self.document.to_partial_config(self.dirty())
    }

    /// Counter bumped on every document replacement
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
