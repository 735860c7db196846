//! Interaction controller.
//!
//! Translates host events into placement operations on the shared
//! [`AppState`], hands changed breakpoints to the persistence synchronizer
//! and installs the canonical template the store answers with.
//!
//! The state lock is never held across an await point. A save result is
//! installed only if no local edit happened after its payload was captured;
//! otherwise the newer local document stays and its breakpoints remain dirty
//! for the next save.

use std::sync::Arc;

use async_trait::async_trait;

use gridkit_core::{thread_safe, AppEvent, EventBus, LayoutError, LayoutEvent, ThreadSafe};
use gridkit_layout::placement::{self, Direction, DropRequest};
use gridkit_layout::{
    select_breakpoint, Breakpoint, LayoutDocument, TemplateConfig, WidgetAttribute,
    WidgetRegistry, WireItem,
};
use gridkit_settings::{Config, GridSettings};
use gridkit_sync::{
    DashboardTemplate, PersistenceSynchronizer, SkipReason, SyncOutcome, TemplateStore,
};

use crate::host::{DropEvent, GridEventHandler, KeyEvent, ENTER_KEY};
use crate::render::{self, RenderedGrid, DROPPING_ITEM_ID};
use crate::state::AppState;

/// Controller for one dashboard grid
pub struct InteractionController {
    state: ThreadSafe<AppState>,
    registry: Arc<dyn WidgetRegistry>,
    sync: PersistenceSynchronizer,
    events: Arc<EventBus>,
    grid: GridSettings,
}

impl InteractionController {
    pub fn new(
        registry: Arc<dyn WidgetRegistry>,
        store: Arc<dyn TemplateStore>,
        events: Arc<EventBus>,
        config: &Config,
    ) -> Self {
        Self {
            state: thread_safe(AppState::default()),
            registry,
            sync: PersistenceSynchronizer::new(
                store,
                events.clone(),
                config.sync.debounce_window(),
            ),
            events,
            grid: config.grid.clone(),
        }
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> AppState {
        self.state.lock().clone()
    }

    /// Shared handle to the state, for hosts that render on their own schedule
    pub fn state(&self) -> ThreadSafe<AppState> {
        self.state.clone()
    }

    pub fn render(&self) -> RenderedGrid {
        let state = self.state.lock();
        render::render(&state, self.registry.as_ref(), &self.grid)
    }

    /// Load the default template and pick the breakpoint for the container.
    ///
    /// Does nothing if a template is already bound. The controller counts as
    /// loaded afterwards whether or not the fetch succeeded.
    pub async fn bootstrap(&self, container_width: u32) {
        if self.state.lock().template_id >= 0 {
            return;
        }

        let result = self.sync.load_default(&self.grid.layout_type).await;

        let loaded = {
            let mut state = self.state.lock();
            state.container_width = container_width;
            state.loaded = true;
            result.ok().map(|template| {
                let breakpoint = select_breakpoint(container_width);
                state.reconcile(self.hydrate(&template.template_config));
                state.template_id = template.id;
                state.breakpoint = Some(breakpoint);
                (template.id, breakpoint)
            })
        };

        // Handlers run inline and may lock the state themselves
        if let Some((template_id, breakpoint)) = loaded {
            tracing::info!(
                "Loaded template {} at {} ({}px)",
                template_id,
                breakpoint,
                container_width
            );
            self.publish(LayoutEvent::TemplateLoaded {
                template_id,
                breakpoint: breakpoint.to_string(),
            });
        }
    }

    pub fn set_layout_locked(&self, locked: bool) {
        self.state.lock().layout_locked = locked;
    }

    /// A drag from the widget bank entered the grid
    pub fn begin_drag(&self, widget_type: impl Into<String>) {
        self.state.lock().drop_candidate = Some(widget_type.into());
    }

    /// The drag left the grid without dropping
    pub fn cancel_drag(&self) {
        self.state.lock().drop_candidate = None;
    }

    /// Insert the dropped widget on every breakpoint.
    ///
    /// Returns the new item id, or `None` if the payload is not a registered
    /// widget type or no breakpoint is active.
    pub fn drop_widget(&self, event: &DropEvent) -> Option<String> {
        let mut state = self.state.lock();
        if state.layout_locked {
            return None;
        }
        let breakpoint = state.breakpoint?;

        let request = DropRequest {
            widget_type: event.payload.clone(),
            x: event.x,
            y: event.y,
            w: event.w,
            h: event.h,
        };
        let outcome = match placement::drop_registered(
            &state.document,
            breakpoint,
            &request,
            self.registry.as_ref(),
        ) {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::debug!("Ignoring drop: {}", err);
                return None;
            }
        };
        state.drop_candidate = None;
        state.replace_document(outcome.document, Breakpoint::ALL);
        drop(state);

        self.publish(LayoutEvent::WidgetDropped {
            id: outcome.id.clone(),
            widget_type: event.payload.clone(),
        });
        Some(outcome.id)
    }

    /// Adopt the geometry reported after a drag or resize and persist it
    pub async fn layout_changed(&self, reported: Vec<WireItem>) -> SyncOutcome {
        let (template_id, partial, revision) = {
            let mut state = self.state.lock();
            if state.initial_render {
                state.initial_render = false;
                return SyncOutcome::Skipped(SkipReason::InitialRender);
            }
            let guard = state.sync_guard();
            if let Err(reason) = guard.check() {
                tracing::debug!("Ignoring layout change: {:?}", reason);
                return SyncOutcome::Skipped(reason);
            }
            let Some(breakpoint) = state.breakpoint else {
                return SyncOutcome::Skipped(SkipReason::NoBreakpoint);
            };

            let reported: Vec<WireItem> = reported
                .into_iter()
                .filter(|item| item.i != DROPPING_ITEM_ID)
                .collect();
            let document = placement::apply_geometry(&state.document, breakpoint, &reported);
            state.replace_document(document, [breakpoint]);
            (state.template_id, state.dirty_payload(), state.revision())
        };

        let outcome = self.sync.persist(template_id, partial).await;
        self.settle(&outcome, revision);
        outcome
    }

    /// Switch the active slice; no items are moved between breakpoints
    pub fn breakpoint_changed(&self, breakpoint: Breakpoint) {
        let mut state = self.state.lock();
        let previous = state.breakpoint.replace(breakpoint);
        drop(state);

        if previous != Some(breakpoint) {
            tracing::debug!("Breakpoint {:?} -> {}", previous, breakpoint);
            self.publish(LayoutEvent::BreakpointChanged {
                from: previous.map(|bp| bp.to_string()),
                to: breakpoint.to_string(),
            });
        }
    }

    /// Record a new container width and follow the breakpoint it selects
    pub fn container_resized(&self, width: u32) {
        self.state.lock().container_width = width;
        self.breakpoint_changed(select_breakpoint(width));
    }

    /// `Enter` toggles the tile as the active item; other keys are ignored
    pub fn key_up(&self, event: &KeyEvent) -> bool {
        if event.code != ENTER_KEY {
            return false;
        }
        let mut state = self.state.lock();
        if state.active_item.as_deref() == Some(event.item_id.as_str()) {
            state.active_item = None;
        } else {
            state.active_item = Some(event.item_id.clone());
        }
        true
    }

    /// Arrow keys nudge the active item by one cell on the active breakpoint.
    ///
    /// Returns `None` when the key is not an arrow or the move is not allowed.
    pub async fn key_down(&self, code: &str) -> Option<SyncOutcome> {
        let direction = Direction::from_key_code(code)?;

        let (guard, partial, revision) = {
            let mut state = self.state.lock();
            if state.layout_locked || state.drop_pending() {
                return None;
            }
            let breakpoint = state.breakpoint?;
            let id = state.active_item.clone()?;
            let document = placement::move_item(&state.document, breakpoint, &id, direction)?;
            state.replace_document(document, [breakpoint]);
            (state.sync_guard(), state.dirty_payload(), state.revision())
        };

        let outcome = self.sync.persist_guarded(guard, partial).await;
        self.settle(&outcome, revision);
        Some(outcome)
    }

    /// Replace one field of an item on every breakpoint
    pub fn set_widget_attribute(
        &self,
        id: &str,
        attribute: WidgetAttribute,
    ) -> Result<(), LayoutError> {
        let mut state = self.state.lock();
        let touched = state.document.breakpoints_containing(id);
        if touched.is_empty() {
            return Err(LayoutError::ItemNotFound { id: id.to_string() });
        }
        tracing::debug!("Setting {} on {}", attribute.name(), id);
        let document = placement::set_widget_attribute(&state.document, id, &attribute);
        state.replace_document(document, touched);
        Ok(())
    }

    /// Remove an item from every breakpoint
    pub fn remove_widget(&self, id: &str) -> Result<(), LayoutError> {
        let mut state = self.state.lock();
        let touched = state.document.breakpoints_containing(id);
        if touched.is_empty() {
            return Err(LayoutError::ItemNotFound { id: id.to_string() });
        }
        let document = placement::remove_widget(&state.document, id);
        state.replace_document(document, touched);
        if state.active_item.as_deref() == Some(id) {
            state.active_item = None;
        }
        drop(state);

        self.publish(LayoutEvent::WidgetRemoved { id: id.to_string() });
        Ok(())
    }

    fn settle(&self, outcome: &SyncOutcome, revision: u64) {
        if let SyncOutcome::Saved(template) = outcome {
            self.install(template, revision);
        }
    }

    fn install(&self, template: &DashboardTemplate, revision: u64) {
        let mut state = self.state.lock();
        if state.revision() != revision {
            tracing::debug!(
                "Discarding saved template {}: local edits are newer",
                template.id
            );
            return;
        }
        let document = self.hydrate(&template.template_config);
        state.reconcile(document);
    }

    /// Build a document from stored config, filling widget config from the
    /// registry
    fn hydrate(&self, config: &TemplateConfig) -> LayoutDocument {
        LayoutDocument::from_template_config(config).map_breakpoints(|_, items| {
            items
                .iter()
                .map(|item| {
                    let mut item = item.clone();
                    item.config = self
                        .registry
                        .lookup(&item.widget_type)
                        .map(|definition| definition.config.clone());
                    item
                })
                .collect()
        })
    }

    fn publish(&self, event: LayoutEvent) {
        self.events.emit(AppEvent::Layout(event));
    }
}

#[async_trait]
impl GridEventHandler for InteractionController {
    async fn on_drop(&self, event: DropEvent) {
        self.drop_widget(&event);
    }

    async fn on_layout_change(&self, items: Vec<WireItem>) {
        self.layout_changed(items).await;
    }

    async fn on_breakpoint_change(&self, breakpoint: Breakpoint) {
        self.breakpoint_changed(breakpoint);
    }

    async fn on_key_up(&self, event: KeyEvent) {
        self.key_up(&event);
    }

    async fn on_key_down(&self, code: &str) {
        self.key_down(code).await;
    }
}
