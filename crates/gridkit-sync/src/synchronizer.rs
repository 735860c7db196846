//! Debounced persistence of layout changes.
//!
//! The synchronizer owns the debouncer in front of
//! [`TemplateStore::patch_template`], decides whether a change may be
//! persisted at all, and turns store failures into user-facing notifications
//! on the event bus.

use std::sync::Arc;
use std::time::Duration;

use gridkit_core::{AppEvent, EventBus, LayoutEvent, Notification, StoreError};
use gridkit_layout::{Breakpoint, PartialTemplateConfig};

use crate::debounce::{Debounced, Debouncer};
use crate::store::{default_template, DashboardTemplate, TemplateStore};

pub const PATCH_FAILED_TITLE: &str = "Failed to patch dashboard configuration";
pub const PATCH_FAILED_DESCRIPTION: &str = "Your dashboard changes were unable to be saved.";
pub const FETCH_FAILED_TITLE: &str = "Failed to fetch dashboard template";
pub const FETCH_FAILED_DESCRIPTION: &str = "Try reloading the page.";

/// Why a change was not persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The whole layout is locked
    Locked,
    /// No template is bound yet
    NoTemplate,
    /// No breakpoint is active
    NoBreakpoint,
    /// A widget drag from the bank is in progress
    DropPending,
    /// The host's first layout report after mount
    InitialRender,
}

/// Snapshot of the state that gates persistence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncGuard {
    pub layout_locked: bool,
    pub template_id: i64,
    pub breakpoint: Option<Breakpoint>,
    pub drop_pending: bool,
}

impl SyncGuard {
    /// The first failing condition, if any
    pub fn check(&self) -> Result<(), SkipReason> {
        if self.layout_locked {
            Err(SkipReason::Locked)
        } else if self.template_id < 0 {
            Err(SkipReason::NoTemplate)
        } else if self.breakpoint.is_none() {
            Err(SkipReason::NoBreakpoint)
        } else if self.drop_pending {
            Err(SkipReason::DropPending)
        } else {
            Ok(())
        }
    }
}

/// Result of one persistence request
#[derive(Debug, Clone)]
pub enum SyncOutcome {
    /// A guard failed; nothing was sent
    Skipped(SkipReason),
    /// A later request replaced this one
    Superseded,
    /// The store accepted the patch and returned the canonical template
    Saved(DashboardTemplate),
    /// The store rejected the patch; a notification was published
    Failed(StoreError),
}

/// Debounced template persistence bound to one store and event bus
pub struct PersistenceSynchronizer {
    store: Arc<dyn TemplateStore>,
    debouncer: Debouncer,
    events: Arc<EventBus>,
}

impl PersistenceSynchronizer {
    pub fn new(store: Arc<dyn TemplateStore>, events: Arc<EventBus>, window: Duration) -> Self {
        Self {
            store,
            debouncer: Debouncer::new(window),
            events,
        }
    }

    pub fn debounce_window(&self) -> Duration {
        self.debouncer.window()
    }

    /// Check the guard, then persist through the debouncer
    pub async fn persist_guarded(
        &self,
        guard: SyncGuard,
        partial: PartialTemplateConfig,
    ) -> SyncOutcome {
        if let Err(reason) = guard.check() {
            tracing::debug!("Skipping layout persistence: {:?}", reason);
            return SyncOutcome::Skipped(reason);
        }
        self.persist(guard.template_id, partial).await
    }

    /// Debounced patch of the given breakpoints
    pub async fn persist(&self, template_id: i64, partial: PartialTemplateConfig) -> SyncOutcome {
        let store = self.store.clone();
        let result = self
            .debouncer
            .run(|| async move { store.patch_template(template_id, &partial).await })
            .await;

        match result {
            Debounced::Superseded => SyncOutcome::Superseded,
            Debounced::Completed(Ok(template)) => {
                tracing::info!("Saved dashboard template {}", template.id);
                self.events.emit(AppEvent::Layout(LayoutEvent::LayoutSaved {
                    template_id: template.id,
                }));
                SyncOutcome::Saved(template)
            }
            Debounced::Completed(Err(err)) => {
                tracing::error!("Failed to patch template {}: {}", template_id, err);
                self.events.emit(AppEvent::Notification(Notification::danger(
                    PATCH_FAILED_TITLE,
                    PATCH_FAILED_DESCRIPTION,
                )));
                SyncOutcome::Failed(err)
            }
        }
    }

    /// Fetch the default template of a layout type.
    ///
    /// Publishes the fetch-failure notification on any error, including a
    /// template list without a default.
    pub async fn load_default(&self, layout_type: &str) -> Result<DashboardTemplate, StoreError> {
        let result = self
            .store
            .fetch_templates(layout_type)
            .await
            .and_then(|templates| {
                default_template(&templates)
                    .cloned()
                    .ok_or_else(|| StoreError::NoDefaultTemplate {
                        layout_type: layout_type.to_string(),
                    })
            });

        if let Err(err) = &result {
            tracing::error!("Failed to load {} template: {}", layout_type, err);
            self.events.emit(AppEvent::Notification(Notification::danger(
                FETCH_FAILED_TITLE,
                FETCH_FAILED_DESCRIPTION,
            )));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guard() -> SyncGuard {
        SyncGuard {
            layout_locked: false,
            template_id: 4,
            breakpoint: Some(Breakpoint::Lg),
            drop_pending: false,
        }
    }

    #[test]
    fn test_guard_passes_when_ready() {
        assert_eq!(guard().check(), Ok(()));
    }

    #[test]
    fn test_guard_reports_first_failure() {
        let g = SyncGuard {
            layout_locked: true,
            template_id: -1,
            ..guard()
        };
        assert_eq!(g.check(), Err(SkipReason::Locked));

        let g = SyncGuard {
            template_id: -1,
            ..guard()
        };
        assert_eq!(g.check(), Err(SkipReason::NoTemplate));

        let g = SyncGuard {
            breakpoint: None,
            drop_pending: true,
            ..guard()
        };
        assert_eq!(g.check(), Err(SkipReason::NoBreakpoint));

        let g = SyncGuard {
            drop_pending: true,
            ..guard()
        };
        assert_eq!(g.check(), Err(SkipReason::DropPending));
    }
}
