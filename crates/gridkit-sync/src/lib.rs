//! # GridKit Sync
//!
//! Persistence of layout documents against the remote template store.
//!
//! - **Template store**: the [`TemplateStore`] seam and its reqwest-backed
//!   [`HttpTemplateStore`]
//! - **Debouncer**: a single-slot coalescer where only the most recent call
//!   in a quiet window reaches the store
//! - **Synchronizer**: guards, debounced patching, failure notifications and
//!   default-template loading

pub mod debounce;
pub mod http;
pub mod store;
pub mod synchronizer;

pub use debounce::{Debounced, Debouncer};
pub use http::HttpTemplateStore;
pub use store::{default_template, DashboardTemplate, TemplateBase, TemplateStore};
pub use synchronizer::{PersistenceSynchronizer, SkipReason, SyncGuard, SyncOutcome};
