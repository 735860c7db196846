//! # GridKit
//!
//! A responsive dashboard grid layout engine:
//! - Widget placement tracked per screen-size breakpoint (`xl`, `lg`, `md`, `sm`)
//! - Drop placement with a single-pass vertical collision push
//! - Keyboard-driven repositioning of the active tile
//! - Debounced, last-write-wins persistence to a remote template store
//!
//! ## Architecture
//!
//! GridKit is organized as a workspace with multiple crates:
//!
//! 1. **gridkit-core** - Error types, event bus, shared-state aliases
//! 2. **gridkit-layout** - Breakpoints, layout document, placement engine, wire format
//! 3. **gridkit-settings** - Configuration files
//! 4. **gridkit-sync** - Template store client, debouncer, persistence synchronizer
//! 5. **gridkit-ui** - Interaction controller and render boundary
//! 6. **gridkit** - Re-exports and the headless driver binary

pub use gridkit_core::{
    AppEvent, Error, EventBus, EventBusConfig, EventCategory, EventFilter, LayoutError,
    LayoutEvent, Notification, NotificationVariant, Result, StoreError,
};

pub use gridkit_layout::{
    placement, select_breakpoint, Breakpoint, Direction, DropOutcome, DropRequest,
    LayoutDocument, LayoutItem, PartialTemplateConfig, StaticWidgetRegistry, TemplateConfig,
    WidgetAttribute, WidgetDefaults, WidgetDefinition, WidgetRegistry, WireItem,
};

pub use gridkit_settings::{Config, GridSettings, SettingsError, StoreSettings, SyncSettings};

pub use gridkit_sync::{
    DashboardTemplate, Debounced, Debouncer, HttpTemplateStore, PersistenceSynchronizer,
    SkipReason, SyncGuard, SyncOutcome, TemplateStore,
};

pub use gridkit_ui::{
    AppState, DropEvent, GridEventHandler, InteractionController, KeyEvent, RenderedGrid,
    RenderedItem,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty formatted output on stderr, keeping stdout for render output
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
