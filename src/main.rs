//! Headless driver: loads configuration and the widget registry, bootstraps
//! the default template for a container width and prints the render slice.
//!
//! Usage: `gridkit [CONFIG_PATH] [CONTAINER_WIDTH]`

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use gridkit::{
    init_logging, AppEvent, Config, EventBus, EventCategory, EventFilter, HttpTemplateStore,
    InteractionController, StaticWidgetRegistry, BUILD_DATE, VERSION,
};

const DEFAULT_CONTAINER_WIDTH: u32 = 1200;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::info!("GridKit {} (built {})", VERSION, BUILD_DATE);

    let mut args = std::env::args().skip(1);
    let config_path = match args.next() {
        Some(path) => PathBuf::from(path),
        None => Config::default_path()?,
    };
    let width = args
        .next()
        .map(|w| w.parse::<u32>())
        .transpose()
        .context("Container width must be a positive integer")?
        .unwrap_or(DEFAULT_CONTAINER_WIDTH);

    let config = Config::load_or_default(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;

    let registry = match &config.grid.registry_path {
        Some(path) => StaticWidgetRegistry::load_from_file(path)
            .with_context(|| format!("Failed to load widget registry {}", path.display()))?,
        None => StaticWidgetRegistry::new(),
    };

    let events = Arc::new(EventBus::new());
    events.subscribe(
        EventFilter::Categories(vec![EventCategory::Notification]),
        |event| {
            if let AppEvent::Notification(n) = event {
                tracing::warn!("[{}] {}: {}", n.variant, n.title, n.description);
            }
        },
    );

    let store = Arc::new(HttpTemplateStore::new(&config.store)?);
    let controller = InteractionController::new(Arc::new(registry), store, events, &config);
    controller.bootstrap(width).await;

    println!("{}", serde_json::to_string_pretty(&controller.render())?);
    Ok(())
}
