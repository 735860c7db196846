use gridkit_core::{AppEvent, EventBus, EventBusConfig};
use gridkit_layout::{StaticWidgetRegistry, WidgetRegistry};
use gridkit_settings::Config;
use gridkit_sync::HttpTemplateStore;
use gridkit_ui::InteractionController;
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn test_registry_and_config_files() {
    let dir = TempDir::new().unwrap();
    let registry_path = dir.path().join("widgets.json");
    std::fs::write(
        &registry_path,
        r#"{"recentlyVisited": {"defaults": {"w": 1, "h": 4}, "config": {"title": "Recently visited"}}}"#,
    )
    .unwrap();

    let mut config = Config::new();
    config.grid.registry_path = Some(registry_path.clone());
    let config_path = dir.path().join("config.toml");
    config.save_to_file(&config_path).unwrap();

    let loaded = Config::load_or_default(&config_path).unwrap();
    let registry =
        StaticWidgetRegistry::load_from_file(loaded.grid.registry_path.as_deref().unwrap())
            .unwrap();
    assert!(registry.contains("recentlyVisited"));
}

#[tokio::test]
async fn test_unreachable_store_renders_empty_state() {
    let mut config = Config::new();
    config.store.base_url = "http://127.0.0.1:1/api".to_string();
    config.store.timeout_ms = 1000;

    let events = Arc::new(EventBus::with_config(EventBusConfig {
        enable_history: true,
        ..EventBusConfig::default()
    }));
    let store = Arc::new(HttpTemplateStore::new(&config.store).unwrap());
    let controller = InteractionController::new(
        Arc::new(StaticWidgetRegistry::new()),
        store,
        events.clone(),
        &config,
    );

    controller.bootstrap(1200).await;
    controller.container_resized(1200);

    let grid = controller.render();
    assert!(grid.show_empty_state);
    assert!(grid.items.is_empty());
    assert!(events
        .history()
        .iter()
        .any(|e| matches!(e, AppEvent::Notification(_))));
}
