use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime};

use curio_core::config::{AppConfig, LatencyConfig};
use curio_core::{ItemForm, ItemStatus};
use curio_lib::bootstrap::{wire_dependencies, AppRuntime};
use curio_lib::commands::{availability, catalog, watch};
use curio_lib::view::TerminalView;

fn instant_config(path: std::path::PathBuf) -> AppConfig {
    AppConfig {
        storage_backend: "file".into(),
        storage_path: path,
        latency: LatencyConfig {
            fetch_ms: Some(0),
            purchase_ms: Some(0),
            toggle_ms: Some(0),
            create_ms: Some(0),
        },
        ..Default::default()
    }
}

fn runtime(config: &AppConfig, now: Option<NaiveDateTime>) -> AppRuntime {
    AppRuntime::new(wire_dependencies(config, now).unwrap())
}

/// 2024-06-03 is a Monday.
fn monday(hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 3)
        .unwrap()
        .and_hms_opt(hour, min, 0)
        .unwrap()
}

#[tokio::test]
async fn catalog_changes_survive_separate_runs() {
    let dir = tempfile::tempdir().unwrap();
    let config = instant_config(dir.path().join("nested").join("catalog.json"));

    {
        let rt = runtime(&config, None);
        catalog::toggle_item_status(&rt, "1").await.unwrap();
        catalog::purchase_item(&rt, "1").await.unwrap();
    }

    let rt = runtime(&config, None);
    let items = catalog::list_items(&rt).await.unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[0].status, ItemStatus::Sold);

    let err = catalog::purchase_item(&rt, "1").await.unwrap_err();
    assert_eq!(err, "item 1 is not available or already sold");
}

#[tokio::test]
async fn command_errors_are_user_facing_strings() {
    let dir = tempfile::tempdir().unwrap();
    let rt = runtime(&instant_config(dir.path().join("catalog.json")), None);

    assert_eq!(
        catalog::toggle_item_status(&rt, "77").await.unwrap_err(),
        "item 77 not found"
    );

    let form = ItemForm {
        name: "Brass Compass".into(),
        description: "Ship's compass".into(),
        price: "cheap".into(),
        image_url: "https://example.com/compass.png".into(),
        gallery_urls: String::new(),
    };
    let err = catalog::create_item(&rt, form).await.unwrap_err();
    assert!(err.contains("cheap"), "{err}");
}

#[tokio::test]
async fn create_assigns_next_id_and_stays_inactive() {
    let dir = tempfile::tempdir().unwrap();
    let rt = runtime(&instant_config(dir.path().join("catalog.json")), None);

    let form = ItemForm {
        name: "X".into(),
        description: "Y".into(),
        price: "10".into(),
        image_url: "u".into(),
        gallery_urls: String::new(),
    };
    let item = catalog::create_item(&rt, form).await.unwrap();

    assert_eq!(item.id.as_str(), "5");
    assert_eq!(item.status, ItemStatus::Inactive);
}

#[tokio::test]
async fn availability_follows_pinned_clock() {
    let dir = tempfile::tempdir().unwrap();
    let config = instant_config(dir.path().join("catalog.json"));

    let closed = runtime(&config, Some(monday(9, 59)));
    catalog::toggle_item_status(&closed, "2").await.unwrap();
    let report = availability::get_sales_status(&closed);
    assert!(!report.status.is_open);
    assert_eq!(report.status.countdown.to_string(), "00:01:00");
    assert_eq!(report.window, "Mon-Fri, 10:00-17:00 local time");
    assert!(catalog::list_available_items(&closed).await.unwrap().is_empty());

    let open = runtime(&config, Some(monday(10, 0)));
    let available = catalog::list_available_items(&open).await.unwrap();
    assert_eq!(available.len(), 1);
    assert_eq!(available[0].id.as_str(), "2");
}

#[tokio::test]
async fn sales_status_serializes_in_camel_case() {
    let dir = tempfile::tempdir().unwrap();
    let rt = runtime(&instant_config(dir.path().join("catalog.json")), Some(monday(12, 0)));

    let json = serde_json::to_value(availability::get_sales_status(&rt)).unwrap();

    assert_eq!(json["isOpen"], true);
    assert_eq!(json["nextOpen"], "2024-06-04T10:00:00");
    assert_eq!(json["window"], "Mon-Fri, 10:00-17:00 local time");
}

#[tokio::test]
async fn countdown_after_hours_waits_for_monday_unless_configured() {
    let dir = tempfile::tempdir().unwrap();
    let config = instant_config(dir.path().join("catalog.json"));
    let tuesday_evening = monday(18, 0) + chrono::Days::new(1);

    let report = availability::get_sales_status(&runtime(&config, Some(tuesday_evening)));
    assert_eq!(report.status.countdown.to_string(), "136:00:00");

    let config = AppConfig {
        sales_countdown: "next-sales-day".into(),
        ..config
    };
    let report = availability::get_sales_status(&runtime(&config, Some(tuesday_evening)));
    assert_eq!(report.status.countdown.to_string(), "16:00:00");
}

#[tokio::test(start_paused = true)]
async fn watch_renders_status_and_catalog_until_limit() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        storage_backend: "memory".into(),
        ..instant_config(dir.path().join("unused.json"))
    };
    let rt = runtime(&config, Some(monday(9, 0)));
    let view = Arc::new(TerminalView::new(Vec::new(), "Mon-Fri"));

    watch::watch_storefront(&rt, view.clone(), Some(Duration::from_millis(2500)))
        .await
        .unwrap();

    let view = Arc::try_unwrap(view).ok().unwrap();
    let out = String::from_utf8(view.into_inner()).unwrap();
    assert_eq!(out.matches("Shop is CLOSED").count(), 3);
    assert_eq!(out.matches("--- catalog ---").count(), 1);
    assert!(out.contains("Japanese Tea Cup Set"));
}
