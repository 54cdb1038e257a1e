//! # Dependency Injection / 依赖注入模块
//!
//! Turns the configuration DTO into concrete adapters and hands them to the
//! application as ports. Defaults for values the config leaves empty are
//! resolved here.
//!
//! > **This is the only place allowed to depend on curio-infra and curio-app simultaneously.**
//! > **这是唯一允许同时依赖 curio-infra 和 curio-app 的地方。**

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDateTime, Weekday};
use tracing::{debug, info};

use curio_app::AppDeps;
use curio_core::availability::SalesWindowError;
use curio_core::config::AppConfig;
use curio_core::ports::*;
use curio_core::{NextOpenRule, SalesWindow};
use curio_infra::catalog::DEFAULT_STORAGE_KEY;
use curio_infra::{
    BroadcastCatalogNotifier, FileKeyValueStore, FixedClock, InMemoryKeyValueStore,
    KvCatalogRepository, SystemClock, TokioLatency,
};

const CATALOG_FILE_NAME: &str = "catalog.json";

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("unknown storage backend '{0}' (expected \"memory\" or \"file\")")]
    UnknownStorageBackend(String),

    #[error("unknown sales day '{0}'")]
    UnknownSalesDay(String),

    #[error("unknown countdown rule '{0}' (expected \"week-start\" or \"next-sales-day\")")]
    UnknownCountdownRule(String),

    #[error("invalid sales window: {0}")]
    SalesWindow(#[from] SalesWindowError),

    #[error("no local data directory available; set [storage] path")]
    DataDirUnavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    File,
}

impl StorageBackend {
    fn from_config(value: &str) -> WiringResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "file" => Ok(StorageBackend::File),
            "memory" => Ok(StorageBackend::Memory),
            _ => Err(WiringError::UnknownStorageBackend(value.to_string())),
        }
    }
}

/// Latency per operation, falling back to the stock profile for unset values.
pub fn resolve_latency(config: &AppConfig) -> LatencyProfile {
    let stock = LatencyProfile::default();
    let pick = |ms: Option<u64>, fallback: Duration| ms.map(Duration::from_millis).unwrap_or(fallback);

    LatencyProfile {
        fetch_all: pick(config.latency.fetch_ms, stock.fetch_all),
        purchase: pick(config.latency.purchase_ms, stock.purchase),
        toggle_status: pick(config.latency.toggle_ms, stock.toggle_status),
        create: pick(config.latency.create_ms, stock.create),
    }
}

fn resolve_next_open_rule(value: &str) -> WiringResult<NextOpenRule> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "week-start" => Ok(NextOpenRule::WeekStart),
        "next-sales-day" => Ok(NextOpenRule::NextSalesDay),
        _ => Err(WiringError::UnknownCountdownRule(value.to_string())),
    }
}

/// Sales window from `[sales]`, with Mon-Fri 10-17 filling any gap.
pub fn resolve_sales_window(config: &AppConfig) -> WiringResult<SalesWindow> {
    let stock = SalesWindow::default();

    let days: Vec<Weekday> = if config.sales_days.is_empty() {
        stock.sales_days().collect()
    } else {
        config
            .sales_days
            .iter()
            .map(|name| {
                name.trim()
                    .parse::<Weekday>()
                    .map_err(|_| WiringError::UnknownSalesDay(name.clone()))
            })
            .collect::<WiringResult<_>>()?
    };

    let window = SalesWindow::new(
        days,
        config.sales_open_hour.unwrap_or(stock.open_hour()),
        config.sales_close_hour.unwrap_or(stock.close_hour()),
    )?
    .with_next_open_rule(resolve_next_open_rule(&config.sales_countdown)?);
    Ok(window)
}

fn resolve_storage_path(config: &AppConfig) -> WiringResult<PathBuf> {
    if !config.storage_path.as_os_str().is_empty() {
        return Ok(config.storage_path.clone());
    }
    dirs::data_local_dir()
        .map(|dir| dir.join("curio").join(CATALOG_FILE_NAME))
        .ok_or(WiringError::DataDirUnavailable)
}

fn create_medium(config: &AppConfig) -> WiringResult<Arc<dyn KeyValueStorePort>> {
    match StorageBackend::from_config(&config.storage_backend)? {
        StorageBackend::Memory => {
            info!("Using in-memory catalog medium");
            Ok(Arc::new(InMemoryKeyValueStore::new()))
        }
        StorageBackend::File => {
            let path = resolve_storage_path(config)?;
            info!(path = %path.display(), "Using file catalog medium");
            Ok(Arc::new(FileKeyValueStore::new(path)))
        }
    }
}

/// Wire all dependencies for the application.
///
/// `now_override` pins the clock to a fixed local time instead of the system
/// clock ("what would the shop look like at ...").
pub fn wire_dependencies(
    config: &AppConfig,
    now_override: Option<NaiveDateTime>,
) -> WiringResult<AppDeps> {
    let medium = create_medium(config)?;

    let key = match config.storage_key.trim() {
        "" => DEFAULT_STORAGE_KEY,
        key => key,
    };
    let catalog_repo: Arc<dyn CatalogRepositoryPort> =
        Arc::new(KvCatalogRepository::new(medium, key));

    let latency = resolve_latency(config);
    debug!(?latency, "Resolved latency profile");

    let clock: Arc<dyn ClockPort> = match now_override {
        Some(now) => Arc::new(FixedClock::new(now)),
        None => Arc::new(SystemClock),
    };

    Ok(AppDeps {
        catalog_repo,
        change_notifier: Arc::new(BroadcastCatalogNotifier::new()),
        latency: Arc::new(TokioLatency::new(latency)),
        clock,
        sales_window: resolve_sales_window(config)?,
    })
}
