//! # Configuration DTO
//!
//! Plain data mapped from the TOML config file.
//!
//! This module holds facts only: an empty string or a missing section is a
//! valid value. Defaults and validation are applied when the application is
//! wired, not here.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// `[storage] backend`: "memory", "file", or empty.
    pub storage_backend: String,

    /// `[storage] path`: JSON file backing the "file" medium.
    pub storage_path: PathBuf,

    /// `[storage] key`: key the catalog array is stored under.
    pub storage_key: String,

    /// `[latency]` per-operation delays in milliseconds.
    pub latency: LatencyConfig,

    /// `[sales] days`: weekday names as written ("mon", "Tuesday", ...).
    pub sales_days: Vec<String>,

    /// `[sales] open_hour`
    pub sales_open_hour: Option<u32>,

    /// `[sales] close_hour`
    pub sales_close_hour: Option<u32>,

    /// `[sales] countdown`: "week-start", "next-sales-day", or empty.
    pub sales_countdown: String,

    /// `[logging] dir`: directory for the log file; empty disables file logging.
    pub log_dir: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LatencyConfig {
    pub fetch_ms: Option<u64>,
    pub purchase_ms: Option<u64>,
    pub toggle_ms: Option<u64>,
    pub create_ms: Option<u64>,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// Must NOT contain validation or default value logic. Negative numbers
    /// are dropped (treated as absent) since they cannot be represented.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let section = |name: &str| toml_value.get(name);
        let string = |sec: &str, key: &str| {
            section(sec)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };
        let integer = |sec: &str, key: &str| {
            section(sec)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_integer())
        };
        let millis = |key: &str| integer("latency", key).and_then(|v| u64::try_from(v).ok());
        let hour = |key: &str| integer("sales", key).and_then(|v| u32::try_from(v).ok());

        Ok(Self {
            storage_backend: string("storage", "backend"),
            storage_path: PathBuf::from(string("storage", "path")),
            storage_key: string("storage", "key"),
            latency: LatencyConfig {
                fetch_ms: millis("fetch_ms"),
                purchase_ms: millis("purchase_ms"),
                toggle_ms: millis("toggle_ms"),
                create_ms: millis("create_ms"),
            },
            sales_days: section("sales")
                .and_then(|s| s.get("days"))
                .and_then(|v| v.as_array())
                .map(|days| {
                    days.iter()
                        .filter_map(|d| d.as_str())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            sales_open_hour: hour("open_hour"),
            sales_close_hour: hour("close_hour"),
            sales_countdown: string("sales", "countdown"),
            log_dir: PathBuf::from(string("logging", "dir")),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self::default()
    }
}
