//! # Configuration Loader / 配置加载器
//!
//! Reads the TOML file and maps it into the `AppConfig` DTO. Accepts whatever
//! is in the file: defaults and validation belong to wiring.
//!
//! 仅纯数据加载，接受文件中的任何内容。

use anyhow::Context;
use std::path::{Path, PathBuf};

use curio_core::config::AppConfig;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Location of the per-user config file, whether or not it exists.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("curio").join(CONFIG_FILE_NAME))
}

/// Resolve the effective configuration.
///
/// An explicit path must exist and parse. Without one, the per-user file is
/// used when present; otherwise the configuration is empty.
pub fn resolve_config(explicit: Option<&Path>) -> anyhow::Result<AppConfig> {
    resolve_config_from(explicit, default_config_path())
}

fn resolve_config_from(
    explicit: Option<&Path>,
    fallback: Option<PathBuf>,
) -> anyhow::Result<AppConfig> {
    if let Some(path) = explicit {
        return load_config(path.to_path_buf());
    }

    match fallback.filter(|path| path.is_file()) {
        Some(path) => load_config(path),
        None => Ok(AppConfig::empty()),
    }
}
