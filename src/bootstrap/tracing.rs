//! Tracing configuration for Curio
//!
//! Structured logging through `tracing-subscriber`. Console output goes to
//! stderr so command output on stdout stays clean. A log file is added when
//! `[logging] dir` is configured.

use std::{fs, io, path::Path, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

use curio_core::config::AppConfig;

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const LOG_FILE_NAME: &str = "curio.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// ## Behavior / 行为
/// - **Development**: debug for the curio crates
/// - **Production**: info everywhere
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let crate_level = if is_dev { "debug" } else { "info" };
    let mut directives = vec!["info".to_string()];
    directives.extend(
        ["curio", "curio_lib", "curio_core", "curio_app", "curio_infra"]
            .iter()
            .map(|target| format!("{target}={crate_level}")),
    );
    directives
}

/// Initialize the tracing subscriber
///
/// - Respects `RUST_LOG`, falling back to [`build_filter_directives`]
/// - Console layer on stderr, with ChronoUtc timestamps, file and line
/// - File layer when `config.log_dir` is non-empty
///
/// ## Errors / 错误
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber(config: &AppConfig) -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    let stderr_writer: BoxMakeWriter = BoxMakeWriter::new(io::stderr);
    let file_writer = if config.log_dir.as_os_str().is_empty() {
        None
    } else {
        match build_file_writer(&config.log_dir) {
            Ok(writer) => Some(writer),
            Err(err) => {
                eprintln!("Failed to initialize file logging, falling back to stderr: {err:#}");
                None
            }
        }
    };

    // "2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(stderr_writer);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(log_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_directives() {
        let dev_directives = build_filter_directives(true);
        assert_eq!(dev_directives[0], "info");
        assert!(dev_directives.contains(&"curio_app=debug".to_string()));
        assert!(dev_directives.contains(&"curio_infra=debug".to_string()));

        let prod_directives = build_filter_directives(false);
        assert!(prod_directives.contains(&"curio_core=info".to_string()));
        assert!(!prod_directives.iter().any(|d| d.ends_with("=debug")));
    }

    #[test]
    fn test_directives_parse_as_env_filter() {
        let joined = build_filter_directives(true).join(",");
        assert!(tracing_subscriber::EnvFilter::try_new(joined).is_ok());
    }
}
