use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use curio_core::ports::StorefrontViewPort;

use crate::bootstrap::AppRuntime;

/// Drive a view with the availability ticker and the catalog watcher.
///
/// Runs until `limit` elapses, or until Ctrl+C when no limit is given.
pub async fn watch_storefront(
    runtime: &AppRuntime,
    view: Arc<dyn StorefrontViewPort>,
    limit: Option<Duration>,
) -> Result<(), String> {
    let usecases = runtime.usecases();
    let ticker = usecases.availability_ticker(view.clone()).spawn();
    let watcher = usecases.catalog_watcher(view).spawn();

    let stopped = match limit {
        Some(limit) => {
            tokio::time::sleep(limit).await;
            Ok("time limit reached")
        }
        None => tokio::signal::ctrl_c()
            .await
            .map(|()| "interrupted")
            .map_err(|e| format!("failed to listen for Ctrl+C: {e}")),
    };

    ticker.abort();
    watcher.abort();
    let _ = tokio::join!(ticker, watcher);

    let reason = stopped?;
    info!(reason, "Stopped storefront watch");
    Ok(())
}
