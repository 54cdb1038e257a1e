use std::sync::Arc;

use tokio::sync::broadcast::error::{RecvError, TryRecvError};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use curio_core::ports::StorefrontViewPort;

use super::CatalogStore;

/// Keeps a view in sync with the catalog.
/// 保持界面与商品目录同步。
///
/// Loads once on start, then re-fetches after change notifications. A burst of
/// notifications, including a lagged receiver, collapses into one re-fetch.
/// The task ends when the notification channel closes.
pub struct CatalogWatcher {
    store: Arc<CatalogStore>,
    view: Arc<dyn StorefrontViewPort>,
}

impl CatalogWatcher {
    pub fn new(store: Arc<CatalogStore>, view: Arc<dyn StorefrontViewPort>) -> Self {
        Self { store, view }
    }

    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    pub async fn run(self) {
        // Subscribe before the initial load so no change slips in between.
        let mut rx = self.store.subscribe();
        self.refresh().await;

        loop {
            match rx.recv().await {
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    debug!(skipped, "Catalog watcher lagged, re-fetching once");
                }
                Err(RecvError::Closed) => {
                    info!("Catalog notifications closed, watcher stopping");
                    return;
                }
            }

            loop {
                match rx.try_recv() {
                    Ok(_) | Err(TryRecvError::Lagged(_)) => continue,
                    Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
                }
            }

            self.refresh().await;
        }
    }

    async fn refresh(&self) {
        match self.store.fetch_all().await {
            Ok(items) => {
                if let Err(e) = self.view.on_catalog_changed(&items).await {
                    warn!(error = %e, "View rejected catalog update");
                }
            }
            Err(e) => warn!(error = %e, "Catalog re-fetch failed"),
        }
    }
}
