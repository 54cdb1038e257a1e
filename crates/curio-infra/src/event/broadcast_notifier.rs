use curio_core::ports::{CatalogChanged, CatalogChangeNotifierPort};
use tokio::sync::broadcast;
use tracing::trace;

const DEFAULT_CAPACITY: usize = 16;

/// In-process change broadcast over `tokio::sync::broadcast`.
///
/// One notifier shared by several catalog stores delivers each store's
/// changes to every subscriber, including those of the other stores.
pub struct BroadcastCatalogNotifier {
    tx: broadcast::Sender<CatalogChanged>,
}

impl Default for BroadcastCatalogNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl BroadcastCatalogNotifier {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Subscribers lagging more than `capacity` signals observe `Lagged`.
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl CatalogChangeNotifierPort for BroadcastCatalogNotifier {
    fn notify(&self) {
        // No receivers is not an error: nobody is listening right now.
        match self.tx.send(CatalogChanged) {
            Ok(receivers) => trace!(receivers, "catalog change broadcast"),
            Err(_) => trace!("catalog change dropped, no listeners"),
        }
    }

    fn subscribe(&self) -> broadcast::Receiver<CatalogChanged> {
        self.tx.subscribe()
    }
}
