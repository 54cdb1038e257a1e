use tokio::sync::broadcast;

/// Zero-payload "the catalog changed" signal.
///
/// Listeners re-fetch the collection to learn what changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogChanged;

/// Fire-and-forget change broadcast.
///
/// There is no acknowledgement and no replay: a listener that subscribes
/// after a notification never sees it.
pub trait CatalogChangeNotifierPort: Send + Sync {
    fn notify(&self);

    fn subscribe(&self) -> broadcast::Receiver<CatalogChanged>;
}
