use anyhow::Result;
use async_trait::async_trait;

use crate::catalog::Item;

/// Whole-collection access to the persisted catalog.
///
/// There are no per-item writes: callers load everything, modify, and save
/// everything back.
#[async_trait]
pub trait CatalogRepositoryPort: Send + Sync {
    /// Load every item in insertion order.
    ///
    /// A medium that has never held a catalog is seeded with the sample items
    /// before this returns.
    async fn load_all(&self) -> Result<Vec<Item>>;

    /// Persist the full collection, replacing what was stored.
    async fn save_all(&self, items: &[Item]) -> Result<()>;
}
