use anyhow::Result;
use async_trait::async_trait;

use crate::availability::SalesStatus;
use crate::catalog::Item;

/// UI collaborator driven by the core.
///
/// 由核心驱动的界面协作者。
#[async_trait]
pub trait StorefrontViewPort: Send + Sync {
    /// Called once per second with the current sales status.
    async fn on_availability_tick(&self, status: &SalesStatus) -> Result<()>;

    /// Called after the initial load and after every notification-triggered re-fetch.
    async fn on_catalog_changed(&self, items: &[Item]) -> Result<()>;
}
