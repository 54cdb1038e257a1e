use std::sync::Arc;

use tokio::sync::{broadcast, Mutex};
use tracing::{debug, info, warn};

use curio_core::catalog::ItemAction;
use curio_core::ports::{
    CatalogChangeNotifierPort, CatalogChanged, CatalogOperation, CatalogRepositoryPort,
    LatencyPort,
};
use curio_core::{CatalogError, Item, ItemId, NewItem};

/// The single owner of the persisted catalog for one execution context.
/// 单个执行上下文中持久化商品目录的唯一所有者。
///
/// Every mutation runs load, modify, save, notify while holding the write
/// gate, so two operations on the same store never interleave their
/// read-modify-write. Stores that share a medium with this one (other tabs)
/// are not covered by the gate: the last writer wins.
pub struct CatalogStore {
    repo: Arc<dyn CatalogRepositoryPort>,
    notifier: Arc<dyn CatalogChangeNotifierPort>,
    latency: Arc<dyn LatencyPort>,
    write_gate: Mutex<()>,
}

impl CatalogStore {
    pub fn from_ports(
        repo: Arc<dyn CatalogRepositoryPort>,
        notifier: Arc<dyn CatalogChangeNotifierPort>,
        latency: Arc<dyn LatencyPort>,
    ) -> Self {
        Self {
            repo,
            notifier,
            latency,
            write_gate: Mutex::new(()),
        }
    }

    /// Listen for changes made by this store or by any store sharing the notifier.
    pub fn subscribe(&self) -> broadcast::Receiver<CatalogChanged> {
        self.notifier.subscribe()
    }

    /// Returns the whole catalog in insertion order.
    ///
    /// The first read against an empty medium seeds it with the sample items,
    /// which is why the read also takes the write gate.
    #[tracing::instrument(name = "usecase.catalog.fetch_all.execute", skip(self))]
    pub async fn fetch_all(&self) -> Result<Vec<Item>, CatalogError> {
        self.latency.simulate(CatalogOperation::FetchAll).await;

        let _gate = self.write_gate.lock().await;
        let items = self.repo.load_all().await?;
        debug!(count = items.len(), "Catalog fetched");
        Ok(items)
    }

    /// Moves an enabled item to sold.
    ///
    /// Unknown ids and items that are not enabled both fail with
    /// [`CatalogError::NotAvailable`]; nothing is written in that case.
    #[tracing::instrument(
        name = "usecase.catalog.purchase.execute",
        skip(self),
        fields(item_id = %item_id)
    )]
    pub async fn purchase(&self, item_id: &ItemId) -> Result<Item, CatalogError> {
        self.latency.simulate(CatalogOperation::Purchase).await;
        let item = self.apply_action(item_id, ItemAction::Purchase).await?;
        info!(item_id = %item.id, "Item purchased");
        Ok(item)
    }

    /// Flips an item between inactive and enabled.
    ///
    /// Sold items are final and fail with [`CatalogError::AlreadySold`].
    #[tracing::instrument(
        name = "usecase.catalog.toggle_status.execute",
        skip(self),
        fields(item_id = %item_id)
    )]
    pub async fn toggle_status(&self, item_id: &ItemId) -> Result<Item, CatalogError> {
        self.latency.simulate(CatalogOperation::ToggleStatus).await;
        let item = self.apply_action(item_id, ItemAction::Toggle).await?;
        info!(item_id = %item.id, status = %item.status, "Item status toggled");
        Ok(item)
    }

    /// Appends a new inactive item with the next numeric id.
    ///
    /// Input is validated before any delay or storage access.
    #[tracing::instrument(name = "usecase.catalog.create.execute", skip(self, new_item))]
    pub async fn create(&self, new_item: NewItem) -> Result<Item, CatalogError> {
        new_item.validate()?;

        self.latency.simulate(CatalogOperation::Create).await;

        let created = {
            let _gate = self.write_gate.lock().await;
            let mut items = self.repo.load_all().await?;
            let id = ItemId::next_after(items.iter().map(|item| &item.id));
            let item = new_item.into_item(id);
            items.push(item.clone());
            self.repo.save_all(&items).await?;
            item
        };

        self.notifier.notify();
        info!(item_id = %created.id, name = %created.name, "Item created");
        Ok(created)
    }

    async fn apply_action(
        &self,
        item_id: &ItemId,
        action: ItemAction,
    ) -> Result<Item, CatalogError> {
        let updated = {
            let _gate = self.write_gate.lock().await;
            let mut items = self.repo.load_all().await?;

            let Some(item) = items.iter_mut().find(|item| &item.id == item_id) else {
                warn!(item_id = %item_id, action = %action, "Item not found");
                return Err(missing_item(item_id, action));
            };

            item.status = item.status.apply(action).map_err(|err| {
                warn!(item_id = %item_id, error = %err, "Transition rejected");
                rejected_transition(item_id, action)
            })?;
            let updated = item.clone();

            self.repo.save_all(&items).await?;
            updated
        };

        self.notifier.notify();
        Ok(updated)
    }
}

fn missing_item(item_id: &ItemId, action: ItemAction) -> CatalogError {
    let item_id = item_id.clone();
    match action {
        ItemAction::Purchase => CatalogError::NotAvailable { item_id },
        ItemAction::Toggle => CatalogError::NotFound { item_id },
    }
}

fn rejected_transition(item_id: &ItemId, action: ItemAction) -> CatalogError {
    let item_id = item_id.clone();
    match action {
        ItemAction::Purchase => CatalogError::NotAvailable { item_id },
        ItemAction::Toggle => CatalogError::AlreadySold { item_id },
    }
}
