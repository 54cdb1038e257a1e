use std::sync::Arc;

use curio_core::{CatalogError, Item};

use super::CatalogStore;
use crate::usecases::GetSalesStatus;

/// Items a customer can buy right now: enabled, and only while the shop is open.
pub struct ListAvailableItems {
    store: Arc<CatalogStore>,
    sales_status: GetSalesStatus,
}

impl ListAvailableItems {
    pub fn new(store: Arc<CatalogStore>, sales_status: GetSalesStatus) -> Self {
        Self {
            store,
            sales_status,
        }
    }

    #[tracing::instrument(name = "usecase.list_available_items.execute", skip(self))]
    pub async fn execute(&self) -> Result<Vec<Item>, CatalogError> {
        let items = self.store.fetch_all().await?;
        // Evaluated after the fetch so the latency does not skew the answer.
        let open = self.sales_status.is_open();
        Ok(items
            .into_iter()
            .filter(|item| item.can_purchase(open))
            .collect())
    }
}
