use tracing::info_span;
use tracing::Instrument;

use curio_core::{Item, ItemForm, ItemId};

use super::error::map_err;
use crate::bootstrap::AppRuntime;

/// Every item, in catalog order.
pub async fn list_items(runtime: &AppRuntime) -> Result<Vec<Item>, String> {
    let span = info_span!("command.catalog.list_items");
    runtime
        .usecases()
        .catalog_store()
        .fetch_all()
        .instrument(span)
        .await
        .map_err(map_err)
}

/// Items a customer could buy right now.
pub async fn list_available_items(runtime: &AppRuntime) -> Result<Vec<Item>, String> {
    let span = info_span!("command.catalog.list_available_items");
    runtime
        .usecases()
        .list_available_items()
        .execute()
        .instrument(span)
        .await
        .map_err(map_err)
}

pub async fn purchase_item(runtime: &AppRuntime, item_id: &str) -> Result<Item, String> {
    let span = info_span!("command.catalog.purchase_item", item_id = %item_id);
    runtime
        .usecases()
        .catalog_store()
        .purchase(&ItemId::from(item_id))
        .instrument(span)
        .await
        .map_err(map_err)
}

pub async fn toggle_item_status(runtime: &AppRuntime, item_id: &str) -> Result<Item, String> {
    let span = info_span!("command.catalog.toggle_item_status", item_id = %item_id);
    runtime
        .usecases()
        .catalog_store()
        .toggle_status(&ItemId::from(item_id))
        .instrument(span)
        .await
        .map_err(map_err)
}

/// Create an item from raw admin form input.
pub async fn create_item(runtime: &AppRuntime, form: ItemForm) -> Result<Item, String> {
    let span = info_span!("command.catalog.create_item");
    let new_item = form.parse().map_err(map_err)?;
    runtime
        .usecases()
        .catalog_store()
        .create(new_item)
        .instrument(span)
        .await
        .map_err(map_err)
}
