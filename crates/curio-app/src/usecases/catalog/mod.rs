mod list_available_items;
mod store;
mod watch_catalog;

pub use list_available_items::ListAvailableItems;
pub use store::CatalogStore;
pub use watch_catalog::CatalogWatcher;
