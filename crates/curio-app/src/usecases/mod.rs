pub mod availability;
pub mod catalog;

pub use availability::{AvailabilityTicker, GetSalesStatus};
pub use catalog::{CatalogStore, CatalogWatcher, ListAvailableItems};
