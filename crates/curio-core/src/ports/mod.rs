//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. The catalog store and the sales clock
//! only ever see these traits; the backing medium, the notification channel
//! and the UI are supplied from outside.

mod catalog_repository;
mod change_notifier;
mod clock;
mod kv_store;
mod latency;
mod storefront_view;

pub use catalog_repository::CatalogRepositoryPort;
pub use change_notifier::{CatalogChanged, CatalogChangeNotifierPort};
pub use clock::ClockPort;
pub use kv_store::KeyValueStorePort;
pub use latency::{CatalogOperation, LatencyPort, LatencyProfile};
pub use storefront_view::StorefrontViewPort;
