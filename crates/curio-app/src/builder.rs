use std::sync::Arc;

use crate::usecases::CatalogStore;
use crate::AppDeps;

/// The application runtime.
///
/// Owns the one `CatalogStore` of this execution context. Everything that
/// reads or mutates the catalog goes through it.
pub struct App {
    pub deps: AppDeps,
    catalog_store: Arc<CatalogStore>,
}

impl App {
    /// Create new App instance from dependencies
    ///
    /// This constructor signature IS the dependency manifest.
    pub fn new(deps: AppDeps) -> Self {
        let catalog_store = Arc::new(CatalogStore::from_ports(
            deps.catalog_repo.clone(),
            deps.change_notifier.clone(),
            deps.latency.clone(),
        ));

        Self {
            deps,
            catalog_store,
        }
    }

    pub fn catalog_store(&self) -> Arc<CatalogStore> {
        self.catalog_store.clone()
    }
}
