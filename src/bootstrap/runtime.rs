//! # Use Cases Accessor
//!
//! `AppRuntime` wraps the assembled [`App`]; `runtime.usecases()` hands out
//! use cases with their ports already wired. Commands only talk to this.

use std::sync::Arc;

use curio_app::usecases::{
    AvailabilityTicker, CatalogStore, CatalogWatcher, GetSalesStatus, ListAvailableItems,
};
use curio_app::{App, AppDeps};
use curio_core::ports::StorefrontViewPort;

/// Application runtime with dependencies.
pub struct AppRuntime {
    app: App,
}

impl AppRuntime {
    pub fn new(deps: AppDeps) -> Self {
        Self { app: App::new(deps) }
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases { app: &self.app }
    }
}

pub struct UseCases<'a> {
    app: &'a App,
}

impl UseCases<'_> {
    pub fn catalog_store(&self) -> Arc<CatalogStore> {
        self.app.catalog_store()
    }

    pub fn get_sales_status(&self) -> GetSalesStatus {
        GetSalesStatus::from_ports(
            self.app.deps.clock.clone(),
            self.app.deps.sales_window.clone(),
        )
    }

    pub fn list_available_items(&self) -> ListAvailableItems {
        ListAvailableItems::new(self.catalog_store(), self.get_sales_status())
    }

    pub fn availability_ticker(&self, view: Arc<dyn StorefrontViewPort>) -> AvailabilityTicker {
        AvailabilityTicker::new(self.get_sales_status(), view)
    }

    pub fn catalog_watcher(&self, view: Arc<dyn StorefrontViewPort>) -> CatalogWatcher {
        CatalogWatcher::new(self.catalog_store(), view)
    }
}
