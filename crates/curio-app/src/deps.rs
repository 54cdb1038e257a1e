//! # Application Dependencies
//!
//! Dependency grouping for App construction. Not a builder: no defaults, no
//! hidden logic, every field is required.

use std::sync::Arc;

use curio_core::ports::*;
use curio_core::SalesWindow;

pub struct AppDeps {
    // Catalog dependencies
    pub catalog_repo: Arc<dyn CatalogRepositoryPort>,
    pub change_notifier: Arc<dyn CatalogChangeNotifierPort>,
    pub latency: Arc<dyn LatencyPort>,

    // Availability dependencies
    pub clock: Arc<dyn ClockPort>,
    pub sales_window: SalesWindow,
}
