use std::time::Duration;

use async_trait::async_trait;

/// Catalog operations that carry simulated latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogOperation {
    FetchAll,
    Purchase,
    ToggleStatus,
    Create,
}

impl std::fmt::Display for CatalogOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CatalogOperation::FetchAll => "fetch_all",
            CatalogOperation::Purchase => "purchase",
            CatalogOperation::ToggleStatus => "toggle_status",
            CatalogOperation::Create => "create",
        };
        f.write_str(name)
    }
}

/// Per-operation artificial delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub fetch_all: Duration,
    pub purchase: Duration,
    pub toggle_status: Duration,
    pub create: Duration,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            fetch_all: Duration::from_millis(500),
            purchase: Duration::from_millis(300),
            toggle_status: Duration::from_millis(200),
            create: Duration::from_millis(400),
        }
    }
}

impl LatencyProfile {
    /// No delay at all.
    pub fn none() -> Self {
        Self {
            fetch_all: Duration::ZERO,
            purchase: Duration::ZERO,
            toggle_status: Duration::ZERO,
            create: Duration::ZERO,
        }
    }

    pub fn delay_for(&self, op: CatalogOperation) -> Duration {
        match op {
            CatalogOperation::FetchAll => self.fetch_all,
            CatalogOperation::Purchase => self.purchase,
            CatalogOperation::ToggleStatus => self.toggle_status,
            CatalogOperation::Create => self.create,
        }
    }
}

/// Suspension point standing in for network round-trips.
#[async_trait]
pub trait LatencyPort: Send + Sync {
    /// Resolve after the delay configured for `op`. Never fails.
    async fn simulate(&self, op: CatalogOperation);
}
