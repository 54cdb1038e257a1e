use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use curio_core::ports::StorefrontViewPort;

use super::GetSalesStatus;

/// Pushes the sales status to a view once per period.
///
/// The first tick fires immediately. Ticks missed while the view was busy are
/// skipped rather than replayed.
pub struct AvailabilityTicker {
    sales_status: GetSalesStatus,
    view: Arc<dyn StorefrontViewPort>,
    period: Duration,
}

impl AvailabilityTicker {
    pub const DEFAULT_PERIOD: Duration = Duration::from_secs(1);

    pub fn new(sales_status: GetSalesStatus, view: Arc<dyn StorefrontViewPort>) -> Self {
        Self {
            sales_status,
            view,
            period: Self::DEFAULT_PERIOD,
        }
    }

    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    pub async fn run(self) {
        let mut interval = tokio::time::interval(self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            interval.tick().await;
            let status = self.sales_status.execute();
            debug!(
                is_open = status.is_open,
                countdown = %status.countdown,
                "Availability tick"
            );
            if let Err(e) = self.view.on_availability_tick(&status).await {
                warn!(error = %e, "View rejected availability tick");
            }
        }
    }
}
