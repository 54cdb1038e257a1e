use std::sync::Arc;

use curio_core::ports::ClockPort;
use curio_core::{Countdown, SalesStatus, SalesWindow};

/// Reads the clock and evaluates it against the configured sales window.
/// 读取时钟并根据销售时段计算当前营业状态。
#[derive(Clone)]
pub struct GetSalesStatus {
    clock: Arc<dyn ClockPort>,
    window: SalesWindow,
}

impl GetSalesStatus {
    pub fn from_ports(clock: Arc<dyn ClockPort>, window: SalesWindow) -> Self {
        Self { clock, window }
    }

    pub fn window(&self) -> &SalesWindow {
        &self.window
    }

    /// e.g. "Mon-Fri, 10:00-17:00 local time"
    pub fn describe_window(&self) -> String {
        self.window.describe()
    }

    pub fn execute(&self) -> SalesStatus {
        SalesStatus::at(&self.window, self.clock.now_local())
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open(self.clock.now_local())
    }

    /// Countdown to the next opening, zero exactly at an opening instant.
    pub fn time_until_next_open(&self) -> Countdown {
        self.execute().countdown
    }
}
