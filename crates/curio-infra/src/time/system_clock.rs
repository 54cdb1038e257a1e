use chrono::{Local, NaiveDateTime};
use curio_core::ports::ClockPort;

/// Wall clock in the process's local time zone.
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now_local(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
