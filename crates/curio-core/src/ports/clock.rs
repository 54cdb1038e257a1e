use chrono::NaiveDateTime;

/// Source of local wall-clock time.
pub trait ClockPort: Send + Sync {
    /// Current local date and time, in the environment's time zone.
    fn now_local(&self) -> NaiveDateTime;
}
