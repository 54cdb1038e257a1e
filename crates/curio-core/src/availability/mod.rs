//! Sales window clock.
//!
//! Pure functions of a local wall-clock instant. Nothing here reads the system
//! clock; callers pass `now` obtained from a [`crate::ports::ClockPort`].

mod countdown;
mod window;

pub use countdown::Countdown;
pub use window::{NextOpenRule, SalesWindow, SalesWindowError};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Snapshot of the shop's availability at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesStatus {
    pub is_open: bool,
    /// Time left until the next opening. Only meaningful while closed.
    pub countdown: Countdown,
    pub next_open: NaiveDateTime,
}

impl SalesStatus {
    /// Evaluate `window` at the local wall-clock time `now`.
    ///
    /// The countdown is the wall-clock difference between `now` and the next
    /// opening. On a day with a daylight-saving shift it differs from the
    /// elapsed time by the size of the shift.
    pub fn at(window: &SalesWindow, now: NaiveDateTime) -> Self {
        let next_open = window.next_open_after(now);
        Self {
            is_open: window.is_open(now),
            countdown: Countdown::from_duration(next_open - now),
            next_open,
        }
    }
}
