use serde::{Deserialize, Serialize};

/// Whole hours, minutes and seconds; sub-second remainders are truncated.
///
/// `hours` is not wrapped at 24, a weekend countdown reads e.g. `65:00:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Countdown {
    pub hours: u64,
    pub minutes: u8,
    pub seconds: u8,
}

impl Countdown {
    pub const ZERO: Countdown = Countdown {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Negative durations clamp to zero.
    pub fn from_duration(duration: chrono::Duration) -> Self {
        let total = u64::try_from(duration.num_seconds()).unwrap_or(0);
        Self {
            hours: total / 3600,
            minutes: ((total % 3600) / 60) as u8,
            seconds: (total % 60) as u8,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.hours * 3600 + u64::from(self.minutes) * 60 + u64::from(self.seconds)
    }
}

impl std::fmt::Display for Countdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn decomposes_and_truncates() {
        let d = Duration::seconds(3 * 3600 + 7 * 60 + 9) + Duration::milliseconds(999);
        let c = Countdown::from_duration(d);

        assert_eq!(
            c,
            Countdown {
                hours: 3,
                minutes: 7,
                seconds: 9
            }
        );
        assert_eq!(c.total_seconds(), 3 * 3600 + 7 * 60 + 9);
    }

    #[test]
    fn negative_clamps_to_zero() {
        assert_eq!(Countdown::from_duration(Duration::seconds(-5)), Countdown::ZERO);
    }

    #[test]
    fn display_pads_fields() {
        let c = Countdown {
            hours: 65,
            minutes: 0,
            seconds: 7,
        };
        assert_eq!(c.to_string(), "65:00:07");
    }
}
