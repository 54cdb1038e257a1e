use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Timelike, Weekday};
use thiserror::Error;

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SalesWindowError {
    #[error("sales window needs at least one sales day")]
    NoSalesDays,

    #[error("invalid sales hours {open}..{close}: expected open < close <= 24")]
    InvalidHours { open: u32, close: u32 },
}

/// How [`SalesWindow::next_open_after`] picks the opening a countdown targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NextOpenRule {
    /// Today's opening while it is still ahead. After closing time, or on a
    /// day without sales, the first sales day of the week (Monday for the
    /// default window), counting today if it is that day. An opening already
    /// passed moves one calendar day forward, whether or not that day sells.
    #[default]
    WeekStart,
    /// The earliest opening of any configured sales day at or after `now`.
    NextSalesDay,
}

/// Weekly recurring sales hours in local time.
///
/// The shop is open on every sales day for hours in `[open_hour, close_hour)`.
///
/// 每周循环的销售时段（本地时间）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesWindow {
    days: [bool; 7],
    open_hour: u32,
    close_hour: u32,
    next_open_rule: NextOpenRule,
}

impl Default for SalesWindow {
    /// Monday to Friday, 10:00 to 17:00.
    fn default() -> Self {
        Self {
            days: [true, true, true, true, true, false, false],
            open_hour: 10,
            close_hour: 17,
            next_open_rule: NextOpenRule::WeekStart,
        }
    }
}

impl SalesWindow {
    pub fn new(
        days: impl IntoIterator<Item = Weekday>,
        open_hour: u32,
        close_hour: u32,
    ) -> Result<Self, SalesWindowError> {
        let mut mask = [false; 7];
        for day in days {
            mask[day.num_days_from_monday() as usize] = true;
        }
        if !mask.contains(&true) {
            return Err(SalesWindowError::NoSalesDays);
        }
        if open_hour >= close_hour || close_hour > 24 {
            return Err(SalesWindowError::InvalidHours {
                open: open_hour,
                close: close_hour,
            });
        }
        Ok(Self {
            days: mask,
            open_hour,
            close_hour,
            next_open_rule: NextOpenRule::default(),
        })
    }

    pub fn with_next_open_rule(mut self, rule: NextOpenRule) -> Self {
        self.next_open_rule = rule;
        self
    }

    pub fn next_open_rule(&self) -> NextOpenRule {
        self.next_open_rule
    }

    pub fn open_hour(&self) -> u32 {
        self.open_hour
    }

    pub fn close_hour(&self) -> u32 {
        self.close_hour
    }

    pub fn is_sales_day(&self, day: Weekday) -> bool {
        self.days[day.num_days_from_monday() as usize]
    }

    pub fn sales_days(&self) -> impl Iterator<Item = Weekday> + '_ {
        WEEK.into_iter().filter(|day| self.is_sales_day(*day))
    }

    /// Open iff `now` falls on a sales day and its hour is in `[open, close)`.
    pub fn is_open(&self, now: NaiveDateTime) -> bool {
        self.is_sales_day(now.weekday())
            && now.hour() >= self.open_hour
            && now.hour() < self.close_hour
    }

    /// Opening instant the countdown at `now` runs to, per [`NextOpenRule`].
    ///
    /// Exactly at an opening instant this is `now`. While open, both rules
    /// look past today's opening.
    pub fn next_open_after(&self, now: NaiveDateTime) -> NaiveDateTime {
        match self.next_open_rule {
            NextOpenRule::WeekStart => self.week_start_open_after(now),
            NextOpenRule::NextSalesDay => self.next_sales_day_open_after(now),
        }
    }

    fn opening_on(&self, date: NaiveDate) -> Option<NaiveDateTime> {
        date.and_hms_opt(self.open_hour, 0, 0)
    }

    fn week_start_open_after(&self, now: NaiveDateTime) -> NaiveDateTime {
        let today = now.date();
        let mut date = today;

        if now.hour() >= self.close_hour || !self.is_sales_day(today.weekday()) {
            let first = self.sales_days().next().unwrap_or(Weekday::Mon);
            let ahead = (first.num_days_from_monday() + 7
                - today.weekday().num_days_from_monday())
                % 7;
            date = today
                .checked_add_days(Days::new(u64::from(ahead)))
                .unwrap_or(today);
        }

        let candidate = self.opening_on(date).unwrap_or(now);
        if candidate >= now {
            return candidate;
        }
        date.succ_opt()
            .and_then(|next| self.opening_on(next))
            .unwrap_or(now)
    }

    fn next_sales_day_open_after(&self, now: NaiveDateTime) -> NaiveDateTime {
        let today = now.date();
        (0..=7u64)
            .filter_map(|offset| today.checked_add_days(Days::new(offset)))
            .filter(|date| self.is_sales_day(date.weekday()))
            .filter_map(|date| self.opening_on(date))
            .find(|candidate| *candidate >= now)
            // Only reachable at the end of chrono's calendar range.
            .unwrap_or(now)
    }

    /// Human readable form, e.g. `Mon-Fri, 10:00-17:00 local time`.
    pub fn describe(&self) -> String {
        format!(
            "{}, {:02}:00-{:02}:00 local time",
            self.describe_days(),
            self.open_hour,
            self.close_hour
        )
    }

    fn describe_days(&self) -> String {
        let mut runs: Vec<(Weekday, Weekday)> = Vec::new();
        for day in self.sales_days() {
            match runs.last_mut() {
                Some((_, end)) if end.succ() == day => *end = day,
                _ => runs.push((day, day)),
            }
        }
        runs.iter()
            .map(|(start, end)| {
                if start == end {
                    start.to_string()
                } else {
                    format!("{start}-{end}")
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}
