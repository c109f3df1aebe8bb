use crate::constants::MINUTES_PER_HOUR;
use serde::{Deserialize, Serialize};
use time::{Time, Weekday};

/// One daily opening interval as written in the dataset, e.g. `09:00`-`18:00`.
/// A `close` earlier than `open` means the window runs past midnight.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeWindow {
    #[serde(default)]
    pub open: String,
    #[serde(default)]
    pub close: String,
}

impl TimeWindow {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        TimeWindow {
            open: open.into(),
            close: close.into(),
        }
    }

    /// `(open, close)` in minutes since midnight, or `None` if either end
    /// does not parse.
    pub fn minutes(&self) -> Option<(u32, u32)> {
        Some((parse_clock_minutes(&self.open)?, parse_clock_minutes(&self.close)?))
    }

    /// Whether `minute_of_day` falls inside the window, both ends inclusive.
    /// Returns `None` when the window itself is malformed.
    pub fn contains(&self, minute_of_day: u32) -> Option<bool> {
        let (open, close) = self.minutes()?;
        let inside = if open <= close {
            minute_of_day >= open && minute_of_day <= close
        } else {
            minute_of_day >= open || minute_of_day <= close
        };
        Some(inside)
    }
}

/// Parse `"HH:MM"` into minutes since midnight.
///
/// Both parts must be plain non-negative integers. Values are not range
/// checked, so `"24:00"` gives 1440 and can be used as an inclusive end of day.
pub fn parse_clock_minutes(raw: &str) -> Option<u32> {
    let (hours, minutes) = raw.trim().split_once(':')?;
    let hours: u32 = hours.trim().parse().ok()?;
    let minutes: u32 = minutes.trim().parse().ok()?;
    hours
        .checked_mul(MINUTES_PER_HOUR)
        .and_then(|h| h.checked_add(minutes))
}

pub fn minute_of_day(time: Time) -> u32 {
    u32::from(time.hour()) * MINUTES_PER_HOUR + u32::from(time.minute())
}

/// Three-letter English abbreviation used by the dataset's `openDays`.
pub fn weekday_abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sunday => "Sun",
        Weekday::Monday => "Mon",
        Weekday::Tuesday => "Tue",
        Weekday::Wednesday => "Wed",
        Weekday::Thursday => "Thu",
        Weekday::Friday => "Fri",
        Weekday::Saturday => "Sat",
    }
}
