//! Opening-hours check for a single stall.
//!
//! A stall is open when the reference day is one of its `openDays` and the
//! reference time falls inside its `openTime` window. Both window ends are
//! inclusive. A window whose close is earlier than its open spans midnight;
//! the weekday test still uses the reference instant's own day, so 00:30 on a
//! Friday counts toward a Friday 22:00-02:00 window.
//!
//! Anything malformed (missing days, missing window, unparseable times)
//! yields "closed", never an error.

use crate::models::schedule::{minute_of_day, weekday_abbrev};
use crate::models::Stall;
use time::PrimitiveDateTime;

pub fn is_open(stall: &Stall, at: PrimitiveDateTime) -> bool {
    let (Some(_), Some(window)) = (&stall.open_days, &stall.open_time) else {
        tracing::trace!("'{}' closed: no schedule", stall.name);
        return false;
    };

    let day = weekday_abbrev(at.weekday());
    if !stall.opens_on(day) {
        tracing::trace!("'{}' closed: not open on {}", stall.name, day);
        return false;
    }

    let now = minute_of_day(at.time());
    match window.contains(now) {
        Some(open) => {
            tracing::trace!(
                "'{}' {} at minute {} ({}-{})",
                stall.name,
                if open { "open" } else { "closed" },
                now,
                window.open,
                window.close
            );
            open
        }
        None => {
            tracing::trace!(
                "'{}' closed: unparseable window {:?}-{:?}",
                stall.name,
                window.open,
                window.close
            );
            false
        }
    }
}
