use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Source of the wall-clock instant used for availability checks.
pub trait Clock: Send + Sync {
    fn now(&self) -> PrimitiveDateTime;
}

/// Reads the system clock in a fixed offset if one is configured, otherwise
/// in the local offset.
#[derive(Debug, Clone, Default)]
pub struct SystemClock {
    offset: Option<UtcOffset>,
}

impl SystemClock {
    pub fn new(offset: Option<UtcOffset>) -> Self {
        SystemClock { offset }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> PrimitiveDateTime {
        let now = match self.offset {
            Some(offset) => OffsetDateTime::now_utc().to_offset(offset),
            None => OffsetDateTime::now_local().unwrap_or_else(|e| {
                // The time crate refuses to read the local offset in some
                // multi-threaded processes.
                tracing::warn!(
                    "Local UTC offset unavailable ({}); using UTC. Set STALLPICK_UTC_OFFSET to fix.",
                    e
                );
                OffsetDateTime::now_utc()
            }),
        };
        PrimitiveDateTime::new(now.date(), now.time())
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub PrimitiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> PrimitiveDateTime {
        self.0
    }
}
