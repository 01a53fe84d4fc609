//! Footer date formatting
//!
//! Calls from today show the time of day, older calls show the date, and
//! calls from a previous year also show the year.

use chrono::{DateTime, Datelike, FixedOffset, Local, Utc};
use tracing::debug;

/// Formats an interaction timestamp for display
pub trait DateFormatter: Send + Sync {
    /// `millis` is milliseconds since the UNIX epoch
    fn format_timestamp(&self, millis: i64) -> String;
}

/// Formats timestamps in the system time zone, or in a fixed UTC offset
#[derive(Debug, Clone)]
pub struct LocalDateFormatter {
    /// `None` follows the system zone, including DST changes
    offset: Option<FixedOffset>,
    use_24_hour_clock: bool,
    reference: Option<DateTime<Utc>>,
}

impl Default for LocalDateFormatter {
    fn default() -> Self {
        Self::local()
    }
}

impl LocalDateFormatter {
    /// Formatter using the system time zone
    pub fn local() -> Self {
        Self {
            offset: None,
            use_24_hour_clock: false,
            reference: None,
        }
    }

    pub fn with_offset(offset: FixedOffset) -> Self {
        Self {
            offset: Some(offset),
            ..Self::local()
        }
    }

    pub fn use_24_hour_clock(mut self, enabled: bool) -> Self {
        self.use_24_hour_clock = enabled;
        self
    }

    /// Compare against a fixed "now" instead of the wall clock
    pub fn with_reference_time(mut self, now: DateTime<Utc>) -> Self {
        self.reference = Some(now);
        self
    }

    /// Wall clock time at `when`, with the offset in effect at that instant
    fn localize(&self, when: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self.offset {
            Some(offset) => when.with_timezone(&offset),
            None => when.with_timezone(&Local).fixed_offset(),
        }
    }
}

impl DateFormatter for LocalDateFormatter {
    fn format_timestamp(&self, millis: i64) -> String {
        let Some(when) = DateTime::<Utc>::from_timestamp_millis(millis) else {
            debug!("Timestamp {} out of range, leaving footer empty", millis);
            return String::new();
        };

        let when = self.localize(when);
        let now = self.localize(self.reference.unwrap_or_else(Utc::now));

        if when.date_naive() == now.date_naive() {
            let pattern = if self.use_24_hour_clock {
                "%H:%M"
            } else {
                "%-I:%M %p"
            };
            when.format(pattern).to_string()
        } else if when.year() == now.year() {
            when.format("%B %-d").to_string()
        } else {
            when.format("%B %-d, %Y").to_string()
        }
    }
}
