//! Timestamp display in the system timezone.

use std::fmt;

use jiff::{Timestamp, tz::TimeZone};

/// Formats a `Timestamp` as `YYYY-MM-DD HH:MM TZ` in the system timezone.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M %Z")
        )
    }
}
