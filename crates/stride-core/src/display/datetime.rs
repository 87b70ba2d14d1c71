//! Timestamp formatting for saved plans.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a `Timestamp` in the system time zone as `YYYY-MM-DD HH:MM TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl LocalDateTime<'_> {
    fn format_in(&self, tz: TimeZone) -> String {
        self.0.to_zoned(tz).strftime("%Y-%m-%d %H:%M %Z").to_string()
    }
}

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_in(TimeZone::system()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_in_utc() {
        // 2022-01-01 00:00:00 UTC
        let ts = Timestamp::from_second(1640995200).unwrap();
        assert_eq!(LocalDateTime(&ts).format_in(TimeZone::UTC), "2022-01-01 00:00 UTC");
    }
}
