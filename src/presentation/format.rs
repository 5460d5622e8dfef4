//! Timestamp formatting for cards.

use std::fmt::Display;
use std::ops::RangeInclusive;

use chrono::{Datelike, DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

pub const INVALID_DATE: &str = "Invalid date";
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";
const DISPLAY_YEARS: RangeInclusive<i32> = 0..=9999;
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Render `value` as `YYYY-MM-DD HH:MM` in local time, or [`INVALID_DATE`].
pub fn format_date(value: &str) -> String {
    format_date_in(value, &Local)
}

/// Like [`format_date`] but in an explicit timezone.
///
/// Offsets in the input are honoured; timestamps without one are read as
/// wall-clock time in `tz`, and bare dates as UTC midnight. A conversion that
/// lands outside years 0000..=9999 yields [`INVALID_DATE`].
pub fn format_date_in<Tz>(value: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    parse_in(value.trim(), tz)
        .filter(|dt| DISPLAY_YEARS.contains(&dt.year()))
        .map_or_else(
            || INVALID_DATE.to_string(),
            |dt| dt.format(DISPLAY_FORMAT).to_string(),
        )
}

fn parse_in<Tz: TimeZone>(value: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(tz));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return tz.from_local_datetime(&naive).earliest();
        }
    }

    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight).with_timezone(tz))
}
