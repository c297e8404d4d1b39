use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};
use chrono_tz::Tz;

// All events are stamped in one reference zone so they correlate across
// viewers regardless of where they are.
const REFERENCE_ZONE: &str = "America/Los_Angeles";

/// Current time as `YYYY-MM-DDTHH:MM:SS` in the reference timezone.
pub fn la_time_iso() -> String {
    format_la_time(Utc::now())
}

pub(crate) fn format_la_time(instant: DateTime<Utc>) -> String {
    match REFERENCE_ZONE.parse::<Tz>() {
        Ok(zone) => instant
            .with_timezone(&zone)
            .format("%Y-%m-%dT%H:%M:%S")
            .to_string(),
        // Zone lookup failing degrades to a plain UTC stamp; tracking
        // must not fail because of it.
        Err(_) => instant.to_rfc3339(),
    }
}

/// Calendar-day suffix (`YYYYMMDD`) in the viewer's local date, used for
/// the per-day counter keys.
pub fn date_key() -> String {
    format_date_key(Local::now().date_naive())
}

pub(crate) fn format_date_key(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

pub fn current_year() -> i32 {
    Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_in_los_angeles_time_during_dst() {
        let instant = Utc.with_ymd_and_hms(2024, 5, 1, 19, 30, 0).unwrap();
        assert_eq!(format_la_time(instant), "2024-05-01T12:30:00");
    }

    #[test]
    fn formats_in_los_angeles_time_outside_dst() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap();
        assert_eq!(format_la_time(instant), "2024-01-15T00:00:00");
    }

    #[test]
    fn date_key_is_compact_ymd() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(format_date_key(date), "20240501");
    }
}
