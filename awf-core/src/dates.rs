//! Date parsing for the observation CSV.
//!
//! The public wildfire dataset has been published with ISO dates, with
//! US-style `M/D/YYYY` dates and occasionally with a time component, so the
//! loader tries each supported format in turn.

use chrono::{NaiveDate, NaiveDateTime};

/// Date-only formats accepted in the `Date` column, tried in order.
pub const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d", "%Y%m%d"];

/// Date-time formats accepted in the `Date` column; the time is discarded.
pub const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parse a `Date` field, returning `None` when no supported format matches.
pub fn parse_observation_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATE_TIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// Format a NaiveDate as "YYYY-MM-DD"
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        let date = parse_observation_date("2012-01-04").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2012, 1, 4).unwrap());
    }

    #[test]
    fn parses_us_dates_month_first() {
        let date = parse_observation_date("1/4/2005").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2005, 1, 4).unwrap());
    }

    #[test]
    fn parses_compact_and_datetime() {
        assert_eq!(
            parse_observation_date("20210315"),
            NaiveDate::from_ymd_opt(2021, 3, 15)
        );
        assert_eq!(
            parse_observation_date("2021-03-15 00:00:00"),
            NaiveDate::from_ymd_opt(2021, 3, 15)
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_observation_date("").is_none());
        assert!(parse_observation_date("not a date").is_none());
        assert!(parse_observation_date("2012-13-01").is_none());
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
        assert_eq!(format_date(&date), "2023-06-15");
    }
}
