//! Date Helpers
//!
//! Short-date formatting, route date parsing and week-start arithmetic.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Short date format used in routes and API payloads (YYYY-MM-DD)
pub const SHORT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Base route of the time page
pub const TIME_BASE_URL: &str = "/time/";

const SHORT_DATE_LEN: usize = 10;

pub fn short_date(date: NaiveDate) -> String {
    date.format(SHORT_DATE_FORMAT).to_string()
}

pub fn parse_short_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, SHORT_DATE_FORMAT).ok()
}

/// Route to the time page for a given day
pub fn time_path(date: NaiveDate) -> String {
    format!("{}{}", TIME_BASE_URL, short_date(date))
}

/// Resolve the day a time page path points at.
///
/// `/time` and `/time/` mean today. A date segment longer than 10 characters
/// is truncated, a shorter or unparsable one falls back to today.
pub fn start_date_from_path(pathname: &str, today: NaiveDate) -> NaiveDate {
    let base = TIME_BASE_URL.trim_end_matches('/');
    if pathname == TIME_BASE_URL || pathname == base {
        return today;
    }

    let Some(segment) = pathname.strip_prefix(TIME_BASE_URL) else {
        return today;
    };

    if segment.chars().count() < SHORT_DATE_LEN {
        log::error!("Invalid date in path: {}", segment);
        return today;
    }

    let segment: String = segment.chars().take(SHORT_DATE_LEN).collect();
    match parse_short_date(&segment) {
        Some(date) => date,
        None => {
            log::error!("Invalid date path: {}", segment);
            today
        }
    }
}

/// Every day from `start` to `end`, inclusive
pub fn days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|day| *day <= end).collect()
}

/// Account week start index (0 = Sunday .. 6 = Saturday) as a chrono weekday
pub fn weekday_from_index(index: u8) -> Weekday {
    match index % 7 {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}

/// Most recent day on or before `today` that falls on `week_start`
pub fn start_of_week(today: NaiveDate, week_start: Weekday) -> NaiveDate {
    let today_index = today.weekday().num_days_from_sunday() as i64;
    let start_index = week_start.num_days_from_sunday() as i64;
    let back = (today_index - start_index).rem_euclid(7);
    today - Duration::days(back)
}

/// Deserializes a date that may carry a time suffix ("2024-03-04T00:00:00Z")
pub mod lenient {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let head: String = raw.chars().take(10).collect();
        super::parse_short_date(&head)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {}", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_time_path_round_trip() {
        let day = date(2024, 3, 4);
        assert_eq!(time_path(day), "/time/2024-03-04");
        assert_eq!(start_date_from_path(&time_path(day), date(2020, 1, 1)), day);
    }

    #[test]
    fn test_bare_time_path_is_today() {
        let today = date(2024, 5, 17);
        assert_eq!(start_date_from_path("/time", today), today);
        assert_eq!(start_date_from_path("/time/", today), today);
        assert_eq!(start_date_from_path("/projects", today), today);
    }

    #[test]
    fn test_long_date_segment_is_truncated() {
        let today = date(2024, 5, 17);
        assert_eq!(start_date_from_path("/time/2024-02-29extra", today), date(2024, 2, 29));
    }

    #[test]
    fn test_short_or_invalid_segment_falls_back() {
        let today = date(2024, 5, 17);
        assert_eq!(start_date_from_path("/time/2024-1-1", today), today);
        assert_eq!(start_date_from_path("/time/2023-02-30", today), today);
        assert_eq!(start_date_from_path("/time/abcdefghij", today), today);
    }

    #[test]
    fn test_days_between_inclusive() {
        let days = days_between(date(2024, 2, 27), date(2024, 3, 2));
        assert_eq!(days.len(), 5);
        assert_eq!(days[2], date(2024, 2, 29));
        assert!(days_between(date(2024, 3, 2), date(2024, 3, 1)).is_empty());
    }

    #[test]
    fn test_start_of_week() {
        // 2024-05-15 is a Wednesday
        let wednesday = date(2024, 5, 15);
        assert_eq!(start_of_week(wednesday, Weekday::Sun), date(2024, 5, 12));
        assert_eq!(start_of_week(wednesday, Weekday::Mon), date(2024, 5, 13));
        assert_eq!(start_of_week(wednesday, Weekday::Sat), date(2024, 5, 11));
        assert_eq!(start_of_week(wednesday, Weekday::Wed), wednesday);
    }

    #[test]
    fn test_weekday_from_index() {
        assert_eq!(weekday_from_index(0), Weekday::Sun);
        assert_eq!(weekday_from_index(1), Weekday::Mon);
        assert_eq!(weekday_from_index(6), Weekday::Sat);
    }

    #[test]
    fn test_lenient_date() {
        #[derive(serde::Deserialize)]
        struct Wrapper {
            #[serde(with = "lenient")]
            day: NaiveDate,
        }
        let plain: Wrapper = serde_json::from_str(r#"{"day":"2024-03-04"}"#).unwrap();
        let stamped: Wrapper = serde_json::from_str(r#"{"day":"2024-03-04T00:00:00Z"}"#).unwrap();
        assert_eq!(plain.day, stamped.day);
        assert!(serde_json::from_str::<Wrapper>(r#"{"day":"soon"}"#).is_err());
    }
}
