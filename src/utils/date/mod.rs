// Date utility functions

use std::fmt::Write;

use chrono::{Datelike, Duration, Local, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::models::settings::DEFAULT_DATE_FORMAT;

/// Today's calendar day in the given timezone, or the local one
pub fn today(timezone: Option<Tz>) -> NaiveDate {
    match timezone {
        Some(tz) => Utc::now().with_timezone(&tz).date_naive(),
        None => Local::now().date_naive(),
    }
}

/// Format a day with a chrono format string, e.g. `%-m/%-d/%Y` -> 12/8/2024
///
/// Falls back to the default en-US form when `format` cannot render a day.
pub fn format_date(date: NaiveDate, format: &str) -> String {
    try_format_date(date, format).unwrap_or_else(|| {
        log::warn!("Date format '{}' is unusable, using the default", format);
        date.format(DEFAULT_DATE_FORMAT).to_string()
    })
}

/// Format a day, or `None` when the format has unknown or time-only specifiers.
pub fn try_format_date(date: NaiveDate, format: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(format)).ok()?;
    Some(out)
}

/// Shift a date by the given number of months, clamping the day.
pub fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let total_months = (date.year() * 12) + (date.month() as i32 - 1) + delta;
    let new_year = total_months.div_euclid(12);
    let new_month = (total_months.rem_euclid(12) + 1) as u32;
    let day = date.day().min(days_in_month(new_year, new_month));
    NaiveDate::from_ymd_opt(new_year, new_month, day).unwrap_or(date)
}

/// Get the number of days in a given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}

/// First cell of a Sunday-first month grid: the Sunday on or before the 1st.
pub fn month_grid_start(month: NaiveDate) -> NaiveDate {
    let first = month.with_day(1).unwrap_or(month);
    first - Duration::days(first.weekday().num_days_from_sunday() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_case(ymd(2024, 12, 8), "%-m/%-d/%Y", "12/8/2024")]
    #[test_case(ymd(2025, 1, 7), "%-m/%-d/%Y", "1/7/2025")]
    #[test_case(ymd(2025, 1, 7), "%d.%m.%Y", "07.01.2025")]
    fn test_format_date(date: NaiveDate, format: &str, expected: &str) {
        assert_eq!(format_date(date, format), expected);
    }

    #[test_case("%H:%M"; "time specifiers")]
    #[test_case("%Q"; "unknown specifier")]
    fn test_unusable_format_falls_back_to_default(format: &str) {
        assert_eq!(try_format_date(ymd(2024, 12, 8), format), None);
        assert_eq!(format_date(ymd(2024, 12, 8), format), "12/8/2024");
    }

    #[test_case(ymd(2024, 1, 31), 1, ymd(2024, 2, 29); "clamps to leap february")]
    #[test_case(ymd(2024, 12, 8), 1, ymd(2025, 1, 8); "crosses year forward")]
    #[test_case(ymd(2025, 1, 19), -1, ymd(2024, 12, 19); "crosses year backward")]
    #[test_case(ymd(2024, 12, 8), -12, ymd(2023, 12, 8); "whole year")]
    fn test_shift_month(date: NaiveDate, delta: i32, expected: NaiveDate) {
        assert_eq!(shift_month(date, delta), expected);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2024, 11), 30);
    }

    #[test]
    fn test_month_grid_start() {
        // December 1, 2024 is a Sunday
        assert_eq!(month_grid_start(ymd(2024, 12, 19)), ymd(2024, 12, 1));
        // January 1, 2025 is a Wednesday
        assert_eq!(month_grid_start(ymd(2025, 1, 7)), ymd(2024, 12, 29));
    }

    #[test]
    fn test_today_with_timezone_is_near_local() {
        let local = Local::now().date_naive();
        let in_tokyo = today(Some(chrono_tz::Asia::Tokyo));
        assert!((in_tokyo - local).num_days().abs() <= 1);
    }
}
