//! Calendar primitives shared by the repeat-rule engine.
//!
//! Dates cross the crate boundary as fixed-width `YYYYMMDD` strings. Inside the
//! engine they are plain [`NaiveDate`] values with no time zone attached.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::RepeatError;

/// A day-granularity Gregorian date.
pub type CalendarDate = NaiveDate;

/// The current instant, carrying both a date and a time of day.
pub type Moment = NaiveDateTime;

/// `strftime` layout of the external `YYYYMMDD` representation.
pub const DATE_FORMAT: &str = "%Y%m%d";

/// Last year that still formats as four digits.
pub const MAX_YEAR: i32 = 9999;

/// Parses an eight digit `YYYYMMDD` string.
///
/// Anything other than exactly eight ASCII digits naming a real calendar day
/// is rejected with [`RepeatError::InvalidDateFormat`].
pub fn parse_date(value: &str) -> Result<CalendarDate, RepeatError> {
    let invalid = || RepeatError::InvalidDateFormat(value.to_string());

    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let year: i32 = value[0..4].parse().map_err(|_| invalid())?;
    let month: u32 = value[4..6].parse().map_err(|_| invalid())?;
    let day: u32 = value[6..8].parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Formats a date in the external `YYYYMMDD` representation.
pub fn format_date(date: CalendarDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Midnight at the start of `date`.
#[inline]
pub fn start_of_day(date: CalendarDate) -> Moment {
    date.and_time(NaiveTime::MIN)
}

/// ISO weekday number: 1 = Monday ... 7 = Sunday.
#[inline]
pub fn iso_weekday(date: CalendarDate) -> u32 {
    date.weekday().number_from_monday()
}

/// Adds whole years, normalising an impossible day into the next month.
///
/// 29 February plus one year is 1 March, not 28 February.
pub fn add_years(date: CalendarDate, years: i32) -> Option<CalendarDate> {
    let year = date.year().checked_add(years)?;

    NaiveDate::from_ymd_opt(year, date.month(), date.day()).or_else(|| {
        NaiveDate::from_ymd_opt(year, date.month(), 1)?
            .checked_add_days(Days::new(u64::from(date.day() - 1)))
    })
}

/// First day of `month` in `year`, where months past 12 roll into later years.
///
/// Month 13 of 2024 is January 2025.
pub fn first_of_month(year: i32, month: u32) -> Option<CalendarDate> {
    let offset = month.checked_sub(1)?;
    NaiveDate::from_ymd_opt(year, 1, 1)?.checked_add_months(Months::new(offset))
}

/// Every date of the month that starts at `first`, in order.
pub fn days_of_month(first: CalendarDate) -> Vec<CalendarDate> {
    first
        .iter_days()
        .take_while(|day| day.month() == first.month())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date_accepts_eight_digits() {
        assert_eq!(parse_date("20240301").unwrap(), ymd(2024, 3, 1));
        assert_eq!(parse_date("00010101").unwrap(), ymd(1, 1, 1));
    }

    #[test]
    fn test_parse_date_rejects_malformed_input() {
        let inputs = [
            "",
            "2024031",
            "202403011",
            "2024-3-01",
            "+2024031",
            "20240230",
            "20241301",
            "2024O301",
        ];
        for input in inputs {
            assert_eq!(
                parse_date(input),
                Err(RepeatError::InvalidDateFormat(input.to_string())),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_format_date_pads_to_eight_digits() {
        assert_eq!(format_date(ymd(2024, 3, 1)), "20240301");
        assert_eq!(format_date(ymd(987, 12, 9)), "09871209");
    }

    #[test]
    fn test_add_years_normalises_leap_day() {
        assert_eq!(add_years(ymd(2024, 2, 29), 1), Some(ymd(2025, 3, 1)));
        assert_eq!(add_years(ymd(2024, 2, 29), 4), Some(ymd(2028, 2, 29)));
        assert_eq!(add_years(ymd(2023, 7, 15), 1), Some(ymd(2024, 7, 15)));
    }

    #[test]
    fn test_first_of_month_rolls_over() {
        assert_eq!(first_of_month(2024, 12), Some(ymd(2024, 12, 1)));
        assert_eq!(first_of_month(2024, 13), Some(ymd(2025, 1, 1)));
        assert_eq!(first_of_month(2024, 0), None);
    }

    #[test]
    fn test_days_of_month_lengths() {
        assert_eq!(days_of_month(ymd(2023, 2, 1)).len(), 28);
        assert_eq!(days_of_month(ymd(2024, 2, 1)).len(), 29);
        assert_eq!(days_of_month(ymd(2024, 4, 1)).len(), 30);
        let december = days_of_month(ymd(2024, 12, 1));
        assert_eq!(december.len(), 31);
        assert_eq!(december.last(), Some(&ymd(2024, 12, 31)));
    }

    #[test]
    fn test_iso_weekday() {
        assert_eq!(iso_weekday(ymd(2024, 3, 4)), 1);
        assert_eq!(iso_weekday(ymd(2024, 3, 6)), 3);
        assert_eq!(iso_weekday(ymd(2024, 3, 10)), 7);
    }
}
