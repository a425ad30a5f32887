//! Next-occurrence calculation for parsed repeat rules.
//!
//! Each rule family decides "far enough in the future" differently:
//!
//! | family  | start                 | accepted when                     |
//! |---------|-----------------------|-----------------------------------|
//! | yearly  | base + 1 year         | candidate > today                 |
//! | daily   | base + interval       | candidate >= today                |
//! | weekly  | today + 1 day         | weekday is in the rule            |
//! | monthly | per-month day lists   | candidate at midnight >= now      |
//!
//! A daily rule may land on today, a yearly rule never does.

use chrono::{Datelike, Days};

use crate::date::{self, CalendarDate, Moment};
use crate::error::RepeatError;
use crate::rule::{RepeatRule, MAX_INTERVAL_DAYS};

/// Computes the next date on which `rule` occurs, searching from `base`.
///
/// `now` must be captured once by the caller and is never re-read.
pub fn next_date(
    now: Moment,
    base: CalendarDate,
    rule: &RepeatRule,
) -> Result<CalendarDate, RepeatError> {
    match rule {
        RepeatRule::Yearly => next_yearly(now, base),
        RepeatRule::Daily { interval_days } => next_daily(now, base, *interval_days),
        RepeatRule::Weekly { weekdays } => next_weekly(now, weekdays),
        RepeatRule::Monthly { month_days, months } => {
            next_monthly(now, base, month_days, months.as_deref())
        }
    }
}

fn next_yearly(now: Moment, base: CalendarDate) -> Result<CalendarDate, RepeatError> {
    let today = now.date();

    let mut candidate = date::add_years(base, 1).ok_or(RepeatError::DateCalculation)?;
    while candidate <= today {
        candidate = date::add_years(candidate, 1).ok_or(RepeatError::DateCalculation)?;
    }

    Ok(candidate)
}

fn next_daily(
    now: Moment,
    base: CalendarDate,
    interval_days: u32,
) -> Result<CalendarDate, RepeatError> {
    if interval_days > MAX_INTERVAL_DAYS {
        return Err(RepeatError::MaxIntervalExceeded);
    }
    if interval_days == 0 {
        return Err(RepeatError::ValueOutOfRange {
            value: 0,
            min: 1,
            max: MAX_INTERVAL_DAYS as i32,
        });
    }

    let today = now.date();
    let step = i64::from(interval_days);

    let first = base
        .checked_add_days(Days::new(step as u64))
        .ok_or(RepeatError::DateCalculation)?;
    if today <= first {
        return Ok(first);
    }

    // Jump straight to the first step that is not before today.
    let behind = (today - first).num_days();
    let steps = (behind + step - 1) / step;

    first
        .checked_add_days(Days::new((steps * step) as u64))
        .ok_or(RepeatError::DateCalculation)
}

fn next_weekly(now: Moment, weekdays: &[u32]) -> Result<CalendarDate, RepeatError> {
    if weekdays.is_empty() {
        return Err(RepeatError::NoIntervalSpecified);
    }

    let mut candidate = now.date();
    for _ in 0..7 {
        candidate = candidate.succ_opt().ok_or(RepeatError::DateCalculation)?;
        if weekdays.contains(&date::iso_weekday(candidate)) {
            return Ok(candidate);
        }
    }

    Err(RepeatError::DateCalculation)
}

fn next_monthly(
    now: Moment,
    base: CalendarDate,
    month_days: &[i32],
    months: Option<&[u32]>,
) -> Result<CalendarDate, RepeatError> {
    if month_days.is_empty() {
        return Err(RepeatError::NoIntervalSpecified);
    }

    let months: Vec<u32> = match months {
        Some(explicit) => {
            let mut sorted = explicit.to_vec();
            sorted.sort_unstable();
            sorted
        }
        None => {
            let anchor = if date::start_of_day(base) > now {
                base.month()
            } else {
                now.month()
            };
            vec![anchor, anchor + 1]
        }
    };

    // Concrete days first in ascending order, then -2 before -1.
    let mut days = month_days.to_vec();
    days.sort_by_key(|&day| (day < 0, day));

    let year = now.year();
    let calendar = months
        .iter()
        .map(|&month| {
            date::first_of_month(year, month)
                .map(date::days_of_month)
                .ok_or(RepeatError::DateCalculation)
        })
        .collect::<Result<Vec<_>, _>>()?;

    for &day in &days {
        for dates in &calendar {
            let Some(candidate) = pick_day(dates, day) else {
                continue;
            };
            if date::start_of_day(candidate) >= now {
                return Ok(candidate);
            }
        }
    }

    Err(RepeatError::DateCalculation)
}

/// Selects `day` from a month's dates; negative values count from the end.
fn pick_day(dates: &[CalendarDate], day: i32) -> Option<CalendarDate> {
    let index = if day < 0 {
        dates.len().checked_sub(day.unsigned_abs() as usize)?
    } else {
        (day as usize).checked_sub(1)?
    };
    dates.get(index).copied()
}
