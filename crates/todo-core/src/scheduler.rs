//! String-in, string-out entry point to the repeat-rule engine.
//!
//! Task workflows and the command line only ever talk to these two functions.
//! Neither of them logs, persists or blocks.

use chrono::Datelike;

use crate::date::{self, Moment, MAX_YEAR};
use crate::error::RepeatError;
use crate::next_date::next_date;
use crate::rule::RepeatRule;

/// Computes the next `YYYYMMDD` date for `rule`, starting from `base_date`.
///
/// `now` is itself a `YYYYMMDD` string and is taken at midnight.
///
/// ```
/// use todo_core::scheduler::compute_next;
///
/// assert_eq!(compute_next("20240310", "20240305", "d 5").unwrap(), "20240310");
/// assert_eq!(compute_next("20240301", "20230301", "y").unwrap(), "20250301");
/// ```
pub fn compute_next(now: &str, base_date: &str, rule: &str) -> Result<String, RepeatError> {
    let now = date::parse_date(now)?;
    compute_next_at(date::start_of_day(now), base_date, rule)
}

/// Same as [`compute_next`] but with an already captured `now`.
///
/// An empty rule fails with [`RepeatError::MissingRepeatParameters`] before the
/// base date or the rule are looked at. A result that does not fit in
/// `YYYYMMDD` fails with [`RepeatError::DateCalculation`].
pub fn compute_next_at(now: Moment, base_date: &str, rule: &str) -> Result<String, RepeatError> {
    if rule.is_empty() {
        return Err(RepeatError::MissingRepeatParameters);
    }

    let base = date::parse_date(base_date)?;
    let rule = RepeatRule::parse(rule)?;
    let next = next_date(now, base, &rule)?;
    if next.year() > MAX_YEAR {
        return Err(RepeatError::DateCalculation);
    }

    Ok(date::format_date(next))
}
