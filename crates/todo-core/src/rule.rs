//! Repeat rules and their textual grammar.
//!
//! ```text
//! y                    every year
//! d <days>             every <days> days, 1..=400
//! w <weekdays>         on ISO weekdays, 1 = Monday .. 7 = Sunday
//! m <days> [<months>]  on days of the month, -1 = last, -2 = second to last
//! ```
//!
//! Lists are comma separated with no spaces. Tokens are separated by a single
//! space.

use std::fmt;
use std::str::FromStr;

use crate::error::RepeatError;

/// Largest interval accepted by a daily rule.
pub const MAX_INTERVAL_DAYS: u32 = 400;
pub const DAYS_IN_WEEK: i32 = 7;
pub const MAX_DAYS_IN_MONTH: i32 = 31;
pub const MONTHS_IN_YEAR: i32 = 12;

/// A parsed repeat rule.
///
/// Only the raw rule string is ever persisted; values of this type are built
/// per calculation and thrown away afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepeatRule {
    Yearly,
    Daily {
        interval_days: u32,
    },
    /// ISO weekday numbers in input order. Duplicates are harmless.
    Weekly {
        weekdays: Vec<u32>,
    },
    /// Days of the month in input order, and an optional explicit month list.
    Monthly {
        month_days: Vec<i32>,
        months: Option<Vec<u32>>,
    },
}

impl RepeatRule {
    /// Parses a rule string such as `"d 7"`, `"w 1,5"` or `"m -1,15 3,6,9"`.
    ///
    /// An empty string is [`RepeatError::MissingRepeatParameters`]; callers that
    /// treat an empty rule as "does not recur" must check for it first.
    pub fn parse(rule: &str) -> Result<Self, RepeatError> {
        if rule.is_empty() {
            return Err(RepeatError::MissingRepeatParameters);
        }

        let tokens: Vec<&str> = rule.split(' ').collect();

        match tokens[0] {
            "y" => Ok(RepeatRule::Yearly),
            "d" => {
                let token = tokens.get(1).ok_or(RepeatError::NoIntervalSpecified)?;
                let days = token
                    .parse::<i64>()
                    .map_err(|_| RepeatError::InvalidNumber(token.to_string()))?;
                if days > i64::from(MAX_INTERVAL_DAYS) {
                    return Err(RepeatError::MaxIntervalExceeded);
                }
                if days < 1 {
                    return Err(RepeatError::ValueOutOfRange {
                        value: i32::try_from(days).unwrap_or(i32::MIN),
                        min: 1,
                        max: MAX_INTERVAL_DAYS as i32,
                    });
                }
                Ok(RepeatRule::Daily {
                    interval_days: days.unsigned_abs() as u32,
                })
            }
            "w" => {
                let token = tokens.get(1).ok_or(RepeatError::NoIntervalSpecified)?;
                let weekdays = parse_list(token, 1, DAYS_IN_WEEK)?
                    .into_iter()
                    .map(i32::unsigned_abs)
                    .collect();
                Ok(RepeatRule::Weekly { weekdays })
            }
            "m" => {
                let params = &tokens[1..];
                if params.is_empty() {
                    return Err(RepeatError::NoIntervalSpecified);
                }
                if params.len() > 2 {
                    return Err(RepeatError::MalformedRule(format!(
                        "monthly rule takes at most two lists, got {}",
                        params.len()
                    )));
                }

                let month_days = parse_list(params[0], -2, MAX_DAYS_IN_MONTH)?;
                if month_days.contains(&0) {
                    return Err(RepeatError::ValueOutOfRange {
                        value: 0,
                        min: -2,
                        max: MAX_DAYS_IN_MONTH,
                    });
                }

                let months = params
                    .get(1)
                    .map(|token| parse_list(token, 1, MONTHS_IN_YEAR))
                    .transpose()?
                    .map(|months| months.into_iter().map(i32::unsigned_abs).collect());

                Ok(RepeatRule::Monthly { month_days, months })
            }
            _ => Err(RepeatError::UnsupportedRepeatFormat),
        }
    }
}

impl FromStr for RepeatRule {
    type Err = RepeatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RepeatRule::parse(s)
    }
}

impl fmt::Display for RepeatRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepeatRule::Yearly => write!(f, "y"),
            RepeatRule::Daily { interval_days } => write!(f, "d {interval_days}"),
            RepeatRule::Weekly { weekdays } => write!(f, "w {}", join(weekdays)),
            RepeatRule::Monthly { month_days, months } => {
                write!(f, "m {}", join(month_days))?;
                if let Some(months) = months {
                    write!(f, " {}", join(months))?;
                }
                Ok(())
            }
        }
    }
}

fn parse_number(token: &str) -> Result<i32, RepeatError> {
    token
        .parse::<i32>()
        .map_err(|_| RepeatError::InvalidNumber(token.to_string()))
}

/// Parses a comma separated list, checking every value against `min..=max`.
fn parse_list(token: &str, min: i32, max: i32) -> Result<Vec<i32>, RepeatError> {
    token
        .split(',')
        .map(|item| {
            let value = parse_number(item)?;
            if value < min || value > max {
                return Err(RepeatError::ValueOutOfRange { value, min, max });
            }
            Ok(value)
        })
        .collect()
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yearly_ignores_extra_tokens() {
        assert_eq!(RepeatRule::parse("y"), Ok(RepeatRule::Yearly));
        assert_eq!(RepeatRule::parse("y 5"), Ok(RepeatRule::Yearly));
    }

    #[test]
    fn test_parse_daily_bounds() {
        assert_eq!(
            RepeatRule::parse("d 1"),
            Ok(RepeatRule::Daily { interval_days: 1 })
        );
        assert_eq!(
            RepeatRule::parse("d 400"),
            Ok(RepeatRule::Daily { interval_days: 400 })
        );
        assert_eq!(
            RepeatRule::parse("d 401"),
            Err(RepeatError::MaxIntervalExceeded)
        );
        assert!(matches!(
            RepeatRule::parse("d 0"),
            Err(RepeatError::ValueOutOfRange { value: 0, .. })
        ));
        assert_eq!(
            RepeatRule::parse("d"),
            Err(RepeatError::NoIntervalSpecified)
        );
        assert_eq!(
            RepeatRule::parse("d seven"),
            Err(RepeatError::InvalidNumber("seven".to_string()))
        );
    }

    #[test]
    fn test_parse_weekly() {
        assert_eq!(
            RepeatRule::parse("w 1,3,7"),
            Ok(RepeatRule::Weekly {
                weekdays: vec![1, 3, 7]
            })
        );
        assert_eq!(
            RepeatRule::parse("w"),
            Err(RepeatError::NoIntervalSpecified)
        );
        assert_eq!(
            RepeatRule::parse("w 0"),
            Err(RepeatError::ValueOutOfRange {
                value: 0,
                min: 1,
                max: 7
            })
        );
        assert_eq!(
            RepeatRule::parse("w 1,,2"),
            Err(RepeatError::InvalidNumber(String::new()))
        );
    }

    #[test]
    fn test_parse_monthly() {
        assert_eq!(
            RepeatRule::parse("m -1,15"),
            Ok(RepeatRule::Monthly {
                month_days: vec![-1, 15],
                months: None
            })
        );
        assert_eq!(
            RepeatRule::parse("m 1,-2 3,6,9"),
            Ok(RepeatRule::Monthly {
                month_days: vec![1, -2],
                months: Some(vec![3, 6, 9])
            })
        );
        assert_eq!(
            RepeatRule::parse("m"),
            Err(RepeatError::NoIntervalSpecified)
        );
        assert!(matches!(
            RepeatRule::parse("m 32"),
            Err(RepeatError::ValueOutOfRange { value: 32, .. })
        ));
        assert!(matches!(
            RepeatRule::parse("m -3"),
            Err(RepeatError::ValueOutOfRange { value: -3, .. })
        ));
        assert!(matches!(
            RepeatRule::parse("m 0"),
            Err(RepeatError::ValueOutOfRange { value: 0, .. })
        ));
        assert!(matches!(
            RepeatRule::parse("m 1 13"),
            Err(RepeatError::ValueOutOfRange { value: 13, .. })
        ));
        assert!(matches!(
            RepeatRule::parse("m 1 2 3"),
            Err(RepeatError::MalformedRule(_))
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_family_and_empty_rule() {
        assert_eq!(
            RepeatRule::parse("x 1"),
            Err(RepeatError::UnsupportedRepeatFormat)
        );
        assert_eq!(
            RepeatRule::parse(""),
            Err(RepeatError::MissingRepeatParameters)
        );
        assert_eq!(
            RepeatRule::parse(" d 1"),
            Err(RepeatError::UnsupportedRepeatFormat)
        );
    }

    #[test]
    fn test_display_renders_canonical_form() {
        for rule in ["y", "d 7", "w 1,5", "m -1,15", "m 1,-2 3,6,9"] {
            let parsed: RepeatRule = rule.parse().unwrap();
            assert_eq!(parsed.to_string(), rule);
        }
    }
}
