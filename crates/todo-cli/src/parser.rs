use anyhow::{anyhow, Result};
use chrono::{Duration, NaiveDate, Utc};
use todo_core::date;

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Resolves a date typed on the command line into `YYYYMMDD`.
///
/// Accepts `YYYYMMDD`, `today` and `tomorrow`. An empty value is passed
/// through so the workflow can apply its own default.
pub fn parse_date_input(input: &str, today: NaiveDate) -> Result<String> {
    let trimmed = input.trim();
    match trimmed.to_lowercase().as_str() {
        "" => Ok(String::new()),
        "today" => Ok(date::format_date(today)),
        "tomorrow" => Ok(date::format_date(today + Duration::days(1))),
        _ => date::parse_date(trimmed)
            .map(date::format_date)
            .map_err(|_| {
                anyhow!(
                    "Failed to parse date '{}': expected YYYYMMDD, 'today' or 'tomorrow'",
                    input
                )
            }),
    }
}
