use thiserror::Error;

/// Errors produced while parsing a repeat rule or computing its next date.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepeatError {
    #[error("missing repeat parameters")]
    MissingRepeatParameters,

    #[error("no interval specified")]
    NoIntervalSpecified,

    #[error("maximum interval exceeded")]
    MaxIntervalExceeded,

    #[error("unsupported repeat format")]
    UnsupportedRepeatFormat,

    #[error("invalid date format: '{0}'")]
    InvalidDateFormat(String),

    #[error("error in date calculation")]
    DateCalculation,

    #[error("expected an integer, got '{0}'")]
    InvalidNumber(String),

    #[error("illegal value {value}, expected {min}..={max}")]
    ValueOutOfRange { value: i32, min: i32, max: i32 },

    #[error("malformed repeat rule: {0}")]
    MalformedRule(String),
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    #[error("Migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("Task not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error(transparent)]
    Repeat(#[from] RepeatError),
}
