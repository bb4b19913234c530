use thiserror::Error;

/// Errors that can occur while computing a next occurrence.
#[derive(Debug, Error)]
pub enum RecurrenceError {
    /// The stored date is not a strict `YYYYMMDD` calendar date.
    #[error("invalid date: {0:?}")]
    InvalidDate(String),

    /// The repeat rule is empty, has an unknown prefix, or carries a
    /// malformed / out-of-range argument.
    #[error("invalid repeat rule: {0:?}")]
    InvalidRule(String),
}

pub type Result<T> = std::result::Result<T, RecurrenceError>;
