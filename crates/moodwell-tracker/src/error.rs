use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    #[error("invalid date {input:?}: expected YYYY-MM-DD")]
    InvalidDate { input: String },

    #[error("event dated {attempted} is before the last recorded event {last}")]
    OutOfOrder {
        last: NaiveDate,
        attempted: NaiveDate,
    },
}
