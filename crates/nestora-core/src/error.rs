use chrono::NaiveDate;
use nestora_domain::{AmountError, RentMonthError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Lease end date {end} precedes start date {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid month: {0}")]
    InvalidMonth(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<AmountError> for CoreError {
    fn from(err: AmountError) -> Self {
        CoreError::InvalidAmount(err.to_string())
    }
}

impl From<RentMonthError> for CoreError {
    fn from(err: RentMonthError) -> Self {
        CoreError::InvalidMonth(err.to_string())
    }
}
