//! Error types for session-time operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimeError {
    #[error("Invalid time zone: {0}")]
    InvalidTimeZone(String),

    #[error("Invalid date time: {0}")]
    InvalidDateTime(String),
}

pub type Result<T> = std::result::Result<T, TimeError>;
