use thiserror::Error;

use crate::functional::validation_engine::ValidationReport;

/// Startup configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be a whole number of days, got {value:?}")]
    InvalidLeadTime { key: &'static str, value: String },
    #[error("{key} must not be negative, got {value}")]
    NegativeLeadTime { key: &'static str, value: i64 },
    #[error("failed to read .env file: {0}")]
    DotEnv(#[from] dotenv::Error),
}

/// A booking submission was refused.
#[derive(Debug, Clone, Error)]
pub enum BookingError {
    #[error("booking rejected: {} field(s) failed validation", .0.invalid_fields().len())]
    Validation(ValidationReport),
}

impl BookingError {
    pub fn report(&self) -> &ValidationReport {
        match self {
            BookingError::Validation(report) => report,
        }
    }
}
