//! Validation engine for the delivery booking form.
//!
//! The form carries four text fields (city, delivery date, name, phone) and an
//! agreement checkbox. [`validate`] runs one independent validator per field and
//! returns a [`ValidationReport`] with the fixed user-facing message for every
//! failing field; [`BookingService`] refuses a submission unless the report is
//! all-valid.

pub mod config;
pub mod error;
pub mod functional;
pub mod models;
pub mod services;
pub mod utils;

pub use config::ValidatorConfig;
pub use error::{BookingError, ConfigError};
pub use functional::validation_engine::{FieldResult, ValidationReport};
pub use functional::validation_rules::{FieldErrorKind, ValidationError};
pub use models::booking::validators::{
    validate, validate_agreement, validate_city, validate_date, validate_name, validate_phone,
    BookingFormValidator,
};
pub use models::booking::{Field, ValidationInput};
pub use models::city::KnownCities;
pub use services::booking_service::{BookingConfirmation, BookingService};
pub use utils::clock::{Clock, FixedClock, SystemClock};
