use chrono::NaiveDate;
use serde_derive::Serialize;

use crate::{
    error::BookingError,
    functional::date_parser::{format_date, parse_strict},
    models::booking::{validators::BookingFormValidator, ValidationInput},
    utils::clock::{Clock, SystemClock},
};

pub const NOTIFICATION_TITLE: &str = "Успешно!";
pub const NOTIFICATION_CONTENT_PREFIX: &str = "Встреча успешно забронирована на ";

/// An accepted booking, ready to be shown in the success notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingConfirmation {
    pub city: String,
    pub delivery_date: NaiveDate,
    pub name: String,
    pub phone: String,
}

impl BookingConfirmation {
    pub fn title(&self) -> &'static str {
        NOTIFICATION_TITLE
    }

    /// Notification body, e.g. `Встреча успешно забронирована на 02.01.2025`.
    pub fn content(&self) -> String {
        format!("{}{}", NOTIFICATION_CONTENT_PREFIX, format_date(self.delivery_date))
    }
}

/// Gate in front of booking submission: nothing is accepted unless every field
/// of the form is valid.
#[derive(Debug, Clone)]
pub struct BookingService<C: Clock = SystemClock> {
    validator: BookingFormValidator<C>,
}

impl Default for BookingService<SystemClock> {
    fn default() -> Self {
        Self::new(BookingFormValidator::new())
    }
}

impl<C: Clock> BookingService<C> {
    pub fn new(validator: BookingFormValidator<C>) -> Self {
        Self { validator }
    }

    pub fn validator(&self) -> &BookingFormValidator<C> {
        &self.validator
    }

    /// Validates `input` and returns the confirmation for an acceptable booking.
    ///
    /// # Errors
    ///
    /// `BookingError::Validation` with the full report when any field fails.
    pub fn submit(&self, input: &ValidationInput) -> Result<BookingConfirmation, BookingError> {
        let report = self.validator.validate(input);

        let delivery_date = match parse_strict(&input.date) {
            Ok(date) if report.all_valid => date,
            _ => {
                log::warn!(
                    "booking rejected, invalid fields: {:?}",
                    report.invalid_fields()
                );
                return Err(BookingError::Validation(report));
            }
        };

        log::info!(
            "booking accepted: city={}, delivery_date={}",
            input.city,
            delivery_date
        );
        Ok(BookingConfirmation {
            city: input.city.clone(),
            delivery_date,
            name: input.name.clone(),
            phone: input.phone.clone(),
        })
    }
}
