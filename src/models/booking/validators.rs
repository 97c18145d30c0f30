use chrono::NaiveDate;
use once_cell::sync::OnceCell;

use crate::{
    config::{ValidatorConfig, DEFAULT_LEAD_TIME_DAYS},
    functional::{
        validation_engine::{validate_field, FieldResult, ValidationReport},
        validation_rules::{CyrillicName, DeliveryDate, KnownCity, MustBeTrue, PhoneNumber, Required},
    },
    models::{
        booking::{Field, ValidationInput},
        city::KnownCities,
    },
    utils::clock::{Clock, SystemClock},
};

/// Validator for the delivery booking form.
///
/// Holds the immutable city table, the lead time and the clock. Five field
/// validators run independently over one input snapshot; the clock is read once
/// per `validate` call.
#[derive(Debug, Clone)]
pub struct BookingFormValidator<C: Clock = SystemClock> {
    cities: KnownCities,
    lead_time_days: i64,
    clock: C,
}

impl BookingFormValidator<SystemClock> {
    /// Built-in cities, three-day lead time, local date.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for BookingFormValidator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> BookingFormValidator<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            cities: KnownCities::built_in().clone(),
            lead_time_days: DEFAULT_LEAD_TIME_DAYS,
            clock,
        }
    }

    /// Builds a validator from startup configuration.
    pub fn with_config(config: &ValidatorConfig, clock: C) -> Self {
        log::debug!(
            "building booking validator: lead_time_days={}, extra_cities={:?}",
            config.lead_time_days,
            config.extra_cities
        );
        Self {
            cities: KnownCities::built_in().extended(&config.extra_cities),
            lead_time_days: config.lead_time_days,
            clock,
        }
    }

    pub fn cities(&self) -> &KnownCities {
        &self.cities
    }

    pub fn lead_time_days(&self) -> i64 {
        self.lead_time_days
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn validate_city(&self, value: &str) -> FieldResult {
        let known_city = KnownCity {
            cities: &self.cities,
        };
        validate_field(value, Field::City, &[&Required, &known_city])
    }

    /// Validates a delivery date against the clock's current date.
    pub fn validate_date(&self, value: &str) -> FieldResult {
        self.validate_date_on(value, self.clock.today())
    }

    /// Validates a delivery date against an explicit "today".
    ///
    /// No required-check runs first: an empty date fails parsing and reports
    /// the parse message.
    pub fn validate_date_on(&self, value: &str, today: NaiveDate) -> FieldResult {
        let delivery_date = DeliveryDate {
            today,
            lead_time_days: self.lead_time_days,
        };
        validate_field(value, Field::Date, &[&delivery_date])
    }

    pub fn validate_name(&self, value: &str) -> FieldResult {
        validate_field(value, Field::Name, &[&Required, &CyrillicName])
    }

    pub fn validate_phone(&self, value: &str) -> FieldResult {
        validate_field(value, Field::Phone, &[&Required, &PhoneNumber])
    }

    pub fn validate_agreement(&self, agreed: bool) -> FieldResult {
        validate_field(&agreed, Field::Agreement, &[&MustBeTrue])
    }

    /// Runs every field validator and assembles the report.
    pub fn validate(&self, input: &ValidationInput) -> ValidationReport {
        self.validate_on(input, self.clock.today())
    }

    /// Same as [`validate`](Self::validate) with an explicit "today".
    pub fn validate_on(&self, input: &ValidationInput, today: NaiveDate) -> ValidationReport {
        let report = ValidationReport::new(
            self.validate_city(&input.city),
            self.validate_date_on(&input.date, today),
            self.validate_name(&input.name),
            self.validate_phone(&input.phone),
            self.validate_agreement(input.agreed),
        );

        log::debug!(
            "booking form validated: all_valid={}, invalid_fields={:?}",
            report.all_valid,
            report.invalid_fields()
        );
        report
    }

    /// Validates many snapshots against a single reading of the clock.
    pub fn validate_batch(&self, inputs: &[ValidationInput]) -> Vec<ValidationReport> {
        let today = self.clock.today();

        #[cfg(feature = "parallel")]
        let reports: Vec<ValidationReport> = {
            use rayon::prelude::*;
            inputs
                .par_iter()
                .map(|input| self.validate_on(input, today))
                .collect()
        };

        #[cfg(not(feature = "parallel"))]
        let reports: Vec<ValidationReport> = inputs
            .iter()
            .map(|input| self.validate_on(input, today))
            .collect();

        reports
    }
}

fn default_validator() -> &'static BookingFormValidator {
    static DEFAULT_VALIDATOR: OnceCell<BookingFormValidator> = OnceCell::new();
    DEFAULT_VALIDATOR.get_or_init(BookingFormValidator::<SystemClock>::new)
}

/// Validate a booking form with the built-in cities and the local date.
pub fn validate(input: &ValidationInput) -> ValidationReport {
    default_validator().validate(input)
}

pub fn validate_city(value: &str) -> FieldResult {
    default_validator().validate_city(value)
}

pub fn validate_date(value: &str) -> FieldResult {
    default_validator().validate_date(value)
}

pub fn validate_name(value: &str) -> FieldResult {
    default_validator().validate_name(value)
}

pub fn validate_phone(value: &str) -> FieldResult {
    default_validator().validate_phone(value)
}

pub fn validate_agreement(agreed: bool) -> FieldResult {
    default_validator().validate_agreement(agreed)
}
