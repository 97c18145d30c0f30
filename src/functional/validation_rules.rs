//! Composable Validation Rules
//!
//! Pure field rules for the delivery booking form. Each rule checks one aspect of
//! one raw field value and returns a `ValidationResult`; the engine runs a field's
//! rules in order and keeps the first failure.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_derive::Serialize;
use std::fmt;

use crate::functional::date_parser::{days_until, parse_strict};
use crate::models::booking::Field;
use crate::models::city::KnownCities;

pub const EMPTY_FIELD_MSG: &str = "Поле обязательно для заполнения";
pub const UNKNOWN_CITY_MSG: &str = "Доставка в выбранный город недоступна";
pub const NOT_A_DATE_MSG: &str = "Неверно введена дата";
pub const DATE_TOO_SOON_MSG: &str = "Заказ на выбранную дату невозможен";
pub const INVALID_NAME_MSG: &str =
    "Имя и Фамилия указаные неверно. Допустимы только русские буквы, пробелы и дефисы.";
pub const INVALID_PHONE_MSG: &str =
    "Телефон указан неверно. Должно быть 11 цифр, например, +79012345678.";

/// Cached regex patterns for validation
static NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[А-Яа-яЁё -]+$").unwrap());
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+[0-9]{11}$").unwrap());

/// Validation result type for composable validation chains
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Why a field was rejected. Every kind maps to one fixed user-facing message,
/// except `AgreementNotChecked`, which the form renders as a visual marker only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldErrorKind {
    EmptyRequired,
    NotAKnownCity,
    UnparsableDate,
    DateTooSoon,
    InvalidNameCharacters,
    InvalidPhoneFormat,
    AgreementNotChecked,
}

impl FieldErrorKind {
    pub fn message(self) -> Option<&'static str> {
        match self {
            FieldErrorKind::EmptyRequired => Some(EMPTY_FIELD_MSG),
            FieldErrorKind::NotAKnownCity => Some(UNKNOWN_CITY_MSG),
            FieldErrorKind::UnparsableDate => Some(NOT_A_DATE_MSG),
            FieldErrorKind::DateTooSoon => Some(DATE_TOO_SOON_MSG),
            FieldErrorKind::InvalidNameCharacters => Some(INVALID_NAME_MSG),
            FieldErrorKind::InvalidPhoneFormat => Some(INVALID_PHONE_MSG),
            FieldErrorKind::AgreementNotChecked => None,
        }
    }

    /// Stable machine-readable code, identical to the serialized form.
    pub fn code(self) -> &'static str {
        match self {
            FieldErrorKind::EmptyRequired => "EMPTY_REQUIRED",
            FieldErrorKind::NotAKnownCity => "NOT_A_KNOWN_CITY",
            FieldErrorKind::UnparsableDate => "UNPARSABLE_DATE",
            FieldErrorKind::DateTooSoon => "DATE_TOO_SOON",
            FieldErrorKind::InvalidNameCharacters => "INVALID_NAME_CHARACTERS",
            FieldErrorKind::InvalidPhoneFormat => "INVALID_PHONE_FORMAT",
            FieldErrorKind::AgreementNotChecked => "AGREEMENT_NOT_CHECKED",
        }
    }
}

/// Validation error with detailed information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    pub field: Field,
    pub kind: FieldErrorKind,
}

impl ValidationError {
    pub fn new(field: Field, kind: FieldErrorKind) -> Self {
        Self { field, kind }
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn message(&self) -> Option<&'static str> {
        self.kind.message()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(f, "{} [{}]: {}", self.field, self.code(), message),
            None => write!(f, "{} [{}]", self.field, self.code()),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Core validation rule trait for composable validation
pub trait ValidationRule<T: ?Sized> {
    fn validate(&self, value: &T, field: Field) -> ValidationResult<()>;
}

/// Required field validation - rejects the empty string
pub struct Required;

impl ValidationRule<str> for Required {
    fn validate(&self, value: &str, field: Field) -> ValidationResult<()> {
        if value.is_empty() {
            return Err(ValidationError::new(field, FieldErrorKind::EmptyRequired));
        }
        Ok(())
    }
}

/// Case-insensitive membership in the set of cities delivery is offered to.
///
/// Any non-member is reported the same way, whether it is an unsupported city, a
/// misspelling, a missing hyphen or stray digits.
pub struct KnownCity<'a> {
    pub cities: &'a KnownCities,
}

impl ValidationRule<str> for KnownCity<'_> {
    fn validate(&self, value: &str, field: Field) -> ValidationResult<()> {
        if !self.cities.contains(value) {
            return Err(ValidationError::new(field, FieldErrorKind::NotAKnownCity));
        }
        Ok(())
    }
}

/// Delivery date rule: strict `dd.mm.yyyy` parse, then the lead-time check.
///
/// An empty value fails the parse stage, so an empty date is reported as
/// `UnparsableDate` rather than `EmptyRequired`.
pub struct DeliveryDate {
    pub today: NaiveDate,
    pub lead_time_days: i64,
}

impl ValidationRule<str> for DeliveryDate {
    /// Ensures `value` is a real calendar date at least `lead_time_days` after `today`.
    ///
    /// # Examples
    ///
    /// ```
    /// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    /// let rule = DeliveryDate { today, lead_time_days: 3 };
    /// assert!(rule.validate("04.06.2024", Field::Date).is_ok());
    /// assert_eq!(
    ///     rule.validate("03.06.2024", Field::Date).unwrap_err().kind,
    ///     FieldErrorKind::DateTooSoon
    /// );
    /// ```
    fn validate(&self, value: &str, field: Field) -> ValidationResult<()> {
        let date = parse_strict(value)
            .map_err(|_| ValidationError::new(field, FieldErrorKind::UnparsableDate))?;

        if days_until(date, self.today) < self.lead_time_days {
            return Err(ValidationError::new(field, FieldErrorKind::DateTooSoon));
        }
        Ok(())
    }
}

/// Russian letters, spaces and hyphens only, with at least one letter.
pub struct CyrillicName;

fn is_russian_letter(c: char) -> bool {
    matches!(c, 'А'..='я' | 'Ё' | 'ё')
}

impl ValidationRule<str> for CyrillicName {
    fn validate(&self, value: &str, field: Field) -> ValidationResult<()> {
        if !NAME_REGEX.is_match(value) || !value.chars().any(is_russian_letter) {
            return Err(ValidationError::new(
                field,
                FieldErrorKind::InvalidNameCharacters,
            ));
        }
        Ok(())
    }
}

/// Phone number: a leading `+` and exactly 11 digits, nothing else.
pub struct PhoneNumber;

impl ValidationRule<str> for PhoneNumber {
    fn validate(&self, value: &str, field: Field) -> ValidationResult<()> {
        if !PHONE_REGEX.is_match(value) {
            return Err(ValidationError::new(field, FieldErrorKind::InvalidPhoneFormat));
        }
        Ok(())
    }
}

/// Boolean validation (must be true)
pub struct MustBeTrue;

impl ValidationRule<bool> for MustBeTrue {
    fn validate(&self, value: &bool, field: Field) -> ValidationResult<()> {
        if !*value {
            return Err(ValidationError::new(
                field,
                FieldErrorKind::AgreementNotChecked,
            ));
        }
        Ok(())
    }
}
