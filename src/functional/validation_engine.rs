//! Field Validation Engine
//!
//! Runs a field's rule chain and folds the outcome into a `FieldResult`, then
//! assembles the five field results of one form snapshot into a
//! `ValidationReport`. Fields never short-circuit each other: every field is
//! evaluated and every applicable message is present in the report.

use serde_derive::Serialize;

use crate::functional::validation_rules::{
    FieldErrorKind, ValidationError, ValidationResult, ValidationRule,
};
use crate::models::booking::Field;

/// Outcome of validating a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldResult {
    pub valid: bool,
    pub code: Option<FieldErrorKind>,
    pub message: Option<&'static str>,
}

impl FieldResult {
    pub fn valid() -> Self {
        Self {
            valid: true,
            code: None,
            message: None,
        }
    }

    /// Creates a failed result carrying the fixed message for `kind`, if it has one.
    ///
    /// # Examples
    ///
    /// ```
    /// let result = FieldResult::invalid(FieldErrorKind::DateTooSoon);
    /// assert!(!result.valid);
    /// assert_eq!(result.message, Some("Заказ на выбранную дату невозможен"));
    /// ```
    pub fn invalid(kind: FieldErrorKind) -> Self {
        Self {
            valid: false,
            code: Some(kind),
            message: kind.message(),
        }
    }
}

impl From<ValidationResult<()>> for FieldResult {
    fn from(result: ValidationResult<()>) -> Self {
        match result {
            Ok(()) => FieldResult::valid(),
            Err(error) => FieldResult::invalid(error.kind),
        }
    }
}

/// Validate one field against an ordered rule chain.
///
/// Rules run in order and the first failing rule decides the result, so a field
/// reports at most one message (the required check is listed first).
pub fn validate_field<T: ?Sized>(
    value: &T,
    field: Field,
    rules: &[&dyn ValidationRule<T>],
) -> FieldResult {
    rules
        .iter()
        .try_for_each(|rule| rule.validate(value, field))
        .into()
}

/// Per-field outcome of validating one form snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub city: FieldResult,
    pub date: FieldResult,
    pub name: FieldResult,
    pub phone: FieldResult,
    pub agreement: FieldResult,
    /// Conjunction of the five field results.
    pub all_valid: bool,
}

impl ValidationReport {
    pub fn new(
        city: FieldResult,
        date: FieldResult,
        name: FieldResult,
        phone: FieldResult,
        agreement: FieldResult,
    ) -> Self {
        let all_valid = [city, date, name, phone, agreement]
            .iter()
            .all(|result| result.valid);

        Self {
            city,
            date,
            name,
            phone,
            agreement,
            all_valid,
        }
    }

    pub fn get(&self, field: Field) -> &FieldResult {
        match field {
            Field::City => &self.city,
            Field::Date => &self.date,
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Agreement => &self.agreement,
        }
    }

    /// Field results in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldResult)> + '_ {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    pub fn invalid_fields(&self) -> Vec<Field> {
        self.iter()
            .filter(|(_, result)| !result.valid)
            .map(|(field, _)| field)
            .collect()
    }

    /// All failures as `ValidationError`s, in form order.
    pub fn errors(&self) -> Vec<ValidationError> {
        self.iter()
            .filter_map(|(field, result)| result.code.map(|kind| ValidationError::new(field, kind)))
            .collect()
    }
}
