/// End-to-end booking form scenarios: one valid submission, then each field
/// broken in turn. A fixed clock stands in for "today" so the lead-time boundary
/// is deterministic.

#[cfg(test)]
mod tests {
    use booking_form::functional::date_parser::format_date;
    use booking_form::functional::validation_rules::{
        DATE_TOO_SOON_MSG, EMPTY_FIELD_MSG, INVALID_NAME_MSG, INVALID_PHONE_MSG, NOT_A_DATE_MSG,
        UNKNOWN_CITY_MSG,
    };
    use booking_form::{
        BookingError, BookingFormValidator, BookingService, Field, FieldErrorKind, FixedClock,
        ValidationInput, ValidationReport,
    };
    use chrono::{Days, NaiveDate};

    const CITY: &str = "Москва";
    const NAME: &str = "Иванов Иван";
    const PHONE: &str = "+71111222333";
    const SHIFT_DATE: u64 = 3;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn calculate_date(days: u64) -> String {
        format_date(today().checked_add_days(Days::new(days)).unwrap())
    }

    fn validator() -> BookingFormValidator<FixedClock> {
        BookingFormValidator::with_clock(FixedClock(today()))
    }

    fn valid_input() -> ValidationInput {
        ValidationInput::new(CITY, calculate_date(SHIFT_DATE), NAME, PHONE, true)
    }

    fn validate(input: &ValidationInput) -> ValidationReport {
        validator().validate(input)
    }

    fn with_city(city: &str) -> ValidationReport {
        validate(&ValidationInput {
            city: city.to_string(),
            ..valid_input()
        })
    }

    fn with_date(date: &str) -> ValidationReport {
        validate(&ValidationInput {
            date: date.to_string(),
            ..valid_input()
        })
    }

    fn with_name(name: &str) -> ValidationReport {
        validate(&ValidationInput {
            name: name.to_string(),
            ..valid_input()
        })
    }

    fn with_phone(phone: &str) -> ValidationReport {
        validate(&ValidationInput {
            phone: phone.to_string(),
            ..valid_input()
        })
    }

    /// Only `field` fails, with `message`.
    fn assert_only_failure(report: &ValidationReport, field: Field, message: &str) {
        assert!(!report.all_valid);
        assert_eq!(report.invalid_fields(), vec![field]);
        assert_eq!(report.get(field).message, Some(message));
    }

    #[test]
    fn should_send_application() {
        let service = BookingService::new(validator());
        let confirmation = service
            .submit(&valid_input())
            .expect("valid form must be accepted");

        assert_eq!(confirmation.title(), "Успешно!");
        assert_eq!(
            confirmation.content(),
            format!(
                "Встреча успешно забронирована на {}",
                calculate_date(SHIFT_DATE)
            )
        );
    }

    #[test]
    fn should_not_pass_validation_empty_fields() {
        let report = validate(&ValidationInput::new("", "", "", "", false));

        assert!(!report.all_valid);
        assert_eq!(report.city.message, Some(EMPTY_FIELD_MSG));
        assert_eq!(report.date.message, Some(NOT_A_DATE_MSG));
        assert_eq!(report.name.message, Some(EMPTY_FIELD_MSG));
        assert_eq!(report.phone.message, Some(EMPTY_FIELD_MSG));
        assert!(!report.agreement.valid);
        assert_eq!(report.agreement.message, None);
    }

    #[test]
    fn should_not_pass_validation_without_agreement() {
        let input = ValidationInput {
            agreed: false,
            ..valid_input()
        };
        let report = validate(&input);
        assert_eq!(report.invalid_fields(), vec![Field::Agreement]);
        assert_eq!(report.agreement.code, Some(FieldErrorKind::AgreementNotChecked));

        let service = BookingService::new(validator());
        let error = service.submit(&input).expect_err("booking must be refused");
        assert!(matches!(error, BookingError::Validation(ref r) if *r == report));
    }

    #[test]
    fn should_validate_field_city_empty() {
        assert_only_failure(&with_city(""), Field::City, EMPTY_FIELD_MSG);
    }

    #[test]
    fn should_validate_field_city_lower_and_upper_case() {
        assert!(with_city(&CITY.to_lowercase()).all_valid);
        assert!(with_city(&CITY.to_uppercase()).all_valid);
    }

    #[test]
    fn should_validate_field_city_not_a_known_city() {
        for city in [
            "Стерлитамак",
            "Ростов на дону",
            "Chelyabinsk",
            "Москва99",
            "Москва№;%:",
        ] {
            assert_only_failure(&with_city(city), Field::City, UNKNOWN_CITY_MSG);
        }
    }

    #[test]
    fn should_validate_field_city_with_hyphen() {
        assert!(with_city("Ростов-на-Дону").all_valid);
        assert!(with_city("ростов-на-дону").all_valid);
    }

    #[test]
    fn should_validate_field_date_empty() {
        assert_only_failure(&with_date(""), Field::Date, NOT_A_DATE_MSG);
    }

    #[test]
    fn should_validate_field_date_before_available_date() {
        assert_only_failure(
            &with_date(&calculate_date(SHIFT_DATE - 1)),
            Field::Date,
            DATE_TOO_SOON_MSG,
        );
        assert_only_failure(&with_date(&calculate_date(0)), Field::Date, DATE_TOO_SOON_MSG);
    }

    #[test]
    fn should_validate_field_date_after_available_date() {
        assert!(with_date(&calculate_date(SHIFT_DATE)).all_valid);
        assert!(with_date(&calculate_date(SHIFT_DATE + 1)).all_valid);
        assert!(with_date(&calculate_date(365)).all_valid);
    }

    #[test]
    fn should_validate_field_date_not_a_date() {
        for date in [
            "32.11.2024",
            "20.30.2024",
            "01.06.24",
            "222",
            "03 may 2024",
            "03 май 2024",
            ";%:?*(",
        ] {
            assert_only_failure(&with_date(date), Field::Date, NOT_A_DATE_MSG);
        }
    }

    #[test]
    fn should_validate_field_name_empty() {
        assert_only_failure(&with_name(""), Field::Name, EMPTY_FIELD_MSG);
    }

    #[test]
    fn should_validate_field_name_valid_variants() {
        assert!(with_name("Иванова Анна-Мария").all_valid);
        assert!(with_name(&NAME.to_lowercase()).all_valid);
        assert!(with_name(&NAME.to_uppercase()).all_valid);
    }

    #[test]
    fn should_validate_field_name_invalid_characters() {
        for name in ["Ivanov Ivan", "Иванов Иван36", "%^&*()"] {
            assert_only_failure(&with_name(name), Field::Name, INVALID_NAME_MSG);
        }
    }

    #[test]
    fn should_validate_field_phone_empty() {
        assert_only_failure(&with_phone(""), Field::Phone, EMPTY_FIELD_MSG);
    }

    #[test]
    fn should_validate_field_phone_invalid_format() {
        let longer = format!("{}9", PHONE);
        for phone in [
            "+7911112233",
            longer.as_str(),
            "79111122333",
            "79111122333+",
            "tel79111122333",
            "тел79111122333",
            "%^&*(79111122333",
        ] {
            assert_only_failure(&with_phone(phone), Field::Phone, INVALID_PHONE_MSG);
        }
    }

    #[test]
    fn failures_are_reported_together() {
        let report = validate(&ValidationInput::new(
            "Chelyabinsk",
            "01.06.24",
            "Ivanov Ivan",
            "79111122333+",
            true,
        ));
        assert_eq!(
            report.invalid_fields(),
            vec![Field::City, Field::Date, Field::Name, Field::Phone]
        );
        assert_eq!(report.city.message, Some(UNKNOWN_CITY_MSG));
        assert_eq!(report.date.message, Some(NOT_A_DATE_MSG));
        assert_eq!(report.name.message, Some(INVALID_NAME_MSG));
        assert_eq!(report.phone.message, Some(INVALID_PHONE_MSG));
        assert!(report.agreement.valid);
    }

    #[test]
    fn validation_is_deterministic() {
        let inputs = [
            valid_input(),
            ValidationInput::default(),
            ValidationInput::new("Moscow", "222", "John", "+7", false),
        ];
        for input in &inputs {
            assert_eq!(validate(input), validate(input));
        }
    }

    #[test]
    fn all_valid_matches_field_results() {
        let inputs = [
            valid_input(),
            ValidationInput::default(),
            ValidationInput {
                agreed: false,
                ..valid_input()
            },
            ValidationInput {
                city: "Уфа".to_string(),
                ..valid_input()
            },
        ];
        for input in &inputs {
            let report = validate(input);
            let conjunction = Field::ALL.iter().all(|field| report.get(*field).valid);
            assert_eq!(report.all_valid, conjunction);
            for (_, result) in report.iter() {
                assert_eq!(result.valid, result.code.is_none());
            }
        }
    }

    #[test]
    fn report_round_trips_to_ui_json() {
        let report = validate(&ValidationInput::new("", "", "", "", false));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["allValid"], false);
        assert_eq!(json["city"]["message"], EMPTY_FIELD_MSG);
        assert_eq!(json["date"]["code"], "UNPARSABLE_DATE");
        assert!(json["agreement"]["message"].is_null());
    }

    #[test]
    fn input_from_json() {
        let input: ValidationInput = serde_json::from_str(&format!(
            r#"{{"city":"{}","date":"{}","name":"{}","phone":"{}","agreed":true}}"#,
            CITY,
            calculate_date(SHIFT_DATE),
            NAME,
            PHONE
        ))
        .unwrap();
        assert!(validate(&input).all_valid);
    }
}
