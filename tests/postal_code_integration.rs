//! Postal code scenario: exactly five or exactly seven characters.

use fieldcheck::prelude::*;
use fieldcheck::{assert_report, Report};

fn postal_code_validator(value: &str) -> OrCompositeValidator {
    let key = "postal_code";
    let min_five = MinLengthValidator::new(key, value, 5);
    let max_five = MaxLengthValidator::new(key, value, 5);

    let min_seven = MinLengthValidator::new(key, value, 7);
    let max_seven = MaxLengthValidator::new(key, value, 7);

    let five = CompositeValidator::new(vec![min_five.boxed(), max_five.boxed()]);
    let seven = CompositeValidator::new(vec![min_seven.boxed(), max_seven.boxed()]);

    OrCompositeValidator::new(vec![five.boxed(), seven.boxed()])
}

#[test]
fn five_characters_pass_with_max_five_report() {
    assert_report!(
        postal_code_validator("12345").validate(),
        valid,
        attribute = "postal_code",
        expected = "max length: 5",
        actual = "5",
    );
}

#[test]
fn seven_characters_pass_with_max_seven_report() {
    assert_report!(
        postal_code_validator("1234567").validate(),
        valid,
        attribute = "postal_code",
        expected = "max length: 7",
        actual = "7",
    );
}

#[test]
fn other_lengths_fail_with_or_report() {
    for value in [
        "",
        "1",
        "12",
        "123",
        "1234",
        "123456",
        "12345678",
        "123456789",
        "1234567899",
    ] {
        assert_report!(
            postal_code_validator(value).validate(),
            invalid,
            attribute = "or",
            expected = "Pass at least one validator.",
            actual = "None of the validators passed.",
        );
    }
}

#[test]
fn or_failure_raw_value_lists_branch_values() {
    let result = postal_code_validator("123456").validate();
    assert_eq!(result.report.raw_value, r#"["123456","123456"]"#);
}

#[test]
fn chained_form_matches_explicit_form() {
    let value = "1234567";
    let key = "postal_code";
    let chained = MinLengthValidator::new(key, value, 5)
        .and(MaxLengthValidator::new(key, value, 5))
        .or(MinLengthValidator::new(key, value, 7).and(MaxLengthValidator::new(key, value, 7)));

    assert_eq!(chained.validate(), postal_code_validator(value).validate());
    assert_eq!(
        chained.validate().report,
        Report::new(key, value, "max length: 7", "7")
    );
}

#[test]
fn result_serializes_as_diagnostic_json() {
    let json = serde_json::to_value(postal_code_validator("12345").validate()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "isValid": true,
            "report": {
                "rawValue": "12345",
                "attribute": "postal_code",
                "expected": "max length: 5",
                "actual": "5"
            }
        })
    );
}
