//! Testing patterns for validator trees
//!
//! Shows how downstream code can test its own validators with the
//! assertion macros and the fixed-verdict validator.

use fieldcheck::prelude::*;
use fieldcheck::testing::Fixed;
use fieldcheck::{assert_invalid, assert_report, assert_valid, from_fn};

// A rule written as a closure
fn even_length(name: &'static str, value: &'static str) -> impl Validator + 'static {
    from_fn(move || {
        let len = value.encode_utf16().count();
        ValidationResult::new(
            len % 2 == 0,
            Report::new(name, value, "even length", len.to_string()),
        )
    })
}

#[test]
fn closure_validator_in_a_tree() {
    let v = NotEmptyValidator::new("code", "abcd").and(even_length("code", "abcd"));
    assert_report!(v.validate(), valid, expected = "even length", actual = "4");

    let v = NotEmptyValidator::new("code", "abc").and(even_length("code", "abc"));
    assert_report!(v.validate(), invalid, expected = "even length", actual = "3");
}

#[test]
fn fixed_validators_pin_combinator_behavior() {
    let v = Fixed::invalid("first").or(Fixed::valid("second")).or(Fixed::valid("third"));
    assert_report!(v.validate(), valid, attribute = "second");

    let v = Fixed::valid("first").and(Fixed::invalid("second")).and(Fixed::invalid("third"));
    assert_report!(v.validate(), invalid, attribute = "second");
}

#[test]
fn boxed_and_borrowed_validators_agree() {
    let leaf = MaxLengthValidator::new("name", "waddy", 3);
    let boxed: BoxedValidator = MaxLengthValidator::new("name", "waddy", 3).boxed();
    let borrowed: &dyn Validator = &leaf;
    assert_eq!(borrowed.validate(), boxed.validate());
    assert_invalid!(boxed.validate());
}

#[test]
fn into_result_for_question_mark_callers() {
    fn name_ok(value: &str) -> Result<Report, Report> {
        let report = NotEmptyValidator::new("name", value).validate().into_result()?;
        Ok(report)
    }

    assert_valid!(NotEmptyValidator::new("name", "waddy").validate());
    assert!(name_ok("waddy").is_ok());
    assert_eq!(name_ok("").unwrap_err().expected, "not empty");
}
