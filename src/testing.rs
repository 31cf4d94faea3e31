//! Testing utilities
//!
//! Assertion macros for [`ValidationResult`](crate::ValidationResult)s, and a
//! fixed-verdict validator for exercising combinators.
//!
//! # Examples
//!
//! ```rust
//! use fieldcheck::prelude::*;
//! use fieldcheck::{assert_invalid, assert_report, assert_valid};
//!
//! assert_valid!(NotEmptyValidator::new("name", "waddy").validate());
//! assert_invalid!(NotEmptyValidator::new("name", "").validate());
//! assert_report!(
//!     MinLengthValidator::new("name", "ab", 3).validate(),
//!     invalid,
//!     attribute = "name",
//!     expected = "min length: 3",
//!     actual = "2",
//! );
//! ```

use crate::report::{Report, ValidationResult};
use crate::validator::Validator;

/// Assert that a result passed.
///
/// Panics with the report if it did not.
#[macro_export]
macro_rules! assert_valid {
    ($result:expr) => {{
        let result: $crate::ValidationResult = $result;
        if !result.is_valid {
            panic!("Expected valid, got invalid: {}", result.report);
        }
    }};
}

/// Assert that a result failed.
///
/// Panics with the report if it did not.
#[macro_export]
macro_rules! assert_invalid {
    ($result:expr) => {{
        let result: $crate::ValidationResult = $result;
        if result.is_valid {
            panic!("Expected invalid, got valid: {}", result.report);
        }
    }};
}

/// Assert a result's verdict and the report fields that matter.
///
/// The verdict is `valid` or `invalid`; any of `attribute`, `expected`,
/// `actual` and `raw_value` may follow, in any order.
#[macro_export]
macro_rules! assert_report {
    ($result:expr, valid $(, $field:ident = $value:expr)* $(,)?) => {{
        let result: $crate::ValidationResult = $result;
        $crate::assert_valid!(result.clone());
        $( assert_eq!(result.report.$field, $value, "report field `{}`", stringify!($field)); )*
    }};
    ($result:expr, invalid $(, $field:ident = $value:expr)* $(,)?) => {{
        let result: $crate::ValidationResult = $result;
        $crate::assert_invalid!(result.clone());
        $( assert_eq!(result.report.$field, $value, "report field `{}`", stringify!($field)); )*
    }};
}

/// A validator that always returns the same result.
///
/// # Example
///
/// ```rust
/// use fieldcheck::testing::Fixed;
/// use fieldcheck::Validator;
///
/// let v = Fixed::invalid("b");
/// assert!(!v.validate().is_valid());
/// assert_eq!(v.validate().report.attribute, "b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixed {
    result: ValidationResult,
}

impl Fixed {
    /// Always return `result`.
    pub fn new(result: ValidationResult) -> Self {
        Fixed { result }
    }

    /// Always pass, reporting `attribute` (also used as the raw value).
    pub fn valid(attribute: &str) -> Self {
        Self::new(ValidationResult::valid(Self::report(attribute)))
    }

    /// Always fail, reporting `attribute` (also used as the raw value).
    pub fn invalid(attribute: &str) -> Self {
        Self::new(ValidationResult::invalid(Self::report(attribute)))
    }

    /// The report `valid`/`invalid` use for `attribute`.
    pub fn report(attribute: &str) -> Report {
        Report::new(attribute, attribute, "fixed", "fixed")
    }
}

impl Validator for Fixed {
    fn validate(&self) -> ValidationResult {
        self.result.clone()
    }
}
