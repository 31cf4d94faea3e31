//! Falsy leaf validator

use super::verdict;
use crate::report::{Report, ValidationResult};
use crate::validator::Validator;
use crate::value::AnyValue;

/// Valid iff the value is falsy.
///
/// The falsy set is exactly: null, undefined, `false`, `0`, NaN and `""`.
/// See [`AnyValue::is_falsy`].
///
/// # Example
///
/// ```rust
/// use fieldcheck::prelude::*;
///
/// let result = FalseValidator::new("flag", false).validate();
/// assert!(result.is_valid());
/// assert_eq!(result.report.actual, "falsy");
///
/// let result = FalseValidator::new("flag", "yes").validate();
/// assert!(!result.is_valid());
/// assert_eq!(result.report.actual, "truthy");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FalseValidator {
    name: String,
    value: AnyValue,
}

impl FalseValidator {
    /// Capture the attribute name and value.
    pub fn new(name: impl Into<String>, value: impl Into<AnyValue>) -> Self {
        FalseValidator {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Validator for FalseValidator {
    fn validate(&self) -> ValidationResult {
        let is_valid = self.value.is_falsy();
        let report = Report::new(
            &self.name,
            self.value.to_string(),
            "falsy",
            if is_valid { "falsy" } else { "truthy" },
        );
        verdict(is_valid, report)
    }
}
