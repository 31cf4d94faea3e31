//! Numeric leaf validators

use super::verdict;
use crate::report::{Report, ValidationResult};
use crate::validator::Validator;
use crate::value::format_number;

/// Valid iff the value is a number (not NaN) and `min <= value <= max`.
///
/// The value is numeric already; parse text before constructing this, and
/// map unparsable text to `f64::NAN` so it fails here.
///
/// # Example
///
/// ```rust
/// use fieldcheck::prelude::*;
///
/// let v = NumberRangeValidator::new("age", 42, 0, 120);
/// assert!(v.validate().is_valid());
/// assert_eq!(v.validate().report.expected, "between: 0 - 120");
///
/// assert!(!NumberRangeValidator::new("age", f64::NAN, 0, 120).validate().is_valid());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NumberRangeValidator {
    name: String,
    value: f64,
    min: f64,
    max: f64,
}

impl NumberRangeValidator {
    /// Capture the attribute name, value and inclusive bounds.
    pub fn new(
        name: impl Into<String>,
        value: impl Into<f64>,
        min: impl Into<f64>,
        max: impl Into<f64>,
    ) -> Self {
        NumberRangeValidator {
            name: name.into(),
            value: value.into(),
            min: min.into(),
            max: max.into(),
        }
    }
}

impl Validator for NumberRangeValidator {
    fn validate(&self) -> ValidationResult {
        let actual = format_number(self.value);
        let is_valid = !self.value.is_nan() && self.min <= self.value && self.value <= self.max;
        let report = Report::new(
            &self.name,
            actual.clone(),
            format!(
                "between: {} - {}",
                format_number(self.min),
                format_number(self.max)
            ),
            actual,
        );
        verdict(is_valid, report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        for (value, is_valid) in [(-1, false), (0, true), (60, true), (120, true), (121, false)] {
            let result = NumberRangeValidator::new("age", value, 0, 120).validate();
            assert_eq!(result.is_valid, is_valid, "value {}", value);
            assert_eq!(
                result.report,
                Report::new("age", value.to_string(), "between: 0 - 120", value.to_string())
            );
        }
    }

    #[test]
    fn nan_always_fails() {
        let result = NumberRangeValidator::new("age", f64::NAN, 0, 120).validate();
        assert!(!result.is_valid());
        assert_eq!(result.report.actual, "NaN");
        assert_eq!(result.report.raw_value, "NaN");

        let unbounded =
            NumberRangeValidator::new("age", f64::NAN, f64::NEG_INFINITY, f64::INFINITY);
        assert!(!unbounded.validate().is_valid());
    }

    #[test]
    fn fractional_values_and_bounds() {
        let v = NumberRangeValidator::new("ratio", 0.5, 0, 1);
        assert!(v.validate().is_valid());
        assert_eq!(v.validate().report.actual, "0.5");

        let v = NumberRangeValidator::new("ratio", 1.0, 0.25, 0.75);
        let result = v.validate();
        assert!(!result.is_valid());
        assert_eq!(result.report.expected, "between: 0.25 - 0.75");
    }

    #[test]
    fn inverted_bounds_reject_everything() {
        assert!(!NumberRangeValidator::new("n", 5, 10, 0).validate().is_valid());
    }
}
