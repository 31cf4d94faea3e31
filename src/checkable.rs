//! Domain objects that carry their own validation
//!
//! A domain value is paired with the validator tree for its field, so callers
//! can check a whole object field by field and decide what to do with the
//! failures.
//!
//! # Example
//!
//! ```rust
//! use fieldcheck::checkable::{check_all, ensure_valid, Checkable, Checked};
//! use fieldcheck::factory::{contains_validator, length_validator};
//!
//! let name = Checked::new("waddy".to_string(), |v| length_validator("name", v.as_str(), 1, 100));
//! let status = Checked::new(String::new(), |v| {
//!     contains_validator("login_status", v.as_str(), ["LoggedIn", "Logout"])
//! });
//!
//! let results = check_all(&[&name, &status]);
//! let err = ensure_valid(results).unwrap_err();
//! assert_eq!(err.reports().len(), 1);
//! assert_eq!(err.reports()[0].attribute, "login_status");
//! ```

use std::error::Error as StdError;
use std::fmt;

use crate::report::{Report, ValidationResult};
use crate::validator::{BoxedValidator, Validator};

/// A value that knows how to validate itself.
pub trait Checkable {
    /// The validator tree for this value.
    fn validator(&self) -> &dyn Validator;

    /// Run the validator.
    fn check(&self) -> ValidationResult {
        self.validator().validate()
    }
}

/// A value paired with the validator built for it.
pub struct Checked<T> {
    value: T,
    validator: BoxedValidator,
}

impl<T> Checked<T> {
    /// Build the validator from the value and keep both.
    pub fn new<F>(value: T, build: F) -> Self
    where
        F: FnOnce(&T) -> BoxedValidator,
    {
        let validator = build(&value);
        Checked { value, validator }
    }

    /// Borrow the value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consume, returning the value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Checkable for Checked<T> {
    fn validator(&self) -> &dyn Validator {
        self.validator.as_ref()
    }
}

impl<T: fmt::Debug> fmt::Debug for Checked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checked")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

/// Check every field, in order.
pub fn check_all(fields: &[&dyn Checkable]) -> Vec<ValidationResult> {
    fields.iter().map(|field| field.check()).collect()
}

/// The reports of the failing results, in order.
pub fn failing_reports<'a, I>(results: I) -> Vec<Report>
where
    I: IntoIterator<Item = &'a ValidationResult>,
{
    results
        .into_iter()
        .filter(|r| r.is_invalid())
        .map(|r| r.report.clone())
        .collect()
}

/// `Ok(())` if every result passed, otherwise the failing reports.
///
/// # Errors
///
/// Returns [`InvalidReports`] holding every failing report.
pub fn ensure_valid<I>(results: I) -> Result<(), InvalidReports>
where
    I: IntoIterator<Item = ValidationResult>,
{
    let reports: Vec<Report> = results
        .into_iter()
        .filter(ValidationResult::is_invalid)
        .map(ValidationResult::into_report)
        .collect();

    if reports.is_empty() {
        Ok(())
    } else {
        Err(InvalidReports { reports })
    }
}

/// One or more fields failed validation.
///
/// Displays as the JSON array of the failing reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidReports {
    reports: Vec<Report>,
}

impl InvalidReports {
    /// The failing reports, in field order.
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// Consume, returning the reports.
    pub fn into_reports(self) -> Vec<Report> {
        self.reports
    }

    /// The reports as a JSON array.
    pub fn to_json(&self) -> String {
        // Plain string fields always serialize.
        serde_json::to_string(&self.reports).unwrap_or_default()
    }
}

impl fmt::Display for InvalidReports {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json())
    }
}

impl StdError for InvalidReports {}
