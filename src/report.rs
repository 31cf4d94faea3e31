//! Validation results and reports
//!
//! Every validator, leaf or combinator, produces exactly one [`ValidationResult`]:
//! a verdict plus the [`Report`] of the validator responsible for it.
//!
//! # Example
//!
//! ```rust
//! use fieldcheck::{Report, ValidationResult};
//!
//! let report = Report::new("age", "42", "between: 0 - 120", "42");
//! let result = ValidationResult::valid(report);
//!
//! assert!(result.is_valid());
//! assert_eq!(result.report().attribute, "age");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A human-readable diagnostic for one validation verdict.
///
/// Serializes with camelCase keys (`rawValue`, `attribute`, `expected`,
/// `actual`) so reports can be printed directly as JSON diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// The original input, stringified.
    pub raw_value: String,
    /// The field or validator name.
    pub attribute: String,
    /// Description of the rule.
    pub expected: String,
    /// Description of the observed value or outcome.
    pub actual: String,
}

impl Report {
    /// Create a report.
    ///
    /// Argument order follows how a report reads: which attribute, what was
    /// given, what was expected, what was found.
    pub fn new(
        attribute: impl Into<String>,
        raw_value: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Report {
            raw_value: raw_value.into(),
            attribute: attribute.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected {}, actual {} (raw value: {})",
            self.attribute, self.expected, self.actual, self.raw_value
        )
    }
}

/// The outcome of a single `validate()` call.
///
/// Invalid input is never an error: it is a `ValidationResult` whose
/// `is_valid` is `false`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// The verdict.
    pub is_valid: bool,
    /// The report of the validator that decided the verdict.
    pub report: Report,
}

impl ValidationResult {
    /// Pair a verdict with its report.
    pub fn new(is_valid: bool, report: Report) -> Self {
        ValidationResult { is_valid, report }
    }

    /// A passing result.
    pub fn valid(report: Report) -> Self {
        Self::new(true, report)
    }

    /// A failing result.
    pub fn invalid(report: Report) -> Self {
        Self::new(false, report)
    }

    /// Returns `true` if the validator passed.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Returns `true` if the validator failed.
    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid
    }

    /// Borrow the report.
    #[inline]
    pub fn report(&self) -> &Report {
        &self.report
    }

    /// Consume the result, returning its report.
    pub fn into_report(self) -> Report {
        self.report
    }

    /// Convert into a `Result`, with the report on both sides.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fieldcheck::{Report, ValidationResult};
    ///
    /// let failed = ValidationResult::invalid(Report::new("name", "", "not empty", ""));
    /// let report = failed.into_result().unwrap_err();
    /// assert_eq!(report.expected, "not empty");
    /// ```
    pub fn into_result(self) -> Result<Report, Report> {
        if self.is_valid {
            Ok(self.report)
        } else {
            Err(self.report)
        }
    }

    /// Return the same report with the verdict replaced.
    pub(crate) fn with_validity(self, is_valid: bool) -> Self {
        ValidationResult { is_valid, ..self }
    }
}

/// Render strings as a JSON array, e.g. `["a","b"]`.
pub(crate) fn json_string_array<S: AsRef<str>>(items: &[S]) -> String {
    let items: Vec<&str> = items.iter().map(AsRef::as_ref).collect();
    // A list of strings always serializes.
    serde_json::to_string(&items).unwrap_or_else(|_| String::from("[]"))
}

#[cfg(feature = "proptest")]
mod arbitrary {
    use super::{Report, ValidationResult};
    use proptest::prelude::*;

    impl Arbitrary for Report {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            (
                any::<String>(),
                any::<String>(),
                any::<String>(),
                any::<String>(),
            )
                .prop_map(|(attribute, raw, expected, actual)| {
                    Report::new(attribute, raw, expected, actual)
                })
                .boxed()
        }
    }

    impl Arbitrary for ValidationResult {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            (any::<bool>(), any::<Report>())
                .prop_map(|(is_valid, report)| ValidationResult::new(is_valid, report))
                .boxed()
        }
    }
}
