//! AND / OR combinators
//!
//! Both combinators own their children and implement [`Validator`] themselves,
//! so trees of any depth are built by nesting.
//!
//! # Report selection
//!
//! | Combinator | Outcome | Surfaced report |
//! |---|---|---|
//! | AND | first failing child | that child's report (evaluation stops) |
//! | AND | all children pass | the last child's report |
//! | OR | some child passes | the first passing child's report |
//! | OR | no child passes | the OR default report |
//! | either | no children | the combinator's default report, invalid |
//!
//! # Example
//!
//! ```rust
//! use fieldcheck::prelude::*;
//!
//! fn postal_code(value: &str) -> OrCompositeValidator {
//!     let key = "postal_code";
//!     let five = CompositeValidator::new(vec![
//!         MinLengthValidator::new(key, value, 5).boxed(),
//!         MaxLengthValidator::new(key, value, 5).boxed(),
//!     ]);
//!     let seven = CompositeValidator::new(vec![
//!         MinLengthValidator::new(key, value, 7).boxed(),
//!         MaxLengthValidator::new(key, value, 7).boxed(),
//!     ]);
//!     OrCompositeValidator::new(vec![five.boxed(), seven.boxed()])
//! }
//!
//! let ok = postal_code("1234567").validate();
//! assert!(ok.is_valid());
//! assert_eq!(ok.report.expected, "max length: 7");
//!
//! let bad = postal_code("123456").validate();
//! assert!(!bad.is_valid());
//! assert_eq!(bad.report.attribute, "or");
//! ```

use std::fmt;

use crate::report::{json_string_array, Report, ValidationResult};
use crate::validator::{BoxedValidator, Validator};

/// Attribute of the AND default report.
pub const AND_ATTRIBUTE: &str = "and";
/// Attribute of the OR default report.
pub const OR_ATTRIBUTE: &str = "or";

/// AND combinator: every child must pass.
///
/// Children run in order; the first failure is returned unchanged and the
/// remaining children are never evaluated.
pub struct CompositeValidator {
    validators: Vec<BoxedValidator>,
}

impl CompositeValidator {
    /// Build from an ordered list of children.
    pub fn new<I>(validators: I) -> Self
    where
        I: IntoIterator<Item = BoxedValidator>,
    {
        CompositeValidator {
            validators: validators.into_iter().collect(),
        }
    }

    /// Build from optional children, dropping the `None` entries.
    ///
    /// Handy when some rules only apply under a condition:
    ///
    /// ```rust
    /// use fieldcheck::prelude::*;
    ///
    /// let max: Option<usize> = None;
    /// let v = CompositeValidator::from_optional([
    ///     Some(NotEmptyValidator::new("name", "waddy").boxed()),
    ///     max.map(|m| MaxLengthValidator::new("name", "waddy", m).boxed()),
    /// ]);
    /// assert_eq!(v.len(), 1);
    /// assert_eq!(v.validate().report.expected, "not empty");
    /// ```
    pub fn from_optional<I>(validators: I) -> Self
    where
        I: IntoIterator<Item = Option<BoxedValidator>>,
    {
        Self::new(validators.into_iter().flatten())
    }

    /// Append a child, to be evaluated after the existing ones.
    pub fn push<V: Validator + 'static>(&mut self, validator: V) {
        self.validators.push(Box::new(validator));
    }

    /// Builder form of [`push`](Self::push).
    pub fn with<V: Validator + 'static>(mut self, validator: V) -> Self {
        self.push(validator);
        self
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Returns `true` if there are no children.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// The report returned when there is nothing to evaluate.
    pub fn default_report() -> Report {
        Report::new(
            AND_ATTRIBUTE,
            "[]",
            "Pass all validator.",
            "Passed all validator.",
        )
    }
}

impl Validator for CompositeValidator {
    fn validate(&self) -> ValidationResult {
        let mut last = None;
        for validator in &self.validators {
            let result = validator.validate();
            if !result.is_valid {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    attribute = %result.report.attribute,
                    expected = %result.report.expected,
                    "and: short-circuit on failing validator"
                );
                return result;
            }
            last = Some(result);
        }

        match last {
            Some(result) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(children = self.validators.len(), "and: all validators passed");
                result.with_validity(true)
            }
            None => ValidationResult::invalid(Self::default_report()),
        }
    }
}

impl fmt::Debug for CompositeValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeValidator")
            .field("validators", &self.validators.len())
            .finish()
    }
}

/// OR combinator: at least one child must pass.
///
/// Every child is evaluated, in order, even after one has passed. The first
/// passing child's report is kept; later children never displace it. When
/// nothing passes, the OR default report is returned instead of any child's.
///
/// Unlike [`CompositeValidator::from_optional`], there is no filtering
/// constructor: every child handed to `new` is kept.
pub struct OrCompositeValidator {
    validators: Vec<BoxedValidator>,
}

impl OrCompositeValidator {
    /// Build from an ordered list of children.
    pub fn new<I>(validators: I) -> Self
    where
        I: IntoIterator<Item = BoxedValidator>,
    {
        OrCompositeValidator {
            validators: validators.into_iter().collect(),
        }
    }

    /// Append a child, to be evaluated after the existing ones.
    pub fn push<V: Validator + 'static>(&mut self, validator: V) {
        self.validators.push(Box::new(validator));
    }

    /// Builder form of [`push`](Self::push).
    pub fn with<V: Validator + 'static>(mut self, validator: V) -> Self {
        self.push(validator);
        self
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Returns `true` if there are no children.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// The report returned when no child passes.
    ///
    /// `raw_values` are the raw values of the evaluated children, rendered as
    /// a JSON array.
    pub fn default_report<S: AsRef<str>>(raw_values: &[S]) -> Report {
        Report::new(
            OR_ATTRIBUTE,
            json_string_array(raw_values),
            "Pass at least one validator.",
            "None of the validators passed.",
        )
    }
}

impl Validator for OrCompositeValidator {
    fn validate(&self) -> ValidationResult {
        let mut passed: Option<Report> = None;
        let mut raw_values = Vec::with_capacity(self.validators.len());

        for validator in &self.validators {
            let result = validator.validate();
            if passed.is_some() {
                continue;
            }
            if result.is_valid {
                passed = Some(result.report);
            } else {
                raw_values.push(result.report.raw_value);
            }
        }

        match passed {
            Some(report) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(attribute = %report.attribute, "or: validator passed");
                ValidationResult::valid(report)
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    children = self.validators.len(),
                    "or: none of the validators passed"
                );
                ValidationResult::invalid(Self::default_report(&raw_values))
            }
        }
    }
}

impl fmt::Debug for OrCompositeValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrCompositeValidator")
            .field("validators", &self.validators.len())
            .finish()
    }
}
