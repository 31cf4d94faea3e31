//! String leaf validators

use regex::Regex;

use super::verdict;
use crate::report::{json_string_array, Report, ValidationResult};
use crate::validator::Validator;
use crate::value::FieldValue;

/// Valid iff the value is present and not the empty string.
///
/// # Example
///
/// ```rust
/// use fieldcheck::prelude::*;
///
/// assert!(NotEmptyValidator::new("address", "tokyo").validate().is_valid());
/// assert!(!NotEmptyValidator::new("address", "").validate().is_valid());
/// assert!(!NotEmptyValidator::new("address", None::<&str>).validate().is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotEmptyValidator {
    name: String,
    value: FieldValue,
}

impl NotEmptyValidator {
    /// Capture the attribute name and value.
    pub fn new(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        NotEmptyValidator {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Validator for NotEmptyValidator {
    fn validate(&self) -> ValidationResult {
        let raw = self.value.to_string();
        let is_valid = !matches!(self.value.as_deref(), None | Some(""));
        verdict(is_valid, Report::new(&self.name, raw.clone(), "not empty", raw))
    }
}

/// Valid iff the length is at least `min_length`.
///
/// An absent value has length 0. The report's `actual` is the measured length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinLengthValidator {
    name: String,
    value: FieldValue,
    min_length: usize,
}

impl MinLengthValidator {
    /// Capture the attribute name, value and minimum length.
    pub fn new(name: impl Into<String>, value: impl Into<FieldValue>, min_length: usize) -> Self {
        MinLengthValidator {
            name: name.into(),
            value: value.into(),
            min_length,
        }
    }
}

impl Validator for MinLengthValidator {
    fn validate(&self) -> ValidationResult {
        let actual = self.value.utf16_len();
        let report = Report::new(
            &self.name,
            self.value.to_string(),
            format!("min length: {}", self.min_length),
            actual.to_string(),
        );
        verdict(self.min_length <= actual, report)
    }
}

/// Valid iff the length is at most `max_length`.
///
/// An absent value has length 0, so it always passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxLengthValidator {
    name: String,
    value: FieldValue,
    max_length: usize,
}

impl MaxLengthValidator {
    /// Capture the attribute name, value and maximum length.
    pub fn new(name: impl Into<String>, value: impl Into<FieldValue>, max_length: usize) -> Self {
        MaxLengthValidator {
            name: name.into(),
            value: value.into(),
            max_length,
        }
    }
}

impl Validator for MaxLengthValidator {
    fn validate(&self) -> ValidationResult {
        let actual = self.value.utf16_len();
        let report = Report::new(
            &self.name,
            self.value.to_string(),
            format!("max length: {}", self.max_length),
            actual.to_string(),
        );
        verdict(actual <= self.max_length, report)
    }
}

/// Valid iff the value is present and the pattern matches somewhere in it.
///
/// Anchor the pattern (`^...$`) to require a full match.
///
/// # Example
///
/// ```rust
/// use fieldcheck::prelude::*;
/// use fieldcheck::regexp;
///
/// let v = RegExpValidator::new("phone", "0120123123", &regexp::NUMBER);
/// let result = v.validate();
/// assert!(result.is_valid());
/// assert_eq!(result.report.expected, "pattern: ^[0-9]+$");
/// ```
#[derive(Debug, Clone)]
pub struct RegExpValidator {
    name: String,
    value: FieldValue,
    pattern: Regex,
}

impl RegExpValidator {
    /// Capture the attribute name, value and an already compiled pattern.
    pub fn new(name: impl Into<String>, value: impl Into<FieldValue>, pattern: &Regex) -> Self {
        RegExpValidator {
            name: name.into(),
            value: value.into(),
            pattern: pattern.clone(),
        }
    }

    /// Compile `pattern` and capture it.
    ///
    /// # Errors
    ///
    /// Returns the compile error if `pattern` is not a valid regex.
    pub fn from_pattern(
        name: impl Into<String>,
        value: impl Into<FieldValue>,
        pattern: &str,
    ) -> Result<Self, regex::Error> {
        Ok(RegExpValidator {
            name: name.into(),
            value: value.into(),
            pattern: Regex::new(pattern)?,
        })
    }

    /// The captured pattern.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

impl Validator for RegExpValidator {
    fn validate(&self) -> ValidationResult {
        let raw = self.value.to_string();
        let is_valid = self
            .value
            .as_deref()
            .is_some_and(|value| self.pattern.is_match(value));
        let report = Report::new(
            &self.name,
            raw.clone(),
            format!("pattern: {}", self.pattern),
            raw,
        );
        verdict(is_valid, report)
    }
}

/// Valid iff the value equals one of the given literals exactly.
///
/// With no literals nothing is valid.
///
/// # Example
///
/// ```rust
/// use fieldcheck::prelude::*;
///
/// let v = LiteralTypeCheckValidator::new("status", "Logout", ["LoggedIn", "Logout"]);
/// let result = v.validate();
/// assert!(result.is_valid());
/// assert_eq!(result.report.expected, "type: LoggedIn|Logout");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralTypeCheckValidator {
    name: String,
    value: FieldValue,
    literal_types: Vec<String>,
}

impl LiteralTypeCheckValidator {
    /// Capture the attribute name, value and accepted literals.
    pub fn new<I, S>(name: impl Into<String>, value: impl Into<FieldValue>, literal_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        LiteralTypeCheckValidator {
            name: name.into(),
            value: value.into(),
            literal_types: literal_types.into_iter().map(Into::into).collect(),
        }
    }
}

impl Validator for LiteralTypeCheckValidator {
    fn validate(&self) -> ValidationResult {
        let raw = self.value.to_string();
        let is_valid = self
            .value
            .as_deref()
            .is_some_and(|value| self.literal_types.iter().any(|l| l == value));
        let report = Report::new(
            &self.name,
            raw.clone(),
            format!("type: {}", self.literal_types.join("|")),
            raw,
        );
        verdict(is_valid, report)
    }
}

/// Valid iff the value is a member of an allowed list (exact equality).
///
/// The report's `expected` is the list rendered as JSON, and `actual` is
/// `true` or `false`.
///
/// # Example
///
/// ```rust
/// use fieldcheck::prelude::*;
///
/// let v = ContainsValidator::new("status", "Away", ["LoggedIn", "Logout"]);
/// let result = v.validate();
/// assert!(!result.is_valid());
/// assert_eq!(result.report.expected, r#"["LoggedIn","Logout"] contains."#);
/// assert_eq!(result.report.actual, "false");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainsValidator {
    name: String,
    value: FieldValue,
    master: Vec<String>,
}

impl ContainsValidator {
    /// Capture the attribute name, value and allowed list.
    pub fn new<I, S>(name: impl Into<String>, value: impl Into<FieldValue>, master: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ContainsValidator {
            name: name.into(),
            value: value.into(),
            master: master.into_iter().map(Into::into).collect(),
        }
    }
}

impl Validator for ContainsValidator {
    fn validate(&self) -> ValidationResult {
        let is_valid = self
            .value
            .as_deref()
            .is_some_and(|value| self.master.iter().any(|m| m == value));
        let report = Report::new(
            &self.name,
            self.value.to_string(),
            format!("{} contains.", json_string_array(&self.master)),
            is_valid.to_string(),
        );
        verdict(is_valid, report)
    }
}
