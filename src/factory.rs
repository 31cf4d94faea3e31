//! Ready-made validator trees
//!
//! Each function wires leaves and combinators into a common shape. They add
//! no behavior of their own: the result is the same tree you would build by
//! hand.
//!
//! # Example
//!
//! ```rust
//! use fieldcheck::factory::{length_validator, contains_validator};
//! use fieldcheck::Validator;
//!
//! let name = length_validator("name", "waddy", 1, 100);
//! assert!(name.validate().is_valid());
//!
//! let status = contains_validator("login_status", "", ["LoggedIn", "Logout"]);
//! let result = status.validate();
//! assert!(!result.is_valid());
//! assert_eq!(result.report.expected, "not empty");
//! ```

use regex::Regex;

use crate::composite::{CompositeValidator, OrCompositeValidator};
use crate::leaf::{
    ContainsValidator, DateTimeValidator, FalseValidator, ISODateTimeValidator,
    LiteralTypeCheckValidator, MaxLengthValidator, MinLengthValidator, NotEmptyValidator,
    NumberRangeValidator, RegExpValidator,
};
use crate::regexp;
use crate::validator::{BoxedValidator, ValidatorExt};
use crate::value::{AnyValue, FieldValue};

/// Options for [`format_validator`].
///
/// Bounds of `0` are treated as unset.
#[derive(Debug, Clone)]
pub struct FormatOptions<'a> {
    name: String,
    value: FieldValue,
    min_length: Option<usize>,
    max_length: Option<usize>,
    format: Option<&'a Regex>,
}

impl<'a> FormatOptions<'a> {
    /// Start with only the not-empty rule.
    pub fn new(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        FormatOptions {
            name: name.into(),
            value: value.into(),
            min_length: None,
            max_length: None,
            format: None,
        }
    }

    /// Require at least `min_length` code units.
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    /// Require at most `max_length` code units.
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Require the pattern to match.
    pub fn format(mut self, format: &'a Regex) -> Self {
        self.format = Some(format);
        self
    }
}

/// General purpose AND: not empty, then the optional length bounds, then the
/// optional pattern.
///
/// ```rust
/// use fieldcheck::factory::{format_validator, FormatOptions};
/// use fieldcheck::{regexp, Validator};
///
/// let v = format_validator(
///     FormatOptions::new("color", "#FFF").format(&regexp::HTML_COLOR),
/// );
/// assert!(v.validate().is_valid());
/// ```
pub fn format_validator(options: FormatOptions<'_>) -> BoxedValidator {
    let FormatOptions {
        name,
        value,
        min_length,
        max_length,
        format,
    } = options;

    let min = min_length
        .filter(|&n| n > 0)
        .map(|n| MinLengthValidator::new(&name, value.clone(), n).boxed());
    let max = max_length
        .filter(|&n| n > 0)
        .map(|n| MaxLengthValidator::new(&name, value.clone(), n).boxed());
    let pattern = format.map(|f| RegExpValidator::new(&name, value.clone(), f).boxed());
    let required = NotEmptyValidator::new(name, value).boxed();

    CompositeValidator::from_optional([Some(required), min, max, pattern]).boxed()
}

/// NotEmpty.
pub fn not_empty_validator(name: &str, value: impl Into<FieldValue>) -> BoxedValidator {
    NotEmptyValidator::new(name, value).boxed()
}

/// NotEmpty AND UUID v4.
pub fn uuid_v4_check_validator(name: &str, value: impl Into<FieldValue>) -> BoxedValidator {
    let value = value.into();
    CompositeValidator::new([
        NotEmptyValidator::new(name, value.clone()).boxed(),
        RegExpValidator::new(name, value, &regexp::UUID_V4).boxed(),
    ])
    .boxed()
}

/// NotEmpty AND digits only AND `min <= value <= max`.
///
/// Text that is not a number becomes NaN for the range check, so it can
/// never pass.
pub fn number_range_validator(
    name: &str,
    value: impl Into<FieldValue>,
    min: f64,
    max: f64,
) -> BoxedValidator {
    let value = value.into();
    let number = value
        .as_deref()
        .and_then(|text| text.trim().parse::<f64>().ok())
        .unwrap_or(f64::NAN);
    CompositeValidator::new([
        NotEmptyValidator::new(name, value.clone()).boxed(),
        RegExpValidator::new(name, value, &regexp::NUMBER).boxed(),
        NumberRangeValidator::new(name, number, min, max).boxed(),
    ])
    .boxed()
}

/// NotEmpty AND MinLength AND MaxLength.
pub fn length_validator(
    name: &str,
    value: impl Into<FieldValue>,
    min_length: usize,
    max_length: usize,
) -> BoxedValidator {
    let value = value.into();
    CompositeValidator::new([
        NotEmptyValidator::new(name, value.clone()).boxed(),
        MinLengthValidator::new(name, value.clone(), min_length).boxed(),
        MaxLengthValidator::new(name, value, max_length).boxed(),
    ])
    .boxed()
}

/// NotEmpty AND membership in `master`.
pub fn contains_validator<I, S>(name: &str, value: impl Into<FieldValue>, master: I) -> BoxedValidator
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let value = value.into();
    CompositeValidator::new([
        NotEmptyValidator::new(name, value.clone()).boxed(),
        ContainsValidator::new(name, value, master).boxed(),
    ])
    .boxed()
}

/// Exact match against one of the literals.
pub fn literal_check_validator<I, S>(
    name: &str,
    value: impl Into<FieldValue>,
    literal_types: I,
) -> BoxedValidator
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    LiteralTypeCheckValidator::new(name, value, literal_types).boxed()
}

/// ISO-8601, with `""` accepted.
pub fn iso_date_validator(name: &str, value: impl Into<FieldValue>) -> BoxedValidator {
    ISODateTimeValidator::new(name, value).boxed()
}

/// Parses under a chrono strftime format.
pub fn date_time_validator(
    name: &str,
    value: impl Into<FieldValue>,
    date_format: &str,
) -> BoxedValidator {
    DateTimeValidator::new(name, value, date_format).boxed()
}

/// NotEmpty AND length bounds AND ASCII letters/digits only.
pub fn alphanumeric_validator(
    name: &str,
    value: impl Into<FieldValue>,
    min_length: usize,
    max_length: usize,
) -> BoxedValidator {
    format_validator(
        FormatOptions::new(name, value)
            .min_length(min_length)
            .max_length(max_length)
            .format(&regexp::ALPHANUMERIC),
    )
}

/// NotEmpty AND length bounds AND ASCII digits only.
pub fn number_format_validator(
    name: &str,
    value: impl Into<FieldValue>,
    min_length: usize,
    max_length: usize,
) -> BoxedValidator {
    format_validator(
        FormatOptions::new(name, value)
            .min_length(min_length)
            .max_length(max_length)
            .format(&regexp::NUMBER),
    )
}

/// Exactly the empty string.
pub fn empty_string_validator(name: &str, value: impl Into<FieldValue>) -> BoxedValidator {
    literal_check_validator(name, value, [""])
}

/// Falsy.
pub fn false_validator(name: &str, value: impl Into<AnyValue>) -> BoxedValidator {
    FalseValidator::new(name, value).boxed()
}

/// AND over `validators`.
pub fn and<I>(validators: I) -> BoxedValidator
where
    I: IntoIterator<Item = BoxedValidator>,
{
    CompositeValidator::new(validators).boxed()
}

/// OR over `validators`.
pub fn or<I>(validators: I) -> BoxedValidator
where
    I: IntoIterator<Item = BoxedValidator>,
{
    OrCompositeValidator::new(validators).boxed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{Report, ValidationResult};
    use crate::validator::Validator;

    #[test]
    fn format_validator_html_color() {
        let cases = [
            ("#FFF", true),
            ("rgba(255, 0, 0, 3)", true),
            ("aliceblue", true),
            ("tokyo", false),
            ("###", false),
            ("0x123", false),
        ];
        let expected = format!("pattern: {}", *regexp::HTML_COLOR);
        for (value, is_valid) in cases {
            let v = format_validator(FormatOptions::new("htmlColor", value).format(&regexp::HTML_COLOR));
            assert_eq!(
                v.validate(),
                ValidationResult::new(
                    is_valid,
                    Report::new("htmlColor", value, expected.as_str(), value)
                ),
                "value {:?}",
                value
            );
        }
    }

    #[test]
    fn format_validator_empty_stops_at_not_empty() {
        let v = format_validator(FormatOptions::new("htmlColor", "").format(&regexp::HTML_COLOR));
        assert_eq!(
            v.validate(),
            ValidationResult::invalid(Report::new("htmlColor", "", "not empty", ""))
        );
    }

    #[test]
    fn format_validator_ignores_zero_bounds() {
        let v = format_validator(FormatOptions::new("code", "abc").min_length(0).max_length(0));
        let result = v.validate();
        assert!(result.is_valid());
        assert_eq!(result.report.expected, "not empty");
    }

    #[test]
    fn format_validator_runs_rules_in_order() {
        let options = || FormatOptions::new("code", "abcdef").min_length(2).max_length(4);
        let result = format_validator(options()).validate();
        assert_eq!(result.report.expected, "max length: 4");

        let result = format_validator(options().max_length(10).format(&regexp::NUMBER)).validate();
        assert_eq!(result.report.expected, "pattern: ^[0-9]+$");
    }

    #[test]
    fn number_range_validator_chain() {
        let ok = number_range_validator("age", "42", 0.0, 120.0).validate();
        assert_eq!(
            ok,
            ValidationResult::valid(Report::new("age", "42", "between: 0 - 120", "42"))
        );

        let out_of_range = number_range_validator("age", "121", 0.0, 120.0).validate();
        assert!(!out_of_range.is_valid());
        assert_eq!(out_of_range.report.actual, "121");

        let not_digits = number_range_validator("age", "-1", 0.0, 120.0).validate();
        assert_eq!(not_digits.report.expected, "pattern: ^[0-9]+$");

        let empty = number_range_validator("age", "", 0.0, 120.0).validate();
        assert_eq!(empty.report.expected, "not empty");
    }

    #[test]
    fn uuid_check() {
        assert!(uuid_v4_check_validator("id", "3b241101-e2bb-4255-8caf-4136c566a962")
            .validate()
            .is_valid());
        assert!(!uuid_v4_check_validator("id", "nope").validate().is_valid());
        assert_eq!(
            uuid_v4_check_validator("id", FieldValue::absent())
                .validate()
                .report
                .expected,
            "not empty"
        );
    }

    #[test]
    fn length_validator_chain() {
        assert!(length_validator("name", "waddy", 1, 100).validate().is_valid());
        assert_eq!(
            length_validator("name", "waddy", 6, 100).validate().report,
            Report::new("name", "waddy", "min length: 6", "5")
        );
        assert_eq!(
            length_validator("name", "waddy", 1, 100).validate().report.expected,
            "max length: 100"
        );
    }

    #[test]
    fn contains_validator_chain() {
        let allowed = ["LoggedIn", "Logout"];
        assert!(contains_validator("s", "Logout", allowed).validate().is_valid());
        assert_eq!(
            contains_validator("s", "x", allowed).validate().report.actual,
            "false"
        );
    }

    #[test]
    fn literal_and_empty_string() {
        assert!(literal_check_validator("k", "a", ["a", "b"]).validate().is_valid());
        assert!(empty_string_validator("k", "").validate().is_valid());
        let result = empty_string_validator("k", "x").validate();
        assert!(!result.is_valid());
        assert_eq!(result.report.expected, "type: ");
    }

    #[test]
    fn alphanumeric_and_number_format() {
        assert!(alphanumeric_validator("id", "abc123", 1, 10).validate().is_valid());
        assert!(!alphanumeric_validator("id", "abc-123", 1, 10).validate().is_valid());
        assert!(number_format_validator("tel", "0120123123", 10, 11)
            .validate()
            .is_valid());
        assert_eq!(
            number_format_validator("tel", "012", 10, 11)
                .validate()
                .report
                .expected,
            "min length: 10"
        );
    }

    #[test]
    fn dates() {
        assert!(iso_date_validator("at", "").validate().is_valid());
        assert!(date_time_validator("at", "20200131", "%Y%m%d").validate().is_valid());
    }

    #[test]
    fn false_validator_and_false_validator() {
        let cases: [((&str, AnyValue), (&str, AnyValue), bool, &str, &str); 6] = [
            (("string", "".into()), ("number", 0.into()), true, "number", "0"),
            (("string", AnyValue::Null), ("string", AnyValue::Undefined), true, "string", "undefined"),
            (("number", f64::NAN.into()), ("number", AnyValue::Null), true, "number", "null"),
            (("boolean", false.into()), ("boolean", None::<bool>.into()), true, "boolean", "undefined"),
            (("string", AnyValue::Null), ("object", AnyValue::Object), false, "object", "[object Object]"),
            (("array", AnyValue::Array(vec![])), ("string", "a".into()), false, "array", ""),
        ];
        for ((n1, v1), (n2, v2), is_valid, name, raw) in cases {
            let v = and([false_validator(n1, v1), false_validator(n2, v2)]);
            let actual = if is_valid { "falsy" } else { "truthy" };
            assert_eq!(
                v.validate(),
                ValidationResult::new(is_valid, Report::new(name, raw, "falsy", actual))
            );
        }
    }

    #[test]
    fn or_of_factories() {
        let v = or([
            length_validator("code", "abc", 5, 5),
            literal_check_validator("code", "abc", ["abc"]),
        ]);
        let result = v.validate();
        assert!(result.is_valid());
        assert_eq!(result.report.expected, "type: abc");
    }
}
