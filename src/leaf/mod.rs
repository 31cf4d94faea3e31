//! Leaf validators
//!
//! A leaf checks one rule against one captured value and holds no children.
//! Each is constructed with the attribute name, the value and the rule
//! parameters, and never changes afterwards.
//!
//! | Validator | Valid when |
//! |---|---|
//! | [`NotEmptyValidator`] | value is present and not `""` |
//! | [`MinLengthValidator`] | length >= minimum (absent counts as 0) |
//! | [`MaxLengthValidator`] | length <= maximum (absent counts as 0) |
//! | [`RegExpValidator`] | value is present and the pattern matches |
//! | [`LiteralTypeCheckValidator`] | value equals one of the literals |
//! | [`ContainsValidator`] | value is in the allowed list |
//! | [`NumberRangeValidator`] | value is a number within `min..=max` |
//! | [`DateTimeValidator`] | value parses with the format |
//! | [`ISODateTimeValidator`] | value is `""` or parses as ISO-8601 |
//! | [`FalseValidator`] | value is falsy |
//!
//! Lengths are measured in UTF-16 code units.

mod datetime;
mod falsy;
mod number;
mod string;

pub use datetime::{DateTimeValidator, ISODateTimeValidator, ISO_EXPECTED};
pub use falsy::FalseValidator;
pub use number::NumberRangeValidator;
pub use string::{
    ContainsValidator, LiteralTypeCheckValidator, MaxLengthValidator, MinLengthValidator,
    NotEmptyValidator, RegExpValidator,
};

use crate::report::{Report, ValidationResult};

/// Pair a leaf verdict with its report.
fn verdict(is_valid: bool, report: Report) -> ValidationResult {
    #[cfg(feature = "tracing")]
    tracing::trace!(
        attribute = %report.attribute,
        expected = %report.expected,
        is_valid,
        "leaf validated"
    );
    ValidationResult::new(is_valid, report)
}
