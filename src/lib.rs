//! # Fieldcheck
//!
//! Small, composable field validators with human-readable reports.
//!
//! Leaf validators each check one rule against one captured value. The
//! [`CompositeValidator`] (AND) and [`OrCompositeValidator`] (OR) combinators
//! implement the same [`Validator`] trait, so they nest freely. Every
//! `validate()` call returns a [`ValidationResult`]: a verdict plus the
//! [`Report`] of the validator that decided it.
//!
//! ## Quick Example
//!
//! ```rust
//! use fieldcheck::prelude::*;
//!
//! fn postal_code(value: &str) -> OrCompositeValidator {
//!     let key = "postal_code";
//!     let five = MinLengthValidator::new(key, value, 5).and(MaxLengthValidator::new(key, value, 5));
//!     let seven = MinLengthValidator::new(key, value, 7).and(MaxLengthValidator::new(key, value, 7));
//!     five.or(seven)
//! }
//!
//! let result = postal_code("12345").validate();
//! assert!(result.is_valid());
//! assert_eq!(result.report.expected, "max length: 5");
//!
//! let result = postal_code("123456").validate();
//! assert!(!result.is_valid());
//! assert_eq!(result.report.expected, "Pass at least one validator.");
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events from leaves (trace) and combinators (debug).
//! - `proptest`: `Arbitrary` impls for [`Report`] and [`ValidationResult`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod checkable;
pub mod composite;
pub mod factory;
pub mod leaf;
pub mod regexp;
pub mod report;
pub mod testing;
pub mod validator;
pub mod value;

// Re-exports
pub use checkable::{Checkable, InvalidReports};
pub use composite::{CompositeValidator, OrCompositeValidator};
pub use leaf::{
    ContainsValidator, DateTimeValidator, FalseValidator, ISODateTimeValidator,
    LiteralTypeCheckValidator, MaxLengthValidator, MinLengthValidator, NotEmptyValidator,
    NumberRangeValidator, RegExpValidator,
};
pub use report::{Report, ValidationResult};
pub use validator::{from_fn, BoxedValidator, FnValidator, Validator, ValidatorExt};
pub use value::{AnyValue, FieldValue};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::checkable::{Checkable, Checked};
    pub use crate::composite::{CompositeValidator, OrCompositeValidator};
    pub use crate::leaf::{
        ContainsValidator, DateTimeValidator, FalseValidator, ISODateTimeValidator,
        LiteralTypeCheckValidator, MaxLengthValidator, MinLengthValidator, NotEmptyValidator,
        NumberRangeValidator, RegExpValidator,
    };
    pub use crate::report::{Report, ValidationResult};
    pub use crate::validator::{BoxedValidator, Validator, ValidatorExt};
    pub use crate::value::{AnyValue, FieldValue};
}
