//! The `Validator` capability
//!
//! This module provides the single trait every leaf and combinator implements,
//! plus the extension methods used to compose them.

use crate::composite::{CompositeValidator, OrCompositeValidator};
use crate::report::ValidationResult;

/// Something that can judge a captured value.
///
/// Validators capture everything they need at construction time, so
/// `validate` takes no arguments. Calling it must be side-effect free and
/// repeatable: two calls on the same instance return equal results.
///
/// # Example
///
/// ```rust
/// use fieldcheck::prelude::*;
///
/// let v = MinLengthValidator::new("name", "tokyo", 3);
/// let result = v.validate();
/// assert!(result.is_valid());
/// assert_eq!(result.report.expected, "min length: 3");
/// ```
pub trait Validator {
    /// Evaluate the rule against the captured value.
    fn validate(&self) -> ValidationResult;
}

/// An owned, type-erased validator. Combinators store their children as these.
pub type BoxedValidator = Box<dyn Validator>;

impl<V: Validator + ?Sized> Validator for &V {
    #[inline]
    fn validate(&self) -> ValidationResult {
        (**self).validate()
    }
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    #[inline]
    fn validate(&self) -> ValidationResult {
        (**self).validate()
    }
}

/// Extension trait for composing validators.
///
/// # Example
///
/// ```rust
/// use fieldcheck::prelude::*;
///
/// let five = MinLengthValidator::new("zip", "12345", 5)
///     .and(MaxLengthValidator::new("zip", "12345", 5));
/// let seven = MinLengthValidator::new("zip", "12345", 7)
///     .and(MaxLengthValidator::new("zip", "12345", 7));
///
/// let result = five.or(seven).validate();
/// assert!(result.is_valid());
/// assert_eq!(result.report.expected, "max length: 5");
/// ```
pub trait ValidatorExt: Validator + Sized + 'static {
    /// Erase the concrete type.
    fn boxed(self) -> BoxedValidator {
        Box::new(self)
    }

    /// Combine with AND logic: `self` runs first and short-circuits on failure.
    fn and<V: Validator + 'static>(self, other: V) -> CompositeValidator {
        CompositeValidator::new(vec![self.boxed(), other.boxed()])
    }

    /// Combine with OR logic: both run, the first pass decides the report.
    fn or<V: Validator + 'static>(self, other: V) -> OrCompositeValidator {
        OrCompositeValidator::new(vec![self.boxed(), other.boxed()])
    }
}

impl<V: Validator + 'static> ValidatorExt for V {}

/// A validator backed by a closure.
///
/// Created by [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnValidator<F>(F);

impl<F> std::fmt::Debug for FnValidator<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("FnValidator").finish()
    }
}

impl<F> Validator for FnValidator<F>
where
    F: Fn() -> ValidationResult,
{
    #[inline]
    fn validate(&self) -> ValidationResult {
        (self.0)()
    }
}

/// Adapt a closure into a [`Validator`].
///
/// The closure must behave like any other validator: no side effects that
/// change its answer between calls.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{from_fn, Report, ValidationResult, Validator};
///
/// let always = from_fn(|| ValidationResult::valid(Report::new("x", "", "anything", "")));
/// assert!(always.validate().is_valid());
/// ```
pub fn from_fn<F>(f: F) -> FnValidator<F>
where
    F: Fn() -> ValidationResult,
{
    FnValidator(f)
}
