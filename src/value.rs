//! Input values captured by leaf validators
//!
//! Most validators judge a field that may be missing altogether, so they
//! capture a [`FieldValue`]: an optional string. The falsy check judges
//! values of any shape and captures an [`AnyValue`].

use std::fmt;

/// Text rendered in reports for a missing value.
pub const ABSENT: &str = "null";

/// Text rendered in reports for an [`AnyValue::Undefined`].
pub const UNDEFINED: &str = "undefined";

/// A field value that may be absent.
///
/// Absent and empty are different: `FieldValue::absent()` was never set,
/// `FieldValue::from("")` was set to the empty string.
///
/// # Example
///
/// ```rust
/// use fieldcheck::FieldValue;
///
/// assert!(FieldValue::from(None::<&str>).is_absent());
/// assert_eq!(FieldValue::from("tokyo").as_deref(), Some("tokyo"));
/// assert_eq!(FieldValue::absent().to_string(), "null");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldValue(Option<String>);

impl FieldValue {
    /// A value that was never set.
    pub fn absent() -> Self {
        FieldValue(None)
    }

    /// A value that was set.
    pub fn present(value: impl Into<String>) -> Self {
        FieldValue(Some(value.into()))
    }

    /// Returns `true` if the value was never set.
    #[inline]
    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    /// Borrow the text, if any.
    #[inline]
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Length in UTF-16 code units; absent counts as zero.
    ///
    /// Characters outside the Basic Multilingual Plane count as two.
    pub fn utf16_len(&self) -> usize {
        self.0.as_deref().map_or(0, |s| s.encode_utf16().count())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_deref().unwrap_or(ABSENT))
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::present(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue(Some(value))
    }
}

impl From<&String> for FieldValue {
    fn from(value: &String) -> Self {
        FieldValue::present(value.as_str())
    }
}

impl From<Option<&str>> for FieldValue {
    fn from(value: Option<&str>) -> Self {
        FieldValue(value.map(str::to_owned))
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        FieldValue(value)
    }
}

/// Render a number the way reports show it.
///
/// Integral values drop the fractional part (`5`, not `5.0`), negative zero
/// renders as `0`, and the non-finite values render as `NaN`, `Infinity`
/// and `-Infinity`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        String::from("NaN")
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if n == 0.0 {
        String::from("0")
    } else {
        n.to_string()
    }
}

/// A loosely-typed value, judged by truthiness.
///
/// Conversions exist from the Rust primitives, from `Option<T>` (where `None`
/// becomes [`AnyValue::Undefined`]) and from `serde_json::Value` (where JSON
/// `null` becomes [`AnyValue::Null`]).
#[derive(Debug, Clone, PartialEq)]
pub enum AnyValue {
    /// Explicitly null.
    Null,
    /// Never set.
    Undefined,
    /// A boolean.
    Bool(bool),
    /// A number; may be NaN.
    Number(f64),
    /// A string.
    Text(String),
    /// A list. Always truthy, even when empty.
    Array(Vec<AnyValue>),
    /// A record. Always truthy, even when empty.
    Object,
}

impl AnyValue {
    /// The falsy set: null, undefined, `false`, zero, NaN and the empty string.
    ///
    /// Everything else, including empty arrays and objects, is truthy.
    ///
    /// ```rust
    /// use fieldcheck::AnyValue;
    ///
    /// assert!(AnyValue::Number(f64::NAN).is_falsy());
    /// assert!(AnyValue::from("").is_falsy());
    /// assert!(!AnyValue::Array(vec![]).is_falsy());
    /// ```
    pub fn is_falsy(&self) -> bool {
        match self {
            AnyValue::Null | AnyValue::Undefined => true,
            AnyValue::Bool(b) => !b,
            AnyValue::Number(n) => *n == 0.0 || n.is_nan(),
            AnyValue::Text(s) => s.is_empty(),
            AnyValue::Array(_) | AnyValue::Object => false,
        }
    }

    /// Negation of [`is_falsy`](Self::is_falsy).
    pub fn is_truthy(&self) -> bool {
        !self.is_falsy()
    }
}

impl fmt::Display for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyValue::Null => f.write_str(ABSENT),
            AnyValue::Undefined => f.write_str(UNDEFINED),
            AnyValue::Bool(b) => write!(f, "{}", b),
            AnyValue::Number(n) => f.write_str(&format_number(*n)),
            AnyValue::Text(s) => f.write_str(s),
            AnyValue::Array(items) => {
                // Nested null and undefined render as nothing inside a list.
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    if !matches!(item, AnyValue::Null | AnyValue::Undefined) {
                        write!(f, "{}", item)?;
                    }
                }
                Ok(())
            }
            AnyValue::Object => f.write_str("[object Object]"),
        }
    }
}

impl From<bool> for AnyValue {
    fn from(value: bool) -> Self {
        AnyValue::Bool(value)
    }
}

impl From<f64> for AnyValue {
    fn from(value: f64) -> Self {
        AnyValue::Number(value)
    }
}

impl From<i32> for AnyValue {
    fn from(value: i32) -> Self {
        AnyValue::Number(f64::from(value))
    }
}

impl From<u32> for AnyValue {
    fn from(value: u32) -> Self {
        AnyValue::Number(f64::from(value))
    }
}

impl From<&str> for AnyValue {
    fn from(value: &str) -> Self {
        AnyValue::Text(value.to_owned())
    }
}

impl From<String> for AnyValue {
    fn from(value: String) -> Self {
        AnyValue::Text(value)
    }
}

impl<T: Into<AnyValue>> From<Option<T>> for AnyValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(AnyValue::Undefined, Into::into)
    }
}

impl<T: Into<AnyValue>> From<Vec<T>> for AnyValue {
    fn from(value: Vec<T>) -> Self {
        AnyValue::Array(value.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for AnyValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => AnyValue::Null,
            Value::Bool(b) => AnyValue::Bool(b),
            Value::Number(n) => AnyValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => AnyValue::Text(s),
            Value::Array(items) => AnyValue::Array(items.into_iter().map(Into::into).collect()),
            Value::Object(_) => AnyValue::Object,
        }
    }
}

impl From<FieldValue> for AnyValue {
    fn from(value: FieldValue) -> Self {
        // Absent field values already report as "null".
        value.0.map_or(AnyValue::Null, AnyValue::Text)
    }
}
