//! Date and time leaf validators
//!
//! Parsing is delegated to `chrono`; these validators only ask whether the
//! text parses to a real calendar date or time.

use chrono::format::ParseErrorKind;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use super::verdict;
use crate::report::{Report, ValidationResult};
use crate::validator::Validator;
use crate::value::FieldValue;

/// The `expected` text of [`ISODateTimeValidator`] reports.
pub const ISO_EXPECTED: &str = "valid ISO string. ex: 2011-10-05T14:48:00.000+09:00";

const ISO_ZONED: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y%m%dT%H%M%S%.f%#z",
];

const ISO_NAIVE_DATETIME: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y%m%dT%H%M%S%.f",
    "%G-W%V-%uT%H:%M:%S%.f",
];

const ISO_DATE: &[&str] = &["%Y-%m-%d", "%Y%m%d", "%G-W%V-%u"];

const ISO_TIME: &[&str] = &["%H:%M:%S%.f", "%H:%M"];

/// Valid iff the value parses under a chrono strftime format.
///
/// The value may describe a zoned date-time, a naive date-time, a date, or a
/// time, depending on which fields the format carries. Out-of-range fields
/// (`2020-01-32`, `25:00`) and impossible dates (`2020-02-30`) fail.
///
/// # Example
///
/// ```rust
/// use fieldcheck::prelude::*;
///
/// let v = DateTimeValidator::new("birthday", "202001311200", "%Y%m%d%H%M");
/// assert!(v.validate().is_valid());
/// assert_eq!(v.validate().report.expected, "dateFormat: %Y%m%d%H%M");
///
/// let v = DateTimeValidator::new("birthday", "202001321200", "%Y%m%d%H%M");
/// assert!(!v.validate().is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeValidator {
    name: String,
    value: FieldValue,
    date_format: String,
}

impl DateTimeValidator {
    /// Capture the attribute name, value and format.
    pub fn new(
        name: impl Into<String>,
        value: impl Into<FieldValue>,
        date_format: impl Into<String>,
    ) -> Self {
        DateTimeValidator {
            name: name.into(),
            value: value.into(),
            date_format: date_format.into(),
        }
    }
}

impl Validator for DateTimeValidator {
    fn validate(&self) -> ValidationResult {
        let raw = self.value.to_string();
        let is_valid = self
            .value
            .as_deref()
            .is_some_and(|value| parses_with_format(value, &self.date_format));
        let report = Report::new(
            &self.name,
            raw.clone(),
            format!("dateFormat: {}", self.date_format),
            raw,
        );
        verdict(is_valid, report)
    }
}

/// Valid iff the value is ISO-8601, with the empty string always accepted.
///
/// An absent value fails. Accepted shapes include calendar dates
/// (`2016`, `2016-05`, `2016-05-25`, `20160525`), week dates (`2016-W21-3`),
/// ordinal dates (`2016-146`), date-times with optional fraction and offset
/// (`2011-10-05T14:48:00.000+09:00`, `2016-05-25T09:24Z`), date-times down to
/// the hour (`2016-05-25T09`) and times (`09:24`, `09:24:15.123`). Week dates
/// may leave out the weekday (`2016-W21`).
///
/// # Example
///
/// ```rust
/// use fieldcheck::prelude::*;
///
/// assert!(ISODateTimeValidator::new("at", "2011-10-05T14:48:00.000+09:00").validate().is_valid());
/// assert!(ISODateTimeValidator::new("at", "").validate().is_valid());
/// assert!(!ISODateTimeValidator::new("at", "not-a-date").validate().is_valid());
/// assert!(!ISODateTimeValidator::new("at", None::<&str>).validate().is_valid());
/// ```
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ISODateTimeValidator {
    name: String,
    value: FieldValue,
}

impl ISODateTimeValidator {
    /// Capture the attribute name and value.
    pub fn new(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        ISODateTimeValidator {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Validator for ISODateTimeValidator {
    fn validate(&self) -> ValidationResult {
        let raw = self.value.to_string();
        let is_valid = match self.value.as_deref() {
            None => false,
            Some("") => true,
            Some(value) => parses_as_iso(value),
        };
        verdict(is_valid, Report::new(&self.name, raw.clone(), ISO_EXPECTED, raw))
    }
}

fn parses_with_format(value: &str, format: &str) -> bool {
    if DateTime::parse_from_str(value, format).is_ok()
        || NaiveDateTime::parse_from_str(value, format).is_ok()
    {
        return true;
    }
    match NaiveDate::parse_from_str(value, format) {
        Ok(_) => true,
        // No date fields at all: the format describes a time of day.
        Err(e) if e.kind() == ParseErrorKind::NotEnough => {
            NaiveTime::parse_from_str(value, format).is_ok()
        }
        Err(_) => false,
    }
}

fn parses_as_iso(value: &str) -> bool {
    // chrono skips whitespace before numeric fields; ISO-8601 does not.
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    DateTime::parse_from_rfc3339(value).is_ok()
        || ISO_ZONED
            .iter()
            .any(|f| DateTime::parse_from_str(value, f).is_ok())
        || ISO_NAIVE_DATETIME
            .iter()
            .any(|f| NaiveDateTime::parse_from_str(value, f).is_ok())
        || ISO_DATE
            .iter()
            .any(|f| NaiveDate::parse_from_str(value, f).is_ok())
        || ISO_TIME
            .iter()
            .any(|f| NaiveTime::parse_from_str(value, f).is_ok())
        || parses_as_ordinal(value)
        || parses_as_reduced_date(value)
        || parses_as_week(value)
        || parses_as_hour_only(value)
}

/// `YYYY-DDD`, optionally followed by `T` and a time.
///
/// chrono accepts one to three digits for `%j`, so the shape is checked
/// first; otherwise `2011-13` would read as the 13th day of 2011.
fn parses_as_ordinal(value: &str) -> bool {
    let (date, time) = match value.split_once('T') {
        Some((date, time)) => (date, Some(time)),
        None => (value, None),
    };
    let bytes = date.as_bytes();
    let shaped = bytes.len() == 8
        && bytes[4] == b'-'
        && bytes[..4].iter().chain(&bytes[5..]).all(u8::is_ascii_digit);
    if !shaped || NaiveDate::parse_from_str(date, "%Y-%j").is_err() {
        return false;
    }
    time.is_none_or(|time| {
        ISO_TIME
            .iter()
            .any(|f| NaiveTime::parse_from_str(time, f).is_ok())
    })
}

/// `YYYY` or `YYYY-MM`.
fn parses_as_reduced_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() < 4 || !bytes[..4].iter().all(u8::is_ascii_digit) {
        return false;
    }
    match bytes.len() {
        4 => true,
        7 if bytes[4] == b'-' && bytes[5..].iter().all(u8::is_ascii_digit) => {
            NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d").is_ok()
        }
        _ => false,
    }
}

/// `YYYY-Www`, the week date without a weekday.
fn parses_as_week(value: &str) -> bool {
    let bytes = value.as_bytes();
    let shaped = bytes.len() == 8
        && bytes[4] == b'-'
        && bytes[5] == b'W'
        && bytes[..4].iter().chain(&bytes[6..]).all(u8::is_ascii_digit);
    shaped && NaiveDate::parse_from_str(&format!("{}-1", value), "%G-W%V-%u").is_ok()
}

/// A date followed by `T` and a bare two-digit hour.
fn parses_as_hour_only(value: &str) -> bool {
    let Some((date, hour)) = value.split_once('T') else {
        return false;
    };
    hour.len() == 2
        && hour.bytes().all(|b| b.is_ascii_digit())
        && hour.parse::<u32>().is_ok_and(|h| h < 24)
        && ISO_DATE
            .iter()
            .any(|f| NaiveDate::parse_from_str(date, f).is_ok())
}
