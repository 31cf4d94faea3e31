//! Factory functions wired into domain objects

use fieldcheck::checkable::{check_all, ensure_valid, failing_reports, Checkable, Checked};
use fieldcheck::factory::{
    and, contains_validator, false_validator, iso_date_validator, length_validator, or,
    uuid_v4_check_validator,
};
use fieldcheck::{assert_invalid, assert_report, assert_valid, AnyValue, Report, Validator};

struct User {
    name: Checked<String>,
    status: Checked<String>,
    created_at: Checked<String>,
}

impl User {
    const LOGIN_STATUS: [&'static str; 2] = ["LoggedIn", "Logout"];

    fn of(name: &str, status: &str, created_at: &str) -> Self {
        User {
            name: Checked::new(name.to_string(), |v| length_validator("name", v.as_str(), 1, 100)),
            status: Checked::new(status.to_string(), |v| {
                contains_validator("login_status", v.as_str(), Self::LOGIN_STATUS)
            }),
            created_at: Checked::new(created_at.to_string(), |v| {
                iso_date_validator("created_at", v.as_str())
            }),
        }
    }

    fn fields(&self) -> [&dyn Checkable; 3] {
        [&self.name, &self.status, &self.created_at]
    }
}

#[test]
fn valid_user_passes_every_field() {
    let user = User::of("waddy", "LoggedIn", "2020-01-31T12:00:00+09:00");
    assert!(ensure_valid(check_all(&user.fields())).is_ok());
}

#[test]
fn empty_status_is_reported() {
    let user = User::of("waddy", "", "");
    let results = check_all(&user.fields());
    assert_eq!(
        failing_reports(&results),
        vec![Report::new("login_status", "", "not empty", "")]
    );
}

#[test]
fn every_failing_field_is_collected() {
    let user = User::of("", "Away", "yesterday");
    let err = ensure_valid(check_all(&user.fields())).unwrap_err();
    let attributes: Vec<&str> = err.reports().iter().map(|r| r.attribute.as_str()).collect();
    assert_eq!(attributes, ["name", "login_status", "created_at"]);
}

#[test]
fn uuid_or_empty_string() {
    let id = |value: &str| {
        or([
            uuid_v4_check_validator("id", value),
            fieldcheck::factory::empty_string_validator("id", value),
        ])
    };
    assert_valid!(id("3b241101-e2bb-4255-8caf-4136c566a962").validate());
    assert_report!(id("").validate(), valid, expected = "type: ");
    assert_invalid!(id("nope").validate());
}

#[test]
fn nested_and_of_or() {
    let v = and([
        length_validator("code", "abc", 1, 5),
        or([
            false_validator("flag", AnyValue::Bool(true)),
            false_validator("flag", AnyValue::Null),
        ]),
    ]);
    assert_report!(v.validate(), valid, attribute = "flag", raw_value = "null");
}

#[test]
fn empty_and_is_invalid() {
    assert_report!(
        and(Vec::new()).validate(),
        invalid,
        attribute = "and",
        expected = "Pass all validator.",
        actual = "Passed all validator.",
    );
}
