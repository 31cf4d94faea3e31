//! User Domain Example
//!
//! Domain value objects that carry their own validator trees. Failing
//! reports are printed as JSON and the process exits non-zero.
//!
//! Run with: cargo run --example user_domain
//! Tracing output: cargo run --example user_domain --features tracing

use fieldcheck::checkable::{check_all, ensure_valid, Checkable, Checked};
use fieldcheck::factory::{contains_validator, iso_date_validator, length_validator};

const LOGIN_STATUS: [&str; 2] = ["LoggedIn", "Logout"];

#[derive(Debug)]
struct User {
    name: Checked<String>,
    login_status: Checked<String>,
    created_at: Checked<String>,
}

impl User {
    fn new(name: &str, login_status: &str, created_at: &str) -> Self {
        User {
            name: Checked::new(name.to_string(), |v| length_validator("name", v.as_str(), 1, 100)),
            login_status: Checked::new(login_status.to_string(), |v| {
                contains_validator("login_status", v.as_str(), LOGIN_STATUS)
            }),
            created_at: Checked::new(created_at.to_string(), |v| {
                iso_date_validator("created_at", v.as_str())
            }),
        }
    }

    fn fields(&self) -> [&dyn Checkable; 3] {
        [&self.name, &self.login_status, &self.created_at]
    }
}

#[cfg(feature = "tracing")]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();
}

#[cfg(not(feature = "tracing"))]
fn init_tracing() {}

fn main() {
    init_tracing();

    let users = [
        User::new("waddy", "LoggedIn", "2020-01-31T12:00:00+09:00"),
        User::new("waddy", "", "2020-01-31"),
    ];

    let mut failed = false;
    for user in &users {
        println!("{} ...", user.name.value());
        match ensure_valid(check_all(&user.fields())) {
            Ok(()) => println!("  ok"),
            Err(err) => {
                println!("  {}", err);
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
}
