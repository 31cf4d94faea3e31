//! Postal Code Example
//!
//! A postal code is valid when it is exactly five or exactly seven
//! characters long. Two AND branches under one OR.
//!
//! Run with: cargo run --example postal_code

use fieldcheck::prelude::*;

fn postal_code_validator(value: &str) -> OrCompositeValidator {
    let key = "postal_code";
    let five = MinLengthValidator::new(key, value, 5).and(MaxLengthValidator::new(key, value, 5));
    let seven = MinLengthValidator::new(key, value, 7).and(MaxLengthValidator::new(key, value, 7));
    five.or(seven)
}

fn main() {
    println!("Postal Code Validation");
    println!("======================\n");

    for value in ["12345", "1234567", "123456", ""] {
        let result = postal_code_validator(value).validate();
        let verdict = if result.is_valid() { "valid" } else { "invalid" };
        println!("{:?} -> {}", value, verdict);
        println!("    {}", result.report);
    }
}
