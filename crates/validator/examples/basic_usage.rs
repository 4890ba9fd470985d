//! Basic usage example for fieldcheck-validator
//!
//! Run with `FIELDCHECK_LOG=fieldcheck_validator=trace` to see every rule
//! verdict.

use fieldcheck_validator::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _guard = fieldcheck_log::init()?;

    // Fail-fast: the first failing field is the error
    let mut signup = Validator::new();
    signup
        .field("name", "Ada", "required|max:32")?
        .field("age", "200", "required|int|max:150")?
        .field("email", "ada@example", "required|email")?;

    match signup.validate() {
        Ok(()) => println!("✓ signup is valid"),
        Err(e) => println!("✗ {e}"),
    }

    // Accumulate, in Chinese
    let mut signup = Validator::new()
        .with_mode(Mode::Accumulate)
        .with_locale("zh-CN");
    signup
        .field("name", "", "required")?
        .field("age", "forty", "required|int")?;

    if let Err(e) = signup.validate() {
        for error in e.validation_errors() {
            println!("✗ {}: {}", error.field, error.message());
        }
    }

    // Native values keep their width: 300 lies above every i8
    let validator = Validator::new();
    let binding = FieldBinding::new("level", 100_i8)
        .rule("int")
        .rule(RuleSpec::new("max").with_param("300"));
    println!("i8 level within 300: {}", validator.check(&binding)?.is_none());

    Ok(())
}
