//! Email address format

use std::sync::LazyLock;

use crate::foundation::{Expect, Outcome, Rule, RuleContext, Val, ValidationError};

/// Translation key of a malformed address.
pub const KEY: &str = "email";

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$"
    ).expect("email pattern is valid")
});

/// Requires a `local@domain.tld` string.
///
/// Declares [`Expect::Email`], so a later `max`/`min` bounds the address
/// length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Email;

impl Rule for Email {
    fn verify(&self, _ctx: &RuleContext<'_>, val: &Val<'_>) -> Outcome {
        match val.value.as_str() {
            Some(s) if EMAIL_REGEX.is_match(s) => Outcome::next(),
            _ => Outcome::fail(ValidationError::new(val.key, KEY).with_arg(val.tran_key())),
        }
    }

    fn declares(&self) -> Option<Expect> {
        Some(Expect::Email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Value;
    use crate::translate::Catalog;
    use rstest::rstest;

    fn passes(value: Value) -> bool {
        let catalog = Catalog::builtin();
        let ctx = RuleContext::new(&catalog, "en");
        Email
            .verify(&ctx, &Val::new("mail", &value, Expect::Email))
            .passed()
    }

    #[rstest]
    #[case("user@example.com")]
    #[case("first.last+tag@sub.example.org")]
    #[case("a@b.io")]
    fn test_valid(#[case] input: &str) {
        assert!(passes(Value::from(input)));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("user")]
    #[case("user@")]
    #[case("@example.com")]
    #[case("user@localhost")]
    #[case("user@-example.com")]
    #[case("user @example.com")]
    fn test_invalid(#[case] input: &str) {
        assert!(!passes(Value::from(input)));
    }

    #[test]
    fn test_non_string_fails() {
        assert!(!passes(Value::from(42_i32)));
        assert!(!passes(Value::Null));
    }
}
