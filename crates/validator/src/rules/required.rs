//! Presence check

use crate::foundation::{Outcome, Rule, RuleContext, Val, ValidationError};

/// Translation key of a missing value.
pub const KEY: &str = "required";

/// Fails when the value is absent: `Null`, a blank string or the zero time.
///
/// Numeric zero and `false` are present. A failure halts the chain, so the
/// rules after `required` never see an absent value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Required;

impl Rule for Required {
    fn verify(&self, _ctx: &RuleContext<'_>, val: &Val<'_>) -> Outcome {
        if val.value.is_absent() {
            Outcome::fail(ValidationError::new(val.key, KEY).with_arg(val.tran_key()))
        } else {
            Outcome::next()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Expect, Value};
    use crate::translate::Catalog;
    use chrono::{DateTime, Utc};
    use rstest::rstest;

    fn verify(value: Value) -> (bool, bool, Option<ValidationError>) {
        let catalog = Catalog::builtin();
        let ctx = RuleContext::new(&catalog, "en");
        Required
            .verify(&ctx, &Val::new("name", &value, Expect::String))
            .into_parts()
    }

    #[rstest]
    #[case::null(Value::Null)]
    #[case::empty(Value::from(""))]
    #[case::blank(Value::from("  "))]
    #[case::tabs(Value::from("\t\r\n"))]
    #[case::zero_time(Value::from(DateTime::<Utc>::default()))]
    fn test_absent_fails_and_stops(#[case] value: Value) {
        let (pass, next, error) = verify(value);
        assert!(!pass);
        assert!(!next);
        let error = error.expect("failure carries an error");
        assert_eq!(error.key, KEY);
        assert_eq!(error.field, "name");
        assert_eq!(error.args.to_vec(), vec!["name"]);
    }

    #[rstest]
    #[case::zero_int(Value::from(0_i32))]
    #[case::zero_float(Value::from(0.0))]
    #[case::false_flag(Value::from(false))]
    #[case::text(Value::from("x"))]
    #[case::padded(Value::from(" x "))]
    #[case::now(Value::from(Utc::now()))]
    fn test_present_passes_and_continues(#[case] value: Value) {
        assert_eq!(verify(value), (true, true, None));
    }

    #[test]
    fn test_label_used_in_args() {
        let catalog = Catalog::builtin();
        let ctx = RuleContext::new(&catalog, "en");
        let value = Value::Null;
        let val = Val::new("user_name", &value, Expect::String).with_tran_key("User name");
        let outcome = Required.verify(&ctx, &val);
        assert_eq!(
            outcome.error().map(|e| e.args.to_vec()),
            Some(vec!["User name".to_string()])
        );
    }
}
