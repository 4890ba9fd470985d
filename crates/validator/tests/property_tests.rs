//! Property-based tests for fieldcheck-validator.

use fieldcheck_validator::foundation::numeric::parse_int_literal;
use fieldcheck_validator::prelude::*;
use proptest::prelude::*;

fn verdict(rule: &dyn Rule, value: &Value, expect: Expect, param: &str) -> (bool, bool, bool) {
    let catalog = Catalog::builtin();
    let ctx = RuleContext::new(&catalog, "en");
    let (pass, next, error) = rule
        .verify(&ctx, &Val::new("f", value, expect).with_param(param))
        .into_parts();
    (pass, next, error.is_some())
}

// ============================================================================
// PURITY: verify(x) == verify(x)
// ============================================================================

proptest! {
    #[test]
    fn required_is_pure(s in ".{0,16}") {
        let value = Value::from(s);
        prop_assert_eq!(
            verdict(&Required, &value, Expect::String, ""),
            verdict(&Required, &value, Expect::String, "")
        );
    }

    #[test]
    fn max_is_pure(n in any::<i64>(), bound in any::<i64>()) {
        let value = Value::from(n);
        let param = bound.to_string();
        prop_assert_eq!(
            verdict(&Max, &value, Expect::Int, &param),
            verdict(&Max, &value, Expect::Int, &param)
        );
    }
}

// ============================================================================
// OUTCOME SHAPE: failures always stop and always carry an error
// ============================================================================

proptest! {
    #[test]
    fn builtin_failures_stop_with_error(s in ".{0,24}", bound in 0u32..64) {
        let value = Value::from(s);
        let param = bound.to_string();
        let rules: [&dyn Rule; 5] = [&Required, &Integer, &Max, &Min, &Email];
        for rule in rules {
            for expect in [Expect::Int, Expect::String, Expect::Email, Expect::Float] {
                let (pass, next, has_error) = verdict(rule, &value, expect, &param);
                prop_assert_eq!(pass, next);
                prop_assert_eq!(pass, !has_error);
            }
        }
    }

    #[test]
    fn empty_param_never_constrains(s in ".{0,24}") {
        let value = Value::from(s);
        for expect in [Expect::Int, Expect::String, Expect::Time] {
            prop_assert_eq!(verdict(&Max, &value, expect, ""), (true, true, false));
            prop_assert_eq!(verdict(&Min, &value, expect, ""), (true, true, false));
        }
    }
}

// ============================================================================
// NUMERIC SEMANTICS
// ============================================================================

proptest! {
    #[test]
    fn string_and_native_agree(n in any::<i64>(), bound in any::<i64>()) {
        let native = Value::from(n);
        let text = Value::from(n.to_string());
        let param = bound.to_string();
        prop_assert_eq!(
            verdict(&Max, &native, Expect::Int, &param),
            verdict(&Max, &text, Expect::Int, &param)
        );
        prop_assert_eq!(verdict(&Max, &native, Expect::Int, &param).0, n <= bound);
    }

    #[test]
    fn narrow_field_against_wide_bound(n in any::<i8>(), bound in any::<i32>()) {
        let value = Value::from(n);
        let param = bound.to_string();
        prop_assert_eq!(verdict(&Max, &value, Expect::Int, &param).0, i32::from(n) <= bound);
        prop_assert_eq!(verdict(&Min, &value, Expect::Int, &param).0, i32::from(n) >= bound);
    }

    #[test]
    fn string_and_native_agree_past_i32(
        n in prop_oneof![Just(i64::from(i32::MIN)), Just(i64::from(i32::MAX)), any::<i32>().prop_map(i64::from)],
        offset in 1i64..=i64::from(u32::MAX),
    ) {
        let native = Value::from(n);
        let text = Value::from(n.to_string());
        for bound in [n - offset, n + offset] {
            let param = bound.to_string();
            for rule in [&Max as &dyn Rule, &Min] {
                prop_assert_eq!(
                    verdict(rule, &native, Expect::Int, &param),
                    verdict(rule, &text, Expect::Int, &param)
                );
            }
        }
    }

    #[test]
    fn decimal_literals_parse(n in any::<i64>()) {
        prop_assert_eq!(parse_int_literal(&n.to_string()), Some(i128::from(n)));
    }

    #[test]
    fn hex_literals_parse(n in any::<u32>()) {
        prop_assert_eq!(parse_int_literal(&format!("0x{n:x}")), Some(i128::from(n)));
    }

    #[test]
    fn string_length_is_bytes(s in ".{0,24}", bound in 0usize..32) {
        let value = Value::from(s.clone());
        let pass = verdict(&Max, &value, Expect::String, &bound.to_string()).0;
        prop_assert_eq!(pass, s.len() <= bound);
    }
}
