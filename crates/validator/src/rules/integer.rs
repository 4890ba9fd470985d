//! Integer type check

use crate::foundation::{Expect, Outcome, Rule, RuleContext, Val, ValidationError, Value};

/// Translation key of a non-integer value.
pub const KEY: &str = "int";

/// Passes native integers of any width and strings that parse as one
/// (32-bit first, then 64-bit). Blank strings, floats, booleans, times and
/// `Null` fail.
///
/// Declares [`Expect::Int`] for its field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Integer;

impl Rule for Integer {
    fn verify(&self, _ctx: &RuleContext<'_>, val: &Val<'_>) -> Outcome {
        let ok = match val.value {
            Value::Int(_) => true,
            Value::Str(_) => val.int().is_some(),
            Value::Null | Value::Float(_) | Value::Bool(_) | Value::Time(_) => false,
        };

        if ok {
            Outcome::next()
        } else {
            Outcome::fail(ValidationError::new(val.key, KEY).with_arg(val.tran_key()))
        }
    }

    fn declares(&self) -> Option<Expect> {
        Some(Expect::Int)
    }
}
