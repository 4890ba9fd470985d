//! Upper and lower bounds
//!
//! `max` and `min` share one checker. What the bound applies to depends on
//! the field's declared type: the numeric value for [`Expect::Int`], the
//! byte length for [`Expect::String`] and [`Expect::Email`]. Any other
//! declared type fails with the numeric key.

use std::cmp::Ordering;

use crate::foundation::numeric::parse_int_literal;
use crate::foundation::{Expect, Kind, Outcome, Rule, RuleContext, Val, ValidationError};

/// Which side of the bound a value must stay on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Side {
    Upper,
    Lower,
}

impl Side {
    fn int_key(self) -> &'static str {
        match self {
            Self::Upper => "max.int",
            Self::Lower => "min.int",
        }
    }

    fn string_key(self) -> &'static str {
        match self {
            Self::Upper => "max.string",
            Self::Lower => "min.string",
        }
    }

    fn admits(self, ord: Ordering) -> bool {
        match self {
            Self::Upper => ord.is_le(),
            Self::Lower => ord.is_ge(),
        }
    }
}

fn check(side: Side, val: &Val<'_>) -> Outcome {
    if !val.has_param() {
        return Outcome::next();
    }

    let (ok, key) = match val.expect {
        Expect::Int => {
            let ok = match (val.int(), parse_int_literal(val.param)) {
                // Parsed strings compare at the bound's full precision.
                (Some(n), Some(bound)) if val.real == Kind::String => {
                    side.admits(n.to_i128().cmp(&bound))
                }
                (Some(n), Some(bound)) => side.admits(n.cmp_bound(bound)),
                _ => false,
            };
            (ok, side.int_key())
        }
        Expect::String | Expect::Email => {
            let ok = match (val.value.as_str(), val.param.parse::<usize>()) {
                (Some(s), Ok(bound)) => side.admits(s.len().cmp(&bound)),
                _ => false,
            };
            (ok, side.string_key())
        }
        Expect::Float | Expect::Bool | Expect::Time => (false, side.int_key()),
    };

    if ok {
        Outcome::next()
    } else {
        Outcome::fail(
            ValidationError::new(val.key, key)
                .with_arg(val.tran_key())
                .with_arg(val.param),
        )
    }
}

/// Upper bound: `value <= param` for integers, `len <= param` for strings.
///
/// An empty parameter leaves the field unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Max;

impl Rule for Max {
    fn verify(&self, _ctx: &RuleContext<'_>, val: &Val<'_>) -> Outcome {
        check(Side::Upper, val)
    }
}

/// Lower bound: `value >= param` for integers, `len >= param` for strings.
///
/// An empty parameter leaves the field unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Min;

impl Rule for Min {
    fn verify(&self, _ctx: &RuleContext<'_>, val: &Val<'_>) -> Outcome {
        check(Side::Lower, val)
    }
}
