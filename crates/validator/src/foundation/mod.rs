//! Core validation types and traits
//!
//! This module contains the building blocks every rule and the orchestrator
//! share:
//!
//! - **Values**: [`Value`], the raw field value, with [`IntValue`] folding
//!   the eight native integer widths into one type
//! - **Type tags**: [`Kind`] (detected) and [`Expect`] (declared)
//! - **Descriptor**: [`Val`], what one rule invocation sees
//! - **Traits**: [`Rule`], [`Outcome`], [`RuleContext`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`], [`Error`]
//!
//! # Writing a rule
//!
//! ```
//! use fieldcheck_validator::foundation::{Outcome, Rule, RuleContext, Val, ValidationError};
//!
//! struct NonNegative;
//!
//! impl Rule for NonNegative {
//!     fn verify(&self, _ctx: &RuleContext<'_>, val: &Val<'_>) -> Outcome {
//!         match val.int() {
//!             Some(n) if n.cmp_bound(0).is_ge() => Outcome::next(),
//!             _ => Outcome::fail(
//!                 ValidationError::new(val.key, "non_negative").with_arg(val.tran_key()),
//!             ),
//!         }
//!     }
//! }
//! ```

pub mod error;
pub mod numeric;
pub mod traits;
pub mod val;
pub mod value;

pub use error::{Error, Result, ValidationError, ValidationErrors};
pub use numeric::IntValue;
pub use traits::{Outcome, Rule, RuleContext};
pub use val::Val;
pub use value::{Expect, Kind, Value};
