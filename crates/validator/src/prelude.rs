//! Prelude module for convenient imports.
//!
//! Provides a single `use fieldcheck_validator::prelude::*;` import that
//! brings in the validator, the rule trait and the error types.

// ============================================================================
// FOUNDATION: Core traits, values, errors
// ============================================================================

pub use crate::foundation::{
    Error, Expect, IntValue, Kind, Outcome, Rule, RuleContext, Val, ValidationError,
    ValidationErrors, Value,
};

// ============================================================================
// RULES AND REGISTRY
// ============================================================================

pub use crate::registry::RuleRegistry;
pub use crate::rules::{Email, Integer, Max, Min, Required};

// ============================================================================
// ORCHESTRATION
// ============================================================================

pub use crate::chain::{RuleSpec, parse_chain};
pub use crate::config::{Mode, ValidatorConfig};
pub use crate::translate::{Catalog, Translate};
pub use crate::validator::{FieldBinding, Validator};
