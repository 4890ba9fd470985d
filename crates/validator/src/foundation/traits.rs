//! Core traits for the validation system
//!
//! Every named check implements [`Rule`]. A rule inspects one [`Val`] and
//! answers with an [`Outcome`]: whether the value passed, and whether the
//! rest of the field's chain should run.

use super::error::ValidationError;
use super::val::Val;
use super::value::Expect;
use crate::translate::Translate;

// ============================================================================
// OUTCOME
// ============================================================================

/// Verdict of one rule invocation.
///
/// A failing outcome always carries its error, so a failure can never be
/// reported without one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "an outcome decides whether the chain continues"]
pub struct Outcome {
    pass: bool,
    next: bool,
    error: Option<ValidationError>,
}

impl Outcome {
    /// Passed; run the next rule.
    pub fn next() -> Self {
        Self {
            pass: true,
            next: true,
            error: None,
        }
    }

    /// Passed; nothing after this rule needs to run.
    pub fn stop() -> Self {
        Self {
            pass: true,
            next: false,
            error: None,
        }
    }

    /// Failed; halt the chain.
    pub fn fail(error: ValidationError) -> Self {
        Self {
            pass: false,
            next: false,
            error: Some(error),
        }
    }

    /// Failed, but let later rules run. Only the first failure of a chain is
    /// surfaced.
    pub fn fail_and_continue(error: ValidationError) -> Self {
        Self {
            pass: false,
            next: true,
            error: Some(error),
        }
    }

    /// Whether the value satisfied the rule.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.pass
    }

    /// Whether the chain continues after this rule.
    #[must_use]
    pub fn proceeds(&self) -> bool {
        self.next
    }

    /// The failure, if any.
    #[must_use]
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// `(pass, continue, error)`.
    #[must_use]
    pub fn into_parts(self) -> (bool, bool, Option<ValidationError>) {
        (self.pass, self.next, self.error)
    }
}

// ============================================================================
// RULE CONTEXT
// ============================================================================

/// What a rule may know about the call it runs in.
#[derive(Clone, Copy)]
pub struct RuleContext<'a> {
    translator: &'a dyn Translate,
    locale: &'a str,
}

impl<'a> RuleContext<'a> {
    /// Creates a context rendering through `translator` for `locale`.
    pub fn new(translator: &'a dyn Translate, locale: &'a str) -> Self {
        Self { translator, locale }
    }

    /// The active locale.
    #[must_use]
    pub fn locale(&self) -> &'a str {
        self.locale
    }

    /// Renders `key` with `args` in the active locale.
    #[must_use]
    pub fn trans(&self, key: &str, args: &[String]) -> String {
        self.translator.translate(self.locale, key, args)
    }
}

impl std::fmt::Debug for RuleContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleContext")
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// RULE TRAIT
// ============================================================================

/// A named, stateless check.
///
/// Rules are shared across threads through the registry, so `verify` takes
/// `&self` and must be pure: the same `Val` always gives the same outcome.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::foundation::{Outcome, Rule, RuleContext, Val, ValidationError};
///
/// struct Lowercase;
///
/// impl Rule for Lowercase {
///     fn verify(&self, _ctx: &RuleContext<'_>, val: &Val<'_>) -> Outcome {
///         match val.value.as_str() {
///             Some(s) if s.chars().all(|c| !c.is_uppercase()) => Outcome::next(),
///             _ => Outcome::fail(ValidationError::new(val.key, "lowercase").with_arg(val.tran_key())),
///         }
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Checks one value.
    fn verify(&self, ctx: &RuleContext<'_>, val: &Val<'_>) -> Outcome;

    /// The semantic type this rule establishes for its field, if any.
    ///
    /// A field without an explicit type takes the first declaration found
    /// in its chain.
    fn declares(&self) -> Option<Expect> {
        None
    }

    /// Type name, for diagnostics.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Plain functions and closures are rules too.
impl<F> Rule for F
where
    F: Fn(&RuleContext<'_>, &Val<'_>) -> Outcome + Send + Sync,
{
    fn verify(&self, ctx: &RuleContext<'_>, val: &Val<'_>) -> Outcome {
        self(ctx, val)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Value;
    use crate::translate::Catalog;

    struct AlwaysStops;

    impl Rule for AlwaysStops {
        fn verify(&self, _ctx: &RuleContext<'_>, _val: &Val<'_>) -> Outcome {
            Outcome::stop()
        }
    }

    #[test]
    fn test_outcome_parts() {
        assert_eq!(Outcome::next().into_parts(), (true, true, None));
        assert_eq!(Outcome::stop().into_parts(), (true, false, None));

        let error = ValidationError::new("f", "k");
        let failed = Outcome::fail(error.clone());
        assert!(!failed.passed());
        assert!(!failed.proceeds());
        assert_eq!(failed.error(), Some(&error));

        let soft = Outcome::fail_and_continue(error);
        assert!(!soft.passed());
        assert!(soft.proceeds());
    }

    #[test]
    fn test_rule_name() {
        assert!(AlwaysStops.name().contains("AlwaysStops"));
    }

    fn reject_absent(_ctx: &RuleContext<'_>, val: &Val<'_>) -> Outcome {
        if val.value.is_absent() {
            Outcome::fail(ValidationError::new(val.key, "required"))
        } else {
            Outcome::next()
        }
    }

    #[test]
    fn test_function_rule() {
        let catalog = Catalog::builtin();
        let ctx = RuleContext::new(&catalog, "en");

        let value = Value::Null;
        let val = Val::new("f", &value, Expect::String);
        assert!(!reject_absent.verify(&ctx, &val).passed());
        assert_eq!(reject_absent.declares(), None);
    }

    #[test]
    fn test_context_trans() {
        let catalog = Catalog::builtin();
        let ctx = RuleContext::new(&catalog, "en");
        assert_eq!(ctx.locale(), "en");
        assert_eq!(ctx.trans("required", &["age".into()]), "age is required");
    }
}
