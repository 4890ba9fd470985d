//! Name-to-rule registry
//!
//! A [`RuleRegistry`] maps rule names to shared rule objects. Lookups take a
//! read lock; registration takes the write lock, so rules may be added
//! while validations are running.
//!
//! Registering a name twice replaces the earlier rule. The replacement is
//! logged at `warn` level and returned to the caller.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;

use crate::foundation::{Error, Result, Rule};

static GLOBAL: LazyLock<RuleRegistry> = LazyLock::new(RuleRegistry::with_builtins);

/// Thread-safe rule table.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::registry::RuleRegistry;
/// use fieldcheck_validator::rules::Required;
///
/// let registry = RuleRegistry::new();
/// registry.register("present", Required);
///
/// assert!(registry.contains("present"));
/// assert!(registry.lookup("missing").is_err());
/// ```
#[derive(Default)]
pub struct RuleRegistry {
    rules: RwLock<HashMap<String, Arc<dyn Rule>>>,
}

impl RuleRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a registry holding every built-in rule.
    #[must_use]
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        crate::rules::register_builtins(&registry);
        registry
    }

    /// The process-wide registry, built with the built-in rules on first use.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Installs `rule` under `name`, returning the rule it replaced.
    pub fn register<R>(&self, name: impl Into<String>, rule: R) -> Option<Arc<dyn Rule>>
    where
        R: Rule + 'static,
    {
        self.register_shared(name, Arc::new(rule))
    }

    /// Installs an already shared rule under `name`.
    ///
    /// Used to register one rule object under several names.
    pub fn register_shared(
        &self,
        name: impl Into<String>,
        rule: Arc<dyn Rule>,
    ) -> Option<Arc<dyn Rule>> {
        let name = name.into();
        tracing::debug!(rule = %name, implementation = rule.name(), "registering rule");

        let previous = self.rules.write().insert(name.clone(), rule);
        if previous.is_some() {
            tracing::warn!(rule = %name, "rule replaced by a later registration");
        }
        previous
    }

    /// Removes the rule registered under `name`.
    pub fn unregister(&self, name: &str) -> Option<Arc<dyn Rule>> {
        self.rules.write().remove(name)
    }

    /// Finds the rule registered under `name`.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownRule`] if nothing is registered under `name`.
    pub fn lookup(&self, name: &str) -> Result<Arc<dyn Rule>> {
        self.rules
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| Error::UnknownRule {
                name: name.to_owned(),
            })
    }

    /// Whether a rule is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.rules.read().contains_key(name)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.rules.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered names. Aliases count separately.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.read().len()
    }

    /// Whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.read().is_empty()
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.names())
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
