//! Field bindings and the orchestrator that runs their chains
//!
//! A [`Validator`] holds a set of [`FieldBinding`]s. Each binding is a key,
//! a raw value and an ordered rule chain. Running the validator resolves
//! every chain against a [`RuleRegistry`], then evaluates each field on its
//! own:
//!
//! - rules run in declared order
//! - a rule answering "do not continue" ends that field's chain
//! - only the first failure of a chain becomes the field's error
//!
//! Fields never affect each other. [`Mode`] only decides how many of the
//! failing fields are reported.

use std::sync::Arc;

use crate::chain::{RuleSpec, parse_chain};
use crate::config::{Mode, ValidatorConfig};
use crate::foundation::{
    Error, Expect, Result, Rule, RuleContext, Val, ValidationError, ValidationErrors, Value,
};
use crate::registry::RuleRegistry;
use crate::translate::{Catalog, Translate};

// ============================================================================
// FIELD BINDING
// ============================================================================

/// One field to validate: its key, raw value and rule chain.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::chain::RuleSpec;
/// use fieldcheck_validator::validator::FieldBinding;
///
/// let binding = FieldBinding::new("age", "42")
///     .rule("required")
///     .rule(RuleSpec::new("max").with_param("150"))
///     .label("Age");
///
/// assert_eq!(binding.rule_specs().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FieldBinding {
    key: String,
    value: Value,
    expect: Option<Expect>,
    label: Option<String>,
    rules: Vec<RuleSpec>,
}

impl FieldBinding {
    /// A binding with an empty chain.
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            expect: None,
            label: None,
            rules: Vec::new(),
        }
    }

    /// A binding whose chain is parsed from `"required|int|max:150"` syntax.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRuleSpec`] if the chain does not parse.
    pub fn parse(key: impl Into<String>, value: impl Into<Value>, chain: &str) -> Result<Self> {
        Ok(Self::new(key, value).rules(parse_chain(chain)?))
    }

    /// Appends a rule to the chain.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule(mut self, spec: impl Into<RuleSpec>) -> Self {
        self.rules.push(spec.into());
        self
    }

    /// Appends several rules to the chain.
    #[must_use = "builder methods must be chained or built"]
    pub fn rules(mut self, specs: impl IntoIterator<Item = RuleSpec>) -> Self {
        self.rules.extend(specs);
        self
    }

    /// Declares the field's semantic type, overriding what the chain implies.
    #[must_use = "builder methods must be chained or built"]
    pub fn expect(mut self, expect: Expect) -> Self {
        self.expect = Some(expect);
        self
    }

    /// Sets the label messages show instead of the key.
    #[must_use = "builder methods must be chained or built"]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Field identifier.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Raw value under validation.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The chain, in execution order.
    #[must_use]
    pub fn rule_specs(&self) -> &[RuleSpec] {
        &self.rules
    }
}

/// A binding with every rule of its chain looked up.
struct Resolved<'b> {
    binding: &'b FieldBinding,
    expect: Expect,
    chain: Vec<(&'b RuleSpec, Arc<dyn Rule>)>,
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Runs rule chains over a set of fields.
///
/// A validator is cheap to build and meant for one validation call. The
/// registry is borrowed and the translator shared, so many validators can
/// run concurrently against the same rules.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::validator::Validator;
///
/// let mut validator = Validator::new();
/// validator.field("age", "200", "required|int|max:150")?;
///
/// let err = validator.validate().unwrap_err();
/// assert_eq!(err.to_string(), "[age] max: age must not be greater than 150");
/// # Ok::<(), fieldcheck_validator::Error>(())
/// ```
pub struct Validator<'r> {
    registry: &'r RuleRegistry,
    translator: Arc<dyn Translate>,
    config: ValidatorConfig,
    fields: Vec<FieldBinding>,
}

impl Validator<'static> {
    /// A validator over the global registry and the built-in catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(RuleRegistry::global())
    }
}

impl Default for Validator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> Validator<'r> {
    /// A validator over an explicit registry.
    #[must_use]
    pub fn with_registry(registry: &'r RuleRegistry) -> Self {
        Self {
            registry,
            translator: Catalog::shared(),
            config: ValidatorConfig::default(),
            fields: Vec::new(),
        }
    }

    /// Replaces mode and locale at once.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Renders messages through `translator` instead of the built-in catalog.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_translator(self, translator: impl Translate + 'static) -> Self {
        self.with_shared_translator(Arc::new(translator))
    }

    /// Like [`with_translator`](Self::with_translator), for a translator
    /// already behind an `Arc`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_shared_translator(mut self, translator: Arc<dyn Translate>) -> Self {
        self.translator = translator;
        self
    }

    /// Sets the message locale.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.config.locale = locale.into();
        self
    }

    /// Sets the reporting mode.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Binds a field whose chain is given in `"required|int|max:150"` syntax.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRuleSpec`] if the chain does not parse.
    pub fn field(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
        chain: &str,
    ) -> Result<&mut Self> {
        let binding = FieldBinding::parse(key, value, chain)?;
        Ok(self.bind(binding))
    }

    /// Binds a prepared field.
    pub fn bind(&mut self, binding: FieldBinding) -> &mut Self {
        self.fields.push(binding);
        self
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Bound fields, in binding order.
    #[must_use]
    pub fn fields(&self) -> &[FieldBinding] {
        &self.fields
    }

    /// Renders `key` with `args` in the active locale.
    #[must_use]
    pub fn trans(&self, key: &str, args: &[String]) -> String {
        self.translator.translate(&self.config.locale, key, args)
    }

    /// Runs one binding's chain.
    ///
    /// Returns the binding's first failure, localized, or `None` if the
    /// chain passed.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownRule`] if any rule of the chain is not registered.
    /// Nothing runs in that case.
    pub fn check(&self, binding: &FieldBinding) -> Result<Option<ValidationError>> {
        let resolved = self.resolve(binding)?;
        Ok(self.run(&resolved))
    }

    /// Runs every binding and collects the failures, keyed by field.
    ///
    /// Ignores [`Mode`]: every field is evaluated and reported.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownRule`] if any chain names an unregistered rule.
    pub fn report(&self) -> Result<ValidationErrors> {
        let plans = self.resolve_all()?;
        Ok(plans.iter().filter_map(|plan| self.run(plan)).collect())
    }

    /// Validates every binding according to the configured [`Mode`].
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`] with the first failing field (fail-fast)
    /// - [`Error::Fields`] with every failing field (accumulate)
    /// - [`Error::UnknownRule`] if any chain names an unregistered rule
    pub fn validate(&self) -> Result<()> {
        let plans = self.resolve_all()?;
        match self.config.mode {
            Mode::FailFast => match plans.iter().find_map(|plan| self.run(plan)) {
                Some(error) => Err(Error::Validation(error)),
                None => Ok(()),
            },
            Mode::Accumulate => {
                let errors: ValidationErrors =
                    plans.iter().filter_map(|plan| self.run(plan)).collect();
                errors.into_result(()).map_err(Error::Fields)
            }
        }
    }

    fn resolve_all(&self) -> Result<Vec<Resolved<'_>>> {
        self.fields.iter().map(|binding| self.resolve(binding)).collect()
    }

    fn resolve<'b>(&self, binding: &'b FieldBinding) -> Result<Resolved<'b>> {
        let chain = binding
            .rules
            .iter()
            .map(|spec| {
                self.registry
                    .lookup(&spec.name)
                    .inspect_err(|_| {
                        tracing::error!(field = %binding.key, rule = %spec.name, "unknown rule in chain");
                    })
                    .map(|rule| (spec, rule))
            })
            .collect::<Result<Vec<_>>>()?;

        let expect = binding
            .expect
            .or_else(|| chain.iter().find_map(|(_, rule)| rule.declares()))
            .unwrap_or_default();

        Ok(Resolved {
            binding,
            expect,
            chain,
        })
    }

    fn run(&self, plan: &Resolved<'_>) -> Option<ValidationError> {
        let binding = plan.binding;
        let ctx = RuleContext::new(self.translator.as_ref(), &self.config.locale);
        let mut first: Option<ValidationError> = None;

        for (spec, rule) in &plan.chain {
            let mut val =
                Val::new(&binding.key, &binding.value, plan.expect).with_param(&spec.param);
            if let Some(label) = &binding.label {
                val = val.with_tran_key(label);
            }

            let (pass, next, error) = rule.verify(&ctx, &val).into_parts();
            tracing::trace!(field = %binding.key, rule = %spec.name, pass, next, "rule verdict");

            if first.is_none() {
                first = error.map(|e| e.with_rule(spec.name.as_str()));
            }
            if !next {
                break;
            }
        }

        let mut error = first?;
        error.localize(self.translator.as_ref(), &self.config.locale);
        tracing::debug!(
            field = %binding.key,
            rule = %error.rule,
            key = %error.key,
            "field failed validation"
        );
        Some(error)
    }
}

impl std::fmt::Debug for Validator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("registry", self.registry)
            .field("config", &self.config)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TESTS
// ============================================================================
