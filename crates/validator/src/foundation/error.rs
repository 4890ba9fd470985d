//! Error types for validation failures
//!
//! Rules never produce message text. They return a [`ValidationError`]
//! carrying a stable translation key and positional arguments, and the
//! orchestrator renders the message through the active
//! [`Translate`](crate::translate::Translate) backend. This keeps rule logic
//! independent of any locale.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use smallvec::SmallVec;

use crate::translate::Translate;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single field failed one rule of its chain.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("age", "max.int")
///     .with_rule("max")
///     .with_arg("age")
///     .with_arg("150");
///
/// assert_eq!(error.key, "max.int");
/// assert_eq!(error.args.as_slice(), ["age", "150"]);
/// // No backend has rendered it yet.
/// assert_eq!(error.message(), "max.int");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Field identifier the chain was bound to.
    pub field: String,

    /// Name the failing rule was resolved under (`"required"`, `"max"`, ...).
    ///
    /// Filled in by the orchestrator, since one rule object may be
    /// registered under several names.
    pub rule: String,

    /// Stable translation key (`"required"`, `"int"`, `"max.int"`, ...).
    pub key: Cow<'static, str>,

    /// Positional message arguments: the field label, then the rule
    /// parameter when the rule has one.
    #[serde(skip_serializing_if = "SmallVec::is_empty")]
    pub args: SmallVec<[String; 2]>,

    /// Localized text, once rendered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationError {
    /// Creates an unrendered error for `field` under translation `key`.
    pub fn new(field: impl Into<String>, key: impl Into<Cow<'static, str>>) -> Self {
        Self {
            field: field.into(),
            rule: String::new(),
            key: key.into(),
            args: SmallVec::new(),
            message: None,
        }
    }

    /// Sets the rule name.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = rule.into();
        self
    }

    /// Appends a positional message argument.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Sets an already-rendered message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Renders the message for `locale` through `translator`.
    pub fn localize(&mut self, translator: &dyn Translate, locale: &str) {
        self.message = Some(translator.translate(locale, &self.key, &self.args));
    }

    /// The rendered message, or the bare key if none was rendered.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or(self.key.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rule.is_empty() {
            write!(f, "[{}] {}", self.field, self.message())
        } else {
            write!(f, "[{}] {}: {}", self.field, self.rule, self.message())
        }
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// Per-field errors in the order their fields were bound.
///
/// Holds at most one error per field: only the first failing rule of a
/// chain is surfaced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: IndexMap<String, ValidationError>,
}

impl ValidationErrors {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the error for its field. A field that already has an error
    /// keeps it.
    pub fn insert(&mut self, error: ValidationError) {
        self.errors.entry(error.field.clone()).or_insert(error);
    }

    /// The error recorded for `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&ValidationError> {
        self.errors.get(field)
    }

    /// The error of the earliest bound failing field.
    #[must_use]
    pub fn first(&self) -> Option<&ValidationError> {
        self.errors.values().next()
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates errors in binding order.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.values()
    }

    /// Names of the failing fields, in binding order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    /// `Ok(value)` if empty, otherwise `Err(self)`.
    pub fn into_result<T>(self, ok_value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        let mut errors = Self::new();
        for error in iter {
            errors.insert(error);
        }
        errors
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = indexmap::map::IntoValues<String, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_values()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed for {} field(s):", self.errors.len())?;
        for (i, error) in self.errors.values().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// ENGINE ERROR
// ============================================================================

/// Everything a validation call can return besides success.
///
/// `Validation` and `Fields` are user-input problems. `UnknownRule` and
/// `InvalidRuleSpec` are configuration mistakes in the chain itself and are
/// never downgraded to a pass.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The first failing field (fail-fast mode).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Every failing field (accumulate mode).
    #[error("{0}")]
    Fields(ValidationErrors),

    /// A chain referenced a rule name nothing was registered under.
    #[error("unknown validation rule `{name}`")]
    UnknownRule {
        /// The unresolved name.
        name: String,
    },

    /// A chain specification string could not be parsed.
    #[error("invalid rule spec `{spec}`: {reason}")]
    InvalidRuleSpec {
        /// The offending input.
        spec: String,
        /// What was wrong with it.
        reason: &'static str,
    },
}

impl Error {
    /// Returns true for user-input failures, false for configuration errors.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Fields(_))
    }

    /// The field-level errors carried by this error, in binding order.
    #[must_use]
    pub fn validation_errors(&self) -> Vec<&ValidationError> {
        match self {
            Self::Validation(e) => vec![e],
            Self::Fields(errors) => errors.iter().collect(),
            Self::UnknownRule { .. } | Self::InvalidRuleSpec { .. } => Vec::new(),
        }
    }
}

/// Result alias for engine operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Echo;

    impl Translate for Echo {
        fn translate(&self, locale: &str, key: &str, args: &[String]) -> String {
            format!("{locale}:{key}:{}", args.join(","))
        }
    }

    #[test]
    fn test_builder() {
        let error = ValidationError::new("age", "max.int")
            .with_rule("max")
            .with_arg("age")
            .with_arg("150");

        assert_eq!(error.field, "age");
        assert_eq!(error.rule, "max");
        assert_eq!(error.key, "max.int");
        assert_eq!(error.args.to_vec(), vec!["age", "150"]);
        assert_eq!(error.message, None);
    }

    #[test]
    fn test_static_key_is_borrowed() {
        let error = ValidationError::new("age", "required");
        assert!(matches!(error.key, Cow::Borrowed(_)));
    }

    #[test]
    fn test_localize() {
        let mut error = ValidationError::new("age", "required").with_arg("Age");
        error.localize(&Echo, "en");
        assert_eq!(error.message(), "en:required:Age");
    }

    #[test]
    fn test_display() {
        let error = ValidationError::new("age", "required")
            .with_rule("required")
            .with_message("age is required");
        assert_eq!(error.to_string(), "[age] required: age is required");

        let bare = ValidationError::new("age", "int");
        assert_eq!(bare.to_string(), "[age] int");
    }

    #[test]
    fn test_collection_keeps_binding_order() {
        let errors: ValidationErrors = [
            ValidationError::new("name", "required"),
            ValidationError::new("age", "int"),
        ]
        .into_iter()
        .collect();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["name", "age"]);
        assert_eq!(errors.first().map(|e| e.field.as_str()), Some("name"));
        assert_eq!(errors.get("age").map(|e| e.key.as_ref()), Some("int"));
    }

    #[test]
    fn test_collection_keeps_first_error_per_field() {
        let mut errors = ValidationErrors::new();
        errors.insert(ValidationError::new("age", "required"));
        errors.insert(ValidationError::new("age", "max.int"));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("age").map(|e| e.key.as_ref()), Some("required"));
    }

    #[test]
    fn test_serialize_shape() {
        let error = ValidationError::new("age", "required")
            .with_rule("required")
            .with_arg("age")
            .with_message("age is required");
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "field": "age",
                "rule": "required",
                "key": "required",
                "args": ["age"],
                "message": "age is required",
            })
        );
    }

    #[test]
    fn test_error_classification() {
        let e = Error::from(ValidationError::new("age", "int"));
        assert!(e.is_validation());
        assert_eq!(e.validation_errors().len(), 1);

        let e = Error::UnknownRule { name: "nope".into() };
        assert!(!e.is_validation());
        assert!(e.validation_errors().is_empty());
        assert_eq!(e.to_string(), "unknown validation rule `nope`");
    }
}
