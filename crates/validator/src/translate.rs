//! Message localization
//!
//! Validation errors carry a stable key plus positional arguments. A
//! [`Translate`] backend turns them into text for a locale. [`Catalog`] is the
//! built-in backend: per-locale tables of `{0}`/`{1}` templates.
//!
//! Lookup order is the requested locale, its primary language subtag
//! (`en-US` → `en`), the catalog's default locale, and finally the bare key
//! followed by its arguments, so a missing template never hides an error.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

// ============================================================================
// TRANSLATE TRAIT
// ============================================================================

/// A swappable localization backend.
///
/// Every backend must at least handle the keys rules emit: `required`, `int`,
/// `max.int`, `max.string`, `min.int`, `min.string` and `email`, each with
/// positional arguments `{0}` = field label and `{1}` = rule parameter.
pub trait Translate: Send + Sync {
    /// Resolves `key` for `locale` and substitutes `args`.
    fn translate(&self, locale: &str, key: &str, args: &[String]) -> String;
}

// ============================================================================
// CATALOG
// ============================================================================

/// In-memory template tables keyed by locale.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::translate::{Catalog, Translate};
///
/// let mut catalog = Catalog::builtin();
/// catalog.insert("en", "required", "please fill in {0}");
///
/// let args = ["name".to_string()];
/// assert_eq!(catalog.translate("en", "required", &args), "please fill in name");
/// assert_eq!(catalog.translate("zh-CN", "required", &args), "name不能为空");
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    default_locale: String,
    tables: HashMap<String, HashMap<String, String>>,
}

const EN: &[(&str, &str)] = &[
    ("required", "{0} is required"),
    ("int", "{0} must be an integer"),
    ("max.int", "{0} must not be greater than {1}"),
    ("max.string", "{0} must not be longer than {1} characters"),
    ("min.int", "{0} must not be less than {1}"),
    ("min.string", "{0} must be at least {1} characters"),
    ("email", "{0} must be a valid email address"),
];

const ZH_CN: &[(&str, &str)] = &[
    ("required", "{0}不能为空"),
    ("int", "{0}必须是整数"),
    ("max.int", "{0}不能大于{1}"),
    ("max.string", "{0}长度不能超过{1}"),
    ("min.int", "{0}不能小于{1}"),
    ("min.string", "{0}长度不能少于{1}"),
    ("email", "{0}不是有效的邮箱地址"),
];

static BUILTIN: LazyLock<Arc<Catalog>> = LazyLock::new(|| Arc::new(Catalog::builtin()));

impl Catalog {
    /// Creates an empty catalog falling back to `default_locale`.
    pub fn new(default_locale: impl Into<String>) -> Self {
        Self {
            default_locale: normalize(&default_locale.into()),
            tables: HashMap::new(),
        }
    }

    /// A catalog with the built-in `en` (default) and `zh-CN` templates.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new("en");
        for (key, template) in EN {
            catalog.insert("en", *key, *template);
        }
        for (key, template) in ZH_CN {
            catalog.insert("zh-CN", *key, *template);
        }
        catalog
    }

    /// The process-wide built-in catalog.
    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    /// Adds or replaces the template for `key` in `locale`.
    pub fn insert(
        &mut self,
        locale: &str,
        key: impl Into<String>,
        template: impl Into<String>,
    ) -> &mut Self {
        self.tables
            .entry(normalize(locale))
            .or_default()
            .insert(key.into(), template.into());
        self
    }

    /// The locale used when the requested one lacks a key.
    #[must_use]
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Locales that have at least one template.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Resolves the raw template for `key`, applying the fallback order.
    #[must_use]
    pub fn template(&self, locale: &str, key: &str) -> Option<&str> {
        let locale = normalize(locale);
        let primary = locale.split('-').next().unwrap_or_default();

        [locale.as_str(), primary, self.default_locale.as_str()]
            .into_iter()
            .find_map(|loc| self.tables.get(loc)?.get(key))
            .map(String::as_str)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Translate for Catalog {
    fn translate(&self, locale: &str, key: &str, args: &[String]) -> String {
        match self.template(locale, key) {
            Some(template) => render(template, args),
            None if args.is_empty() => key.to_owned(),
            None => format!("{key}: {}", args.join(", ")),
        }
    }
}

/// Any closure with the right shape is a backend.
impl<F> Translate for F
where
    F: Fn(&str, &str, &[String]) -> String + Send + Sync,
{
    fn translate(&self, locale: &str, key: &str, args: &[String]) -> String {
        self(locale, key, args)
    }
}

fn normalize(locale: &str) -> String {
    locale.trim().replace('_', "-").to_ascii_lowercase()
}

/// Substitutes `{N}` placeholders with `args[N]`.
///
/// Placeholders without a matching argument, and braces that do not form a
/// placeholder, are copied through unchanged.
pub fn render(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let substituted = after.find('}').and_then(|close| {
            let index = after[..close].parse::<usize>().ok()?;
            let arg = args.get(index)?;
            Some((arg, close))
        });

        match substituted {
            Some((arg, close)) => {
                out.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[rstest]
    #[case("{0} is required", &["age"], "age is required")]
    #[case("{0} <= {1}", &["age", "150"], "age <= 150")]
    #[case("{1} then {0}", &["a", "b"], "b then a")]
    #[case("{0}{0}", &["x"], "xx")]
    #[case("missing {2}", &["a"], "missing {2}")]
    #[case("literal {braces}", &[], "literal {braces}")]
    #[case("unclosed {0", &["a"], "unclosed {0")]
    #[case("", &["a"], "")]
    fn test_render(#[case] template: &str, #[case] values: &[&str], #[case] expected: &str) {
        assert_eq!(render(template, &args(values)), expected);
    }

    #[test]
    fn test_builtin_keys_present_in_every_locale() {
        let catalog = Catalog::builtin();
        for key in ["required", "int", "max.int", "max.string", "min.int", "min.string", "email"] {
            for locale in ["en", "zh-CN"] {
                let found = catalog.tables.get(&normalize(locale)).and_then(|t| t.get(key));
                assert!(found.is_some(), "{locale} lacks {key}");
            }
        }
    }

    #[test]
    fn test_locale_fallback_order() {
        let mut catalog = Catalog::new("en");
        catalog.insert("en", "required", "en");
        catalog.insert("fr", "required", "fr");
        catalog.insert("fr-CA", "int", "fr-ca");

        assert_eq!(catalog.template("fr-CA", "int"), Some("fr-ca"));
        // Primary subtag.
        assert_eq!(catalog.template("fr-CA", "required"), Some("fr"));
        assert_eq!(catalog.template("FR_ca", "required"), Some("fr"));
        // Default locale.
        assert_eq!(catalog.template("de", "required"), Some("en"));
        assert_eq!(catalog.template("de", "email"), None);
    }

    #[test]
    fn test_translate_missing_key_keeps_arguments() {
        let catalog = Catalog::new("en");
        assert_eq!(catalog.translate("en", "custom", &args(&["age", "3"])), "custom: age, 3");
        assert_eq!(catalog.translate("en", "custom", &[]), "custom");
    }

    #[test]
    fn test_builtin_messages() {
        let catalog = Catalog::shared();
        assert_eq!(
            catalog.translate("en", "max.int", &args(&["age", "150"])),
            "age must not be greater than 150"
        );
        assert_eq!(
            catalog.translate("zh-cn", "max.string", &args(&["name", "3"])),
            "name长度不能超过3"
        );
    }

    #[test]
    fn test_closure_backend() {
        let upper = |_: &str, key: &str, _: &[String]| key.to_uppercase();
        assert_eq!(upper.translate("en", "int", &[]), "INT");
    }
}
