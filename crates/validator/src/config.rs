//! Validator configuration

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How failures across fields are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Return the first failing field's error.
    #[default]
    FailFast,
    /// Return every failing field's error.
    Accumulate,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail-fast" | "fail_fast" | "failfast" => Ok(Self::FailFast),
            "accumulate" => Ok(Self::Accumulate),
            other => Err(format!("unknown validation mode `{other}`")),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FailFast => "fail-fast",
            Self::Accumulate => "accumulate",
        })
    }
}

/// Per-validator settings.
///
/// ```
/// use fieldcheck_validator::config::{Mode, ValidatorConfig};
///
/// let config: ValidatorConfig = serde_json::from_str(r#"{"mode":"accumulate"}"#).unwrap();
/// assert_eq!(config.mode, Mode::Accumulate);
/// assert_eq!(config.locale, "en");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Failure reporting mode.
    pub mode: Mode,
    /// Locale messages are rendered in.
    pub locale: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            mode: Mode::FailFast,
            locale: "en".to_string(),
        }
    }
}

impl ValidatorConfig {
    /// Create configuration from environment variables
    ///
    /// Reads `FIELDCHECK_MODE` and `FIELDCHECK_LOCALE`. Unset or unparsable
    /// variables keep their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a configuration from `lookup`, which resolves variable names
    /// the way [`std::env::var`] does.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(mode) = lookup("FIELDCHECK_MODE") {
            match mode.parse() {
                Ok(mode) => config.mode = mode,
                Err(e) => tracing::warn!(error = %e, "ignoring FIELDCHECK_MODE"),
            }
        }

        if let Some(locale) = lookup("FIELDCHECK_LOCALE") {
            let locale = locale.trim();
            if !locale.is_empty() {
                config.locale = locale.to_string();
            }
        }

        config
    }

    /// Sets the reporting mode.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the message locale.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[rstest]
    #[case("fail-fast", Mode::FailFast)]
    #[case("FAIL_FAST", Mode::FailFast)]
    #[case(" accumulate ", Mode::Accumulate)]
    fn test_mode_from_str(#[case] input: &str, #[case] expected: Mode) {
        assert_eq!(input.parse::<Mode>(), Ok(expected));
    }

    #[test]
    fn test_mode_rejects_unknown() {
        assert!("sometimes".parse::<Mode>().is_err());
    }

    #[test]
    fn test_defaults() {
        let config = ValidatorConfig::default();
        assert_eq!(config.mode, Mode::FailFast);
        assert_eq!(config.locale, "en");
    }

    #[test]
    fn test_serde_roundtrip_uses_kebab_case() {
        let config = ValidatorConfig::default()
            .with_mode(Mode::Accumulate)
            .with_locale("zh-CN");
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"mode":"accumulate","locale":"zh-CN"}"#);
        let back: ValidatorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_missing_fields_default() {
        let config: ValidatorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ValidatorConfig::default());
    }

    #[test]
    fn test_empty_env_is_default() {
        assert_eq!(ValidatorConfig::from_lookup(lookup(&[])), ValidatorConfig::default());
    }

    #[test]
    fn test_env_mode_and_locale() {
        let config = ValidatorConfig::from_lookup(lookup(&[
            ("FIELDCHECK_MODE", "accumulate"),
            ("FIELDCHECK_LOCALE", " zh-CN "),
        ]));
        assert_eq!(config.mode, Mode::Accumulate);
        assert_eq!(config.locale, "zh-CN");
    }

    #[test]
    fn test_env_bad_mode_keeps_default() {
        let config = ValidatorConfig::from_lookup(lookup(&[("FIELDCHECK_MODE", "sometimes")]));
        assert_eq!(config.mode, Mode::FailFast);
    }

    #[test]
    fn test_env_blank_locale_keeps_default() {
        let config = ValidatorConfig::from_lookup(lookup(&[("FIELDCHECK_LOCALE", "   ")]));
        assert_eq!(config.locale, "en");
    }
}
