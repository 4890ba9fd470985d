//! Rule chain specifications
//!
//! A chain is written as rule names separated by `|`, each optionally
//! followed by `:` and a parameter:
//!
//! ```text
//! required|int|max:150
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::{Error, Result};

/// One rule reference: a registered name plus its parameter.
///
/// Only the first `:` separates the name from the parameter, so parameters
/// may contain colons. Both sides are trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleSpec {
    /// Registered rule name.
    pub name: String,
    /// Parameter handed to the rule; empty when absent.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub param: String,
}

impl RuleSpec {
    /// A reference to `name` without a parameter.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param: String::new(),
        }
    }

    /// Sets the parameter handed to the rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = param.into();
        self
    }
}

impl FromStr for RuleSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (name, param) = s.split_once(':').unwrap_or((s, ""));
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidRuleSpec {
                spec: s.to_owned(),
                reason: "rule name is empty",
            });
        }
        Ok(Self::new(name).with_param(param.trim()))
    }
}

impl fmt::Display for RuleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.param.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}:{}", self.name, self.param)
        }
    }
}

impl From<&str> for RuleSpec {
    /// Treats the whole string as a rule name.
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Parses a `|`-separated chain.
///
/// An empty string is an empty chain. Empty segments (`"required||max:3"`)
/// are rejected.
///
/// # Errors
///
/// [`Error::InvalidRuleSpec`] for an empty segment or an empty rule name.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::chain::{parse_chain, RuleSpec};
///
/// let chain = parse_chain("required|int|max:150").unwrap();
/// assert_eq!(chain[2], RuleSpec::new("max").with_param("150"));
/// ```
pub fn parse_chain(input: &str) -> Result<Vec<RuleSpec>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    input
        .split('|')
        .map(|segment| {
            if segment.trim().is_empty() {
                Err(Error::InvalidRuleSpec {
                    spec: input.to_owned(),
                    reason: "empty segment",
                })
            } else {
                segment.parse()
            }
        })
        .collect()
}
