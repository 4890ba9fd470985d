//! Per-invocation value descriptor

use super::numeric::IntValue;
use super::value::{Expect, Kind, Value};

/// Everything one rule invocation sees about a field.
///
/// Built by the orchestrator for every rule in a chain. `real` is derived
/// from `value` once, at construction, so rules dispatch on it instead of
/// re-inspecting the value.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::foundation::{Expect, Kind, Val, Value};
///
/// let value = Value::from("42");
/// let val = Val::new("age", &value, Expect::Int).with_param("150");
///
/// assert_eq!(val.real, Kind::String);
/// assert_eq!(val.tran_key(), "age");
/// assert!(val.has_param());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Val<'a> {
    /// Field identifier.
    pub key: &'a str,
    /// Raw value.
    pub value: &'a Value,
    /// Rule parameter; empty means unconstrained.
    pub param: &'a str,
    /// Declared semantic type.
    pub expect: Expect,
    /// Detected runtime class of `value`.
    pub real: Kind,
    tran_key: Option<&'a str>,
}

impl<'a> Val<'a> {
    /// Describes `value` for field `key`, declared as `expect`.
    #[must_use]
    pub fn new(key: &'a str, value: &'a Value, expect: Expect) -> Self {
        Self {
            key,
            value,
            param: "",
            expect,
            real: value.kind(),
            tran_key: None,
        }
    }

    /// Sets the rule parameter.
    #[must_use]
    pub fn with_param(mut self, param: &'a str) -> Self {
        self.param = param;
        self
    }

    /// Sets the label used in messages instead of the key.
    #[must_use]
    pub fn with_tran_key(mut self, tran_key: &'a str) -> Self {
        self.tran_key = Some(tran_key);
        self
    }

    /// Label for messages: the translation key if set, the field key otherwise.
    #[must_use]
    pub fn tran_key(&self) -> &'a str {
        self.tran_key.unwrap_or(self.key)
    }

    /// Whether the rule was given a parameter.
    #[must_use]
    pub fn has_param(&self) -> bool {
        !self.param.is_empty()
    }

    /// The value as an integer.
    ///
    /// Native integers are taken as they are; strings are parsed 32-bit
    /// first, then 64-bit. Everything else, blank strings included, is not
    /// an integer.
    #[must_use]
    pub fn int(&self) -> Option<IntValue> {
        match self.value {
            Value::Int(v) => Some(*v),
            Value::Str(s) => IntValue::parse(s),
            _ => None,
        }
    }
}
