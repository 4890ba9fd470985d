//! Field values and their type tags
//!
//! [`Value`] is what the surrounding request layer hands to the engine: a
//! string lifted from a query or form, or a natively typed value decoded from
//! a structured payload. [`Kind`] is the detected runtime class of a value
//! and [`Expect`] the semantic type the field is declared to carry.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::numeric::IntValue;

// ============================================================================
// VALUE
// ============================================================================

/// A raw field value.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// No value was supplied.
    #[default]
    Null,
    /// Transport-encoded text.
    Str(String),
    /// A native integer of any supported width.
    Int(IntValue),
    /// A native floating-point number.
    Float(f64),
    /// A native boolean.
    Bool(bool),
    /// A point in time.
    Time(DateTime<Utc>),
}

impl Value {
    /// Detects the runtime class of this value.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Self::Null => Kind::Absent,
            Self::Str(_) => Kind::String,
            Self::Int(_) => Kind::Int,
            Self::Float(_) => Kind::Float,
            Self::Bool(_) => Kind::Bool,
            Self::Time(_) => Kind::Time,
        }
    }

    /// Returns the text if this is a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer if this is a native integer value.
    ///
    /// Strings are not parsed here; rules that accept transport strings go
    /// through [`IntValue::parse`] explicitly.
    #[must_use]
    pub fn as_int(&self) -> Option<IntValue> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Whether the value counts as "not supplied".
    ///
    /// `Null`, empty or whitespace-only strings and the zero time are absent.
    /// A numeric zero and `false` are real values.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Str(s) => s.trim().is_empty(),
            Self::Time(t) => *t == DateTime::<Utc>::default(),
            Self::Int(_) | Self::Float(_) | Self::Bool(_) => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Str(s) => f.write_str(s),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Time(t) => write!(f, "{}", t.to_rfc3339()),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Self::Str(s.clone())
    }
}

impl From<IntValue> for Value {
    fn from(v: IntValue) -> Self {
        Self::Int(v)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::Int(IntValue::from(v))
                }
            }
        )+
    };
}

impl_from_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(t: DateTime<Utc>) -> Self {
        Self::Time(t)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// Decoded payload values.
///
/// Integral JSON numbers become `I64` (or `U64` above `i64::MAX`), the rest
/// `Float`. Arrays and objects carry no scalar meaning for field rules and
/// are kept as their JSON text.
impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match v {
            Json::Null => Self::Null,
            Json::Bool(b) => Self::Bool(b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(IntValue::I64(i))
                } else if let Some(u) = n.as_u64() {
                    Self::Int(IntValue::U64(u))
                } else {
                    n.as_f64().map_or(Self::Null, Self::Float)
                }
            }
            Json::String(s) => Self::Str(s),
            other @ (Json::Array(_) | Json::Object(_)) => Self::Str(other.to_string()),
        }
    }
}

// ============================================================================
// KIND
// ============================================================================

/// Runtime class of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// `Value::Null`
    Absent,
    /// `Value::Str`
    String,
    /// `Value::Int`
    Int,
    /// `Value::Float`
    Float,
    /// `Value::Bool`
    Bool,
    /// `Value::Time`
    Time,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Absent => "absent",
            Self::String => "string",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Time => "time",
        })
    }
}

// ============================================================================
// EXPECT
// ============================================================================

/// Semantic type a field is declared to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expect {
    /// An integer, as a native value or a parseable string.
    Int,
    /// Free text.
    #[default]
    String,
    /// An email address (text with length semantics).
    Email,
    /// A floating-point number.
    Float,
    /// A boolean flag.
    Bool,
    /// A timestamp.
    Time,
}

impl fmt::Display for Expect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Int => "int",
            Self::String => "string",
            Self::Email => "email",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Time => "time",
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_kind_detection() {
        assert_eq!(Value::Null.kind(), Kind::Absent);
        assert_eq!(Value::from("x").kind(), Kind::String);
        assert_eq!(Value::from(3_u8).kind(), Kind::Int);
        assert_eq!(Value::from(3.5).kind(), Kind::Float);
        assert_eq!(Value::from(true).kind(), Kind::Bool);
        assert_eq!(Value::from(Utc::now()).kind(), Kind::Time);
    }

    #[test]
    fn test_absence() {
        assert!(Value::Null.is_absent());
        assert!(Value::from("").is_absent());
        assert!(Value::from(" \t\n").is_absent());
        assert!(Value::from(DateTime::<Utc>::default()).is_absent());

        assert!(!Value::from("0").is_absent());
        assert!(!Value::from(0_i32).is_absent());
        assert!(!Value::from(0.0).is_absent());
        assert!(!Value::from(false).is_absent());
        let t = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).single();
        assert!(t.is_some_and(|t| !Value::from(t).is_absent()));
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("a")), Value::Str("a".into()));
    }

    #[test]
    fn test_json_conversion() {
        assert_eq!(Value::from(json!(null)), Value::Null);
        assert_eq!(Value::from(json!(5)), Value::Int(IntValue::I64(5)));
        assert_eq!(Value::from(json!(-5)), Value::Int(IntValue::I64(-5)));
        assert_eq!(
            Value::from(json!(u64::MAX)),
            Value::Int(IntValue::U64(u64::MAX))
        );
        assert_eq!(Value::from(json!(1.5)), Value::Float(1.5));
        assert_eq!(Value::from(json!("hi")), Value::Str("hi".into()));
        assert_eq!(Value::from(json!([1, 2])), Value::Str("[1,2]".into()));
    }

    #[test]
    fn test_expect_deserialize() {
        let expect: Expect = serde_json::from_str("\"email\"").unwrap();
        assert_eq!(expect, Expect::Email);
        assert_eq!(Expect::default(), Expect::String);
    }
}
