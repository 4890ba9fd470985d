//! Width-tagged integers
//!
//! Field values reach the engine either as transport strings (`"42"`) or as
//! native integers decoded from a structured payload. [`IntValue`] folds all
//! eight integer representations into one closed type so that rules compare
//! numbers with a single width-aware function instead of branching per type.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

// ============================================================================
// INT VALUE
// ============================================================================

/// An integer together with the width and signedness it arrived in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum IntValue {
    /// `i8`
    I8(i8),
    /// `i16`
    I16(i16),
    /// `i32`
    I32(i32),
    /// `i64`
    I64(i64),
    /// `u8`
    U8(u8),
    /// `u16`
    U16(u16),
    /// `u32`
    U32(u32),
    /// `u64`
    U64(u64),
}

/// Compares `$v` against a full-precision bound in the width `$ty`.
macro_rules! cmp_in_width {
    ($v:expr, $bound:expr, $ty:ty) => {
        match <$ty>::try_from($bound) {
            Ok(bound) => $v.cmp(&bound),
            // Below MIN or above MAX: every value of the width sits on one side.
            Err(_) if $bound < 0 => Ordering::Greater,
            Err(_) => Ordering::Less,
        }
    };
}

impl IntValue {
    /// Parses an integer literal the way transport strings are read:
    /// 32-bit first, then 64-bit.
    ///
    /// Blank strings are not integers. See [`parse_int_literal`] for the
    /// accepted syntax.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck_validator::foundation::IntValue;
    ///
    /// assert_eq!(IntValue::parse("42"), Some(IntValue::I32(42)));
    /// assert_eq!(IntValue::parse("5000000000"), Some(IntValue::I64(5_000_000_000)));
    /// assert_eq!(IntValue::parse("  "), None);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let n = parse_int_literal(input)?;
        if let Ok(v) = i32::try_from(n) {
            Some(Self::I32(v))
        } else {
            i64::try_from(n).ok().map(Self::I64)
        }
    }

    /// Compares this value against `bound` inside this value's own width.
    ///
    /// A bound that fits the width is narrowed to it; the field is never
    /// promoted. A bound outside the width's range decides the ordering on
    /// its own: `300` is above every `i8` and `-1` is below every `u8`.
    #[must_use]
    pub fn cmp_bound(self, bound: i128) -> Ordering {
        match self {
            Self::I8(v) => cmp_in_width!(v, bound, i8),
            Self::I16(v) => cmp_in_width!(v, bound, i16),
            Self::I32(v) => cmp_in_width!(v, bound, i32),
            Self::I64(v) => cmp_in_width!(v, bound, i64),
            Self::U8(v) => cmp_in_width!(v, bound, u8),
            Self::U16(v) => cmp_in_width!(v, bound, u16),
            Self::U32(v) => cmp_in_width!(v, bound, u32),
            Self::U64(v) => cmp_in_width!(v, bound, u64),
        }
    }

    /// Widens the value without loss.
    #[must_use]
    pub fn to_i128(self) -> i128 {
        match self {
            Self::I8(v) => v.into(),
            Self::I16(v) => v.into(),
            Self::I32(v) => v.into(),
            Self::I64(v) => v.into(),
            Self::U8(v) => v.into(),
            Self::U16(v) => v.into(),
            Self::U32(v) => v.into(),
            Self::U64(v) => v.into(),
        }
    }

    /// Rust name of the width this value arrived in.
    #[must_use]
    pub fn type_name(self) -> &'static str {
        match self {
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::U8(_) => "u8",
            Self::U16(_) => "u16",
            Self::U32(_) => "u32",
            Self::U64(_) => "u64",
        }
    }
}

impl fmt::Display for IntValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_i128())
    }
}

macro_rules! impl_from_native {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for IntValue {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )+
    };
}

impl_from_native! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
}

// Pointer-sized integers are at most 64 bits on every supported target.
impl From<isize> for IntValue {
    fn from(v: isize) -> Self {
        Self::I64(v as i64)
    }
}

impl From<usize> for IntValue {
    fn from(v: usize) -> Self {
        Self::U64(v as u64)
    }
}

// ============================================================================
// LITERAL PARSING
// ============================================================================

/// Parses an integer literal with automatic base detection.
///
/// Accepts an optional `+`/`-` sign followed by `0x`/`0X` (hex), `0o`/`0O`
/// (octal), `0b`/`0B` (binary), a bare leading `0` (octal) or plain decimal
/// digits. Whitespace is rejected. Magnitudes beyond `u64::MAX` yield
/// `None`, since no supported width could hold them.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::foundation::numeric::parse_int_literal;
///
/// assert_eq!(parse_int_literal("-0x10"), Some(-16));
/// assert_eq!(parse_int_literal("017"), Some(15));
/// assert_eq!(parse_int_literal("1e3"), None);
/// ```
#[must_use]
pub fn parse_int_literal(input: &str) -> Option<i128> {
    let (negative, body) = match input.as_bytes().first()? {
        b'-' => (true, &input[1..]),
        b'+' => (false, &input[1..]),
        _ => (false, input),
    };

    let (radix, digits) = if let Some(rest) = strip_radix(body, 'x') {
        (16, rest)
    } else if let Some(rest) = strip_radix(body, 'o') {
        (8, rest)
    } else if let Some(rest) = strip_radix(body, 'b') {
        (2, rest)
    } else if body.len() > 1 && body.starts_with('0') {
        (8, &body[1..])
    } else {
        (10, body)
    };

    // from_str_radix tolerates its own leading sign; a second one is not a literal.
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }

    let magnitude = u64::from_str_radix(digits, radix).ok()?;
    let magnitude = i128::from(magnitude);
    Some(if negative { -magnitude } else { magnitude })
}

fn strip_radix(body: &str, marker: char) -> Option<&str> {
    let mut chars = body.chars();
    if chars.next() != Some('0') {
        return None;
    }
    match chars.next() {
        Some(c) if c.eq_ignore_ascii_case(&marker) => Some(&body[2..]),
        _ => None,
    }
}

// ============================================================================
// TESTS
// ============================================================================
