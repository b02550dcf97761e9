//! Primitive values exchanged with the I/O collaborators, and the byte-level
//! classification shared by input parsing and string operations.

use std::fmt;

/// A value of one of the primitive kinds a compiled program can print.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Primitive<'a> {
    /// A signed integer.
    Int(i64),
    /// A borrowed string.
    Str(&'a str),
    /// A boolean, rendered as `true` / `false`.
    Bool(bool),
}

impl fmt::Display for Primitive<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Str(s) => f.write_str(s),
            Self::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
        }
    }
}

impl From<i64> for Primitive<'_> {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<bool> for Primitive<'_> {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl<'a> From<&'a str> for Primitive<'a> {
    fn from(v: &'a str) -> Self {
        Self::Str(v)
    }
}

/// Whitespace as classified by C `isspace` in the "C" locale.
///
/// Unlike [`u8::is_ascii_whitespace`], this includes vertical tab (`0x0B`).
pub fn is_space_byte(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Parse the leading integer of `s` the way C `atoi` does.
///
/// Skips leading whitespace (see [`is_space_byte`]), accepts one optional
/// sign, then consumes decimal digits until the first non-digit. Returns `0`
/// when no digits are present. Values outside the `i64` range saturate.
pub fn parse_leading_int(s: &str) -> i64 {
    let trimmed = s.trim_start_matches(|c: char| c.is_ascii() && is_space_byte(c as u8));
    let mut bytes = trimmed.bytes().peekable();
    let negative = match bytes.peek() {
        Some(b'-') => {
            bytes.next();
            true
        }
        Some(b'+') => {
            bytes.next();
            false
        }
        _ => false,
    };

    let mut value: i64 = 0;
    for b in bytes {
        if !b.is_ascii_digit() {
            break;
        }
        let digit = i64::from(b - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }
    value
}
