//! Dynamically typed sample elements.
//!
//! Most channels decode into homogeneous numeric arrays, but structure
//! channels and text channels carry elements whose type is only known at
//! runtime. Those elements are represented by [`Value`] and [`Record`].

use core::fmt::{self, Write};

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

/// A single decoded element of an object or record sample array.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Unsigned integer (up to 64 bits)
    UnsignedInteger(u64),
    /// Signed integer (up to 64 bits)
    SignedInteger(i64),
    /// Floating point value (32 or 64 bit)
    Float(f64),
    /// Text string
    String(String),
    /// Raw byte array
    ByteArray(Vec<u8>),
    /// Unknown or unsupported element
    Unknown,
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::SignedInteger(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::UnsignedInteger(v)
    }
}

/// Floats print like Python's `repr`: plain decimal with a fractional part
/// in `[1e-4, 1e16)`, exponent form with a signed two digit exponent
/// otherwise (`1e+16`, `2.5e-05`).
fn write_float(f: &mut impl Write, v: f64) -> fmt::Result {
    if v.is_nan() {
        return f.write_str("nan");
    }
    if v.is_infinite() {
        return f.write_str(if v > 0.0 { "inf" } else { "-inf" });
    }

    let magnitude = v.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let sci = format!("{v:e}");
        let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };
        return write!(f, "{mantissa}e{sign}{digits:0>2}");
    }

    let plain = format!("{v}");
    f.write_str(&plain)?;
    if !plain.contains('.') {
        f.write_str(".0")?;
    }
    Ok(())
}

fn write_bytes(f: &mut impl Write, bytes: &[u8]) -> fmt::Result {
    f.write_str("b'")?;
    for &b in bytes {
        match b {
            b'\\' => f.write_str("\\\\")?,
            b'\'' => f.write_str("\\'")?,
            b'\t' => f.write_str("\\t")?,
            b'\n' => f.write_str("\\n")?,
            b'\r' => f.write_str("\\r")?,
            0x20..=0x7e => f.write_char(b as char)?,
            _ => write!(f, "\\x{b:02x}")?,
        }
    }
    f.write_char('\'')
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::UnsignedInteger(v) => write!(f, "{v}"),
            Value::SignedInteger(v) => write!(f, "{v}"),
            Value::Float(v) => write_float(f, *v),
            Value::String(s) => f.write_str(s),
            Value::ByteArray(b) => write_bytes(f, b),
            Value::Unknown => f.write_str("None"),
        }
    }
}

/// One element of a structure channel: an ordered set of named fields.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, keeping declaration order.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn fields(&self) -> &[(String, Value)] {
        &self.fields
    }

    /// Render the record one field per line.
    ///
    /// Field names are right-aligned to the longest name:
    ///
    /// ```
    /// use mdf42adx::Record;
    ///
    /// let rec = Record::new().with_field("id", 7u64).with_field("speed", 1.5);
    /// assert_eq!(rec.pprint(), "   id: 7\nspeed: 1.5");
    /// ```
    pub fn pprint(&self) -> String {
        let width = self
            .fields
            .iter()
            .map(|(name, _)| name.chars().count())
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            // Writing into a String cannot fail.
            let _ = write!(out, "{name:>width$}: {value}");
        }
        out
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
