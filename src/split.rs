//! Split a signal's samples into the typed columns of an ADX table.
//!
//! Each sample kind has one lossless home:
//!
//! | Sample kind                 | Column(s)            |
//! |-----------------------------|----------------------|
//! | record                      | `string` (pprinted)  |
//! | object / text               | `string`             |
//! | `f32`, `f64`                | `float`              |
//! | `u64`                       | `decimal`            |
//! | other integers              | `float` and `integer`|
//!
//! Floats never go to `integer` as that would drop the fraction, and `u64`
//! never goes to `float` or `integer` as neither holds its full range. The
//! narrower integers are duplicated into `float` so that numeric analysis
//! can treat them like any other measurement; `i64` values beyond 2^53 lose
//! precision there, the `integer` column stays exact.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use crate::signal::{SampleKind, Samples, Signal};

/// The four output columns for one signal.
///
/// All columns have one entry per timestamp. Columns not fed by the
/// sample kind keep their fill value: NaN, 0, 0 and `""`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypedSamples {
    /// NaN entries travel as `null` in serialized form
    #[cfg_attr(feature = "serde", serde(with = "nan_as_null"))]
    pub float: Vec<f64>,
    pub integer: Vec<i64>,
    pub decimal: Vec<u64>,
    pub string: Vec<String>,
    /// The sample kind that decided which columns were filled
    pub kind: SampleKind,
}

impl TypedSamples {
    /// Columns of length `len` holding only fill values.
    pub fn empty(len: usize, kind: SampleKind) -> Self {
        Self {
            float: vec![f64::NAN; len],
            integer: vec![0; len],
            decimal: vec![0; len],
            string: vec![String::new(); len],
            kind,
        }
    }

    /// Number of rows (identical for every column).
    pub fn len(&self) -> usize {
        self.float.len()
    }

    pub fn is_empty(&self) -> bool {
        self.float.is_empty()
    }

    /// Columns in export order: float, integer, decimal, string.
    pub fn into_tuple(self) -> (Vec<f64>, Vec<i64>, Vec<u64>, Vec<String>) {
        (self.float, self.integer, self.decimal, self.string)
    }
}

#[cfg(feature = "serde")]
mod nan_as_null {
    use alloc::vec::Vec;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(column: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(column.iter().map(|v| (!v.is_nan()).then_some(*v)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
        let column = Vec::<Option<f64>>::deserialize(deserializer)?;
        Ok(column.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
    }
}

/// Copy `src` over the head of `dst`, converting each element.
fn fill<T: Copy, U>(dst: &mut [U], src: &[T], convert: impl Fn(T) -> U) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d = convert(*s);
    }
}

fn fill_integer<T: Copy + Into<i64>>(out: &mut TypedSamples, src: &[T]) {
    fill(&mut out.integer, src, |v| v.into());
    fill(&mut out.float, src, |v| {
        let wide: i64 = v.into();
        wide as f64
    });
}

fn unrecognized(signal: &Signal, element: &str) {
    log::warn!(
        "no column for {element} samples of {}, exporting fill values",
        signal.name().unwrap_or("unnamed signal")
    );
}

/// Distribute the samples of `signal` over the typed columns.
///
/// Never fails. Sample kinds without a column ([`SampleKind::Unrecognized`])
/// produce fill values only; `kind` on the result tells the caller so.
///
/// ```
/// use mdf42adx::{Samples, Signal, split_by_type};
///
/// let signal = Signal::new(vec![0.0, 0.1, 0.2], Samples::Int32(vec![1, -2, 3]))?;
/// let columns = split_by_type(&signal);
/// assert_eq!(columns.integer, [1, -2, 3]);
/// assert_eq!(columns.float, [1.0, -2.0, 3.0]);
/// assert_eq!(columns.decimal, [0, 0, 0]);
/// # Ok::<(), mdf42adx::Error>(())
/// ```
pub fn split_by_type(signal: &Signal) -> TypedSamples {
    let samples = signal.samples();
    let kind = samples.kind();
    let mut out = TypedSamples::empty(signal.timestamps().len(), kind);

    log::trace!(
        "splitting {} samples of kind {kind:?}",
        signal.timestamps().len()
    );

    match samples {
        Samples::Record(records) => {
            for (d, rec) in out.string.iter_mut().zip(records) {
                *d = rec.pprint();
            }
        }
        Samples::Object(values) => {
            for (d, v) in out.string.iter_mut().zip(values) {
                *d = v.to_string();
            }
        }
        Samples::Float32(v) => fill(&mut out.float, v, f64::from),
        Samples::Float64(v) => fill(&mut out.float, v, |x| x),
        Samples::UInt64(v) => fill(&mut out.decimal, v, |x| x),
        Samples::Int8(v) => fill_integer(&mut out, v),
        Samples::Int16(v) => fill_integer(&mut out, v),
        Samples::Int32(v) => fill_integer(&mut out, v),
        Samples::Int64(v) => fill_integer(&mut out, v),
        Samples::UInt8(v) => fill_integer(&mut out, v),
        Samples::UInt16(v) => fill_integer(&mut out, v),
        Samples::UInt32(v) => fill_integer(&mut out, v),
        Samples::Bool(_) => unrecognized(signal, "bool"),
        Samples::Bytes(_) => unrecognized(signal, "byte array"),
    }

    out
}
