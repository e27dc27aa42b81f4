//! Decoded signals: timestamps plus a homogeneous sample array.

use alloc::string::String;
use alloc::vec::Vec;

use crate::{Error, Result, source::Source, types::Record, types::Value};

/// Sample array of a decoded signal, tagged by element type.
///
/// Every variant holds one element per timestamp.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Samples {
    /// Structure channel, one record per sample
    Record(Vec<Record>),
    /// Boxed elements of mixed or non-numeric type (text channels)
    Object(Vec<Value>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
    UInt64(Vec<u64>),
    Int8(Vec<i8>),
    Int16(Vec<i16>),
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    UInt8(Vec<u8>),
    UInt16(Vec<u16>),
    UInt32(Vec<u32>),
    /// Boolean flags
    Bool(Vec<bool>),
    /// Fixed-size byte arrays
    Bytes(Vec<Vec<u8>>),
}

/// Element categories that decide how samples are split into columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SampleKind {
    Record,
    Object,
    Float32,
    Float64,
    UInt64,
    /// Signed 8 to 64 bit and unsigned 8 to 32 bit integers
    OtherInteger,
    /// No column accepts these samples
    Unrecognized,
}

impl Samples {
    pub fn kind(&self) -> SampleKind {
        match self {
            Samples::Record(_) => SampleKind::Record,
            Samples::Object(_) => SampleKind::Object,
            Samples::Float32(_) => SampleKind::Float32,
            Samples::Float64(_) => SampleKind::Float64,
            Samples::UInt64(_) => SampleKind::UInt64,
            Samples::Int8(_)
            | Samples::Int16(_)
            | Samples::Int32(_)
            | Samples::Int64(_)
            | Samples::UInt8(_)
            | Samples::UInt16(_)
            | Samples::UInt32(_) => SampleKind::OtherInteger,
            Samples::Bool(_) | Samples::Bytes(_) => SampleKind::Unrecognized,
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        match self {
            Samples::Record(v) => v.len(),
            Samples::Object(v) => v.len(),
            Samples::Float32(v) => v.len(),
            Samples::Float64(v) => v.len(),
            Samples::UInt64(v) => v.len(),
            Samples::Int8(v) => v.len(),
            Samples::Int16(v) => v.len(),
            Samples::Int32(v) => v.len(),
            Samples::Int64(v) => v.len(),
            Samples::UInt8(v) => v.len(),
            Samples::UInt16(v) => v.len(),
            Samples::UInt32(v) => v.len(),
            Samples::Bool(v) => v.len(),
            Samples::Bytes(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A decoded channel ready for export.
///
/// The number of samples always equals the number of timestamps; this is
/// checked once in [`Signal::new`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Signal {
    name: Option<String>,
    timestamps: Vec<f64>,
    samples: Samples,
    group_index: usize,
    source: Option<Source>,
}

impl Signal {
    /// Create a signal in group 0 with no source.
    ///
    /// # Errors
    /// [`Error::SampleCountMismatch`] if `samples` and `timestamps` differ in
    /// length.
    pub fn new(timestamps: Vec<f64>, samples: Samples) -> Result<Self> {
        if timestamps.len() != samples.len() {
            return Err(Error::SampleCountMismatch {
                timestamps: timestamps.len(),
                samples: samples.len(),
            });
        }
        Ok(Self {
            name: None,
            timestamps,
            samples,
            group_index: 0,
            source: None,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Index of the data group this signal was read from.
    pub fn with_group_index(mut self, group_index: usize) -> Self {
        self.group_index = group_index;
        self
    }

    pub fn with_source(mut self, source: Source) -> Self {
        self.source = Some(source);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn timestamps(&self) -> &[f64] {
        &self.timestamps
    }

    pub fn samples(&self) -> &Samples {
        &self.samples
    }

    pub fn group_index(&self) -> usize {
        self.group_index
    }

    pub fn source(&self) -> Option<&Source> {
        self.source.as_ref()
    }

    /// Number of samples (and timestamps).
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn new_rejects_length_mismatch() {
        let err = Signal::new(vec![0.0, 1.0, 2.0], Samples::Int32(vec![1, 2])).unwrap_err();
        assert_eq!(
            err,
            Error::SampleCountMismatch {
                timestamps: 3,
                samples: 2
            }
        );
    }

    #[test]
    fn builder_sets_fields() {
        let signal = Signal::new(vec![0.0], Samples::UInt8(vec![1]))
            .unwrap()
            .with_name("Speed")
            .with_group_index(4)
            .with_source(Source::can_bus("CAN1"));
        assert_eq!(signal.name(), Some("Speed"));
        assert_eq!(signal.group_index(), 4);
        assert_eq!(signal.len(), 1);
        assert!(signal.source().is_some());
    }

    #[test]
    fn kinds() {
        assert_eq!(Samples::Float32(vec![]).kind(), SampleKind::Float32);
        assert_eq!(Samples::UInt64(vec![]).kind(), SampleKind::UInt64);
        assert_eq!(Samples::UInt32(vec![]).kind(), SampleKind::OtherInteger);
        assert_eq!(Samples::Int64(vec![]).kind(), SampleKind::OtherInteger);
        assert_eq!(Samples::Bool(vec![]).kind(), SampleKind::Unrecognized);
        assert_eq!(
            Samples::Bytes(vec![vec![1, 2]]).kind(),
            SampleKind::Unrecognized
        );
        assert_eq!(Samples::Object(vec![]).kind(), SampleKind::Object);
        assert_eq!(Samples::Record(vec![]).kind(), SampleKind::Record);
    }

    #[test]
    fn empty_signal() {
        let signal = Signal::new(vec![], Samples::Float64(vec![])).unwrap();
        assert!(signal.is_empty());
        assert!(signal.samples().is_empty());
    }
}
