//! Error types for signal preparation.
//!
//! Only a handful of conditions are treated as hard failures. Missing
//! metadata and unrecognized sample kinds are not errors: they degrade to
//! placeholder output instead (see [`crate::extract_source`] and
//! [`crate::split_by_type`]).
//!
//! # Example
//!
//! ```
//! use mdf42adx::{DecodedFile, Error, Samples, Signal, Source, extract_source};
//!
//! let source = Source::from_codes(Some("Gateway".into()), 42, 2);
//! let signal = Signal::new(vec![0.0], Samples::Float64(vec![1.0]))?
//!     .with_source(source);
//!
//! match extract_source(&DecodedFile::default(), &signal) {
//!     Err(Error::UnknownSourceType(code)) => assert_eq!(code, 42),
//!     other => panic!("unexpected result: {other:?}"),
//! }
//! # Ok::<(), mdf42adx::Error>(())
//! ```

use core::fmt;

/// Errors that can occur while preparing a signal for export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A source type code is not defined by the MDF 4 format.
    ///
    /// The code table is exhaustive for valid files, so this indicates a
    /// corrupt file or a decoder producing out-of-range codes.
    UnknownSourceType(u8),

    /// A bus type code is not defined by the MDF 4 format.
    UnknownBusType(u8),

    /// A signal was built with a different number of samples than timestamps.
    SampleCountMismatch {
        /// Number of timestamps supplied
        timestamps: usize,
        /// Number of samples supplied
        samples: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownSourceType(code) => write!(f, "Unknown source type code: {code}"),
            Error::UnknownBusType(code) => write!(f, "Unknown bus type code: {code}"),
            Error::SampleCountMismatch {
                timestamps,
                samples,
            } => write!(
                f,
                "Sample count mismatch: {timestamps} timestamps but {samples} samples"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// A specialized Result type for signal preparation.
///
/// This is defined as `core::result::Result<T, Error>` for convenience.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_mentions_codes() {
        assert_eq!(
            Error::UnknownSourceType(9).to_string(),
            "Unknown source type code: 9"
        );
        assert_eq!(
            Error::UnknownBusType(200).to_string(),
            "Unknown bus type code: 200"
        );
        assert_eq!(
            Error::SampleCountMismatch {
                timestamps: 3,
                samples: 2
            }
            .to_string(),
            "Sample count mismatch: 3 timestamps but 2 samples"
        );
    }
}
