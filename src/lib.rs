#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

//! # mdf42adx
//!
//! Prepare signals decoded from ASAM MDF 4 (Measurement Data Format) files
//! for export into Azure Data Explorer (ADX) tables.
//!
//! An ADX row for a measurement carries the origin of the signal next to its
//! value, and the value lives in one of four typed columns. This crate does
//! both conversions on an already decoded file:
//!
//! - [`extract_source`] flattens the signal's source and its channel group's
//!   acquisition metadata into six string columns ([`SourceMetadata`]).
//! - [`split_by_type`] distributes the samples over a float, integer,
//!   unsigned ("decimal") and string column ([`TypedSamples`]) without
//!   losing precision for floats or `u64` values.
//!
//! Decoding the MDF file and writing ADX are left to the caller: any decoder
//! can fill the in-memory model ([`DecodedFile`], [`Signal`]).
//!
//! ## Quick Start
//!
//! ```
//! use mdf42adx::{
//!     AcquisitionSource, ChannelGroup, DecodedFile, Group, Result, Samples, Signal, Source,
//!     extract_source, split_by_type,
//! };
//!
//! fn main() -> Result<()> {
//!     let file = DecodedFile::new(vec![Group::new(
//!         ChannelGroup::named("CAN1")
//!             .with_acq_source(AcquisitionSource::new("Logger", "vehicle/can1")),
//!     )]);
//!
//!     let signal = Signal::new(vec![0.0, 0.01], Samples::UInt16(vec![1200, 1250]))?
//!         .with_name("EngineSpeed")
//!         .with_source(Source::can_ecu("Engine"));
//!
//!     let meta = extract_source(&file, &signal)?;
//!     assert_eq!(meta.bus_type, "CAN");
//!     assert_eq!(meta.acq_source_path, "vehicle/can1");
//!
//!     let columns = split_by_type(&signal);
//!     assert_eq!(columns.integer, [1200, 1250]);
//!     assert_eq!(columns.float, [1200.0, 1250.0]);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`metadata`] | Source metadata columns |
//! | [`split`] | Typed sample columns |
//! | [`source`] | Source and bus type code tables |
//! | [`error`] | Error types and [`Result`] alias |
//!
//! ## Error Handling
//!
//! Missing metadata never fails: absent sources read `"Unknown"` and absent
//! channel group fields read as empty strings. The only errors are source or
//! bus type codes outside the MDF 4 tables and signals built with mismatched
//! sample and timestamp counts.
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`] facade. Fallbacks to placeholder
//! metadata are logged at `debug`, samples of a kind without an export
//! column at `warn`.

extern crate alloc;

mod channel_group;
mod mdf;
mod signal;
mod types;

pub mod error;
pub mod metadata;
pub mod source;
pub mod split;

// Re-export commonly used types at the crate root
pub use channel_group::{AcquisitionSource, ChannelGroup};
pub use error::{Error, Result};
pub use mdf::{DecodedFile, Group};
pub use metadata::{SourceMetadata, UNKNOWN_SOURCE, extract_source};
pub use signal::{SampleKind, Samples, Signal};
pub use source::{BusType, Source, SourceType};
pub use split::{TypedSamples, split_by_type};
pub use types::{Record, Value};
