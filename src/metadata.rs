//! Source metadata of a signal, flattened into export columns.
//!
//! The signal's own source is mandatory metadata: when present its codes
//! must be valid. The channel group metadata is best effort: every link in
//! `file.groups[i].channel_group.acq_source.{name,path}` may be missing, and
//! each of the three group columns degrades to an empty string on its own.

use alloc::string::{String, ToString};

use crate::{
    Result, mdf::DecodedFile, signal::Signal, source::bus_type_to_str,
    source::source_type_to_str,
};

/// Placeholder for source columns of a signal without a source.
pub const UNKNOWN_SOURCE: &str = "Unknown";

/// The six metadata columns describing where a signal came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceMetadata {
    pub source_name: String,
    pub source_type: String,
    pub bus_type: String,
    pub channel_group_acq_name: String,
    pub acq_source_name: String,
    pub acq_source_path: String,
}

impl SourceMetadata {
    /// Columns in export order: source name, source type, bus type,
    /// acquisition name, acquisition source name, acquisition source path.
    pub fn into_tuple(self) -> (String, String, String, String, String, String) {
        (
            self.source_name,
            self.source_type,
            self.bus_type,
            self.channel_group_acq_name,
            self.acq_source_name,
            self.acq_source_path,
        )
    }
}

/// Collect the source metadata of `signal` from itself and its group in `file`.
///
/// # Errors
/// [`crate::Error::UnknownSourceType`] or [`crate::Error::UnknownBusType`]
/// if the signal's source carries a code outside the MDF 4 tables. Missing
/// group metadata is never an error.
pub fn extract_source(file: &DecodedFile, signal: &Signal) -> Result<SourceMetadata> {
    let (source_name, source_type, bus_type) = match signal.source() {
        Some(source) => (
            source.name.clone().unwrap_or_default(),
            source_type_to_str(source.source_type)?.to_string(),
            bus_type_to_str(source.bus_type)?.to_string(),
        ),
        None => (
            UNKNOWN_SOURCE.to_string(),
            UNKNOWN_SOURCE.to_string(),
            UNKNOWN_SOURCE.to_string(),
        ),
    };

    let index = signal.group_index();
    let channel_group = file.channel_group(index);

    let channel_group_acq_name = or_empty(
        channel_group.and_then(|cg| cg.acq_name()),
        "acquisition name",
        index,
    );
    let acq_source_name = or_empty(
        channel_group.and_then(|cg| cg.acq_source_name()),
        "acquisition source name",
        index,
    );
    let acq_source_path = or_empty(
        channel_group.and_then(|cg| cg.acq_source_path()),
        "acquisition source path",
        index,
    );

    Ok(SourceMetadata {
        source_name,
        source_type,
        bus_type,
        channel_group_acq_name,
        acq_source_name,
        acq_source_path,
    })
}

fn or_empty(value: Option<&str>, what: &str, group_index: usize) -> String {
    match value {
        Some(v) => v.to_string(),
        None => {
            log::debug!("no {what} for group {group_index}, using empty string");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        AcquisitionSource, ChannelGroup, Error, Group, Samples, Source,
        source::{BusType, SourceType},
    };
    use alloc::vec;

    fn signal() -> Signal {
        Signal::new(vec![0.0], Samples::Float64(vec![1.0])).unwrap()
    }

    #[test]
    fn missing_source_is_unknown() {
        let meta = extract_source(&DecodedFile::default(), &signal()).unwrap();
        assert_eq!(meta.source_name, "Unknown");
        assert_eq!(meta.source_type, "Unknown");
        assert_eq!(meta.bus_type, "Unknown");
        assert_eq!(meta.channel_group_acq_name, "");
        assert_eq!(meta.acq_source_name, "");
        assert_eq!(meta.acq_source_path, "");
    }

    #[test]
    fn source_codes_are_translated() {
        let s = signal().with_source(Source::new("Gateway", SourceType::Tool, BusType::Ethernet));
        let meta = extract_source(&DecodedFile::default(), &s).unwrap();
        assert_eq!(meta.source_name, "Gateway");
        assert_eq!(meta.source_type, "TOOL");
        assert_eq!(meta.bus_type, "ETHERNET");
    }

    #[test]
    fn unnamed_source_has_empty_name() {
        let s = signal().with_source(Source::from_codes(None, 1, 2));
        let meta = extract_source(&DecodedFile::default(), &s).unwrap();
        assert_eq!(meta.source_name, "");
        assert_eq!(meta.source_type, "ECU");
        assert_eq!(meta.bus_type, "CAN");
    }

    #[test]
    fn invalid_bus_code_fails() {
        let s = signal().with_source(Source::from_codes(Some("x".into()), 0, 9));
        assert_eq!(
            extract_source(&DecodedFile::default(), &s),
            Err(Error::UnknownBusType(9))
        );
    }

    #[test]
    fn group_fields_are_independent() {
        let file = DecodedFile::new(vec![Group::new(ChannelGroup {
            acq_name: None,
            acq_source: Some(AcquisitionSource {
                name: Some("Logger".into()),
                path: None,
            }),
            comment: None,
        })]);
        let meta = extract_source(&file, &signal()).unwrap();
        assert_eq!(meta.channel_group_acq_name, "");
        assert_eq!(meta.acq_source_name, "Logger");
        assert_eq!(meta.acq_source_path, "");
    }

    #[test]
    fn tuple_order() {
        let meta = SourceMetadata {
            source_name: "a".into(),
            source_type: "b".into(),
            bus_type: "c".into(),
            channel_group_acq_name: "d".into(),
            acq_source_name: "e".into(),
            acq_source_path: "f".into(),
        };
        let (a, b, c, d, e, f) = meta.into_tuple();
        assert_eq!([a, b, c, d, e, f].concat(), "abcdef");
    }
}
