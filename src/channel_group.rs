use alloc::string::String;

/// Acquisition source of a channel group (the `##SI` block linked from `cg_si_acq_source`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcquisitionSource {
    /// The source name (si_tx_name)
    pub name: Option<String>,
    /// The source path (si_tx_path)
    pub path: Option<String>,
}

impl AcquisitionSource {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            path: Some(path.into()),
        }
    }
}

/// Decoded metadata of a channel group.
///
/// All fields are optional because every link in an MDF file may be nil.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelGroup {
    /// Acquisition name (cg_tx_acq_name)
    pub acq_name: Option<String>,
    /// Acquisition source (cg_si_acq_source)
    pub acq_source: Option<AcquisitionSource>,
    /// Group comment (cg_md_comment)
    pub comment: Option<String>,
}

impl ChannelGroup {
    /// Create a channel group with only an acquisition name.
    pub fn named(acq_name: impl Into<String>) -> Self {
        Self {
            acq_name: Some(acq_name.into()),
            ..Self::default()
        }
    }

    pub fn with_acq_source(mut self, acq_source: AcquisitionSource) -> Self {
        self.acq_source = Some(acq_source);
        self
    }

    /// Retrieve the acquisition name if present.
    pub fn acq_name(&self) -> Option<&str> {
        self.acq_name.as_deref()
    }

    /// Retrieve the acquisition source name if both the source and its name are present.
    pub fn acq_source_name(&self) -> Option<&str> {
        self.acq_source.as_ref()?.name.as_deref()
    }

    /// Retrieve the acquisition source path if both the source and its path are present.
    pub fn acq_source_path(&self) -> Option<&str> {
        self.acq_source.as_ref()?.path.as_deref()
    }
}
