//! Signal source information and the MDF 4 source/bus code tables.
//!
//! An `##SI` block in an MDF 4 file stores the source and bus type as raw
//! `u8` codes. [`SourceType`] and [`BusType`] are the fixed tables that give
//! those codes their names; a code outside the table is rejected.

use core::fmt;

use alloc::string::String;

use crate::{Error, Result};

/// Source type codes of an `##SI` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum SourceType {
    /// Other source type
    Other = 0,
    /// Electronic Control Unit
    ECU = 1,
    /// Bus (CAN, LIN, etc.)
    Bus = 2,
    /// I/O device
    IO = 3,
    /// Tool
    Tool = 4,
    /// User-defined
    User = 5,
}

impl SourceType {
    /// Raw code as stored in the file.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Name used for this source type in exported tables.
    pub fn as_str(self) -> &'static str {
        match self {
            SourceType::Other => "OTHER",
            SourceType::ECU => "ECU",
            SourceType::Bus => "BUS",
            SourceType::IO => "IO",
            SourceType::Tool => "TOOL",
            SourceType::User => "USER",
        }
    }
}

impl TryFrom<u8> for SourceType {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(SourceType::Other),
            1 => Ok(SourceType::ECU),
            2 => Ok(SourceType::Bus),
            3 => Ok(SourceType::IO),
            4 => Ok(SourceType::Tool),
            5 => Ok(SourceType::User),
            other => Err(Error::UnknownSourceType(other)),
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bus type codes of an `##SI` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum BusType {
    /// No bus
    None = 0,
    /// Other bus type
    Other = 1,
    /// CAN bus
    CAN = 2,
    /// LIN bus
    LIN = 3,
    /// MOST bus
    MOST = 4,
    /// FlexRay
    FlexRay = 5,
    /// K-Line
    KLine = 6,
    /// Ethernet
    Ethernet = 7,
    /// USB
    USB = 8,
}

impl BusType {
    /// Raw code as stored in the file.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Name used for this bus type in exported tables.
    pub fn as_str(self) -> &'static str {
        match self {
            BusType::None => "NONE",
            BusType::Other => "OTHER",
            BusType::CAN => "CAN",
            BusType::LIN => "LIN",
            BusType::MOST => "MOST",
            BusType::FlexRay => "FLEXRAY",
            BusType::KLine => "K_LINE",
            BusType::Ethernet => "ETHERNET",
            BusType::USB => "USB",
        }
    }
}

impl TryFrom<u8> for BusType {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(BusType::None),
            1 => Ok(BusType::Other),
            2 => Ok(BusType::CAN),
            3 => Ok(BusType::LIN),
            4 => Ok(BusType::MOST),
            5 => Ok(BusType::FlexRay),
            6 => Ok(BusType::KLine),
            7 => Ok(BusType::Ethernet),
            8 => Ok(BusType::USB),
            other => Err(Error::UnknownBusType(other)),
        }
    }
}

impl fmt::Display for BusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Look up the exported name of a raw source type code.
pub fn source_type_to_str(code: u8) -> Result<&'static str> {
    SourceType::try_from(code).map(SourceType::as_str)
}

/// Look up the exported name of a raw bus type code.
pub fn bus_type_to_str(code: u8) -> Result<&'static str> {
    BusType::try_from(code).map(BusType::as_str)
}

/// Source attached to a single signal.
///
/// The type codes are kept raw so that values read from a damaged file can
/// still be represented; they are only validated when the source is
/// exported.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Source {
    /// The source name (si_tx_name)
    pub name: Option<String>,
    /// The source path (si_tx_path)
    pub path: Option<String>,
    /// Any extended comment (si_md_comment)
    pub comment: Option<String>,
    /// Raw source type code
    pub source_type: u8,
    /// Raw bus type code
    pub bus_type: u8,
}

impl Source {
    /// Create a named source from typed codes.
    pub fn new(name: impl Into<String>, source_type: SourceType, bus_type: BusType) -> Self {
        Self {
            name: Some(name.into()),
            path: None,
            comment: None,
            source_type: source_type.code(),
            bus_type: bus_type.code(),
        }
    }

    /// Create a source from raw codes as found in the file.
    pub fn from_codes(name: Option<String>, source_type: u8, bus_type: u8) -> Self {
        Self {
            name,
            path: None,
            comment: None,
            source_type,
            bus_type,
        }
    }

    /// Creates a source describing a CAN ECU.
    pub fn can_ecu(name: impl Into<String>) -> Self {
        Self::new(name, SourceType::ECU, BusType::CAN)
    }

    /// Creates a source describing a CAN bus.
    pub fn can_bus(name: impl Into<String>) -> Self {
        Self::new(name, SourceType::Bus, BusType::CAN)
    }

    /// Attach a tool specific path.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}
