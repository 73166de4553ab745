//! Core types used throughout rigkit.
//!
//! These types provide a model-agnostic vocabulary shared by the registry,
//! the rig lifecycle, the dispatch layer, and every backend: model
//! identifiers, operating modes, VFO selection, serial port parameters,
//! and the advertised-function bitmask.

use std::fmt;
use std::ops::{BitAnd, BitOr};
use std::str::FromStr;

/// Opaque rig model identifier.
///
/// The unique key under which a backend's capability descriptor is
/// registered. Values are assigned by the backend crates; the core only
/// ever compares them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RigModel(pub u32);

impl fmt::Display for RigModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "model {}", self.0)
    }
}

/// Operating mode of the transceiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Upper sideband voice.
    USB,
    /// Lower sideband voice.
    LSB,
    /// CW (morse).
    CW,
    /// CW reverse sideband.
    CWR,
    /// Amplitude modulation.
    AM,
    /// Frequency modulation.
    FM,
    /// Radio teletype (FSK), upper sideband.
    RTTY,
    /// Radio teletype (FSK), reverse / lower sideband.
    RTTYR,
    /// Data mode using upper sideband (AFSK, sound-card digital).
    DataUSB,
    /// Data mode using lower sideband.
    DataLSB,
    /// Data mode using FM.
    DataFM,
    /// Data mode using AM.
    DataAM,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mode::USB => "USB",
            Mode::LSB => "LSB",
            Mode::CW => "CW",
            Mode::CWR => "CWR",
            Mode::AM => "AM",
            Mode::FM => "FM",
            Mode::RTTY => "RTTY",
            Mode::RTTYR => "RTTYR",
            Mode::DataUSB => "DATA-USB",
            Mode::DataLSB => "DATA-LSB",
            Mode::DataFM => "DATA-FM",
            Mode::DataAM => "DATA-AM",
        };
        write!(f, "{s}")
    }
}

/// Error returned when a string cannot be parsed into a [`Mode`] or [`Vfo`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTypeError(String);

impl fmt::Display for ParseTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown value: {}", self.0)
    }
}

impl std::error::Error for ParseTypeError {}

impl FromStr for Mode {
    type Err = ParseTypeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USB" => Ok(Mode::USB),
            "LSB" => Ok(Mode::LSB),
            "CW" => Ok(Mode::CW),
            "CWR" => Ok(Mode::CWR),
            "AM" => Ok(Mode::AM),
            "FM" => Ok(Mode::FM),
            "RTTY" => Ok(Mode::RTTY),
            "RTTYR" => Ok(Mode::RTTYR),
            "DATA-USB" | "DATAUSB" => Ok(Mode::DataUSB),
            "DATA-LSB" | "DATALSB" => Ok(Mode::DataLSB),
            "DATA-FM" | "DATAFM" => Ok(Mode::DataFM),
            "DATA-AM" | "DATAAM" => Ok(Mode::DataAM),
            _ => Err(ParseTypeError(s.to_string())),
        }
    }
}

/// Variable Frequency Oscillator selection.
///
/// A rig's selectable tuning register. Traditional transceivers expose two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vfo {
    /// Main VFO.
    A,
    /// Sub VFO.
    B,
}

impl fmt::Display for Vfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vfo::A => write!(f, "VFO-A"),
            Vfo::B => write!(f, "VFO-B"),
        }
    }
}

impl FromStr for Vfo {
    type Err = ParseTypeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" | "VFO-A" | "VFOA" => Ok(Vfo::A),
            "B" | "VFO-B" | "VFOB" => Ok(Vfo::B),
            _ => Err(ParseTypeError(s.to_string())),
        }
    }
}

/// How the rig connects to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortType {
    /// Serial port (USB virtual COM or RS-232).
    Serial,
    /// Network (TCP/IP). Not implemented by the core lifecycle yet.
    Network,
}

impl fmt::Display for PortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortType::Serial => write!(f, "Serial"),
            PortType::Network => write!(f, "Network"),
        }
    }
}

/// Number of data bits per serial character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataBits {
    Five,
    Six,
    Seven,
    Eight,
}

/// Number of stop bits per serial character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopBits {
    One,
    Two,
}

/// Serial parity checking mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    None,
    Odd,
    Even,
}

/// Serial handshake (flow control) mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handshake {
    None,
    /// XON/XOFF software flow control.
    Software,
    /// RTS/CTS hardware flow control.
    Hardware,
}

/// How PTT (push-to-talk) is activated for a rig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PttType {
    /// No PTT control available.
    #[default]
    None,
    /// PTT via a CAT command on the control connection.
    Cat,
    /// PTT via the DTR serial line.
    Dtr,
    /// PTT via the RTS serial line.
    Rts,
}

/// Bitmask of the generic functions a rig model advertises.
///
/// Each backend's capability descriptor carries one of these; callers query
/// support with [`crate::rig::Rig::has_func`] and treat any non-empty
/// intersection as "supported".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RigFunctions(u32);

impl RigFunctions {
    /// No functions advertised.
    pub const NONE: RigFunctions = RigFunctions(0);
    /// Can set the frequency.
    pub const SET_FREQ: RigFunctions = RigFunctions(1 << 0);
    /// Can read the frequency.
    pub const GET_FREQ: RigFunctions = RigFunctions(1 << 1);
    /// Can set the operating mode.
    pub const SET_MODE: RigFunctions = RigFunctions(1 << 2);
    /// Can read the operating mode.
    pub const GET_MODE: RigFunctions = RigFunctions(1 << 3);
    /// Can select the active VFO.
    pub const SET_VFO: RigFunctions = RigFunctions(1 << 4);
    /// Can read the active VFO.
    pub const GET_VFO: RigFunctions = RigFunctions(1 << 5);
    /// Supports the experimental probe hook.
    pub const PROBE: RigFunctions = RigFunctions(1 << 6);

    /// All generic get/set operations (everything except [`Self::PROBE`]).
    pub const ALL_GENERIC: RigFunctions = Self::SET_FREQ
        .union(Self::GET_FREQ)
        .union(Self::SET_MODE)
        .union(Self::GET_MODE)
        .union(Self::SET_VFO)
        .union(Self::GET_VFO);

    /// Construct from a raw bit pattern.
    pub const fn from_bits(bits: u32) -> Self {
        RigFunctions(bits)
    }

    /// The raw bit pattern.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Union of two masks.
    pub const fn union(self, other: RigFunctions) -> Self {
        RigFunctions(self.0 | other.0)
    }

    /// Intersection of two masks.
    pub const fn intersection(self, other: RigFunctions) -> Self {
        RigFunctions(self.0 & other.0)
    }

    /// Whether every bit of `other` is present in `self`.
    pub const fn contains(self, other: RigFunctions) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether no bits are set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for RigFunctions {
    type Output = RigFunctions;

    fn bitor(self, rhs: RigFunctions) -> RigFunctions {
        self.union(rhs)
    }
}

impl BitAnd for RigFunctions {
    type Output = RigFunctions;

    fn bitand(self, rhs: RigFunctions) -> RigFunctions {
        self.intersection(rhs)
    }
}
