use std::fmt::{Display, Formatter};
use std::ops::Deref;

use super::error::{QRError, QRResult};
use super::version_db::{VersionEntry, VERSION_TABLE};

// Mode
//------------------------------------------------------------------------------

/// Interpretation of the payload. Only raw bytes are supported; the other
/// QR mode indicators are rejected on decode rather than coerced.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Mode {
    Byte = 0b0100,
}

impl Mode {
    pub const INDICATOR_BITS: usize = 4;

    pub fn indicator(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Mode {
    type Error = QRError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0b0100 => Ok(Self::Byte),
            v => Err(QRError::UnsupportedMode(v)),
        }
    }
}

// Error correction level
//------------------------------------------------------------------------------

/// Selects a column of the capacity table. No redundancy is computed.
#[derive(Debug, Default, PartialEq, Eq, Hash, Copy, Clone)]
pub enum ECLevel {
    L = 0,
    #[default]
    M = 1,
    Q = 2,
    H = 3,
}

impl Display for ECLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let c = match self {
            Self::L => "L",
            Self::M => "M",
            Self::Q => "Q",
            Self::H => "H",
        };
        f.write_str(c)
    }
}

// Version
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct Version {
    number: usize,
    size: usize,
}

impl Deref for Version {
    type Target = usize;
    fn deref(&self) -> &Self::Target {
        &self.number
    }
}

impl Version {
    pub const MIN_SIZE: usize = 21;

    pub(crate) fn new(number: usize, size: usize) -> QRResult<Self> {
        let entry = Self::entry_for(number)?;
        if entry.size != size {
            return Err(QRError::InvalidGridSize(size));
        }
        Ok(Self { number, size })
    }

    pub fn from_number(number: usize) -> QRResult<Self> {
        let entry = Self::entry_for(number)?;
        Self::new(number, entry.size)
    }

    pub fn from_size(size: usize) -> QRResult<Self> {
        VERSION_TABLE
            .iter()
            .find(|e| e.size == size)
            .map(|e| Self { number: e.number, size: e.size })
            .ok_or(QRError::InvalidGridSize(size))
    }

    fn entry_for(number: usize) -> QRResult<&'static VersionEntry> {
        number
            .checked_sub(1)
            .and_then(|i| VERSION_TABLE.get(i))
            .ok_or(QRError::InvalidVersion(number))
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Maximum payload in bytes, or 0 when the table has no entry for `mode`.
    pub fn capacity(&self, mode: Mode, ecl: ECLevel) -> usize {
        VERSION_TABLE[self.number - 1].capacity(mode, ecl).unwrap_or(0)
    }

    pub fn length_bits(&self) -> usize {
        if self.number < 10 {
            8
        } else {
            16
        }
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}x{})", self.number, self.size, self.size)
    }
}
