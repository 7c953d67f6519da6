use tracing::trace;

use super::error::{QRError, QRResult};
use super::metadata::{ECLevel, Mode, Version};

// Version table
//------------------------------------------------------------------------------

#[derive(Debug)]
pub(crate) struct VersionEntry {
    pub number: usize,
    pub size: usize,
    // Byte mode capacity indexed by ECLevel: L, M, Q, H
    byte: [usize; 4],
}

impl VersionEntry {
    const fn new(number: usize, byte: [usize; 4]) -> Self {
        Self { number, size: 17 + 4 * number, byte }
    }

    pub fn capacity(&self, mode: Mode, ecl: ECLevel) -> Option<usize> {
        match mode {
            Mode::Byte => Some(self.byte[ecl as usize]),
        }
    }
}

pub(crate) static VERSION_TABLE: [VersionEntry; 15] = [
    VersionEntry::new(1, [17, 14, 11, 7]),
    VersionEntry::new(2, [32, 26, 20, 14]),
    VersionEntry::new(3, [53, 42, 32, 24]),
    VersionEntry::new(4, [78, 62, 46, 34]),
    VersionEntry::new(5, [106, 84, 60, 44]),
    VersionEntry::new(6, [134, 106, 74, 58]),
    VersionEntry::new(7, [154, 122, 86, 64]),
    VersionEntry::new(8, [192, 152, 108, 84]),
    VersionEntry::new(9, [230, 180, 130, 98]),
    VersionEntry::new(10, [271, 213, 151, 119]),
    VersionEntry::new(11, [321, 251, 177, 137]),
    VersionEntry::new(12, [367, 287, 203, 155]),
    VersionEntry::new(13, [425, 331, 241, 177]),
    VersionEntry::new(14, [458, 362, 258, 194]),
    VersionEntry::new(15, [520, 412, 292, 220]),
];

// Version selection
//------------------------------------------------------------------------------

/// Smallest version whose capacity for `(mode, ecl)` holds `len` bytes.
pub fn select_version(len: usize, mode: Mode, ecl: ECLevel) -> QRResult<Version> {
    for entry in VERSION_TABLE.iter() {
        match entry.capacity(mode, ecl) {
            Some(cap) if cap >= len => {
                trace!(version = entry.number, capacity = cap, len, "Version fits payload");
                return Version::new(entry.number, entry.size);
            }
            _ => (),
        }
    }
    Err(QRError::CapacityExceeded { required: len, max: max_capacity(mode, ecl) })
}

pub fn max_capacity(mode: Mode, ecl: ECLevel) -> usize {
    VERSION_TABLE.iter().filter_map(|e| e.capacity(mode, ecl)).max().unwrap_or(0)
}
