use thiserror::Error;

// Error
//------------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum QRError {
    // Construction
    #[error("Invalid version {0}")]
    InvalidVersion(usize),
    #[error("Invalid grid size {0}")]
    InvalidGridSize(usize),
    #[error("Grid row {row} has {found} modules, expected {expected}")]
    InvalidGridShape { row: usize, expected: usize, found: usize },
    #[error("Module ({row}, {col}) is out of bounds for grid of size {size}")]
    OutOfBounds { row: usize, col: usize, size: usize },
    #[error("Invalid character for single byte encoding")]
    InvalidChar,

    // QR builder
    #[error("Data too long: {required} bytes required, at most {max} bytes available")]
    CapacityExceeded { required: usize, max: usize },

    // QR reader
    #[error("Truncated bit stream: {requested} bits requested, {available} bits available")]
    TruncatedStream { requested: usize, available: usize },
    #[error("Unsupported mode indicator {0:#06b}")]
    UnsupportedMode(u8),
    #[error("Data module ({row}, {col}) is unassigned")]
    UnassignedCell { row: usize, col: usize },
    #[error("Symbol of size {size} is smaller than the minimum size 21")]
    SymbolTooSmall { size: usize },
    #[error("Symbol not found")]
    SymbolNotFound,
}

impl QRError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidVersion(_)
            | Self::InvalidGridSize(_)
            | Self::InvalidGridShape { .. }
            | Self::OutOfBounds { .. }
            | Self::InvalidChar => ErrorKind::Validation,
            Self::CapacityExceeded { .. } => ErrorKind::CapacityExceeded,
            Self::TruncatedStream { .. } => ErrorKind::TruncatedStream,
            Self::UnsupportedMode(_) => ErrorKind::UnsupportedMode,
            Self::UnassignedCell { .. } => ErrorKind::UnassignedCell,
            Self::SymbolTooSmall { .. } => ErrorKind::SymbolTooSmall,
            Self::SymbolNotFound => ErrorKind::DetectionFailed,
        }
    }
}

/// Coarse failure category, one per distinct way a caller has to react.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
    Validation,
    CapacityExceeded,
    TruncatedStream,
    UnsupportedMode,
    UnassignedCell,
    SymbolTooSmall,
    DetectionFailed,
}

pub type QRResult<T> = Result<T, QRError>;

#[cfg(test)]
mod error_tests {
    use test_case::test_case;

    use super::{ErrorKind, QRError};

    #[test_case(QRError::InvalidGridSize(0), ErrorKind::Validation)]
    #[test_case(QRError::OutOfBounds { row: 21, col: 0, size: 21 }, ErrorKind::Validation)]
    #[test_case(QRError::CapacityExceeded { required: 521, max: 520 }, ErrorKind::CapacityExceeded)]
    #[test_case(QRError::TruncatedStream { requested: 8, available: 3 }, ErrorKind::TruncatedStream)]
    #[test_case(QRError::UnsupportedMode(0b0001), ErrorKind::UnsupportedMode)]
    #[test_case(QRError::UnassignedCell { row: 4, col: 9 }, ErrorKind::UnassignedCell)]
    #[test_case(QRError::SymbolTooSmall { size: 20 }, ErrorKind::SymbolTooSmall)]
    #[test_case(QRError::SymbolNotFound, ErrorKind::DetectionFailed)]
    fn test_kind(err: QRError, kind: ErrorKind) {
        assert_eq!(err.kind(), kind);
    }

    #[test]
    fn test_display() {
        let err = QRError::CapacityExceeded { required: 15, max: 14 };
        assert_eq!(err.to_string(), "Data too long: 15 bytes required, at most 14 bytes available");
        assert_eq!(QRError::UnsupportedMode(1).to_string(), "Unsupported mode indicator 0b0001");
    }
}
