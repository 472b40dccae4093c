//! Beam model errors

use thiserror::Error;

/// Why did an operation on a beam fail?
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BeamErrorKind {
    InvalidArgument,
    InvalidState,
    InvalidOperation,
    OutOfRange,
}

/// Error returned when a beam operation is rejected. The beam is
/// always left unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BeamError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("invalid state: {0}")]
    InvalidState(String),
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
    #[error("scan point {index} is out of range, beam has {len} scan points")]
    OutOfRange {
        index: usize,
        len: usize,
    },
}

impl BeamError {
    pub fn invalid_argument(cause: &str) -> Self {
        Self::InvalidArgument(cause.to_owned())
    }

    pub fn invalid_state(cause: &str) -> Self {
        Self::InvalidState(cause.to_owned())
    }

    pub fn invalid_operation(cause: &str) -> Self {
        Self::InvalidOperation(cause.to_owned())
    }

    pub(crate) fn no_fixed_wavelength() -> Self {
        Self::invalid_operation("polychromatic beam has no fixed wavelength")
    }

    pub(crate) fn no_fixed_s0() -> Self {
        Self::invalid_operation("polychromatic beam has no fixed s0")
    }

    pub fn kind(&self) -> BeamErrorKind {
        match self {
            Self::InvalidArgument(_) => BeamErrorKind::InvalidArgument,
            Self::InvalidState(_) => BeamErrorKind::InvalidState,
            Self::InvalidOperation(_) => BeamErrorKind::InvalidOperation,
            Self::OutOfRange {..} => BeamErrorKind::OutOfRange,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = BeamError::OutOfRange { index: 3, len: 2 };
        assert_eq!(err.kind(), BeamErrorKind::OutOfRange);
        assert_eq!(err.to_string(), "scan point 3 is out of range, beam has 2 scan points");

        let err = BeamError::no_fixed_s0();
        assert_eq!(err.kind(), BeamErrorKind::InvalidOperation);
        assert!(err.to_string().contains("no fixed s0"));
    }
}
