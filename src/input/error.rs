//! Input parsing errors

use thiserror::Error;

use crate::beam::BeamError;

/// Why did reading the configuration fail?
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputErrorKind {
    File,
    Location,
    Conversion,
    Beam,
}

/// Error returned when a configuration cannot be read, or does not
/// describe a valid beam.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("unable to read configuration: {0}")]
    File(String),
    #[error("failed to follow specified path \"{path}\": component \"{component}\" is missing")]
    Location {
        path: String,
        component: String,
    },
    #[error("could not convert field \"{0}\" to target type")]
    Conversion(String),
    #[error("\"{path}\" does not describe a valid beam")]
    Beam {
        path: String,
        #[source]
        source: BeamError,
    },
}

impl InputError {
    pub fn file(cause: &str) -> Self {
        Self::File(cause.to_owned())
    }

    pub fn location(path: &str, component: &str) -> Self {
        Self::Location {
            path: path.to_owned(),
            component: component.to_owned(),
        }
    }

    pub fn conversion(path: &str) -> Self {
        Self::Conversion(path.to_owned())
    }

    pub fn beam(path: &str, source: BeamError) -> Self {
        Self::Beam {
            path: path.to_owned(),
            source,
        }
    }

    pub fn kind(&self) -> InputErrorKind {
        match self {
            Self::File(_) => InputErrorKind::File,
            Self::Location {..} => InputErrorKind::Location,
            Self::Conversion(_) => InputErrorKind::Conversion,
            Self::Beam {..} => InputErrorKind::Beam,
        }
    }

    /// The beam validation error behind this one, if any.
    pub fn beam_error(&self) -> Option<&BeamError> {
        match self {
            Self::Beam { source, .. } => Some(source),
            _ => None,
        }
    }
}
