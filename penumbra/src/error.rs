use crate::{lights::ParamError, world::BoundsError};

use std::collections::TryReserveError;

/// Errors from setting up lights for rendering.
#[derive(Debug)]
pub enum SetupError {
    Parameter(ParamError),
    /// Light region has infinite bounds
    UnboundedLight(String),
    Bounds(BoundsError),
    OutOfMemory(TryReserveError),
}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::Parameter(why) => write!(f, "Bad light parameters: {}", why),
            SetupError::UnboundedLight(name) => write!(f, "Light '{}' has infinite bounds", name),
            SetupError::Bounds(why) => write!(f, "Failed to get light bounds: {}", why),
            SetupError::OutOfMemory(why) => {
                write!(f, "Failed to allocate light sample points: {}", why)
            }
        }
    }
}

impl std::error::Error for SetupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SetupError::Parameter(why) => Some(why),
            SetupError::Bounds(why) => Some(why),
            SetupError::OutOfMemory(why) => Some(why),
            SetupError::UnboundedLight(_) => None,
        }
    }
}

impl From<ParamError> for SetupError {
    fn from(why: ParamError) -> Self {
        SetupError::Parameter(why)
    }
}

impl From<TryReserveError> for SetupError {
    fn from(why: TryReserveError) -> Self {
        SetupError::OutOfMemory(why)
    }
}
