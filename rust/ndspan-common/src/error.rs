use std::ops::Range;

use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn invalid_shape(dims: &[u64], message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidShape {
                dims: dims.to_vec(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn coord_out_of_bounds(coord: &[u64], dims: &[u64]) -> Error {
        Error(
            ErrorKind::CoordOutOfBounds {
                coord: coord.to_vec(),
                dims: dims.to_vec(),
            }
            .into(),
        )
    }

    pub fn position_out_of_bounds(position: u64, total_size: u64) -> Error {
        Error(
            ErrorKind::PositionOutOfBounds {
                position,
                total_size,
            }
            .into(),
        )
    }

    pub fn invalid_range(bound: &'static str, position: u64, allowed: Range<u64>) -> Error {
        Error(
            ErrorKind::InvalidRange {
                bound,
                position,
                allowed,
            }
            .into(),
        )
    }

    pub fn exhausted() -> Error {
        Error(ErrorKind::Exhausted.into())
    }

    /// Whether the error reports a caller-supplied value outside of a valid domain
    /// (either the shape or the current cursor).
    pub fn is_bounds_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::CoordOutOfBounds { .. }
                | ErrorKind::PositionOutOfBounds { .. }
                | ErrorKind::InvalidRange { .. }
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("invalid shape {dims:?}: {message}")]
    InvalidShape { dims: Vec<u64>, message: String },

    #[error("coordinate {coord:?} is outside of shape {dims:?}")]
    CoordOutOfBounds { coord: Vec<u64>, dims: Vec<u64> },

    #[error("position {position} is outside of a space with {total_size} elements")]
    PositionOutOfBounds { position: u64, total_size: u64 },

    #[error("{bound} position {position} is outside of the current range {allowed:?}")]
    InvalidRange {
        bound: &'static str,
        position: u64,
        allowed: Range<u64>,
    },

    #[error("iterator is exhausted")]
    Exhausted,
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
