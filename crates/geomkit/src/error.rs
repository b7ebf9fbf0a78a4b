//! Error type shared by the container and the figure model.
//!
//! Every variant is a contract violation raised at the call that caused it;
//! nothing is retried or logged inside the library.

use std::fmt;

/// Errors surfaced by `DynamicArray`, `Polygon` and the token reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeomError {
    /// A size parameter is non-positive or a vertex count is below 3.
    InvalidConfiguration { reason: String },
    /// Index outside `[0, len)`.
    OutOfRange { index: usize, len: usize },
    /// The object no longer owns the storage the operation needs.
    InvalidState { reason: String },
    /// Text input ended early or held a token that is not a scalar.
    Parse { reason: String },
}

impl GeomError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    pub(crate) fn state(reason: impl Into<String>) -> Self {
        Self::InvalidState {
            reason: reason.into(),
        }
    }

    pub(crate) fn parse(reason: impl Into<String>) -> Self {
        Self::Parse {
            reason: reason.into(),
        }
    }

    #[inline]
    pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
        if index >= len {
            return Err(Self::OutOfRange { index, len });
        }
        Ok(())
    }
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration { reason } => write!(f, "invalid configuration: {reason}"),
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::InvalidState { reason } => write!(f, "invalid state: {reason}"),
            Self::Parse { reason } => write!(f, "parse error: {reason}"),
        }
    }
}

impl std::error::Error for GeomError {}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, GeomError>;
