//! Error types.
//!
//! [`InterpError`] is the only error the pure interpolation core returns.
//! [`Error`] wraps it together with the failures of the file-based
//! collaborators (readers, writers, plotting).
use std::path::PathBuf;

use thiserror::Error;

use crate::method::Method;

/// Failure of the interpolation core. Every variant is final: the
/// interpolation either fully succeeds or produces no output at all.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpError {
    /// Non-monotonic or duplicate PK values, non-finite values, or an
    /// invalid step.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Too few samples for the requested method.
    #[error("{method} interpolation needs at least {required} samples, got {found}")]
    InsufficientData {
        method: Method,
        required: usize,
        found: usize,
    },

    /// An evaluation point lies outside the PK range of the source table.
    #[error("PK {pk} is outside the interpolation range [{min}, {max}]")]
    Domain { pk: f64, min: f64, max: f64 },
}

impl InterpError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        InterpError::InvalidInput {
            reason: reason.into(),
        }
    }
}

/// Failure anywhere in the load / interpolate / write / plot pipeline.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Interp(#[from] InterpError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("unsupported sample file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("plotting error: {0}")]
    Plot(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
