//! Error types for the wavetable backend.

use bandtable_spec::{BackendError, ValidationError};
use thiserror::Error;

/// Result type for backend operations.
pub type BandtableResult<T> = Result<T, BandtableError>;

/// Errors that can occur during wavetable generation.
#[derive(Debug, Error)]
pub enum BandtableError {
    /// Config failed validation before any computation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ValidationError),

    /// Partitioning left no usable slots.
    #[error("partitioning produced no usable slots (requested {requested})")]
    DegenerateSlotSet {
        /// Requested slot count.
        requested: u32,
    },

    /// A slot's fundamental can never reach Nyquist, so the harmonic sweep would not end.
    #[error("non-terminating harmonic loop: fundamental {frequency} Hz is not positive and finite")]
    NonTerminatingHarmonicLoop {
        /// The offending fundamental frequency.
        frequency: f64,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },
}

impl BandtableError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Whether the error stems from bad input rather than a failed computation.
    ///
    /// A non-positive fundamental can only come from a malformed config, so
    /// it counts as a configuration error.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            BandtableError::InvalidConfiguration(_)
                | BandtableError::NonTerminatingHarmonicLoop { .. }
                | BandtableError::InvalidParameter { .. }
        )
    }
}

impl BackendError for BandtableError {
    fn code(&self) -> &'static str {
        match self {
            BandtableError::InvalidConfiguration(_) => "BAND_001",
            BandtableError::DegenerateSlotSet { .. } => "BAND_002",
            BandtableError::NonTerminatingHarmonicLoop { .. } => "BAND_003",
            BandtableError::InvalidParameter { .. } => "BAND_004",
        }
    }

    fn category(&self) -> &'static str {
        "wavetable"
    }
}
