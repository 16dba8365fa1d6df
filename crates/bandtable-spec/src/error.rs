//! Error types for config validation and processing.

use thiserror::Error;

/// Error codes for config validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Sample rate is zero, negative, or out of range
    InvalidSampleRate,
    /// E002: Slot count is below 1 or out of range
    InvalidSlotCount,
    /// E003: Unrecognized waveform name
    UnknownWaveform,
    /// E004: Unrecognized numeric precision
    InvalidPrecision,
    /// E005: Harmonic blend coefficients are not finite or both zero
    InvalidBlend,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidSampleRate => "E001",
            ErrorCode::InvalidSlotCount => "E002",
            ErrorCode::UnknownWaveform => "E003",
            ErrorCode::InvalidPrecision => "E004",
            ErrorCode::InvalidBlend => "E005",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Config field the error refers to (e.g., "sample_rate").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a field path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// Top-level error type for config operations.
#[derive(Debug, Error)]
pub enum SpecError {
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result of config validation.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Creates a successful validation result.
    pub fn success() -> Self {
        Self { errors: Vec::new() }
    }

    /// Returns true if validation passed.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Adds an error.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Converts into a `Result`, keeping the first error.
    pub fn into_result(self) -> Result<(), ValidationError> {
        match self.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Common behavior for backend error types, so callers can report them uniformly.
pub trait BackendError: std::error::Error {
    /// Stable machine-readable error code, e.g. "BAND_001".
    fn code(&self) -> &'static str;

    /// Human-readable message; same as `Display` unless overridden.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Error category for grouping related errors.
    fn category(&self) -> &'static str;
}
