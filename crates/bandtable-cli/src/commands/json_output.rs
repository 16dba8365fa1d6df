//! JSON output types for machine-readable CLI output.
//!
//! These types back the `--json` flag. The document is written to stderr so
//! stdout stays reserved for generated source.

use bandtable_backend::{SlotDeviation, StabilityReport, WavetableSet};
use bandtable_spec::{BackendError, GenerationConfig, ValidationError};
use serde::{Deserialize, Serialize};

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
/// Format: CLI_XXX for CLI-level errors; config and backend errors pass
/// through their own codes.
pub mod error_codes {
    /// Output file could not be written
    pub const OUTPUT_WRITE: &str = "CLI_001";
    /// JSON serialization error
    pub const JSON_SERIALIZE: &str = "CLI_002";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "E001", "BAND_002", "CLI_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Config field the error refers to (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }

    /// Sets the config field for this error.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// Converts a config validation error.
pub fn validation_error_to_json(err: &ValidationError) -> JsonError {
    let json = JsonError::new(err.code.code(), &err.message);
    match &err.path {
        Some(path) => json.with_path(path),
        None => json,
    }
}

/// Converts a backend error.
pub fn backend_error_to_json<E: BackendError>(err: &E) -> JsonError {
    JsonError::new(err.code(), err.message())
}

/// One slot in the JSON summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonSlot {
    /// Slot index
    pub index: usize,
    /// Canonical fundamental frequency in Hz
    pub frequency: f64,
    /// Table length in samples
    pub sample_length: usize,
    /// Highest harmonic at or below Nyquist
    pub harmonic_count: usize,
}

/// Sample range of post-shaped tables.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct JsonRange {
    /// Smallest sample
    pub min: f64,
    /// Largest sample
    pub max: f64,
}

/// JSON output for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOutput {
    /// Whether generation succeeded
    pub success: bool,
    /// Config used for the run (absent if it could not be built)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<GenerationConfig>,
    /// Canonical config hash
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_hash: Option<String>,
    /// Emitted slots
    pub slots: Vec<JsonSlot>,
    /// Total samples across all slots
    pub total_samples: usize,
    /// Total footprint in bytes
    pub total_bytes: usize,
    /// Range across all Gauss tables
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gauss_range: Option<JsonRange>,
    /// BLAKE3 hash of the table data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_hash: Option<String>,
    /// Output file, if not stdout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Errors encountered
    pub errors: Vec<JsonError>,
}

impl GenerateOutput {
    /// Creates a successful output from a finished set.
    pub fn success(set: &WavetableSet, config_hash: Option<String>, output: Option<String>) -> Self {
        Self {
            success: true,
            config: Some(set.config.clone()),
            config_hash,
            slots: set
                .slots
                .iter()
                .enumerate()
                .map(|(index, slot)| JsonSlot {
                    index,
                    frequency: slot.canonical_frequency,
                    sample_length: slot.sample_length,
                    harmonic_count: slot.harmonic_count,
                })
                .collect(),
            total_samples: set.total_samples,
            total_bytes: set.total_bytes,
            gauss_range: set
                .shaped_range()
                .map(|r| JsonRange { min: r.min, max: r.max }),
            table_hash: Some(set.table_hash.clone()),
            output,
            errors: Vec::new(),
        }
    }

    /// Creates a failed output.
    pub fn failure(config: Option<GenerationConfig>, errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            config,
            config_hash: None,
            slots: Vec::new(),
            total_samples: 0,
            total_bytes: 0,
            gauss_range: None,
            table_hash: None,
            output: None,
            errors,
        }
    }
}

/// JSON output for `--check-stability`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StabilityOutput {
    /// Whether the check ran and both widths produced the same slots
    pub success: bool,
    /// Config checked (precision is ignored)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<GenerationConfig>,
    /// Whether both widths produced the same slot lengths
    pub plans_match: bool,
    /// Slots produced in single precision
    pub single_slots: usize,
    /// Slots produced in double precision
    pub double_slots: usize,
    /// Largest absolute deviation across all compared slots
    pub max_abs_deviation: f64,
    /// Per-slot deviations
    pub slots: Vec<JsonSlotDeviation>,
    /// Errors encountered
    pub errors: Vec<JsonError>,
}

/// Per-slot deviation in the stability output.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct JsonSlotDeviation {
    /// Slot index
    pub index: usize,
    /// Table length in samples
    pub sample_length: usize,
    /// Largest absolute sample difference
    pub max_abs_deviation: f64,
}

impl From<&SlotDeviation> for JsonSlotDeviation {
    fn from(d: &SlotDeviation) -> Self {
        Self {
            index: d.index,
            sample_length: d.sample_length,
            max_abs_deviation: d.max_abs_deviation,
        }
    }
}

impl StabilityOutput {
    /// Creates an output from a finished report.
    pub fn from_report(config: GenerationConfig, report: &StabilityReport) -> Self {
        Self {
            success: report.plans_match,
            config: Some(config),
            plans_match: report.plans_match,
            single_slots: report.single_slots,
            double_slots: report.double_slots,
            max_abs_deviation: report.max_abs_deviation,
            slots: report.slots.iter().map(JsonSlotDeviation::from).collect(),
            errors: Vec::new(),
        }
    }

    /// Creates a failed output.
    pub fn failure(config: Option<GenerationConfig>, errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            config,
            plans_match: false,
            single_slots: 0,
            double_slots: 0,
            max_abs_deviation: 0.0,
            slots: Vec::new(),
            errors,
        }
    }
}

/// Serializes a JSON document, falling back to a minimal error document.
pub fn to_json_string<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        format!(
            "{{\"success\":false,\"errors\":[{{\"code\":\"{}\",\"message\":\"{}\"}}]}}",
            error_codes::JSON_SERIALIZE,
            e.to_string().replace('"', "'")
        )
    })
}
