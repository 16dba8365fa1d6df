//! CLI command implementations

pub mod generate;
pub mod json_output;
pub mod stability;

mod reporting;

use bandtable_spec::{validate_config, GenerationConfig, Precision, ValidationError};
use std::process::ExitCode;

use crate::emit::OutputFormat;

/// Arguments shared by every command, as given on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    /// Raw sample rate; checked by [`GenerateRequest::config`].
    pub sample_rate: i64,
    /// Raw slot count.
    pub slot_count: i64,
    /// Waveform name, case-insensitive.
    pub waveform: String,
    /// Precision name (`single` or `double`).
    pub precision: String,
    /// Output language.
    pub format: OutputFormat,
    /// Output file; stdout when `None`.
    pub output: Option<String>,
    /// Emit a JSON summary instead of colored text.
    pub json: bool,
}

impl GenerateRequest {
    /// Creates a request with default precision, format, and output.
    pub fn new(sample_rate: i64, slot_count: i64, waveform: impl Into<String>) -> Self {
        Self {
            sample_rate,
            slot_count,
            waveform: waveform.into(),
            precision: Precision::default().as_str().to_string(),
            format: OutputFormat::default(),
            output: None,
            json: false,
        }
    }

    /// Builds and validates the generation config.
    ///
    /// Every problem is reported, not only the first.
    pub fn config(&self) -> Result<GenerationConfig, Vec<ValidationError>> {
        let precision = self.precision.parse::<Precision>();
        let config = GenerationConfig::from_raw(self.sample_rate, self.slot_count, &self.waveform);

        let config = match (config, precision) {
            (Ok(config), Ok(precision)) => config.with_precision(precision),
            (Ok(_), Err(e)) => return Err(vec![e]),
            (Err(errors), Ok(_)) => return Err(errors),
            (Err(mut errors), Err(e)) => {
                errors.push(e);
                return Err(errors);
            }
        };

        let validation = validate_config(&config);
        if validation.is_ok() {
            Ok(config)
        } else {
            Err(validation.errors)
        }
    }
}

/// Outcome of a command, mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Exit code 0.
    Success,
    /// Exit code 1: the config was rejected before generation.
    InvalidConfig,
    /// Exit code 2: generation failed.
    GenerationFailed,
    /// Exit code 3: the output could not be written.
    OutputFailed,
}

impl Status {
    /// Numeric exit code.
    pub fn code(self) -> u8 {
        match self {
            Status::Success => 0,
            Status::InvalidConfig => 1,
            Status::GenerationFailed => 2,
            Status::OutputFailed => 3,
        }
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        ExitCode::from(status.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bandtable_spec::{ErrorCode, Waveform};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_config_from_request() {
        let mut request = GenerateRequest::new(44100, 16, "triangle");
        request.precision = "double".to_string();
        let config = request.config().unwrap();
        assert_eq!(config.sample_rate, 44100);
        assert_eq!(config.slot_count, 16);
        assert_eq!(config.waveform, Waveform::Triangle);
        assert_eq!(config.precision, Precision::Double);
    }

    #[test]
    fn test_all_errors_collected() {
        let mut request = GenerateRequest::new(-1, 0, "sine");
        request.precision = "half".to_string();
        let codes: Vec<ErrorCode> = request.config().unwrap_err().iter().map(|e| e.code).collect();
        assert_eq!(
            codes,
            vec![
                ErrorCode::InvalidSampleRate,
                ErrorCode::InvalidSlotCount,
                ErrorCode::UnknownWaveform,
                ErrorCode::InvalidPrecision,
            ]
        );
    }

    #[test]
    fn test_range_checked_after_parsing() {
        let request = GenerateRequest::new(10_000_000, 4, "Saw");
        let errors = request.config().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, ErrorCode::InvalidSampleRate);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(Status::Success.code(), 0);
        assert_eq!(Status::InvalidConfig.code(), 1);
        assert_eq!(Status::GenerationFailed.code(), 2);
        assert_eq!(Status::OutputFailed.code(), 3);
    }
}
