//! Config validation.
//!
//! Range checks run before any partitioning or synthesis so that a bad
//! config fails fast with a stable error code.

use crate::config::{GenerationConfig, HarmonicBlend};
use crate::error::{ErrorCode, ValidationError, ValidationResult};

/// Highest accepted sample rate in Hz.
pub const MAX_SAMPLE_RATE: u32 = 768_000;

/// Highest accepted requested slot count.
///
/// Every slot holds at least one sample per harmonic sweep, so this bounds
/// memory and run time for malformed input.
pub const MAX_SLOT_COUNT: u32 = 4096;

/// Validates a generation config.
///
/// # Returns
/// A [`ValidationResult`] listing every problem found, in field order.
///
/// # Example
/// ```
/// use bandtable_spec::{validate_config, GenerationConfig, Waveform};
///
/// let config = GenerationConfig::new(48000, 16, Waveform::Saw);
/// assert!(validate_config(&config).is_ok());
///
/// let config = GenerationConfig::new(0, 16, Waveform::Saw);
/// assert!(!validate_config(&config).is_ok());
/// ```
pub fn validate_config(config: &GenerationConfig) -> ValidationResult {
    let mut result = ValidationResult::success();

    if let Err(e) = validate_sample_rate(config.sample_rate) {
        result.add_error(e);
    }
    if let Err(e) = validate_slot_count(config.slot_count) {
        result.add_error(e);
    }
    if let Err(e) = validate_blend(&config.blend) {
        result.add_error(e);
    }

    result
}

/// Validate that the sample rate is in `1..=MAX_SAMPLE_RATE`.
///
/// # Example
/// ```
/// use bandtable_spec::validation::validate_sample_rate;
///
/// assert!(validate_sample_rate(48000).is_ok());
/// assert!(validate_sample_rate(0).is_err());
/// ```
pub fn validate_sample_rate(sample_rate: u32) -> Result<(), ValidationError> {
    if sample_rate == 0 {
        return Err(ValidationError::with_path(
            ErrorCode::InvalidSampleRate,
            "sample rate must be positive, got 0",
            "sample_rate",
        ));
    }
    if sample_rate > MAX_SAMPLE_RATE {
        return Err(ValidationError::with_path(
            ErrorCode::InvalidSampleRate,
            format!(
                "sample rate must be <= {} Hz, got {}",
                MAX_SAMPLE_RATE, sample_rate
            ),
            "sample_rate",
        ));
    }
    Ok(())
}

/// Validate that the requested slot count is in `1..=MAX_SLOT_COUNT`.
pub fn validate_slot_count(slot_count: u32) -> Result<(), ValidationError> {
    if slot_count == 0 {
        return Err(ValidationError::with_path(
            ErrorCode::InvalidSlotCount,
            "slot count must be at least 1, got 0",
            "slot_count",
        ));
    }
    if slot_count > MAX_SLOT_COUNT {
        return Err(ValidationError::with_path(
            ErrorCode::InvalidSlotCount,
            format!(
                "slot count must be <= {}, got {}",
                MAX_SLOT_COUNT, slot_count
            ),
            "slot_count",
        ));
    }
    Ok(())
}

/// Validate that blend coefficients are finite, non-negative, and not both zero.
pub fn validate_blend(blend: &HarmonicBlend) -> Result<(), ValidationError> {
    for (name, value) in [("blend.clean", blend.clean), ("blend.ugly", blend.ugly)] {
        if !value.is_finite() {
            return Err(ValidationError::with_path(
                ErrorCode::InvalidBlend,
                format!("{} must be finite, got {}", name, value),
                name,
            ));
        }
        if value < 0.0 {
            return Err(ValidationError::with_path(
                ErrorCode::InvalidBlend,
                format!("{} must be non-negative, got {}", name, value),
                name,
            ));
        }
    }
    if blend.clean == 0.0 && blend.ugly == 0.0 {
        return Err(ValidationError::with_path(
            ErrorCode::InvalidBlend,
            "blend coefficients must not both be zero",
            "blend",
        ));
    }
    Ok(())
}
