//! Bandtable Config Library
//!
//! This crate provides the types, validation, and hashing for bandtable
//! generation configs. A config fully determines a generation run: the same
//! config always produces bit-identical wavetables.
//!
//! # Example
//!
//! ```
//! use bandtable_spec::{canonical_config_hash, validate_config, GenerationConfig, Precision, Waveform};
//!
//! let config = GenerationConfig::new(48000, 32, Waveform::Square)
//!     .with_precision(Precision::Single);
//!
//! assert!(validate_config(&config).is_ok());
//!
//! let hash = canonical_config_hash(&config).unwrap();
//! println!("Config hash: {}", hash);
//! ```
//!
//! # Modules
//!
//! - [`config`]: Waveform, precision, blend, and the generation config
//! - [`error`]: Error codes and validation error types
//! - [`validation`]: Config range checks
//! - [`hash`]: Canonical config hashing

pub mod config;
pub mod error;
pub mod hash;
pub mod validation;

// Re-export commonly used types at the crate root
pub use config::{GenerationConfig, HarmonicBlend, Precision, Waveform};
pub use error::{BackendError, ErrorCode, SpecError, ValidationError, ValidationResult};
pub use hash::{canonical_config_hash, canonical_value_hash};
pub use validation::{validate_config, MAX_SAMPLE_RATE, MAX_SLOT_COUNT};

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_raw_config_round_trips_through_validation_and_hash() {
        let config = GenerationConfig::from_raw(44100, 12, "gauss").expect("valid raw config");
        assert!(validate_config(&config).is_ok());

        let json = serde_json::to_string(&config).unwrap();
        let parsed = GenerationConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
        assert_eq!(
            canonical_config_hash(&parsed).unwrap(),
            canonical_config_hash(&config).unwrap()
        );
    }
}
