//! Property-based tests for bandtable using proptest.
//!
//! These tests check partition and synthesis invariants over arbitrary
//! sample rates, slot counts, and waveforms, and check that config parsing
//! never panics.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p bandtable-tests --test proptest_validation
//! ```

use proptest::prelude::*;

use bandtable_backend::{generate, partition};
use bandtable_spec::{
    validate_config, ErrorCode, GenerationConfig, Precision, Waveform, MAX_SAMPLE_RATE,
    MAX_SLOT_COUNT,
};

fn waveform() -> impl Strategy<Value = Waveform> {
    prop::sample::select(Waveform::ALL.to_vec())
}

fn sample_rate() -> impl Strategy<Value = u32> {
    prop_oneof![
        Just(44100u32),
        Just(48000u32),
        Just(96000u32),
        1u32..=192_000,
    ]
}

// ============================================================================
// 1. Partitioner
// ============================================================================

proptest! {
    /// Emitted slots never exceed the request and lengths strictly decrease.
    #[test]
    fn partition_lengths_strictly_decrease(
        rate in sample_rate(),
        count in 1u32..=512,
        wave in waveform(),
    ) {
        let plans = partition::<f32>(rate, count, wave.min_frequency_offset()).unwrap();
        prop_assert!(!plans.is_empty());
        prop_assert!(plans.len() <= count as usize);
        for pair in plans.windows(2) {
            prop_assert!(pair[1].sample_length < pair[0].sample_length);
        }
    }

    /// Every slot holds an exact integer period.
    #[test]
    fn partition_frequency_times_length_is_rate(
        rate in sample_rate(),
        count in 1u32..=256,
        wave in waveform(),
    ) {
        for plan in partition::<f64>(rate, count, wave.min_frequency_offset()).unwrap() {
            prop_assert!(plan.sample_length >= 1);
            let product = plan.canonical_frequency * plan.sample_length as f64;
            prop_assert!((product - rate as f64).abs() <= rate as f64 * 1e-12);
        }
    }

    /// A single requested slot always yields exactly one slot.
    #[test]
    fn single_slot_request_yields_one(rate in sample_rate(), wave in waveform()) {
        let plans = partition::<f32>(rate, 1, wave.min_frequency_offset()).unwrap();
        prop_assert_eq!(plans.len(), 1);
    }
}

// ============================================================================
// 2. Synthesis
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// The harmonic sweep stops exactly at Nyquist.
    #[test]
    fn harmonic_count_bounded_by_nyquist(
        rate in 8000u32..=96_000,
        count in 1u32..=24,
        wave in waveform(),
    ) {
        let config = GenerationConfig::new(rate, count, wave).with_precision(Precision::Double);
        let set = generate(&config).unwrap();
        let nyquist = rate as f64 / 2.0;
        for slot in &set.slots {
            let f0 = slot.canonical_frequency;
            let h = slot.harmonic_count as f64;
            // Relative slack for values that land exactly on Nyquist.
            prop_assert!(h * f0 <= nyquist * (1.0 + 1e-9));
            prop_assert!((h + 1.0) * f0 > nyquist * (1.0 - 1e-9));
        }
    }

    /// Buffers match their lengths and hold only finite samples.
    #[test]
    fn buffers_are_finite(
        rate in 8000u32..=96_000,
        count in 1u32..=24,
        wave in waveform(),
    ) {
        let set = generate(&GenerationConfig::new(rate, count, wave)).unwrap();
        for slot in &set.slots {
            prop_assert_eq!(slot.buffer.len(), slot.sample_length);
            prop_assert!(slot.buffer.iter().all(|s| s.is_finite()));
        }
    }

    /// Gauss tables lie within their recorded range.
    #[test]
    fn gauss_samples_within_range(rate in 8000u32..=96_000, count in 1u32..=16) {
        let set = generate(&GenerationConfig::new(rate, count, Waveform::Gauss)).unwrap();
        for slot in &set.slots {
            let range = slot.range.unwrap();
            prop_assert!(slot.buffer.iter().all(|&s| range.min <= s && s <= range.max));
        }
    }
}

// ============================================================================
// 3. Config parsing
// ============================================================================

proptest! {
    /// Arbitrary raw input never panics and valid input always parses.
    #[test]
    fn from_raw_never_panics(rate in any::<i64>(), count in any::<i64>(), name in "\\PC{0,12}") {
        let _ = GenerationConfig::from_raw(rate, count, &name);
    }

    /// Waveform names are case-insensitive.
    #[test]
    fn waveform_names_case_insensitive(wave in waveform(), upper in any::<bool>()) {
        let name = if upper {
            wave.as_str().to_ascii_uppercase()
        } else {
            wave.as_str().to_ascii_lowercase()
        };
        let config = GenerationConfig::from_raw(48000, 4, &name).unwrap();
        prop_assert_eq!(config.waveform, wave);
    }

    /// Non-positive sample rates are rejected with E001.
    #[test]
    fn non_positive_rate_rejected(rate in i64::MIN..=0) {
        let errors = GenerationConfig::from_raw(rate, 4, "saw").unwrap_err();
        prop_assert_eq!(errors[0].code, ErrorCode::InvalidSampleRate);
    }

    /// Range validation accepts exactly the documented bounds.
    #[test]
    fn validation_matches_bounds(rate in 1u32..=2_000_000, count in 1u32..=10_000) {
        let config = GenerationConfig::new(rate, count, Waveform::Saw);
        let expected = rate <= MAX_SAMPLE_RATE && count <= MAX_SLOT_COUNT;
        prop_assert_eq!(validate_config(&config).is_ok(), expected);
    }
}
