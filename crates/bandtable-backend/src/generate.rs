//! Main entry point for wavetable generation.
//!
//! This module takes a config and produces a finished, deterministic set of
//! band-limited tables.

use bandtable_spec::{validate_config, GenerationConfig, Precision};

use crate::error::BandtableResult;
use crate::partition::{partition, SlotPlan};
use crate::post_shape::SampleRange;
use crate::real::Real;
use crate::store::{Slot, TableStore};
use crate::synthesis::{policy_for, render_all};

/// Result of wavetable generation.
#[derive(Debug, Clone)]
pub struct WavetableSet {
    /// Config the set was generated from.
    pub config: GenerationConfig,
    /// Finished slots ordered by increasing frequency.
    pub slots: Vec<Slot<f64>>,
    /// Total samples across all slots.
    pub total_samples: usize,
    /// Total footprint in bytes at the configured width.
    pub total_bytes: usize,
    /// BLAKE3 hash of every buffer in the configured width.
    pub table_hash: String,
}

impl WavetableSet {
    /// Number of slots emitted (at most the requested count).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the set holds no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Canonical frequency of each slot, in slot order.
    pub fn frequencies(&self) -> Vec<f64> {
        self.slots.iter().map(|s| s.canonical_frequency).collect()
    }

    /// Sample length of each slot, in slot order.
    pub fn sample_lengths(&self) -> Vec<usize> {
        self.slots.iter().map(|s| s.sample_length).collect()
    }

    /// Range across every post-shaped slot, if any were shaped.
    pub fn shaped_range(&self) -> Option<SampleRange> {
        self.slots
            .iter()
            .filter_map(|s| s.range)
            .reduce(SampleRange::union)
    }
}

/// Generates wavetables from a config.
///
/// The config is validated first; nothing is computed for an invalid config.
///
/// # Example
/// ```
/// use bandtable_backend::generate;
/// use bandtable_spec::{GenerationConfig, Waveform};
///
/// let set = generate(&GenerationConfig::new(48000, 8, Waveform::Saw)).unwrap();
/// assert!(set.len() <= 8);
/// assert_eq!(set.slots[0].buffer.len(), set.slots[0].sample_length);
/// ```
pub fn generate(config: &GenerationConfig) -> BandtableResult<WavetableSet> {
    validate_config(config).into_result()?;

    match config.precision {
        Precision::Single => generate_with::<f32>(config),
        Precision::Double => generate_with::<f64>(config),
    }
}

/// Runs only the partitioner for a config, in its configured width.
pub fn plan(config: &GenerationConfig) -> BandtableResult<Vec<SlotPlan>> {
    validate_config(config).into_result()?;

    let offset = config.waveform.min_frequency_offset();
    match config.precision {
        Precision::Single => partition::<f32>(config.sample_rate, config.slot_count, offset),
        Precision::Double => partition::<f64>(config.sample_rate, config.slot_count, offset),
    }
}

fn generate_with<T: Real>(config: &GenerationConfig) -> BandtableResult<WavetableSet> {
    let plans = partition::<T>(
        config.sample_rate,
        config.slot_count,
        config.waveform.min_frequency_offset(),
    )?;

    let mut store = TableStore::<T>::allocate(&plans, config.precision);
    let policy = policy_for::<T>(config.waveform, config.blend);
    render_all(
        store.slots_mut(),
        config.sample_rate,
        config.waveform,
        policy.as_ref(),
    )?;

    let total_samples = store.total_samples();
    let total_bytes = store.total_bytes();
    let table_hash = store.table_hash();

    Ok(WavetableSet {
        config: config.clone(),
        slots: store.into_slots().into_iter().map(Slot::widen).collect(),
        total_samples,
        total_bytes,
        table_hash,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BandtableError;
    use bandtable_spec::{ErrorCode, Waveform};

    #[test]
    fn test_invalid_config_fails_fast() {
        let err = generate(&GenerationConfig::new(0, 4, Waveform::Saw)).unwrap_err();
        match err {
            BandtableError::InvalidConfiguration(e) => {
                assert_eq!(e.code, ErrorCode::InvalidSampleRate)
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_single_slot_saw() {
        let set = generate(&GenerationConfig::new(48000, 1, Waveform::Saw)).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.slots[0].buffer[0], 0.0);
        assert_eq!(set.total_samples, set.slots[0].sample_length);
        assert_eq!(set.total_bytes, set.total_samples * 4);
        assert_eq!(set.shaped_range(), None);
    }

    #[test]
    fn test_totals_match_slots() {
        let config =
            GenerationConfig::new(44100, 12, Waveform::Triangle).with_precision(Precision::Double);
        let set = generate(&config).unwrap();
        let sum: usize = set.sample_lengths().iter().sum();
        assert_eq!(set.total_samples, sum);
        assert_eq!(set.total_bytes, sum * 8);
        assert_eq!(set.frequencies().len(), set.len());
    }

    #[test]
    fn test_gauss_records_range() {
        let set = generate(&GenerationConfig::new(48000, 6, Waveform::Gauss)).unwrap();
        for slot in &set.slots {
            let range = slot.range.expect("gauss slots carry a range");
            assert!(slot.buffer.iter().all(|&s| range.contains(s)));
        }
        assert!(set.shaped_range().is_some());
    }

    #[test]
    fn test_plan_matches_generated_slots() {
        let config = GenerationConfig::new(48000, 20, Waveform::Square);
        let plans = plan(&config).unwrap();
        let set = generate(&config).unwrap();
        assert_eq!(
            plans.iter().map(|p| p.sample_length).collect::<Vec<_>>(),
            set.sample_lengths()
        );
    }
}
