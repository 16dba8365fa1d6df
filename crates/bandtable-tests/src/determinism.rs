//! Determinism checks for wavetable generation.
//!
//! Generation must be bit-reproducible: the same config always yields the
//! same tables and the same emitted source. This module runs a generation
//! closure several times and compares the outputs sample by sample.
//!
//! # Example
//!
//! ```
//! use bandtable_spec::{GenerationConfig, Waveform};
//! use bandtable_tests::determinism::verify_generation;
//!
//! let result = verify_generation(&GenerationConfig::new(48000, 8, Waveform::Saw), 3);
//! result.assert_deterministic();
//! ```

use bandtable_backend::{generate, WavetableSet};
use bandtable_spec::GenerationConfig;
use std::fmt;

/// Result of a determinism check.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether every run produced identical output.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// Number of samples in the reference output.
    pub sample_count: usize,
    /// BLAKE3 hash of the reference output.
    pub hash: String,
    /// First difference found, if any.
    pub diff: Option<SampleDiff>,
}

/// First differing sample between two runs.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleDiff {
    /// Slot index.
    pub slot: usize,
    /// Sample index within the slot.
    pub sample: usize,
    /// Value from the first run.
    pub expected: f64,
    /// Value from the differing run (NaN when the slot is too short).
    pub actual: f64,
    /// Which run (0-indexed) differed.
    pub run_index: usize,
}

impl fmt::Display for SampleDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "slot {} sample {}: expected {:e}, got {:e} (run {})",
            self.slot, self.sample, self.expected, self.actual, self.run_index
        )
    }
}

impl DeterminismResult {
    /// Panics with a detailed message if the runs differed.
    pub fn assert_deterministic(&self) {
        if let Some(diff) = &self.diff {
            panic!(
                "Non-deterministic output detected!\n\
                 Runs: {}\n\
                 Samples: {}\n\
                 Hash: {}\n\
                 {}",
                self.runs, self.sample_count, self.hash, diff
            );
        }
    }
}

/// Little-endian bytes of every slot buffer, in slot order.
pub fn table_bytes(set: &WavetableSet) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(set.total_samples * 8);
    for slot in &set.slots {
        for sample in &slot.buffer {
            bytes.extend_from_slice(&sample.to_le_bytes());
        }
    }
    bytes
}

/// Runs `generate_fn` `runs` times and compares every output with the first.
///
/// # Panics
/// If `runs < 2`.
pub fn verify_determinism<F>(generate_fn: F, runs: usize) -> DeterminismResult
where
    F: Fn() -> WavetableSet,
{
    assert!(runs >= 2, "Must run at least 2 times to verify determinism");

    let reference = generate_fn();
    let hash = blake3::hash(&table_bytes(&reference)).to_hex().to_string();

    for run_index in 1..runs {
        let output = generate_fn();
        if let Some(diff) = find_first_difference(&reference, &output, run_index) {
            return DeterminismResult {
                is_deterministic: false,
                runs,
                sample_count: reference.total_samples,
                hash,
                diff: Some(diff),
            };
        }
    }

    DeterminismResult {
        is_deterministic: true,
        runs,
        sample_count: reference.total_samples,
        hash,
        diff: None,
    }
}

/// Generates `config` `runs` times and compares the results.
pub fn verify_generation(config: &GenerationConfig, runs: usize) -> DeterminismResult {
    verify_determinism(
        || generate(config).expect("generation should succeed"),
        runs,
    )
}

/// Returns true if every hash in `hashes` is equal.
pub fn hashes_match(hashes: &[String]) -> bool {
    hashes.windows(2).all(|pair| pair[0] == pair[1])
}

fn find_first_difference(
    expected: &WavetableSet,
    actual: &WavetableSet,
    run_index: usize,
) -> Option<SampleDiff> {
    let slot_count = expected.slots.len().max(actual.slots.len());
    for slot in 0..slot_count {
        let a = expected.slots.get(slot).map(|s| s.buffer.as_slice()).unwrap_or(&[]);
        let b = actual.slots.get(slot).map(|s| s.buffer.as_slice()).unwrap_or(&[]);
        let len = a.len().max(b.len());
        for sample in 0..len {
            let x = a.get(sample).copied().unwrap_or(f64::NAN);
            let y = b.get(sample).copied().unwrap_or(f64::NAN);
            if x.to_bits() != y.to_bits() {
                return Some(SampleDiff {
                    slot,
                    sample,
                    expected: x,
                    actual: y,
                    run_index,
                });
            }
        }
    }
    None
}
