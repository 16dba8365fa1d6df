//! Numerical-stability validation.
//!
//! Generates the same config in single and double precision and measures how
//! far the single-precision tables drift from the extended-precision ones.

use bandtable_spec::{GenerationConfig, Precision};

use crate::error::BandtableResult;
use crate::generate::{generate, WavetableSet};

/// Deviation of one single-precision slot from its double-precision counterpart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotDeviation {
    /// Slot index.
    pub index: usize,
    /// Table length shared by both widths.
    pub sample_length: usize,
    /// Largest absolute sample difference.
    pub max_abs_deviation: f64,
}

/// Outcome of a stability check.
#[derive(Debug, Clone, PartialEq)]
pub struct StabilityReport {
    /// Whether both widths produced the same slot lengths.
    pub plans_match: bool,
    /// Slots produced in single precision.
    pub single_slots: usize,
    /// Slots produced in double precision.
    pub double_slots: usize,
    /// Per-slot deviations for slots whose lengths agree.
    pub slots: Vec<SlotDeviation>,
    /// Largest deviation across all compared slots.
    pub max_abs_deviation: f64,
}

impl StabilityReport {
    /// Whether the plans agree and every compared sample is within `tolerance`.
    pub fn is_within(&self, tolerance: f64) -> bool {
        self.plans_match && self.max_abs_deviation <= tolerance
    }

    /// The slot with the largest deviation, if any slot was compared.
    pub fn worst_slot(&self) -> Option<&SlotDeviation> {
        self.slots
            .iter()
            .max_by(|a, b| a.max_abs_deviation.total_cmp(&b.max_abs_deviation))
    }
}

/// Runs `config` at both widths and compares the results.
///
/// The config's own precision is ignored.
pub fn check_stability(config: &GenerationConfig) -> BandtableResult<StabilityReport> {
    let single = generate(&config.clone().with_precision(Precision::Single))?;
    let double = generate(&config.clone().with_precision(Precision::Double))?;
    Ok(compare(&single, &double))
}

fn compare(single: &WavetableSet, double: &WavetableSet) -> StabilityReport {
    let plans_match = single.sample_lengths() == double.sample_lengths();

    let slots: Vec<SlotDeviation> = single
        .slots
        .iter()
        .zip(&double.slots)
        .enumerate()
        .filter(|(_, (a, b))| a.sample_length == b.sample_length)
        .map(|(index, (a, b))| SlotDeviation {
            index,
            sample_length: a.sample_length,
            max_abs_deviation: a
                .buffer
                .iter()
                .zip(&b.buffer)
                .map(|(x, y)| (x - y).abs())
                .fold(0.0, f64::max),
        })
        .collect();

    let max_abs_deviation = slots
        .iter()
        .map(|s| s.max_abs_deviation)
        .fold(0.0, f64::max);

    StabilityReport {
        plans_match,
        single_slots: single.len(),
        double_slots: double.len(),
        slots,
        max_abs_deviation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bandtable_spec::Waveform;

    #[test]
    fn test_saw_is_stable() {
        let report = check_stability(&GenerationConfig::new(48000, 16, Waveform::Saw)).unwrap();
        assert!(report.plans_match);
        assert_eq!(report.single_slots, report.double_slots);
        assert_eq!(report.slots.len(), report.single_slots);
        assert!(report.max_abs_deviation > 0.0);
        assert!(report.is_within(5e-2), "{:?}", report.worst_slot());
    }

    #[test]
    fn test_precision_in_config_is_ignored() {
        let single = GenerationConfig::new(44100, 8, Waveform::Triangle);
        let double = single.clone().with_precision(Precision::Double);
        assert_eq!(
            check_stability(&single).unwrap(),
            check_stability(&double).unwrap()
        );
    }

    #[test]
    fn test_is_within_requires_matching_plans() {
        let report = StabilityReport {
            plans_match: false,
            single_slots: 3,
            double_slots: 4,
            slots: vec![],
            max_abs_deviation: 0.0,
        };
        assert!(!report.is_within(1.0));
        assert!(report.worst_slot().is_none());
    }

    #[test]
    fn test_invalid_config_propagates() {
        assert!(check_stability(&GenerationConfig::new(48000, 0, Waveform::Gauss)).is_err());
    }
}
