//! Table storage: one zeroed buffer per partitioned slot, plus footprint totals.

use bandtable_spec::Precision;

use crate::partition::SlotPlan;
use crate::post_shape::SampleRange;
use crate::real::Real;

/// One wavetable: a single period of the waveform at `canonical_frequency`.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot<T = f64> {
    /// Fundamental frequency in Hz; `canonical_frequency * sample_length == sample_rate`.
    pub canonical_frequency: f64,
    /// Number of samples in `buffer`.
    pub sample_length: usize,
    /// Table samples.
    pub buffer: Vec<T>,
    /// Highest harmonic index at or below Nyquist.
    pub harmonic_count: usize,
    /// Sample range recorded after post-shaping (Gauss only).
    pub range: Option<SampleRange>,
}

impl<T: Real> Slot<T> {
    /// Creates a slot with a zeroed buffer of `plan.sample_length` samples.
    pub fn zeroed(plan: &SlotPlan) -> Self {
        Self {
            canonical_frequency: plan.canonical_frequency,
            sample_length: plan.sample_length,
            buffer: vec![T::ZERO; plan.sample_length],
            harmonic_count: 0,
            range: None,
        }
    }

    /// Converts the buffer to `f64` for width-independent consumers.
    pub fn widen(self) -> Slot<f64> {
        Slot {
            canonical_frequency: self.canonical_frequency,
            sample_length: self.sample_length,
            buffer: self.buffer.into_iter().map(Real::to_f64).collect(),
            harmonic_count: self.harmonic_count,
            range: self.range,
        }
    }
}

/// Owns every slot buffer for a run.
#[derive(Debug, Clone)]
pub struct TableStore<T> {
    slots: Vec<Slot<T>>,
    precision: Precision,
}

impl<T: Real> TableStore<T> {
    /// Allocates one zeroed buffer per plan.
    pub fn allocate(plans: &[SlotPlan], precision: Precision) -> Self {
        Self {
            slots: plans.iter().map(Slot::zeroed).collect(),
            precision,
        }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if there are no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots in partition order.
    pub fn slots(&self) -> &[Slot<T>] {
        &self.slots
    }

    /// Mutable access for synthesis and post-shaping.
    pub fn slots_mut(&mut self) -> &mut [Slot<T>] {
        &mut self.slots
    }

    /// Total number of samples across all slots.
    pub fn total_samples(&self) -> usize {
        self.slots.iter().map(|slot| slot.buffer.len()).sum()
    }

    /// Total buffer footprint in bytes at the configured width.
    pub fn total_bytes(&self) -> usize {
        self.total_samples() * self.precision.byte_width()
    }

    /// BLAKE3 hash over every buffer's little-endian bytes, in slot order.
    pub fn table_hash(&self) -> String {
        let mut bytes = Vec::with_capacity(self.total_samples() * self.precision.byte_width());
        for slot in &self.slots {
            for &sample in &slot.buffer {
                sample.write_le_bytes(&mut bytes);
            }
        }
        blake3::hash(&bytes).to_hex().to_string()
    }

    /// Consumes the store, returning the slots.
    pub fn into_slots(self) -> Vec<Slot<T>> {
        self.slots
    }
}
