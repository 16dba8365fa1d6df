//! Frequency partitioning.
//!
//! Converts a requested slot count into log-spaced, strictly decreasing
//! integer table lengths covering the audible range. Each candidate position
//! is mapped through a 1000-point exponential curve (0.001 to 1.0), scaled by
//! Nyquist and offset by a waveform-specific floor. Lengths are rounded to
//! whole samples and the frequency is recomputed from the rounded length so
//! every table holds an exact integer period.
//!
//! Candidates that round to an already-used length are discarded; the
//! [`CandidateCursor`] shrinks the remaining slot budget on each discard, so
//! the emitted slot count can be lower than requested.

use crate::error::{BandtableError, BandtableResult};
use crate::real::{to_usize, Real};

/// Number of points in the exponential lookup curve.
pub const LOG_CURVE_POINTS: usize = 1000;

/// Lowest value of the lookup curve (as a fraction of Nyquist).
pub const LOG_CURVE_FLOOR: f64 = 0.001;

/// Exponential curve sweeping [`LOG_CURVE_FLOOR`] to 1.0 over [`LOG_CURVE_POINTS`] steps.
#[derive(Debug, Clone)]
pub struct LogCurve<T> {
    points: Vec<T>,
}

impl<T: Real> LogCurve<T> {
    /// Builds the curve: `exp((ln 1 - ln 0.001) * i/N + ln 0.001)`.
    pub fn new() -> Self {
        let low = T::from_f64(LOG_CURVE_FLOOR).ln();
        let high = T::ONE.ln();
        let n = T::from_usize(LOG_CURVE_POINTS);

        let points = (0..LOG_CURVE_POINTS)
            .map(|i| ((high - low) * (T::from_usize(i) / n) + low).exp())
            .collect();

        Self { points }
    }

    /// Looks up the entry at or below `fraction` (clamped to `[0, 1)`).
    pub fn lookup(&self, fraction: T) -> T {
        let index = to_usize((fraction * T::from_usize(LOG_CURVE_POINTS)).floor());
        self.points[index.min(LOG_CURVE_POINTS - 1)]
    }

    /// Curve points in ascending order.
    pub fn points(&self) -> &[T] {
        &self.points
    }
}

impl<T: Real> Default for LogCurve<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Position generator for partition candidates.
///
/// A candidate sits at `(accepted + skipped) / (slot_budget + skipped)` along
/// the curve. Rejecting a candidate moves to the next position and shrinks
/// the budget by one, so collisions consume requested slots instead of
/// extending the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateCursor {
    accepted: u32,
    skipped: u32,
    slot_budget: u32,
}

impl CandidateCursor {
    /// Starts a cursor for `requested` slots.
    pub fn new(requested: u32) -> Self {
        Self {
            accepted: 0,
            skipped: 0,
            slot_budget: requested,
        }
    }

    /// True once every remaining budgeted slot has been accepted.
    pub fn is_exhausted(&self) -> bool {
        self.accepted >= self.slot_budget
    }

    /// Numerator of the current candidate position.
    pub fn position(&self) -> u32 {
        self.accepted + self.skipped
    }

    /// Denominator of the current candidate position.
    pub fn denominator(&self) -> u32 {
        self.slot_budget + self.skipped
    }

    /// Current candidate position as a fraction in `[0, 1)`.
    pub fn fraction<T: Real>(&self) -> T {
        T::from_usize(self.position() as usize) / T::from_usize(self.denominator() as usize)
    }

    /// Accepts the current candidate.
    pub fn accept(&mut self) {
        self.accepted += 1;
    }

    /// Discards the current candidate and gives up one budgeted slot.
    pub fn reject(&mut self) {
        self.skipped += 1;
        self.slot_budget = self.slot_budget.saturating_sub(1);
    }

    /// Number of accepted candidates.
    pub fn accepted(&self) -> u32 {
        self.accepted
    }

    /// Number of discarded candidates.
    pub fn skipped(&self) -> u32 {
        self.skipped
    }

    /// Slots still allowed, including already accepted ones.
    pub fn slot_budget(&self) -> u32 {
        self.slot_budget
    }
}

/// Frequency and length of one partitioned slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotPlan {
    /// `sample_rate / sample_length`, evaluated in the generation width.
    pub canonical_frequency: f64,
    /// Table length in samples (one full period).
    pub sample_length: usize,
}

/// Partitions the audible range into slots.
///
/// # Arguments
/// * `sample_rate` - Sample rate in Hz
/// * `requested` - Requested slot count
/// * `min_frequency_offset` - Hz added to every target frequency
///
/// # Returns
/// Slots ordered by increasing frequency (strictly decreasing length).
pub fn partition<T: Real>(
    sample_rate: u32,
    requested: u32,
    min_frequency_offset: f64,
) -> BandtableResult<Vec<SlotPlan>> {
    if sample_rate == 0 {
        return Err(BandtableError::invalid_param(
            "sample_rate",
            "must be positive",
        ));
    }
    if requested == 0 {
        return Err(BandtableError::invalid_param(
            "slot_count",
            "must be at least 1",
        ));
    }

    let curve = LogCurve::<T>::new();
    let rate = T::from_f64(sample_rate as f64);
    let nyquist = rate / T::from_f64(2.0);
    let offset = T::from_f64(min_frequency_offset);

    let mut cursor = CandidateCursor::new(requested);
    let mut plans: Vec<SlotPlan> = Vec::with_capacity(requested as usize);

    while !cursor.is_exhausted() {
        let target = curve.lookup(cursor.fraction::<T>()) * nyquist + offset;
        let sample_length = to_usize((rate / target).round()).max(1);

        let collides = plans
            .last()
            .is_some_and(|prev| sample_length >= prev.sample_length);
        if collides {
            cursor.reject();
            continue;
        }

        let canonical_frequency = rate / T::from_usize(sample_length);
        plans.push(SlotPlan {
            canonical_frequency: canonical_frequency.to_f64(),
            sample_length,
        });
        cursor.accept();
    }

    if plans.is_empty() {
        return Err(BandtableError::DegenerateSlotSet { requested });
    }

    Ok(plans)
}
