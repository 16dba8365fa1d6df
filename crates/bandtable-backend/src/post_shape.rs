//! Gauss post-shaping.
//!
//! The raw Gauss sum is a positive-peaked pulse; it is shifted down and
//! scaled so the table sits in a usable range. The resulting min and max are
//! recorded for diagnostics only; no further renormalization happens.

use bandtable_spec::Waveform;

use crate::real::Real;

/// Offset added to every Gauss sample before scaling.
pub const GAUSS_SHIFT: f64 = -0.9;

/// Scale applied after the shift.
pub const GAUSS_SCALE: f64 = 0.36;

/// Smallest and largest sample of a table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRange {
    /// Minimum sample value.
    pub min: f64,
    /// Maximum sample value.
    pub max: f64,
}

impl SampleRange {
    /// Whether `value` lies within `[min, max]`.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Smallest range covering both.
    pub fn union(self, other: SampleRange) -> SampleRange {
        SampleRange {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

/// Applies the waveform's post-shaping, if any.
///
/// Returns the recorded range for shaped tables, `None` otherwise.
pub fn apply<T: Real>(waveform: Waveform, buffer: &mut [T]) -> Option<SampleRange> {
    match waveform {
        Waveform::Gauss => shape_gauss(buffer),
        Waveform::Saw | Waveform::Square | Waveform::Triangle => None,
    }
}

/// Shifts and scales a Gauss table in place, then scans its range.
///
/// Returns `None` for an empty buffer.
pub fn shape_gauss<T: Real>(buffer: &mut [T]) -> Option<SampleRange> {
    let shift = T::from_f64(GAUSS_SHIFT);
    let scale = T::from_f64(GAUSS_SCALE);
    for sample in buffer.iter_mut() {
        *sample = (*sample + shift) * scale;
    }
    scan_range(buffer)
}

/// Scans a buffer for its smallest and largest samples.
pub fn scan_range<T: Real>(buffer: &[T]) -> Option<SampleRange> {
    let (first, rest) = buffer.split_first()?;
    let mut min = *first;
    let mut max = *first;
    for &sample in rest {
        if sample < min {
            min = sample;
        }
        if sample > max {
            max = sample;
        }
    }
    Some(SampleRange {
        min: min.to_f64(),
        max: max.to_f64(),
    })
}
