//! Additive harmonic synthesis of a single slot.

use super::policy::{HarmonicPolicy, HarmonicTerm};
use crate::error::{BandtableError, BandtableResult};
use crate::real::Real;
use crate::store::Slot;

/// Fills `slot.buffer` by summing harmonics up to Nyquist.
///
/// Harmonics are accumulated in ascending order starting at `h = 1`; the
/// sweep stops at the first harmonic above Nyquist and the last one at or
/// below it is recorded in `slot.harmonic_count`. Each harmonic's phase
/// starts at zero and advances by `2*pi*f/sample_rate` per sample.
///
/// # Errors
/// [`BandtableError::NonTerminatingHarmonicLoop`] if the slot's fundamental
/// is not positive and finite.
pub fn synthesize_slot<T: Real>(
    slot: &mut Slot<T>,
    sample_rate: u32,
    policy: &dyn HarmonicPolicy<T>,
) -> BandtableResult<()> {
    let fundamental = T::from_f64(slot.canonical_frequency);
    if !fundamental.is_finite() || fundamental <= T::ZERO {
        return Err(BandtableError::NonTerminatingHarmonicLoop {
            frequency: slot.canonical_frequency,
        });
    }

    let rate = T::from_f64(sample_rate as f64);
    let nyquist = rate / T::from_f64(2.0);
    let two_pi = T::PI * T::from_f64(2.0);
    let fundamental_increment = two_pi * fundamental / rate;

    let mut harmonic_count = 0;
    let mut harmonic = 1usize;

    loop {
        let frequency = fundamental * T::from_usize(harmonic);
        if frequency > nyquist {
            break;
        }
        harmonic_count = harmonic;

        if policy.includes(harmonic) {
            let gain = policy.gain(harmonic, frequency / nyquist);
            if gain != T::ZERO {
                match policy.term() {
                    HarmonicTerm::HarmonicSine => {
                        let increment = two_pi * frequency / rate;
                        accumulate(&mut slot.buffer, increment, gain, T::sin);
                    }
                    HarmonicTerm::FundamentalCosine => {
                        accumulate(&mut slot.buffer, fundamental_increment, gain, T::cos);
                    }
                }
            }
        }

        harmonic += 1;
    }

    slot.harmonic_count = harmonic_count;
    Ok(())
}

/// Adds `oscillator(phase) * gain` to every sample, advancing the phase by `increment`.
#[inline]
fn accumulate<T: Real>(buffer: &mut [T], increment: T, gain: T, oscillator: fn(T) -> T) {
    let mut phase = T::ZERO;
    for sample in buffer.iter_mut() {
        *sample += oscillator(phase) * gain;
        phase += increment;
    }
}
