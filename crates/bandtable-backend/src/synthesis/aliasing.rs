//! Near-Nyquist roll-off.
//!
//! An empirical steep attenuation applied per harmonic, approximating a
//! low-pass response close to Nyquist. It is not a brick-wall filter: a
//! harmonic is silenced only once one of the cosine factors turns negative
//! (around 81% of Nyquist).

use crate::real::Real;

/// Frequency fraction (of Nyquist) above which the steep factor applies.
pub const STEEP_KNEE: f64 = 0.7;
/// Slope of the steep factor.
pub const STEEP_SLOPE: f64 = 14.0;
/// Frequency fraction above which the shallow factor applies.
pub const SHALLOW_KNEE: f64 = 0.65;
/// Slope of the shallow factor.
pub const SHALLOW_SLOPE: f64 = 10.0;

/// Gain for a harmonic at `freq_fraction` (harmonic frequency / Nyquist).
///
/// Returns zero when either factor is negative.
pub fn attenuation<T: Real>(freq_fraction: T) -> T {
    let mut gain = T::ONE;

    let steep_knee = T::from_f64(STEEP_KNEE);
    if freq_fraction > steep_knee {
        let factor = ((freq_fraction - steep_knee) * T::from_f64(STEEP_SLOPE)).cos();
        if factor < T::ZERO {
            return T::ZERO;
        }
        gain *= factor;
    }

    let shallow_knee = T::from_f64(SHALLOW_KNEE);
    if freq_fraction > shallow_knee {
        let factor = ((freq_fraction - shallow_knee) * T::from_f64(SHALLOW_SLOPE)).cos();
        if factor < T::ZERO {
            return T::ZERO;
        }
        gain *= factor;
    }

    gain
}
