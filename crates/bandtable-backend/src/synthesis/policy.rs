//! Per-waveform harmonic weighting.
//!
//! Each waveform decides which harmonics contribute, how strongly, and with
//! which oscillator term. The amplitude laws follow the classic Fourier
//! series (1/h for Saw and Square, 1/h^2 for Triangle) with a few empirical
//! tweaks to the Saw spectrum.

use bandtable_spec::{HarmonicBlend, Waveform};

use super::aliasing::attenuation;
use crate::real::Real;

/// Amplitude applied to every filtered sine term (not used by Gauss).
pub const BASE_AMPLITUDE: f64 = 0.4;

/// Oscillator term summed for each harmonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarmonicTerm {
    /// `sin` of the harmonic's own phase.
    HarmonicSine,
    /// `cos` of the fundamental's phase, whatever the harmonic index.
    FundamentalCosine,
}

/// Harmonic weighting policy for one waveform.
pub trait HarmonicPolicy<T: Real>: Send + Sync {
    /// Waveform this policy renders.
    fn waveform(&self) -> Waveform;

    /// Whether harmonic `h` (1-based) contributes.
    fn includes(&self, harmonic: usize) -> bool {
        !self.waveform().odd_harmonics_only() || harmonic % 2 == 1
    }

    /// Signed weight for harmonic `h` at `freq_fraction` (harmonic frequency / Nyquist),
    /// before the aliasing filter and base amplitude.
    fn weight(&self, harmonic: usize, freq_fraction: T) -> T;

    /// Oscillator term summed for each harmonic.
    fn term(&self) -> HarmonicTerm {
        HarmonicTerm::HarmonicSine
    }

    /// Whether the near-Nyquist aliasing filter applies.
    fn filtered(&self) -> bool {
        self.waveform().uses_aliasing_filter()
    }

    /// Amplitude applied on top of the weight.
    fn base_amplitude(&self) -> T {
        T::from_f64(BASE_AMPLITUDE)
    }

    /// Total gain for harmonic `h`: base amplitude, aliasing filter, and weight.
    fn gain(&self, harmonic: usize, freq_fraction: T) -> T {
        let filter = if self.filtered() {
            attenuation(freq_fraction)
        } else {
            T::ONE
        };
        if filter == T::ZERO {
            return T::ZERO;
        }
        self.base_amplitude() * filter * self.weight(harmonic, freq_fraction)
    }
}

/// Sawtooth: every harmonic, `0.1/sqrt(h)` weighting with even and 3rd-harmonic boosts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SawPolicy {
    /// Mix of the `0.1/sqrt(h)` and `1/h` weightings.
    pub blend: HarmonicBlend,
}

/// Gain on even harmonics.
const SAW_EVEN_BOOST: f64 = 1.1;
/// Gain on the 3rd harmonic.
const SAW_THIRD_BOOST: f64 = 1.3;
/// Scale on the `1/sqrt(h)` weighting.
const SAW_CLEAN_SCALE: f64 = 0.1;

impl<T: Real> HarmonicPolicy<T> for SawPolicy {
    fn waveform(&self) -> Waveform {
        Waveform::Saw
    }

    fn weight(&self, harmonic: usize, freq_fraction: T) -> T {
        let h = T::from_usize(harmonic);
        let clean = T::from_f64(SAW_CLEAN_SCALE) / h.sqrt();
        let ugly = T::ONE / h;
        let mut weight =
            clean * T::from_f64(self.blend.clean) + ugly * T::from_f64(self.blend.ugly);

        if harmonic % 2 == 0 {
            weight *= T::from_f64(SAW_EVEN_BOOST);
        }
        if harmonic == 3 {
            weight *= T::from_f64(SAW_THIRD_BOOST);
        }

        let half = T::from_f64(0.5);
        if freq_fraction > half {
            weight *= ((freq_fraction - half) * T::from_f64(2.0)).cos();
        }

        weight
    }
}

/// Square: odd harmonics, `1/h` weighting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquarePolicy {
    /// Mix of the `1/h` and `1/sqrt(h)` weightings.
    pub blend: HarmonicBlend,
}

impl<T: Real> HarmonicPolicy<T> for SquarePolicy {
    fn waveform(&self) -> Waveform {
        Waveform::Square
    }

    fn weight(&self, harmonic: usize, _freq_fraction: T) -> T {
        let h = T::from_usize(harmonic);
        let clean = T::ONE / h;
        let ugly = T::ONE / h.sqrt();
        clean * T::from_f64(self.blend.clean) + ugly * T::from_f64(self.blend.ugly)
    }
}

/// Triangle: odd harmonics, `0.7/h^2`, sign alternating over included harmonics.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrianglePolicy;

const TRIANGLE_SCALE: f64 = 0.7;

impl<T: Real> HarmonicPolicy<T> for TrianglePolicy {
    fn waveform(&self) -> Waveform {
        Waveform::Triangle
    }

    fn weight(&self, harmonic: usize, _freq_fraction: T) -> T {
        let h = T::from_usize(harmonic);
        let magnitude = T::from_f64(TRIANGLE_SCALE) / (h * h);
        // h = 1, 5, 9, ... positive; h = 3, 7, 11, ... negative
        if (harmonic / 2) % 2 == 0 {
            magnitude
        } else {
            -magnitude
        }
    }
}

/// Gauss: every harmonic, `1/(h^(0.11 h) + 3)`, summed as `cos` of the fundamental phase.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GaussPolicy;

const GAUSS_EXPONENT_RATE: f64 = 0.11;
const GAUSS_DENOMINATOR_BIAS: f64 = 3.0;

impl<T: Real> HarmonicPolicy<T> for GaussPolicy {
    fn waveform(&self) -> Waveform {
        Waveform::Gauss
    }

    fn weight(&self, harmonic: usize, _freq_fraction: T) -> T {
        let h = T::from_usize(harmonic);
        let exponent = h * T::from_f64(GAUSS_EXPONENT_RATE);
        T::ONE / (h.powf(exponent) + T::from_f64(GAUSS_DENOMINATOR_BIAS))
    }

    fn term(&self) -> HarmonicTerm {
        HarmonicTerm::FundamentalCosine
    }

    fn base_amplitude(&self) -> T {
        T::ONE
    }
}

/// Builds the policy for a waveform.
pub fn policy_for<T: Real>(waveform: Waveform, blend: HarmonicBlend) -> Box<dyn HarmonicPolicy<T>> {
    match waveform {
        Waveform::Saw => Box::new(SawPolicy { blend }),
        Waveform::Square => Box::new(SquarePolicy { blend }),
        Waveform::Triangle => Box::new(TrianglePolicy),
        Waveform::Gauss => Box::new(GaussPolicy),
    }
}
