//! Bandtable Wavetable Backend
//!
//! This crate generates band-limited wavetables for digital oscillators:
//! single-period tables of Saw, Square, Triangle, and Gauss-pulse shapes,
//! spread across the audible range so a synthesizer can pick a table by
//! fundamental frequency and play it without audible aliasing.
//!
//! # Overview
//!
//! Generation runs in four stages:
//!
//! 1. **Partition** - turn the requested slot count into log-spaced,
//!    strictly decreasing integer table lengths
//! 2. **Allocate** - one zeroed buffer per slot
//! 3. **Synthesize** - sum weighted harmonics up to Nyquist, with an
//!    empirical roll-off near Nyquist
//! 4. **Post-shape** - shift and scale Gauss tables
//!
//! # Determinism
//!
//! Generation is deterministic. The same config produces bit-identical tables
//! on every run, with or without the `parallel` feature. Every computation is
//! carried out in the configured width, so single-precision tables carry the
//! same rounding they would have if computed on the target.
//!
//! # Example
//!
//! ```
//! use bandtable_backend::generate;
//! use bandtable_spec::{GenerationConfig, Waveform};
//!
//! let set = generate(&GenerationConfig::new(48000, 32, Waveform::Saw)).unwrap();
//!
//! for slot in &set.slots {
//!     println!("{:.3} Hz: {} samples", slot.canonical_frequency, slot.sample_length);
//! }
//! println!("table hash: {}", set.table_hash);
//! ```
//!
//! # Crate Structure
//!
//! - [`generate()`] - Main entry point for wavetable generation
//! - [`partition`] - Frequency partitioning
//! - [`store`] - Slot buffers and footprint totals
//! - [`synthesis`] - Harmonic synthesis and the aliasing filter
//! - [`post_shape`] - Gauss post-shaping
//! - [`stability`] - Single vs. double precision comparison
//! - [`real`] - Floating-point width abstraction

pub mod error;
pub mod generate;
pub mod partition;
pub mod post_shape;
pub mod real;
pub mod stability;
pub mod store;
pub mod synthesis;

// Re-export main types at crate root
pub use error::{BandtableError, BandtableResult};
pub use generate::{generate, plan, WavetableSet};
pub use partition::{partition, SlotPlan};
pub use post_shape::SampleRange;
pub use real::Real;
pub use stability::{check_stability, SlotDeviation, StabilityReport};
pub use store::{Slot, TableStore};

#[cfg(test)]
mod integration_tests {
    use super::*;
    use bandtable_spec::{GenerationConfig, HarmonicBlend, Precision, Waveform};

    #[test]
    fn test_full_generation_pipeline() {
        let config = GenerationConfig::new(48000, 64, Waveform::Square);
        let set = generate(&config).expect("generation should succeed");

        assert!(!set.is_empty());
        assert!(set.len() <= 64);
        assert_eq!(set.table_hash.len(), 64);

        for slot in &set.slots {
            assert_eq!(slot.buffer.len(), slot.sample_length);
            assert!(slot.buffer.iter().all(|s| s.is_finite()));
            assert!(slot.range.is_none());
        }
    }

    #[test]
    fn test_determinism() {
        for waveform in Waveform::ALL {
            let config = GenerationConfig::new(44100, 24, waveform);
            let a = generate(&config).unwrap();
            let b = generate(&config).unwrap();
            assert_eq!(a.table_hash, b.table_hash, "{} not deterministic", waveform);
            assert_eq!(a.slots, b.slots);
        }
    }

    #[test]
    fn test_precision_changes_hash() {
        let single = generate(&GenerationConfig::new(48000, 8, Waveform::Saw)).unwrap();
        let double = generate(
            &GenerationConfig::new(48000, 8, Waveform::Saw).with_precision(Precision::Double),
        )
        .unwrap();
        assert_ne!(single.table_hash, double.table_hash);
        assert_eq!(double.total_bytes, single.total_bytes * 2);
    }

    #[test]
    fn test_blend_changes_output() {
        let base = GenerationConfig::new(48000, 4, Waveform::Saw);
        let ugly = base.clone().with_blend(HarmonicBlend {
            clean: 0.0,
            ugly: 1.0,
        });
        let a = generate(&base).unwrap();
        let b = generate(&ugly).unwrap();
        assert_eq!(a.sample_lengths(), b.sample_lengths());
        assert_ne!(a.table_hash, b.table_hash);
    }

    #[test]
    fn test_waveform_offsets_change_partition() {
        let saw = generate(&GenerationConfig::new(48000, 1, Waveform::Saw)).unwrap();
        let gauss = generate(&GenerationConfig::new(48000, 1, Waveform::Gauss)).unwrap();
        // 0.001 * 24000 + 25 = 49 Hz
        assert_eq!(gauss.slots[0].sample_length, 980);
        assert_eq!(saw.slots[0].sample_length, 462);
    }
}
