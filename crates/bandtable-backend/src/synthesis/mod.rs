//! Additive synthesis of band-limited tables.
//!
//! - `harmonic` - Harmonic sweep that fills one slot
//! - `policy` - Per-waveform harmonic selection and weighting
//! - `aliasing` - Empirical near-Nyquist roll-off

pub mod aliasing;
pub mod harmonic;
pub mod policy;

pub use harmonic::synthesize_slot;
pub use policy::{
    policy_for, GaussPolicy, HarmonicPolicy, HarmonicTerm, SawPolicy, SquarePolicy,
    TrianglePolicy,
};

use bandtable_spec::Waveform;

use crate::error::BandtableResult;
use crate::post_shape;
use crate::real::Real;
use crate::store::Slot;

/// Synthesizes one slot and applies the waveform's post-shaping.
pub fn render_slot<T: Real>(
    slot: &mut Slot<T>,
    sample_rate: u32,
    waveform: Waveform,
    policy: &dyn HarmonicPolicy<T>,
) -> BandtableResult<()> {
    synthesize_slot(slot, sample_rate, policy)?;
    slot.range = post_shape::apply(waveform, &mut slot.buffer);
    Ok(())
}

/// Renders every slot.
///
/// Slots are independent; with the `parallel` feature they are distributed
/// across the rayon pool. Accumulation inside a slot is always sequential,
/// so both paths produce identical buffers.
pub fn render_all<T: Real>(
    slots: &mut [Slot<T>],
    sample_rate: u32,
    waveform: Waveform,
    policy: &dyn HarmonicPolicy<T>,
) -> BandtableResult<()> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        slots
            .par_iter_mut()
            .try_for_each(|slot| render_slot(slot, sample_rate, waveform, policy))
    }

    #[cfg(not(feature = "parallel"))]
    {
        slots
            .iter_mut()
            .try_for_each(|slot| render_slot(slot, sample_rate, waveform, policy))
    }
}
