//! Floating-point width abstraction.
//!
//! Partitioning and synthesis are written once against [`Real`] and
//! instantiated for `f32` (production) and `f64` (stability validation).
//! Every intermediate is evaluated in the chosen width so single-precision
//! tables carry single-precision rounding, exactly as they would on the
//! target.

use std::fmt::Debug;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub};

/// Scalar type used for table generation.
pub trait Real:
    Copy
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + MulAssign
    + Send
    + Sync
    + 'static
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// Archimedes' constant in this width.
    const PI: Self;

    /// Converts from `f64`, rounding to this width.
    fn from_f64(value: f64) -> Self;
    /// Converts from `usize`, rounding to this width.
    fn from_usize(value: usize) -> Self;
    /// Widens to `f64` (lossless for both implementations).
    fn to_f64(self) -> f64;
    /// Little-endian bytes in this width, for hashing.
    fn write_le_bytes(self, out: &mut Vec<u8>);

    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn exp(self) -> Self;
    fn ln(self) -> Self;
    fn sqrt(self) -> Self;
    fn powf(self, exponent: Self) -> Self;
    fn round(self) -> Self;
    fn floor(self) -> Self;
    fn is_finite(self) -> bool;
}

macro_rules! impl_real {
    ($ty:ident) => {
        impl Real for $ty {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const PI: Self = std::$ty::consts::PI;

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $ty
            }

            #[inline]
            fn from_usize(value: usize) -> Self {
                value as $ty
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn write_le_bytes(self, out: &mut Vec<u8>) {
                out.extend_from_slice(&self.to_le_bytes());
            }

            #[inline]
            fn sin(self) -> Self {
                $ty::sin(self)
            }

            #[inline]
            fn cos(self) -> Self {
                $ty::cos(self)
            }

            #[inline]
            fn exp(self) -> Self {
                $ty::exp(self)
            }

            #[inline]
            fn ln(self) -> Self {
                $ty::ln(self)
            }

            #[inline]
            fn sqrt(self) -> Self {
                $ty::sqrt(self)
            }

            #[inline]
            fn powf(self, exponent: Self) -> Self {
                $ty::powf(self, exponent)
            }

            #[inline]
            fn round(self) -> Self {
                $ty::round(self)
            }

            #[inline]
            fn floor(self) -> Self {
                $ty::floor(self)
            }

            #[inline]
            fn is_finite(self) -> bool {
                $ty::is_finite(self)
            }
        }
    };
}

impl_real!(f32);
impl_real!(f64);

/// Converts a non-negative finite value to `usize`, saturating at the bounds.
#[inline]
pub(crate) fn to_usize<T: Real>(value: T) -> usize {
    let v = value.to_f64();
    if v.is_nan() || v <= 0.0 {
        0
    } else if v >= usize::MAX as f64 {
        usize::MAX
    } else {
        v as usize
    }
}
