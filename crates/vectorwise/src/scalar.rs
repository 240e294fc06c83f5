//! Layer 2: Scalar capability traits.
//!
//! ## Purpose
//!
//! This module defines the numeric capabilities a scalar type must carry to
//! participate in element-wise arithmetic: the base [`Scalar`] capability
//! (addition, subtraction, multiplication, and a zero for padding) and the
//! opt-in [`Divisible`] capability for division.
//!
//! ## Design notes
//!
//! * **Blanket base**: `Scalar` is blanket-implemented; any `Copy` numeric
//!   type with `+`, `-`, `*` and a zero qualifies automatically.
//! * **Opt-in division**: `Divisible` is implemented explicitly per type,
//!   never blanket. A scalar type without the opt-in cannot be divided at
//!   all; misuse is rejected at compile time, not at runtime.
//! * **Two division paths**: `div_components` carries the element-wise
//!   division strategy. The default body zero-pads the shorter operand (so a
//!   short divisor produces division by zero); the floating-point impls
//!   override it with a pairwise path that assumes equal lengths and applies
//!   no padding. The two paths have materially different edge-case behavior
//!   and are deliberately kept distinct.
//!
//! ## Invariants
//!
//! * `Scalar::zero()` is the additive identity used for padding.
//! * `div_components` never mutates its operands.
//!
//! ## Non-goals
//!
//! * No runtime detection of division support; the capability is a trait bound.
//! * No handling of division by zero; the scalar type's own behavior applies
//!   (IEEE inf/NaN for floats, a panic for integers).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Add, Div, Mul, Sub};
use num_traits::Zero;

// Internal dependencies
use crate::primitives::padding::padded;

// ============================================================================
// Base Scalar Capability
// ============================================================================

/// Numeric element type of a vector.
///
/// Requires the three always-available arithmetic operations and a zero value
/// for padding. Division is a separate capability; see [`Divisible`].
pub trait Scalar:
    Copy + Zero + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
}

impl<T> Scalar for T where
    T: Copy + Zero + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
}

// ============================================================================
// Division Capability
// ============================================================================

/// Opt-in capability for scalar types that support division.
///
/// Implemented explicitly for the floating-point and primitive integer
/// types. There is no blanket impl: a scalar type not listed here cannot be
/// used with any division operation, and the rejection happens at compile
/// time.
pub trait Divisible: Scalar + Div<Output = Self> {
    /// Element-wise division strategy used by the vector operator surface.
    ///
    /// The default path zero-pads the shorter operand to the longer length,
    /// so a shorter `rhs` divides the tail of `lhs` by zero, with whatever
    /// consequence the scalar type defines. Floating-point impls override
    /// this with a pairwise path that truncates to the shorter length.
    fn div_components(lhs: &[Self], rhs: &[Self]) -> Vec<Self> {
        let len = lhs.len().max(rhs.len());
        padded(lhs, len)
            .zip(padded(rhs, len))
            .map(|(a, b)| a / b)
            .collect()
    }
}

/// Pairwise division for floating-point scalars.
///
/// No padding is applied: operands are assumed equal-length, and a length
/// mismatch truncates to the shorter operand. Division by an explicit zero
/// follows IEEE semantics (inf/NaN) rather than aborting.
macro_rules! impl_divisible_float {
    ($($t:ty),*) => {
        $(
            impl Divisible for $t {
                #[inline]
                fn div_components(lhs: &[Self], rhs: &[Self]) -> Vec<Self> {
                    lhs.iter().zip(rhs.iter()).map(|(&a, &b)| a / b).collect()
                }
            }
        )*
    };
}

/// Zero-padding division for integer scalars (default strategy).
///
/// A shorter divisor pads with zero and the division panics, matching the
/// language's integer division-by-zero behavior.
macro_rules! impl_divisible_int {
    ($($t:ty),*) => {
        $(
            impl Divisible for $t {}
        )*
    };
}

impl_divisible_float!(f32, f64);
impl_divisible_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
