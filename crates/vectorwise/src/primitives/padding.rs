//! Zero-padding and replication utilities.
//!
//! ## Purpose
//!
//! This module provides the length-alignment rule used throughout the crate:
//! a sequence viewed at a target length, right-padded with zeros past its end.
//! It also provides scalar replication, the sequence form of a broadcast.
//!
//! ## Design notes
//!
//! * **Lazy**: Padding is an iterator adapter; no intermediate buffer is built.
//! * **One-sided**: Padding only extends on the right; a target length shorter
//!   than the input truncates (callers always pass the max of both lengths).
//!
//! ## Invariants
//!
//! * `padded(v, n)` yields exactly `n` items.
//! * The first `min(v.len(), n)` items are `v`'s elements in order.
//!
//! ## Non-goals
//!
//! * This module does not decide the target length; the engine does.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::iter::repeat;
use num_traits::Zero;

// ============================================================================
// Padding Functions
// ============================================================================

/// View a sequence at a fixed length, right-padded with zeros.
///
/// Elements past the end of `values` are `T::zero()`. Yields exactly `len`
/// items regardless of `values.len()`.
#[inline]
pub fn padded<T: Zero + Copy>(values: &[T], len: usize) -> impl Iterator<Item = T> + '_ {
    values.iter().copied().chain(repeat(T::zero())).take(len)
}

/// Build a sequence of `len` copies of `value`.
///
/// This is the sequence form of a scalar broadcast: combining a vector with
/// `replicate(s, v.len())` is equivalent to broadcasting `s` over `v`.
#[inline]
pub fn replicate<T: Copy>(value: T, len: usize) -> Vec<T> {
    vec![value; len]
}
