//! The element-wise combine engine.
//!
//! ## Purpose
//!
//! This module combines two numeric sequences of possibly different lengths
//! into one result sequence, applying a caller-supplied binary operation
//! position-wise. It is the single place where the length-alignment rule
//! lives: the shorter operand is right-padded with zeros to the longer
//! length.
//!
//! ## Design notes
//!
//! * **Total**: Any two sequences of any lengths (including empty) combine
//!   successfully; there are no error conditions on this path.
//! * **Pure**: Every function is a pure function of its inputs; operands are
//!   never mutated and the result is freshly allocated.
//! * **Never truncates**: The result length is always the max of both operand
//!   lengths; padding only extends, never shortens.
//!
//! ## Key concepts
//!
//! * **Zero-padding**: `combine([1,2,3], [10,20], +)` pads the right operand
//!   to `[10,20,0]` and yields `[11,22,3]`.
//! * **Broadcast**: applying one scalar against every element of a sequence;
//!   the result keeps the sequence's own length.
//!
//! ## Invariants
//!
//! * `combine(a, b, op).len() == max(a.len(), b.len())`.
//! * `combine(a, [], +) == a` and `combine(a, [], *)` is all zeros.
//! * `broadcast(v, s, op).len() == v.len()`.
//!
//! ## Non-goals
//!
//! * This module does not enforce equal lengths; the configured API's strict
//!   mode does (see the validator).
//! * This module does not guard against division by zero on padded
//!   positions; the scalar type's own behavior applies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Add, Div, Mul, Sub};

// Internal dependencies
use crate::primitives::padding::padded;
use crate::scalar::{Divisible, Scalar};

// ============================================================================
// Combine Primitive
// ============================================================================

/// Combine two sequences position-wise with a binary operation.
///
/// The shorter operand is right-padded with `T::zero()` up to the longer
/// length; the longer operand is used unmodified. The result always has
/// length `max(lhs.len(), rhs.len())`. Combining two empty sequences yields
/// an empty sequence.
pub fn combine<T, F>(lhs: &[T], rhs: &[T], op: F) -> Vec<T>
where
    T: Scalar,
    F: Fn(T, T) -> T,
{
    let len = lhs.len().max(rhs.len());
    padded(lhs, len)
        .zip(padded(rhs, len))
        .map(|(a, b)| op(a, b))
        .collect()
}

// ============================================================================
// Named Specializations
// ============================================================================

/// Element-wise addition with zero-padding.
#[inline]
pub fn add<T: Scalar>(lhs: &[T], rhs: &[T]) -> Vec<T> {
    combine(lhs, rhs, Add::add)
}

/// Element-wise subtraction with zero-padding.
#[inline]
pub fn subtract<T: Scalar>(lhs: &[T], rhs: &[T]) -> Vec<T> {
    combine(lhs, rhs, Sub::sub)
}

/// Element-wise multiplication with zero-padding.
///
/// Padded positions multiply by zero and therefore annihilate: the tail of
/// the longer operand comes out as zeros.
#[inline]
pub fn multiply<T: Scalar>(lhs: &[T], rhs: &[T]) -> Vec<T> {
    combine(lhs, rhs, Mul::mul)
}

/// Element-wise division with zero-padding.
///
/// Only available for scalar types carrying the [`Divisible`] capability.
/// A shorter `rhs` pads with zero, so the corresponding positions divide by
/// zero: floats produce inf/NaN, integers panic. This is an inherited edge
/// case of the padding policy.
#[inline]
pub fn divide<T: Divisible>(lhs: &[T], rhs: &[T]) -> Vec<T> {
    combine(lhs, rhs, Div::div)
}

// ============================================================================
// Scalar Broadcast
// ============================================================================

/// Apply a binary operation between every element and a single scalar.
///
/// The result has the same length as `values`; no padding is involved.
pub fn broadcast<T, F>(values: &[T], scalar: T, op: F) -> Vec<T>
where
    T: Scalar,
    F: Fn(T, T) -> T,
{
    values.iter().map(|&c| op(c, scalar)).collect()
}
