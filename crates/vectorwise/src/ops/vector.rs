//! The Vector capability trait.
//!
//! ## Purpose
//!
//! This module defines the [`Vector`] capability: anything backed by an
//! ordered sequence of scalar components that can be constructed from such a
//! sequence and can expose it. Vectors carry no identity beyond their
//! components; two vectors are operationally equivalent iff their component
//! sequences are equal.
//!
//! ## Design notes
//!
//! * **Capability, not a type**: Callers supply their own container types;
//!   implementing the two required methods is the entire contract.
//! * **Operators are generated**: Rust's orphan rule prevents this crate from
//!   implementing `core::ops` for caller types, so the operator surface is
//!   produced by [`impl_vector_operators!`](crate::impl_vector_operators),
//!   which callers invoke once for their own type.
//!
//! ## Invariants
//!
//! * `V::from_components(v.components().to_vec())` is operationally
//!   equivalent to `v`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::scalar::Scalar;

// ============================================================================
// Vector Capability
// ============================================================================

/// Capability for containers backed by an ordered scalar sequence.
pub trait Vector: Sized {
    /// The numeric element type.
    type Scalar: Scalar;

    /// Construct the container from a component sequence.
    fn from_components(components: Vec<Self::Scalar>) -> Self;

    /// Expose the backing component sequence.
    fn components(&self) -> &[Self::Scalar];

    /// Number of components.
    #[inline]
    fn len(&self) -> usize {
        self.components().len()
    }

    /// Whether the vector has no components.
    #[inline]
    fn is_empty(&self) -> bool {
        self.components().is_empty()
    }

    /// The component at `index`, or `None` when out of bounds.
    #[inline]
    fn component(&self, index: usize) -> Option<Self::Scalar> {
        self.components().get(index).copied()
    }
}
