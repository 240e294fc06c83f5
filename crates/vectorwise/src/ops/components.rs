//! The ready-made component container.
//!
//! ## Purpose
//!
//! This module provides [`Components`], a thin newtype over `Vec<T>` that
//! implements the [`Vector`] capability and carries the full operator
//! surface. It is both the default container for callers who do not have
//! their own vector type and the crate's own exercise of the operator macro.
//!
//! ## Design notes
//!
//! * **No identity**: Equality is component-sequence equality, nothing more.
//! * **Read-through**: `Deref` to the backing `Vec` gives indexing, `len`,
//!   and iteration for free; there is no mutating surface beyond what the
//!   caller already owns.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::Deref;

// Internal dependencies
use crate::ops::vector::Vector;
use crate::scalar::Scalar;

// ============================================================================
// Components Container
// ============================================================================

/// An ordered sequence of scalar components with the operator surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Components<T>(Vec<T>);

impl<T> Components<T> {
    /// Create an empty container.
    #[inline]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Consume the container and return the backing sequence.
    #[inline]
    pub fn into_components(self) -> Vec<T> {
        self.0
    }

    /// The backing sequence as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }
}

impl<T> Default for Components<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Deref for Components<T> {
    type Target = Vec<T>;
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> From<Vec<T>> for Components<T> {
    fn from(v: Vec<T>) -> Self {
        Self(v)
    }
}

impl<T> FromIterator<T> for Components<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T: Scalar> Vector for Components<T> {
    type Scalar = T;

    #[inline]
    fn from_components(components: Vec<T>) -> Self {
        Self(components)
    }

    #[inline]
    fn components(&self) -> &[T] {
        &self.0
    }
}
