//! High-level API for configured element-wise arithmetic.
//!
//! ## Purpose
//!
//! This module provides the configured entry point for element-wise
//! arithmetic. It implements a fluent builder for choosing a length policy
//! and produces an engine whose operations report length violations as
//! errors instead of silently padding.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with a sensible default for the policy.
//! * **Validated**: Builder misconfiguration is detected during `build()`.
//! * **Compatibility default**: `ZeroPad` reproduces the free-function
//!   behavior exactly; `Strict` is the opt-in for callers who consider
//!   silent length changes a bug.
//!
//! ## Key concepts
//!
//! * **Length policy**: zero-padding of mismatched operand lengths silently
//!   changes vector length semantics. The policy surfaces that choice.
//! * **Configuration flow**: `Elementwise::new()` → chain setters →
//!   `.build()` → engine with fallible operations.
//!
//! ```rust
//! use vectorwise::prelude::*;
//!
//! let engine = Elementwise::new().length_policy(Strict).build()?;
//!
//! let sum = engine.add(&[1.0, 2.0], &[3.0, 4.0])?;
//! assert_eq!(sum, vec![4.0, 6.0]);
//!
//! let err = engine.add(&[1.0, 2.0, 3.0], &[3.0, 4.0]);
//! assert!(err.is_err());
//! # Result::<(), VectorwiseError>::Ok(())
//! ```

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Add, Div, Mul, Sub};

// Internal dependencies
use crate::engine::combine::combine;
use crate::engine::validator::Validator;
use crate::primitives::errors::VectorwiseError;
use crate::scalar::{Divisible, Scalar};

// ============================================================================
// Length Policy
// ============================================================================

/// Policy for reconciling operands of unequal length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthPolicy {
    /// Right-pad the shorter operand with zeros up to the longer length.
    ///
    /// This is the compatibility default and matches the free engine
    /// functions.
    #[default]
    ZeroPad,

    /// Reject operands of unequal length with
    /// [`VectorwiseError::MismatchedLengths`].
    Strict,
}

// ============================================================================
// Elementwise Builder
// ============================================================================

/// Fluent builder for configuring element-wise arithmetic.
#[derive(Debug, Clone)]
pub struct ElementwiseBuilder {
    /// Policy for operands of unequal length.
    pub length_policy: Option<LengthPolicy>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl Default for ElementwiseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementwiseBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            length_policy: None,
            duplicate_param: None,
        }
    }

    /// Set the policy for operands of unequal length.
    pub fn length_policy(mut self, policy: LengthPolicy) -> Self {
        if self.length_policy.is_some() {
            self.duplicate_param = Some("length_policy");
        }
        self.length_policy = Some(policy);
        self
    }

    /// Validate the configuration and build the engine.
    pub fn build(self) -> Result<ElementwiseEngine, VectorwiseError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(ElementwiseEngine {
            length_policy: self.length_policy.unwrap_or_default(),
        })
    }
}

// ============================================================================
// Elementwise Engine
// ============================================================================

/// Configured element-wise arithmetic engine.
pub struct ElementwiseEngine {
    length_policy: LengthPolicy,
}

impl ElementwiseEngine {
    /// The configured length policy.
    pub fn length_policy(&self) -> LengthPolicy {
        self.length_policy
    }

    /// Combine two sequences with a caller-supplied binary operation.
    ///
    /// Under [`LengthPolicy::Strict`], operands of unequal length yield
    /// [`VectorwiseError::MismatchedLengths`]; under
    /// [`LengthPolicy::ZeroPad`] this never fails.
    pub fn apply<T, F>(&self, lhs: &[T], rhs: &[T], op: F) -> Result<Vec<T>, VectorwiseError>
    where
        T: Scalar,
        F: Fn(T, T) -> T,
    {
        if self.length_policy == LengthPolicy::Strict {
            Validator::validate_equal_lengths(lhs, rhs)?;
        }
        Ok(combine(lhs, rhs, op))
    }

    /// Element-wise addition under the configured length policy.
    pub fn add<T: Scalar>(&self, lhs: &[T], rhs: &[T]) -> Result<Vec<T>, VectorwiseError> {
        self.apply(lhs, rhs, Add::add)
    }

    /// Element-wise subtraction under the configured length policy.
    pub fn subtract<T: Scalar>(&self, lhs: &[T], rhs: &[T]) -> Result<Vec<T>, VectorwiseError> {
        self.apply(lhs, rhs, Sub::sub)
    }

    /// Element-wise multiplication under the configured length policy.
    pub fn multiply<T: Scalar>(&self, lhs: &[T], rhs: &[T]) -> Result<Vec<T>, VectorwiseError> {
        self.apply(lhs, rhs, Mul::mul)
    }

    /// Element-wise division under the configured length policy.
    ///
    /// Only available for scalar types carrying the [`Divisible`]
    /// capability. Under `ZeroPad` a shorter `rhs` still produces division
    /// by zero on the padded positions, exactly like the free
    /// [`divide`](crate::engine::combine::divide) function; `Strict` rules
    /// that case out by rejecting the length mismatch first.
    pub fn divide<T: Divisible>(&self, lhs: &[T], rhs: &[T]) -> Result<Vec<T>, VectorwiseError> {
        self.apply(lhs, rhs, Div::div)
    }
}
