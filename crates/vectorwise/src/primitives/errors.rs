//! Error types for element-wise arithmetic operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur when element-wise
//! arithmetic is driven through the configured API: strict-mode length
//! violations and builder misconfiguration.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., both operand lengths).
//! * **Deferred**: Builder errors are caught and stored during configuration.
//! * **No-std**: All variants are allocation-free and available without `std`.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Length enforcement**: Strict mode rejects operands of unequal length.
//! 2. **Builder validation**: A parameter set more than once is reported at build time.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric values in errors use the same types as the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * Division by zero is not represented here: it is the scalar type's own
//!   behavior, inherited through the zero-padding policy, not a library error.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for element-wise arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorwiseError {
    /// Operands must have the same number of elements under strict length policy.
    MismatchedLengths {
        /// Number of elements in the left operand.
        lhs_len: usize,
        /// Number of elements in the right operand.
        rhs_len: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for VectorwiseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::MismatchedLengths { lhs_len, rhs_len } => {
                write!(
                    f,
                    "Length mismatch: lhs has {lhs_len} elements, rhs has {rhs_len}"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for VectorwiseError {}
