//! Input validation for the configured element-wise API.
//!
//! ## Purpose
//!
//! This module provides the validation functions behind the configured API:
//! equal-length enforcement for strict mode and builder misconfiguration
//! checks.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Opt-in**: The free engine functions never validate; only the
//!   configured engine routes through this module, and only under the strict
//!   length policy.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not check values (finiteness, zero divisors); the
//!   engine is total over its inputs and division by zero is the scalar
//!   type's own behavior.
//! * This module does not perform the arithmetic itself.

// Internal dependencies
use crate::primitives::errors::VectorwiseError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for the configured element-wise API.
///
/// Provides static methods returning `Result<(), VectorwiseError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate that both operands have the same number of elements.
    pub fn validate_equal_lengths<T>(lhs: &[T], rhs: &[T]) -> Result<(), VectorwiseError> {
        if lhs.len() != rhs.len() {
            return Err(VectorwiseError::MismatchedLengths {
                lhs_len: lhs.len(),
                rhs_len: rhs.len(),
            });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), VectorwiseError> {
        if let Some(param) = duplicate_param {
            return Err(VectorwiseError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
