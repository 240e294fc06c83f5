//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports all necessary types and
//! functions for convenient usage of the vectorwise API. The prelude should
//! provide a one-stop import for common element-wise arithmetic.
//!
//! ## Test Organization
//!
//! 1. **Import Verification** - All prelude exports are accessible
//! 2. **Type Usage** - Types can be used without qualification
//! 3. **Builder Pattern** - Complete workflows work with prelude imports

use vectorwise::prelude::*;

// ============================================================================
// Import Verification Tests
// ============================================================================

/// Test that the engine functions are accessible from the prelude.
#[test]
fn test_prelude_engine_functions() {
    assert_eq!(add(&[1, 2], &[3]), vec![4, 2]);
    assert_eq!(subtract(&[1, 2], &[3]), vec![-2, 2]);
    assert_eq!(multiply(&[1, 2], &[3]), vec![3, 0]);
    assert_eq!(divide(&[4.0, 2.0], &[2.0, 2.0]), vec![2.0, 1.0]);
    assert_eq!(combine(&[1], &[2], |a, b| a + b), vec![3]);
    assert_eq!(broadcast(&[1, 2], 5, |c, s| c * s), vec![5, 10]);
    assert_eq!(replicate(7, 3), vec![7, 7, 7]);
}

/// Test that LengthPolicy variants are exported unqualified.
#[test]
fn test_prelude_length_policy_variants() {
    let _ = Elementwise::new().length_policy(ZeroPad);
    let _ = Elementwise::new().length_policy(Strict);

    assert_ne!(ZeroPad, Strict);
}

/// Test that Components and the Vector capability are exported.
#[test]
fn test_prelude_vector_types() {
    let v = Components::from(vec![1.0, 2.0]);

    assert_eq!(v.components(), &[1.0, 2.0]);
    assert_eq!(Vector::len(&v), 2);
}

// ============================================================================
// Builder Pattern Tests
// ============================================================================

/// Test a complete workflow with only prelude imports.
#[test]
fn test_prelude_complete_workflow() {
    let engine = Elementwise::new()
        .length_policy(Strict)
        .build()
        .expect("builder with a single policy should build");

    let sum = engine
        .add(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0])
        .expect("equal lengths should pass strict validation");

    assert_eq!(sum, vec![5.0, 7.0, 9.0]);
}

/// Test that error types are matchable through the prelude.
#[test]
fn test_prelude_error_handling() {
    let engine = Elementwise::new().length_policy(Strict).build().unwrap();

    match engine.add(&[1], &[1, 2]) {
        Err(VectorwiseError::MismatchedLengths { lhs_len, rhs_len }) => {
            assert_eq!((lhs_len, rhs_len), (1, 2));
        }
        other => panic!("expected MismatchedLengths, got {other:?}"),
    }
}
