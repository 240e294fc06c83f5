//! Tests for the Vector operator surface.
//!
//! These tests verify the generated infix operators on Vector-capable
//! containers:
//! - Vector × vector forms delegating to the combine engine
//! - Scalar broadcast forms
//! - Cross-type operands sharing a scalar
//! - The two compile-time-selected division paths
//!
//! ## Test Organization
//!
//! 1. **Vector Capability** - Trait contract and provided methods
//! 2. **Vector × Vector Operators** - Padding semantics through the operators
//! 3. **Scalar Broadcast Operators** - Per-element scalar forms
//! 4. **Division Paths** - Float pairwise vs. integer zero-padding
//! 5. **Cross-Type Operands** - A caller-defined container against Components

use vectorwise::prelude::*;

// ============================================================================
// Caller-Defined Container
// ============================================================================

/// A minimal caller-supplied container exercising the operator macro.
#[derive(Debug, Clone, PartialEq)]
struct Offsets<T>(Vec<T>);

impl<T: Scalar> Vector for Offsets<T> {
    type Scalar = T;

    fn from_components(components: Vec<T>) -> Self {
        Self(components)
    }

    fn components(&self) -> &[T] {
        &self.0
    }
}

vectorwise::impl_vector_operators!(Offsets, Offsets, Components);

// ============================================================================
// Vector Capability Tests
// ============================================================================

/// Test the provided methods of the Vector capability.
#[test]
fn test_vector_provided_methods() {
    let v = Components::from(vec![1, 2, 3]);

    assert_eq!(Vector::len(&v), 3);
    assert!(!Vector::is_empty(&v));
    assert_eq!(v.component(0), Some(1));
    assert_eq!(v.component(2), Some(3));
    assert_eq!(v.component(3), None);

    let empty = Components::<i32>::new();
    assert!(Vector::is_empty(&empty));
    assert_eq!(empty.component(0), None);
}

/// Test that a vector round-trips through its component sequence.
#[test]
fn test_vector_component_round_trip() {
    let v = Components::from(vec![5, 6, 7]);
    let rebuilt = Components::from_components(v.components().to_vec());

    assert_eq!(rebuilt, v);
}

// ============================================================================
// Vector × Vector Operator Tests
// ============================================================================

/// Test addition with a shorter right operand through the operator.
#[test]
fn test_operator_add_zero_pads() {
    let a = Components::from(vec![1.0, 2.0, 3.0]);
    let b = Components::from(vec![10.0, 20.0]);

    assert_eq!(a + b, Components::from(vec![11.0, 22.0, 3.0]));
}

/// Test subtraction through the operator.
#[test]
fn test_operator_sub() {
    let a = Components::from(vec![10, 20, 30]);
    let b = Components::from(vec![1, 2]);

    assert_eq!(a - b, Components::from(vec![9, 18, 30]));
}

/// Test multiplication with a longer right operand through the operator.
#[test]
fn test_operator_mul_zero_pads() {
    let a = Components::from(vec![1, 2]);
    let b = Components::from(vec![1, 2, 3, 4]);

    assert_eq!(a * b, Components::from(vec![1, 4, 0, 0]));
}

/// Test that operators construct fresh values and leave sources usable.
#[test]
fn test_operators_do_not_mutate_operands() {
    let a = Components::from(vec![1, 2, 3]);
    let b = Components::from(vec![4, 5, 6]);

    let sum = a.clone() + b.clone();

    assert_eq!(sum, Components::from(vec![5, 7, 9]));
    assert_eq!(a, Components::from(vec![1, 2, 3]));
    assert_eq!(b, Components::from(vec![4, 5, 6]));
}

// ============================================================================
// Scalar Broadcast Operator Tests
// ============================================================================

/// Test the concrete scalar multiplication case.
#[test]
fn test_operator_scalar_mul() {
    let v = Components::from(vec![1, 2, 3]);

    assert_eq!(v * 2, Components::from(vec![2, 4, 6]));
}

/// Test scalar addition, subtraction, and division broadcasts.
#[test]
fn test_operator_scalar_broadcast_family() {
    let v = Components::from(vec![2.0, 4.0, 8.0]);

    assert_eq!(v.clone() + 1.0, Components::from(vec![3.0, 5.0, 9.0]));
    assert_eq!(v.clone() - 1.0, Components::from(vec![1.0, 3.0, 7.0]));
    assert_eq!(v / 2.0, Components::from(vec![1.0, 2.0, 4.0]));
}

/// Test that scalar broadcast equals combining with a replicated scalar.
#[test]
fn test_operator_broadcast_equals_replicate_combine() {
    let v = Components::from(vec![4i32, 8, 15]);
    let s = 3;

    let broadcast_result = v.clone() + s;
    let combined = add(v.components(), &replicate(s, Vector::len(&v)));

    assert_eq!(broadcast_result.components(), combined.as_slice());
}

// ============================================================================
// Division Path Tests
// ============================================================================

/// Test pairwise float division with equal-length operands.
#[test]
fn test_operator_div_floats_pairwise() {
    let a = Components::from(vec![10.0, 20.0]);
    let b = Components::from(vec![2.0, 5.0]);

    assert_eq!(a / b, Components::from(vec![5.0, 4.0]));
}

/// Test that the float division path truncates instead of padding.
///
/// The floating-point path assumes equal lengths; a mismatch truncates to
/// the shorter operand rather than dividing by a padded zero.
#[test]
fn test_operator_div_floats_truncates() {
    let a = Components::from(vec![10.0, 20.0, 30.0]);
    let b = Components::from(vec![2.0, 5.0]);

    assert_eq!(a / b, Components::from(vec![5.0, 4.0]));
}

/// Test integer division through the operator with equal lengths.
#[test]
fn test_operator_div_integers_equal_lengths() {
    let a = Components::from(vec![10, 20]);
    let b = Components::from(vec![2, 4]);

    assert_eq!(a / b, Components::from(vec![5, 5]));
}

/// Test that the integer division path zero-pads and panics.
///
/// Integer scalars use the zero-padding strategy, so a shorter divisor
/// divides the tail by zero and aborts per the language's behavior.
#[test]
#[should_panic]
fn test_operator_div_integers_short_rhs_panics() {
    let a = Components::from(vec![10, 20]);
    let b = Components::from(vec![2]);

    let _ = a / b;
}

// ============================================================================
// Cross-Type Operand Tests
// ============================================================================

/// Test operators between a caller-defined container and Components.
#[test]
fn test_cross_type_operands() {
    let a = Offsets(vec![1.0, 2.0, 3.0]);
    let b = Components::from(vec![10.0, 20.0]);

    let sum = a + b;

    assert_eq!(sum, Offsets(vec![11.0, 22.0, 3.0]));
}

/// Test that cross-type results take the left operand's concrete type.
#[test]
fn test_cross_type_result_is_lhs_type() {
    let a = Offsets(vec![6.0, 9.0]);
    let b = Components::from(vec![2.0, 3.0]);

    let quotient: Offsets<f64> = a / b;

    assert_eq!(quotient, Offsets(vec![3.0, 3.0]));
}

/// Test the full operator surface on a caller-defined container.
#[test]
fn test_caller_container_operator_surface() {
    let a = Offsets(vec![1, 2, 3]);
    let b = Offsets(vec![4, 5]);

    assert_eq!(a.clone() + b.clone(), Offsets(vec![5, 7, 3]));
    assert_eq!(a.clone() - b.clone(), Offsets(vec![-3, -3, 3]));
    assert_eq!(a.clone() * b, Offsets(vec![4, 10, 0]));
    assert_eq!(a * 10, Offsets(vec![10, 20, 30]));
}
