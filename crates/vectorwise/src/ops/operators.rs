//! Operator impl generation for Vector-capable types.
//!
//! ## Purpose
//!
//! This module generates the infix operator surface (`+`, `-`, `*`, `/`) for
//! Vector-capable container types: vector × vector forms delegating to the
//! combine engine, and vector × scalar broadcast forms.
//!
//! ## Design notes
//!
//! * **Macro, not blanket impls**: Rust's orphan rule prevents this crate
//!   from implementing `core::ops` for caller-supplied types, and coherence
//!   prevents a blanket `impl Add<V> for W` from coexisting with the scalar
//!   broadcast impls. The exported macros generate concrete impls instead;
//!   this crate invokes them for [`Components`], callers invoke them for
//!   their own types.
//! * **Division dispatch**: vector × vector `/` routes through
//!   `Divisible::div_components`, so floating-point scalars get the pairwise
//!   no-padding path and integer scalars get the zero-padding path, selected
//!   at compile time.
//! * **Value semantics**: operators consume both operands and construct a
//!   fresh value of the left operand's type; nothing is mutated.
//!
//! ## Key concepts
//!
//! * **Cross-type operands**: `impl_vector_operators!(Mine, Mine, Components)`
//!   lists every right-hand vector type; each must share `Mine`'s scalar.
//! * **Broadcast impls**: generated per primitive scalar type, so `v * 2.0`
//!   works without a coherence conflict against the vector × vector forms.
//!
//! ## Invariants
//!
//! * Invoke `impl_vector_operators!` at most once per left-hand type, listing
//!   all right-hand types in that single invocation.
//! * The target type must be generic over exactly one type parameter, its
//!   scalar.

// Internal dependencies
use crate::ops::components::Components;

// ============================================================================
// Operator Surface Macro
// ============================================================================

/// Generate the infix operator surface for a Vector-capable type.
///
/// `impl_vector_operators!(Mine)` implements `+`, `-`, `*`, `/` for
/// `Mine<T> op Mine<T>` plus the scalar broadcast forms `Mine<T> op T` for
/// every primitive numeric type. Additional right-hand vector types sharing
/// the same scalar can be listed: `impl_vector_operators!(Mine, Mine, Other)`.
///
/// The target type must implement [`Vector`](crate::ops::Vector) and be
/// generic over exactly one type parameter. Invoke the macro once per
/// left-hand type.
///
/// ```rust
/// use vectorwise::prelude::*;
///
/// struct Offsets<T>(Vec<T>);
///
/// impl<T: Scalar> Vector for Offsets<T> {
///     type Scalar = T;
///     fn from_components(components: Vec<T>) -> Self {
///         Self(components)
///     }
///     fn components(&self) -> &[T] {
///         &self.0
///     }
/// }
///
/// vectorwise::impl_vector_operators!(Offsets, Offsets, Components);
///
/// let a = Offsets(vec![1.0, 2.0, 3.0]);
/// let b = Components::from(vec![10.0, 20.0]);
/// let sum = a + b;
/// assert_eq!(sum.components(), &[11.0, 22.0, 3.0]);
/// ```
#[macro_export]
macro_rules! impl_vector_operators {
    ($vector:ident) => {
        $crate::impl_vector_operators!($vector, $vector);
    };
    ($vector:ident, $($rhs:ident),+ $(,)?) => {
        $(
            impl<T> ::core::ops::Add<$rhs<T>> for $vector<T>
            where
                T: $crate::scalar::Scalar,
                $vector<T>: $crate::ops::Vector<Scalar = T>,
                $rhs<T>: $crate::ops::Vector<Scalar = T>,
            {
                type Output = $vector<T>;

                fn add(self, rhs: $rhs<T>) -> Self::Output {
                    <$vector<T> as $crate::ops::Vector>::from_components(
                        $crate::engine::combine::add(
                            <$vector<T> as $crate::ops::Vector>::components(&self),
                            <$rhs<T> as $crate::ops::Vector>::components(&rhs),
                        ),
                    )
                }
            }

            impl<T> ::core::ops::Sub<$rhs<T>> for $vector<T>
            where
                T: $crate::scalar::Scalar,
                $vector<T>: $crate::ops::Vector<Scalar = T>,
                $rhs<T>: $crate::ops::Vector<Scalar = T>,
            {
                type Output = $vector<T>;

                fn sub(self, rhs: $rhs<T>) -> Self::Output {
                    <$vector<T> as $crate::ops::Vector>::from_components(
                        $crate::engine::combine::subtract(
                            <$vector<T> as $crate::ops::Vector>::components(&self),
                            <$rhs<T> as $crate::ops::Vector>::components(&rhs),
                        ),
                    )
                }
            }

            impl<T> ::core::ops::Mul<$rhs<T>> for $vector<T>
            where
                T: $crate::scalar::Scalar,
                $vector<T>: $crate::ops::Vector<Scalar = T>,
                $rhs<T>: $crate::ops::Vector<Scalar = T>,
            {
                type Output = $vector<T>;

                fn mul(self, rhs: $rhs<T>) -> Self::Output {
                    <$vector<T> as $crate::ops::Vector>::from_components(
                        $crate::engine::combine::multiply(
                            <$vector<T> as $crate::ops::Vector>::components(&self),
                            <$rhs<T> as $crate::ops::Vector>::components(&rhs),
                        ),
                    )
                }
            }

            impl<T> ::core::ops::Div<$rhs<T>> for $vector<T>
            where
                T: $crate::scalar::Divisible,
                $vector<T>: $crate::ops::Vector<Scalar = T>,
                $rhs<T>: $crate::ops::Vector<Scalar = T>,
            {
                type Output = $vector<T>;

                fn div(self, rhs: $rhs<T>) -> Self::Output {
                    <$vector<T> as $crate::ops::Vector>::from_components(
                        <T as $crate::scalar::Divisible>::div_components(
                            <$vector<T> as $crate::ops::Vector>::components(&self),
                            <$rhs<T> as $crate::ops::Vector>::components(&rhs),
                        ),
                    )
                }
            }
        )+

        $crate::impl_scalar_broadcast!($vector);
    };
}

// ============================================================================
// Scalar Broadcast Macro
// ============================================================================

/// Generate the vector × scalar broadcast operators for a Vector-capable type.
///
/// Emitted automatically by [`impl_vector_operators!`]; exposed separately
/// for types that only want the broadcast forms. One impl per primitive
/// numeric type keeps the broadcast forms coherent alongside the
/// vector × vector forms.
#[macro_export]
macro_rules! impl_scalar_broadcast {
    ($vector:ident) => {
        $crate::impl_scalar_broadcast!(@each $vector:
            f32 f64 i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);
    };
    (@each $vector:ident: $($scalar:ident)+) => {
        $(
            impl ::core::ops::Add<$scalar> for $vector<$scalar>
            where
                $vector<$scalar>: $crate::ops::Vector<Scalar = $scalar>,
            {
                type Output = $vector<$scalar>;

                fn add(self, rhs: $scalar) -> Self::Output {
                    <$vector<$scalar> as $crate::ops::Vector>::from_components(
                        $crate::engine::combine::broadcast(
                            <$vector<$scalar> as $crate::ops::Vector>::components(&self),
                            rhs,
                            ::core::ops::Add::add,
                        ),
                    )
                }
            }

            impl ::core::ops::Sub<$scalar> for $vector<$scalar>
            where
                $vector<$scalar>: $crate::ops::Vector<Scalar = $scalar>,
            {
                type Output = $vector<$scalar>;

                fn sub(self, rhs: $scalar) -> Self::Output {
                    <$vector<$scalar> as $crate::ops::Vector>::from_components(
                        $crate::engine::combine::broadcast(
                            <$vector<$scalar> as $crate::ops::Vector>::components(&self),
                            rhs,
                            ::core::ops::Sub::sub,
                        ),
                    )
                }
            }

            impl ::core::ops::Mul<$scalar> for $vector<$scalar>
            where
                $vector<$scalar>: $crate::ops::Vector<Scalar = $scalar>,
            {
                type Output = $vector<$scalar>;

                fn mul(self, rhs: $scalar) -> Self::Output {
                    <$vector<$scalar> as $crate::ops::Vector>::from_components(
                        $crate::engine::combine::broadcast(
                            <$vector<$scalar> as $crate::ops::Vector>::components(&self),
                            rhs,
                            ::core::ops::Mul::mul,
                        ),
                    )
                }
            }

            impl ::core::ops::Div<$scalar> for $vector<$scalar>
            where
                $vector<$scalar>: $crate::ops::Vector<Scalar = $scalar>,
            {
                type Output = $vector<$scalar>;

                fn div(self, rhs: $scalar) -> Self::Output {
                    <$vector<$scalar> as $crate::ops::Vector>::from_components(
                        $crate::engine::combine::broadcast(
                            <$vector<$scalar> as $crate::ops::Vector>::components(&self),
                            rhs,
                            ::core::ops::Div::div,
                        ),
                    )
                }
            }
        )+
    };
}

// ============================================================================
// Operator Surface for Components
// ============================================================================

crate::impl_vector_operators!(Components);
