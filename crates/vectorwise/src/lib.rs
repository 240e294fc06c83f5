//! # vectorwise — element-wise vector arithmetic for Rust
//!
//! Generic element-wise arithmetic operators (`+`, `-`, `*`, `/`) over
//! variable-length numeric sequences, plus scalar-broadcast variants, for
//! any container type backed by a component sequence.
//!
//! ## What is vectorwise?
//!
//! vectorwise combines two numeric sequences position-wise. Operands of
//! different lengths are reconciled by right-padding the shorter one with
//! zeros, so `[1, 2, 3] + [10, 20]` is `[11, 22, 3]` and the result always
//! has the longer operand's length. A thin layer above the engine exposes
//! infix operators for "vector-like" containers, including scalar broadcast
//! (`v * 2`) and cross-type forms (any two containers sharing a scalar).
//!
//! ## Quick Start
//!
//! ### Operators
//!
//! ```rust
//! use vectorwise::prelude::*;
//!
//! let a = Components::from(vec![1.0, 2.0, 3.0]);
//! let b = Components::from(vec![10.0, 20.0]);
//!
//! // Mismatched lengths zero-pad: b is treated as [10.0, 20.0, 0.0]
//! assert_eq!(a.clone() + b, Components::from(vec![11.0, 22.0, 3.0]));
//!
//! // Scalar broadcast keeps the vector's own length
//! assert_eq!(a * 2.0, Components::from(vec![2.0, 4.0, 6.0]));
//! ```
//!
//! ### The combine primitive
//!
//! ```rust
//! use vectorwise::prelude::*;
//!
//! assert_eq!(add(&[1, 2, 3], &[10, 20]), vec![11, 22, 3]);
//! assert_eq!(multiply(&[1, 2], &[1, 2, 3, 4]), vec![1, 4, 0, 0]);
//! assert_eq!(combine(&[1, 2], &[3, 4], |a, b| a * 10 + b), vec![13, 24]);
//! ```
//!
//! ### Strict length checking
//!
//! Zero-padding silently changes length semantics for mismatched inputs.
//! Callers who consider that a bug can opt into strict enforcement through
//! the builder:
//!
//! ```rust
//! use vectorwise::prelude::*;
//!
//! let engine = Elementwise::new().length_policy(Strict).build()?;
//!
//! assert_eq!(engine.add(&[1, 2], &[3, 4])?, vec![4, 6]);
//! assert!(engine.add(&[1, 2, 3], &[3, 4]).is_err());
//! # Result::<(), VectorwiseError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Configured-engine operations return `Result<Vec<T>, VectorwiseError>`;
//! the `?` operator is idiomatic, and explicit handling works too:
//!
//! ```rust
//! use vectorwise::prelude::*;
//!
//! let engine = Elementwise::new().length_policy(Strict).build()?;
//!
//! match engine.subtract(&[1.0, 2.0, 3.0], &[1.0]) {
//!     Ok(result) => println!("Difference: {:?}", result),
//!     Err(e) => eprintln!("Rejected: {}", e),
//! }
//! # Result::<(), VectorwiseError>::Ok(())
//! ```
//!
//! ## Division
//!
//! Division is an opt-in capability ([`scalar::Divisible`]), implemented for
//! the floating-point and primitive integer types. Scalar types without the
//! opt-in are rejected at compile time. The vector `/` operator keeps two
//! distinct code paths:
//!
//! * **Floating-point scalars**: pairwise division with no padding;
//!   operands are assumed equal-length and a mismatch truncates.
//! * **Integer scalars**: the zero-padding path; a shorter divisor pads
//!   with zero and the division panics, matching the language's integer
//!   division-by-zero behavior.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! vectorwise = { version = "0.1", default-features = false }
//! ```
//!
//! Only `alloc` is required; every operation allocates exactly one result
//! sequence and nothing else.
//!
//! ## Concurrency
//!
//! Every operation is a pure, stateless transformation over its inputs:
//! safely callable concurrently from multiple threads on distinct inputs,
//! with no internal state to race on.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - errors and padding utilities.
pub mod primitives;

// Layer 2: Scalar - numeric capability traits.
pub mod scalar;

// Layer 3: Engine - the element-wise combine engine and validation.
pub mod engine;

// Layer 4: Ops - the Vector capability and operator surface.
pub mod ops;

// Layer 5: API - fluent builder for configured element-wise arithmetic.
pub mod api;

// Standard vectorwise prelude.
pub mod prelude {
    pub use crate::api::{
        ElementwiseBuilder as Elementwise, ElementwiseEngine, LengthPolicy,
        LengthPolicy::{Strict, ZeroPad},
    };
    pub use crate::engine::combine::{add, broadcast, combine, divide, multiply, subtract};
    pub use crate::ops::components::Components;
    pub use crate::ops::vector::Vector;
    pub use crate::primitives::errors::VectorwiseError;
    pub use crate::primitives::padding::replicate;
    pub use crate::scalar::{Divisible, Scalar};
}
