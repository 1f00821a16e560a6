//! # Deterministic Random Number Generation
//!
//! This crate provides the seeded generator behind daily puzzle content:
//! a given seed always yields the same stream of values in [0, 1).
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: Output depends on the seed and call count only
//! - **Portability**: 32-bit wrapping arithmetic, bit-identical everywhere
//! - **Explicit state**: The generator is an owned value advanced via `&mut self`
//! - **Independence**: No dependencies on `daily_core`; any integer seed works
//!
//! ## Module Structure
//!
//! - [`Mulberry32`]: The generator, with batch fills and `rand` trait impls
//! - [`mulberry32()`]: Closure factory over [`Mulberry32`]
//!
//! ## Usage Example
//!
//! ```rust
//! use daily_rng::{mulberry32, Mulberry32};
//!
//! // Struct form: caller owns the state
//! let mut rng = Mulberry32::new(20261018);
//! let u = rng.next_f64();
//! assert!((0.0..1.0).contains(&u));
//!
//! // Closure form
//! let mut next = mulberry32(20261018);
//! assert_eq!(next(), u);
//!
//! // Batch generation into a pre-allocated buffer
//! let mut buffer = vec![0.0; 64];
//! rng.fill_uniform(&mut buffer);
//! ```
//!
//! ## Security
//!
//! Mulberry32 is not cryptographically secure. Do not use it for keys,
//! tokens or anything an adversary could benefit from predicting.

#![deny(missing_docs)]

mod mulberry32;

pub use mulberry32::{mulberry32, Mulberry32};
