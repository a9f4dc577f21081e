//! Arithmetic over GF(2^8) as defined by AES.
//!
//! This crate provides the finite-field primitives the rest of the
//! workspace builds on:
//! - Multiplication modulo the AES irreducible polynomial.
//! - Multiplicative inverse, via brute-force scan and via the extended
//!   Euclidean algorithm (the latter kept as a cross-check).
//!
//! The implementation aims for clarity and testability rather than
//! constant-time guarantees; it should not be treated as side-channel
//! hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod field;

pub use crate::field::{inverse, inverse_euclidean, mul, POLY};
