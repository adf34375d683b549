//! BLS12-381 arithmetic with constant-time implementation
//!
//! This crate provides the scalar field, the base-field tower, the G₁ and G₂
//! groups, the target group Gt and the optimal ate pairing of BLS12-381.
//! Every operation that may touch secret values runs in constant time.
//! The library is designed to be usable in both `std` and `no_std`
//! environments; batched pairings and multi-scalar multiplication need
//! `alloc`.
//!
//! # Features
//!
//! - `std` (default): implies `alloc`, enables `std::error::Error`
//! - `alloc`: [`ec::bls12_381::multi_pairing`], [`ec::bls12_381::G2Prepared`],
//!   multi-scalar multiplication
//! - `serde`: hex / byte serialization of scalars and affine points

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, EncodingFault, Error, Result};

// Elliptic curve primitives
pub mod ec;
pub use ec::bls12_381;
pub use ec::bls12_381::{
    pairing, G1Affine, G1Projective, G2Affine, G2Projective, Gt, MillerLoopResult, Scalar,
};

#[cfg(feature = "alloc")]
pub use ec::bls12_381::{multi_miller_loop, multi_pairing, pairing_check, Bls12, G2Prepared};
