//! # blsforge
//!
//! A constant-time implementation of the BLS12-381 pairing-friendly curve.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! blsforge = "0.3"
//! ```
//!
//! ```
//! use blsforge::prelude::*;
//!
//! let a = Scalar::from(1234u64);
//! let b = Scalar::from(4566u64);
//!
//! let g = G1Affine::from(G1Affine::generator() * a);
//! let h = G2Affine::from(G2Affine::generator() * b);
//! let c = G1Affine::from(G1Affine::generator() * (a * b));
//!
//! assert_eq!(pairing(&g, &h), pairing(&c, &G2Affine::generator()));
//! assert!(pairing_check(&[(g, h), (-g, h)]));
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support, implies `alloc`
//! - `alloc`: multi-pairing, prepared G2 points, multi-scalar multiplication
//! - `serde`: serialization of scalars and affine points
//! - `rand`: re-export of the `rand` crate used for sampling
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - [`blsforge-api`]: error types and public traits
//! - [`blsforge-algorithms`]: field, group and pairing arithmetic

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use blsforge_algorithms as algorithms;
pub use blsforge_api as api;

pub use blsforge_algorithms::ec::bls12_381;
pub use blsforge_api::{EncodingFault, Error, Result};

#[cfg(feature = "rand")]
pub use rand;
pub use subtle;
pub use zeroize;

/// Common imports for blsforge users
pub mod prelude {
    // Error types
    pub use crate::api::{EncodingFault, Error, Result};

    // Core traits
    pub use crate::api::{ByteSerializable, PairingEngine, PointSerializable};

    // Curve types
    pub use crate::bls12_381::{
        pairing, G1Affine, G1Projective, G2Affine, G2Projective, Gt, MillerLoopResult, Scalar,
    };

    #[cfg(feature = "alloc")]
    pub use crate::bls12_381::{
        multi_miller_loop, multi_pairing, pairing_check, Bls12, G2Prepared,
    };
}
