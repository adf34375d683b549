//! Elliptic curve primitives
//!
//! Only the pairing-friendly curve BLS12-381 is provided.

pub mod bls12_381;
