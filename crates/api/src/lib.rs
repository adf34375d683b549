//! Public API traits and error types for the blsforge library
//!
//! This crate provides the public API surface shared by the blsforge crates:
//! the error taxonomy reported by every fallible operation and the traits the
//! concrete BLS12-381 types implement.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{EncodingFault, Error, Result};

// Re-export all traits from the traits module
pub use traits::{ByteSerializable, PairingEngine, PointSerializable};

// Re-export trait modules for direct access
pub use traits::{pairing, serialize};
