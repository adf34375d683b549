//! Error handling for the curve primitives
//!
//! The error type lives in `blsforge-api` so that every crate in the
//! workspace reports the same categories; this module re-exports it and adds
//! the validation helpers the primitives use to raise it.

pub use blsforge_api::error::{EncodingFault, Error, Result};

pub mod validate;
