//! Traits for byte serialization of curve types.

use crate::Result;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// A trait for public types with a canonical fixed-width byte encoding.
pub trait ByteSerializable: Sized {
    /// Width of the canonical encoding in bytes.
    const ENCODED_LEN: usize;

    /// Creates an object from a byte slice, rejecting anything that is not
    /// a canonical encoding of a valid value.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;

    /// Converts the object to its canonical byte encoding.
    #[cfg(feature = "alloc")]
    fn to_bytes(&self) -> Vec<u8>;
}

/// Group elements whose decoding may skip the prime-order subgroup check.
///
/// The unchecked path still rejects malformed encodings and points that are
/// off the curve. Callers must only use it for input already known to be in
/// the subgroup.
pub trait PointSerializable: ByteSerializable {
    /// Decodes without the subgroup membership check.
    fn from_bytes_unchecked(bytes: &[u8]) -> Result<Self>;
}
