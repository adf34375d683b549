//! Traits implemented by the concrete curve types

pub mod pairing;
pub mod serialize;

pub use pairing::PairingEngine;
pub use serialize::{ByteSerializable, PointSerializable};
