//! `serde` support for scalars and affine points.
//!
//! Human-readable formats get the lowercase hex of the canonical encoding;
//! binary formats get the raw bytes as a fixed-size tuple. Points are
//! compressed, and deserialization runs the full subgroup check.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{G1Affine, G2Affine, Scalar, G1_COMPRESSED_SIZE, G2_COMPRESSED_SIZE, SCALAR_BYTES};
use crate::error::Error;
use blsforge_api::ByteSerializable;

/// Canonical fixed-size encoding shared by the serde impls
trait Canonical<const N: usize>: Sized {
    const EXPECTING: &'static str;

    fn encode(&self) -> [u8; N];
    fn decode(bytes: &[u8; N]) -> Result<Self, Error>;
}

impl Canonical<SCALAR_BYTES> for Scalar {
    const EXPECTING: &'static str = "a canonical 32-byte scalar";

    fn encode(&self) -> [u8; SCALAR_BYTES] {
        self.to_bytes()
    }

    fn decode(bytes: &[u8; SCALAR_BYTES]) -> Result<Self, Error> {
        <Scalar as ByteSerializable>::from_bytes(bytes)
    }
}

impl Canonical<G1_COMPRESSED_SIZE> for G1Affine {
    const EXPECTING: &'static str = "a 48-byte compressed G1 point";

    fn encode(&self) -> [u8; G1_COMPRESSED_SIZE] {
        self.to_compressed()
    }

    fn decode(bytes: &[u8; G1_COMPRESSED_SIZE]) -> Result<Self, Error> {
        G1Affine::from_compressed(bytes)
    }
}

impl Canonical<G2_COMPRESSED_SIZE> for G2Affine {
    const EXPECTING: &'static str = "a 96-byte compressed G2 point";

    fn encode(&self) -> [u8; G2_COMPRESSED_SIZE] {
        self.to_compressed()
    }

    fn decode(bytes: &[u8; G2_COMPRESSED_SIZE]) -> Result<Self, Error> {
        G2Affine::from_compressed(bytes)
    }
}

fn serialize<T, S, const N: usize>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Canonical<N>,
    S: Serializer,
{
    let bytes = value.encode();

    if serializer.is_human_readable() {
        let mut buf = [0u8; 192];
        let hex = &mut buf[..2 * N];
        hex::encode_to_slice(bytes, hex).map_err(serde::ser::Error::custom)?;
        let s = core::str::from_utf8(hex).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(s)
    } else {
        let mut tup = serializer.serialize_tuple(N)?;
        for b in bytes.iter() {
            tup.serialize_element(b)?;
        }
        tup.end()
    }
}

struct HexVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T: Canonical<N>, const N: usize> Visitor<'de> for HexVisitor<T, N> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "hex string of {}", T::EXPECTING)
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<T, E> {
        let mut bytes = [0u8; N];
        hex::decode_to_slice(s, &mut bytes).map_err(E::custom)?;
        T::decode(&bytes).map_err(E::custom)
    }
}

struct TupleVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T: Canonical<N>, const N: usize> Visitor<'de> for TupleVisitor<T, N> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(T::EXPECTING)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<T, A::Error> {
        let mut bytes = [0u8; N];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(i, &self))?;
        }
        T::decode(&bytes).map_err(de::Error::custom)
    }
}

fn deserialize<'de, T, D, const N: usize>(deserializer: D) -> Result<T, D::Error>
where
    T: Canonical<N>,
    D: Deserializer<'de>,
{
    if deserializer.is_human_readable() {
        deserializer.deserialize_str(HexVisitor::<T, N>(PhantomData))
    } else {
        deserializer.deserialize_tuple(N, TupleVisitor::<T, N>(PhantomData))
    }
}

macro_rules! impl_serde {
    ($name:ident, $size:expr) => {
        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serialize::<_, _, { $size }>(self, serializer)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                deserialize::<_, _, { $size }>(deserializer)
            }
        }
    };
}

impl_serde!(Scalar, SCALAR_BYTES);
impl_serde!(G1Affine, G1_COMPRESSED_SIZE);
impl_serde!(G2Affine, G2_COMPRESSED_SIZE);
