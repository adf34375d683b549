//! G₂ group implementation for BLS12-381.
//!
//! Points on the sextic twist `E'(Fp2): y^2 = x^3 + 4(u + 1)` restricted to
//! the order-r subgroup. Encodings write the `c1` half of each coordinate
//! before `c0`.

use core::borrow::Borrow;
use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul, Neg, Sub};

use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use tracing::debug;

use super::encoding::{strip_flags, Flags};
use super::field::fp::Fp;
use super::field::fp2::Fp2;
use super::{Scalar, BLS_X, BLS_X_IS_NEGATIVE};
use crate::error::{validate, EncodingFault, Error, Result};
use blsforge_api::{ByteSerializable, PointSerializable};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// Size of a compressed G₂ encoding.
pub const G2_COMPRESSED_SIZE: usize = 96;

/// Size of an uncompressed G₂ encoding.
pub const G2_UNCOMPRESSED_SIZE: usize = 192;

const CONTEXT: &str = "G2Affine";

/// Curve constant B = 4(u + 1).
const B: Fp2 = Fp2 {
    c0: Fp::from_raw_unchecked([
        0xaa27_0000_000c_fff3,
        0x53cc_0032_fc34_000a,
        0x478f_e97a_6b0a_807f,
        0xb1d3_7ebe_e6ba_24d7,
        0x8ec9_733b_bf78_ab2f,
        0x09d6_4551_3d83_de7e,
    ]),
    c1: Fp::from_raw_unchecked([
        0xaa27_0000_000c_fff3,
        0x53cc_0032_fc34_000a,
        0x478f_e97a_6b0a_807f,
        0xb1d3_7ebe_e6ba_24d7,
        0x8ec9_733b_bf78_ab2f,
        0x09d6_4551_3d83_de7e,
    ]),
};

const B3: Fp2 = Fp2::add(&Fp2::add(&B, &B), &B);

#[inline(always)]
fn mul_by_3b(a: Fp2) -> Fp2 {
    a * B3
}

/// Reads a 96-byte `c1 || c0` block; the caller strips any flag bits first.
fn fp2_from_bytes(bytes: &[u8]) -> CtOption<Fp2> {
    let mut c1 = [0u8; 48];
    let mut c0 = [0u8; 48];
    c1.copy_from_slice(&bytes[..48]);
    c0.copy_from_slice(&bytes[48..96]);

    Fp::from_bytes(&c0).and_then(|c0| Fp::from_bytes(&c1).map(|c1| Fp2 { c0, c1 }))
}

fn fp2_to_bytes(f: &Fp2, out: &mut [u8]) {
    out[..48].copy_from_slice(&f.c1.to_bytes());
    out[48..96].copy_from_slice(&f.c0.to_bytes());
}

// ============================================================================
// Affine Points
// ============================================================================

/// G₂ point in affine coordinates.
#[derive(Copy, Clone, Debug)]
pub struct G2Affine {
    pub(crate) x: Fp2,
    pub(crate) y: Fp2,
    infinity: Choice,
}

impl Default for G2Affine {
    fn default() -> G2Affine {
        G2Affine::identity()
    }
}

impl zeroize::DefaultIsZeroes for G2Affine {}

/// Lowercase hex of the compressed encoding.
impl fmt::Display for G2Affine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = [0u8; G2_COMPRESSED_SIZE * 2];
        hex::encode_to_slice(self.to_compressed(), &mut buf).map_err(|_| fmt::Error)?;
        f.write_str(core::str::from_utf8(&buf).map_err(|_| fmt::Error)?)
    }
}

impl<'a> From<&'a G2Projective> for G2Affine {
    fn from(p: &'a G2Projective) -> G2Affine {
        let zinv = p.z.invert().unwrap_or(Fp2::zero());
        let tmp = G2Affine {
            x: p.x * zinv,
            y: p.y * zinv,
            infinity: Choice::from(0u8),
        };

        G2Affine::conditional_select(&tmp, &G2Affine::identity(), zinv.is_zero())
    }
}

impl From<G2Projective> for G2Affine {
    fn from(p: G2Projective) -> G2Affine {
        G2Affine::from(&p)
    }
}

impl ConstantTimeEq for G2Affine {
    fn ct_eq(&self, other: &Self) -> Choice {
        (self.infinity & other.infinity)
            | ((!self.infinity)
                & (!other.infinity)
                & self.x.ct_eq(&other.x)
                & self.y.ct_eq(&other.y))
    }
}

impl ConditionallySelectable for G2Affine {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        G2Affine {
            x: Fp2::conditional_select(&a.x, &b.x, choice),
            y: Fp2::conditional_select(&a.y, &b.y, choice),
            infinity: Choice::conditional_select(&a.infinity, &b.infinity, choice),
        }
    }
}

impl Eq for G2Affine {}
impl PartialEq for G2Affine {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<'a> Neg for &'a G2Affine {
    type Output = G2Affine;

    #[inline]
    fn neg(self) -> G2Affine {
        G2Affine {
            x: self.x,
            y: Fp2::conditional_select(&-self.y, &Fp2::one(), self.infinity),
            infinity: self.infinity,
        }
    }
}

impl Neg for G2Affine {
    type Output = G2Affine;

    #[inline]
    fn neg(self) -> G2Affine {
        -&self
    }
}

impl<'a, 'b> Add<&'b G2Projective> for &'a G2Affine {
    type Output = G2Projective;

    #[inline]
    fn add(self, rhs: &'b G2Projective) -> G2Projective {
        rhs.add_mixed(self)
    }
}

impl<'a, 'b> Add<&'b G2Affine> for &'a G2Projective {
    type Output = G2Projective;

    #[inline]
    fn add(self, rhs: &'b G2Affine) -> G2Projective {
        self.add_mixed(rhs)
    }
}

impl<'a, 'b> Sub<&'b G2Projective> for &'a G2Affine {
    type Output = G2Projective;

    #[inline]
    fn sub(self, rhs: &'b G2Projective) -> G2Projective {
        self + &(-rhs)
    }
}

impl<'a, 'b> Sub<&'b G2Affine> for &'a G2Projective {
    type Output = G2Projective;

    #[inline]
    fn sub(self, rhs: &'b G2Affine) -> G2Projective {
        self + &(-rhs)
    }
}

impl_binops_additive!(G2Projective, G2Affine);
impl_binops_additive_specify_output!(G2Affine, G2Projective, G2Projective);

impl G2Affine {
    /// Point at infinity.
    pub fn identity() -> G2Affine {
        G2Affine {
            x: Fp2::zero(),
            y: Fp2::one(),
            infinity: Choice::from(1u8),
        }
    }

    /// The standard generator of G₂.
    pub fn generator() -> G2Affine {
        G2Affine {
            x: Fp2 {
                c0: Fp::from_raw_unchecked([
                    0xf5f2_8fa2_0294_0a10,
                    0xb3f5_fb26_87b4_961a,
                    0xa1a8_93b5_3e2a_e580,
                    0x9894_999d_1a3c_aee9,
                    0x6f67_b763_1863_366b,
                    0x0581_9192_4350_bcd7,
                ]),
                c1: Fp::from_raw_unchecked([
                    0xa5a9_c075_9e23_f606,
                    0xaaa0_c59d_bccd_60c3,
                    0x3bb1_7e18_e286_7806,
                    0x1b1a_b6cc_8541_b367,
                    0xc2b6_ed0e_f215_8547,
                    0x1192_2a09_7360_edf3,
                ]),
            },
            y: Fp2 {
                c0: Fp::from_raw_unchecked([
                    0x4c73_0af8_6049_4c4a,
                    0x597c_fa1f_5e36_9c5a,
                    0xe7e6_856c_aa0a_635a,
                    0xbbef_b5e9_6e0d_495f,
                    0x07d3_a975_f0ef_25a2,
                    0x0083_fd8e_7e80_dae5,
                ]),
                c1: Fp::from_raw_unchecked([
                    0xadc0_fc92_df64_b05d,
                    0x18aa_270a_2b14_61dc,
                    0x86ad_ac6a_3be4_eba0,
                    0x7949_5c4e_c93d_a33a,
                    0xe717_5850_a43c_caed,
                    0x0b2b_c2a1_63de_1bf2,
                ]),
            },
            infinity: Choice::from(0u8),
        }
    }

    /// Whether this is the point at infinity.
    #[inline]
    pub fn is_identity(&self) -> Choice {
        self.infinity
    }

    /// Whether the point satisfies the twisted curve equation.
    pub fn is_on_curve(&self) -> Choice {
        (self.y.square() - (self.x.square() * self.x)).ct_eq(&B) | self.infinity
    }

    /// Prime-order subgroup check: P is in G₂ iff `psi(P) == [x] P`.
    ///
    /// Section 4 of <https://eprint.iacr.org/2021/1130>, with the corrected
    /// proof in <https://eprint.iacr.org/2022/352>.
    pub fn is_torsion_free(&self) -> Choice {
        let p = G2Projective::from(self);
        p.psi().ct_eq(&p.mul_by_x())
    }

    /// Compressed 96-byte encoding of `x` (`c1 || c0`) with the flags in the
    /// top three bits.
    pub fn to_compressed(&self) -> [u8; G2_COMPRESSED_SIZE] {
        let x = Fp2::conditional_select(&self.x, &Fp2::zero(), self.infinity);

        let mut res = [0u8; G2_COMPRESSED_SIZE];
        fp2_to_bytes(&x, &mut res);

        let infinity = bool::from(self.infinity);
        Flags {
            compression: true,
            infinity,
            sign: !infinity && bool::from(self.y.lexicographically_largest()),
        }
        .write(&mut res);

        res
    }

    /// Uncompressed 192-byte encoding `x || y`.
    pub fn to_uncompressed(&self) -> [u8; G2_UNCOMPRESSED_SIZE] {
        let x = Fp2::conditional_select(&self.x, &Fp2::zero(), self.infinity);
        let y = Fp2::conditional_select(&self.y, &Fp2::zero(), self.infinity);

        let mut res = [0u8; G2_UNCOMPRESSED_SIZE];
        fp2_to_bytes(&x, &mut res[..96]);
        fp2_to_bytes(&y, &mut res[96..]);

        Flags {
            compression: false,
            infinity: bool::from(self.infinity),
            sign: false,
        }
        .write(&mut res);

        res
    }

    /// Decodes a compressed point, checking that it lies in G₂.
    pub fn from_compressed(bytes: &[u8; G2_COMPRESSED_SIZE]) -> Result<Self> {
        let p = Self::from_compressed_unchecked(bytes)?;
        validate::in_subgroup(bool::from(p.is_torsion_free()), CONTEXT).map_err(rejected)?;
        Ok(p)
    }

    /// Decodes a compressed point without the subgroup check.
    ///
    /// The flags, the canonical form of `x` and the existence of `y` are still
    /// validated.
    pub fn from_compressed_unchecked(bytes: &[u8; G2_COMPRESSED_SIZE]) -> Result<Self> {
        let flags = Flags::read(bytes);
        if flags.check(bytes, true, CONTEXT).map_err(rejected)? {
            return Ok(G2Affine::identity());
        }

        let mut x_bytes = *bytes;
        x_bytes[..48].copy_from_slice(&strip_flags::<48>(bytes));
        let x = Option::<Fp2>::from(fp2_from_bytes(&x_bytes))
            .ok_or_else(|| rejected(Error::encoding(CONTEXT, EncodingFault::NonCanonical)))?;

        let y = Option::<Fp2>::from(((x.square() * x) + B).sqrt())
            .ok_or_else(|| rejected(Error::NotOnCurve { context: CONTEXT }))?;
        let y = Fp2::conditional_select(
            &y,
            &-y,
            y.lexicographically_largest() ^ Choice::from(flags.sign as u8),
        );

        Ok(G2Affine {
            x,
            y,
            infinity: Choice::from(0u8),
        })
    }

    /// Decodes an uncompressed point, checking curve and subgroup membership.
    pub fn from_uncompressed(bytes: &[u8; G2_UNCOMPRESSED_SIZE]) -> Result<Self> {
        let p = Self::from_uncompressed_unchecked(bytes)?;
        validate::in_subgroup(bool::from(p.is_torsion_free()), CONTEXT).map_err(rejected)?;
        Ok(p)
    }

    /// Decodes an uncompressed point without the subgroup check.
    pub fn from_uncompressed_unchecked(bytes: &[u8; G2_UNCOMPRESSED_SIZE]) -> Result<Self> {
        let flags = Flags::read(bytes);
        if flags.check(bytes, false, CONTEXT).map_err(rejected)? {
            return Ok(G2Affine::identity());
        }

        let mut x_bytes = [0u8; 96];
        x_bytes.copy_from_slice(&bytes[..96]);
        x_bytes[..48].copy_from_slice(&strip_flags::<48>(bytes));

        let x = fp2_from_bytes(&x_bytes);
        let y = fp2_from_bytes(&bytes[96..]);
        let p = Option::<G2Affine>::from(x.and_then(|x| {
            y.map(|y| G2Affine {
                x,
                y,
                infinity: Choice::from(0u8),
            })
        }))
        .ok_or_else(|| rejected(Error::encoding(CONTEXT, EncodingFault::NonCanonical)))?;

        validate::on_curve(bool::from(p.is_on_curve()), CONTEXT).map_err(rejected)?;
        Ok(p)
    }
}

fn rejected(err: Error) -> Error {
    debug!("rejected G2 encoding: {}", err);
    err
}

impl ByteSerializable for G2Affine {
    const ENCODED_LEN: usize = G2_COMPRESSED_SIZE;

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::length(CONTEXT, bytes.len(), G2_COMPRESSED_SIZE)?;
        let mut array = [0u8; G2_COMPRESSED_SIZE];
        array.copy_from_slice(bytes);
        G2Affine::from_compressed(&array)
    }

    #[cfg(feature = "alloc")]
    fn to_bytes(&self) -> Vec<u8> {
        self.to_compressed().to_vec()
    }
}

impl PointSerializable for G2Affine {
    fn from_bytes_unchecked(bytes: &[u8]) -> Result<Self> {
        validate::length(CONTEXT, bytes.len(), G2_COMPRESSED_SIZE)?;
        let mut array = [0u8; G2_COMPRESSED_SIZE];
        array.copy_from_slice(bytes);
        G2Affine::from_compressed_unchecked(&array)
    }
}

// ============================================================================
// Projective Points
// ============================================================================

/// G₂ point in homogeneous projective coordinates.
#[derive(Copy, Clone, Debug)]
pub struct G2Projective {
    pub(crate) x: Fp2,
    pub(crate) y: Fp2,
    pub(crate) z: Fp2,
}

impl Default for G2Projective {
    fn default() -> G2Projective {
        G2Projective::identity()
    }
}

impl zeroize::DefaultIsZeroes for G2Projective {}

impl fmt::Display for G2Projective {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&G2Affine::from(self), f)
    }
}

impl<'a> From<&'a G2Affine> for G2Projective {
    fn from(p: &'a G2Affine) -> G2Projective {
        G2Projective {
            x: p.x,
            y: p.y,
            z: Fp2::conditional_select(&Fp2::one(), &Fp2::zero(), p.infinity),
        }
    }
}

impl From<G2Affine> for G2Projective {
    fn from(p: G2Affine) -> G2Projective {
        G2Projective::from(&p)
    }
}

impl ConstantTimeEq for G2Projective {
    fn ct_eq(&self, other: &Self) -> Choice {
        let x1 = self.x * other.z;
        let x2 = other.x * self.z;
        let y1 = self.y * other.z;
        let y2 = other.y * self.z;

        let self_is_zero = self.z.is_zero();
        let other_is_zero = other.z.is_zero();

        (self_is_zero & other_is_zero)
            | ((!self_is_zero) & (!other_is_zero) & x1.ct_eq(&x2) & y1.ct_eq(&y2))
    }
}

impl ConditionallySelectable for G2Projective {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        G2Projective {
            x: Fp2::conditional_select(&a.x, &b.x, choice),
            y: Fp2::conditional_select(&a.y, &b.y, choice),
            z: Fp2::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl Eq for G2Projective {}
impl PartialEq for G2Projective {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<'a> Neg for &'a G2Projective {
    type Output = G2Projective;

    #[inline]
    fn neg(self) -> G2Projective {
        G2Projective {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }
}

impl Neg for G2Projective {
    type Output = G2Projective;

    #[inline]
    fn neg(self) -> G2Projective {
        -&self
    }
}

impl<'a, 'b> Add<&'b G2Projective> for &'a G2Projective {
    type Output = G2Projective;

    #[inline]
    fn add(self, rhs: &'b G2Projective) -> G2Projective {
        self.add(rhs)
    }
}

impl<'a, 'b> Sub<&'b G2Projective> for &'a G2Projective {
    type Output = G2Projective;

    #[inline]
    fn sub(self, rhs: &'b G2Projective) -> G2Projective {
        self + &(-rhs)
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a G2Projective {
    type Output = G2Projective;

    fn mul(self, other: &'b Scalar) -> Self::Output {
        self.multiply(&other.to_bytes())
    }
}

impl<'a, 'b> Mul<&'b G2Projective> for &'a Scalar {
    type Output = G2Projective;

    #[inline]
    fn mul(self, rhs: &'b G2Projective) -> Self::Output {
        rhs * self
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a G2Affine {
    type Output = G2Projective;

    fn mul(self, other: &'b Scalar) -> Self::Output {
        G2Projective::from(self).multiply(&other.to_bytes())
    }
}

impl<'a, 'b> Mul<&'b G2Affine> for &'a Scalar {
    type Output = G2Projective;

    #[inline]
    fn mul(self, rhs: &'b G2Affine) -> Self::Output {
        rhs * self
    }
}

impl_binops_additive!(G2Projective, G2Projective);
impl_binops_multiplicative!(G2Projective, Scalar);
impl_binops_multiplicative_mixed!(G2Affine, Scalar, G2Projective);
impl_binops_multiplicative_mixed!(Scalar, G2Affine, G2Projective);
impl_binops_multiplicative_mixed!(Scalar, G2Projective, G2Projective);

impl<T> Sum<T> for G2Projective
where
    T: Borrow<G2Projective>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Self::identity(), |acc, item| acc + item.borrow())
    }
}

impl G2Projective {
    /// Point at infinity.
    pub fn identity() -> G2Projective {
        G2Projective {
            x: Fp2::zero(),
            y: Fp2::one(),
            z: Fp2::zero(),
        }
    }

    /// The standard generator of G₂.
    pub fn generator() -> G2Projective {
        G2Projective::from(G2Affine::generator())
    }

    /// Uniformly random element of G₂ other than the identity.
    pub fn random(mut rng: impl RngCore) -> Self {
        loop {
            let x = Fp2::random(&mut rng);
            let flip_sign = rng.next_u32() % 2 != 0;

            let p = ((x.square() * x) + B).sqrt().map(|y| G2Affine {
                x,
                y: if flip_sign { -y } else { y },
                infinity: 0.into(),
            });

            if let Some(p) = Option::<G2Affine>::from(p) {
                let p = G2Projective::from(p).clear_cofactor();
                if !bool::from(p.is_identity()) {
                    return p;
                }
            }
        }
    }

    /// Point doubling.
    pub fn double(&self) -> G2Projective {
        let t0 = self.y.square();
        let z3 = t0 + t0;
        let z3 = z3 + z3;
        let z3 = z3 + z3;
        let t1 = self.y * self.z;
        let t2 = self.z.square();
        let t2 = mul_by_3b(t2);
        let x3 = t2 * z3;
        let y3 = t0 + t2;
        let z3 = t1 * z3;
        let t1 = t2 + t2;
        let t2 = t1 + t2;
        let t0 = t0 - t2;
        let y3 = t0 * y3;
        let y3 = x3 + y3;
        let t1 = self.x * self.y;
        let x3 = t0 * t1;
        let x3 = x3 + x3;

        let tmp = G2Projective { x: x3, y: y3, z: z3 };
        G2Projective::conditional_select(&tmp, &G2Projective::identity(), self.is_identity())
    }

    /// Point addition.
    pub fn add(&self, rhs: &G2Projective) -> G2Projective {
        let t0 = self.x * rhs.x;
        let t1 = self.y * rhs.y;
        let t2 = self.z * rhs.z;
        let t3 = self.x + self.y;
        let t4 = rhs.x + rhs.y;
        let t3 = t3 * t4;
        let t4 = t0 + t1;
        let t3 = t3 - t4;
        let t4 = self.y + self.z;
        let x3 = rhs.y + rhs.z;
        let t4 = t4 * x3;
        let x3 = t1 + t2;
        let t4 = t4 - x3;
        let x3 = self.x + self.z;
        let y3 = rhs.x + rhs.z;
        let x3 = x3 * y3;
        let y3 = t0 + t2;
        let y3 = x3 - y3;
        let x3 = t0 + t0;
        let t0 = x3 + t0;
        let t2 = mul_by_3b(t2);
        let z3 = t1 + t2;
        let t1 = t1 - t2;
        let y3 = mul_by_3b(y3);
        let x3 = t4 * y3;
        let t2 = t3 * t1;
        let x3 = t2 - x3;
        let y3 = y3 * t0;
        let t1 = t1 * z3;
        let y3 = t1 + y3;
        let t0 = t0 * t3;
        let z3 = z3 * t4;
        let z3 = z3 + t0;

        G2Projective { x: x3, y: y3, z: z3 }
    }

    /// Mixed addition with an affine point.
    pub fn add_mixed(&self, rhs: &G2Affine) -> G2Projective {
        let t0 = self.x * rhs.x;
        let t1 = self.y * rhs.y;
        let t3 = rhs.x + rhs.y;
        let t4 = self.x + self.y;
        let t3 = t3 * t4;
        let t4 = t0 + t1;
        let t3 = t3 - t4;
        let t4 = rhs.y * self.z;
        let t4 = t4 + self.y;
        let y3 = rhs.x * self.z;
        let y3 = y3 + self.x;
        let x3 = t0 + t0;
        let t0 = x3 + t0;
        let t2 = mul_by_3b(self.z);
        let z3 = t1 + t2;
        let t1 = t1 - t2;
        let y3 = mul_by_3b(y3);
        let x3 = t4 * y3;
        let t2 = t3 * t1;
        let x3 = t2 - x3;
        let y3 = y3 * t0;
        let t1 = t1 * z3;
        let y3 = t1 + y3;
        let t0 = t0 * t3;
        let z3 = z3 * t4;
        let z3 = z3 + t0;

        let tmp = G2Projective { x: x3, y: y3, z: z3 };
        G2Projective::conditional_select(&tmp, self, rhs.is_identity())
    }

    fn multiply(&self, by: &[u8; 32]) -> G2Projective {
        let mut acc = G2Projective::identity();

        for bit in by
            .iter()
            .rev()
            .flat_map(|byte| (0..8).rev().map(move |i| Choice::from((byte >> i) & 1u8)))
            .skip(1)
        {
            acc = acc.double();
            acc = G2Projective::conditional_select(&acc, &(acc + self), bit);
        }

        acc
    }

    fn mul_by_x(&self) -> G2Projective {
        let mut xself = G2Projective::identity();
        let mut x = BLS_X >> 1;
        let mut acc = *self;
        while x != 0 {
            acc = acc.double();
            if x % 2 == 1 {
                xself += acc;
            }
            x >>= 1;
        }
        if BLS_X_IS_NEGATIVE {
            xself = -xself;
        }
        xself
    }

    /// The untwist-Frobenius-twist endomorphism.
    fn psi(&self) -> G2Projective {
        // 1 / ((u + 1) ^ ((p - 1) / 3))
        let psi_coeff_x = Fp2 {
            c0: Fp::zero(),
            c1: Fp::from_raw_unchecked([
                0x890d_c9e4_8675_45c3,
                0x2af3_2253_3285_a5d5,
                0x5088_0866_309b_7e2c,
                0xa20d_1b8c_7e88_1024,
                0x14e4_f04f_e2db_9068,
                0x14e5_6d3f_1564_853a,
            ]),
        };
        // 1 / ((u + 1) ^ ((p - 1) / 2))
        let psi_coeff_y = Fp2 {
            c0: Fp::from_raw_unchecked([
                0x3e2f_585d_a55c_9ad1,
                0x4294_213d_86c1_8183,
                0x3828_44c8_8b62_3732,
                0x92ad_2afd_1910_3e18,
                0x1d79_4e4f_ac7c_f0b9,
                0x0bd5_92fc_7d82_5ec8,
            ]),
            c1: Fp::from_raw_unchecked([
                0x7bcf_a7a2_5aa3_0fda,
                0xdc17_dec1_2a92_7e7c,
                0x2f08_8dd8_6b4e_bef1,
                0xd1ca_2087_da74_d4a7,
                0x2da2_5966_96ce_bc1d,
                0x0e2b_7eed_bbfd_87d2,
            ]),
        };

        G2Projective {
            x: self.x.frobenius_map() * psi_coeff_x,
            y: self.y.frobenius_map() * psi_coeff_y,
            z: self.z.frobenius_map(),
        }
    }

    /// `psi` applied twice, which needs no Frobenius map.
    fn psi2(&self) -> G2Projective {
        // 1 / 2 ^ ((p - 1) / 3)
        let psi2_coeff_x = Fp2 {
            c0: Fp::from_raw_unchecked([
                0xcd03_c9e4_8671_f071,
                0x5dab_2246_1fcd_a5d2,
                0x5870_42af_d385_1b95,
                0x8eb6_0ebe_01ba_cb9e,
                0x03f9_7d6e_83d0_50d2,
                0x18f0_2065_5463_8741,
            ]),
            c1: Fp::zero(),
        };

        G2Projective {
            x: self.x * psi2_coeff_x,
            y: -self.y,
            z: self.z,
        }
    }

    /// Maps any twist point into G₂.
    ///
    /// Budroni-Pintore, <https://eprint.iacr.org/2017/419.pdf>:
    /// `h(psi) P = [x^2 - x - 1] P + [x - 1] psi(P) + psi^2(2P)`.
    pub fn clear_cofactor(&self) -> G2Projective {
        let t1 = self.mul_by_x(); // [x] P
        let t2 = self.psi(); // psi(P)

        self.double().psi2() // psi^2(2P)
            + (t1 + t2).mul_by_x() // [x^2] P + [x] psi(P)
            - t1
            - t2
            - self
    }

    /// Converts many points to affine form with a single inversion.
    pub fn batch_normalize(p: &[Self], q: &mut [G2Affine]) {
        assert_eq!(p.len(), q.len());

        let mut acc = Fp2::one();
        for (p, q) in p.iter().zip(q.iter_mut()) {
            q.x = acc;
            acc = Fp2::conditional_select(&(acc * p.z), &acc, p.is_identity());
        }

        acc = acc.invert().unwrap_or(Fp2::zero());

        for (p, q) in p.iter().rev().zip(q.iter_mut().rev()) {
            let skip = p.is_identity();

            let tmp = q.x * acc;
            acc = Fp2::conditional_select(&(acc * p.z), &acc, skip);

            q.x = p.x * tmp;
            q.y = p.y * tmp;
            q.infinity = Choice::from(0u8);

            *q = G2Affine::conditional_select(q, &G2Affine::identity(), skip);
        }
    }

    /// Whether this is the point at infinity.
    #[inline]
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Whether the point satisfies `Y^2 Z = X^3 + B Z^3`.
    pub fn is_on_curve(&self) -> Choice {
        (self.y.square() * self.z).ct_eq(&(self.x.square() * self.x + self.z.square() * self.z * B))
            | self.z.is_zero()
    }

    /// Compressed encoding of the normalized point.
    pub fn to_compressed(&self) -> [u8; G2_COMPRESSED_SIZE] {
        G2Affine::from(self).to_compressed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_psi_is_multiplication_by_x_on_g2() {
        let g = G2Projective::generator();
        assert_eq!(g.psi(), g.mul_by_x());
        assert_eq!(g.psi().psi(), g.psi2());
    }

    #[test]
    fn test_clear_cofactor_lands_in_subgroup() {
        let mut rng = rand::rngs::OsRng;
        for _ in 0..4 {
            let p = G2Projective::random(&mut rng);
            assert!(bool::from(G2Affine::from(p).is_torsion_free()));
            assert!(bool::from(p.is_on_curve()));
        }
    }

    #[test]
    fn test_multiply_matches_repeated_addition() {
        let g = G2Projective::generator();
        assert_eq!(g * Scalar::from(3u64), g + g + g);
        assert_eq!(g * -Scalar::one(), -g);
    }
}
