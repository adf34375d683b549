//! G₁ group implementation for BLS12-381.
//!
//! Points on `E(Fp): y^2 = x^3 + 4` restricted to the order-r subgroup.
//! Projective arithmetic uses the complete formulas of
//! <https://eprint.iacr.org/2015/1060.pdf>, so the identity and doubling
//! cases need no branches.

use core::borrow::Borrow;
use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul, Neg, Sub};

use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use tracing::debug;

use super::encoding::{strip_flags, Flags};
use super::field::fp::Fp;
use super::{Scalar, BLS_X, BLS_X_IS_NEGATIVE};
use crate::error::{validate, EncodingFault, Error, Result};
use blsforge_api::{ByteSerializable, PointSerializable};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// Size of a compressed G₁ encoding.
pub const G1_COMPRESSED_SIZE: usize = 48;

/// Size of an uncompressed G₁ encoding.
pub const G1_UNCOMPRESSED_SIZE: usize = 96;

const CONTEXT: &str = "G1Affine";

/// Curve constant b = 4.
const B: Fp = Fp::from_raw_unchecked([
    0xaa27_0000_000c_fff3,
    0x53cc_0032_fc34_000a,
    0x478f_e97a_6b0a_807f,
    0xb1d3_7ebe_e6ba_24d7,
    0x8ec9_733b_bf78_ab2f,
    0x09d6_4551_3d83_de7e,
]);

/// Cube root of unity in Fp; `(x, y) -> (BETA * x, y)` acts on G₁ as -x^2.
const BETA: Fp = Fp::from_raw_unchecked([
    0x30f1_361b_798a_64e8,
    0xf3b8_ddab_7ece_5a2a,
    0x16a8_ca3a_c615_77f7,
    0xc26a_2ff8_74fd_029b,
    0x3636_b766_6070_1c6e,
    0x051b_a4ab_241b_6160,
]);

// ============================================================================
// Affine Points
// ============================================================================

/// G₁ point in affine coordinates.
#[derive(Copy, Clone, Debug)]
pub struct G1Affine {
    pub(crate) x: Fp,
    pub(crate) y: Fp,
    infinity: Choice,
}

impl Default for G1Affine {
    fn default() -> G1Affine {
        G1Affine::identity()
    }
}

impl zeroize::DefaultIsZeroes for G1Affine {}

/// Lowercase hex of the compressed encoding.
impl fmt::Display for G1Affine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = [0u8; G1_COMPRESSED_SIZE * 2];
        hex::encode_to_slice(self.to_compressed(), &mut buf).map_err(|_| fmt::Error)?;
        f.write_str(core::str::from_utf8(&buf).map_err(|_| fmt::Error)?)
    }
}

impl<'a> From<&'a G1Projective> for G1Affine {
    fn from(p: &'a G1Projective) -> G1Affine {
        let zinv = p.z.invert().unwrap_or(Fp::zero());
        let tmp = G1Affine {
            x: p.x * zinv,
            y: p.y * zinv,
            infinity: Choice::from(0u8),
        };

        G1Affine::conditional_select(&tmp, &G1Affine::identity(), zinv.is_zero())
    }
}

impl From<G1Projective> for G1Affine {
    fn from(p: G1Projective) -> G1Affine {
        G1Affine::from(&p)
    }
}

impl ConstantTimeEq for G1Affine {
    fn ct_eq(&self, other: &Self) -> Choice {
        (self.infinity & other.infinity)
            | ((!self.infinity)
                & (!other.infinity)
                & self.x.ct_eq(&other.x)
                & self.y.ct_eq(&other.y))
    }
}

impl ConditionallySelectable for G1Affine {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        G1Affine {
            x: Fp::conditional_select(&a.x, &b.x, choice),
            y: Fp::conditional_select(&a.y, &b.y, choice),
            infinity: Choice::conditional_select(&a.infinity, &b.infinity, choice),
        }
    }
}

impl Eq for G1Affine {}
impl PartialEq for G1Affine {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<'a> Neg for &'a G1Affine {
    type Output = G1Affine;

    #[inline]
    fn neg(self) -> G1Affine {
        G1Affine {
            x: self.x,
            y: Fp::conditional_select(&-self.y, &Fp::one(), self.infinity),
            infinity: self.infinity,
        }
    }
}

impl Neg for G1Affine {
    type Output = G1Affine;

    #[inline]
    fn neg(self) -> G1Affine {
        -&self
    }
}

impl<'a, 'b> Add<&'b G1Projective> for &'a G1Affine {
    type Output = G1Projective;

    #[inline]
    fn add(self, rhs: &'b G1Projective) -> G1Projective {
        rhs.add_mixed(self)
    }
}

impl<'a, 'b> Add<&'b G1Affine> for &'a G1Projective {
    type Output = G1Projective;

    #[inline]
    fn add(self, rhs: &'b G1Affine) -> G1Projective {
        self.add_mixed(rhs)
    }
}

impl<'a, 'b> Sub<&'b G1Projective> for &'a G1Affine {
    type Output = G1Projective;

    #[inline]
    fn sub(self, rhs: &'b G1Projective) -> G1Projective {
        self + &(-rhs)
    }
}

impl<'a, 'b> Sub<&'b G1Affine> for &'a G1Projective {
    type Output = G1Projective;

    #[inline]
    fn sub(self, rhs: &'b G1Affine) -> G1Projective {
        self + &(-rhs)
    }
}

impl_binops_additive!(G1Projective, G1Affine);
impl_binops_additive_specify_output!(G1Affine, G1Projective, G1Projective);

impl G1Affine {
    /// Point at infinity.
    pub fn identity() -> G1Affine {
        G1Affine {
            x: Fp::zero(),
            y: Fp::one(),
            infinity: Choice::from(1u8),
        }
    }

    /// The standard generator of G₁.
    pub fn generator() -> G1Affine {
        G1Affine {
            x: Fp::from_raw_unchecked([
                0x5cb3_8790_fd53_0c16,
                0x7817_fc67_9976_fff5,
                0x154f_95c7_143b_a1c1,
                0xf0ae_6acd_f3d0_e747,
                0xedce_6ecc_21db_f440,
                0x1201_7741_9e0b_fb75,
            ]),
            y: Fp::from_raw_unchecked([
                0xbaac_93d5_0ce7_2271,
                0x8c22_631a_7918_fd8e,
                0xdd59_5f13_5707_25ce,
                0x51ac_5829_5040_5194,
                0x0e1c_8c3f_ad00_59c0,
                0x0bbc_3efc_5008_a26a,
            ]),
            infinity: Choice::from(0u8),
        }
    }

    /// Whether this is the point at infinity.
    #[inline]
    pub fn is_identity(&self) -> Choice {
        self.infinity
    }

    /// Whether the point satisfies the curve equation.
    pub fn is_on_curve(&self) -> Choice {
        (self.y.square() - (self.x.square() * self.x)).ct_eq(&B) | self.infinity
    }

    /// Prime-order subgroup check: P is in G₁ iff `[-x^2] P == phi(P)`.
    ///
    /// Bowe, <https://eprint.iacr.org/2019/814.pdf>.
    pub fn is_torsion_free(&self) -> Choice {
        let minus_x_squared_times_p = G1Projective::from(self).mul_by_x().mul_by_x().neg();
        minus_x_squared_times_p.ct_eq(&G1Projective::from(self.endomorphism()))
    }

    fn endomorphism(&self) -> G1Affine {
        let mut res = *self;
        res.x *= BETA;
        res
    }

    /// Compressed 48-byte encoding: big-endian `x` with the flags in the top
    /// three bits.
    pub fn to_compressed(&self) -> [u8; G1_COMPRESSED_SIZE] {
        let mut res = Fp::conditional_select(&self.x, &Fp::zero(), self.infinity).to_bytes();

        // the flags describe public data
        let infinity = bool::from(self.infinity);
        Flags {
            compression: true,
            infinity,
            sign: !infinity && bool::from(self.y.lexicographically_largest()),
        }
        .write(&mut res);

        res
    }

    /// Uncompressed 96-byte encoding `x || y`.
    pub fn to_uncompressed(&self) -> [u8; G1_UNCOMPRESSED_SIZE] {
        let mut res = [0u8; G1_UNCOMPRESSED_SIZE];
        res[..48].copy_from_slice(&Fp::conditional_select(&self.x, &Fp::zero(), self.infinity).to_bytes());
        res[48..].copy_from_slice(&Fp::conditional_select(&self.y, &Fp::zero(), self.infinity).to_bytes());

        Flags {
            compression: false,
            infinity: bool::from(self.infinity),
            sign: false,
        }
        .write(&mut res);

        res
    }

    /// Decodes a compressed point, checking that it lies in G₁.
    pub fn from_compressed(bytes: &[u8; G1_COMPRESSED_SIZE]) -> Result<Self> {
        let p = Self::from_compressed_unchecked(bytes)?;
        validate::in_subgroup(bool::from(p.is_torsion_free()), CONTEXT).map_err(rejected)?;
        Ok(p)
    }

    /// Decodes a compressed point without the subgroup check.
    ///
    /// The flags, the canonical form of `x` and the existence of `y` are still
    /// validated. Use only for input that is already known to be in G₁.
    pub fn from_compressed_unchecked(bytes: &[u8; G1_COMPRESSED_SIZE]) -> Result<Self> {
        let flags = Flags::read(bytes);
        if flags.check(bytes, true, CONTEXT).map_err(rejected)? {
            return Ok(G1Affine::identity());
        }

        let x = Option::<Fp>::from(Fp::from_bytes(&strip_flags(bytes)))
            .ok_or_else(|| rejected(Error::encoding(CONTEXT, EncodingFault::NonCanonical)))?;

        // a missing square root means x is not the abscissa of a curve point
        let y = Option::<Fp>::from(((x.square() * x) + B).sqrt())
            .ok_or_else(|| rejected(Error::NotOnCurve { context: CONTEXT }))?;
        let y = Fp::conditional_select(
            &y,
            &-y,
            y.lexicographically_largest() ^ Choice::from(flags.sign as u8),
        );

        Ok(G1Affine {
            x,
            y,
            infinity: Choice::from(0u8),
        })
    }

    /// Decodes an uncompressed point, checking curve and subgroup membership.
    pub fn from_uncompressed(bytes: &[u8; G1_UNCOMPRESSED_SIZE]) -> Result<Self> {
        let p = Self::from_uncompressed_unchecked(bytes)?;
        validate::in_subgroup(bool::from(p.is_torsion_free()), CONTEXT).map_err(rejected)?;
        Ok(p)
    }

    /// Decodes an uncompressed point without the subgroup check.
    pub fn from_uncompressed_unchecked(bytes: &[u8; G1_UNCOMPRESSED_SIZE]) -> Result<Self> {
        let flags = Flags::read(bytes);
        if flags.check(bytes, false, CONTEXT).map_err(rejected)? {
            return Ok(G1Affine::identity());
        }

        let mut y_bytes = [0u8; 48];
        y_bytes.copy_from_slice(&bytes[48..]);

        let x = Fp::from_bytes(&strip_flags(&bytes[..48]));
        let y = Fp::from_bytes(&y_bytes);
        let p = Option::<G1Affine>::from(x.and_then(|x| {
            y.map(|y| G1Affine {
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
    debug!("rejected G1 encoding: {}", err);
    err
}

impl ByteSerializable for G1Affine {
    const ENCODED_LEN: usize = G1_COMPRESSED_SIZE;

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::length(CONTEXT, bytes.len(), G1_COMPRESSED_SIZE)?;
        let mut array = [0u8; G1_COMPRESSED_SIZE];
        array.copy_from_slice(bytes);
        G1Affine::from_compressed(&array)
    }

    #[cfg(feature = "alloc")]
    fn to_bytes(&self) -> Vec<u8> {
        self.to_compressed().to_vec()
    }
}

impl PointSerializable for G1Affine {
    fn from_bytes_unchecked(bytes: &[u8]) -> Result<Self> {
        validate::length(CONTEXT, bytes.len(), G1_COMPRESSED_SIZE)?;
        let mut array = [0u8; G1_COMPRESSED_SIZE];
        array.copy_from_slice(bytes);
        G1Affine::from_compressed_unchecked(&array)
    }
}

// ============================================================================
// Projective Points
// ============================================================================

/// G₁ point in homogeneous projective coordinates `(X : Y : Z)`, `x = X/Z`.
#[derive(Copy, Clone, Debug)]
pub struct G1Projective {
    pub(crate) x: Fp,
    pub(crate) y: Fp,
    pub(crate) z: Fp,
}

impl Default for G1Projective {
    fn default() -> G1Projective {
        G1Projective::identity()
    }
}

impl zeroize::DefaultIsZeroes for G1Projective {}

impl fmt::Display for G1Projective {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&G1Affine::from(self), f)
    }
}

impl<'a> From<&'a G1Affine> for G1Projective {
    fn from(p: &'a G1Affine) -> G1Projective {
        G1Projective {
            x: p.x,
            y: p.y,
            z: Fp::conditional_select(&Fp::one(), &Fp::zero(), p.infinity),
        }
    }
}

impl From<G1Affine> for G1Projective {
    fn from(p: G1Affine) -> G1Projective {
        G1Projective::from(&p)
    }
}

impl ConstantTimeEq for G1Projective {
    fn ct_eq(&self, other: &Self) -> Choice {
        // (X1 : Y1 : Z1) == (X2 : Y2 : Z2) iff X1 Z2 == X2 Z1 and Y1 Z2 == Y2 Z1
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

impl ConditionallySelectable for G1Projective {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        G1Projective {
            x: Fp::conditional_select(&a.x, &b.x, choice),
            y: Fp::conditional_select(&a.y, &b.y, choice),
            z: Fp::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl Eq for G1Projective {}
impl PartialEq for G1Projective {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<'a> Neg for &'a G1Projective {
    type Output = G1Projective;

    #[inline]
    fn neg(self) -> G1Projective {
        G1Projective {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }
}

impl Neg for G1Projective {
    type Output = G1Projective;

    #[inline]
    fn neg(self) -> G1Projective {
        -&self
    }
}

impl<'a, 'b> Add<&'b G1Projective> for &'a G1Projective {
    type Output = G1Projective;

    #[inline]
    fn add(self, rhs: &'b G1Projective) -> G1Projective {
        self.add(rhs)
    }
}

impl<'a, 'b> Sub<&'b G1Projective> for &'a G1Projective {
    type Output = G1Projective;

    #[inline]
    fn sub(self, rhs: &'b G1Projective) -> G1Projective {
        self + &(-rhs)
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a G1Projective {
    type Output = G1Projective;

    fn mul(self, other: &'b Scalar) -> Self::Output {
        self.multiply(&other.to_bytes())
    }
}

impl<'a, 'b> Mul<&'b G1Projective> for &'a Scalar {
    type Output = G1Projective;

    #[inline]
    fn mul(self, rhs: &'b G1Projective) -> Self::Output {
        rhs * self
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a G1Affine {
    type Output = G1Projective;

    fn mul(self, other: &'b Scalar) -> Self::Output {
        G1Projective::from(self).multiply(&other.to_bytes())
    }
}

impl<'a, 'b> Mul<&'b G1Affine> for &'a Scalar {
    type Output = G1Projective;

    #[inline]
    fn mul(self, rhs: &'b G1Affine) -> Self::Output {
        rhs * self
    }
}

impl_binops_additive!(G1Projective, G1Projective);
impl_binops_multiplicative!(G1Projective, Scalar);
impl_binops_multiplicative_mixed!(G1Affine, Scalar, G1Projective);
impl_binops_multiplicative_mixed!(Scalar, G1Affine, G1Projective);
impl_binops_multiplicative_mixed!(Scalar, G1Projective, G1Projective);

impl<T> Sum<T> for G1Projective
where
    T: Borrow<G1Projective>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Self::identity(), |acc, item| acc + item.borrow())
    }
}

#[inline(always)]
fn mul_by_3b(a: Fp) -> Fp {
    let a = a + a; // 2
    let a = a + a; // 4
    a + a + a // 12
}

impl G1Projective {
    /// Point at infinity.
    pub fn identity() -> G1Projective {
        G1Projective {
            x: Fp::zero(),
            y: Fp::one(),
            z: Fp::zero(),
        }
    }

    /// The standard generator of G₁.
    pub fn generator() -> G1Projective {
        G1Projective::from(G1Affine::generator())
    }

    /// Uniformly random element of G₁ other than the identity.
    pub fn random(mut rng: impl RngCore) -> Self {
        loop {
            let x = Fp::random(&mut rng);
            let flip_sign = rng.next_u32() % 2 != 0;

            let p = ((x.square() * x) + B).sqrt().map(|y| G1Affine {
                x,
                y: if flip_sign { -y } else { y },
                infinity: 0.into(),
            });

            if let Some(p) = Option::<G1Affine>::from(p) {
                let p = G1Projective::from(p).clear_cofactor();
                if !bool::from(p.is_identity()) {
                    return p;
                }
            }
        }
    }

    /// Point doubling (Algorithm 9 of eprint 2015/1060).
    pub fn double(&self) -> G1Projective {
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

        let tmp = G1Projective { x: x3, y: y3, z: z3 };
        G1Projective::conditional_select(&tmp, &G1Projective::identity(), self.is_identity())
    }

    /// Point addition (Algorithm 7 of eprint 2015/1060).
    pub fn add(&self, rhs: &G1Projective) -> G1Projective {
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

        G1Projective { x: x3, y: y3, z: z3 }
    }

    /// Mixed addition with an affine point (Algorithm 8 of eprint 2015/1060).
    pub fn add_mixed(&self, rhs: &G1Affine) -> G1Projective {
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

        let tmp = G1Projective { x: x3, y: y3, z: z3 };
        G1Projective::conditional_select(&tmp, self, rhs.is_identity())
    }

    /// Constant-time double-and-add over the little-endian scalar bytes.
    fn multiply(&self, by: &[u8; 32]) -> G1Projective {
        let mut acc = G1Projective::identity();

        // the top bit of a canonical scalar is always clear
        for bit in by
            .iter()
            .rev()
            .flat_map(|byte| (0..8).rev().map(move |i| Choice::from((byte >> i) & 1u8)))
            .skip(1)
        {
            acc = acc.double();
            acc = G1Projective::conditional_select(&acc, &(acc + self), bit);
        }

        acc
    }

    /// Multiplies by the curve parameter x.
    fn mul_by_x(&self) -> G1Projective {
        let mut xself = G1Projective::identity();
        // x has its lowest 16 bits clear
        let mut x = BLS_X >> 1;
        let mut tmp = *self;
        while x != 0 {
            tmp = tmp.double();

            if x % 2 == 1 {
                xself += tmp;
            }
            x >>= 1;
        }
        if BLS_X_IS_NEGATIVE {
            xself = -xself;
        }
        xself
    }

    /// Maps any curve point into G₁ by multiplying with `1 - x`.
    pub fn clear_cofactor(&self) -> G1Projective {
        self - self.mul_by_x()
    }

    /// Converts many points to affine form with a single inversion.
    pub fn batch_normalize(p: &[Self], q: &mut [G1Affine]) {
        assert_eq!(p.len(), q.len());

        let mut acc = Fp::one();
        for (p, q) in p.iter().zip(q.iter_mut()) {
            // prefix products, skipping points at infinity
            q.x = acc;
            acc = Fp::conditional_select(&(acc * p.z), &acc, p.is_identity());
        }

        // nonzero: only non-identity z values entered the product
        acc = acc.invert().unwrap_or(Fp::zero());

        for (p, q) in p.iter().rev().zip(q.iter_mut().rev()) {
            let skip = p.is_identity();

            let tmp = q.x * acc;
            acc = Fp::conditional_select(&(acc * p.z), &acc, skip);

            q.x = p.x * tmp;
            q.y = p.y * tmp;
            q.infinity = Choice::from(0u8);

            *q = G1Affine::conditional_select(q, &G1Affine::identity(), skip);
        }
    }

    /// Whether this is the point at infinity.
    #[inline]
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Whether the point satisfies `Y^2 Z = X^3 + b Z^3`.
    pub fn is_on_curve(&self) -> Choice {
        (self.y.square() * self.z).ct_eq(&(self.x.square() * self.x + self.z.square() * self.z * B))
            | self.z.is_zero()
    }

    /// Compressed encoding of the normalized point.
    pub fn to_compressed(&self) -> [u8; G1_COMPRESSED_SIZE] {
        G1Affine::from(self).to_compressed()
    }
}
