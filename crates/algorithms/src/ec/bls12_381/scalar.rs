//! BLS12-381 scalar field `F_r` where r = 0x73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001
//!
//! Scalars are the exponents of both source groups. Arithmetic is constant-time
//! except for the explicitly named `*_vartime` helpers and `sqrt`.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};
use core::str::FromStr;

use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::arith::{add_mod, is_below, mont_mul, mont_reduce, neg_mod, sub_mod};
use crate::error::{validate, EncodingFault, Error, Result};
use blsforge_api::ByteSerializable;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// Size of the canonical little-endian scalar encoding
pub const SCALAR_BYTES: usize = 32;

// ============================================================================
// Field Constants
// ============================================================================

/// Group order r
const MODULUS: [u64; 4] = [
    0xffff_ffff_0000_0001,
    0x53bd_a402_fffe_5bfe,
    0x3339_d808_09a1_d805,
    0x73ed_a753_299d_7d48,
];

/// INV = -(r^{-1} mod 2^64) mod 2^64
const INV: u64 = 0xffff_fffe_ffff_ffff;

/// R = 2^256 mod r
const R: Scalar = Scalar([
    0x0000_0001_ffff_fffe,
    0x5884_b7fa_0003_4802,
    0x998c_4fef_ecbc_4ff5,
    0x1824_b159_acc5_056f,
]);

/// R^2 = 2^512 mod r
const R2: Scalar = Scalar([
    0xc999_e990_f3f2_9c6d,
    0x2b6c_edcb_8792_5c23,
    0x05d3_1496_7254_398f,
    0x0748_d9d9_9f59_ff11,
]);

/// R^3 = 2^768 mod r
const R3: Scalar = Scalar([
    0xc62c_1807_439b_73af,
    0x1b3e_0d18_8cf0_6990,
    0x73d1_3c71_c7b5_f418,
    0x6e2a_5bb9_c8db_33e9,
]);

/// 2-adicity of r - 1
const S: u32 = 32;

/// T = (r - 1) / 2^S
const T: [u64; 4] = [
    0xfffe_5bfe_ffff_ffff,
    0x09a1_d805_53bd_a402,
    0x299d_7d48_3339_d808,
    0x0000_0000_73ed_a753,
];

/// (T + 1) / 2
const T_PLUS_ONE_DIV_2: [u64; 4] = [
    0x7fff_2dff_8000_0000,
    0x04d0_ec02_a9de_d201,
    0x94ce_bea4_199c_ec04,
    0x0000_0000_39f6_d3a9,
];

/// Quadratic non-residue used to seed Tonelli-Shanks
const NON_RESIDUE: u64 = 7;

// ============================================================================
// Scalar Type
// ============================================================================

/// Element of the scalar field in Montgomery form: `Scalar(a) = aR mod r`, R = 2^256
#[derive(Clone, Copy, Eq)]
pub struct Scalar(pub(crate) [u64; 4]);

impl Scalar {
    /// Additive identity
    #[inline]
    pub const fn zero() -> Scalar {
        Scalar([0, 0, 0, 0])
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Scalar {
        R
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Scalar::zero())
    }

    /// Builds a scalar from four little-endian limbs, reducing modulo r
    pub const fn from_raw(val: [u64; 4]) -> Self {
        (&Scalar(val)).mul(&R2)
    }

    /// Canonical (non-Montgomery) little-endian limbs
    const fn to_canonical(self) -> [u64; 4] {
        mont_reduce(&self.0, &MODULUS, INV)
    }

    /// Add two scalars
    #[inline]
    pub const fn add(&self, rhs: &Self) -> Self {
        Scalar(add_mod(&self.0, &rhs.0, &MODULUS))
    }

    /// Subtract two scalars
    #[inline]
    pub const fn sub(&self, rhs: &Self) -> Self {
        Scalar(sub_mod(&self.0, &rhs.0, &MODULUS))
    }

    /// Negate a scalar
    #[inline]
    pub const fn neg(&self) -> Self {
        Scalar(neg_mod(&self.0, &MODULUS))
    }

    /// Double a scalar
    #[inline]
    pub const fn double(&self) -> Scalar {
        self.add(self)
    }

    /// Multiply two scalars
    #[inline]
    pub const fn mul(&self, rhs: &Self) -> Self {
        Scalar(mont_mul(&self.0, &rhs.0, &MODULUS, INV))
    }

    /// Square this scalar
    #[inline]
    pub const fn square(&self) -> Scalar {
        self.mul(self)
    }

    /// Exponentiation by a little-endian limb exponent of any length.
    ///
    /// Constant-time in the base and in the exponent bits; the running time
    /// depends only on `by.len()`.
    pub fn pow(&self, by: &[u64]) -> Self {
        let mut res = Self::one();
        for e in by.iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                let tmp = res * self;
                res.conditional_assign(&tmp, Choice::from(((*e >> i) & 1) as u8));
            }
        }
        res
    }

    /// Constant-time exponentiation by the integer value of another scalar
    pub fn pow_scalar(&self, exponent: &Scalar) -> Self {
        self.pow(&exponent.to_canonical())
    }

    /// Variable-time exponentiation by a little-endian limb exponent of any
    /// length; only for public exponents
    pub fn pow_vartime(&self, by: &[u64]) -> Self {
        let mut res = Self::one();
        for e in by.iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                if ((*e >> i) & 1) == 1 {
                    res *= self;
                }
            }
        }
        res
    }

    /// Multiplicative inverse; `None` for zero.
    ///
    /// Computes `self^(r - 2)` with a fixed addition chain.
    pub fn invert(&self) -> CtOption<Self> {
        #[inline(always)]
        fn square_assign_multi(n: &mut Scalar, num_times: usize) {
            for _ in 0..num_times {
                *n = n.square();
            }
        }

        let mut t0 = self.square();
        let mut t1 = t0 * self;
        let mut t16 = t0.square();
        let mut t6 = t16.square();
        let mut t5 = t6 * t0;
        t0 = t6 * t16;
        let mut t12 = t5 * t16;
        let mut t2 = t6.square();
        let mut t7 = t5 * t6;
        let mut t15 = t0 * t5;
        let mut t17 = t12.square();
        t1 *= t17;
        let mut t3 = t7 * t2;
        let t8 = t1 * t17;
        let t4 = t8 * t2;
        let t9 = t8 * t7;
        t7 = t4 * t5;
        let t11 = t4 * t17;
        t5 = t9 * t17;
        let t14 = t7 * t15;
        let t13 = t11 * t12;
        t12 = t11 * t17;
        t15 *= &t12;
        t16 *= &t15;
        t3 *= &t16;
        t17 *= &t3;
        t0 *= &t17;
        t6 *= &t0;
        t2 *= &t6;

        let tail: [(usize, &Scalar); 25] = [
            (8, &t17),
            (9, &t16),
            (9, &t15),
            (9, &t15),
            (7, &t14),
            (7, &t13),
            (10, &t12),
            (9, &t11),
            (8, &t8),
            (8, self),
            (14, &t9),
            (10, &t8),
            (15, &t7),
            (10, &t6),
            (8, &t5),
            (16, &t3),
            (8, &t2),
            (7, &t4),
            (9, &t2),
            (8, &t3),
            (8, &t2),
            (8, &t2),
            (8, &t2),
            (8, &t3),
            (8, &t2),
        ];
        let mut acc = t0;
        for (squarings, factor) in tail.iter() {
            square_assign_multi(&mut acc, *squarings);
            acc *= *factor;
        }
        square_assign_multi(&mut acc, 8);
        acc *= &t2;
        square_assign_multi(&mut acc, 5);
        acc *= &t1;
        square_assign_multi(&mut acc, 5);
        acc *= &t1;

        CtOption::new(acc, !self.is_zero())
    }

    /// `self / rhs`, failing with `DivisionByZero` when `rhs` is zero
    pub fn divide(&self, rhs: &Scalar) -> Result<Scalar> {
        validate::nonzero(!bool::from(rhs.is_zero()), "Scalar::divide")?;
        Ok(self * rhs.invert().unwrap_or(Scalar::zero()))
    }

    /// Square root via Tonelli-Shanks, if one exists.
    ///
    /// Variable-time in the input; only for public values.
    pub fn sqrt(&self) -> CtOption<Self> {
        if bool::from(self.is_zero()) {
            return CtOption::new(Scalar::zero(), Choice::from(1));
        }

        let mut c = Scalar::from(NON_RESIDUE).pow_vartime(&T);
        let mut t = self.pow_vartime(&T);
        let mut x = self.pow_vartime(&T_PLUS_ONE_DIV_2);
        let mut m = S;

        while t != Scalar::one() {
            // least i with t^(2^i) == 1
            let mut i = 1u32;
            let mut t2i = t.square();
            while i < m && t2i != Scalar::one() {
                t2i = t2i.square();
                i += 1;
            }
            if i == m {
                return CtOption::new(Scalar::zero(), Choice::from(0));
            }

            let mut b = c;
            for _ in 0..(m - i - 1) {
                b = b.square();
            }
            x *= b;
            c = b.square();
            t *= c;
            m = i;
        }

        CtOption::new(x, x.square().ct_eq(self))
    }
}

// ============================================================================
// Construction and Encoding
// ============================================================================

impl Scalar {
    /// Decode 32 little-endian bytes; `None` unless the value is below r
    pub fn from_bytes(bytes: &[u8; SCALAR_BYTES]) -> CtOption<Scalar> {
        let mut limbs = [0u64; 4];
        for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *limb = u64::from_le_bytes(word);
        }

        let is_canonical = Choice::from(is_below(&limbs, &MODULUS));
        CtOption::new(Scalar(limbs) * R2, is_canonical)
    }

    /// Encode as 32 little-endian bytes
    pub fn to_bytes(&self) -> [u8; SCALAR_BYTES] {
        let canonical = self.to_canonical();

        let mut res = [0u8; SCALAR_BYTES];
        for (chunk, limb) in res.chunks_exact_mut(8).zip(canonical.iter()) {
            chunk.copy_from_slice(&limb.to_le_bytes());
        }
        res
    }

    /// Reduces a 512-bit little-endian integer modulo r
    pub fn from_bytes_wide(bytes: &[u8; 64]) -> Scalar {
        let mut limbs = [0u64; 8];
        for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *limb = u64::from_le_bytes(word);
        }

        // lo + hi * 2^256
        let lo = Scalar([limbs[0], limbs[1], limbs[2], limbs[3]]);
        let hi = Scalar([limbs[4], limbs[5], limbs[6], limbs[7]]);
        lo * R2 + hi * R3
    }

    /// Reduces a little-endian integer of any length modulo r
    pub fn from_le_bytes_mod_order(bytes: &[u8]) -> Scalar {
        bytes.rchunks(8).fold(Scalar::zero(), |acc, chunk| {
            let mut word = [0u8; 8];
            word[..chunk.len()].copy_from_slice(chunk);
            let shift = Scalar::from(1u128 << (8 * chunk.len()));
            acc * shift + Scalar::from(u64::from_le_bytes(word))
        })
    }

    /// Uniformly random scalar
    pub fn random(mut rng: impl RngCore) -> Scalar {
        let mut bytes = [0u8; 64];
        rng.fill_bytes(&mut bytes);
        Scalar::from_bytes_wide(&bytes)
    }
}

impl From<u64> for Scalar {
    fn from(val: u64) -> Scalar {
        Scalar([val, 0, 0, 0]) * R2
    }
}

impl From<u128> for Scalar {
    fn from(val: u128) -> Scalar {
        Scalar([val as u64, (val >> 64) as u64, 0, 0]) * R2
    }
}

impl From<Scalar> for [u8; SCALAR_BYTES] {
    fn from(value: Scalar) -> [u8; SCALAR_BYTES] {
        value.to_bytes()
    }
}

impl<'a> From<&'a Scalar> for [u8; SCALAR_BYTES] {
    fn from(value: &'a Scalar) -> [u8; SCALAR_BYTES] {
        value.to_bytes()
    }
}

/// Parses a non-negative decimal integer of any size, reducing modulo r
impl FromStr for Scalar {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        validate::encoding(!s.is_empty(), "Scalar", EncodingFault::Malformed)?;

        let ten = Scalar::from(10u64);
        s.bytes().try_fold(Scalar::zero(), |acc, c| {
            validate::encoding(c.is_ascii_digit(), "Scalar", EncodingFault::Malformed)?;
            Ok(acc * ten + Scalar::from(u64::from(c - b'0')))
        })
    }
}

impl ByteSerializable for Scalar {
    const ENCODED_LEN: usize = SCALAR_BYTES;

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let bytes: &[u8; SCALAR_BYTES] = bytes
            .try_into()
            .map_err(|_| Error::length("Scalar", SCALAR_BYTES, bytes.len()))?;

        Option::from(Scalar::from_bytes(bytes))
            .ok_or(Error::encoding("Scalar", EncodingFault::NonCanonical))
    }

    #[cfg(feature = "alloc")]
    fn to_bytes(&self) -> Vec<u8> {
        Scalar::to_bytes(self).to_vec()
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x")?;
        for b in self.to_bytes().iter().rev() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

/// Lowercase hex of the little-endian encoding
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = [0u8; SCALAR_BYTES * 2];
        hex::encode_to_slice(self.to_bytes(), &mut buf).map_err(|_| fmt::Error)?;
        f.write_str(core::str::from_utf8(&buf).map_err(|_| fmt::Error)?)
    }
}

impl Default for Scalar {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl zeroize::DefaultIsZeroes for Scalar {}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0
            .iter()
            .zip(other.0.iter())
            .fold(Choice::from(1), |acc, (a, b)| acc & a.ct_eq(b))
    }
}

impl PartialEq for Scalar {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Scalar {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut limbs = [0u64; 4];
        for (i, limb) in limbs.iter_mut().enumerate() {
            *limb = u64::conditional_select(&a.0[i], &b.0[i], choice);
        }
        Scalar(limbs)
    }
}

impl<'a> Neg for &'a Scalar {
    type Output = Scalar;

    #[inline]
    fn neg(self) -> Scalar {
        self.neg()
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    #[inline]
    fn neg(self) -> Scalar {
        -&self
    }
}

impl<'a, 'b> Sub<&'b Scalar> for &'a Scalar {
    type Output = Scalar;

    #[inline]
    fn sub(self, rhs: &'b Scalar) -> Scalar {
        self.sub(rhs)
    }
}

impl<'a, 'b> Add<&'b Scalar> for &'a Scalar {
    type Output = Scalar;

    #[inline]
    fn add(self, rhs: &'b Scalar) -> Scalar {
        self.add(rhs)
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a Scalar {
    type Output = Scalar;

    #[inline]
    fn mul(self, rhs: &'b Scalar) -> Scalar {
        self.mul(rhs)
    }
}

impl_binops_additive!(Scalar, Scalar);
impl_binops_multiplicative!(Scalar, Scalar);

impl<T> core::iter::Sum<T> for Scalar
where
    T: core::borrow::Borrow<Scalar>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Self::zero(), |acc, item| acc + item.borrow())
    }
}

impl<T> core::iter::Product<T> for Scalar
where
    T: core::borrow::Borrow<Scalar>,
{
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Self::one(), |acc, item| acc * item.borrow())
    }
}
