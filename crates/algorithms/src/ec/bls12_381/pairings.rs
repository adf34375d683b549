//! Optimal ate pairing on BLS12-381.
//!
//! The Miller loop runs over the bits of `|x|` with G₂ kept in Jacobian
//! coordinates; the line evaluations are sparse and land in
//! [`Fp12::mul_by_014`]. The final exponentiation uses the addition chain of
//! Hayashida, Hayasaka and Teruya (<https://eprint.iacr.org/2020/875.pdf>).

use core::borrow::Borrow;
use core::fmt;
use core::iter::Product;
use core::ops::{Add, Mul, Neg, Sub};

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use super::field::fp::Fp;
use super::field::fp12::Fp12;
use super::field::fp2::Fp2;
use super::field::fp6::Fp6;
use super::{G1Affine, G2Affine, G2Projective, Scalar, BLS_X, BLS_X_IS_NEGATIVE};

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
#[cfg(feature = "alloc")]
use blsforge_api::PairingEngine;
#[cfg(feature = "alloc")]
use tracing::{debug, trace};

#[cfg(feature = "alloc")]
use crate::error::{validate, Result};

/// Size of the canonical encoding of a [`Gt`] element
pub const GT_BYTES: usize = 576;

/// Output of a Miller loop, awaiting the final exponentiation.
///
/// Results of independent loops can be multiplied together so that a product
/// of pairings pays for a single final exponentiation.
#[derive(Copy, Clone, Debug)]
pub struct MillerLoopResult(pub(crate) Fp12);

impl Default for MillerLoopResult {
    fn default() -> Self {
        MillerLoopResult(Fp12::one())
    }
}

impl ConditionallySelectable for MillerLoopResult {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        MillerLoopResult(Fp12::conditional_select(&a.0, &b.0, choice))
    }
}

impl MillerLoopResult {
    /// Maps the loop output to its canonical representative in [`Gt`]
    pub fn final_exponentiation(&self) -> Gt {
        // f^|x| for f in the cyclotomic subgroup, then conjugated for x < 0
        fn cyclotomic_exp(f: Fp12) -> Fp12 {
            let mut tmp = Fp12::one();
            let mut found_one = false;
            for i in (0..64).rev().map(|b| ((BLS_X >> b) & 1) == 1) {
                if found_one {
                    tmp = tmp.cyclotomic_square();
                } else {
                    found_one = i;
                }

                if i {
                    tmp *= f;
                }
            }

            if BLS_X_IS_NEGATIVE {
                tmp.conjugate()
            } else {
                tmp
            }
        }

        let f = self.0;

        // easy part: f^((p^6 - 1)(p^2 + 1))
        let t0 = f.conjugate();
        let mut t1 = f.invert().unwrap_or(Fp12::zero());
        let mut t2 = t0 * t1;
        t1 = t2;
        t2 = t2.frobenius_map().frobenius_map() * t1;

        // hard part
        t1 = t2.cyclotomic_square().conjugate();
        let mut t3 = cyclotomic_exp(t2);
        let mut t4 = t3.cyclotomic_square();
        let mut t5 = t1 * t3;
        t1 = cyclotomic_exp(t5);
        let t0 = cyclotomic_exp(t1);
        let mut t6 = cyclotomic_exp(t0);
        t6 *= t4;
        t4 = cyclotomic_exp(t6);
        t5 = t5.conjugate();
        t4 *= t5 * t2;
        t5 = t2.conjugate();
        t1 *= t2;
        t1 = t1.frobenius_map().frobenius_map().frobenius_map();
        t6 *= t5;
        t6 = t6.frobenius_map();
        t3 *= t0;
        t3 = t3.frobenius_map().frobenius_map();
        t3 *= t1;
        t3 *= t6;

        Gt(t3 * t4)
    }
}

impl<'a, 'b> Mul<&'b MillerLoopResult> for &'a MillerLoopResult {
    type Output = MillerLoopResult;

    #[inline]
    fn mul(self, rhs: &'b MillerLoopResult) -> MillerLoopResult {
        MillerLoopResult(self.0 * rhs.0)
    }
}

impl_binops_multiplicative!(MillerLoopResult, MillerLoopResult);

/// Element of the order-r subgroup of `Fp12*`, written multiplicatively.
#[derive(Copy, Clone, Debug)]
pub struct Gt(pub(crate) Fp12);

impl Default for Gt {
    fn default() -> Self {
        Self::one()
    }
}

impl zeroize::DefaultIsZeroes for Gt {}

impl fmt::Display for Gt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = [0u8; GT_BYTES * 2];
        hex::encode_to_slice(self.to_bytes(), &mut buf).map_err(|_| fmt::Error)?;
        f.write_str(core::str::from_utf8(&buf).map_err(|_| fmt::Error)?)
    }
}

impl ConstantTimeEq for Gt {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl ConditionallySelectable for Gt {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Gt(Fp12::conditional_select(&a.0, &b.0, choice))
    }
}

impl Eq for Gt {}
impl PartialEq for Gt {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl Gt {
    /// Group identity
    pub fn one() -> Gt {
        Gt(Fp12::one())
    }

    /// Additive identity of `Fp12`; not a group element.
    ///
    /// Only meaningful together with the additive operators, which act on
    /// the underlying `Fp12` and generally leave the group.
    pub fn zero() -> Gt {
        Gt(Fp12::zero())
    }

    /// `e(G1::generator(), G2::generator())`
    pub fn generator() -> Gt {
        Gt(GT_GENERATOR)
    }

    /// Whether this is the group identity
    pub fn is_one(&self) -> Choice {
        self.0.ct_eq(&Fp12::one())
    }

    /// Group inverse. Elements of `Gt` are unitary, so this is conjugation.
    pub fn invert(&self) -> Gt {
        Gt(self.0.conjugate())
    }

    /// `self * self`
    pub fn square(&self) -> Gt {
        Gt(self.0.square())
    }

    /// Constant-time `self^k`
    pub fn pow(&self, k: &Scalar) -> Gt {
        let bytes = k.to_bytes();
        let mut acc = Gt::one();

        // the top bit of a canonical scalar is always clear
        for bit in bytes
            .iter()
            .rev()
            .flat_map(|byte| (0..8).rev().map(move |i| Choice::from((byte >> i) & 1u8)))
            .skip(1)
        {
            acc = acc.square();
            acc = Gt::conditional_select(&acc, &(acc * self), bit);
        }

        acc
    }

    /// Big-endian coefficients in tower order, `c0.c0.c0` first
    pub fn to_bytes(&self) -> [u8; GT_BYTES] {
        let f = &self.0;
        let coeffs = [
            f.c0.c0.c0, f.c0.c0.c1, f.c0.c1.c0, f.c0.c1.c1, f.c0.c2.c0, f.c0.c2.c1,
            f.c1.c0.c0, f.c1.c0.c1, f.c1.c1.c0, f.c1.c1.c1, f.c1.c2.c0, f.c1.c2.c1,
        ];

        let mut res = [0u8; GT_BYTES];
        for (chunk, c) in res.chunks_exact_mut(48).zip(coeffs.iter()) {
            chunk.copy_from_slice(&c.to_bytes());
        }
        res
    }
}

impl<'a, 'b> Mul<&'b Gt> for &'a Gt {
    type Output = Gt;

    #[inline]
    fn mul(self, rhs: &'b Gt) -> Gt {
        Gt(self.0 * rhs.0)
    }
}

impl_binops_multiplicative!(Gt, Gt);

// Field addition in Fp12. The results are generally not in the group, so
// the pairing code never uses these.

impl<'a, 'b> Add<&'b Gt> for &'a Gt {
    type Output = Gt;

    #[inline]
    fn add(self, rhs: &'b Gt) -> Gt {
        Gt(self.0 + rhs.0)
    }
}

impl<'a, 'b> Sub<&'b Gt> for &'a Gt {
    type Output = Gt;

    #[inline]
    fn sub(self, rhs: &'b Gt) -> Gt {
        Gt(self.0 - rhs.0)
    }
}

impl<'a> Neg for &'a Gt {
    type Output = Gt;

    #[inline]
    fn neg(self) -> Gt {
        Gt(-self.0)
    }
}

impl Neg for Gt {
    type Output = Gt;

    #[inline]
    fn neg(self) -> Gt {
        -&self
    }
}

impl_binops_additive!(Gt, Gt);

impl<T> Product<T> for Gt
where
    T: Borrow<Gt>,
{
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Self::one(), |acc, item| acc * item.borrow())
    }
}

/// One step of the Miller loop, either evaluating lines into an accumulator
/// or recording their coefficients.
trait MillerLoopDriver {
    type Output;

    fn doubling_step(&mut self, f: Self::Output) -> Self::Output;
    fn addition_step(&mut self, f: Self::Output) -> Self::Output;
    fn square_output(f: Self::Output) -> Self::Output;
    fn conjugate(f: Self::Output) -> Self::Output;
    fn one() -> Self::Output;
}

fn miller_loop<D: MillerLoopDriver>(driver: &mut D) -> D::Output {
    let mut f = D::one();

    let mut found_one = false;
    for i in (0..64).rev().map(|b| (((BLS_X >> 1) >> b) & 1) == 1) {
        if !found_one {
            found_one = i;
            continue;
        }

        f = driver.doubling_step(f);

        if i {
            f = driver.addition_step(f);
        }

        f = D::square_output(f);
    }

    f = driver.doubling_step(f);

    if BLS_X_IS_NEGATIVE {
        f = D::conjugate(f);
    }

    f
}

/// Line coefficients of one Miller loop step
type LineCoeffs = (Fp2, Fp2, Fp2);

fn scale(a: &Fp2, k: &Fp) -> Fp2 {
    Fp2 {
        c0: a.c0 * k,
        c1: a.c1 * k,
    }
}

/// Evaluates a line at `p` and multiplies it into `f`
fn ell(f: Fp12, coeffs: &LineCoeffs, p: &G1Affine) -> Fp12 {
    let c0 = scale(&coeffs.0, &p.y);
    let c1 = scale(&coeffs.1, &p.x);

    f.mul_by_014(&coeffs.2, &c1, &c0)
}

/// Doubles `r` in Jacobian coordinates and returns the tangent line
fn doubling_step(r: &mut G2Projective) -> LineCoeffs {
    let tmp0 = r.x.square();
    let tmp1 = r.y.square();
    let tmp2 = tmp1.square();
    let tmp3 = (tmp1 + r.x).square() - tmp0 - tmp2;
    let tmp3 = tmp3 + tmp3;
    let tmp4 = tmp0 + tmp0 + tmp0;
    let mut tmp6 = r.x + tmp4;
    let tmp5 = tmp4.square();
    let zsquared = r.z.square();
    r.x = tmp5 - tmp3 - tmp3;
    r.z = (r.z + r.y).square() - tmp1 - zsquared;
    r.y = (tmp3 - r.x) * tmp4;
    let tmp2 = tmp2 + tmp2;
    let tmp2 = tmp2 + tmp2;
    let tmp2 = tmp2 + tmp2;
    r.y -= tmp2;
    let tmp3 = tmp4 * zsquared;
    let tmp3 = -(tmp3 + tmp3);
    tmp6 = tmp6.square() - tmp0 - tmp5;
    let tmp1 = tmp1 + tmp1;
    let tmp1 = tmp1 + tmp1;
    tmp6 -= tmp1;
    let tmp0 = r.z * zsquared;
    let tmp0 = tmp0 + tmp0;

    (tmp0, tmp3, tmp6)
}

/// Sets `r = r + q` in Jacobian coordinates and returns the chord line
fn addition_step(r: &mut G2Projective, q: &G2Affine) -> LineCoeffs {
    let zsquared = r.z.square();
    let ysquared = q.y.square();
    let t0 = zsquared * q.x;
    let t1 = ((q.y + r.z).square() - ysquared - zsquared) * zsquared;
    let t2 = t0 - r.x;
    let t3 = t2.square();
    let t4 = t3 + t3;
    let t4 = t4 + t4;
    let t5 = t4 * t2;
    let t6 = t1 - r.y - r.y;
    let t9 = t6 * q.x;
    let t7 = t4 * r.x;
    r.x = t6.square() - t5 - t7 - t7;
    r.z = (r.z + t2).square() - zsquared - t3;
    let t10 = q.y + r.z;
    let t8 = (t7 - r.x) * t6;
    let t0 = r.y * t5;
    let t0 = t0 + t0;
    r.y = t8 - t0;
    let t10 = t10.square() - ysquared;
    let ztsquared = r.z.square();
    let t10 = t10 - ztsquared;
    let t9 = t9 + t9 - t10;
    let t10 = r.z + r.z;
    let t6 = -t6;
    let t1 = t6 + t6;

    (t10, t1, t9)
}

/// Computes `e(p, q)`.
///
/// If either input is the identity the result is [`Gt::one`].
pub fn pairing(p: &G1Affine, q: &G2Affine) -> Gt {
    struct Adder {
        cur: G2Projective,
        base: G2Affine,
        p: G1Affine,
    }

    impl MillerLoopDriver for Adder {
        type Output = Fp12;

        fn doubling_step(&mut self, f: Self::Output) -> Self::Output {
            let coeffs = doubling_step(&mut self.cur);
            ell(f, &coeffs, &self.p)
        }
        fn addition_step(&mut self, f: Self::Output) -> Self::Output {
            let coeffs = addition_step(&mut self.cur, &self.base);
            ell(f, &coeffs, &self.p)
        }
        fn square_output(f: Self::Output) -> Self::Output {
            f.square()
        }
        fn conjugate(f: Self::Output) -> Self::Output {
            f.conjugate()
        }
        fn one() -> Self::Output {
            Fp12::one()
        }
    }

    // run the loop on generators instead, then discard the result
    let either_identity = p.is_identity() | q.is_identity();
    let p = G1Affine::conditional_select(p, &G1Affine::generator(), either_identity);
    let q = G2Affine::conditional_select(q, &G2Affine::generator(), either_identity);

    let mut adder = Adder {
        cur: G2Projective::from(q),
        base: q,
        p,
    };

    let tmp = miller_loop(&mut adder);
    let tmp = MillerLoopResult(Fp12::conditional_select(
        &tmp,
        &Fp12::one(),
        either_identity,
    ));
    tmp.final_exponentiation()
}

/// A G₂ point with its Miller loop line coefficients precomputed, for use
/// with [`multi_miller_loop`].
#[cfg(feature = "alloc")]
#[derive(Clone, Debug)]
pub struct G2Prepared {
    infinity: Choice,
    coeffs: Vec<LineCoeffs>,
}

#[cfg(feature = "alloc")]
impl From<G2Affine> for G2Prepared {
    fn from(q: G2Affine) -> G2Prepared {
        struct Adder {
            cur: G2Projective,
            base: G2Affine,
            coeffs: Vec<LineCoeffs>,
        }

        impl MillerLoopDriver for Adder {
            type Output = ();

            fn doubling_step(&mut self, _: Self::Output) -> Self::Output {
                let coeffs = doubling_step(&mut self.cur);
                self.coeffs.push(coeffs);
            }
            fn addition_step(&mut self, _: Self::Output) -> Self::Output {
                let coeffs = addition_step(&mut self.cur, &self.base);
                self.coeffs.push(coeffs);
            }
            fn square_output(_: Self::Output) -> Self::Output {}
            fn conjugate(_: Self::Output) -> Self::Output {}
            fn one() -> Self::Output {}
        }

        let is_identity = q.is_identity();
        let q = G2Affine::conditional_select(&q, &G2Affine::generator(), is_identity);

        let mut adder = Adder {
            cur: G2Projective::from(q),
            base: q,
            coeffs: Vec::with_capacity(68),
        };

        miller_loop(&mut adder);

        debug_assert_eq!(adder.coeffs.len(), 68);

        G2Prepared {
            infinity: is_identity,
            coeffs: adder.coeffs,
        }
    }
}

#[cfg(feature = "alloc")]
impl<'a> From<&'a G2Affine> for G2Prepared {
    fn from(q: &'a G2Affine) -> G2Prepared {
        G2Prepared::from(*q)
    }
}

/// Runs one interleaved Miller loop over all `terms`.
///
/// Terms where either point is the identity contribute nothing. The result
/// still needs [`MillerLoopResult::final_exponentiation`].
#[cfg(feature = "alloc")]
pub fn multi_miller_loop(terms: &[(&G1Affine, &G2Prepared)]) -> MillerLoopResult {
    struct Adder<'a, 'b, 'c> {
        terms: &'c [(&'a G1Affine, &'b G2Prepared)],
        index: usize,
    }

    impl<'a, 'b, 'c> Adder<'a, 'b, 'c> {
        fn step(&mut self, mut f: Fp12) -> Fp12 {
            let index = self.index;
            for term in self.terms {
                let either_identity = term.0.is_identity() | term.1.infinity;

                let new_f = ell(f, &term.1.coeffs[index], term.0);
                f = Fp12::conditional_select(&new_f, &f, either_identity);
            }
            self.index += 1;

            f
        }
    }

    impl<'a, 'b, 'c> MillerLoopDriver for Adder<'a, 'b, 'c> {
        type Output = Fp12;

        fn doubling_step(&mut self, f: Self::Output) -> Self::Output {
            self.step(f)
        }
        fn addition_step(&mut self, f: Self::Output) -> Self::Output {
            self.step(f)
        }
        fn square_output(f: Self::Output) -> Self::Output {
            f.square()
        }
        fn conjugate(f: Self::Output) -> Self::Output {
            f.conjugate()
        }
        fn one() -> Self::Output {
            Fp12::one()
        }
    }

    let mut adder = Adder { terms, index: 0 };

    MillerLoopResult(miller_loop(&mut adder))
}

/// Computes `prod e(ps[i], qs[i])` with one Miller loop pass and a single
/// final exponentiation.
///
/// Fails with `LengthMismatch` when the slices differ in length. The empty
/// product is [`Gt::one`].
#[cfg(feature = "alloc")]
pub fn multi_pairing(ps: &[G1Affine], qs: &[G2Affine]) -> Result<Gt> {
    validate::same_length("multi_pairing", ps.len(), qs.len()).map_err(|err| {
        debug!("rejected pairing input: {}", err);
        err
    })?;
    trace!("multi_pairing over {} terms", ps.len());

    let prepared: Vec<G2Prepared> = qs.iter().map(G2Prepared::from).collect();
    let terms: Vec<(&G1Affine, &G2Prepared)> = ps.iter().zip(prepared.iter()).collect();

    Ok(multi_miller_loop(&terms).final_exponentiation())
}

/// Returns true iff `prod e(p, q)` over `pairs` is the identity of [`Gt`].
///
/// An empty slice passes.
#[cfg(feature = "alloc")]
pub fn pairing_check(pairs: &[(G1Affine, G2Affine)]) -> bool {
    trace!("pairing_check over {} terms", pairs.len());

    let prepared: Vec<G2Prepared> = pairs.iter().map(|(_, q)| G2Prepared::from(q)).collect();
    let terms: Vec<(&G1Affine, &G2Prepared)> = pairs
        .iter()
        .map(|(p, _)| p)
        .zip(prepared.iter())
        .collect();

    bool::from(multi_miller_loop(&terms).final_exponentiation().is_one())
}

/// The BLS12-381 pairing engine
#[cfg(feature = "alloc")]
#[derive(Clone, Copy, Debug, Default)]
pub struct Bls12;

#[cfg(feature = "alloc")]
impl PairingEngine for Bls12 {
    type Scalar = Scalar;
    type G1 = G1Affine;
    type G2 = G2Affine;
    type Gt = Gt;

    fn pairing(p: &G1Affine, q: &G2Affine) -> Gt {
        pairing(p, q)
    }

    fn multi_pairing(ps: &[G1Affine], qs: &[G2Affine]) -> Result<Gt> {
        multi_pairing(ps, qs)
    }

    fn pairing_check(pairs: &[(G1Affine, G2Affine)]) -> bool {
        pairing_check(pairs)
    }
}

/// `e(G1::generator(), G2::generator())` in Montgomery form
const GT_GENERATOR: Fp12 = Fp12 {
    c0: Fp6 {
        c0: Fp2 {
            c0: Fp::from_raw_unchecked([
                0x1972_e433_a01f_85c5,
                0x97d3_2b76_fd77_2538,
                0xc8ce_546f_c96b_cdf9,
                0xcef6_3e73_66d4_0614,
                0xa611_3427_8184_3780,
                0x13f3_448a_3fc6_d825,
            ]),
            c1: Fp::from_raw_unchecked([
                0xd263_31b0_2e9d_6995,
                0x9d68_a482_f779_7e7d,
                0x9c9b_2924_8d39_ea92,
                0xf480_1ca2_e131_07aa,
                0xa16c_0732_bdbc_b066,
                0x083c_a4af_ba36_0478,
            ]),
        },
        c1: Fp2 {
            c0: Fp::from_raw_unchecked([
                0x59e2_61db_0916_b641,
                0x2716_b6f4_b23e_960d,
                0xc8e5_5b10_a0bd_9c45,
                0x0bdb_0bd9_9c4d_eda8,
                0x8cf8_9ebf_57fd_aac5,
                0x12d6_b792_9e77_7a5e,
            ]),
            c1: Fp::from_raw_unchecked([
                0x5fc8_5188_b0e1_5f35,
                0x34a0_6e3a_8f09_6365,
                0xdb31_26a6_e02a_d62c,
                0xfc6f_5aa9_7d9a_990b,
                0xa12f_55f5_eb89_c210,
                0x1723_703a_926f_8889,
            ]),
        },
        c2: Fp2 {
            c0: Fp::from_raw_unchecked([
                0x9358_8f29_7182_8778,
                0x43f6_5b86_11ab_7585,
                0x3183_aaf5_ec27_9fdf,
                0xfa73_d7e1_8ac9_9df6,
                0x64e1_76a6_a64c_99b0,
                0x179f_a78c_5838_8f1f,
            ]),
            c1: Fp::from_raw_unchecked([
                0x672a_0a11_ca2a_ef12,
                0x0d11_b9b5_2aa3_f16b,
                0xa444_12d0_699d_056e,
                0xc01d_0177_221a_5ba5,
                0x66e0_cede_6c73_5529,
                0x05f5_a71e_9fdd_c339,
            ]),
        },
    },
    c1: Fp6 {
        c0: Fp2 {
            c0: Fp::from_raw_unchecked([
                0xd30a_88a1_b062_c679,
                0x5ac5_6a5d_35fc_8304,
                0xd0c8_34a6_a81f_290d,
                0xcd54_30c2_da37_07c7,
                0xf0c2_7ff7_8050_0af0,
                0x0924_5da6_e2d7_2eae,
            ]),
            c1: Fp::from_raw_unchecked([
                0x9f2e_0676_791b_5156,
                0xe2d1_c823_4918_fe13,
                0x4c9e_459f_3c56_1bf4,
                0xa3e8_5e53_b9d3_e3c1,
                0x820a_121e_21a7_0020,
                0x15af_6183_41c5_9acc,
            ]),
        },
        c1: Fp2 {
            c0: Fp::from_raw_unchecked([
                0x7c95_658c_2499_3ab1,
                0x73eb_3872_1ca8_86b9,
                0x5256_d749_4774_34bc,
                0x8ba4_1902_ea50_4a8b,
                0x04a3_d3f8_0c86_ce6d,
                0x18a6_4a87_fb68_6eaa,
            ]),
            c1: Fp::from_raw_unchecked([
                0xbb83_e71b_b920_cf26,
                0x2a52_77ac_92a7_3945,
                0xfc0e_e59f_94f0_46a0,
                0x7158_cdf3_7860_58f7,
                0x7cc1_061b_82f9_45f6,
                0x03f8_47aa_9fdb_e567,
            ]),
        },
        c2: Fp2 {
            c0: Fp::from_raw_unchecked([
                0x8078_dba5_6134_e657,
                0x1cd7_ec9a_4399_8a6e,
                0xb1aa_599a_1a99_3766,
                0xc9a0_f62f_0842_ee44,
                0x8e15_9be3_b605_dffa,
                0x0c86_ba0d_4af1_3fc2,
            ]),
            c1: Fp::from_raw_unchecked([
                0xe80f_f2a0_6a52_ffb1,
                0x7694_ca48_721a_906c,
                0x7583_183e_03b0_8514,
                0xf567_afdd_40ce_e4e2,
                0x9a6d_96d2_e526_a5fc,
                0x197e_9f49_861f_2242,
            ]),
        },
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_exponentiation_of_one() {
        assert_eq!(MillerLoopResult::default().final_exponentiation(), Gt::one());
    }

    #[test]
    fn test_gt_generator_is_unitary() {
        let g = Gt::generator();
        assert_eq!(g * g.invert(), Gt::one());
        assert!(!bool::from(g.is_one()));
    }

    #[test]
    fn test_gt_pow_small_exponents() {
        let g = Gt::generator();
        assert_eq!(g.pow(&Scalar::zero()), Gt::one());
        assert_eq!(g.pow(&Scalar::one()), g);
        assert_eq!(g.pow(&Scalar::from(3u64)), g * g * g);
        assert_eq!(g.pow(&-Scalar::one()), g.invert());
    }

    #[test]
    fn test_gt_bytes_layout() {
        let bytes = Gt::one().to_bytes();
        // c0.c0.c0 = 1 is the first big-endian coefficient
        assert_eq!(bytes[47], 1);
        assert!(bytes.iter().enumerate().all(|(i, b)| i == 47 || *b == 0));
        assert_eq!(Gt::zero().to_bytes(), [0u8; GT_BYTES]);
    }

    #[test]
    fn test_gt_field_addition() {
        let g = Gt::generator();
        let one = Gt::one();

        assert_eq!(g + Gt::zero(), g);
        assert_eq!(g - g, Gt::zero());
        assert_eq!(-g + g, Gt::zero());
        assert_eq!(-(-g), g);
        assert_eq!((g + one) - one, g);

        // distributes over the field multiplication
        assert_eq!(g * (one + one), g + g);

        let mut acc = g;
        acc += one;
        acc -= &g;
        assert_eq!(acc, one);

        // 1 + 1 is not unitary
        assert!(!bool::from((one + one).is_one()));
        assert_ne!((one + one) * (one + one).invert(), one);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_prepared_identity() {
        let prepared = G2Prepared::from(G2Affine::identity());
        assert!(bool::from(prepared.infinity));
        assert_eq!(prepared.coeffs.len(), 68);

        let g = G1Affine::generator();
        let res = multi_miller_loop(&[(&g, &prepared)]).final_exponentiation();
        assert_eq!(res, Gt::one());
    }
}
