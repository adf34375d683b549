//! Multi-scalar multiplication `sum [k_i] P_i` over either source group.
//!
//! [`msm`] is constant-time in the scalars: a fixed-window interleaved
//! method whose table lookups are linear scans with conditional selection.
//! [`msm_vartime`] is Pippenger's bucket method and branches on scalar bits,
//! so it must only see public scalars.

use alloc::vec;
use alloc::vec::Vec;

use subtle::{ConditionallySelectable, ConstantTimeEq};
use tracing::trace;

use super::{G1Affine, G1Projective, G2Affine, G2Projective, Scalar};
use crate::error::{validate, Result};

/// Group operations the MSM routines need from a projective point type
pub trait MsmGroup: Copy + ConditionallySelectable {
    /// Affine form accepted as input
    type Affine: Copy;

    /// Context reported in length errors and logs
    const NAME: &'static str;

    /// The point at infinity
    fn identity() -> Self;

    /// `2 * self`
    fn double(&self) -> Self;

    /// `self + rhs`
    fn add(&self, rhs: &Self) -> Self;

    /// `self + rhs` for an affine `rhs`
    fn add_mixed(&self, rhs: &Self::Affine) -> Self;
}

macro_rules! impl_msm_group {
    ($projective:ident, $affine:ident, $name:expr) => {
        impl MsmGroup for $projective {
            type Affine = $affine;

            const NAME: &'static str = $name;

            #[inline]
            fn identity() -> Self {
                $projective::identity()
            }

            #[inline]
            fn double(&self) -> Self {
                $projective::double(self)
            }

            #[inline]
            fn add(&self, rhs: &Self) -> Self {
                $projective::add(self, rhs)
            }

            #[inline]
            fn add_mixed(&self, rhs: &$affine) -> Self {
                $projective::add_mixed(self, rhs)
            }
        }
    };
}

impl_msm_group!(G1Projective, G1Affine, "G1Projective::msm");
impl_msm_group!(G2Projective, G2Affine, "G2Projective::msm");

/// Fixed window width of the constant-time method
const WINDOW: usize = 4;

/// 4-bit digits of a canonical scalar, least significant first
fn nibbles(s: &Scalar) -> [u8; 64] {
    let mut out = [0u8; 64];
    for (i, b) in s.to_bytes().iter().enumerate() {
        out[2 * i] = b & 0x0f;
        out[2 * i + 1] = b >> 4;
    }
    out
}

/// Constant-time `sum [k_i] P_i`.
///
/// Fails with `LengthMismatch` when the slices differ in length; the empty
/// sum is the identity.
pub fn msm<C: MsmGroup>(points: &[C::Affine], scalars: &[Scalar]) -> Result<C> {
    validate::same_length(C::NAME, points.len(), scalars.len())?;
    trace!("{} over {} terms", C::NAME, points.len());

    // [0]P .. [15]P per input
    let tables: Vec<[C; 1 << WINDOW]> = points
        .iter()
        .map(|p| {
            let mut table = [C::identity(); 1 << WINDOW];
            for j in 1..table.len() {
                table[j] = table[j - 1].add_mixed(p);
            }
            table
        })
        .collect();
    let digits: Vec<[u8; 64]> = scalars.iter().map(nibbles).collect();

    let mut acc = C::identity();
    for w in (0..64).rev() {
        for _ in 0..WINDOW {
            acc = acc.double();
        }
        for (table, digits) in tables.iter().zip(digits.iter()) {
            let mut term = C::identity();
            for (j, entry) in table.iter().enumerate() {
                term.conditional_assign(entry, (j as u8).ct_eq(&digits[w]));
            }
            acc = acc.add(&term);
        }
    }

    Ok(acc)
}

/// Variable-time `sum [k_i] P_i` using Pippenger's bucket method.
///
/// Fails with `LengthMismatch` when the slices differ in length; the empty
/// sum is the identity.
pub fn msm_vartime<C: MsmGroup>(points: &[C::Affine], scalars: &[Scalar]) -> Result<C> {
    validate::same_length(C::NAME, points.len(), scalars.len())?;
    trace!("{} (vartime) over {} terms", C::NAME, points.len());

    if points.is_empty() {
        return Ok(C::identity());
    }

    const SCALAR_BITS: usize = 255;

    // roughly log2(n) bits per window
    let c = if points.len() < 32 {
        3
    } else {
        points.len().ilog2() as usize + 2
    };
    let num_windows = (SCALAR_BITS + c - 1) / c;
    let scalars: Vec<[u8; 32]> = scalars.iter().map(Scalar::to_bytes).collect();

    let window_digit = |bytes: &[u8; 32], w: usize| -> usize {
        let mut k = 0;
        for bit in 0..c {
            let idx = w * c + bit;
            if idx < SCALAR_BITS && (bytes[idx / 8] >> (idx % 8)) & 1 == 1 {
                k |= 1 << bit;
            }
        }
        k
    };

    let mut global = C::identity();
    for w in (0..num_windows).rev() {
        for _ in 0..c {
            global = global.double();
        }

        let mut buckets = vec![C::identity(); (1 << c) - 1];
        for (p, s) in points.iter().zip(scalars.iter()) {
            let k = window_digit(s, w);
            if k > 0 {
                buckets[k - 1] = buckets[k - 1].add_mixed(p);
            }
        }

        // sum_k k * bucket[k] via running sums
        let mut running = C::identity();
        let mut window = C::identity();
        for bucket in buckets.iter().rev() {
            running = running.add(bucket);
            window = window.add(&running);
        }

        global = global.add(&window);
    }

    Ok(global)
}

impl G1Projective {
    /// Constant-time multi-scalar multiplication over G₁
    pub fn msm(points: &[G1Affine], scalars: &[Scalar]) -> Result<Self> {
        msm(points, scalars)
    }

    /// Variable-time multi-scalar multiplication over G₁; public scalars only
    pub fn msm_vartime(points: &[G1Affine], scalars: &[Scalar]) -> Result<Self> {
        msm_vartime(points, scalars)
    }
}

impl G2Projective {
    /// Constant-time multi-scalar multiplication over G₂
    pub fn msm(points: &[G2Affine], scalars: &[Scalar]) -> Result<Self> {
        msm(points, scalars)
    }

    /// Variable-time multi-scalar multiplication over G₂; public scalars only
    pub fn msm_vartime(points: &[G2Affine], scalars: &[Scalar]) -> Result<Self> {
        msm_vartime(points, scalars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_g1_msm() {
        let g = G1Affine::generator();
        let s1 = Scalar::from(2u64);
        let s2 = Scalar::from(3u64);
        let s3 = Scalar::from(4u64);

        let p1 = G1Affine::from(g * s1);
        let p2 = G1Affine::from(g * s2);
        let p3 = G1Affine::from(g * s3);

        let points = [p1, p2, p3];
        let scalars = [s1, s2, s3];

        // 2*[2]G + 3*[3]G + 4*[4]G = [29]G
        let expected = G1Projective::generator() * Scalar::from(29u64);

        assert_eq!(G1Projective::msm(&points, &scalars), Ok(expected));
        assert_eq!(G1Projective::msm_vartime(&points, &scalars), Ok(expected));
        assert_eq!(G1Projective::msm(&[], &[]), Ok(G1Projective::identity()));
        assert_eq!(G1Projective::msm_vartime(&[], &[]), Ok(G1Projective::identity()));
    }

    #[test]
    fn test_msm_matches_naive_with_large_scalars() {
        let mut rng = rand::rngs::OsRng;
        let points: Vec<G2Affine> = (0..5)
            .map(|_| G2Affine::from(G2Projective::random(&mut rng)))
            .collect();
        let mut scalars: Vec<Scalar> = (0..5).map(|_| Scalar::random(&mut rng)).collect();
        scalars[1] = -Scalar::one();
        scalars[3] = Scalar::zero();

        let naive: G2Projective = points.iter().zip(scalars.iter()).map(|(p, s)| p * s).sum();

        assert_eq!(msm::<G2Projective>(&points, &scalars), Ok(naive));
        assert_eq!(msm_vartime::<G2Projective>(&points, &scalars), Ok(naive));
    }

    #[test]
    fn test_msm_vartime_wide_windows() {
        // enough terms to take the log-sized window branch
        let g = G1Affine::generator();
        let points = vec![g; 40];
        let scalars: Vec<Scalar> = (1..=40u64).map(Scalar::from).collect();

        let expected = G1Projective::generator() * Scalar::from(820u64);
        assert_eq!(G1Projective::msm_vartime(&points, &scalars), Ok(expected));
    }

    #[test]
    fn test_msm_length_mismatch() {
        let points = [G1Affine::generator(); 2];
        let scalars = [Scalar::one(); 3];

        assert_eq!(
            G1Projective::msm(&points, &scalars),
            Err(Error::LengthMismatch {
                context: "G1Projective::msm",
                left: 2,
                right: 3,
            })
        );
        assert!(G1Projective::msm_vartime(&points, &scalars).is_err());
    }
}
