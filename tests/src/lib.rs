//! Shared helpers for the blsforge integration and property tests

use blsforge::bls12_381::{G1Affine, G1Projective, G2Affine, G2Projective, Scalar};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// `r - 1`, the largest canonical scalar
pub const R_MINUS_ONE: &str =
    "52435875175126190479447740508185965837690552500527637822603658699938581184512";

/// `2^(2^64 - 1) mod r`
pub const TWO_POW_U64_MAX: &str =
    "34615430125397373932538142422983324256441907232324206550560287357884080702537";

/// Deterministic generator so failures reproduce
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Parses a decimal literal, reducing mod r
pub fn scalar(decimal: &str) -> Scalar {
    decimal.parse().expect("decimal scalar literal")
}

/// Uniform G1 element
pub fn random_g1(rng: &mut impl RngCore) -> G1Affine {
    G1Affine::from(G1Projective::random(rng))
}

/// Uniform G2 element
pub fn random_g2(rng: &mut impl RngCore) -> G2Affine {
    G2Affine::from(G2Projective::random(rng))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let a = Scalar::random(seeded_rng(7));
        let b = Scalar::random(seeded_rng(7));
        assert_eq!(a, b);
        assert_ne!(a, Scalar::random(seeded_rng(8)));
    }

    #[test]
    fn test_constants_parse() {
        assert_eq!(scalar(R_MINUS_ONE), -Scalar::one());
        assert!(!bool::from(scalar(TWO_POW_U64_MAX).is_zero()));
    }
}
