//! End-to-end scenarios for the scalar field, both groups and the pairing

use blsforge::prelude::*;
use blsforge_tests::{random_g1, random_g2, scalar, seeded_rng, R_MINUS_ONE, TWO_POW_U64_MAX};

// ============================================================================
// Scalar field
// ============================================================================

#[test]
fn scalar_wraps_at_group_order() {
    assert_eq!(scalar(R_MINUS_ONE) + Scalar::from(2u64), Scalar::from(1u64));

    // r itself reduces to zero
    let r = "52435875175126190479447740508185965837690552500527637822603658699938581184513";
    assert_eq!(scalar(r), Scalar::zero());
}

#[test]
fn scalar_division() {
    let twelve = Scalar::from(12u64);

    assert_eq!(twelve.divide(&Scalar::from(3u64)), Ok(Scalar::from(4u64)));
    assert_eq!(
        twelve.divide(&Scalar::zero()),
        Err(Error::DivisionByZero {
            context: "Scalar::divide"
        })
    );

    let mut rng = seeded_rng(1);
    for _ in 0..16 {
        let a = Scalar::random(&mut rng);
        let b = Scalar::random(&mut rng);
        assert_eq!(a.divide(&b), Ok(a * b.invert().unwrap()));
    }
}

#[test]
fn scalar_negation() {
    let mut rng = seeded_rng(2);
    for _ in 0..16 {
        let a = Scalar::random(&mut rng);
        let sum = a + (-a);
        assert_eq!(sum, Scalar::zero());
        assert!(bool::from(sum.is_zero()));
    }
}

#[test]
fn scalar_pow_with_huge_exponent() {
    let two = Scalar::from(2u64);
    let expected = scalar(TWO_POW_U64_MAX);

    assert_eq!(two.pow(&[u64::MAX, 0, 0, 0]), expected);
    assert_eq!(two.pow_vartime(&[u64::MAX, 0, 0, 0]), expected);
    assert_eq!(two.pow_scalar(&Scalar::from(u64::MAX)), expected);
}

#[test]
fn scalar_pow_with_exponent_beyond_256_bits() {
    // 2^300 + 7 as little-endian limbs
    let e = [7, 0, 0, 0, 1u64 << 44];
    let expected =
        scalar("34700996541844803016455588941378530205824144788001533429709027478020443798376");
    let two = Scalar::from(2u64);

    assert_eq!(two.pow(&e), expected);
    assert_eq!(two.pow_vartime(&e), expected);
}

#[test]
fn scalar_bytes_reject_out_of_range() {
    let bytes = scalar(R_MINUS_ONE).to_bytes();
    assert_eq!(Scalar::from_bytes(&bytes).unwrap(), -Scalar::one());

    // r - 1 + 1 = r is rejected instead of reduced
    let mut r = bytes;
    r[0] += 1;
    assert!(bool::from(Scalar::from_bytes(&r).is_none()));
    assert_eq!(Scalar::from_le_bytes_mod_order(&r), Scalar::zero());
}

// ============================================================================
// Groups
// ============================================================================

#[test]
fn group_negation_and_small_multiples() {
    let mut rng = seeded_rng(3);
    let four = Scalar::from(4u64);

    for p in [G1Projective::identity(), G1Projective::generator(), G1Projective::random(&mut rng)] {
        assert_eq!(-p + p, G1Projective::identity());
        assert_eq!(p * four, p + p + p + p);
    }

    for p in [G2Projective::identity(), G2Projective::generator(), G2Projective::random(&mut rng)] {
        assert_eq!(-p + p, G2Projective::identity());
        assert_eq!(p * four, p + p + p + p);
    }
}

#[test]
fn compressed_round_trips() {
    let mut rng = seeded_rng(4);

    let g1s = [G1Affine::identity(), G1Affine::generator(), random_g1(&mut rng)];
    for p in g1s {
        let bytes = p.to_compressed();
        assert_eq!(bytes.len(), 48);
        assert_eq!(G1Affine::from_compressed(&bytes), Ok(p));
        assert_eq!(G1Affine::from_compressed_unchecked(&bytes), Ok(p));
    }

    let g2s = [G2Affine::identity(), G2Affine::generator(), random_g2(&mut rng)];
    for p in g2s {
        let bytes = p.to_compressed();
        assert_eq!(bytes.len(), 96);
        assert_eq!(G2Affine::from_compressed(&bytes), Ok(p));
        assert_eq!(G2Affine::from_compressed_unchecked(&bytes), Ok(p));
    }
}

#[test]
fn trait_level_decoding_errors() {
    assert_eq!(
        <G1Affine as ByteSerializable>::from_bytes(&[0u8; 96]),
        Err(Error::InvalidEncoding {
            context: "G1Affine",
            reason: EncodingFault::Length {
                expected: 48,
                actual: 96
            },
        })
    );

    // the uncompressed generator read as compressed fails the flag check
    let bytes = G2Affine::generator().to_uncompressed();
    assert!(matches!(
        <G2Affine as PointSerializable>::from_bytes_unchecked(&bytes[..96]),
        Err(Error::InvalidEncoding {
            reason: EncodingFault::Flags,
            ..
        })
    ));
}

// ============================================================================
// Pairing
// ============================================================================

#[test]
fn pairing_bilinearity() {
    let a = Scalar::from(1234u64);
    let b = Scalar::from(4566u64);
    let c = a * b;

    let g = G1Affine::from(G1Affine::generator() * a);
    let h = G2Affine::from(G2Affine::generator() * b);

    let p = pairing(&g, &h);
    assert_eq!(p, pairing(&G1Affine::from(G1Affine::generator() * c), &G2Affine::generator()));
    assert_eq!(p, pairing(&G1Affine::generator(), &G2Affine::from(G2Affine::generator() * c)));
}

#[test]
fn pairing_check_cancels() {
    let a = Scalar::from(1234u64);
    let b = Scalar::from(4566u64);

    let pairs = [
        (
            G1Affine::from(G1Affine::generator() * a),
            G2Affine::from(G2Affine::generator() * b),
        ),
        (
            G1Affine::from(G1Affine::generator() * -a),
            G2Affine::from(G2Affine::generator() * b),
        ),
    ];

    assert!(pairing_check(&pairs));
    assert!(Bls12::pairing_check(&pairs));
    assert!(!pairing_check(&pairs[..1]));
}

#[test]
fn multi_pairing_matches_product_of_pairings() {
    let mut rng = seeded_rng(5);

    for n in [1usize, 2, 5] {
        let ps: Vec<G1Affine> = (0..n).map(|_| random_g1(&mut rng)).collect();
        let qs: Vec<G2Affine> = (0..n).map(|_| random_g2(&mut rng)).collect();

        let expected: Gt = ps.iter().zip(qs.iter()).map(|(p, q)| pairing(p, q)).product();
        assert_eq!(multi_pairing(&ps, &qs), Ok(expected));
    }
}

#[test]
fn multi_pairing_edge_cases() {
    assert_eq!(multi_pairing(&[], &[]), Ok(Gt::one()));
    assert!(pairing_check(&[]));

    let p = G1Affine::generator();
    let q = G2Affine::generator();
    assert_eq!(
        multi_pairing(&[p], &[q, q]),
        Err(Error::LengthMismatch {
            context: "multi_pairing",
            left: 1,
            right: 2,
        })
    );
}

#[test]
fn gt_identity_and_zero() {
    assert!(bool::from(Gt::one().is_one()));
    assert_ne!(Gt::one(), Gt::zero());
    assert_eq!(Gt::generator() * Gt::one(), Gt::generator());
    assert_eq!(Gt::generator().to_bytes().len(), 576);
}
