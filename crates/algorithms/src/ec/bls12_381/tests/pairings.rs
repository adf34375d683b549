//! Pairing tests for BLS12-381

use super::super::{pairing, G1Affine, G1Projective, G2Affine, G2Projective, Gt, Scalar};

#[cfg(feature = "alloc")]
use super::super::{multi_miller_loop, multi_pairing, pairing_check, Bls12, G2Prepared};

use rand::rngs::OsRng;

#[test]
fn test_generator_pairing() {
    let e = pairing(&G1Affine::generator(), &G2Affine::generator());
    assert_eq!(e, Gt::generator());
    assert!(!bool::from(e.is_one()));
}

#[test]
fn test_bilinearity() {
    let a = Scalar::from(1234u64);
    let b = Scalar::from(4566u64);
    let c = a * b;

    let g = G1Affine::from(G1Affine::generator() * a);
    let h = G2Affine::from(G2Affine::generator() * b);
    let p = pairing(&g, &h);

    assert_eq!(p, pairing(&G1Affine::from(G1Affine::generator() * c), &G2Affine::generator()));
    assert_eq!(p, pairing(&G1Affine::generator(), &G2Affine::from(G2Affine::generator() * c)));
    assert_eq!(p, Gt::generator().pow(&c));
}

#[test]
fn test_linearity_in_each_argument() {
    let p1 = G1Projective::random(OsRng);
    let p2 = G1Projective::random(OsRng);
    let q = G2Affine::from(G2Projective::random(OsRng));

    assert_eq!(
        pairing(&G1Affine::from(p1 + p2), &q),
        pairing(&G1Affine::from(p1), &q) * pairing(&G1Affine::from(p2), &q)
    );

    let p = G1Affine::from(p1);
    let q1 = G2Projective::random(OsRng);
    let q2 = G2Projective::random(OsRng);
    assert_eq!(
        pairing(&p, &G2Affine::from(q1 + q2)),
        pairing(&p, &G2Affine::from(q1)) * pairing(&p, &G2Affine::from(q2))
    );

    // e(-P, Q) is the inverse of e(P, Q)
    assert_eq!(pairing(&-p, &q), pairing(&p, &q).invert());
}

#[test]
fn test_identity_inputs() {
    let g1 = G1Affine::generator();
    let g2 = G2Affine::generator();

    assert_eq!(pairing(&G1Affine::identity(), &g2), Gt::one());
    assert_eq!(pairing(&g1, &G2Affine::identity()), Gt::one());
    assert_eq!(pairing(&G1Affine::identity(), &G2Affine::identity()), Gt::one());
}

#[test]
fn test_gt_group_operations() {
    let g = Gt::generator();
    let a = Scalar::random(OsRng);
    let b = Scalar::random(OsRng);

    assert_eq!(g.pow(&a) * g.pow(&b), g.pow(&(a + b)));
    assert_eq!(g.pow(&a).pow(&b), g.pow(&(a * b)));
    assert_eq!(g.square(), g * g);
    assert_eq!(g * Gt::one(), g);
    assert_eq!(g.invert().invert(), g);

    // order r
    assert_eq!(g.pow(&-Scalar::one()) * g, Gt::one());

    let product: Gt = [g, g, g.invert()].iter().product();
    assert_eq!(product, g);

    let mut acc = Gt::one();
    acc *= g;
    acc *= &g;
    assert_eq!(acc, g.square());
    assert_eq!(Gt::default(), Gt::one());
}

#[test]
fn test_gt_display() {
    let s = Gt::one().to_string();
    assert_eq!(s.len(), 1152);
    assert!(s.starts_with(&"0".repeat(95)));
    assert_eq!(&s[95..96], "1");
}

#[cfg(feature = "alloc")]
#[test]
fn test_multi_miller_loop_matches_pairings() {
    let ps: Vec<G1Affine> = (0..3).map(|_| G1Affine::from(G1Projective::random(OsRng))).collect();
    let qs: Vec<G2Affine> = (0..3).map(|_| G2Affine::from(G2Projective::random(OsRng))).collect();
    let prepared: Vec<G2Prepared> = qs.iter().map(G2Prepared::from).collect();
    let terms: Vec<(&G1Affine, &G2Prepared)> = ps.iter().zip(prepared.iter()).collect();

    let expected: Gt = ps.iter().zip(qs.iter()).map(|(p, q)| pairing(p, q)).product();

    assert_eq!(multi_miller_loop(&terms).final_exponentiation(), expected);
    assert_eq!(multi_pairing(&ps, &qs), Ok(expected));

    // Miller loop outputs combine before the final exponentiation
    let split = multi_miller_loop(&terms[..1]) * multi_miller_loop(&terms[1..]);
    assert_eq!(split.final_exponentiation(), expected);
}

#[cfg(feature = "alloc")]
#[test]
fn test_multi_miller_loop_skips_identity_terms() {
    let g1 = G1Affine::generator();
    let g2 = G2Affine::generator();
    let p = G1Affine::from(G1Projective::random(OsRng));

    let g2_prepared = G2Prepared::from(g2);
    let identity_prepared = G2Prepared::from(G2Affine::identity());
    let o1 = G1Affine::identity();

    let res = multi_miller_loop(&[
        (&o1, &g2_prepared),
        (&p, &identity_prepared),
        (&g1, &g2_prepared),
    ])
    .final_exponentiation();

    assert_eq!(res, Gt::generator());
}

#[cfg(feature = "alloc")]
#[test]
fn test_pairing_check() {
    let a = Scalar::from(1234u64);
    let b = Scalar::from(4566u64);
    let g = G1Affine::from(G1Affine::generator() * a);
    let neg_g = G1Affine::from(G1Affine::generator() * -a);
    let h = G2Affine::from(G2Affine::generator() * b);

    assert!(pairing_check(&[(g, h), (neg_g, h)]));
    assert!(!pairing_check(&[(g, h), (g, h)]));
    assert!(!pairing_check(&[(g, h)]));
    assert!(pairing_check(&[]));
    assert!(pairing_check(&[(G1Affine::identity(), h)]));
}

#[cfg(feature = "alloc")]
#[test]
fn test_engine() {
    use blsforge_api::{Error, PairingEngine};

    let p = G1Affine::generator();
    let q = G2Affine::generator();

    assert_eq!(Bls12::pairing(&p, &q), Gt::generator());
    assert_eq!(Bls12::multi_pairing(&[], &[]), Ok(Gt::one()));
    assert_eq!(
        Bls12::multi_pairing(&[p, p], &[q]),
        Err(Error::LengthMismatch {
            context: "multi_pairing",
            left: 2,
            right: 1,
        })
    );
    assert!(Bls12::pairing_check(&[(p, q), (-p, q)]));
}
