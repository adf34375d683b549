//! Property-based tests for the scalar field and group laws

use blsforge::prelude::*;
use proptest::prelude::*;

fn scalar() -> impl Strategy<Value = Scalar> {
    any::<[u8; 32]>().prop_map(|bytes| Scalar::from_le_bytes_mod_order(&bytes))
}

fn small_scalar() -> impl Strategy<Value = Scalar> {
    any::<u64>().prop_map(Scalar::from)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn scalar_ring_laws(a in scalar(), b in scalar(), c in scalar()) {
        prop_assert_eq!(a + b, b + a);
        prop_assert_eq!(a * b, b * a);
        prop_assert_eq!((a + b) + c, a + (b + c));
        prop_assert_eq!(a * (b + c), a * b + a * c);
        prop_assert_eq!(a - b, a + (-b));
        prop_assert_eq!(a.square(), a * a);
    }

    #[test]
    fn scalar_division_inverts_multiplication(a in scalar(), b in scalar()) {
        prop_assume!(!bool::from(b.is_zero()));
        prop_assert_eq!((a * b).divide(&b), Ok(a));
    }

    #[test]
    fn scalar_bytes_round_trip(a in scalar()) {
        prop_assert_eq!(Scalar::from_bytes(&a.to_bytes()).unwrap(), a);
    }

    #[test]
    fn scalar_decimal_matches_u128(n in any::<u128>()) {
        prop_assert_eq!(n.to_string().parse::<Scalar>(), Ok(Scalar::from(n)));
    }

    #[test]
    fn scalar_pow_adds_exponents(a in scalar(), e in any::<u64>(), f in any::<u32>()) {
        let sum = [e.wrapping_add(f as u64), (e.checked_add(f as u64).is_none()) as u64, 0, 0];
        prop_assert_eq!(a.pow(&[e, 0, 0, 0]) * a.pow(&[f as u64, 0, 0, 0]), a.pow(&sum));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn g1_scalar_multiplication_is_linear(a in small_scalar(), b in small_scalar()) {
        let g = G1Projective::generator();
        prop_assert_eq!(g * a + g * b, g * (a + b));
        prop_assert_eq!((g * a) * b, g * (a * b));
    }

    #[test]
    fn g2_scalar_multiplication_is_linear(a in small_scalar(), b in small_scalar()) {
        let g = G2Projective::generator();
        prop_assert_eq!(g * a + g * b, g * (a + b));
    }

    #[test]
    fn g1_compression_round_trip(a in scalar()) {
        let p = G1Affine::from(G1Projective::generator() * a);
        prop_assert_eq!(G1Affine::from_compressed(&p.to_compressed()), Ok(p));
    }

    #[test]
    fn g2_compression_round_trip(a in scalar()) {
        let p = G2Affine::from(G2Projective::generator() * a);
        prop_assert_eq!(G2Affine::from_compressed(&p.to_compressed()), Ok(p));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2))]

    #[test]
    fn pairing_moves_scalars_across(a in scalar()) {
        let p = G1Affine::from(G1Affine::generator() * a);
        let q = G2Affine::from(G2Affine::generator() * a);
        prop_assert_eq!(pairing(&p, &G2Affine::generator()), pairing(&G1Affine::generator(), &q));
        prop_assert_eq!(pairing(&p, &G2Affine::generator()), Gt::generator().pow(&a));
    }
}
