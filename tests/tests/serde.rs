//! JSON round trips for the serde feature

use blsforge::prelude::*;
use blsforge_tests::{random_g1, random_g2, seeded_rng};

#[test]
fn scalar_json_round_trip() {
    let s = Scalar::random(seeded_rng(10));
    let json = serde_json::to_string(&s).unwrap();

    assert_eq!(json, format!("\"{}\"", s));
    assert_eq!(serde_json::from_str::<Scalar>(&json).unwrap(), s);
}

#[test]
fn point_json_round_trip() {
    let mut rng = seeded_rng(11);
    let p = random_g1(&mut rng);
    let q = random_g2(&mut rng);

    let json = serde_json::to_string(&(p, q)).unwrap();
    let (p2, q2): (G1Affine, G2Affine) = serde_json::from_str(&json).unwrap();
    assert_eq!(p2, p);
    assert_eq!(q2, q);

    let json = serde_json::to_value(G1Affine::identity()).unwrap();
    assert_eq!(json.as_str().map(str::len), Some(96));
}

#[test]
fn json_decoding_runs_subgroup_check() {
    // compressed (0, 2), a point of order 3
    let mut bytes = [0u8; 48];
    bytes[0] = 0x80;
    let json = format!("\"{}\"", hex::encode(bytes));

    let err = serde_json::from_str::<G1Affine>(&json).unwrap_err();
    assert!(err.to_string().contains("subgroup"));
}
