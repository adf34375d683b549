//! Encoding tests for points and scalars

use super::super::{
    G1Affine, G1Projective, G2Affine, G2Projective, Scalar, G1_COMPRESSED_SIZE,
    G1_UNCOMPRESSED_SIZE, G2_COMPRESSED_SIZE, G2_UNCOMPRESSED_SIZE,
};
use crate::error::{EncodingFault, Error};
use blsforge_api::{ByteSerializable, PointSerializable};

use rand::rngs::OsRng;

const G1_GENERATOR_COMPRESSED: &str = "97f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb";
const G2_GENERATOR_COMPRESSED: &str = "93e02b6052719f607dacd3a088274f65596bd0d09920b61ab5da61bbdc7f5049334cf11213945d57e5ac7d055d042b7e024aa2b2f08f0a91260805272dc51051c6e47ad4fa403b02b4510b647ae3d1770bac0326a805bbefd48056c8c121bdb8";

fn g1_flags() -> Error {
    Error::encoding("G1Affine", EncodingFault::Flags)
}

fn g2_flags() -> Error {
    Error::encoding("G2Affine", EncodingFault::Flags)
}

// ============================================================================
// G1
// ============================================================================

#[test]
fn test_g1_generator_encoding() {
    let g = G1Affine::generator();
    assert_eq!(hex::encode(g.to_compressed()), G1_GENERATOR_COMPRESSED);
    assert_eq!(g.to_string(), G1_GENERATOR_COMPRESSED);

    // the negation differs only in the sign bit
    let mut neg = g.to_compressed();
    neg[0] |= 0x20;
    assert_eq!((-g).to_compressed(), neg);
}

#[test]
fn test_g1_round_trips() {
    let mut points = vec![G1Affine::identity(), G1Affine::generator(), -G1Affine::generator()];
    points.extend((0..10).map(|_| G1Affine::from(G1Projective::random(OsRng))));

    for p in points {
        assert_eq!(G1Affine::from_compressed(&p.to_compressed()), Ok(p));
        assert_eq!(G1Affine::from_compressed_unchecked(&p.to_compressed()), Ok(p));
        assert_eq!(G1Affine::from_uncompressed(&p.to_uncompressed()), Ok(p));
        assert_eq!(G1Affine::from_uncompressed_unchecked(&p.to_uncompressed()), Ok(p));
        assert_eq!(<G1Affine as ByteSerializable>::from_bytes(&p.to_bytes()), Ok(p));
    }

    assert_eq!(
        G1Projective::generator().to_compressed(),
        G1Affine::generator().to_compressed()
    );
}

#[test]
fn test_g1_identity_encoding() {
    let mut compressed = [0u8; G1_COMPRESSED_SIZE];
    compressed[0] = 0xc0;
    assert_eq!(G1Affine::identity().to_compressed(), compressed);

    let mut uncompressed = [0u8; G1_UNCOMPRESSED_SIZE];
    uncompressed[0] = 0x40;
    assert_eq!(G1Affine::identity().to_uncompressed(), uncompressed);

    // infinity with a sign bit or a stray coordinate bit is rejected
    let mut bad = compressed;
    bad[0] |= 0x20;
    assert_eq!(G1Affine::from_compressed(&bad), Err(g1_flags()));
    let mut bad = compressed;
    bad[47] = 1;
    assert_eq!(G1Affine::from_compressed(&bad), Err(g1_flags()));
}

#[test]
fn test_g1_rejections() {
    let g = G1Affine::generator();

    // compression flag cleared
    let mut bytes = g.to_compressed();
    bytes[0] &= 0x7f;
    assert_eq!(G1Affine::from_compressed(&bytes), Err(g1_flags()));

    // compression flag set on the uncompressed form
    let mut bytes = g.to_uncompressed();
    bytes[0] |= 0x80;
    assert_eq!(G1Affine::from_uncompressed(&bytes), Err(g1_flags()));

    // x >= p
    let mut bytes = [0xff; G1_COMPRESSED_SIZE];
    bytes[0] = 0x9f;
    assert_eq!(
        G1Affine::from_compressed(&bytes),
        Err(Error::encoding("G1Affine", EncodingFault::NonCanonical))
    );

    // x = 1 has no y on the curve
    let mut bytes = [0u8; G1_COMPRESSED_SIZE];
    bytes[0] = 0x80;
    bytes[47] = 1;
    assert_eq!(
        G1Affine::from_compressed_unchecked(&bytes),
        Err(Error::NotOnCurve { context: "G1Affine" })
    );

    // (1, 1) is not on the curve either
    let mut bytes = [0u8; G1_UNCOMPRESSED_SIZE];
    bytes[47] = 1;
    bytes[95] = 1;
    assert_eq!(
        G1Affine::from_uncompressed_unchecked(&bytes),
        Err(Error::NotOnCurve { context: "G1Affine" })
    );

    // (0, 2) is on the curve but has order 3
    let mut bytes = [0u8; G1_COMPRESSED_SIZE];
    bytes[0] = 0x80;
    assert_eq!(
        G1Affine::from_compressed(&bytes),
        Err(Error::NotInSubgroup { context: "G1Affine" })
    );
    let t = G1Affine::from_compressed_unchecked(&bytes).unwrap();
    assert_eq!(
        G1Affine::from_uncompressed(&t.to_uncompressed()),
        Err(Error::NotInSubgroup { context: "G1Affine" })
    );
    assert_eq!(<G1Affine as PointSerializable>::from_bytes_unchecked(&bytes), Ok(t));

    // wrong slice length
    assert_eq!(
        <G1Affine as ByteSerializable>::from_bytes(&[0u8; 47]),
        Err(Error::length("G1Affine", 48, 47))
    );
}

// ============================================================================
// G2
// ============================================================================

#[test]
fn test_g2_generator_encoding() {
    let g = G2Affine::generator();
    assert_eq!(hex::encode(g.to_compressed()), G2_GENERATOR_COMPRESSED);
    assert_eq!(format!("{}", G2Projective::generator()), G2_GENERATOR_COMPRESSED);
}

#[test]
fn test_g2_round_trips() {
    let mut points = vec![G2Affine::identity(), G2Affine::generator(), -G2Affine::generator()];
    points.extend((0..5).map(|_| G2Affine::from(G2Projective::random(OsRng))));

    for p in points {
        assert_eq!(G2Affine::from_compressed(&p.to_compressed()), Ok(p));
        assert_eq!(G2Affine::from_uncompressed(&p.to_uncompressed()), Ok(p));
        assert_eq!(<G2Affine as ByteSerializable>::from_bytes(&p.to_bytes()), Ok(p));
        assert_eq!(<G2Affine as PointSerializable>::from_bytes_unchecked(&p.to_bytes()), Ok(p));
    }
}

#[test]
fn test_g2_rejections() {
    let mut identity = [0u8; G2_COMPRESSED_SIZE];
    identity[0] = 0xc0;
    assert_eq!(G2Affine::from_compressed(&identity), Ok(G2Affine::identity()));
    identity[95] = 1;
    assert_eq!(G2Affine::from_compressed(&identity), Err(g2_flags()));

    let mut bytes = G2Affine::generator().to_uncompressed();
    bytes[0] |= 0x20;
    assert_eq!(G2Affine::from_uncompressed(&bytes), Err(g2_flags()));

    // x = 1 has no y on the twist
    let mut bytes = [0u8; G2_COMPRESSED_SIZE];
    bytes[0] = 0x80;
    bytes[95] = 1;
    assert_eq!(
        G2Affine::from_compressed(&bytes),
        Err(Error::NotOnCurve { context: "G2Affine" })
    );

    // x = 2 is on the twist but outside the subgroup
    bytes[95] = 2;
    assert_eq!(
        G2Affine::from_compressed(&bytes),
        Err(Error::NotInSubgroup { context: "G2Affine" })
    );
    assert!(G2Affine::from_compressed_unchecked(&bytes).is_ok());

    let mut bytes = [0u8; G2_UNCOMPRESSED_SIZE];
    bytes[191] = 1;
    assert_eq!(
        G2Affine::from_uncompressed_unchecked(&bytes),
        Err(Error::NotOnCurve { context: "G2Affine" })
    );

    // c1 >= p
    let mut bytes = [0xff; G2_COMPRESSED_SIZE];
    bytes[0] = 0x9f;
    assert_eq!(
        G2Affine::from_compressed(&bytes),
        Err(Error::encoding("G2Affine", EncodingFault::NonCanonical))
    );
}

// ============================================================================
// Scalar
// ============================================================================

#[test]
fn test_scalar_bytes() {
    let s = Scalar::random(OsRng);
    assert_eq!(Scalar::from_bytes(&s.to_bytes()).unwrap(), s);
    assert_eq!(<Scalar as ByteSerializable>::from_bytes(&s.to_bytes()), Ok(s));

    assert_eq!(
        <Scalar as ByteSerializable>::from_bytes(&[0u8; 31]),
        Err(Error::length("Scalar", 32, 31))
    );
    assert_eq!(
        <Scalar as ByteSerializable>::from_bytes(&[0xff; 32]),
        Err(Error::encoding("Scalar", EncodingFault::NonCanonical))
    );
}
