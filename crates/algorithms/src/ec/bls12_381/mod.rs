//! BLS12-381 pairing-friendly elliptic curve.
//!
//! Two prime-order groups of order
//! r = 0x73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001:
//!
//! - [`G1Affine`]/[`G1Projective`]: points on `y^2 = x^3 + 4` over `Fp`
//! - [`G2Affine`]/[`G2Projective`]: points on `y^2 = x^3 + 4(u + 1)` over `Fp2`
//!
//! and the optimal ate pairing into [`Gt`], an order-r subgroup of `Fp12^*`.
//! Group arithmetic uses complete formulas and is constant-time in the
//! scalars and coordinates; functions suffixed `_vartime` are not.
//!
//! **Warning:** Unaudited implementation. Use at your own risk.

#[macro_use]
mod macros;

mod arith;
mod encoding;
pub mod field;
mod g1;
mod g2;
#[cfg(feature = "alloc")]
mod msm;
mod pairings;
mod scalar;
#[cfg(feature = "serde")]
mod serde_impls;

#[cfg(test)]
mod tests;

pub use g1::{G1Affine, G1Projective, G1_COMPRESSED_SIZE, G1_UNCOMPRESSED_SIZE};
pub use g2::{G2Affine, G2Projective, G2_COMPRESSED_SIZE, G2_UNCOMPRESSED_SIZE};
pub use pairings::{pairing, Gt, MillerLoopResult, GT_BYTES};
pub use scalar::{Scalar, SCALAR_BYTES};

#[cfg(feature = "alloc")]
pub use msm::{msm, msm_vartime, MsmGroup};
#[cfg(feature = "alloc")]
pub use pairings::{multi_miller_loop, multi_pairing, pairing_check, Bls12, G2Prepared};

/// |x| for the curve parameter x = -0xd201000000010000
pub const BLS_X: u64 = 0xd201_0000_0001_0000;

/// Sign of the curve parameter x
pub const BLS_X_IS_NEGATIVE: bool = true;
