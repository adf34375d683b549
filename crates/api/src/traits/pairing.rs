//! Bilinear pairing engine trait.

use crate::Result;

/// A bilinear map `G1 x G2 -> Gt` with batched evaluation.
pub trait PairingEngine {
    /// The scalar field shared by both source groups.
    type Scalar;
    /// First source group.
    type G1;
    /// Second source group.
    type G2;
    /// Target group, written multiplicatively.
    type Gt: PartialEq;

    /// Computes `e(p, q)`.
    fn pairing(p: &Self::G1, q: &Self::G2) -> Self::Gt;

    /// Computes `prod e(ps[i], qs[i])` with a single final exponentiation.
    ///
    /// Fails with [`crate::Error::LengthMismatch`] when the sequences differ
    /// in length. The empty product is the identity of `Gt`.
    fn multi_pairing(ps: &[Self::G1], qs: &[Self::G2]) -> Result<Self::Gt>;

    /// Returns true iff the product of pairings over `pairs` is the identity.
    fn pairing_check(pairs: &[(Self::G1, Self::G2)]) -> bool;
}
