//! Field tower for BLS12-381: `Fp`, `Fp2 = Fp[u]/(u^2 + 1)`,
//! `Fp6 = Fp2[v]/(v^3 - (u + 1))` and `Fp12 = Fp6[w]/(w^2 - v)`.

pub mod fp; // Base field
pub mod fp2; // Quadratic extension
pub mod fp6; // Cubic extension of Fp2
pub mod fp12; // Target field
