//! Error handling for the blsforge ecosystem
//!
//! Every fallible operation reports one of five categories. Arithmetic errors
//! come from scalar division, decoding errors from the byte encodings, and
//! length errors from batched operations over paired sequences.

use core::fmt;

/// Primary error type for field, group and pairing operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum Error {
    /// Division or inversion by the additive identity
    #[cfg_attr(feature = "std", error("division by zero in {context}"))]
    DivisionByZero {
        /// Operation that attempted the division
        context: &'static str,
    },

    /// Byte length mismatch, malformed flag bits or a non-canonical value
    #[cfg_attr(feature = "std", error("invalid encoding for {context}: {reason}"))]
    InvalidEncoding {
        /// Type being decoded
        context: &'static str,
        /// What was wrong with the bytes
        reason: EncodingFault,
    },

    /// Decoded coordinates do not satisfy the curve equation
    #[cfg_attr(feature = "std", error("point is not on the curve for {context}"))]
    NotOnCurve {
        /// Type being decoded
        context: &'static str,
    },

    /// Point is on the curve but outside the prime-order subgroup
    #[cfg_attr(feature = "std", error("point is not in the prime-order subgroup for {context}"))]
    NotInSubgroup {
        /// Type being decoded
        context: &'static str,
    },

    /// Paired input sequences of different lengths
    #[cfg_attr(
        feature = "std",
        error("length mismatch in {context}: {left} vs {right} elements")
    )]
    LengthMismatch {
        /// Operation that received the sequences
        context: &'static str,
        /// Length of the first sequence
        left: usize,
        /// Length of the second sequence
        right: usize,
    },
}

/// Detail attached to [`Error::InvalidEncoding`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingFault {
    /// Input has the wrong number of bytes
    Length {
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },
    /// Compression, infinity or sign flags are inconsistent
    Flags,
    /// Encoded integer is not reduced modulo the field or group order
    NonCanonical,
    /// Textual input contains characters outside its alphabet
    Malformed,
}

/// Result type for blsforge operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an `InvalidEncoding` error
    pub const fn encoding(context: &'static str, reason: EncodingFault) -> Self {
        Error::InvalidEncoding { context, reason }
    }

    /// Shorthand to create an `InvalidEncoding` error for a wrong input length
    pub const fn length(context: &'static str, expected: usize, actual: usize) -> Self {
        Error::InvalidEncoding {
            context,
            reason: EncodingFault::Length { expected, actual },
        }
    }

    /// The operation or type the error was raised for
    pub fn context(&self) -> &'static str {
        match self {
            Error::DivisionByZero { context }
            | Error::InvalidEncoding { context, .. }
            | Error::NotOnCurve { context }
            | Error::NotInSubgroup { context }
            | Error::LengthMismatch { context, .. } => context,
        }
    }
}

impl fmt::Display for EncodingFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingFault::Length { expected, actual } => {
                write!(f, "expected {} bytes, got {}", expected, actual)
            }
            EncodingFault::Flags => f.write_str("malformed flag bits"),
            EncodingFault::NonCanonical => f.write_str("value is not canonically reduced"),
            EncodingFault::Malformed => f.write_str("unexpected character in input"),
        }
    }
}

#[cfg(not(feature = "std"))]
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DivisionByZero { context } => write!(f, "division by zero in {}", context),
            Error::InvalidEncoding { context, reason } => {
                write!(f, "invalid encoding for {}: {}", context, reason)
            }
            Error::NotOnCurve { context } => {
                write!(f, "point is not on the curve for {}", context)
            }
            Error::NotInSubgroup { context } => {
                write!(f, "point is not in the prime-order subgroup for {}", context)
            }
            Error::LengthMismatch { context, left, right } => write!(
                f,
                "length mismatch in {}: {} vs {} elements",
                context, left, right
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context_and_reason() {
        let err = Error::length("G1Affine", 48, 47);
        let msg = format!("{}", err);
        assert!(msg.contains("G1Affine"));
        assert!(msg.contains("expected 48 bytes, got 47"));

        let err = Error::LengthMismatch { context: "multi_pairing", left: 2, right: 3 };
        assert_eq!(format!("{}", err), "length mismatch in multi_pairing: 2 vs 3 elements");
    }

    #[test]
    fn context_accessor() {
        assert_eq!(Error::DivisionByZero { context: "Scalar::divide" }.context(), "Scalar::divide");
        assert_eq!(Error::NotOnCurve { context: "G2Affine" }.context(), "G2Affine");
        assert_eq!(
            Error::encoding("Scalar", EncodingFault::NonCanonical),
            Error::InvalidEncoding { context: "Scalar", reason: EncodingFault::NonCanonical }
        );
    }
}
