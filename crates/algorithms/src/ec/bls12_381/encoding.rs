//! Flag bits of the point encodings shared by G1 and G2.
//!
//! The three most significant bits of the first byte carry, in order, the
//! compression flag, the infinity flag and the sign of `y`. The sign bit is
//! only meaningful in compressed form.

use crate::error::{validate, EncodingFault, Result};

const COMPRESSION: u8 = 1 << 7;
const INFINITY: u8 = 1 << 6;
const SIGN: u8 = 1 << 5;
const FLAG_BITS: u8 = COMPRESSION | INFINITY | SIGN;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Flags {
    pub compression: bool,
    pub infinity: bool,
    pub sign: bool,
}

impl Flags {
    pub fn read(bytes: &[u8]) -> Flags {
        let b = bytes.first().copied().unwrap_or(0);
        Flags {
            compression: b & COMPRESSION != 0,
            infinity: b & INFINITY != 0,
            sign: b & SIGN != 0,
        }
    }

    /// ORs the flags into the leading byte of an encoded coordinate
    pub fn write(self, bytes: &mut [u8]) {
        if let Some(b) = bytes.first_mut() {
            if self.compression {
                *b |= COMPRESSION;
            }
            if self.infinity {
                *b |= INFINITY;
            }
            if self.sign {
                *b |= SIGN;
            }
        }
    }

    /// Checks the flags against the expected form and, for the point at
    /// infinity, that every other bit is zero. Returns whether the encoding
    /// is the point at infinity.
    pub fn check(self, bytes: &[u8], compressed: bool, context: &'static str) -> Result<bool> {
        validate::encoding(self.compression == compressed, context, EncodingFault::Flags)?;
        if !compressed {
            validate::encoding(!self.sign, context, EncodingFault::Flags)?;
        }

        if self.infinity {
            let rest_is_zero = bytes
                .iter()
                .enumerate()
                .all(|(i, b)| if i == 0 { b & !FLAG_BITS == 0 } else { *b == 0 });
            validate::encoding(!self.sign && rest_is_zero, context, EncodingFault::Flags)?;
        }

        Ok(self.infinity)
    }
}

/// Copies one coordinate out of an encoding with the flag bits cleared
pub(crate) fn strip_flags<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[..N]);
    out[0] &= !FLAG_BITS;
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_flag_round_trip() {
        let flags = Flags {
            compression: true,
            infinity: false,
            sign: true,
        };
        let mut bytes = [0x01u8, 0x02];
        flags.write(&mut bytes);
        assert_eq!(bytes[0], 0b1010_0001);
        assert_eq!(Flags::read(&bytes), flags);
        assert_eq!(strip_flags::<2>(&bytes), [0x01, 0x02]);
    }

    #[test]
    fn test_infinity_must_be_clean() {
        let mut bytes = [0u8; 4];
        bytes[0] = COMPRESSION | INFINITY;
        assert_eq!(Flags::read(&bytes).check(&bytes, true, "test"), Ok(true));

        bytes[3] = 1;
        assert_eq!(
            Flags::read(&bytes).check(&bytes, true, "test"),
            Err(Error::encoding("test", EncodingFault::Flags))
        );

        // uncompressed form must not carry the compression or sign bit
        let bytes = [SIGN, 0, 0, 0];
        assert!(Flags::read(&bytes).check(&bytes, false, "test").is_err());
        let bytes = [COMPRESSION, 0, 0, 0];
        assert!(Flags::read(&bytes).check(&bytes, false, "test").is_err());
    }
}
