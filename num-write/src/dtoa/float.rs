use crate::constants::{INFINITY, NAN, NEG_INFINITY};

pub(crate) const DOUBLE_MANTISSA_BITS: u32 = 52;
pub(crate) const DOUBLE_EXPONENT_BITS: u32 = 11;
pub(crate) const FLOAT_MANTISSA_BITS: u32 = 23;
pub(crate) const FLOAT_EXPONENT_BITS: u32 = 8;

/// Raw IEEE-754 fields of a float: sign bit, stored significand bits and
/// biased exponent.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FloatIeeeData {
    /// Sign bit.
    pub is_negative: bool,
    /// Stored significand bits, without the implicit leading bit.
    pub mantissa: u64,
    /// Biased exponent field.
    pub exponent: u32,
}

/// A finite float as `mantissa * 2^exponent`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Binary {
    /// Sign bit.
    pub is_negative: bool,
    /// Integer significand, implicit bit restored for normal values.
    pub mantissa: u64,
    /// Power of two of the significand's least significant bit.
    pub exponent: i32,
    /// The significand is an exact power of two and the next float down is
    /// only half an ulp away.
    pub is_boundary: bool,
}

/// A floating point number, f32 or f64, that can be written into a sink.
///
/// This trait is sealed and cannot be implemented for types outside of this crate.
pub trait Float: crate::private::Sealed + Copy {
    /// Width of the stored significand.
    const MANTISSA_BITS: u32;
    /// Width of the exponent field.
    const EXPONENT_BITS: u32;

    /// Splits the bit pattern into its IEEE-754 fields.
    fn parse_ieee_data(self) -> FloatIeeeData;

    /// Returns `true` for NaN and the infinities.
    fn is_nonfinite(self) -> bool;

    /// Literal rendering of NaN or an infinity.
    fn format_nonfinite(self) -> &'static [u8];

    /// Decomposes a finite value into an integer significand and a binary
    /// exponent. Subnormals keep their raw significand at the minimal exponent.
    #[inline]
    fn decode(self) -> Binary {
        let ieee = self.parse_ieee_data();
        let bias = (1i32 << (Self::EXPONENT_BITS - 1)) - 1 + Self::MANTISSA_BITS as i32;
        if ieee.exponent == 0 {
            Binary {
                is_negative: ieee.is_negative,
                mantissa: ieee.mantissa,
                exponent: 1 - bias,
                is_boundary: false,
            }
        } else {
            Binary {
                is_negative: ieee.is_negative,
                mantissa: ieee.mantissa | (1u64 << Self::MANTISSA_BITS),
                exponent: ieee.exponent as i32 - bias,
                is_boundary: ieee.mantissa == 0 && ieee.exponent > 1,
            }
        }
    }
}

impl crate::private::Sealed for f32 {}

impl Float for f32 {
    const MANTISSA_BITS: u32 = FLOAT_MANTISSA_BITS;
    const EXPONENT_BITS: u32 = FLOAT_EXPONENT_BITS;

    #[inline]
    fn parse_ieee_data(self) -> FloatIeeeData {
        let bits = self.to_bits();
        let sign = ((bits >> (FLOAT_MANTISSA_BITS + FLOAT_EXPONENT_BITS)) & 1) != 0;
        let ieee_mantissa = bits & ((1u32 << FLOAT_MANTISSA_BITS) - 1);
        let ieee_exponent = (bits >> FLOAT_MANTISSA_BITS) & ((1u32 << FLOAT_EXPONENT_BITS) - 1);

        FloatIeeeData {
            is_negative: sign,
            mantissa: u64::from(ieee_mantissa),
            exponent: ieee_exponent,
        }
    }

    #[inline]
    fn is_nonfinite(self) -> bool {
        const EXP_MASK: u32 = 0x7f800000;
        let bits = self.to_bits();
        bits & EXP_MASK == EXP_MASK
    }

    #[cold]
    fn format_nonfinite(self) -> &'static [u8] {
        const MANTISSA_MASK: u32 = 0x007fffff;
        const SIGN_MASK: u32 = 0x80000000;
        let bits = self.to_bits();
        if bits & MANTISSA_MASK != 0 {
            NAN
        } else if bits & SIGN_MASK != 0 {
            NEG_INFINITY
        } else {
            INFINITY
        }
    }
}

impl crate::private::Sealed for f64 {}

impl Float for f64 {
    const MANTISSA_BITS: u32 = DOUBLE_MANTISSA_BITS;
    const EXPONENT_BITS: u32 = DOUBLE_EXPONENT_BITS;

    #[inline]
    fn parse_ieee_data(self) -> FloatIeeeData {
        let bits = self.to_bits();
        let sign = ((bits >> (DOUBLE_MANTISSA_BITS + DOUBLE_EXPONENT_BITS)) & 1) != 0;
        let ieee_mantissa = bits & ((1u64 << DOUBLE_MANTISSA_BITS) - 1);
        let ieee_exponent =
            (bits >> DOUBLE_MANTISSA_BITS) as u32 & ((1u32 << DOUBLE_EXPONENT_BITS) - 1);

        FloatIeeeData {
            is_negative: sign,
            mantissa: ieee_mantissa,
            exponent: ieee_exponent,
        }
    }

    #[inline]
    fn is_nonfinite(self) -> bool {
        const EXP_MASK: u64 = 0x7ff0000000000000;
        let bits = self.to_bits();
        bits & EXP_MASK == EXP_MASK
    }

    #[cold]
    fn format_nonfinite(self) -> &'static [u8] {
        const MANTISSA_MASK: u64 = 0x000fffffffffffff;
        const SIGN_MASK: u64 = 0x8000000000000000;
        let bits = self.to_bits();
        if bits & MANTISSA_MASK != 0 {
            NAN
        } else if bits & SIGN_MASK != 0 {
            NEG_INFINITY
        } else {
            INFINITY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_f64() {
        assert_eq!(
            1.0f64.decode(),
            Binary {
                is_negative: false,
                mantissa: 1 << 52,
                exponent: -52,
                is_boundary: true,
            }
        );
        assert_eq!(
            (-1.5f64).decode(),
            Binary {
                is_negative: true,
                mantissa: 3 << 51,
                exponent: -52,
                is_boundary: false,
            }
        );

        let min_subnormal = f64::from_bits(1).decode();
        assert_eq!((min_subnormal.mantissa, min_subnormal.exponent), (1, -1074));
        assert!(!min_subnormal.is_boundary);

        let min_normal = f64::MIN_POSITIVE.decode();
        assert_eq!((min_normal.mantissa, min_normal.exponent), (1 << 52, -1074));
        assert!(!min_normal.is_boundary);

        let max = f64::MAX.decode();
        assert_eq!((max.mantissa, max.exponent), ((1 << 53) - 1, 971));
    }

    #[test]
    fn test_decode_f32() {
        let one = 1.0f32.decode();
        assert_eq!((one.mantissa, one.exponent, one.is_boundary), (1 << 23, -23, true));

        let min_subnormal = f32::from_bits(1).decode();
        assert_eq!((min_subnormal.mantissa, min_subnormal.exponent), (1, -149));

        let max = f32::MAX.decode();
        assert_eq!((max.mantissa, max.exponent), ((1 << 24) - 1, 104));
    }

    #[test]
    fn test_nonfinite() {
        assert!(f64::NAN.is_nonfinite());
        assert!(f32::INFINITY.is_nonfinite());
        assert!(!f64::MAX.is_nonfinite());
        assert_eq!(f64::NAN.format_nonfinite(), b"NaN");
        assert_eq!(f32::NEG_INFINITY.format_nonfinite(), b"-Infinity");
        assert_eq!(f64::INFINITY.format_nonfinite(), b"Infinity");
    }
}
