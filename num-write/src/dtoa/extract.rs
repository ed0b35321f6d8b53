use crate::bignum::BigScratch;

/// Binary exponents accepted by [`extract_decimal_mantissa`].
///
/// [`extract_decimal_mantissa`]: fn.extract_decimal_mantissa.html
pub const BINARY_EXPONENT_RANGE: core::ops::RangeInclusive<i32> = -1075..=1075;

/// Returns `floor(mantissa * 2^binary_exponent / 10^decimal_exponent)`,
/// computed exactly in `scratch`.
///
/// The caller picks `decimal_exponent` so that the result fits in a `u64`;
/// the float writers pick it from an estimate of the value's magnitude that
/// leaves at most 18 significant digits.
///
/// # Panics
///
/// Panics if `binary_exponent` is outside [`BINARY_EXPONENT_RANGE`], or if the
/// result does not fit in 64 bits.
///
/// [`BINARY_EXPONENT_RANGE`]: constant.BINARY_EXPONENT_RANGE.html
///
/// # Example
///
/// ```
/// use num_write::dtoa::extract_decimal_mantissa;
/// use num_write::BigScratch;
///
/// let mut scratch = BigScratch::new();
/// // 3 * 2^-2 = 0.75
/// assert_eq!(extract_decimal_mantissa(&mut scratch, 3, -2, -2), 75);
/// // 5 * 2^70 = 5902958103587056517120
/// assert_eq!(extract_decimal_mantissa(&mut scratch, 5, 70, 4), 590_295_810_358_705_651);
/// ```
pub fn extract_decimal_mantissa(
    scratch: &mut BigScratch,
    mantissa: u64,
    binary_exponent: i32,
    decimal_exponent: i32,
) -> u64 {
    assert!(
        BINARY_EXPONENT_RANGE.contains(&binary_exponent),
        "binary exponent {} out of range",
        binary_exponent
    );

    if binary_exponent == 0 {
        scale_decimal(mantissa, decimal_exponent)
    } else if binary_exponent > 0 {
        scratch.set_shifted(mantissa, binary_exponent as u32);
        scratch.normalize(decimal_exponent)
    } else {
        // m * 2^-k == m * 5^k / 10^k: trade the negative power of two for a
        // power of five, doing as much of it as fits in a u64 up front.
        let mut mantissa = mantissa;
        let mut power = binary_exponent.unsigned_abs();
        while power > 0 && mantissa <= u64::MAX / 5 {
            mantissa *= 5;
            power -= 1;
        }
        scratch.set_u64(mantissa);
        scratch.mul_pow5(power);
        scratch.normalize(decimal_exponent - binary_exponent)
    }
}

fn scale_decimal(mut mantissa: u64, decimal_exponent: i32) -> u64 {
    if decimal_exponent >= 0 {
        for _ in 0..decimal_exponent {
            mantissa /= 10;
        }
    } else {
        for _ in 0..decimal_exponent.unsigned_abs() {
            mantissa = match mantissa.checked_mul(10) {
                Some(mantissa) => mantissa,
                None => panic!("decimal mantissa overflows 64 bits"),
            };
        }
    }
    mantissa
}
