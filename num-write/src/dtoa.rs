//! Exact fixed-point rendering of `f32` and `f64`.
//!
//! A finite value `m * 2^e` is converted by picking a decimal exponent `d`
//! from a single estimate of its magnitude, computing `floor(m * 2^e / 10^d)`
//! exactly with big-integer arithmetic, and then looking at the last digit
//! of that mantissa (at most 18 digits): if it is within a per-exponent margin of
//! a multiple of ten, it is dropped (rounding up where needed). The result
//! parses back to the same float, but is not always the shortest string that
//! would.

mod extract;
mod fixed;
mod float;

use core::f64::consts::LOG2_10;

use crate::bignum::BigScratch;
use crate::error::Error;
use crate::scratch::extract_on_thread;
use crate::sink::ByteSink;
use crate::tables::ROUNDING_MARGIN;

pub use self::extract::{extract_decimal_mantissa, BINARY_EXPONENT_RANGE};
pub use self::fixed::format_fixed_point;
pub use self::float::{Binary, Float, FloatIeeeData};

/// A float as `±mantissa * 10^exponent`, ready for [`format_fixed_point`].
///
/// [`format_fixed_point`]: fn.format_fixed_point.html
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Decimal {
    /// Sign bit of the original value.
    pub is_negative: bool,
    /// Decimal significand.
    pub mantissa: u64,
    /// Power of ten applied to `mantissa`. Zero when `mantissa` is zero.
    pub exponent: i32,
}

/// Writes `f` into `sink` and returns the number of bytes written.
///
/// NaN and the infinities are written as `NaN`, `Infinity` and `-Infinity`.
/// Finite values use this thread's scratch buffer and never allocate.
///
/// # Example
///
/// ```
/// let mut out = Vec::new();
/// num_write::dtoa::write_float(0.001f64, &mut out).unwrap();
/// num_write::dtoa::write_float(-2.5f32, &mut out).unwrap();
/// assert_eq!(out, b"0.001-2.5");
/// ```
pub fn write_float<F, S>(f: F, sink: &mut S) -> Result<usize, Error>
where
    F: Float,
    S: ByteSink + ?Sized,
{
    if f.is_nonfinite() {
        return sink.put(f.format_nonfinite());
    }
    let decimal = to_decimal(f.decode(), extract_on_thread);
    format_fixed_point(decimal.is_negative, decimal.mantissa, decimal.exponent, sink)
}

/// Like [`write_float`], but runs the conversion in a caller-owned scratch
/// buffer instead of the thread's.
///
/// [`write_float`]: fn.write_float.html
pub fn write_float_with<F, S>(f: F, scratch: &mut BigScratch, sink: &mut S) -> Result<usize, Error>
where
    F: Float,
    S: ByteSink + ?Sized,
{
    if f.is_nonfinite() {
        return sink.put(f.format_nonfinite());
    }
    let decimal = to_decimal(f.decode(), |m, e, d| {
        extract_decimal_mantissa(scratch, m, e, d)
    });
    format_fixed_point(decimal.is_negative, decimal.mantissa, decimal.exponent, sink)
}

/// Writes an `f32`. See [`write_float`].
///
/// [`write_float`]: fn.write_float.html
#[inline]
pub fn write_f32<S: ByteSink + ?Sized>(f: f32, sink: &mut S) -> Result<usize, Error> {
    write_float(f, sink)
}

/// Writes an `f64`. See [`write_float`].
///
/// [`write_float`]: fn.write_float.html
#[inline]
pub fn write_f64<S: ByteSink + ?Sized>(f: f64, sink: &mut S) -> Result<usize, Error> {
    write_float(f, sink)
}

/// Writes an `f32` using `scratch`. See [`write_float_with`].
///
/// [`write_float_with`]: fn.write_float_with.html
#[inline]
pub fn write_f32_with<S: ByteSink + ?Sized>(
    f: f32,
    scratch: &mut BigScratch,
    sink: &mut S,
) -> Result<usize, Error> {
    write_float_with(f, scratch, sink)
}

/// Writes an `f64` using `scratch`. See [`write_float_with`].
///
/// [`write_float_with`]: fn.write_float_with.html
#[inline]
pub fn write_f64_with<S: ByteSink + ?Sized>(
    f: f64,
    scratch: &mut BigScratch,
    sink: &mut S,
) -> Result<usize, Error> {
    write_float_with(f, scratch, sink)
}

/// Converts a finite float to the decimal triple that [`write_float`]
/// renders, or `None` for NaN and the infinities.
///
/// [`write_float`]: fn.write_float.html
pub fn decimal<F: Float>(f: F) -> Option<Decimal> {
    if f.is_nonfinite() {
        None
    } else {
        Some(to_decimal(f.decode(), extract_on_thread))
    }
}

/// `floor((e - 1) / log2(10))` and the margin bucket of its fractional part.
pub(crate) fn estimate_decimal_exponent(binary_exponent: i32) -> (i32, usize) {
    let estimate = f64::from(binary_exponent - 1) / LOG2_10;
    let truncated = estimate as i32;
    let exponent = if f64::from(truncated) > estimate {
        truncated - 1
    } else {
        truncated
    };
    let bucket = ((estimate - f64::from(exponent)) * 256.0) as usize;
    (exponent, bucket.min(ROUNDING_MARGIN.len() - 1))
}

fn to_decimal<E>(binary: Binary, extract: E) -> Decimal
where
    E: FnOnce(u64, i32, i32) -> u64,
{
    let is_negative = binary.is_negative;
    if binary.mantissa == 0 {
        return Decimal {
            is_negative,
            mantissa: 0,
            exponent: 0,
        };
    }

    let (mut exponent, bucket) = estimate_decimal_exponent(binary.exponent);
    let margin = u64::from(ROUNDING_MARGIN[bucket]);

    // The float below a power of two is only half an ulp away, so keep one
    // more digit than the margin alone would allow.
    if binary.is_boundary {
        exponent -= 1;
    }

    let mut mantissa = extract(binary.mantissa, binary.exponent, exponent);

    let last = mantissa % 10;
    if last <= margin {
        mantissa /= 10;
        exponent += 1;
    } else if last >= 10 - margin {
        mantissa = mantissa / 10 + 1;
        exponent += 1;
    }

    if mantissa == 0 {
        exponent = 0;
    }

    Decimal {
        is_negative,
        mantissa,
        exponent,
    }
}
