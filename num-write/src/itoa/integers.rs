use crate::constants::{I32_MIN_LITERAL, U32_SIZE_TABLE};
use crate::error::Error;
use crate::sink::ByteSink;
use crate::tables::{DIGIT_ONES, DIGIT_TENS};

use super::fill_small;

/// Writes an `i32` and returns the number of bytes written.
#[inline(never)]
pub fn write_i32<S: ByteSink + ?Sized>(value: i32, sink: &mut S) -> Result<usize, Error> {
    if value == i32::MIN {
        // cannot be negated
        return sink.put(I32_MIN_LITERAL);
    }

    let is_negative = value < 0;
    let magnitude = value.unsigned_abs();
    let len = string_size(magnitude) + usize::from(is_negative);

    let slot = sink.slot(len)?;
    let curr = fill_u32(magnitude, slot);
    if is_negative {
        slot[curr - 1] = b'-';
    }
    Ok(len)
}

/// Writes a `u32` and returns the number of bytes written.
#[inline(never)]
pub fn write_u32<S: ByteSink + ?Sized>(value: u32, sink: &mut S) -> Result<usize, Error> {
    let len = string_size(value);
    fill_u32(value, sink.slot(len)?);
    Ok(len)
}

#[inline]
fn string_size(n: u32) -> usize {
    let mut i = 0;
    while n > U32_SIZE_TABLE[i] {
        i += 1;
    }
    i + 1
}

/// Fills `buf` from the back with the digits of `n` and returns the index of
/// the first digit.
pub(crate) fn fill_u32(mut n: u32, buf: &mut [u8]) -> usize {
    let mut curr = buf.len();
    while n >= 65536 {
        let q = n / 100;
        let r = (n - q * 100) as usize;
        n = q;
        curr -= 2;
        buf[curr] = DIGIT_TENS[r];
        buf[curr + 1] = DIGIT_ONES[r];
    }
    fill_small(n, buf, curr)
}
