use crate::constants::{I64_MIN_LITERAL, U64_SIZE_TABLE};
use crate::error::Error;
use crate::sink::ByteSink;
use crate::tables::{DIGIT_ONES, DIGIT_TENS};

use super::integers::fill_u32;

/// Writes an `i64` and returns the number of bytes written.
#[inline(never)]
pub fn write_i64<S: ByteSink + ?Sized>(value: i64, sink: &mut S) -> Result<usize, Error> {
    if value == i64::MIN {
        // cannot be negated
        return sink.put(I64_MIN_LITERAL);
    }

    let is_negative = value < 0;
    let magnitude = value.unsigned_abs();
    let len = string_size(magnitude) + usize::from(is_negative);

    let slot = sink.slot(len)?;
    let curr = fill_u64(magnitude, slot);
    if is_negative {
        slot[curr - 1] = b'-';
    }
    Ok(len)
}

/// Writes a `u64` and returns the number of bytes written.
#[inline(never)]
pub fn write_u64<S: ByteSink + ?Sized>(value: u64, sink: &mut S) -> Result<usize, Error> {
    let len = string_size(value);
    fill_u64(value, sink.slot(len)?);
    Ok(len)
}

#[inline]
fn string_size(n: u64) -> usize {
    let mut i = 0;
    while n > U64_SIZE_TABLE[i] {
        i += 1;
    }
    i + 1
}

/// Fills `buf` from the back with the digits of `n` and returns the index of
/// the first digit.
pub(crate) fn fill_u64(mut n: u64, buf: &mut [u8]) -> usize {
    let mut curr = buf.len();
    while n > u64::from(u32::MAX) {
        let q = n / 100;
        let r = (n - q * 100) as usize;
        n = q;
        curr -= 2;
        buf[curr] = DIGIT_TENS[r];
        buf[curr + 1] = DIGIT_ONES[r];
    }
    // the rest fits in 32 bits
    fill_u32(n as u32, &mut buf[..curr])
}

#[cfg(test)]
mod tests {
    use super::*;

    use arrayvec::ArrayVec;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn render(value: i64) -> ArrayVec<u8, 24> {
        let mut out = ArrayVec::new();
        let len = write_i64(value, &mut out).unwrap();
        assert_eq!(len, out.len());
        out
    }

    #[test]
    fn test_string_size() {
        assert_eq!(string_size(0), 1);
        assert_eq!(string_size(4_294_967_296), 10);
        assert_eq!(string_size(9_999_999_999_999_999_999), 19);
        assert_eq!(string_size(10_000_000_000_000_000_000), 20);
        assert_eq!(string_size(u64::MAX), 20);
    }

    #[test]
    fn test_write_i64() {
        assert_eq!(&render(0)[..], b"0");
        assert_eq!(&render(-1)[..], b"-1");
        assert_eq!(&render(4_294_967_296)[..], b"4294967296");
        assert_eq!(&render(-4_294_967_295)[..], b"-4294967295");
        assert_eq!(&render(i64::MAX)[..], b"9223372036854775807");
        assert_eq!(&render(i64::MIN)[..], b"-9223372036854775808");
    }

    #[test]
    fn test_fill_u64_leaves_prefix() {
        let mut buf = [b'x'; 24];
        let start = fill_u64(u64::MAX, &mut buf);
        assert_eq!(start, 4);
        assert_eq!(&buf[..4], b"xxxx");
        assert_eq!(&buf[4..], b"18446744073709551615");
    }

    #[test]
    fn test_matches_display() {
        let mut rng = StdRng::seed_from_u64(64);
        for _ in 0..10_000 {
            let value: u64 = rng.gen();
            let value = value >> rng.gen_range(0..64);
            let mut out = ArrayVec::<u8, 24>::new();
            write_u64(value, &mut out).unwrap();
            assert_eq!(&out[..], value.to_string().as_bytes());

            let signed = value as i64;
            assert_eq!(&render(signed)[..], signed.to_string().as_bytes());
        }
    }
}
