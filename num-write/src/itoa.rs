//! Minimal decimal rendering of integers.
//!
//! The printed width is known up front from a threshold table, so the digits
//! go straight into a slot of exactly that size, filled back-to-front.

mod integer64;
mod integers;

use crate::error::Error;
use crate::sink::ByteSink;

pub use self::integer64::{write_i64, write_u64};
pub use self::integers::{write_i32, write_u32};

pub(crate) use self::integer64::fill_u64;

/// An integer that can be written into a [`ByteSink`].
///
/// This trait is sealed and cannot be implemented for types outside of this crate.
///
/// [`ByteSink`]: ../trait.ByteSink.html
pub trait Integer: crate::private::Sealed + Copy {
    /// Writes the integer and returns the number of bytes written.
    fn write<S: ByteSink + ?Sized>(self, sink: &mut S) -> Result<usize, Error>;
}

/// Writes an integer into `sink` and returns the number of bytes written.
///
/// # Example
///
/// ```
/// let mut out = Vec::new();
/// num_write::itoa::write(-42i32, &mut out).unwrap();
/// num_write::itoa::write(i64::MIN, &mut out).unwrap();
/// assert_eq!(out, b"-42-9223372036854775808");
/// ```
#[inline]
pub fn write<N, S>(n: N, sink: &mut S) -> Result<usize, Error>
where
    N: Integer,
    S: ByteSink + ?Sized,
{
    n.write(sink)
}

/// Fills `buf[..curr]` from the back with the digits of `n < 65536`, one at a
/// time, and returns the index of the first digit.
#[inline]
fn fill_small(mut n: u32, buf: &mut [u8], mut curr: usize) -> usize {
    debug_assert!(n < 65536);
    loop {
        // n * 52429 >> 19 == n / 10 for every n < 65536
        let q = (n * 52429) >> 19;
        curr -= 1;
        buf[curr] = b'0' + (n - q * 10) as u8;
        n = q;
        if n == 0 {
            return curr;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reciprocal_division() {
        for n in 0..65536u32 {
            assert_eq!((n * 52429) >> 19, n / 10);
        }
    }

    #[test]
    fn test_fill_small() {
        let mut buf = [b'x'; 8];
        assert_eq!(fill_small(0, &mut buf, 8), 7);
        assert_eq!(&buf[7..], b"0");
        assert_eq!(fill_small(65535, &mut buf, 8), 3);
        assert_eq!(&buf[3..], b"65535");
        assert_eq!(&buf[..3], b"xxx");
    }
}
