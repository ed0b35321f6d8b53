use crate::constants::{U64_MAX_LEN, ZERO};
use crate::error::Error;
use crate::itoa::fill_u64;
use crate::sink::ByteSink;

/// Writes `±mantissa * 10^exponent` in fixed-point notation and returns the
/// number of bytes written.
///
/// The output always has a decimal point with at least one digit on each
/// side, never an exponent suffix. Trailing zeros of the fraction are dropped.
/// A negative zero keeps its sign.
///
/// # Example
///
/// ```
/// use num_write::dtoa::format_fixed_point;
///
/// let mut out = Vec::new();
/// format_fixed_point(false, 12_500, -3, &mut out).unwrap();
/// assert_eq!(out, b"12.5");
/// ```
pub fn format_fixed_point<S>(
    is_negative: bool,
    mantissa: u64,
    exponent: i32,
    sink: &mut S,
) -> Result<usize, Error>
where
    S: ByteSink + ?Sized,
{
    let sign = usize::from(is_negative);

    if mantissa == 0 {
        let len = sign + ZERO.len();
        let mut out = Cursor::new(sink.slot(len)?);
        if is_negative {
            out.push(b'-');
        }
        out.extend(ZERO);
        out.finish();
        return Ok(len);
    }

    let mut staging = [0u8; U64_MAX_LEN];
    let start = fill_u64(mantissa, &mut staging);
    let digits = &staging[start..];
    let n = digits.len();

    if exponent >= 0 {
        // 1234e3 -> 1234000.0
        let zeros = exponent as usize;
        let len = sign + n + zeros + 2;
        let mut out = Cursor::new(sink.slot(len)?);
        if is_negative {
            out.push(b'-');
        }
        out.extend(digits);
        out.zeros(zeros);
        out.extend(b".0");
        out.finish();
        return Ok(len);
    }

    let scale = exponent.unsigned_abs() as usize;
    if n <= scale {
        // 1234e-6 -> 0.001234
        let significant = trim_trailing_zeros(digits);
        let zeros = scale - n;
        let len = sign + 2 + zeros + significant.len();
        let mut out = Cursor::new(sink.slot(len)?);
        if is_negative {
            out.push(b'-');
        }
        out.extend(b"0.");
        out.zeros(zeros);
        out.extend(significant);
        out.finish();
        Ok(len)
    } else {
        // 1234e-2 -> 12.34, 1200e-2 -> 12.0
        let (integer, fraction) = digits.split_at(n - scale);
        let fraction = trim_trailing_zeros(fraction);
        let len = sign + integer.len() + 1 + fraction.len().max(1);
        let mut out = Cursor::new(sink.slot(len)?);
        if is_negative {
            out.push(b'-');
        }
        out.extend(integer);
        out.push(b'.');
        if fraction.is_empty() {
            out.push(b'0');
        } else {
            out.extend(fraction);
        }
        out.finish();
        Ok(len)
    }
}

fn trim_trailing_zeros(digits: &[u8]) -> &[u8] {
    let end = digits
        .iter()
        .rposition(|&digit| digit != b'0')
        .map_or(0, |last| last + 1);
    &digits[..end]
}

/// Front-to-back writer over a slot sized exactly for its output.
struct Cursor<'a> {
    out: &'a mut [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(out: &'a mut [u8]) -> Cursor<'a> {
        Cursor { out, pos: 0 }
    }

    #[inline]
    fn push(&mut self, byte: u8) {
        self.out[self.pos] = byte;
        self.pos += 1;
    }

    #[inline]
    fn extend(&mut self, bytes: &[u8]) {
        self.out[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
    }

    #[inline]
    fn zeros(&mut self, count: usize) {
        self.out[self.pos..self.pos + count].fill(b'0');
        self.pos += count;
    }

    #[inline]
    fn finish(self) {
        debug_assert_eq!(self.pos, self.out.len(), "slot not filled");
    }
}
