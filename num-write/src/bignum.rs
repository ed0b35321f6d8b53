//! Fixed-capacity unsigned big integer used as scratch space for exact
//! binary-to-decimal conversion.

use core::cmp;

use crate::tables::{MAX_POW5, POW5};

/// Number of 32-bit limbs in a [`BigScratch`].
///
/// Enough for `u64::MAX * 5^1075` (2561 bits) plus one limb of carry.
///
/// [`BigScratch`]: struct.BigScratch.html
pub const LIMBS: usize = 84;

/// A reusable big unsigned integer of at most [`LIMBS`] little-endian 32-bit
/// limbs.
///
/// `len` counts the significant limbs; the limb at `len - 1` is never zero,
/// and `len == 0` means the value zero. Nothing above `len` is meaningful.
///
/// A scratch value carries no state between conversions: every loading
/// operation ([`set_u64`], [`set_shifted`]) rewrites all limbs it will later
/// read, so a scratch can be reused by any call on the owning thread without
/// clearing it first. It never allocates; exceeding its capacity is a bug and
/// panics.
///
/// [`LIMBS`]: constant.LIMBS.html
/// [`set_u64`]: struct.BigScratch.html#method.set_u64
/// [`set_shifted`]: struct.BigScratch.html#method.set_shifted
#[derive(Clone, Debug)]
pub struct BigScratch {
    limbs: [u32; LIMBS],
    len: usize,
}

impl Default for BigScratch {
    fn default() -> BigScratch {
        BigScratch::new()
    }
}

impl BigScratch {
    /// Constructs a new scratch holding zero.
    pub const fn new() -> BigScratch {
        BigScratch {
            limbs: [0; LIMBS],
            len: 0,
        }
    }

    /// Number of significant limbs.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the value is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The significant limbs, least significant first.
    #[inline]
    pub fn limbs(&self) -> &[u32] {
        &self.limbs[..self.len]
    }

    /// Loads a 64-bit value.
    pub fn set_u64(&mut self, value: u64) {
        self.limbs[0] = value as u32;
        self.limbs[1] = (value >> 32) as u32;
        self.len = 2;
        self.trim();
    }

    /// Loads `value << shift`, zeroing every limb below the value.
    pub fn set_shifted(&mut self, value: u64, shift: u32) {
        self.set_u64(value);
        self.shl(shift);
    }

    /// Returns the value if it fits in two limbs.
    #[inline]
    pub fn to_u64(&self) -> Option<u64> {
        match self.len {
            0 => Some(0),
            1 => Some(u64::from(self.limbs[0])),
            2 => Some(u64::from(self.limbs[0]) | (u64::from(self.limbs[1]) << 32)),
            _ => None,
        }
    }

    /// Multiplies by `2^n`: a cross-limb bit shift, then a word-aligned move.
    pub fn shl(&mut self, n: u32) {
        if self.len == 0 {
            return;
        }
        let words = (n / 32) as usize;
        let bits = n % 32;

        if bits > 0 {
            let mut carry = 0u32;
            for limb in &mut self.limbs[..self.len] {
                let next = *limb >> (32 - bits);
                *limb = (*limb << bits) | carry;
                carry = next;
            }
            if carry != 0 {
                self.push(carry);
            }
        }

        if words > 0 {
            assert!(
                self.len + words <= LIMBS,
                "big integer overflows {} limbs",
                LIMBS
            );
            self.limbs.copy_within(..self.len, words);
            self.limbs[..words].fill(0);
            self.len += words;
        }
    }

    /// Exact floor division by `2^n`. Returns the new length.
    pub fn shr(&mut self, n: u32) -> usize {
        let words = (n / 32) as usize;
        let bits = n % 32;

        if words >= self.len {
            self.len = 0;
            return 0;
        }
        if words > 0 {
            self.limbs.copy_within(words..self.len, 0);
            self.len -= words;
        }
        if bits > 0 {
            let top = self.len - 1;
            for i in 0..top {
                self.limbs[i] = (self.limbs[i] >> bits) | (self.limbs[i + 1] << (32 - bits));
            }
            self.limbs[top] >>= bits;
        }

        self.trim();
        self.len
    }

    /// Multiplies by `5^power`, at most `5^13` per pass. Returns the new
    /// length, which never shrinks.
    pub fn mul_pow5(&mut self, mut power: u32) -> usize {
        if self.len == 0 {
            return 0;
        }
        while power > 0 {
            let chunk = cmp::min(power, MAX_POW5);
            let factor = u64::from(POW5[chunk as usize]);

            let mut carry = 0u64;
            for limb in &mut self.limbs[..self.len] {
                let product = u64::from(*limb) * factor + carry;
                *limb = product as u32;
                carry = product >> 32;
            }
            if carry != 0 {
                self.push(carry as u32);
            }

            power -= chunk;
        }
        self.len
    }

    /// Exact floor division by `5^power`, at most `5^13` per pass. Once the
    /// value fits in 64 bits the rest of the power is divided out with plain
    /// `u64` arithmetic. Returns the new length.
    pub fn div_pow5(&mut self, mut power: u32) -> usize {
        while power > 0 {
            if let Some(mut value) = self.to_u64() {
                while power > 0 && value != 0 {
                    let chunk = cmp::min(power, MAX_POW5);
                    value /= u64::from(POW5[chunk as usize]);
                    power -= chunk;
                }
                self.set_u64(value);
                break;
            }

            let chunk = cmp::min(power, MAX_POW5);
            let divisor = u64::from(POW5[chunk as usize]);

            // remainder < divisor < 2^31, so `remainder << 32 | limb` fits
            let mut remainder = 0u64;
            for limb in self.limbs[..self.len].iter_mut().rev() {
                let current = (remainder << 32) | u64::from(*limb);
                *limb = (current / divisor) as u32;
                remainder = current % divisor;
            }
            self.trim();

            power -= chunk;
        }
        self.len
    }

    /// Returns `floor(self / 10^decimal_exponent)`, which must fit in 64 bits.
    ///
    /// A non-negative exponent divides by `2^e` then by `5^e`. A negative
    /// exponent requires the value to already fit in two limbs, and multiplies
    /// it by ten `-e` times.
    ///
    /// # Panics
    ///
    /// Panics if the result does not fit in 64 bits. For the exponents chosen
    /// by the float writers this is unreachable.
    pub fn normalize(&mut self, decimal_exponent: i32) -> u64 {
        if decimal_exponent >= 0 {
            let e = decimal_exponent as u32;
            self.shr(e);
            self.div_pow5(e);
            match self.to_u64() {
                Some(value) => value,
                None => panic!(
                    "normalized decimal mantissa spans {} limbs at exponent {}",
                    self.len, decimal_exponent
                ),
            }
        } else {
            let mut value = match self.to_u64() {
                Some(value) => value,
                None => panic!(
                    "cannot scale a {}-limb value up by 10^{}",
                    self.len, -decimal_exponent
                ),
            };
            for _ in 0..decimal_exponent.unsigned_abs() {
                value = match value.checked_mul(10) {
                    Some(value) => value,
                    None => panic!("decimal mantissa overflows 64 bits"),
                };
            }
            self.set_u64(value);
            value
        }
    }

    #[inline]
    fn push(&mut self, limb: u32) {
        assert!(self.len < LIMBS, "big integer overflows {} limbs", LIMBS);
        self.limbs[self.len] = limb;
        self.len += 1;
    }

    #[inline]
    fn trim(&mut self) {
        while self.len > 0 && self.limbs[self.len - 1] == 0 {
            self.len -= 1;
        }
    }
}
