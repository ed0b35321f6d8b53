use core::fmt;
use core::str;

use crate::constants::MAX_BUF_LEN;
use crate::error::Error;
use crate::sink::ByteSink;
use crate::write_to::WriteTo;

/// <b><u>A key type</u></b>. Represents a stack-allocated buffer large enough
/// for the rendering of any single number.
///
/// # Example
///
/// ```
/// use num_write::Buffer;
///
/// let mut buf = Buffer::new();
/// assert_eq!(buf.format(&1e-7f64).unwrap(), "0.00000009999999999999999");
/// assert_eq!(buf.format(&i64::MIN).unwrap(), "-9223372036854775808");
///
/// // format replaces the contents; writing through the sink appends
/// use num_write::ByteSink;
/// buf.put_value(&", ").unwrap();
/// buf.put_value(&true).unwrap();
/// assert_eq!(buf.as_bytes(), b"-9223372036854775808, true");
/// ```
#[derive(Copy, Clone)]
pub struct Buffer {
    inner: [u8; MAX_BUF_LEN],
    len: usize,
}

impl Buffer {
    /// Constructs a new, empty buffer.
    #[inline(always)]
    pub const fn new() -> Buffer {
        Buffer {
            inner: [0; MAX_BUF_LEN],
            len: 0,
        }
    }

    /// Replaces the contents of the buffer with the rendering of `n` and
    /// returns it as a string slice.
    ///
    /// Numbers always fit. Strings and objects longer than the buffer's
    /// capacity return an error and leave the buffer empty.
    pub fn format<N>(&mut self, n: &N) -> Result<&str, Error>
    where
        N: WriteTo + ?Sized,
    {
        self.clear();
        if let Err(e) = n.write_to(self) {
            self.clear();
            return Err(e);
        }
        // SAFETY: `WriteTo` is sealed and every implementation writes ASCII
        // or the UTF-8 of a `char`, `str` or `Display` output, and a failed
        // write is cleared above.
        Ok(unsafe { str::from_utf8_unchecked(self.as_bytes()) })
    }

    /// Returns a byte slice representation of the buffer's contents.
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner[..self.len]
    }

    /// Returns the length (in bytes) of the buffer's contents.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the buffer is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Empties the buffer.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl ByteSink for Buffer {
    #[inline]
    fn position(&self) -> usize {
        self.len
    }

    fn slot(&mut self, len: usize) -> Result<&mut [u8], Error> {
        let start = self.len;
        let cap = MAX_BUF_LEN - start;
        if len > cap {
            return Err(Error::capacity(len, cap));
        }
        self.len += len;
        Ok(&mut self.inner[start..self.len])
    }
}

impl AsRef<[u8]> for Buffer {
    #[inline(always)]
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Buffer");
        match str::from_utf8(self.as_bytes()) {
            Ok(s) => debug.field("contents", &s),
            Err(_) => debug.field("contents", &self.as_bytes()),
        };
        debug.finish()
    }
}

impl Default for Buffer {
    /// Same as the [`new`] method.
    ///
    /// [`new`]: struct.Buffer.html#method.new
    #[inline(always)]
    fn default() -> Buffer {
        Buffer::new()
    }
}
