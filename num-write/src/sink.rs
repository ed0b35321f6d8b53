use arrayvec::ArrayVec;

use crate::error::Error;
use crate::write_to::WriteTo;

/// A growable byte output with a write cursor.
///
/// Writers ask the sink for a slot of exactly the number of bytes they are
/// about to produce with [`slot`], then fill that slot in whatever order
/// suits them (the digit writers fill it back-to-front). The cursor has
/// already moved past the slot when [`slot`] returns, so every entry point
/// advances the cursor by the count it returns.
///
/// [`slot`]: trait.ByteSink.html#tymethod.slot
pub trait ByteSink {
    /// Returns the number of bytes written so far, i.e. the absolute offset of
    /// the write cursor.
    fn position(&self) -> usize;

    /// Reserves `len` bytes at the cursor, advances the cursor past them and
    /// returns them as a mutable slot at the old cursor's absolute offset.
    ///
    /// Contents of the returned slot are unspecified; the caller must
    /// overwrite every byte.
    ///
    /// # Errors
    ///
    /// Returns an error of kind [`ErrorKind::Capacity`] if a fixed-capacity
    /// sink cannot hold `len` more bytes. The cursor does not move in that case.
    ///
    /// [`ErrorKind::Capacity`]: enum.ErrorKind.html#variant.Capacity
    fn slot(&mut self, len: usize) -> Result<&mut [u8], Error>;

    /// Appends `bytes` at the cursor and returns how many bytes were written.
    fn put(&mut self, bytes: &[u8]) -> Result<usize, Error> {
        let slot = self.slot(bytes.len())?;
        slot.copy_from_slice(bytes);
        Ok(bytes.len())
    }

    /// Writes the decimal (or literal) rendering of `value` at the cursor and
    /// returns how many bytes were written.
    fn put_value<N>(&mut self, value: &N) -> Result<usize, Error>
    where
        N: WriteTo + ?Sized,
        Self: Sized,
    {
        value.write_to(self)
    }
}

impl<S> ByteSink for &mut S
where
    S: ByteSink + ?Sized,
{
    #[inline]
    fn position(&self) -> usize {
        (**self).position()
    }

    #[inline]
    fn slot(&mut self, len: usize) -> Result<&mut [u8], Error> {
        (**self).slot(len)
    }
}

impl<const CAP: usize> ByteSink for ArrayVec<u8, CAP> {
    #[inline]
    fn position(&self) -> usize {
        self.len()
    }

    fn slot(&mut self, len: usize) -> Result<&mut [u8], Error> {
        let start = self.len();
        let cap = self.remaining_capacity();
        if len > cap {
            return Err(Error::capacity(len, cap));
        }
        self.extend(core::iter::repeat(0).take(len));
        Ok(&mut self[start..])
    }
}

#[cfg(feature = "std")]
mod standard {
    use super::*;

    /// Grows as needed. No allocation happens while the vector's spare
    /// capacity covers the reservation.
    impl ByteSink for Vec<u8> {
        #[inline]
        fn position(&self) -> usize {
            self.len()
        }

        fn slot(&mut self, len: usize) -> Result<&mut [u8], Error> {
            let start = self.len();
            self.resize(start + len, 0);
            Ok(&mut self[start..])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_kind::ErrorKind;

    #[test]
    fn test_array_vec_capacity() {
        let mut sink = ArrayVec::<u8, 4>::new();
        assert_eq!(sink.put(b"abc").unwrap(), 3);
        let err = sink.put(b"de").unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::Capacity { len: 2, cap: 1 });
        assert_eq!(sink.position(), 3);
        assert_eq!(sink.put(b"d").unwrap(), 1);
        assert_eq!(&sink[..], b"abcd");
    }

    #[test]
    fn test_slot_is_at_cursor() {
        let mut sink = ArrayVec::<u8, 8>::new();
        sink.put(b"ab").unwrap();
        let slot = sink.slot(3).unwrap();
        assert_eq!(slot.len(), 3);
        slot[2] = b'z';
        slot[1] = b'y';
        slot[0] = b'x';
        assert_eq!(&sink[..], b"abxyz");
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_vec_grows_through_reference() {
        fn greet<S: ByteSink>(mut sink: S) -> usize {
            sink.put(b"hello").unwrap();
            sink.put(b", world").unwrap();
            sink.position()
        }

        let mut sink = Vec::new();
        assert_eq!(greet(&mut sink), 12);
        assert_eq!(sink, b"hello, world");
    }
}
