use crate::error::Error;
use crate::sink::ByteSink;

/// Marker trait for the values this crate knows how to write.
///
/// Implemented for `i32`, `i64`, `u32`, `u64`, `f32`, `f64`, `bool`, `char`,
/// `str`, [`Value`] and references to any of them.
///
/// This trait is sealed and cannot be implemented for types outside of this crate.
///
/// [`Value`]: enum.Value.html
pub trait WriteTo: crate::private::Sealed {
    /// Writes `self` at the cursor of `sink` and returns the number of bytes
    /// written. Every byte written is ASCII, except for the contents of
    /// `char`, `str` and object values, which are UTF-8.
    #[doc(hidden)]
    fn write_to<S>(&self, sink: &mut S) -> Result<usize, Error>
    where
        S: ByteSink + ?Sized;
}

impl<T> WriteTo for &T
where
    T: WriteTo + ?Sized,
{
    #[inline]
    fn write_to<S>(&self, sink: &mut S) -> Result<usize, Error>
    where
        S: ByteSink + ?Sized,
    {
        (**self).write_to(sink)
    }
}

impl<T> crate::private::Sealed for &T where T: crate::private::Sealed + ?Sized {}
