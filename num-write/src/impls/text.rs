use crate::error::Error;
use crate::sink::ByteSink;
use crate::text::{write_bool, write_char, write_str};
use crate::value::{write_value, Value};
use crate::write_to::WriteTo;

impl WriteTo for bool {
    #[doc(hidden)]
    #[inline]
    fn write_to<S>(&self, sink: &mut S) -> Result<usize, Error>
    where
        S: ByteSink + ?Sized,
    {
        write_bool(*self, sink)
    }
}

impl crate::private::Sealed for bool {}

impl WriteTo for char {
    #[doc(hidden)]
    #[inline]
    fn write_to<S>(&self, sink: &mut S) -> Result<usize, Error>
    where
        S: ByteSink + ?Sized,
    {
        write_char(*self, sink)
    }
}

impl crate::private::Sealed for char {}

impl WriteTo for str {
    #[doc(hidden)]
    #[inline]
    fn write_to<S>(&self, sink: &mut S) -> Result<usize, Error>
    where
        S: ByteSink + ?Sized,
    {
        write_str(self, sink)
    }
}

impl crate::private::Sealed for str {}

impl WriteTo for Value<'_> {
    #[doc(hidden)]
    #[inline]
    fn write_to<S>(&self, sink: &mut S) -> Result<usize, Error>
    where
        S: ByteSink + ?Sized,
    {
        write_value(self, sink)
    }
}

impl crate::private::Sealed for Value<'_> {}
