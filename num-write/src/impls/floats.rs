use crate::dtoa::write_float;
use crate::error::Error;
use crate::sink::ByteSink;
use crate::write_to::WriteTo;

// float 32bit

impl WriteTo for f32 {
    #[doc(hidden)]
    #[inline(never)]
    fn write_to<S>(&self, sink: &mut S) -> Result<usize, Error>
    where
        S: ByteSink + ?Sized,
    {
        write_float(*self, sink)
    }
}

// float 64bit

impl WriteTo for f64 {
    #[doc(hidden)]
    #[inline(never)]
    fn write_to<S>(&self, sink: &mut S) -> Result<usize, Error>
    where
        S: ByteSink + ?Sized,
    {
        write_float(*self, sink)
    }
}
