use crate::error::Error;
use crate::itoa::{write_i32, write_i64, write_u32, write_u64, Integer};
use crate::sink::ByteSink;
use crate::write_to::WriteTo;

macro_rules! impl_integer {
    ($type:ty, $writer:ident) => {
        impl Integer for $type {
            #[inline]
            fn write<S: ByteSink + ?Sized>(self, sink: &mut S) -> Result<usize, Error> {
                $writer(self, sink)
            }
        }

        impl WriteTo for $type {
            #[doc(hidden)]
            #[inline]
            fn write_to<S>(&self, sink: &mut S) -> Result<usize, Error>
            where
                S: ByteSink + ?Sized,
            {
                $writer(*self, sink)
            }
        }

        impl crate::private::Sealed for $type {}
    };
}

impl_integer!(i32, write_i32);
impl_integer!(i64, write_i64);
impl_integer!(u32, write_u32);
impl_integer!(u64, write_u64);
