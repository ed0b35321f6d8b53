//! Writers for the non-numeric values.

use core::fmt;

use crate::constants::{FALSE, TRUE};
use crate::error::Error;
use crate::error_kind::ErrorKind;
use crate::sink::ByteSink;

/// Writes `true` or `false`.
#[inline]
pub fn write_bool<S: ByteSink + ?Sized>(value: bool, sink: &mut S) -> Result<usize, Error> {
    sink.put(if value { TRUE } else { FALSE })
}

/// Writes the UTF-8 encoding of `value` (one to four bytes).
#[inline]
pub fn write_char<S: ByteSink + ?Sized>(value: char, sink: &mut S) -> Result<usize, Error> {
    let len = value.len_utf8();
    value.encode_utf8(sink.slot(len)?);
    Ok(len)
}

/// Writes the bytes of `value` unchanged.
#[inline]
pub fn write_str<S: ByteSink + ?Sized>(value: &str, sink: &mut S) -> Result<usize, Error> {
    sink.put(value.as_bytes())
}

/// Writes `value` through its `Display` implementation and returns the number
/// of bytes written.
///
/// Unlike the other writers, this one runs foreign code, which may allocate.
///
/// # Errors
///
/// Returns the sink's error if it runs out of room, or an error of kind
/// [`ErrorKind::Display`] if the `Display` implementation itself fails. Bytes
/// written before the failure stay in the sink.
///
/// [`ErrorKind::Display`]: ../enum.ErrorKind.html#variant.Display
pub fn write_display<S, T>(value: &T, sink: &mut S) -> Result<usize, Error>
where
    S: ByteSink + ?Sized,
    T: fmt::Display + ?Sized,
{
    let mut adapter = Adapter {
        sink,
        written: 0,
        error: None,
    };
    match fmt::write(&mut adapter, format_args!("{}", value)) {
        Ok(()) => Ok(adapter.written),
        Err(fmt::Error) => Err(adapter.error.unwrap_or_else(|| ErrorKind::Display.into())),
    }
}

struct Adapter<'a, S: ?Sized> {
    sink: &'a mut S,
    written: usize,
    error: Option<Error>,
}

impl<S> fmt::Write for Adapter<'_, S>
where
    S: ByteSink + ?Sized,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        match self.sink.put(s.as_bytes()) {
            Ok(n) => {
                self.written += n;
                Ok(())
            }
            Err(e) => {
                self.error = Some(e);
                Err(fmt::Error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use arrayvec::ArrayVec;

    struct Failing;

    impl fmt::Display for Failing {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("partial")?;
            Err(fmt::Error)
        }
    }

    struct Point(i32, i32);

    impl fmt::Display for Point {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "({}, {})", self.0, self.1)
        }
    }

    #[test]
    fn test_bool_and_char() {
        let mut out = ArrayVec::<u8, 32>::new();
        assert_eq!(write_bool(true, &mut out).unwrap(), 4);
        assert_eq!(write_bool(false, &mut out).unwrap(), 5);
        assert_eq!(write_char('x', &mut out).unwrap(), 1);
        assert_eq!(write_char('é', &mut out).unwrap(), 2);
        assert_eq!(write_char('𠜱', &mut out).unwrap(), 4);
        assert_eq!(core::str::from_utf8(&out).unwrap(), "truefalsexé𠜱");
    }

    #[test]
    fn test_display() {
        let mut out = ArrayVec::<u8, 32>::new();
        assert_eq!(write_display(&Point(3, -4), &mut out).unwrap(), 7);
        assert_eq!(&out[..], b"(3, -4)");
    }

    #[test]
    fn test_display_failure() {
        let mut out = ArrayVec::<u8, 32>::new();
        let err = write_display(&Failing, &mut out).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::Display);
        assert_eq!(&out[..], b"partial");
    }

    #[test]
    fn test_display_capacity() {
        let mut out = ArrayVec::<u8, 4>::new();
        let err = write_display(&Point(10, 20), &mut out).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::Capacity { len: 2, cap: 1 });
        assert_eq!(&out[..], b"(10");
    }
}
