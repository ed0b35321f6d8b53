use core::fmt;

use crate::dtoa::{write_f32, write_f64};
use crate::error::Error;
use crate::itoa::{write_i32, write_i64};
use crate::sink::ByteSink;
use crate::text::{write_bool, write_char, write_display, write_str};

/// A value of one of the kinds a log or wire layer hands over for rendering.
///
/// # Example
///
/// ```
/// use num_write::{write_value, Value};
///
/// let mut out = Vec::new();
/// for value in [Value::from("x="), Value::from(-7i32), Value::from(' '), Value::from(0.5)].iter() {
///     write_value(value, &mut out).unwrap();
/// }
/// assert_eq!(out, b"x=-7 0.5");
/// ```
#[derive(Copy, Clone)]
pub enum Value<'a> {
    /// A 32-bit signed integer.
    Int(i32),
    /// A 64-bit signed integer.
    Long(i64),
    /// A single-precision float.
    Float(f32),
    /// A double-precision float.
    Double(f64),
    /// A boolean, written as `true` or `false`.
    Bool(bool),
    /// A character, written as UTF-8.
    Char(char),
    /// A string, copied as is.
    Str(&'a str),
    /// Anything else, written through its `Display` implementation.
    Object(&'a dyn fmt::Display),
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use self::Value::*;
        match self {
            Int(n) => f.debug_tuple("Int").field(n).finish(),
            Long(n) => f.debug_tuple("Long").field(n).finish(),
            Float(n) => f.debug_tuple("Float").field(n).finish(),
            Double(n) => f.debug_tuple("Double").field(n).finish(),
            Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Char(c) => f.debug_tuple("Char").field(c).finish(),
            Str(s) => f.debug_tuple("Str").field(s).finish(),
            Object(o) => f
                .debug_tuple("Object")
                .field(&format_args!("{}", o))
                .finish(),
        }
    }
}

/// Writes `value` at the cursor of `sink` and returns the number of bytes
/// written.
///
/// Numbers, booleans and literals never allocate. [`Value::Object`] runs the
/// object's `Display` implementation, which might.
///
/// # Errors
///
/// Returns an error of kind [`ErrorKind::Capacity`] if the sink runs out of
/// room, or of kind [`ErrorKind::Display`] if an object's `Display`
/// implementation fails.
///
/// [`Value::Object`]: enum.Value.html#variant.Object
/// [`ErrorKind::Capacity`]: enum.ErrorKind.html#variant.Capacity
/// [`ErrorKind::Display`]: enum.ErrorKind.html#variant.Display
pub fn write_value<S>(value: &Value<'_>, sink: &mut S) -> Result<usize, Error>
where
    S: ByteSink + ?Sized,
{
    match *value {
        Value::Int(n) => write_i32(n, sink),
        Value::Long(n) => write_i64(n, sink),
        Value::Float(f) => write_f32(f, sink),
        Value::Double(f) => write_f64(f, sink),
        Value::Bool(b) => write_bool(b, sink),
        Value::Char(c) => write_char(c, sink),
        Value::Str(s) => write_str(s, sink),
        Value::Object(o) => write_display(o, sink),
    }
}

macro_rules! impl_from {
    ($type:ty, $variant:ident) => {
        impl From<$type> for Value<'_> {
            #[inline]
            fn from(value: $type) -> Self {
                Value::$variant(value)
            }
        }
    };
}

impl_from!(i32, Int);
impl_from!(i64, Long);
impl_from!(f32, Float);
impl_from!(f64, Double);
impl_from!(bool, Bool);
impl_from!(char, Char);

impl<'a> From<&'a str> for Value<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        Value::Str(value)
    }
}

impl<'a> From<&'a dyn fmt::Display> for Value<'a> {
    #[inline]
    fn from(value: &'a dyn fmt::Display) -> Self {
        Value::Object(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use arrayvec::ArrayVec;

    fn render(value: Value<'_>) -> ArrayVec<u8, 64> {
        let mut out = ArrayVec::new();
        let len = write_value(&value, &mut out).unwrap();
        assert_eq!(len, out.len());
        out
    }

    struct Version(u32, u32);

    impl fmt::Display for Version {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "v{}.{}", self.0, self.1)
        }
    }

    #[test]
    fn test_every_kind() {
        let version = Version(1, 12);
        assert_eq!(&render(Value::Int(i32::MIN))[..], b"-2147483648");
        assert_eq!(&render(Value::Long(1 << 40))[..], b"1099511627776");
        assert_eq!(&render(Value::Float(0.3))[..], b"0.30000001");
        assert_eq!(&render(Value::Double(-0.0))[..], b"-0.0");
        assert_eq!(&render(Value::Double(f64::NAN))[..], b"NaN");
        assert_eq!(&render(Value::Bool(false))[..], b"false");
        assert_eq!(&render(Value::Char('ß'))[..], "ß".as_bytes());
        assert_eq!(&render(Value::Str("abc"))[..], b"abc");
        assert_eq!(&render(Value::Object(&version))[..], b"v1.12");
    }

    #[test]
    fn test_from() {
        assert!(matches!(Value::from(1i32), Value::Int(1)));
        assert!(matches!(Value::from(1i64), Value::Long(1)));
        assert!(matches!(Value::from(1.0f32), Value::Float(_)));
        assert!(matches!(Value::from(1.0f64), Value::Double(_)));
        assert!(matches!(Value::from("s"), Value::Str("s")));
    }
}
