mod common;

use std::fmt;

use arrayvec::ArrayVec;
use num_write::{write_value, ByteSink, ErrorKind, Value};

use crate::common::render;

struct Celsius(f64);

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°C", self.0)
    }
}

struct Broken;

impl fmt::Display for Broken {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        Err(fmt::Error)
    }
}

#[test]
fn test_dispatch() {
    let temperature = Celsius(21.5);
    let test_cases: &[(&str, Value<'_>)] = &[
        ("42", Value::Int(42)),
        ("-9223372036854775808", Value::Long(i64::MIN)),
        ("0.30000001", Value::Float(0.3)),
        ("0.29999999999999998", Value::Double(0.3)),
        ("-Infinity", Value::Double(f64::NEG_INFINITY)),
        ("false", Value::Bool(false)),
        ("€", Value::Char('€')),
        ("hello", Value::Str("hello")),
        ("21.5°C", Value::Object(&temperature)),
    ];
    for (expected, input) in test_cases {
        assert_eq!(*expected, render(input));
    }
}

#[test]
fn test_line_through_references() {
    let id = 7u32;
    let mut line = Vec::new();
    let mut total = 0;
    total += line.put_value("id=").unwrap();
    total += line.put_value(&&id).unwrap();
    total += line.put_value(" ratio=").unwrap();
    total += line.put_value(&0.5f32).unwrap();
    assert_eq!(total, line.len());
    assert_eq!(line, b"id=7 ratio=0.5");
}

#[test]
fn test_capacity_error_keeps_cursor() {
    let mut out = ArrayVec::<u8, 8>::new();
    write_value(&Value::Str("abc"), &mut out).unwrap();
    let err = write_value(&Value::Double(0.3), &mut out).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::Capacity { len: 19, cap: 5 });
    assert_eq!(out.position(), 3);
    assert_eq!(&out[..], b"abc");
}

#[test]
fn test_display_error() {
    let mut out = Vec::new();
    let err = write_value(&Value::Object(&Broken), &mut out).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::Display);
    assert_eq!(
        err.to_string(),
        "Display implementation of an object value failed."
    );
}

#[cfg(feature = "with-serde")]
#[test]
fn test_error_serde() {
    use num_write::Error;

    let err = Error::capacity(6, 5);
    let json = serde_json::to_string(&err).unwrap();
    assert_eq!(json, r#"{"kind":{"Capacity":{"len":6,"cap":5}}}"#);
    let back: Error = serde_json::from_str(&json).unwrap();
    assert_eq!(back, err);

    let json = serde_json::to_string(&ErrorKind::Display).unwrap();
    assert_eq!(json, r#""Display""#);
}
