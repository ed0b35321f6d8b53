#![allow(dead_code)]

use num_write::{Buffer, ByteSink, WriteTo};

/// Renders `value` through every sink kind and checks that they agree.
pub fn render<N>(value: &N) -> String
where
    N: WriteTo + ?Sized,
{
    let mut vec = Vec::new();
    let written = vec.put_value(value).unwrap();
    assert_eq!(written, vec.len());

    let mut buf = Buffer::new();
    if written <= 328 {
        assert_eq!(buf.format(value).unwrap().as_bytes(), &vec[..]);
    }

    String::from_utf8(vec).unwrap()
}

/// Checks the shape every finite float rendering has: an optional minus sign,
/// digits, a point, digits, and nothing else.
pub fn assert_fixed_point(s: &str) {
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    let (integer, fraction) = match unsigned.split_once('.') {
        Some(parts) => parts,
        None => panic!("no decimal point in {:?}", s),
    };
    assert!(!integer.is_empty(), "{:?}", s);
    assert!(!fraction.is_empty(), "{:?}", s);
    assert!(integer.bytes().all(|b| b.is_ascii_digit()), "{:?}", s);
    assert!(fraction.bytes().all(|b| b.is_ascii_digit()), "{:?}", s);
    assert!(integer == "0" || !integer.starts_with('0'), "{:?}", s);
    assert!(fraction == "0" || !fraction.ends_with('0'), "{:?}", s);
}
