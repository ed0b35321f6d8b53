/*!
[![Crates.io](https://img.shields.io/crates/v/num-write.svg)](https://crates.io/crates/num-write)
[![Documentation](https://docs.rs/num-write/badge.svg)](https://docs.rs/num-write/)
![License](https://img.shields.io/crates/l/num-write.svg)

A Rust crate for writing numbers (and the handful of other values a log line
or wire message is made of) as text, straight into a byte sink, without
allocating.

# Output

- Integers: minimal decimal digits, `-` for negatives.
- Floats: always fixed-point, never an exponent suffix, always a decimal
  point with at least one digit on each side (`1.0`, `0.001`, `-0.0`,
  `1e23` as `99999999999999990000000.0`). Every finite value parses back to
  itself. The digits are not always the shortest that would.
- `NaN`, `Infinity`, `-Infinity`, `true`, `false`.

# Picking a sink

Output goes into anything implementing [`ByteSink`]:

- `Vec<u8>` (with the `std` feature), which grows as needed,
- `arrayvec::ArrayVec<u8, CAP>`, which reports a capacity error instead,
- [`Buffer`], a stack buffer that fits the rendering of any single number.

# Examples

```rust
use num_write::{write_value, ByteSink, Buffer, Value};

// Appending to a vector
let mut line = Vec::with_capacity(64);
line.put(b"elapsed=").unwrap();
line.put_value(&0.25f64).unwrap();
line.put(b" retries=").unwrap();
line.put_value(&3i32).unwrap();
assert_eq!(line, b"elapsed=0.25 retries=3");

// Dispatching on a closed set of value kinds
let mut line = Vec::new();
for value in [Value::Str("ok="), Value::Bool(true)].iter() {
    write_value(value, &mut line).unwrap();
}
assert_eq!(line, b"ok=true");

// Formatting one number on the stack
let mut buf = Buffer::new();
assert_eq!(buf.format(&0.3f64).unwrap(), "0.29999999999999998");
assert_eq!(buf.format(&f32::MAX).unwrap(), "340282340000000000000000000000000000000.0");
```

# Scratch space

Converting a float needs an exact big integer of up to 84 limbs. With the
`std` feature each thread reuses one such [`BigScratch`]; without it a fresh
one lives on the stack for each call. [`dtoa::write_f64_with`] and
[`dtoa::write_f32_with`] take an explicit scratch instead.

# Extra features

| Available features | What to put in your `Cargo.toml`                              |
| :----------------- | :------------------------------------------------------------ |
| `no_std`           | `num-write = { version = "0.1", default-features = false }`   |
| `with-serde`       | `num-write = { version = "0.1", features = ["with-serde"] }`  |

[`BigScratch`]: struct.BigScratch.html
[`Buffer`]: struct.Buffer.html
[`ByteSink`]: trait.ByteSink.html
[`dtoa::write_f32_with`]: dtoa/fn.write_f32_with.html
[`dtoa::write_f64_with`]: dtoa/fn.write_f64_with.html
*/

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(
    dead_code,
    deprecated,
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused
)]
#![doc(html_root_url = "https://docs.rs/num-write/0.1.0")]

mod bignum;
mod buffer;
mod constants;
pub mod dtoa;
mod error;
mod error_kind;
mod impls;
pub mod itoa;
mod scratch;
mod sink;
mod tables;
pub mod text;
mod value;
mod write_to;

pub use self::bignum::{BigScratch, LIMBS};
pub use self::buffer::Buffer;
pub use self::error::Error;
pub use self::error_kind::ErrorKind;
pub use self::sink::ByteSink;
pub use self::value::{write_value, Value};
pub use self::write_to::WriteTo;

mod private {
    pub trait Sealed {}
}
