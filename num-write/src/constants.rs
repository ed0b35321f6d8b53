// Want this to be as large as the longest possible rendering of any numeric type
// that implements WriteTo, which is an f64 just above the smallest normal:
// minus sign + "0." + 325 fractional digits (the power-of-two guard digit adds one).
pub(crate) const MAX_BUF_LEN: usize = 1 + 2 + 325;

pub(crate) const U32_MAX_LEN: usize = 10;
pub(crate) const U64_MAX_LEN: usize = 20;

pub(crate) const I32_MIN_LITERAL: &[u8] = b"-2147483648";
pub(crate) const I64_MIN_LITERAL: &[u8] = b"-9223372036854775808";

pub(crate) const NAN: &[u8] = b"NaN";
pub(crate) const INFINITY: &[u8] = b"Infinity";
pub(crate) const NEG_INFINITY: &[u8] = b"-Infinity";
pub(crate) const ZERO: &[u8] = b"0.0";

pub(crate) const TRUE: &[u8] = b"true";
pub(crate) const FALSE: &[u8] = b"false";

// Thresholds for the printed width of an unsigned magnitude: the width of `n`
// is one plus the index of the first entry that is >= n.
pub(crate) const U32_SIZE_TABLE: [u32; U32_MAX_LEN] = [
    9,
    99,
    999,
    9_999,
    99_999,
    999_999,
    9_999_999,
    99_999_999,
    999_999_999,
    u32::MAX,
];

pub(crate) const U64_SIZE_TABLE: [u64; U64_MAX_LEN] = [
    9,
    99,
    999,
    9_999,
    99_999,
    999_999,
    9_999_999,
    99_999_999,
    999_999_999,
    9_999_999_999,
    99_999_999_999,
    999_999_999_999,
    9_999_999_999_999,
    99_999_999_999_999,
    999_999_999_999_999,
    9_999_999_999_999_999,
    99_999_999_999_999_999,
    999_999_999_999_999_999,
    9_999_999_999_999_999_999,
    u64::MAX,
];
