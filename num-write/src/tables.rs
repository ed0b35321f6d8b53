// This file is generated by num-write-dev. Do not edit.

/// `5^0` through `5^13`, the largest power of five that fits in a `u32`.
pub(crate) const POW5: [u32; 14] = [
    1, 5, 25, 125, 625, 3125, 15625, 78125, 390625, 1953125, 9765625, 48828125, 244140625,
    1220703125,
];

/// Largest exponent tabulated in `POW5`.
pub(crate) const MAX_POW5: u32 = 13;

/// Rounding margin for the last extracted decimal digit, by bucket of the
/// fractional part of `(e - 1) / log2(10)`.
///
/// Bucket `i` covers `[i/256, (i+1)/256)`. Entry `i` is `floor(10^(k/256)) - 1`
/// with `k = clamp(i - 1, 0, 255)`, a lower bound for `floor(10^frac) - 1` that
/// still holds when the bucket index is one too high.
pub(crate) const ROUNDING_MARGIN: [u8; 258] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2,
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3,
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
    4, 4, 4, 4, 4, 4, 4, 4, 4, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 6, 6, 6, 6, 6, 6,
    6, 6, 6, 6, 6, 6, 6, 6, 6, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8,
    8, 8,
];

/// ASCII tens digit of `0..=99`.
pub(crate) const DIGIT_TENS: [u8; 100] = [
    b'0', b'0', b'0', b'0', b'0', b'0', b'0', b'0', b'0', b'0', b'1', b'1', b'1', b'1', b'1', b'1',
    b'1', b'1', b'1', b'1', b'2', b'2', b'2', b'2', b'2', b'2', b'2', b'2', b'2', b'2', b'3', b'3',
    b'3', b'3', b'3', b'3', b'3', b'3', b'3', b'3', b'4', b'4', b'4', b'4', b'4', b'4', b'4', b'4',
    b'4', b'4', b'5', b'5', b'5', b'5', b'5', b'5', b'5', b'5', b'5', b'5', b'6', b'6', b'6', b'6',
    b'6', b'6', b'6', b'6', b'6', b'6', b'7', b'7', b'7', b'7', b'7', b'7', b'7', b'7', b'7', b'7',
    b'8', b'8', b'8', b'8', b'8', b'8', b'8', b'8', b'8', b'8', b'9', b'9', b'9', b'9', b'9', b'9',
    b'9', b'9', b'9', b'9',
];

/// ASCII ones digit of `0..=99`.
pub(crate) const DIGIT_ONES: [u8; 100] = [
    b'0', b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9', b'0', b'1', b'2', b'3', b'4', b'5',
    b'6', b'7', b'8', b'9', b'0', b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9', b'0', b'1',
    b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9', b'0', b'1', b'2', b'3', b'4', b'5', b'6', b'7',
    b'8', b'9', b'0', b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9', b'0', b'1', b'2', b'3',
    b'4', b'5', b'6', b'7', b'8', b'9', b'0', b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9',
    b'0', b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9', b'0', b'1', b'2', b'3', b'4', b'5',
    b'6', b'7', b'8', b'9',
];
