// src/square_root/fixed_point.rs
//
// Arbitrary-precision square roots in fixed-point form over BigInt.
// Precision is an explicit parameter of every call; there is no
// process-wide precision state.

use num::BigInt;

/// Square root of `value` with `precision_bits` fractional bits.
///
/// Returns floor(sqrt(value) * 2^precision_bits), computed as the integer
/// square root of `value << (2 * precision_bits)`. The caller interprets the
/// low `precision_bits` bits of the result as the fractional part.
pub fn sqrt_fixed(value: &BigInt, precision_bits: u64) -> BigInt {
    let shifted: BigInt = value << (2 * precision_bits);
    shifted.sqrt()
}

/// sqrt(2) with `precision_bits` fractional bits.
pub fn sqrt2_fixed(precision_bits: u64) -> BigInt {
    sqrt_fixed(&BigInt::from(2), precision_bits)
}

/// Bits required to represent `digits` significant decimal digits.
pub fn digits_to_bits(digits: u64) -> u64 {
    (digits as f64 * std::f64::consts::LOG2_10).ceil() as u64
}
