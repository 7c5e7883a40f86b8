// src/benchmark/experiments.rs
//
// The arithmetic bodies of each experiment family, separated from the
// timing harness so they can be tested (and criterion-benched) directly.

use num::{BigInt, One};

/// Sum the integers 1..=iterations into a single accumulator.
pub fn repeated_addition(iterations: u64) -> BigInt {
    let mut n = BigInt::one();
    for i in 1..=iterations {
        n += i;
    }
    n
}

/// Multiply a fixed multiplicand by each of 1..=iterations, resetting the
/// accumulator back to the multiplicand after every step. The reset keeps
/// the operand small, so this measures small-by-small multiplication
/// throughput rather than bit-length growth.
///
/// Returns the accumulator, which equals `multiplicand` after the loop.
pub fn repeated_multiplication(multiplicand: &BigInt, iterations: u64) -> BigInt {
    let mut tmp = multiplicand.clone();
    for i in 1..=iterations {
        tmp *= i;
        tmp = multiplicand.clone();
    }
    tmp
}

/// base^exponent over BigInt.
pub fn power(base: u32, exponent: u32) -> BigInt {
    BigInt::from(base).pow(exponent)
}
