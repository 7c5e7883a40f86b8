// src/integer_math/factorial.rs

use num::{BigInt, One};

pub struct Factorial;

impl Factorial {
    /// Compute n! by sequential multiplication from 1 to n.
    ///
    /// The running product accumulates the full bit-length of the result on
    /// every step, so each multiplication pairs a huge operand with a tiny
    /// one. Kept as the baseline for timing comparisons.
    pub fn naive(n: u64) -> BigInt {
        let mut result = BigInt::one();
        for i in 1..=n {
            result *= i;
        }
        result
    }

    /// Compute n! by binary splitting.
    ///
    /// Recursively halves the index range so that each multiplication pairs
    /// operands of comparable bit-length, which is cheaper overall than the
    /// naive accumulator once n is large.
    pub fn binary_split(n: u64) -> BigInt {
        if n <= 1 {
            return BigInt::one();
        }
        Self::range_product(0, n)
    }

    // Product of the integers in (a, b]. The base case returns the right
    // endpoint, so the left endpoint's own factor is excluded; the top-level
    // call starts the range at 0, where the excluded factor would be 0.
    // Recursion depth is O(log n).
    fn range_product(a: u64, b: u64) -> BigInt {
        if b == a + 1 {
            BigInt::from(b)
        } else {
            let m = (a + b) / 2;
            Self::range_product(a, m) * Self::range_product(m, b)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::BigInt;

    #[test]
    fn small_factorials_by_loop() {
        assert_eq!(Factorial::naive(0), BigInt::from(1));
        assert_eq!(Factorial::naive(1), BigInt::from(1));
        assert_eq!(Factorial::naive(5), BigInt::from(120));
        assert_eq!(Factorial::naive(10), BigInt::from(3628800));
    }

    #[test]
    fn small_factorials_by_binary_splitting() {
        assert_eq!(Factorial::binary_split(0), BigInt::from(1));
        assert_eq!(Factorial::binary_split(1), BigInt::from(1));
        assert_eq!(Factorial::binary_split(5), BigInt::from(120));
        assert_eq!(Factorial::binary_split(10), BigInt::from(3628800));
    }

    #[test]
    fn algorithms_agree_up_to_200() {
        for n in 0..=200 {
            assert_eq!(
                Factorial::naive(n),
                Factorial::binary_split(n),
                "mismatch at n = {}",
                n
            );
        }
    }
}
