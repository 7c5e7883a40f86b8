// Cross-checks between the two factorial algorithms
use bigbench::integer_math::Factorial;
use num::BigInt;
use std::str::FromStr;

#[test]
fn both_algorithms_match_known_values() {
    let cases: [(u64, u64); 4] = [(0, 1), (1, 1), (5, 120), (10, 3_628_800)];
    for (n, expected) in cases {
        assert_eq!(Factorial::naive(n), BigInt::from(expected), "naive({})", n);
        assert_eq!(
            Factorial::binary_split(n),
            BigInt::from(expected),
            "binary_split({})",
            n
        );
    }
}

#[test]
fn twenty_factorial() {
    let expected = BigInt::from(2_432_902_008_176_640_000u64);
    assert_eq!(Factorial::naive(20), expected);
    assert_eq!(Factorial::binary_split(20), expected);
}

#[test]
fn algorithms_agree_at_non_power_of_two_sizes() {
    // Odd and prime sizes exercise uneven range splits
    for n in [3, 7, 13, 31, 97, 101, 255, 257, 1000] {
        assert_eq!(
            Factorial::naive(n),
            Factorial::binary_split(n),
            "mismatch at n = {}",
            n
        );
    }
}

#[test]
fn hundred_factorial_matches_reference() {
    // 100! from a published table
    let expected = BigInt::from_str(
        "93326215443944152681699238856266700490715968264381621468592963895217\
         59999322991560894146397615651828625369792082722375825118521091686400\
         0000000000000000000000",
    )
    .unwrap();
    assert_eq!(Factorial::binary_split(100), expected);
    assert_eq!(Factorial::naive(100), expected);
}
