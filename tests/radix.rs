use classic_sort::other::radix::{self, radix_order};
use classic_sort::{Direction, SortError};

use sort_test_tools::patterns;

#[test]
fn textbook_input() {
    let input = [170, 45, 75, 90, 802, 24, 2, 66];

    assert_eq!(
        radix::sort(&input, Direction::Ascending).unwrap(),
        [2, 24, 45, 66, 75, 90, 170, 802]
    );
    assert_eq!(
        radix::sort(&input, Direction::Descending).unwrap(),
        [802, 170, 90, 75, 66, 45, 24, 2]
    );
    assert_eq!(input, [170, 45, 75, 90, 802, 24, 2, 66]);
}

#[test]
fn all_zeros() {
    for direction in [Direction::Ascending, Direction::Descending] {
        assert_eq!(radix::sort(&[0u8; 5], direction).unwrap(), [0u8; 5]);
    }
}

#[test]
fn single_and_empty() {
    assert_eq!(radix::sort(&[7u16], Direction::Descending).unwrap(), [7]);
    assert_eq!(
        radix::sort::<u16>(&[], Direction::Ascending).unwrap(),
        Vec::<u16>::new()
    );
}

#[test]
fn negative_rejected() {
    assert_eq!(
        radix::sort(&[1i8, 2, -3], Direction::Ascending).unwrap_err(),
        SortError::NegativeKey { index: 2 }
    );
    assert_eq!(
        radix::sort(&[i128::MIN], Direction::Ascending).unwrap_err(),
        SortError::NegativeKey { index: 0 }
    );
}

#[test]
fn random_against_std() {
    for len in [2, 10, 33, 100, 1_000, 2_048] {
        let input = patterns::random_non_negative(len);

        let mut expected = input.clone();
        expected.sort();
        assert_eq!(radix::sort(&input, Direction::Ascending).unwrap(), expected);

        expected.reverse();
        assert_eq!(radix::sort(&input, Direction::Descending).unwrap(), expected);
    }
}

#[test]
fn wide_keys() {
    let input = [u64::MAX, 0, u64::MAX - 1, 10_000_000_000_000_000_000, 1];
    assert_eq!(
        radix::sort(&input, Direction::Ascending).unwrap(),
        [0, 1, 10_000_000_000_000_000_000, u64::MAX - 1, u64::MAX]
    );

    // 39 decimal digits, the digit loop must stop before exp overflows.
    let input = [u128::MAX, 5, u128::MAX / 3, 0, u128::MAX - 9];
    assert_eq!(
        radix::sort(&input, Direction::Ascending).unwrap(),
        [0, 5, u128::MAX / 3, u128::MAX - 9, u128::MAX]
    );
    assert_eq!(
        radix::sort(&input, Direction::Descending).unwrap(),
        [u128::MAX, u128::MAX - 9, u128::MAX / 3, 5, 0]
    );
}

#[test]
fn order_is_stable() {
    // Positions 0, 3 and 5 share the key 21, 1 and 4 share 7.
    let keys: [u128; 6] = [21, 7, 300, 21, 7, 21];

    assert_eq!(
        radix_order(&keys, Direction::Ascending).unwrap(),
        [1, 4, 0, 3, 5, 2]
    );
    assert_eq!(
        radix_order(&keys, Direction::Descending).unwrap(),
        [2, 0, 3, 5, 1, 4]
    );
}

#[test]
fn order_stable_random() {
    let keys: Vec<u128> = patterns::random_uniform(2_000, 0..=999)
        .into_iter()
        .map(|k| k as u128)
        .collect();

    let mut expected: Vec<usize> = (0..keys.len()).collect();
    expected.sort_by_key(|&i| keys[i]);
    assert_eq!(radix_order(&keys, Direction::Ascending).unwrap(), expected);

    let mut expected: Vec<usize> = (0..keys.len()).collect();
    expected.sort_by_key(|&i| std::cmp::Reverse(keys[i]));
    assert_eq!(radix_order(&keys, Direction::Descending).unwrap(), expected);
}
