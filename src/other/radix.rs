//! Least significant digit radix sort over non-negative integers, base 10.

use std::collections::TryReserveError;

use log::trace;

use crate::{working_copy, Algorithm, Direction, SortError, SortKey};

const RADIX: usize = 10;

/// Sorts a copy of `v` digit by digit.
///
/// Fails before doing any work if `T` has no digits or if any element is negative.
pub fn sort<T>(v: &[T], direction: Direction) -> Result<Vec<T>, SortError>
where
    T: SortKey,
{
    if !T::HAS_DIGITS {
        return Err(SortError::UnsupportedKey {
            algorithm: Algorithm::Radix,
        });
    }

    let keys = digit_keys(v)?;

    if v.len() < 2 {
        return working_copy(v);
    }

    let order = radix_order(&keys, direction)?;

    let mut sorted = Vec::new();
    sorted.try_reserve_exact(v.len())?;
    sorted.extend(order.iter().map(|&i| v[i].clone()));

    Ok(sorted)
}

fn digit_keys<T: SortKey>(v: &[T]) -> Result<Vec<u128>, SortError> {
    let mut keys = Vec::new();
    keys.try_reserve_exact(v.len())?;

    for (index, elem) in v.iter().enumerate() {
        match elem.digits() {
            Some(key) => keys.push(key),
            None => return Err(SortError::NegativeKey { index }),
        }
    }

    Ok(keys)
}

/// Returns the permutation that sorts `keys`, as indices into `keys`.
///
/// Runs one counting pass per decimal digit of the largest key, at least one. Because every pass
/// is stable, the order established by the lower digits survives the higher ones.
pub fn radix_order(keys: &[u128], direction: Direction) -> Result<Vec<usize>, TryReserveError> {
    let len = keys.len();
    let max = keys.iter().copied().max().unwrap_or(0);

    let mut order = Vec::new();
    order.try_reserve_exact(len)?;
    order.extend(0..len);

    let mut scratch = Vec::new();
    scratch.try_reserve_exact(len)?;
    scratch.resize(len, 0);

    let mut exp: u128 = 1;
    let mut passes = 0;
    loop {
        counting_pass(keys, &order, &mut scratch, exp, direction);
        std::mem::swap(&mut order, &mut scratch);
        passes += 1;

        // No more digits once exp exceeds max, or once it would overflow.
        match exp.checked_mul(RADIX as u128) {
            Some(next) if max / next > 0 => exp = next,
            _ => break,
        }
    }

    trace!("radix sort of {len} elements, max key {max}, {passes} digit passes");

    Ok(order)
}

// Stable counting sort of `input` by the digit at `exp`, written to `output`.
fn counting_pass(
    keys: &[u128],
    input: &[usize],
    output: &mut [usize],
    exp: u128,
    direction: Direction,
) {
    let digit = |i: usize| ((keys[i] / exp) % RADIX as u128) as usize;

    let mut count = [0usize; RADIX];
    for &i in input {
        count[digit(i)] += 1;
    }

    // Turn counts into the end position of each digit's bucket.
    match direction {
        Direction::Ascending => {
            for d in 1..RADIX {
                count[d] += count[d - 1];
            }
        }
        Direction::Descending => {
            for d in (0..RADIX - 1).rev() {
                count[d] += count[d + 1];
            }
        }
    }

    // Filling buckets back to front while walking the input back to front keeps equal digits in
    // input order.
    for &i in input.iter().rev() {
        let d = digit(i);
        count[d] -= 1;
        output[count[d]] = i;
    }
}
