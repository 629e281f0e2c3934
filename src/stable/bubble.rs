//! Bubble sort with early exit.

use std::cmp::Ordering;

use crate::{working_copy, Direction, OrderingPolicy, SortError};

sort_impl!("bubble_stable");

#[inline]
pub fn sort<T>(v: &[T], direction: Direction) -> Result<Vec<T>, SortError>
where
    T: Ord + Clone,
{
    sort_by(v, direction, T::cmp)
}

#[inline]
pub fn sort_by<T, F>(v: &[T], direction: Direction, compare: F) -> Result<Vec<T>, SortError>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut policy = OrderingPolicy::new(compare, direction);
    let mut work = working_copy(v)?;

    let mut is_less = |a: &T, b: &T| policy.is_less(a, b);
    bubble_sort(&mut work, &mut is_less);

    Ok(work)
}

/// Sorts `v` in place by swapping adjacent out of order pairs.
///
/// Each pass carries the element that sorts last to the end of the unsorted range, so the
/// scanned range shrinks by one per pass. A pass without swaps ends the sort, which makes sorted
/// input cost `len - 1` comparisons.
pub fn bubble_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    for pass in 0..(len - 1) {
        let mut swapped = false;

        for j in 0..(len - 1 - pass) {
            // Strictly less, equal neighbours stay put.
            if is_less(&v[j + 1], &v[j]) {
                v.swap(j, j + 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }
}
