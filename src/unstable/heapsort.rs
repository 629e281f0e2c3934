//! This module contains a plain binary heapsort.

use std::cmp::Ordering;

use crate::{working_copy, Direction, OrderingPolicy, SortError};

sort_impl!("heapsort_unstable");

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
    heapsort(&mut work, &mut is_less);

    Ok(work)
}

/// Sorts `v` using heapsort, which guarantees *O*(*n* \* log(*n*)) worst-case.
///
/// Under a descending policy `is_less` is reversed, so the same code builds a min-heap.
pub fn heapsort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // Build the heap in linear time.
    for i in (0..len / 2).rev() {
        sift_down(v, i, is_less);
    }

    // Pop maximal elements from the heap.
    for i in (1..len).rev() {
        v.swap(0, i);
        sift_down(&mut v[..i], 0, is_less);
    }
}

// This binary heap respects the invariant `parent >= child`.
fn sift_down<T, F>(v: &mut [T], mut node: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    loop {
        let left = 2 * node + 1;
        let right = left + 1;
        let mut extreme = node;

        if left < len && is_less(&v[extreme], &v[left]) {
            extreme = left;
        }

        // Compared against the winner so far, on ties the left child stays.
        if right < len && is_less(&v[extreme], &v[right]) {
            extreme = right;
        }

        // Stop if the invariant holds at `node`.
        if extreme == node {
            break;
        }

        v.swap(node, extreme);
        node = extreme;
    }
}
