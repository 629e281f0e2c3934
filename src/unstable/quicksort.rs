//! Quicksort with Lomuto partitioning around the last element.
//!
//! The pivot is always the last element. Already sorted and reverse sorted input produce maximally
//! imbalanced partitions and `len * (len - 1) / 2` comparisons.

use std::cmp::Ordering;
use std::ops::Range;

use log::trace;

use crate::{working_copy, Direction, OrderingPolicy, SortError};

sort_impl!("quicksort_unstable");

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
    quicksort(&mut work, &mut is_less);

    Ok(work)
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

/// Sorts `v` in place.
///
/// Pending ranges live on an explicit stack instead of the call stack. The left range is always
/// popped first, so comparisons and swaps happen in the same order as with the two recursive
/// calls `quicksort(low..pivot)` then `quicksort(pivot + 1..high)`.
pub fn quicksort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut stack: Vec<Range<usize>> = vec![0..v.len()];
    let mut max_depth = stack.len();

    while let Some(range) = stack.pop() {
        if range.len() < 2 {
            continue;
        }

        let start = range.start;
        let pivot_pos = start + lomuto_partition(&mut v[range.clone()], is_less);

        // Pushed in reverse, left goes first. Ranges of 0 or 1 elements are already sorted.
        for side in [(pivot_pos + 1)..range.end, start..pivot_pos] {
            if side.len() >= 2 {
                stack.push(side);
            }
        }
        max_depth = max_depth.max(stack.len());
    }

    trace!("quicksort of {} elements, max pending ranges {max_depth}", v.len());
}

/// Partitions `v` around its last element and returns the final position of that element.
///
/// Everything not greater than the pivot ends up left of it, ties included.
fn lomuto_partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let (v_without_pivot, pivot) = v.split_at_mut(len - 1);
    let pivot = &pivot[0];

    let mut l = 0;
    for r in 0..v_without_pivot.len() {
        // x <= pivot, expressed with the strict is_less.
        if !is_less(pivot, &v_without_pivot[r]) {
            v_without_pivot.swap(l, r);
            l += 1;
        }
    }

    // Place the pivot between the two partitions.
    v.swap(l, len - 1);

    l
}
