//! Top-down merge sort that builds new buffers for every merge.

use std::cmp::Ordering;
use std::collections::TryReserveError;

use crate::{Direction, OrderingPolicy, SortError};

sort_impl!("merge_stable");

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

    let mut is_less = |a: &T, b: &T| policy.is_less(a, b);

    Ok(merge_sort(v, &mut is_less)?)
}

/// Returns a sorted copy of `v`.
///
/// Recursion depth is `log2(len)`, each level allocates `len` elements worth of buffers.
pub fn merge_sort<T, F>(v: &[T], is_less: &mut F) -> Result<Vec<T>, TryReserveError>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len <= 1 {
        let mut copy = Vec::new();
        copy.try_reserve_exact(len)?;
        copy.extend_from_slice(v);
        return Ok(copy);
    }

    let mid = len / 2;
    let left = merge_sort(&v[..mid], is_less)?;
    let right = merge_sort(&v[mid..], is_less)?;

    merge(left, right, is_less)
}

/// Merges two sorted runs. On ties the element from `left` is emitted first.
fn merge<T, F>(left: Vec<T>, right: Vec<T>, is_less: &mut F) -> Result<Vec<T>, TryReserveError>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut out = Vec::new();
    out.try_reserve_exact(left.len() + right.len())?;

    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        // left <= right, expressed with the strict is_less.
        let next = if is_less(r, l) {
            right.next()
        } else {
            left.next()
        };
        out.extend(next);
    }

    // At most one of them still has elements.
    out.extend(left);
    out.extend(right);

    Ok(out)
}
