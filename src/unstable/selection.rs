use std::cmp::Ordering;

use crate::{working_copy, Direction, OrderingPolicy, SortError};

sort_impl!("selection_unstable");

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
    selection_sort(&mut work, &mut is_less);

    Ok(work)
}

/// Swaps the least element of `v[i..]` into `i`, for every `i`.
///
/// There is no early exit, this always does `len * (len - 1) / 2` comparisons. The long distance
/// swap can move an element past others that compare equal to it, so this is not stable.
pub fn selection_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for i in 0..len {
        let mut extreme = i;
        for j in (i + 1)..len {
            // Strict, the first of several equal candidates wins.
            if is_less(&v[j], &v[extreme]) {
                extreme = j;
            }
        }

        if extreme != i {
            v.swap(i, extreme);
        }
    }
}
