use std::cmp::Ordering;

use crate::{working_copy, Direction, OrderingPolicy, SortError};

sort_impl!("insertion_stable");

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
    insertion_sort(&mut work, &mut is_less);

    Ok(work)
}

/// Grows a sorted prefix one element at a time.
///
/// `v[i]` is shifted left past every prefix element it is less than, stopping at the first one
/// it is not less than. That keeps equal elements in order and needs no shifting at all for
/// sorted input.
pub fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        insert_tail(&mut v[..=i], is_less);
    }
}

// Inserts the last element of `v` into the sorted `v[..len - 1]`.
fn insert_tail<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut hole = v.len() - 1;

    while hole > 0 && is_less(&v[hole], &v[hole - 1]) {
        v.swap(hole, hole - 1);
        hole -= 1;
    }
}
