//! Classic sorting algorithms behind one contract.
//!
//! Every algorithm takes a borrowed sequence plus a [`Direction`] and returns a freshly allocated
//! sorted copy. The caller's data is never touched.
//!
//! ```ignore
//! use classic_sort::{Algorithm, Direction};
//!
//! let sorted = classic_sort::sort(&[64, 34, 25], Algorithm::Heap, Direction::Descending)?;
//! assert_eq!(sorted, [64, 34, 25]);
//! ```

use std::cmp::Ordering;

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl $crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(v: &[T], direction: $crate::Direction) -> Result<Vec<T>, $crate::SortError>
            where
                T: Ord + Clone,
            {
                sort(v, direction)
            }

            #[inline]
            fn sort_by<T, F>(
                v: &[T],
                direction: $crate::Direction,
                compare: F,
            ) -> Result<Vec<T>, $crate::SortError>
            where
                T: Clone,
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(v, direction, compare)
            }
        }
    };
}

pub mod adapter;
pub mod error;
pub mod order;

pub mod other;
pub mod stable;
pub mod unstable;

pub use adapter::{sort, sort_by, working_copy, Algorithm, SortKey};
pub use error::SortError;
pub use order::{Direction, OrderingPolicy};

/// Uniform interface over the comparison sorts, so tests and benchmarks can be written once.
///
/// Implementations whose name contains `unstable` make no promise about the relative order of
/// equal elements.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(v: &[T], direction: Direction) -> Result<Vec<T>, SortError>
    where
        T: Ord + Clone;

    fn sort_by<T, F>(v: &[T], direction: Direction, compare: F) -> Result<Vec<T>, SortError>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering;
}
