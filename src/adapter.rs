//! Uniform entry point: copy the input, pick the algorithm, return the sorted copy.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::other::radix;
use crate::stable::{bubble, insertion, merge};
use crate::unstable::{heapsort, quicksort, selection};
use crate::{Direction, SortError};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Insertion,
    Selection,
    Merge,
    Quicksort,
    Heap,
    Radix,
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Merge,
        Algorithm::Quicksort,
        Algorithm::Heap,
        Algorithm::Radix,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Selection => "selection",
            Algorithm::Merge => "merge",
            Algorithm::Quicksort => "quicksort",
            Algorithm::Heap => "heap",
            Algorithm::Radix => "radix",
        }
    }

    /// Stable algorithms keep equal elements in input order.
    pub fn is_stable(self) -> bool {
        matches!(
            self,
            Algorithm::Bubble | Algorithm::Insertion | Algorithm::Merge | Algorithm::Radix
        )
    }

    /// Radix sort buckets on digits and can't use a comparator, everything else can.
    pub fn is_comparison(self) -> bool {
        self != Algorithm::Radix
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        let name = normalized
            .strip_suffix("_sort")
            .or_else(|| normalized.strip_suffix("sort"))
            .unwrap_or(&normalized);

        match name {
            "bubble" => Ok(Algorithm::Bubble),
            "insertion" => Ok(Algorithm::Insertion),
            "selection" => Ok(Algorithm::Selection),
            "merge" => Ok(Algorithm::Merge),
            "quick" => Ok(Algorithm::Quicksort),
            "heap" => Ok(Algorithm::Heap),
            "radix" => Ok(Algorithm::Radix),
            _ => Err(SortError::UnknownAlgorithm(s.to_owned())),
        }
    }
}

/// Element types [`sort`] accepts.
///
/// The crate implements it for the primitive integers, which report [`HAS_DIGITS`] and also work
/// with radix sort, and for `String`, `&str`, `char`, `bool`, `()` and tuples of up to three
/// `SortKey`s, which work with the comparison algorithms only. The set stops there.
///
/// Any other `Ord + Clone` type opts in with an empty impl and then sorts with every
/// comparison algorithm, while radix sort reports [`SortError::UnsupportedKey`]:
///
/// ```ignore
/// impl classic_sort::SortKey for MyKey {}
/// ```
///
/// Types that can't or shouldn't implement it go through [`sort_by`], which only needs
/// `Clone` and a comparator.
///
/// [`HAS_DIGITS`]: SortKey::HAS_DIGITS
pub trait SortKey: Ord + Clone {
    /// Whether values of this type have decimal digits radix sort can bucket on.
    const HAS_DIGITS: bool = false;

    /// Value used by radix sort, `None` for negative numbers and types without digits.
    fn digits(&self) -> Option<u128> {
        None
    }
}

macro_rules! sort_key_unsigned {
    ($($t:ty),*) => {
        $(
            impl SortKey for $t {
                const HAS_DIGITS: bool = true;

                #[inline]
                fn digits(&self) -> Option<u128> {
                    Some(*self as u128)
                }
            }
        )*
    };
}

macro_rules! sort_key_signed {
    ($($t:ty),*) => {
        $(
            impl SortKey for $t {
                const HAS_DIGITS: bool = true;

                #[inline]
                fn digits(&self) -> Option<u128> {
                    u128::try_from(*self).ok()
                }
            }
        )*
    };
}

sort_key_unsigned!(u8, u16, u32, u64, u128, usize);
sort_key_signed!(i8, i16, i32, i64, i128, isize);

// Comparison only.
impl SortKey for String {}
impl SortKey for &str {}
impl SortKey for char {}
impl SortKey for bool {}
impl SortKey for () {}
impl<A: SortKey, B: SortKey> SortKey for (A, B) {}
impl<A: SortKey, B: SortKey, C: SortKey> SortKey for (A, B, C) {}

/// Sorts a copy of `v` with `algorithm` in `direction`.
///
/// Radix sort fails with [`SortError::UnsupportedKey`] for types without digits and with
/// [`SortError::NegativeKey`] if any integer is negative. Both are checked before sorting.
pub fn sort<T>(v: &[T], algorithm: Algorithm, direction: Direction) -> Result<Vec<T>, SortError>
where
    T: SortKey,
{
    debug!("{algorithm} sort, {direction}, {} elements", v.len());

    if v.len() < 2 && algorithm.is_comparison() {
        return working_copy(v);
    }

    match algorithm {
        Algorithm::Bubble => bubble::sort(v, direction),
        Algorithm::Insertion => insertion::sort(v, direction),
        Algorithm::Selection => selection::sort(v, direction),
        Algorithm::Merge => merge::sort(v, direction),
        Algorithm::Quicksort => quicksort::sort(v, direction),
        Algorithm::Heap => heapsort::sort(v, direction),
        Algorithm::Radix => radix::sort(v, direction),
    }
}

/// Like [`sort`] but with a custom three-way comparator. Radix sort has no use for a
/// comparator and is rejected with [`SortError::UnsupportedKey`].
pub fn sort_by<T, F>(
    v: &[T],
    algorithm: Algorithm,
    direction: Direction,
    compare: F,
) -> Result<Vec<T>, SortError>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    debug!("{algorithm} sort_by, {direction}, {} elements", v.len());

    if !algorithm.is_comparison() {
        return Err(SortError::UnsupportedKey { algorithm });
    }

    if v.len() < 2 {
        return working_copy(v);
    }

    match algorithm {
        Algorithm::Bubble => bubble::sort_by(v, direction, compare),
        Algorithm::Insertion => insertion::sort_by(v, direction, compare),
        Algorithm::Selection => selection::sort_by(v, direction, compare),
        Algorithm::Merge => merge::sort_by(v, direction, compare),
        Algorithm::Quicksort => quicksort::sort_by(v, direction, compare),
        Algorithm::Heap => heapsort::sort_by(v, direction, compare),
        Algorithm::Radix => Err(SortError::UnsupportedKey { algorithm }),
    }
}

/// Clones `v` into a freshly reserved buffer, reporting allocation failure instead of aborting.
pub fn working_copy<T: Clone>(v: &[T]) -> Result<Vec<T>, SortError> {
    let mut copy = Vec::new();
    copy.try_reserve_exact(v.len())?;
    copy.extend_from_slice(v);

    Ok(copy)
}
