//! Direction aware ordering shared by all comparison sorts.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::SortError;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Maps the classic `reverse` flag, `true` meaning descending.
    pub fn from_reverse(reverse: bool) -> Self {
        if reverse {
            Direction::Descending
        } else {
            Direction::Ascending
        }
    }

    pub fn is_descending(self) -> bool {
        self == Direction::Descending
    }

    /// Turns a base comparison result into the effective one.
    #[inline]
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ascending => f.write_str("ascending"),
            Direction::Descending => f.write_str("descending"),
        }
    }
}

impl FromStr for Direction {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Direction::Ascending),
            "desc" | "descending" => Ok(Direction::Descending),
            _ => Err(SortError::UnknownDirection(s.to_owned())),
        }
    }
}

/// A three-way comparator combined with a [`Direction`].
///
/// The comparator has to implement a total order for the algorithms to produce sorted output.
/// If it doesn't the result is still a permutation of the input, just in unspecified order.
pub struct OrderingPolicy<F> {
    compare: F,
    direction: Direction,
}

impl<F> OrderingPolicy<F> {
    pub fn new(compare: F, direction: Direction) -> Self {
        Self { compare, direction }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Effective comparison, `a` against `b`, after applying the direction.
    #[inline]
    pub fn compare<T>(&mut self, a: &T, b: &T) -> Ordering
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.direction.apply((self.compare)(a, b))
    }

    /// Returns `true` if `a` has to come before `b`. Equal elements are never less.
    #[inline]
    pub fn is_less<T>(&mut self, a: &T, b: &T) -> bool
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.compare(a, b) == Ordering::Less
    }
}
