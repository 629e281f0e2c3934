//! Error type shared by the sequence adapter and the individual algorithms.
//!
//! Every failure is a precondition violation detected before any element is moved, or an
//! allocation failure while reserving the working copy or an auxiliary buffer. In both cases the
//! caller's sequence is untouched.

use std::collections::TryReserveError;
use std::error::Error;
use std::fmt::{Display, Formatter, Result};

use crate::Algorithm;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// The algorithm name did not match any known algorithm.
    UnknownAlgorithm(String),

    /// The direction name was neither ascending nor descending.
    UnknownDirection(String),

    /// The algorithm can't sort this element type, e.g. radix sort on strings or radix sort
    /// driven by a comparator.
    UnsupportedKey {
        /// Algorithm that was asked to sort.
        algorithm: Algorithm,
    },

    /// Radix sort only handles non-negative integers.
    NegativeKey {
        /// Position of the first negative element in the input.
        index: usize,
    },

    /// Reserving the working copy or an auxiliary buffer failed.
    AllocationFailed(TryReserveError),
}

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            SortError::UnknownAlgorithm(name) => write!(f, "Unknown sort algorithm: '{name}'"),
            SortError::UnknownDirection(name) => {
                write!(
                    f,
                    "Unknown sort direction: '{name}', expected ascending or descending"
                )
            }
            SortError::UnsupportedKey { algorithm } => {
                write!(f, "{algorithm} sort can't handle this element type")
            }
            SortError::NegativeKey { index } => {
                write!(
                    f,
                    "Radix sort requires non-negative integers, found a negative value at index {index}"
                )
            }
            SortError::AllocationFailed(err) => write!(f, "Allocation failed: {err}"),
        }
    }
}

impl Error for SortError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SortError::AllocationFailed(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TryReserveError> for SortError {
    fn from(err: TryReserveError) -> Self {
        SortError::AllocationFailed(err)
    }
}
