//! Shared verification for every algorithm implementing [`classic_sort::Sort`].
//!
//! `instantiate_sort_tests!(SortImpl)` expands to one `#[test]` per property in [`tests`].

pub use classic_sort::Sort;

pub mod patterns;
pub mod types;
