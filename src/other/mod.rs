// Digit based, not driven by a comparator.
pub mod radix;
