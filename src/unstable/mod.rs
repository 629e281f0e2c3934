pub mod heapsort;
pub mod quicksort;
pub mod selection;
