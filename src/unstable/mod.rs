// Scan for the minimum of the unsorted suffix and swap it into place.
pub mod selection_sort;

// First element pivot with a two pointer Hoare style partition.
pub mod quicksort;
