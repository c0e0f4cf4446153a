// Top-down merge sort with freshly allocated halves per level.
pub mod mergesort;
