use sort_test_tools::instantiate_sort_tests;

use sort_bench_rs::stable::mergesort;
use sort_bench_rs::unstable::{quicksort, selection_sort};

instantiate_sort_tests!(selection_sort => selection_sort::SortImpl);
instantiate_sort_tests!(merge_sort => mergesort::SortImpl);
instantiate_sort_tests!(quicksort => quicksort::SortImpl);
