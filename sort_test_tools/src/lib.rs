use std::cmp::Ordering;

pub mod patterns;
pub mod tests;

#[doc(hidden)]
pub use paste::paste;

/// A comparison sort that can be benchmarked and run through the generic test suite.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;
}

/// Instantiates one `#[test]` function per generic test in [`tests`], each prefixed with `$prefix`
/// so several sorts can share a test binary.
#[macro_export]
macro_rules! instantiate_sort_tests {
    ($prefix:ident => $sort_impl:ty) => {
        $crate::instantiate_sort_tests_gen!(
            $prefix => $sort_impl;
            basic,
            fixed_seed,
            two_elements,
            example,
            random,
            random_dense_dups,
            random_binary,
            random_zipf,
            ascending,
            descending,
            all_equal,
            idempotent,
            sort_by_descending,
            sort_by_key_only
        );
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! instantiate_sort_tests_gen {
    ($prefix:ident => $sort_impl:ty; $($test_fn:ident),* $(,)?) => {
        $crate::paste! {
            $(
                #[test]
                fn [<$prefix _ $test_fn>]() {
                    $crate::tests::$test_fn::<$sort_impl>();
                }
            )*
        }
    };
}
