use std::cmp::Ordering;
use std::fmt::Debug;

use crate::patterns;
use crate::Sort;

#[cfg(not(feature = "large_test_sizes"))]
const TEST_SIZES: [usize; 18] = [
    0, 1, 2, 3, 4, 5, 7, 8, 15, 16, 17, 31, 50, 64, 100, 255, 512, 1_000,
];

#[cfg(feature = "large_test_sizes")]
const TEST_SIZES: [usize; 21] = [
    0, 1, 2, 3, 4, 5, 7, 8, 15, 16, 17, 31, 50, 64, 100, 255, 512, 1_000, 2_048, 3_000, 4_000,
];

/// Sorts `v` with `S` and checks the result against the standard library sort.
fn sort_comp<T, S>(v: &mut [T])
where
    T: Ord + Clone + Debug,
    S: Sort,
{
    let seed = patterns::random_init_seed();

    let mut expected = v.to_vec();
    expected.sort();

    S::sort(v);

    assert!(
        is_sorted(v),
        "{} produced an unsorted result for len {}, seed {seed}",
        S::name(),
        v.len()
    );
    assert_eq!(
        expected,
        v,
        "{} did not produce a permutation of its input, seed {seed}",
        S::name()
    );
}

fn test_impl<S: Sort>(pattern_fn: impl Fn(usize) -> Vec<i32>) {
    for test_size in TEST_SIZES {
        let mut test_data = pattern_fn(test_size);
        sort_comp::<i32, S>(&mut test_data);
    }
}

pub fn is_sorted<T: Ord>(v: &[T]) -> bool {
    v.windows(2).all(|w| w[0] <= w[1])
}

pub fn basic<S: Sort>() {
    sort_comp::<i32, S>(&mut []);
    sort_comp::<(), S>(&mut []);
    sort_comp::<(), S>(&mut [()]);
    sort_comp::<(), S>(&mut [(), ()]);
    sort_comp::<(), S>(&mut [(), (), ()]);
    sort_comp::<i32, S>(&mut [77]);
    sort_comp::<i32, S>(&mut [2, 3]);
    sort_comp::<i32, S>(&mut [2, 3, 6]);
    sort_comp::<i32, S>(&mut [2, 3, 99, 6]);
    sort_comp::<i32, S>(&mut [2, 7709, 400, 90932]);
    sort_comp::<i32, S>(&mut [15, -1, 3, -1, -3, -1, 7]);
}

pub fn fixed_seed<S: Sort>() {
    let fixed_seed_a = patterns::random_init_seed();
    let fixed_seed_b = patterns::random_init_seed();

    assert_eq!(fixed_seed_a, fixed_seed_b);
}

pub fn two_elements<S: Sort>() {
    let mut v = [2, 1];
    S::sort(&mut v);
    assert_eq!(v, [1, 2]);

    let mut v = [1, 2];
    S::sort(&mut v);
    assert_eq!(v, [1, 2]);

    let mut v = [4, 4];
    S::sort(&mut v);
    assert_eq!(v, [4, 4]);
}

pub fn example<S: Sort>() {
    let mut v = [5, 1, 6, 2, 3, 4];
    S::sort(&mut v);
    assert_eq!(v, [1, 2, 3, 4, 5, 6]);
}

pub fn random<S: Sort>() {
    test_impl::<S>(patterns::random);
}

pub fn random_dense_dups<S: Sort>() {
    // Far fewer distinct values than elements.
    test_impl::<S>(|len| patterns::random_uniform(len, 1..=((len as f64).sqrt() as i32).max(1)));
}

pub fn random_binary<S: Sort>() {
    test_impl::<S>(|len| patterns::random_uniform(len, 0..=1));
}

pub fn random_zipf<S: Sort>() {
    test_impl::<S>(|len| patterns::random_zipf(len, 1.0));
}

pub fn ascending<S: Sort>() {
    test_impl::<S>(patterns::ascending);
}

pub fn descending<S: Sort>() {
    test_impl::<S>(patterns::descending);
}

pub fn all_equal<S: Sort>() {
    test_impl::<S>(patterns::all_equal);
}

pub fn idempotent<S: Sort>() {
    for test_size in TEST_SIZES {
        let mut v = patterns::random_uniform(test_size, 1..=1_000);
        S::sort(&mut v);
        let once = v.clone();
        S::sort(&mut v);
        assert_eq!(once, v, "{} is not idempotent for len {test_size}", S::name());
    }
}

pub fn sort_by_descending<S: Sort>() {
    for test_size in TEST_SIZES {
        let mut v = patterns::random(test_size);
        let mut expected = v.clone();
        expected.sort_by(|a, b| b.cmp(a));

        S::sort_by(&mut v, |a, b| b.cmp(a));
        assert_eq!(expected, v);
    }
}

pub fn sort_by_key_only<S: Sort>() {
    // Payload is ignored by the comparison, so only the keys have to end up ordered, but no
    // element may be lost or duplicated.
    for test_size in TEST_SIZES {
        let keys = patterns::random_uniform(test_size, 0..=9);
        let mut v = keys
            .iter()
            .enumerate()
            .map(|(i, &key)| (key, i))
            .collect::<Vec<_>>();

        S::sort_by(&mut v, |a, b| a.0.cmp(&b.0));

        assert!(v.windows(2).all(|w| w[0].0.cmp(&w[1].0) != Ordering::Greater));

        let mut payloads = v.iter().map(|(_, i)| *i).collect::<Vec<_>>();
        payloads.sort_unstable();
        assert!(payloads.into_iter().eq(0..test_size));
    }
}
