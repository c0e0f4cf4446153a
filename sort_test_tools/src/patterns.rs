use std::env;
use std::ops::RangeInclusive;

use once_cell::sync::OnceCell;
use rand::prelude::*;
use zipf::ZipfDistribution;

static SEED: OnceCell<u64> = OnceCell::new();

/// Process wide seed used by every pattern. Set `OVERRIDE_SEED` to replay a failing run.
pub fn random_init_seed() -> u64 {
    *SEED.get_or_init(|| {
        let seed = env::var("OVERRIDE_SEED")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
            .unwrap_or_else(|| thread_rng().gen());

        eprintln!("Pattern seed: {seed}");
        seed
    })
}

/// Every call starts from the same seed, mixed with the length so different sizes see different
/// values.
fn new_rng(len: usize) -> StdRng {
    StdRng::seed_from_u64(random_init_seed() ^ (len as u64).rotate_left(32))
}

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::
    let mut rng = new_rng(len);
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform(len: usize, range: RangeInclusive<i32>) -> Vec<i32> {
    // :.:.:.::
    let mut rng = new_rng(len);
    let dist = rand::distributions::Uniform::from(range);
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law
    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_rng(len);
    let dist = ZipfDistribution::new(len, exponent).unwrap();
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.
    (0..len as i32).rev().collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::
    vec![66; len]
}
