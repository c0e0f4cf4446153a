//! Dataset generation for benchmark trials.

use rand::distributions::Uniform;
use rand::prelude::*;

/// Order of a generated dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOrder {
    /// Independent uniform draws.
    Random,
    /// The same distribution as [`InputOrder::Random`], sorted ascending.
    Sorted,
}

impl InputOrder {
    pub fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Sorted => "sorted",
        }
    }
}

/// `size` values drawn uniformly from `1..=max_value`, using a fresh entropy seeded source.
///
/// # Panics
///
/// Panics with a [`ContractViolation`](crate::ContractViolation) if `max_value < 1`.
pub fn generate_random(size: usize, max_value: i32) -> Vec<i32> {
    generate_random_with(&mut StdRng::from_entropy(), size, max_value)
}

/// Like [`generate_random`], sorted ascending before returning.
pub fn generate_sorted(size: usize, max_value: i32) -> Vec<i32> {
    generate_sorted_with(&mut StdRng::from_entropy(), size, max_value)
}

pub fn generate_random_with<R: Rng + ?Sized>(rng: &mut R, size: usize, max_value: i32) -> Vec<i32> {
    contract!(max_value >= 1, "max value must be at least 1, got {max_value}");

    let dist = Uniform::new_inclusive(1, max_value);
    (0..size).map(|_| dist.sample(rng)).collect()
}

pub fn generate_sorted_with<R: Rng + ?Sized>(rng: &mut R, size: usize, max_value: i32) -> Vec<i32> {
    let mut v = generate_random_with(rng, size, max_value);
    v.sort_unstable();
    v
}

/// Hands out one independent random source per dataset.
///
/// With a seed the n-th dataset is drawn from `seed + n`, so a whole run can be replayed. Without
/// one every dataset comes from fresh entropy.
#[derive(Debug, Clone)]
pub struct DatasetGenerator {
    seed: Option<u64>,
    draws: u64,
}

impl DatasetGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed, draws: 0 }
    }

    fn next_rng(&mut self) -> StdRng {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(self.draws)),
            None => StdRng::from_entropy(),
        };
        self.draws += 1;
        rng
    }

    pub fn generate(&mut self, order: InputOrder, size: usize, max_value: i32) -> Vec<i32> {
        let mut rng = self.next_rng();
        match order {
            InputOrder::Random => generate_random_with(&mut rng, size, max_value),
            InputOrder::Sorted => generate_sorted_with(&mut rng, size, max_value),
        }
    }
}
