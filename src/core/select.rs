//! Uniform random selection over corpus pools.
//!
//! Every draw in the crate goes through here. Callers pass the generator in,
//! so a seeded `StdRng` makes any command reproducible.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Draws one element uniformly. Independent calls are independent draws.
///
/// Panics on an empty pool: corpus loading rejects empty pools, so reaching
/// this with one is a programming error.
pub fn pick_uniform<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> &'a T {
    assert!(!items.is_empty(), "pick_uniform called on an empty pool");
    &items[rng.gen_range(0..items.len())]
}

/// Draws `amount` distinct elements (fewer if the pool is smaller).
pub fn sample_distinct<'a, T, R: Rng + ?Sized>(
    items: &'a [T],
    amount: usize,
    rng: &mut R,
) -> Vec<&'a T> {
    items.choose_multiple(rng, amount).collect()
}

/// Builds the process generator: seeded when a seed is configured.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
