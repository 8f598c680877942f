//! Random selection
//!
//! The RNG is a parameter so callers can pass a seeded generator.

use rand::seq::{index, SliceRandom};
use rand::Rng;

use crate::store::Joke;

/// One record chosen uniformly, or `None` for an empty slice
pub fn random_one<R: Rng + ?Sized>(jokes: &[Joke], rng: &mut R) -> Option<Joke> {
    jokes.choose(rng).cloned()
}

/// Up to `n` distinct records, sampled without replacement.
///
/// Returns `min(n, jokes.len())` records. The order carries no meaning.
pub fn random_n<R: Rng + ?Sized>(jokes: &[Joke], n: usize, rng: &mut R) -> Vec<Joke> {
    let amount = n.min(jokes.len());
    index::sample(rng, jokes.len(), amount)
        .into_iter()
        .map(|i| jokes[i].clone())
        .collect()
}
