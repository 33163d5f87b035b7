//! Random sampling helpers shared by the quiz and flashcard engines.
//!
//! Both functions copy their input and take the RNG as a parameter so the
//! engines stay deterministic under a seeded RNG in tests.

use rand::seq::SliceRandom;
use rand::Rng;

/// Picks up to `n` distinct elements without replacement, in random order.
/// If the slice has fewer than `n` elements, all of them are returned.
pub fn pick_n<T: Clone>(items: &[T], n: usize, rng: &mut impl Rng) -> Vec<T> {
    let mut pool = items.to_vec();
    let mut out = Vec::with_capacity(n.min(pool.len()));
    while !pool.is_empty() && out.len() < n {
        let i = rng.gen_range(0..pool.len());
        out.push(pool.swap_remove(i));
    }
    out
}

/// Returns the same elements in a uniformly random permutation.
pub fn shuffle<T: Clone>(items: &[T], rng: &mut impl Rng) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}
