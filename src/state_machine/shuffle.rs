//! Uniform random selection

use rand::Rng;

/// Shuffle `items` in place (Fisher-Yates).
///
/// For a fair `rng` every permutation is equally likely.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Up to `count` distinct entries of `list`, chosen uniformly at random
pub fn pick_random<T: Clone, R: Rng + ?Sized>(list: &[T], count: usize, rng: &mut R) -> Vec<T> {
    let mut copy = list.to_vec();
    fisher_yates(&mut copy, rng);
    copy.truncate(count);
    copy
}
