use rand::Rng;

/// In-place Fisher-Yates shuffle.
///
/// Walks the slice from the back; each element swaps with a uniformly
/// chosen element at or before its own position, so every permutation is
/// equally likely. The caller supplies the RNG, which keeps the routine
/// reproducible under a seeded generator.
pub fn fisher_yates<T, R: Rng>(data: &mut [T], rng: &mut R) {
    for i in (1..data.len()).rev() {
        let j = rng.random_range(0..=i);
        data.swap(i, j);
    }
}
