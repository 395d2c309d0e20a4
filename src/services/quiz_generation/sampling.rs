use crate::services::quiz_generation::rng::RandomSource;

/// In-place Fisher-Yates shuffle, walking from the last index down to 1.
pub fn shuffle<T>(items: &mut [T], rng: &mut impl RandomSource) {
    for i in (1..items.len()).rev() {
        let j = ((rng.next_f64() * (i + 1) as f64).floor() as usize).min(i);
        items.swap(i, j);
    }
}

/// Up to `k` distinct elements of `items` in random order.
///
/// Asking for at least as many elements as exist returns a shuffled copy of
/// the whole slice. The input is never reordered.
pub fn sample<T: Clone>(items: &[T], k: usize, rng: &mut impl RandomSource) -> Vec<T> {
    if k == 0 {
        return Vec::new();
    }

    let mut copy = items.to_vec();
    shuffle(&mut copy, rng);
    copy.truncate(k);
    copy
}
