//! Random questions for practice.

use chromaconf::MAX_QUESTION_SIZE;
use rand::seq::index;
use rand::Rng;

/// Draw `size` distinct pitch classes in random order.
///
/// Returns `None` when `size` is zero or larger than the twelve-tone space.
pub fn random_question<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Option<Vec<u8>> {
    if size == 0 || size > MAX_QUESTION_SIZE {
        return None;
    }
    Some(
        index::sample(rng, MAX_QUESTION_SIZE, size)
            .into_iter()
            .map(|i| i as u8)
            .collect(),
    )
}
