//! Chromatic-cluster filter.

use crate::pitch::PitchClass;

/// True when the set contains a chromatic cluster and cannot be read as a chord.
///
/// A cluster is three consecutive semitones in the ascending sort. Across the
/// octave seam only these shapes are recognised (`s` sorted, `n` = length):
/// `s[n-1] = 11, s[0] = 0, s[1] = 1`; `s[n-2] = 11, s[n-1] = 0, s[0] = 1`;
/// and `s[n-1] = 11, s[0] = 0, s[1] = 2`.
pub fn is_invalid(pitch_classes: &[PitchClass]) -> bool {
    let mut sorted: Vec<u8> = pitch_classes.iter().map(|pc| pc.value()).collect();
    sorted.sort_unstable();

    let run_of_three = sorted
        .windows(3)
        .any(|w| w[1] == w[0] + 1 && w[2] == w[1] + 1);
    if run_of_three {
        return true;
    }

    let n = sorted.len();
    if n < 2 {
        return false;
    }
    let first = sorted[0];
    let second = sorted[1];
    let last = sorted[n - 1];
    let second_last = sorted[n - 2];

    (last == 11 && first == 0 && second == 1)
        || (second_last == 11 && last == 0 && first == 1)
        || (last == 11 && first == 0 && second == 2)
}
