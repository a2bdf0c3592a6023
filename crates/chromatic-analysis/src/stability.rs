use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::function::HarmonicFunction;
use crate::interpret::Interpretations;
use crate::pitch::NoteName;

/// The most stable interpretation and its cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chord {
    pub root: NoteName,
    pub score: u32,
    pub harmonic_functions: Vec<HarmonicFunction>,
}

/// Instability weight of a single function: its nominal interval number,
/// with the root free.
pub fn weight(function: HarmonicFunction) -> u32 {
    use crate::function::HarmonicFunction::*;

    match function {
        Root => 0,
        FlatThird | Third => 3,
        FlatFifth | Fifth | SharpFifth => 5,
        FlatSeventh | Seventh => 7,
        FlatNinth | Ninth | SharpNinth => 9,
        Eleventh | SharpEleventh => 11,
        FlatThirteenth | Thirteenth => 13,
    }
}

/// Total instability of a function set. Lower is more stable.
pub fn chord_cost(functions: &[HarmonicFunction]) -> u32 {
    functions.iter().map(|f| weight(*f)).sum()
}

/// Pick the lowest-cost interpretation; on a tie the earlier one wins.
pub fn select_best(interpretations: &Interpretations) -> Option<Chord> {
    let mut best: Option<Chord> = None;

    for interpretation in interpretations {
        let score = chord_cost(&interpretation.harmonic_functions);
        debug!(root = %interpretation.root, score, "scored interpretation");

        if best.as_ref().map_or(true, |b| score < b.score) {
            best = Some(Chord {
                root: interpretation.root,
                score,
                harmonic_functions: interpretation.harmonic_functions.clone(),
            });
        }
    }

    best
}
