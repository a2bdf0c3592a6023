//! Tension conversion: a natural and an altered form of the same degree are
//! read as a chord tone plus an upper extension.

use crate::function::HarmonicFunction;

/// Relabel conflicting functions and drop duplicates.
///
/// - `♭3` becomes `♯9` when `3` is present.
/// - `♭5` becomes `♯11` when `5` is present.
/// - `♯5` becomes `♭13` when `5` or `♭5` is present.
///
/// Presence is checked on the input before any relabeling. Output keeps the
/// order of first appearance.
pub fn convert_to_tensions(functions: &[HarmonicFunction]) -> Vec<HarmonicFunction> {
    use crate::function::HarmonicFunction::*;

    let has = |f: HarmonicFunction| functions.contains(&f);
    let has_third = has(Third);
    let has_fifth = has(Fifth);
    let has_flat_fifth = has(FlatFifth);

    let mut converted: Vec<HarmonicFunction> = Vec::with_capacity(functions.len());
    for &function in functions {
        let relabeled = match function {
            FlatThird if has_third => SharpNinth,
            FlatFifth if has_fifth => SharpEleventh,
            SharpFifth if has_fifth || has_flat_fifth => FlatThirteenth,
            other => other,
        };
        if !converted.contains(&relabeled) {
            converted.push(relabeled);
        }
    }
    converted
}
