//! Display orderings for function labels and note names.

use crate::function::HarmonicFunction;
use crate::pitch::NoteName;

/// Canonical display sequence: chord tones first, then tensions.
pub const DISPLAY_ORDER: [HarmonicFunction; 15] = [
    HarmonicFunction::Root,
    HarmonicFunction::FlatThird,
    HarmonicFunction::Third,
    HarmonicFunction::FlatFifth,
    HarmonicFunction::Fifth,
    HarmonicFunction::SharpFifth,
    HarmonicFunction::FlatSeventh,
    HarmonicFunction::Seventh,
    HarmonicFunction::FlatNinth,
    HarmonicFunction::Ninth,
    HarmonicFunction::SharpNinth,
    HarmonicFunction::Eleventh,
    HarmonicFunction::SharpEleventh,
    HarmonicFunction::FlatThirteenth,
    HarmonicFunction::Thirteenth,
];

/// [`DISPLAY_ORDER`] restricted to the functions present in `functions`.
pub fn reorder_functions(functions: &[HarmonicFunction]) -> Vec<HarmonicFunction> {
    DISPLAY_ORDER
        .iter()
        .filter(|f| functions.contains(*f))
        .copied()
        .collect()
}

/// Walk the twelve semitones upward from `root` and keep each note of
/// `notes` found on the way, in chromatic order.
///
/// Notes are matched by pitch class, so any spelling of a member is accepted
/// and returned as written.
pub fn order_notes_from_root(root: NoteName, notes: &[NoteName]) -> Vec<NoteName> {
    let start = root.pitch_class();
    (0..12)
        .map(|offset| start.transpose(offset))
        .filter_map(|pc| notes.iter().find(|n| n.pitch_class() == pc).copied())
        .collect()
}
