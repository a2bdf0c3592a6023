//! Sharp-versus-flat spelling of the selected chord.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enharmonic::{to_flat_spelling, to_sharp_spelling};
use crate::function::{notes_for, HarmonicFunction};
use crate::ordering::reorder_functions;
use crate::pitch::NoteName;
use crate::stability::Chord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Spelling {
    Sharp,
    Flat,
}

impl fmt::Display for Spelling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Spelling::Sharp => write!(f, "sharp"),
            Spelling::Flat => write!(f, "flat"),
        }
    }
}

/// The chosen chord spelled on both sides of the enharmonic divide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedChord {
    /// Root on the preferred side.
    pub root: NoteName,
    /// Root on the other side; equal to `root` for natural roots.
    pub alt_root: NoteName,
    /// Functions in display order, parallel to the spelled notes.
    pub harmonic_functions: Vec<HarmonicFunction>,
    pub spelled_notes: Vec<NoteName>,
    pub alt_spelled_notes: Vec<NoteName>,
    pub preferred_spelling: Spelling,
}

impl AnalyzedChord {
    /// Whether the root has a distinct enharmonic name.
    pub fn has_enharmonic(&self) -> bool {
        self.root != self.alt_root
    }
}

/// Total accidental marks across a set of notes.
pub fn count_accidentals(notes: &[NoteName]) -> u32 {
    notes.iter().map(|n| n.accidental_count()).sum()
}

/// Spell `chord` from its sharp-side and flat-side roots and keep the side
/// with fewer accidentals. Flat wins ties.
pub fn spell_chord(chord: &Chord) -> AnalyzedChord {
    let functions = reorder_functions(&chord.harmonic_functions);

    let sharp_root = if chord.root.is_flat() {
        to_sharp_spelling(chord.root)
    } else {
        chord.root
    };
    let flat_root = if chord.root.is_sharp() {
        to_flat_spelling(chord.root)
    } else {
        chord.root
    };

    let sharp_notes = notes_for(sharp_root, &functions);
    let flat_notes = notes_for(flat_root, &functions);

    if count_accidentals(&flat_notes) > count_accidentals(&sharp_notes) {
        AnalyzedChord {
            root: sharp_root,
            alt_root: flat_root,
            harmonic_functions: functions,
            spelled_notes: sharp_notes,
            alt_spelled_notes: flat_notes,
            preferred_spelling: Spelling::Sharp,
        }
    } else {
        AnalyzedChord {
            root: flat_root,
            alt_root: sharp_root,
            harmonic_functions: functions,
            spelled_notes: flat_notes,
            alt_spelled_notes: sharp_notes,
            preferred_spelling: Spelling::Flat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::HarmonicFunction::*;
    use pretty_assertions::assert_eq;

    fn chord(root: &str, functions: Vec<HarmonicFunction>) -> Chord {
        Chord {
            root: root.parse().unwrap(),
            score: 0,
            harmonic_functions: functions,
        }
    }

    fn names(notes: &[NoteName]) -> Vec<String> {
        notes.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn a_sharp_minor_seventh_prefers_b_flat() {
        let spelled = spell_chord(&chord("A♯", vec![Root, FlatThird, Fifth, FlatSeventh]));
        assert_eq!(spelled.preferred_spelling, Spelling::Flat);
        assert_eq!(spelled.root.to_string(), "B♭");
        assert_eq!(spelled.alt_root.to_string(), "A♯");
        assert_eq!(names(&spelled.spelled_notes), vec!["B♭", "D♭", "F", "A♭"]);
        assert_eq!(names(&spelled.alt_spelled_notes), vec!["A♯", "C♯", "E♯", "G♯"]);
    }

    #[test]
    fn ties_go_to_flats() {
        // F♯ A♯ C♯ against G♭ B♭ D♭
        let spelled = spell_chord(&chord("F♯", vec![Root, Third, Fifth]));
        assert_eq!(spelled.preferred_spelling, Spelling::Flat);

        // C♯ E G♯ B against D♭ E A♭ B
        let spelled = spell_chord(&chord("C♯", vec![Root, FlatThird, Fifth, FlatSeventh]));
        assert_eq!(spelled.preferred_spelling, Spelling::Flat);
        assert_eq!(names(&spelled.spelled_notes), vec!["D♭", "E", "A♭", "B"]);
        assert_eq!(names(&spelled.alt_spelled_notes), vec!["C♯", "E", "G♯", "B"]);
    }

    #[test]
    fn e_sharp_loses_to_flat_side() {
        let spelled = spell_chord(&chord("F♯", vec![Root, Third, Fifth, Seventh]));
        assert_eq!(spelled.preferred_spelling, Spelling::Flat);
        assert_eq!(names(&spelled.spelled_notes), vec!["G♭", "B♭", "D♭", "F"]);
    }

    #[test]
    fn c_flat_eleventh_prefers_sharps() {
        // F♯ A♯ B against G♭ B♭ C♭
        let spelled = spell_chord(&chord("F♯", vec![Root, Third, Eleventh]));
        assert_eq!(spelled.preferred_spelling, Spelling::Sharp);
        assert_eq!(spelled.root.to_string(), "F♯");
        assert_eq!(spelled.alt_root.to_string(), "G♭");
        assert_eq!(names(&spelled.spelled_notes), vec!["F♯", "A♯", "B"]);
        assert_eq!(names(&spelled.alt_spelled_notes), vec!["G♭", "B♭", "C♭"]);
    }

    #[test]
    fn natural_root_keeps_sharps_in_chord() {
        let spelled = spell_chord(&chord("E", vec![Root, Third, Fifth, Seventh]));
        assert_eq!(spelled.preferred_spelling, Spelling::Flat);
        assert!(!spelled.has_enharmonic());
        assert_eq!(names(&spelled.spelled_notes), vec!["E", "G♯", "B", "D♯"]);
    }

    #[test]
    fn natural_root_has_one_spelling() {
        let spelled = spell_chord(&chord("C", vec![Root, Third, Fifth, Seventh]));
        assert_eq!(spelled.root, spelled.alt_root);
        assert_eq!(spelled.spelled_notes, spelled.alt_spelled_notes);
        assert_eq!(names(&spelled.spelled_notes), vec!["C", "E", "G", "B"]);
    }

    #[test]
    fn functions_are_display_ordered() {
        let spelled = spell_chord(&chord("C", vec![Seventh, Root, Fifth, Third]));
        assert_eq!(spelled.harmonic_functions, vec![Root, Third, Fifth, Seventh]);
        assert_eq!(names(&spelled.spelled_notes), vec!["C", "E", "G", "B"]);
    }

    #[test]
    fn deterministic() {
        let c = chord("G♯", vec![Root, Third, Fifth, FlatSeventh]);
        assert_eq!(spell_chord(&c), spell_chord(&c));
    }
}
