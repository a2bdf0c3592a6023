//! Enharmonic respelling.

use crate::pitch::{Letter, NoteName};

/// Respell `note` with at most one accidental, keeping its pitch class.
///
/// Excess accidentals move the letter: each step consumes the real semitone
/// gap between neighbouring letters (two, or one across E/F and B/C). A flat
/// that lands on C or F becomes the natural letter below (`C♭` → `B`,
/// `F♭` → `E`). A single sharp on E or B is left as written.
pub fn simplify(note: NoteName) -> NoteName {
    let mut letter = note.letter;
    let mut accidentals = note.accidentals as i32;

    while accidentals > 1 {
        let next = letter.next();
        accidentals -= letter_gap(letter, next);
        letter = next;
    }
    while accidentals < -1 {
        let prev = letter.prev();
        accidentals += letter_gap(prev, letter);
        letter = prev;
    }

    if accidentals == -1 && matches!(letter, Letter::C | Letter::F) {
        letter = letter.prev();
        accidentals = 0;
    }

    NoteName::new(letter, accidentals as i8)
}

/// Semitones from `lower` up to the adjacent letter `upper`.
fn letter_gap(lower: Letter, upper: Letter) -> i32 {
    upper
        .natural_pitch_class()
        .interval_from(lower.natural_pitch_class()) as i32
}

/// Flat spelling and its sharp-side partner.
const ENHARMONIC_PAIRS: [(NoteName, NoteName); 7] = [
    (NoteName::flat(Letter::B), NoteName::sharp(Letter::A)),
    (NoteName::flat(Letter::E), NoteName::sharp(Letter::D)),
    (NoteName::flat(Letter::A), NoteName::sharp(Letter::G)),
    (NoteName::flat(Letter::D), NoteName::sharp(Letter::C)),
    (NoteName::flat(Letter::G), NoteName::sharp(Letter::F)),
    (NoteName::flat(Letter::C), NoteName::natural(Letter::B)),
    (NoteName::flat(Letter::F), NoteName::natural(Letter::E)),
];

/// Swap a flat-side spelling for its sharp-side partner; anything else is
/// returned unchanged.
pub fn to_sharp_spelling(note: NoteName) -> NoteName {
    ENHARMONIC_PAIRS
        .iter()
        .find(|(flat, _)| *flat == note)
        .map(|(_, sharp)| *sharp)
        .unwrap_or(note)
}

/// Swap a sharp-side spelling for its flat-side partner; anything else is
/// returned unchanged. `B` and `E` map to `C♭` and `F♭`.
pub fn to_flat_spelling(note: NoteName) -> NoteName {
    ENHARMONIC_PAIRS
        .iter()
        .find(|(_, sharp)| *sharp == note)
        .map(|(flat, _)| *flat)
        .unwrap_or(note)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn n(s: &str) -> NoteName {
        s.parse().unwrap()
    }

    fn simplified(s: &str) -> String {
        simplify(n(s)).to_string()
    }

    #[test]
    fn single_accidentals_are_kept() {
        assert_eq!(simplified("C♯"), "C♯");
        assert_eq!(simplified("B♭"), "B♭");
        assert_eq!(simplified("E♯"), "E♯");
        assert_eq!(simplified("G"), "G");
    }

    #[test]
    fn double_accidentals_move_the_letter() {
        assert_eq!(simplified("F♯♯"), "G");
        assert_eq!(simplified("C♯♯"), "D");
        assert_eq!(simplified("B♭♭"), "A");
        assert_eq!(simplified("D♭♭"), "C");
        assert_eq!(simplified("G♯♯♯"), "A♯");
    }

    #[test]
    fn half_step_letters_keep_the_pitch() {
        assert_eq!(simplified("E♯♯"), "F♯");
        assert_eq!(simplified("B♯♯"), "C♯");
        assert_eq!(simplified("C♭♭"), "B♭");
        assert_eq!(simplified("F♭♭"), "E♭");
    }

    #[test]
    fn flat_on_c_or_f_becomes_natural_below() {
        assert_eq!(simplified("C♭"), "B");
        assert_eq!(simplified("F♭"), "E");
        assert_eq!(simplified("D♭♭♭"), "B");
    }

    #[test]
    fn mixed_marks_cancel() {
        assert_eq!(simplified("A♭♯"), "A");
        assert_eq!(simplified("C♯♯♭"), "C♯");
    }

    #[test]
    fn simplify_preserves_pitch_class() {
        for letter in Letter::ALL {
            for accidentals in -4..=4 {
                let note = NoteName::new(letter, accidentals);
                let simple = simplify(note);
                assert_eq!(simple.pitch_class(), note.pitch_class(), "{}", note);
                assert!(simple.accidental_count() <= 1, "{} -> {}", note, simple);
            }
        }
    }

    #[test]
    fn simplify_is_idempotent() {
        for letter in Letter::ALL {
            for accidentals in -4..=4 {
                let once = simplify(NoteName::new(letter, accidentals));
                assert_eq!(simplify(once), once);
            }
        }
    }

    #[test]
    fn sharp_and_flat_tables() {
        assert_eq!(to_sharp_spelling(n("B♭")), n("A♯"));
        assert_eq!(to_sharp_spelling(n("C♭")), n("B"));
        assert_eq!(to_flat_spelling(n("C♯")), n("D♭"));
        assert_eq!(to_flat_spelling(n("E")), n("F♭"));
        assert_eq!(to_flat_spelling(n("G")), n("G"));
        assert_eq!(to_sharp_spelling(n("E♯")), n("E♯"));
    }

    #[test]
    fn sharp_flat_round_trip_is_stable() {
        for letter in Letter::ALL {
            for accidentals in -2..=2 {
                let x = NoteName::new(letter, accidentals);
                let sharp = to_sharp_spelling(x);
                assert_eq!(to_sharp_spelling(to_flat_spelling(sharp)), sharp, "{}", x);
            }
        }
    }
}
