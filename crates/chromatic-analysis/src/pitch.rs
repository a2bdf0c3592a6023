//! Pitch space: pitch classes, note spellings and major-scale tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Semitone offset of each major-scale degree from the tonic.
pub const MAJOR_STEPS: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

/// One of the twelve equal-tempered pitch classes (C=0, C♯=1, ... B=11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PitchClass(u8);

impl PitchClass {
    pub fn new(value: u8) -> Result<Self, Error> {
        if value < 12 {
            Ok(Self(value))
        } else {
            Err(Error::PitchClassOutOfRange(value))
        }
    }

    /// Wrap any signed semitone count into a pitch class.
    pub fn wrapping(semitones: i32) -> Self {
        Self(semitones.rem_euclid(12) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Upward distance in semitones from `root` to `self`, in 0..12.
    pub fn interval_from(self, root: PitchClass) -> u8 {
        (self.0 + 12 - root.0) % 12
    }

    pub fn transpose(self, semitones: i32) -> Self {
        Self::wrapping(self.0 as i32 + semitones)
    }
}

impl TryFrom<u8> for PitchClass {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PitchClass> for u8 {
    fn from(pc: PitchClass) -> u8 {
        pc.0
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Natural note letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Position in the C-based letter sequence (C=0 ... B=6).
    pub fn index(self) -> usize {
        match self {
            Letter::C => 0,
            Letter::D => 1,
            Letter::E => 2,
            Letter::F => 3,
            Letter::G => 4,
            Letter::A => 5,
            Letter::B => 6,
        }
    }

    pub fn natural_pitch_class(self) -> PitchClass {
        PitchClass(MAJOR_STEPS[self.index()])
    }

    /// The letter `steps` positions away, wrapping around the octave.
    pub fn shifted(self, steps: i32) -> Letter {
        Self::ALL[(self.index() as i32 + steps).rem_euclid(7) as usize]
    }

    pub fn next(self) -> Letter {
        self.shifted(1)
    }

    pub fn prev(self) -> Letter {
        self.shifted(-1)
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }

    fn from_char(c: char) -> Option<Letter> {
        Self::ALL.into_iter().find(|l| l.as_char() == c)
    }
}

pub const SHARP: char = '♯';
pub const FLAT: char = '♭';

/// A spelled note: a letter plus a signed accidental count
/// (positive for sharps, negative for flats).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NoteName {
    pub letter: Letter,
    pub accidentals: i8,
}

impl NoteName {
    pub const fn new(letter: Letter, accidentals: i8) -> Self {
        Self {
            letter,
            accidentals,
        }
    }

    pub const fn natural(letter: Letter) -> Self {
        Self::new(letter, 0)
    }

    pub const fn sharp(letter: Letter) -> Self {
        Self::new(letter, 1)
    }

    pub const fn flat(letter: Letter) -> Self {
        Self::new(letter, -1)
    }

    pub fn pitch_class(self) -> PitchClass {
        PitchClass::wrapping(self.letter.natural_pitch_class().0 as i32 + self.accidentals as i32)
    }

    /// Number of accidental marks written on this note.
    pub fn accidental_count(self) -> u32 {
        self.accidentals.unsigned_abs() as u32
    }

    pub fn is_sharp(self) -> bool {
        self.accidentals > 0
    }

    pub fn is_flat(self) -> bool {
        self.accidentals < 0
    }

    /// Append one more sharp (`+1`) or flat (`-1`) without respelling.
    pub fn with_accidental(self, delta: i8) -> Self {
        Self::new(self.letter, self.accidentals + delta)
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter.as_char())?;
        let mark = if self.accidentals > 0 { SHARP } else { FLAT };
        for _ in 0..self.accidentals.unsigned_abs() {
            write!(f, "{}", mark)?;
        }
        Ok(())
    }
}

impl FromStr for NoteName {
    type Err = Error;

    /// Accepts `♯`/`#` for sharps and `♭`/`b` for flats after the letter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let letter = chars
            .next()
            .and_then(Letter::from_char)
            .ok_or_else(|| Error::InvalidNoteName(s.to_string()))?;

        let mut accidentals: i8 = 0;
        for c in chars {
            let delta = match c {
                SHARP | '#' => 1,
                FLAT | 'b' => -1,
                _ => return Err(Error::InvalidNoteName(s.to_string())),
            };
            accidentals = accidentals
                .checked_add(delta)
                .ok_or_else(|| Error::InvalidNoteName(s.to_string()))?;
        }

        Ok(NoteName::new(letter, accidentals))
    }
}

impl TryFrom<String> for NoteName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NoteName> for String {
    fn from(note: NoteName) -> String {
        note.to_string()
    }
}

/// Canonical (sharp-side) name for every pitch class.
const NOTE_NAMES: [NoteName; 12] = [
    NoteName::natural(Letter::C),
    NoteName::sharp(Letter::C),
    NoteName::natural(Letter::D),
    NoteName::sharp(Letter::D),
    NoteName::natural(Letter::E),
    NoteName::natural(Letter::F),
    NoteName::sharp(Letter::F),
    NoteName::natural(Letter::G),
    NoteName::sharp(Letter::G),
    NoteName::natural(Letter::A),
    NoteName::sharp(Letter::A),
    NoteName::natural(Letter::B),
];

pub fn name_of(pc: PitchClass) -> NoteName {
    NOTE_NAMES[pc.0 as usize]
}

/// Roots with a major-scale table: every natural, every single-sharp name
/// produced by [`name_of`], and the five common flat spellings.
pub const SCALE_ROOTS: [NoteName; 17] = [
    NoteName::natural(Letter::C),
    NoteName::sharp(Letter::C),
    NoteName::flat(Letter::D),
    NoteName::natural(Letter::D),
    NoteName::sharp(Letter::D),
    NoteName::flat(Letter::E),
    NoteName::natural(Letter::E),
    NoteName::natural(Letter::F),
    NoteName::sharp(Letter::F),
    NoteName::flat(Letter::G),
    NoteName::natural(Letter::G),
    NoteName::sharp(Letter::G),
    NoteName::flat(Letter::A),
    NoteName::natural(Letter::A),
    NoteName::sharp(Letter::A),
    NoteName::flat(Letter::B),
    NoteName::natural(Letter::B),
];

/// The seven diatonic degrees of the major scale on `root`.
///
/// Each degree uses the next letter in sequence and takes whatever
/// accidentals it needs (including double sharps such as `F♯♯` in D♯ major).
/// Returns `None` for roots outside [`SCALE_ROOTS`].
pub fn scale_of(root: NoteName) -> Option<[NoteName; 7]> {
    if !SCALE_ROOTS.contains(&root) {
        return None;
    }

    let tonic = root.pitch_class();
    let mut scale = [root; 7];
    for (degree, step) in MAJOR_STEPS.iter().enumerate() {
        let letter = root.letter.shifted(degree as i32);
        let target = tonic.transpose(*step as i32);
        let diff = target.interval_from(letter.natural_pitch_class()) as i8;
        let accidentals = if diff > 6 { diff - 12 } else { diff };
        scale[degree] = NoteName::new(letter, accidentals);
    }
    Some(scale)
}
