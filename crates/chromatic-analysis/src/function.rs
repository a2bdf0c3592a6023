//! Harmonic-function vocabulary and the interval classifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::enharmonic::simplify;
use crate::pitch::{scale_of, NoteName, PitchClass};
use crate::Error;

/// Role of a note relative to a chosen root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HarmonicFunction {
    Root,
    FlatNinth,
    Ninth,
    SharpNinth,
    FlatThird,
    Third,
    Eleventh,
    SharpEleventh,
    FlatFifth,
    Fifth,
    SharpFifth,
    FlatThirteenth,
    Thirteenth,
    FlatSeventh,
    Seventh,
}

/// Function assigned to each semitone distance above the root.
const BY_INTERVAL: [HarmonicFunction; 12] = [
    HarmonicFunction::Root,
    HarmonicFunction::FlatNinth,
    HarmonicFunction::Ninth,
    HarmonicFunction::FlatThird,
    HarmonicFunction::Third,
    HarmonicFunction::Eleventh,
    HarmonicFunction::FlatFifth,
    HarmonicFunction::Fifth,
    HarmonicFunction::SharpFifth,
    HarmonicFunction::Thirteenth,
    HarmonicFunction::FlatSeventh,
    HarmonicFunction::Seventh,
];

impl HarmonicFunction {
    pub const ALL: [HarmonicFunction; 15] = [
        Self::Root,
        Self::FlatNinth,
        Self::Ninth,
        Self::SharpNinth,
        Self::FlatThird,
        Self::Third,
        Self::Eleventh,
        Self::SharpEleventh,
        Self::FlatFifth,
        Self::Fifth,
        Self::SharpFifth,
        Self::FlatThirteenth,
        Self::Thirteenth,
        Self::FlatSeventh,
        Self::Seventh,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Root => "1",
            Self::FlatNinth => "♭9",
            Self::Ninth => "9",
            Self::SharpNinth => "♯9",
            Self::FlatThird => "♭3",
            Self::Third => "3",
            Self::Eleventh => "11",
            Self::SharpEleventh => "♯11",
            Self::FlatFifth => "♭5",
            Self::Fifth => "5",
            Self::SharpFifth => "♯5",
            Self::FlatThirteenth => "♭13",
            Self::Thirteenth => "13",
            Self::FlatSeventh => "♭7",
            Self::Seventh => "7",
        }
    }

    /// Zero-based major-scale degree this function is measured from, and the
    /// accidental applied to it.
    pub fn scale_degree(&self) -> (usize, i8) {
        match self {
            Self::Root => (0, 0),
            Self::FlatNinth => (1, -1),
            Self::Ninth => (1, 0),
            Self::SharpNinth => (1, 1),
            Self::FlatThird => (2, -1),
            Self::Third => (2, 0),
            Self::Eleventh => (3, 0),
            Self::SharpEleventh => (3, 1),
            Self::FlatFifth => (4, -1),
            Self::Fifth => (4, 0),
            Self::SharpFifth => (4, 1),
            Self::FlatThirteenth => (5, -1),
            Self::Thirteenth => (5, 0),
            Self::FlatSeventh => (6, -1),
            Self::Seventh => (6, 0),
        }
    }
}

impl fmt::Display for HarmonicFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HarmonicFunction {
    type Err = Error;

    /// Accepts the display labels and their ASCII forms (`b9`, `#11`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('b', "♭").replace('#', "♯");
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == normalized)
            .ok_or_else(|| Error::UnknownFunction(s.to_string()))
    }
}

impl TryFrom<String> for HarmonicFunction {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HarmonicFunction> for String {
    fn from(function: HarmonicFunction) -> String {
        function.as_str().to_string()
    }
}

/// Classify `member` by its upward semitone distance from `root`.
pub fn function_for(root: PitchClass, member: PitchClass) -> HarmonicFunction {
    BY_INTERVAL[member.interval_from(root) as usize]
}

/// Spell `function` above `root` using the root's major scale.
///
/// Altered functions respell the raised or lowered degree with at most one
/// accidental. Returns `None` when `root` has no scale table.
pub fn note_for(root: NoteName, function: HarmonicFunction) -> Option<NoteName> {
    let scale = scale_of(root)?;
    let (degree, accidental) = function.scale_degree();
    let note = scale[degree];
    if accidental == 0 {
        Some(note)
    } else {
        Some(simplify(note.with_accidental(accidental)))
    }
}

/// Spell each function in order, skipping any that cannot be spelled.
pub fn notes_for(root: NoteName, functions: &[HarmonicFunction]) -> Vec<NoteName> {
    functions
        .iter()
        .filter_map(|f| note_for(root, *f))
        .collect()
}
