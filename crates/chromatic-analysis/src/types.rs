use serde::{Deserialize, Serialize};

use crate::interpret::Interpretations;
use crate::pitch::{name_of, NoteName, PitchClass};
use crate::spelling::AnalyzedChord;
use crate::stability::Chord;
use crate::Error;

/// A set of distinct pitch classes to analyze, in the order given.
///
/// Order matters: it fixes the order in which candidate roots are tried,
/// and therefore how ties between equally stable roots are broken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Question {
    pitch_classes: Vec<PitchClass>,
}

impl Question {
    pub fn new(values: Vec<u8>) -> Result<Self, Error> {
        if values.is_empty() {
            return Err(Error::EmptyQuestion);
        }

        let mut pitch_classes: Vec<PitchClass> = Vec::with_capacity(values.len());
        for value in values {
            let pc = PitchClass::new(value)?;
            if pitch_classes.contains(&pc) {
                return Err(Error::DuplicatePitchClass(value));
            }
            pitch_classes.push(pc);
        }

        Ok(Self { pitch_classes })
    }

    pub fn pitch_classes(&self) -> &[PitchClass] {
        &self.pitch_classes
    }

    pub fn len(&self) -> usize {
        self.pitch_classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pitch_classes.is_empty()
    }

    /// Canonical note names, in question order.
    pub fn notes(&self) -> Vec<NoteName> {
        self.pitch_classes.iter().map(|pc| name_of(*pc)).collect()
    }
}

impl TryFrom<Vec<u8>> for Question {
    type Error = Error;

    fn try_from(values: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<Question> for Vec<u8> {
    fn from(question: Question) -> Vec<u8> {
        question.pitch_classes.into_iter().map(u8::from).collect()
    }
}

/// Complete analysis of one question.
///
/// When `is_invalid` is set the question was rejected as a chromatic
/// cluster: `interpretations` is empty and `best`/`spelled` are `None`.
/// A valid question may still produce no chord if every root was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub question: Question,
    pub notes: Vec<NoteName>,
    pub is_invalid: bool,
    pub interpretations: Interpretations,
    pub best: Option<Chord>,
    pub spelled: Option<AnalyzedChord>,
}
