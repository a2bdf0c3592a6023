use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::function::{function_for, HarmonicFunction};
use crate::pitch::{name_of, NoteName, PitchClass};
use crate::tension::convert_to_tensions;

/// One reading of the question with a particular member as root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpretation {
    pub root: NoteName,
    /// Question notes in question order.
    pub notes: Vec<NoteName>,
    /// Functions after tension conversion, in order of first appearance.
    pub harmonic_functions: Vec<HarmonicFunction>,
    /// Raw function of each question note before tension conversion.
    pub functions_before: Vec<HarmonicFunction>,
}

/// Interpretations keyed by root name, kept in insertion order.
///
/// Serializes as a map from root name to interpretation, in insertion order.
/// Deserializing goes through [`Interpretations::insert`], so a repeated root
/// replaces the earlier entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interpretations {
    entries: Vec<Interpretation>,
}

impl Interpretations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert under `interpretation.root`, replacing in place any entry with
    /// the same root.
    pub fn insert(&mut self, interpretation: Interpretation) {
        match self
            .entries
            .iter_mut()
            .find(|e| e.root == interpretation.root)
        {
            Some(existing) => *existing = interpretation,
            None => self.entries.push(interpretation),
        }
    }

    pub fn get(&self, root: NoteName) -> Option<&Interpretation> {
        self.entries.iter().find(|e| e.root == root)
    }

    pub fn roots(&self) -> impl Iterator<Item = NoteName> + '_ {
        self.entries.iter().map(|e| e.root)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interpretation> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Interpretations {
    type Item = &'a Interpretation;
    type IntoIter = std::slice::Iter<'a, Interpretation>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for Interpretations {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.entries.iter().map(|e| (e.root, e)))
    }
}

impl<'de> Deserialize<'de> for Interpretations {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct RootMap;

        impl<'de> Visitor<'de> for RootMap {
            type Value = Interpretations;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of root names to interpretations")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut interpretations = Interpretations::new();
                while let Some((root, interpretation)) =
                    map.next_entry::<NoteName, Interpretation>()?
                {
                    if interpretation.root != root {
                        return Err(de::Error::custom(format!(
                            "interpretation under {} has root {}",
                            root, interpretation.root
                        )));
                    }
                    interpretations.insert(interpretation);
                }
                Ok(interpretations)
            }
        }

        deserializer.deserialize_map(RootMap)
    }
}

/// Function pairs that disqualify a candidate root outright.
const INCOHERENT_PAIRS: [(HarmonicFunction, HarmonicFunction); 2] = [
    (HarmonicFunction::FlatThird, HarmonicFunction::SharpFifth),
    (HarmonicFunction::Seventh, HarmonicFunction::FlatNinth),
];

/// Try every question member as the root.
///
/// A root whose raw functions contain `♭3` with `♯5`, or `7` with `♭9`, is
/// skipped. Surviving roots get tension conversion and are keyed by their
/// canonical name in question order.
pub fn create_interpretations(question: &[PitchClass]) -> Interpretations {
    let notes: Vec<NoteName> = question.iter().map(|pc| name_of(*pc)).collect();
    let mut interpretations = Interpretations::new();

    for &root in question {
        let root_name = name_of(root);
        let functions_before: Vec<HarmonicFunction> = question
            .iter()
            .map(|member| function_for(root, *member))
            .collect();

        if let Some((a, b)) = INCOHERENT_PAIRS
            .iter()
            .find(|(a, b)| functions_before.contains(a) && functions_before.contains(b))
        {
            debug!(root = %root_name, conflict = %format!("{} + {}", a, b), "rejecting root");
            continue;
        }

        interpretations.insert(Interpretation {
            root: root_name,
            notes: notes.clone(),
            harmonic_functions: convert_to_tensions(&functions_before),
            functions_before,
        });
    }

    interpretations
}
