use crate::interpret::{create_interpretations, Interpretations};
use crate::pitch::PitchClass;
use crate::spelling::{spell_chord, AnalyzedChord};
use crate::stability::{select_best, Chord};
use crate::types::{Analysis, Question};
use crate::validity::is_invalid;

/// The stages of one analysis, as a swappable backend.
///
/// `StabilityAnalyzer` is the table-driven implementation. Alternative
/// scorers or spellers can implement this and be handed to
/// [`crate::ChromaticEngine::with_analyzer`].
pub trait HarmonyAnalyzer: Send + Sync {
    fn is_invalid(&self, question: &[PitchClass]) -> bool;

    fn interpret(&self, question: &[PitchClass]) -> Interpretations;

    fn select(&self, interpretations: &Interpretations) -> Option<Chord>;

    fn spell(&self, chord: &Chord) -> AnalyzedChord;
}

/// Cluster filter, candidate roots with tension conversion, lowest summed
/// weight wins, fewer accidentals spelled.
#[derive(Debug, Clone, Copy, Default)]
pub struct StabilityAnalyzer;

impl HarmonyAnalyzer for StabilityAnalyzer {
    fn is_invalid(&self, question: &[PitchClass]) -> bool {
        is_invalid(question)
    }

    fn interpret(&self, question: &[PitchClass]) -> Interpretations {
        create_interpretations(question)
    }

    fn select(&self, interpretations: &Interpretations) -> Option<Chord> {
        select_best(interpretations)
    }

    fn spell(&self, chord: &Chord) -> AnalyzedChord {
        spell_chord(chord)
    }
}

/// Run every stage of `analyzer` over `question`.
pub fn run(analyzer: &dyn HarmonyAnalyzer, question: &Question) -> Analysis {
    let pitch_classes = question.pitch_classes();
    let notes = question.notes();

    if analyzer.is_invalid(pitch_classes) {
        return Analysis {
            question: question.clone(),
            notes,
            is_invalid: true,
            interpretations: Interpretations::new(),
            best: None,
            spelled: None,
        };
    }

    let interpretations = analyzer.interpret(pitch_classes);
    let best = analyzer.select(&interpretations);
    let spelled = best.as_ref().map(|chord| analyzer.spell(chord));

    Analysis {
        question: question.clone(),
        notes,
        is_invalid: false,
        interpretations,
        best,
        spelled,
    }
}
