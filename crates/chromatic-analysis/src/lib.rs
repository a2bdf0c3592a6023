//! Harmonic analysis of unordered pitch-class sets.
//!
//! Every member of a question is tried as a root. Each candidate gets a set
//! of harmonic functions (`1`, `♭3`, `5`, `♭7`, ...), incoherent roots are
//! dropped, the rest are scored for stability, and the winner is spelled on
//! whichever side of the sharp/flat divide needs fewer accidentals.
//!
//! ```
//! use chromatic_analysis::{analyze, Question};
//!
//! let question = Question::new(vec![0, 4, 7, 11]).unwrap();
//! let analysis = analyze(&question);
//! let best = analysis.best.unwrap();
//! assert_eq!(best.root.to_string(), "C");
//! assert_eq!(best.score, 15);
//! ```

pub mod analyzer;
pub mod enharmonic;
pub mod function;
pub mod interpret;
pub mod ordering;
pub mod pitch;
pub mod spelling;
pub mod stability;
pub mod tension;
pub mod types;
pub mod validity;

pub use analyzer::{HarmonyAnalyzer, StabilityAnalyzer};
pub use enharmonic::{simplify, to_flat_spelling, to_sharp_spelling};
pub use function::{function_for, note_for, notes_for, HarmonicFunction};
pub use interpret::{create_interpretations, Interpretation, Interpretations};
pub use ordering::{order_notes_from_root, reorder_functions, DISPLAY_ORDER};
pub use pitch::{name_of, scale_of, Letter, NoteName, PitchClass};
pub use spelling::{spell_chord, AnalyzedChord, Spelling};
pub use stability::{chord_cost, select_best, weight, Chord};
pub use tension::convert_to_tensions;
pub use types::{Analysis, Question};
pub use validity::is_invalid;

use std::sync::Arc;

use tracing::info;

/// Question size the engine expects unless configured otherwise.
pub const DEFAULT_QUESTION_SIZE: usize = 4;

/// Errors from malformed input. Analysis itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("pitch class {0} is out of range (expected 0-11)")]
    PitchClassOutOfRange(u8),

    #[error("pitch class {0} appears more than once")]
    DuplicatePitchClass(u8),

    #[error("question contains no pitch classes")]
    EmptyQuestion,

    #[error("expected {expected} pitch classes, got {actual}")]
    WrongQuestionSize { expected: usize, actual: usize },

    #[error("invalid note name: {0:?}")]
    InvalidNoteName(String),

    #[error("unknown harmonic function: {0:?}")]
    UnknownFunction(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Analyze a question with the default [`StabilityAnalyzer`].
pub fn analyze(question: &Question) -> Analysis {
    analyzer::run(&StabilityAnalyzer, question)
}

/// Analysis engine bound to a fixed question size.
///
/// The pipeline works for any number of distinct pitch classes; the engine
/// is where a caller pins the size it expects and gets a
/// [`Error::WrongQuestionSize`] instead of a silent analysis.
pub struct ChromaticEngine {
    analyzer: Arc<dyn HarmonyAnalyzer>,
    question_size: Option<usize>,
}

impl Default for ChromaticEngine {
    fn default() -> Self {
        Self::new(Some(DEFAULT_QUESTION_SIZE))
    }
}

impl ChromaticEngine {
    /// Create with the default analyzer. `None` accepts any size.
    pub fn new(question_size: Option<usize>) -> Self {
        Self {
            analyzer: Arc::new(StabilityAnalyzer),
            question_size,
        }
    }

    /// Create with a custom analyzer.
    pub fn with_analyzer(analyzer: Arc<dyn HarmonyAnalyzer>, question_size: Option<usize>) -> Self {
        Self {
            analyzer,
            question_size,
        }
    }

    pub fn question_size(&self) -> Option<usize> {
        self.question_size
    }

    /// Validate raw pitch classes and analyze them.
    pub fn analyze(&self, values: &[u8]) -> Result<Analysis> {
        if let Some(expected) = self.question_size {
            if values.len() != expected {
                return Err(Error::WrongQuestionSize {
                    expected,
                    actual: values.len(),
                });
            }
        }

        let question = Question::new(values.to_vec())?;
        Ok(self.analyze_question(&question))
    }

    /// Analyze an already validated question. The size check is skipped.
    pub fn analyze_question(&self, question: &Question) -> Analysis {
        let analysis = analyzer::run(self.analyzer.as_ref(), question);

        match &analysis.best {
            Some(best) => info!(
                question = ?Vec::<u8>::from(question.clone()),
                root = %best.root,
                score = best.score,
                candidates = analysis.interpretations.len(),
                "analysis complete"
            ),
            None => info!(
                question = ?Vec::<u8>::from(question.clone()),
                invalid = analysis.is_invalid,
                "no stable chord"
            ),
        }

        analysis
    }
}
