//! End-to-end behaviour of the analysis pipeline.

use std::collections::BTreeSet;

use chromatic_analysis::{
    analyze, chord_cost, HarmonicFunction, NoteName, PitchClass, Question, Spelling,
};
use pretty_assertions::assert_eq;

use HarmonicFunction::*;

fn run(values: &[u8]) -> chromatic_analysis::Analysis {
    analyze(&Question::new(values.to_vec()).unwrap())
}

fn names(notes: &[NoteName]) -> Vec<String> {
    notes.iter().map(ToString::to_string).collect()
}

fn all_four_note_questions() -> Vec<Vec<u8>> {
    let mut out = Vec::new();
    for a in 0..12u8 {
        for b in a + 1..12 {
            for c in b + 1..12 {
                for d in c + 1..12 {
                    out.push(vec![a, b, c, d]);
                }
            }
        }
    }
    out
}

#[test]
fn major_seventh() {
    let analysis = run(&[0, 4, 7, 11]);
    assert!(!analysis.is_invalid);

    let c = analysis.interpretations.get("C".parse().unwrap()).unwrap();
    assert_eq!(c.harmonic_functions, vec![Root, Third, Fifth, Seventh]);

    let best = analysis.best.unwrap();
    assert_eq!(best.root.to_string(), "C");
    assert_eq!(best.score, 15);

    let spelled = analysis.spelled.unwrap();
    assert_eq!(names(&spelled.spelled_notes), vec!["C", "E", "G", "B"]);
    assert!(!spelled.has_enharmonic());
}

#[test]
fn dominant_seventh_in_any_order() {
    let analysis = run(&[5, 2, 11, 7]);
    let best = analysis.best.unwrap();
    assert_eq!(best.root.to_string(), "G");
    assert_eq!(best.score, 15);
    // B reads ♭3 with ♯5 and is dropped
    assert!(analysis.interpretations.get("B".parse().unwrap()).is_none());
}

#[test]
fn diminished_seventh_ties_to_first_root() {
    let analysis = run(&[0, 3, 6, 9]);
    assert_eq!(analysis.interpretations.len(), 4);
    for interpretation in &analysis.interpretations {
        assert_eq!(chord_cost(&interpretation.harmonic_functions), 21);
    }

    let best = analysis.best.unwrap();
    assert_eq!(best.root.to_string(), "C");

    let spelled = analysis.spelled.unwrap();
    assert_eq!(names(&spelled.spelled_notes), vec!["C", "E♭", "G♭", "A"]);

    let rotated = run(&[9, 0, 3, 6]);
    assert_eq!(rotated.best.unwrap().root.to_string(), "A");
}

#[test]
fn minor_seventh_beats_sixth_chord() {
    let analysis = run(&[0, 4, 7, 9]);
    let best = analysis.best.unwrap();
    assert_eq!(best.root.to_string(), "A");
    assert_eq!(best.score, 15);
    assert_eq!(
        analysis
            .interpretations
            .get("C".parse().unwrap())
            .map(|i| chord_cost(&i.harmonic_functions)),
        Some(21)
    );
}

#[test]
fn sharp_nine_tension() {
    let analysis = run(&[0, 3, 4, 10]);
    let best = analysis.best.unwrap();
    assert_eq!(best.root.to_string(), "C");
    assert_eq!(best.harmonic_functions, vec![Root, SharpNinth, Third, FlatSeventh]);
    assert_eq!(best.score, 19);

    let spelled = analysis.spelled.unwrap();
    assert_eq!(
        spelled.harmonic_functions,
        vec![Root, Third, FlatSeventh, SharpNinth]
    );
    assert_eq!(names(&spelled.spelled_notes), vec!["C", "E", "B♭", "D♯"]);
}

#[test]
fn sharp_root_respelled_with_flats() {
    let analysis = run(&[10, 1, 5, 8]);
    let best = analysis.best.unwrap();
    assert_eq!(best.root.to_string(), "A♯");

    let spelled = analysis.spelled.unwrap();
    assert_eq!(spelled.preferred_spelling, Spelling::Flat);
    assert_eq!(spelled.root.to_string(), "B♭");
    assert_eq!(spelled.alt_root.to_string(), "A♯");
    assert_eq!(names(&spelled.spelled_notes), vec!["B♭", "D♭", "F", "A♭"]);
    assert_eq!(names(&spelled.alt_spelled_notes), vec!["A♯", "C♯", "E♯", "G♯"]);
}

#[test]
fn clusters_are_invalid() {
    for question in [[0, 1, 2, 7], [11, 0, 1, 6], [4, 5, 6, 10]] {
        let analysis = run(&question);
        assert!(analysis.is_invalid, "{:?}", question);
        assert!(analysis.interpretations.is_empty());
        assert_eq!(analysis.best, None);
        assert_eq!(analysis.spelled, None);
        assert_eq!(analysis.notes.len(), 4);
    }
}

#[test]
fn every_four_note_question() {
    let mut valid = 0;
    for question in all_four_note_questions() {
        let analysis = run(&question);
        if analysis.is_invalid {
            continue;
        }
        valid += 1;

        assert!(analysis.interpretations.len() <= question.len());

        let lowest = analysis
            .interpretations
            .iter()
            .map(|i| chord_cost(&i.harmonic_functions))
            .min();
        assert_eq!(analysis.best.as_ref().map(|b| b.score), lowest, "{:?}", question);

        if let Some(spelled) = &analysis.spelled {
            let expected: BTreeSet<PitchClass> = Question::new(question.clone())
                .unwrap()
                .pitch_classes()
                .iter()
                .copied()
                .collect();
            let spelled_pcs: BTreeSet<PitchClass> =
                spelled.spelled_notes.iter().map(|n| n.pitch_class()).collect();
            let alt_pcs: BTreeSet<PitchClass> =
                spelled.alt_spelled_notes.iter().map(|n| n.pitch_class()).collect();
            assert_eq!(spelled_pcs, expected, "{:?}", question);
            assert_eq!(alt_pcs, expected, "{:?}", question);
            assert_eq!(spelled.root.pitch_class(), spelled.alt_root.pitch_class());
        }
    }
    assert!(valid > 0);
}

#[test]
fn repeated_analysis_is_identical() {
    for question in all_four_note_questions().into_iter().step_by(7) {
        assert_eq!(run(&question), run(&question));
    }
}

#[test]
fn analysis_serializes_with_labels() {
    let json = serde_json::to_value(run(&[0, 3, 4, 10])).unwrap();
    assert_eq!(json["question"], serde_json::json!([0, 3, 4, 10]));
    assert_eq!(json["best"]["root"], "C");
    assert_eq!(json["best"]["harmonic_functions"], serde_json::json!(["1", "♯9", "3", "♭7"]));
    assert_eq!(json["spelled"]["preferred_spelling"], "flat");
    assert_eq!(json["interpretations"]["C"]["root"], "C");
    assert_eq!(
        json["interpretations"]["C"]["harmonic_functions"],
        serde_json::json!(["1", "♯9", "3", "♭7"])
    );
}
