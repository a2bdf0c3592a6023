//! Text and JSON rendering of an [`Analysis`].

use std::fmt::Write as _;

use chromatic_analysis::{
    order_notes_from_root, reorder_functions, Analysis, HarmonicFunction, NoteName,
};
use owo_colors::OwoColorize;

#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub show_interpretations: bool,
    pub color: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            show_interpretations: true,
            color: false,
        }
    }
}

struct Style {
    color: bool,
}

impl Style {
    fn heading(&self, text: &str) -> String {
        if self.color {
            text.bright_cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn root(&self, text: &str) -> String {
        if self.color {
            text.bright_green().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn warn(&self, text: &str) -> String {
        if self.color {
            text.bright_yellow().to_string()
        } else {
            text.to_string()
        }
    }
}

fn join_notes(notes: &[NoteName]) -> String {
    notes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_functions(functions: &[HarmonicFunction]) -> String {
    functions
        .iter()
        .map(HarmonicFunction::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Human-readable report.
pub fn render_text(analysis: &Analysis, options: &ReportOptions) -> String {
    let style = Style {
        color: options.color,
    };
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} {}",
        style.heading("Question:"),
        join_notes(&analysis.notes)
    );
    if let Some(first) = analysis.notes.first() {
        let _ = writeln!(
            out,
            "{} {}",
            style.heading("Ordered Notes:"),
            join_notes(&order_notes_from_root(*first, &analysis.notes))
        );
    }
    out.push('\n');

    if analysis.is_invalid {
        let _ = writeln!(out, "{}", style.warn("No stable chords found"));
        out.push('\n');
    } else if options.show_interpretations {
        for interpretation in &analysis.interpretations {
            let converted = reorder_functions(&interpretation.harmonic_functions);
            let raw = reorder_functions(&interpretation.functions_before);

            let _ = writeln!(
                out,
                "{} {}",
                style.heading("Root Note:"),
                style.root(&interpretation.root.to_string())
            );
            if raw != converted {
                let _ = writeln!(
                    out,
                    "  Harmonic Functions Before Conversion: {}",
                    join_functions(&raw)
                );
            }
            let _ = writeln!(
                out,
                "  Harmonic Functions After Conversion: {}",
                join_functions(&converted)
            );
            let _ = writeln!(
                out,
                "  Notes Order: {}",
                join_notes(&order_notes_from_root(
                    interpretation.root,
                    &interpretation.notes
                ))
            );
            out.push('\n');
        }
    }

    let _ = writeln!(out, "{}", style.heading("Most Stable Chord:"));
    match (&analysis.best, &analysis.spelled) {
        (Some(best), Some(spelled)) => {
            let root = if spelled.has_enharmonic() {
                format!("{} / {}", spelled.root, spelled.alt_root)
            } else {
                spelled.root.to_string()
            };
            let _ = writeln!(out, "  Root Note: {}", style.root(&root));
            let _ = writeln!(out, "  Score: {}", best.score);
            let _ = writeln!(
                out,
                "  Harmonic Functions: {}",
                join_functions(&spelled.harmonic_functions)
            );
            let _ = writeln!(out, "  Chord Notes: {}", join_notes(&spelled.spelled_notes));
            if spelled.has_enharmonic() {
                let _ = writeln!(
                    out,
                    "  Enharmonic Chord Notes: {}",
                    join_notes(&spelled.alt_spelled_notes)
                );
                let _ = writeln!(out, "  Preferred Spelling: {}", spelled.preferred_spelling);
            }
        }
        _ => {
            let _ = writeln!(out, "  {}", style.warn("No valid chords found"));
        }
    }

    out
}

/// Pretty-printed JSON of the whole analysis.
pub fn render_json(analysis: &Analysis) -> serde_json::Result<String> {
    serde_json::to_string_pretty(analysis)
}
