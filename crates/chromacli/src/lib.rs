//! Building blocks of the `chromacli` binary.

pub mod quiz;
pub mod report;
pub mod telemetry;

pub use quiz::random_question;
pub use report::{render_json, render_text, ReportOptions};

use chromatic_analysis::{NoteName, PitchClass};

/// Parse a pitch class given as a number (`0`-`11`) or a note name (`E♭`, `Eb`, `F#`).
pub fn parse_pitch_class(arg: &str) -> Result<u8, String> {
    let arg = arg.trim();
    if let Ok(value) = arg.parse::<u8>() {
        return PitchClass::new(value)
            .map(u8::from)
            .map_err(|e| e.to_string());
    }
    arg.parse::<NoteName>()
        .map(|note| u8::from(note.pitch_class()))
        .map_err(|e| format!("{} (use 0-11 or a note name)", e))
}
