//! Command implementations for the Overtone CLI.

pub mod json_output;
pub mod note;
pub mod scan;
pub mod series;

use overtone_core::NoteMatch;

/// Format a frequency with its note annotation for console display.
///
/// The cents glyph convention is asymmetric and deliberate: "+" for sharp
/// offsets, nothing for flat offsets (the minus sign of the number itself
/// carries it), and "0" for an exactly-zero offset.
pub(crate) fn format_note_line(freq: f64, note: &NoteMatch) -> String {
    format!(
        "{:.2} Hz - Note: {} - Cents: {}{:.2}",
        freq, note.name, note.sign, note.cents
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use overtone_core::nearest_note;

    #[test]
    fn test_format_exact_note() {
        let note = nearest_note(440.0).unwrap();
        assert_eq!(
            format_note_line(440.0, &note),
            "440.00 Hz - Note: A4 - Cents: 00.00"
        );
    }

    #[test]
    fn test_format_sharp_note() {
        let note = nearest_note(445.0).unwrap();
        let line = format_note_line(445.0, &note);
        assert!(line.starts_with("445.00 Hz - Note: A4 - Cents: +"), "{line}");
    }

    #[test]
    fn test_format_flat_note() {
        let note = nearest_note(435.0).unwrap();
        let line = format_note_line(435.0, &note);
        assert!(line.starts_with("435.00 Hz - Note: A4 - Cents: -"), "{line}");
    }
}
