//! Series command implementation
//!
//! Lists the odd and even multiples of a base frequency up to 20000 Hz,
//! each annotated with its nearest musical note.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use overtone_core::{multiple_series, nearest_note, Parity};

use super::format_note_line;
use super::json_output::{error_codes, AnnotatedFrequency, JsonError, SeriesOutput, SeriesReport};

/// Run the series command
///
/// # Arguments
/// * `freq` - Base frequency in Hz
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(freq: f64, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(freq)
    } else {
        run_human(freq)
    }
}

/// Run series listing with human-readable (colored) output
fn run_human(freq: f64) -> Result<ExitCode> {
    if !freq.is_finite() || freq <= 0.0 {
        anyhow::bail!("frequency must be a positive number, got {}", freq);
    }

    let odd = multiple_series(freq, Parity::Odd)?;
    let even = multiple_series(freq, Parity::Even)?;

    println!(
        "{}",
        format!("Multiple series for frequency {} Hz:", freq)
            .cyan()
            .bold()
    );

    // Odd multiples first, then even.
    for &multiple in odd.iter().chain(even.iter()) {
        let note = nearest_note(multiple)?;
        println!("{}", format_note_line(multiple, &note));
    }

    if odd.is_empty() && even.is_empty() {
        println!("{}", "(no multiples at or below 20000 Hz)".dimmed());
    }

    Ok(ExitCode::SUCCESS)
}

/// Run series listing with machine-readable JSON output
fn run_json(freq: f64) -> Result<ExitCode> {
    if !freq.is_finite() || freq <= 0.0 {
        let error = JsonError::new(
            error_codes::INVALID_FREQUENCY,
            format!("frequency must be a positive number, got {}", freq),
        );
        let output = SeriesOutput::failure(vec![error]);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::from(1));
    }

    let report = match build_report(freq) {
        Ok(r) => r,
        Err(e) => {
            let error = JsonError::new(error_codes::COMPUTE, e.to_string());
            let output = SeriesOutput::failure(vec![error]);
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(ExitCode::from(1));
        }
    };

    let output = SeriesOutput::success(report);
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(ExitCode::SUCCESS)
}

/// Build the annotated series report for a base frequency.
fn build_report(freq: f64) -> overtone_core::OvertoneResult<SeriesReport> {
    let annotate = |series: Vec<f64>| {
        series
            .into_iter()
            .map(AnnotatedFrequency::resolve)
            .collect::<overtone_core::OvertoneResult<Vec<_>>>()
    };

    Ok(SeriesReport {
        freq,
        odd: annotate(multiple_series(freq, Parity::Odd)?)?,
        even: annotate(multiple_series(freq, Parity::Even)?)?,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_series_command_success() {
        let code = run(220.0, true).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let code = run(220.0, false).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn test_series_command_invalid_frequency() {
        let code = run(0.0, true).unwrap();
        assert_eq!(code, ExitCode::from(1));

        assert!(run(-220.0, false).is_err());
    }

    #[test]
    fn test_series_report_contents() {
        let report = build_report(220.0).unwrap();
        assert_eq!(report.odd.len(), 45);
        assert_eq!(report.even.len(), 45);

        // 220 * 1 is A3 exactly; 220 * 2 is A4 exactly.
        assert_eq!(report.odd[0].freq, 220.0);
        assert_eq!(report.odd[0].note, "A3");
        assert_eq!(report.even[0].freq, 440.0);
        assert_eq!(report.even[0].note, "A4");
    }

    #[test]
    fn test_series_report_above_table_top() {
        // Multiples past C9 still resolve, to the top table entry.
        let report = build_report(9000.0).unwrap();
        assert_eq!(report.odd.len(), 1);
        assert_eq!(report.odd[0].note, "C9");
        assert_eq!(report.even[0].freq, 18000.0);
        assert_eq!(report.even[0].note, "C9");
    }
}
