//! Note command implementation
//!
//! Resolves a single frequency to its nearest musical note and cents offset.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use overtone_core::nearest_note;

use super::format_note_line;
use super::json_output::{error_codes, AnnotatedFrequency, JsonError, NoteOutput};

/// Run the note command
///
/// # Arguments
/// * `freq` - Frequency in Hz
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

/// Run note resolution with human-readable (colored) output
fn run_human(freq: f64) -> Result<ExitCode> {
    if !freq.is_finite() || freq <= 0.0 {
        anyhow::bail!("frequency must be a positive number, got {}", freq);
    }

    let note = nearest_note(freq)?;

    println!("{}", "Nearest note:".cyan().bold());
    println!("  {}", format_note_line(freq, &note));
    println!(
        "  {} {} Hz",
        "Reference:".dimmed(),
        note.reference_freq
    );

    Ok(ExitCode::SUCCESS)
}

/// Run note resolution with machine-readable JSON output
fn run_json(freq: f64) -> Result<ExitCode> {
    if !freq.is_finite() || freq <= 0.0 {
        let error = JsonError::new(
            error_codes::INVALID_FREQUENCY,
            format!("frequency must be a positive number, got {}", freq),
        );
        let output = NoteOutput::failure(vec![error]);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::from(1));
    }

    let result = match AnnotatedFrequency::resolve(freq) {
        Ok(r) => r,
        Err(e) => {
            let error = JsonError::new(error_codes::COMPUTE, e.to_string());
            let output = NoteOutput::failure(vec![error]);
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(ExitCode::from(1));
        }
    };

    let output = NoteOutput::success(result);
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(ExitCode::SUCCESS)
}
