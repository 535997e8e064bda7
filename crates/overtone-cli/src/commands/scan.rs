//! Scan command implementation
//!
//! Sweeps the 20-8372.02 Hz band for frequencies that share harmonic
//! multiples with the base frequency and prints the ranked candidates,
//! each annotated with its nearest musical note.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::process::ExitCode;

use overtone_core::{nearest_note, scan, Candidate, MIN_SHARED_MULTIPLES};

use super::format_note_line;
use super::json_output::{error_codes, JsonError, ScanCandidate, ScanOutput, ScanReport};

/// Lowest accepted base frequency (exclusive), per the input contract.
const BASE_FREQ_LOW: f64 = 20.0;
/// Highest accepted base frequency (exclusive).
const BASE_FREQ_HIGH: f64 = 20000.0;

/// Run the scan command
///
/// # Arguments
/// * `freq` - Base frequency in Hz, must be within (20, 20000)
/// * `limit` - Maximum number of candidates to display
/// * `output` - Optional path to write the full JSON report to
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(freq: f64, limit: usize, output: Option<&str>, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(freq, limit, output)
    } else {
        run_human(freq, limit, output)
    }
}

fn base_freq_error(freq: f64) -> Option<String> {
    if !freq.is_finite() || freq <= BASE_FREQ_LOW || freq >= BASE_FREQ_HIGH {
        Some(format!(
            "frequency must be between {} and {} (exclusive), got {}",
            BASE_FREQ_LOW, BASE_FREQ_HIGH, freq
        ))
    } else {
        None
    }
}

/// Run the scan with human-readable (colored) output
fn run_human(freq: f64, limit: usize, output: Option<&str>) -> Result<ExitCode> {
    if let Some(message) = base_freq_error(freq) {
        anyhow::bail!(message);
    }

    let candidates = scan(freq)?;
    let shown = &candidates[..limit.min(candidates.len())];

    println!(
        "{}",
        format!(
            "Listing the first {} frequencies that share more than {} multiples with {} Hz:",
            shown.len(),
            MIN_SHARED_MULTIPLES,
            freq
        )
        .cyan()
        .bold()
    );
    println!(
        "{} {}",
        "Candidates above threshold:".dimmed(),
        candidates.len()
    );

    for candidate in shown {
        let note = nearest_note(candidate.freq)?;
        println!(
            "{} - Common multiples: {} (Odd: {}, Even: {})",
            format_note_line(candidate.freq, &note),
            candidate.total,
            candidate.odd,
            candidate.even
        );
    }

    if let Some(path) = output {
        let report = build_report(freq, limit, &candidates)?;
        write_report(&report, path)?;
        println!("{} {}", "Report written to".dimmed(), path);
    }

    Ok(ExitCode::SUCCESS)
}

/// Run the scan with machine-readable JSON output
fn run_json(freq: f64, limit: usize, output: Option<&str>) -> Result<ExitCode> {
    if let Some(message) = base_freq_error(freq) {
        let error = JsonError::new(error_codes::FREQUENCY_OUT_OF_RANGE, message);
        let envelope = ScanOutput::failure(vec![error]);
        println!("{}", serde_json::to_string_pretty(&envelope)?);
        return Ok(ExitCode::from(1));
    }

    let candidates = match scan(freq) {
        Ok(c) => c,
        Err(e) => {
            let error = JsonError::new(error_codes::COMPUTE, e.to_string());
            let envelope = ScanOutput::failure(vec![error]);
            println!("{}", serde_json::to_string_pretty(&envelope)?);
            return Ok(ExitCode::from(1));
        }
    };

    let report = match build_report(freq, limit, &candidates) {
        Ok(r) => r,
        Err(e) => {
            let error = JsonError::new(error_codes::COMPUTE, e.to_string());
            let envelope = ScanOutput::failure(vec![error]);
            println!("{}", serde_json::to_string_pretty(&envelope)?);
            return Ok(ExitCode::from(1));
        }
    };

    if let Some(path) = output {
        if let Err(e) = write_report(&report, path) {
            let error =
                JsonError::new(error_codes::FILE_WRITE, e.to_string()).with_file(path);
            let envelope = ScanOutput::failure(vec![error]);
            println!("{}", serde_json::to_string_pretty(&envelope)?);
            return Ok(ExitCode::from(1));
        }
    }

    let envelope = ScanOutput::success(report);
    println!("{}", serde_json::to_string_pretty(&envelope)?);

    Ok(ExitCode::SUCCESS)
}

/// Build the annotated report from ranked candidates, truncated to `limit`.
fn build_report(freq: f64, limit: usize, candidates: &[Candidate]) -> Result<ScanReport> {
    let shown = &candidates[..limit.min(candidates.len())];
    let rows = shown
        .iter()
        .map(|candidate| {
            let note = nearest_note(candidate.freq)?;
            Ok(ScanCandidate {
                freq: candidate.freq,
                note: note.name.to_string(),
                cents: note.cents,
                sign: note.sign,
                odd: candidate.odd,
                even: candidate.even,
                total: candidate.total,
            })
        })
        .collect::<overtone_core::OvertoneResult<Vec<_>>>()?;

    Ok(ScanReport {
        freq,
        total_candidates: candidates.len(),
        limit,
        candidates: rows,
    })
}

/// Write the report as pretty JSON to a file.
fn write_report(report: &ScanReport, path: &str) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json).with_context(|| format!("Failed to write report: {}", path))?;
    Ok(())
}
