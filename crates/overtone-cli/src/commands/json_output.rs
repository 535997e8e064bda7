//! JSON output types for machine-readable CLI output.
//!
//! This module provides structured output types for the `--json` flag so
//! other tools can parse command results programmatically. Every command
//! prints one envelope: `ok` plus either a result payload or a list of
//! structured errors.

use serde::{Deserialize, Serialize};

use overtone_core::{nearest_note, OvertoneResult, Sign};

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
pub mod error_codes {
    /// Frequency is not a positive real number
    pub const INVALID_FREQUENCY: &str = "CLI_001";
    /// Frequency is outside the supported scan band
    pub const FREQUENCY_OUT_OF_RANGE: &str = "CLI_002";
    /// Core computation rejected the input
    pub const COMPUTE: &str = "CLI_003";
    /// Report file could not be written
    pub const FILE_WRITE: &str = "CLI_004";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// File path involved (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// A frequency annotated with its nearest note.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnnotatedFrequency {
    /// Frequency in Hz.
    pub freq: f64,
    /// Nearest note name.
    pub note: String,
    /// Signed cents offset from the nearest note.
    pub cents: f64,
    /// Display glyph for the offset ("+", "", or "0").
    pub sign: Sign,
}

impl AnnotatedFrequency {
    /// Annotate a frequency with its nearest note.
    pub fn resolve(freq: f64) -> OvertoneResult<Self> {
        let note = nearest_note(freq)?;
        Ok(Self {
            freq,
            note: note.name.to_string(),
            cents: note.cents,
            sign: note.sign,
        })
    }
}

/// Output envelope for the `note` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct NoteOutput {
    /// Whether the command succeeded.
    pub ok: bool,
    /// The resolved note (present on success).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<AnnotatedFrequency>,
    /// Errors (empty on success).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
}

impl NoteOutput {
    /// Creates a successful output.
    pub fn success(result: AnnotatedFrequency) -> Self {
        Self {
            ok: true,
            result: Some(result),
            errors: Vec::new(),
        }
    }

    /// Creates a failed output with errors.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            ok: false,
            result: None,
            errors,
        }
    }
}

/// The odd and even multiple series of a base frequency, annotated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesReport {
    /// Base frequency in Hz.
    pub freq: f64,
    /// Odd multiples with note annotations.
    pub odd: Vec<AnnotatedFrequency>,
    /// Even multiples with note annotations.
    pub even: Vec<AnnotatedFrequency>,
}

/// Output envelope for the `series` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SeriesOutput {
    /// Whether the command succeeded.
    pub ok: bool,
    /// The annotated series (present on success).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<SeriesReport>,
    /// Errors (empty on success).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
}

impl SeriesOutput {
    /// Creates a successful output.
    pub fn success(result: SeriesReport) -> Self {
        Self {
            ok: true,
            result: Some(result),
            errors: Vec::new(),
        }
    }

    /// Creates a failed output with errors.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            ok: false,
            result: None,
            errors,
        }
    }
}

/// One ranked scan candidate with its note annotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanCandidate {
    /// Candidate frequency in Hz.
    pub freq: f64,
    /// Nearest note name.
    pub note: String,
    /// Signed cents offset from the nearest note.
    pub cents: f64,
    /// Display glyph for the offset.
    pub sign: Sign,
    /// Shared odd multiples with the base.
    pub odd: usize,
    /// Shared even multiples with the base.
    pub even: usize,
    /// Total shared multiples; the ranking key.
    pub total: usize,
}

/// Ranked scan results for a base frequency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Base frequency in Hz.
    pub freq: f64,
    /// Number of candidates above the threshold before limiting.
    pub total_candidates: usize,
    /// Display limit that was applied.
    pub limit: usize,
    /// The top candidates, ranked by total shared multiples.
    pub candidates: Vec<ScanCandidate>,
}

/// Output envelope for the `scan` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScanOutput {
    /// Whether the command succeeded.
    pub ok: bool,
    /// The scan report (present on success).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ScanReport>,
    /// Errors (empty on success).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
}

impl ScanOutput {
    /// Creates a successful output.
    pub fn success(result: ScanReport) -> Self {
        Self {
            ok: true,
            result: Some(result),
            errors: Vec::new(),
        }
    }

    /// Creates a failed output with errors.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            ok: false,
            result: None,
            errors,
        }
    }
}
