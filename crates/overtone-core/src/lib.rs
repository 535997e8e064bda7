//! Overtone Core - Harmonic Overlap Search and Note Mapping
//!
//! This crate computes musical-note mappings for frequencies and finds
//! frequencies that share harmonic multiples with a given base frequency.
//! All operations are pure, deterministic computations over a bounded
//! frequency domain: multiple series stop at 20000 Hz and the candidate
//! scan covers 20.0 through 8372.02 Hz.
//!
//! # Overview
//!
//! - Odd/even multiple series are generated as `base * multiplier` with the
//!   multiplier stepping by two from 1 (odd) or 2 (even).
//! - Two frequencies "share" a multiple when the computed doubles are
//!   bit-identical; overlap is counted per parity and summed.
//! - The range scanner sweeps the audible band at 0.01 Hz resolution and
//!   ranks candidates by total shared count.
//! - The note resolver maps any frequency to the nearest 12-TET reference
//!   note with a signed cents offset.
//!
//! # Example
//!
//! ```
//! use overtone_core::{count_common, multiple_series, nearest_note, Parity};
//!
//! let odd = multiple_series(220.0, Parity::Odd)?;
//! assert_eq!(odd[1], 660.0);
//!
//! let shared = count_common(220.0, 110.0)?;
//! assert!(shared.total > 0);
//!
//! let note = nearest_note(660.0)?;
//! assert_eq!(note.name, "E5");
//! # Ok::<(), overtone_core::OvertoneError>(())
//! ```
//!
//! # Module Structure
//!
//! - [`note`]: Note table and nearest-note resolution
//! - [`multiples`]: Bounded odd/even multiple series generation
//! - [`overlap`]: Shared-multiple counting between two frequencies
//! - [`scan`]: Range scan ranking frequencies by shared-multiple count

pub mod error;
pub mod multiples;
pub mod note;
pub mod overlap;
pub mod scan;

// Re-export main types
pub use error::{OvertoneError, OvertoneResult};
pub use multiples::{multiple_series, Parity, FREQUENCY_CEILING};
pub use note::{nearest_note, NoteMatch, Sign, NOTE_TABLE};
pub use overlap::{count_common, MultipleSets, OverlapCount};
pub use scan::{scan, Candidate, MIN_SHARED_MULTIPLES, SCAN_RANGE_HIGH, SCAN_RANGE_LOW};

/// Crate version for reporting.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
