//! Range scan ranking frequencies by shared-multiple count.

use serde::{Deserialize, Serialize};

use crate::error::OvertoneResult;
use crate::overlap::MultipleSets;

/// Lower edge of the scanned range, in Hz.
pub const SCAN_RANGE_LOW: f64 = 20.0;

/// Upper edge of the scanned range (the highest table note, C9), in Hz.
pub const SCAN_RANGE_HIGH: f64 = 8372.02;

/// A candidate must share strictly more than this many multiples to be kept.
pub const MIN_SHARED_MULTIPLES: usize = 5;

// The sweep steps an integer centi-Hertz counter and divides at use sites.
// k / 100.0 is the double nearest k/100, the same value per-step decimal
// rounding of an additive sweep settles on, so candidate frequencies land on
// the identical grid without accumulation drift.
const SCAN_LOW_CENTIHZ: u64 = 2_000;
const SCAN_HIGH_CENTIHZ: u64 = 837_202;

/// One scanned frequency that shares multiples with the base.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Candidate frequency in Hz.
    pub freq: f64,
    /// Number of shared odd multiples.
    pub odd: usize,
    /// Number of shared even multiples.
    pub even: usize,
    /// Total shared multiples; the ranking key.
    pub total: usize,
}

/// Scan [20.0, 8372.02] Hz at 0.01 Hz resolution for frequencies sharing
/// more than [`MIN_SHARED_MULTIPLES`] multiples with `base`.
///
/// The base frequency itself is skipped when it falls on the scan grid.
/// Results are sorted descending by total shared count; equal counts keep
/// ascending-frequency scan order. No truncation is applied here; limiting
/// to a top-N is the caller's concern.
///
/// # Arguments
/// * `base` - Base frequency in Hz, must be positive
///
/// # Returns
/// The ranked candidates, or [`crate::OvertoneError::InvalidBaseFrequency`]
/// if `base` is not a positive finite number.
pub fn scan(base: f64) -> OvertoneResult<Vec<Candidate>> {
    scan_range(base, SCAN_LOW_CENTIHZ, SCAN_HIGH_CENTIHZ)
}

fn scan_range(base: f64, low_centihz: u64, high_centihz: u64) -> OvertoneResult<Vec<Candidate>> {
    let base_sets = MultipleSets::new(base)?;
    let mut candidates = Vec::new();

    for centihz in low_centihz..=high_centihz {
        let freq = centihz as f64 / 100.0;
        if freq == base {
            continue;
        }
        let count = base_sets.count_against(freq)?;
        if count.total > MIN_SHARED_MULTIPLES {
            candidates.push(Candidate {
                freq,
                odd: count.odd,
                even: count.even,
                total: count.total,
            });
        }
    }

    // Stable sort: ties keep the ascending-frequency scan order.
    candidates.sort_by(|a, b| b.total.cmp(&a.total));

    Ok(candidates)
}
