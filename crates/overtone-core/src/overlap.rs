//! Shared-multiple counting between two frequencies.
//!
//! Overlap detection relies on exact floating-point equality: multiples are
//! always computed as the single product `base * multiplier`, so two
//! frequencies that share a harmonic through different scaling factors
//! produce bit-identical doubles (e.g. `220.0 * 3 == 110.0 * 6 == 660.0`).
//! Membership is therefore tested on `f64::to_bits` keys, which is the same
//! relation as value equality here: series elements are never NaN and are
//! strictly positive, so no +0.0/-0.0 split can occur.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::OvertoneResult;
use crate::multiples::{multiple_series, Parity};

/// Cardinalities of the per-parity multiple intersections of two frequencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapCount {
    /// Number of shared odd multiples.
    pub odd: usize,
    /// Number of shared even multiples.
    pub even: usize,
    /// Sum of the two counts.
    pub total: usize,
}

/// The odd and even multiple sets of one base frequency.
///
/// Building the sets once and counting many other frequencies against them
/// is what the range scanner does; the result is identical to calling
/// [`count_common`] per pair.
#[derive(Debug, Clone)]
pub struct MultipleSets {
    odd: HashSet<u64>,
    even: HashSet<u64>,
}

impl MultipleSets {
    /// Build the multiple sets for `base`.
    ///
    /// # Errors
    /// Returns [`crate::OvertoneError::InvalidBaseFrequency`] if `base` is
    /// not a positive finite number.
    pub fn new(base: f64) -> OvertoneResult<Self> {
        let to_bits = |series: Vec<f64>| series.into_iter().map(f64::to_bits).collect();
        Ok(Self {
            odd: to_bits(multiple_series(base, Parity::Odd)?),
            even: to_bits(multiple_series(base, Parity::Even)?),
        })
    }

    /// Count how many of `other`'s multiples fall in these sets, per parity.
    ///
    /// # Errors
    /// Returns [`crate::OvertoneError::InvalidBaseFrequency`] if `other` is
    /// not a positive finite number.
    pub fn count_against(&self, other: f64) -> OvertoneResult<OverlapCount> {
        let odd = multiple_series(other, Parity::Odd)?
            .iter()
            .filter(|value| self.odd.contains(&value.to_bits()))
            .count();
        let even = multiple_series(other, Parity::Even)?
            .iter()
            .filter(|value| self.even.contains(&value.to_bits()))
            .count();

        Ok(OverlapCount {
            odd,
            even,
            total: odd + even,
        })
    }
}

/// Count the odd and even multiples two frequencies have in common.
///
/// # Arguments
/// * `freq_a` - First frequency in Hz, must be positive
/// * `freq_b` - Second frequency in Hz, must be positive
///
/// # Returns
/// The per-parity intersection cardinalities and their sum.
///
/// # Examples
/// ```
/// use overtone_core::overlap::count_common;
///
/// // Every even multiple of 220 is an even multiple of 110.
/// let count = count_common(220.0, 110.0).unwrap();
/// assert_eq!(count.odd, 0);
/// assert_eq!(count.even, 45);
/// assert_eq!(count.total, 45);
/// ```
pub fn count_common(freq_a: f64, freq_b: f64) -> OvertoneResult<OverlapCount> {
    MultipleSets::new(freq_a)?.count_against(freq_b)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::OvertoneError;

    #[test]
    fn test_symmetry() {
        for (a, b) in [(220.0, 110.0), (330.0, 220.0), (27.5, 55.0)] {
            assert_eq!(
                count_common(a, b).unwrap(),
                count_common(b, a).unwrap(),
                "count_common({a}, {b}) is not symmetric"
            );
        }
    }

    #[test]
    fn test_self_overlap_is_full() {
        let base = 100.0;
        let count = count_common(base, base).unwrap();
        assert_eq!(
            count.odd,
            multiple_series(base, Parity::Odd).unwrap().len()
        );
        assert_eq!(
            count.even,
            multiple_series(base, Parity::Even).unwrap().len()
        );
        assert_eq!(count.total, count.odd + count.even);
    }

    #[test]
    fn test_octave_below() {
        // 220's odd multiples are even multiples of 110, so they never meet
        // 110's odd multiples; the even sides coincide completely.
        let count = count_common(220.0, 110.0).unwrap();
        assert_eq!(
            count,
            OverlapCount {
                odd: 0,
                even: 45,
                total: 45
            }
        );
    }

    #[test]
    fn test_octave_above() {
        let count = count_common(220.0, 440.0).unwrap();
        assert_eq!(
            count,
            OverlapCount {
                odd: 0,
                even: 22,
                total: 22
            }
        );
    }

    #[test]
    fn test_fractional_base_octave() {
        // 27.5 and 55 share exactly the even multiples of 55.
        let count = count_common(27.5, 55.0).unwrap();
        assert_eq!(
            count,
            OverlapCount {
                odd: 0,
                even: 181,
                total: 181
            }
        );
    }

    #[test]
    fn test_parity_buckets_are_separate() {
        // 100 * 101 == 101 * 100 == 10100, but the multiplier is odd on one
        // side and even on the other, so it does not count as shared.
        let count = count_common(100.0, 101.0).unwrap();
        assert_eq!(
            count,
            OverlapCount {
                odd: 0,
                even: 0,
                total: 0
            }
        );
    }

    #[test]
    fn test_multiple_sets_match_count_common() {
        let sets = MultipleSets::new(220.0).unwrap();
        assert_eq!(
            sets.count_against(110.0).unwrap(),
            count_common(220.0, 110.0).unwrap()
        );
        assert_eq!(
            sets.count_against(330.0).unwrap(),
            count_common(220.0, 330.0).unwrap()
        );
    }

    #[test]
    fn test_invalid_inputs_propagate() {
        assert!(matches!(
            count_common(0.0, 110.0),
            Err(OvertoneError::InvalidBaseFrequency { .. })
        ));
        assert!(matches!(
            count_common(110.0, -1.0),
            Err(OvertoneError::InvalidBaseFrequency { .. })
        ));
    }
}
