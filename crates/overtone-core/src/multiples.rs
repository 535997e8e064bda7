//! Bounded odd/even multiple series generation.

use serde::{Deserialize, Serialize};

use crate::error::{OvertoneError, OvertoneResult};

/// Upper bound for generated multiples, in Hz.
pub const FREQUENCY_CEILING: f64 = 20000.0;

/// Which multiplier sequence a series uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    /// Multipliers 1, 3, 5, ...
    Odd,
    /// Multipliers 2, 4, 6, ...
    Even,
}

impl Parity {
    /// First multiplier of the sequence (1 for odd, 2 for even).
    pub fn start_multiplier(self) -> u64 {
        match self {
            Parity::Odd => 1,
            Parity::Even => 2,
        }
    }
}

/// Generate the odd or even multiples of `base` up to [`FREQUENCY_CEILING`].
///
/// Each element is computed as the single product `base * multiplier` so that
/// equal multiples of related frequencies produce bit-identical doubles;
/// overlap counting depends on this.
///
/// # Arguments
/// * `base` - Base frequency in Hz, must be positive
/// * `parity` - Whether to step odd or even multipliers
///
/// # Returns
/// The strictly increasing series of multiples `<= 20000`, empty when even
/// the first multiple exceeds the ceiling, or
/// [`OvertoneError::InvalidBaseFrequency`] if `base` is not a positive
/// finite number.
///
/// # Examples
/// ```
/// use overtone_core::multiples::{multiple_series, Parity};
///
/// let odd = multiple_series(220.0, Parity::Odd).unwrap();
/// assert_eq!(&odd[..3], &[220.0, 660.0, 1100.0]);
///
/// let even = multiple_series(220.0, Parity::Even).unwrap();
/// assert_eq!(&even[..2], &[440.0, 880.0]);
/// ```
pub fn multiple_series(base: f64, parity: Parity) -> OvertoneResult<Vec<f64>> {
    if !base.is_finite() || base <= 0.0 {
        return Err(OvertoneError::InvalidBaseFrequency { freq: base });
    }

    let mut multiples = Vec::new();
    let mut multiplier = parity.start_multiplier();

    loop {
        let result = base * multiplier as f64;
        if result > FREQUENCY_CEILING {
            break;
        }
        multiples.push(result);
        multiplier += 2;
    }

    Ok(multiples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_series_of_220() {
        let series = multiple_series(220.0, Parity::Odd).unwrap();
        assert_eq!(&series[..3], &[220.0, 660.0, 1100.0]);
        // Last odd multiplier within the ceiling is 89: 220 * 89 = 19580.
        assert_eq!(*series.last().unwrap(), 19580.0);
        assert_eq!(series.len(), 45);
    }

    #[test]
    fn test_even_series_of_220() {
        let series = multiple_series(220.0, Parity::Even).unwrap();
        assert_eq!(&series[..2], &[440.0, 880.0]);
        // Last even multiplier within the ceiling is 90: 220 * 90 = 19800.
        assert_eq!(*series.last().unwrap(), 19800.0);
        assert_eq!(series.len(), 45);
    }

    #[test]
    fn test_elements_are_parity_multiples_within_bound() {
        for (parity, remainder) in [(Parity::Odd, 1), (Parity::Even, 0)] {
            let series = multiple_series(27.5, parity).unwrap();
            assert!(!series.is_empty());
            for &value in &series {
                assert!(value <= FREQUENCY_CEILING);
                let ratio = value / 27.5;
                assert_eq!(ratio.fract(), 0.0, "{value} is not an exact multiple");
                assert_eq!(ratio as u64 % 2, remainder);
            }
        }
    }

    #[test]
    fn test_strictly_increasing() {
        let series = multiple_series(33.33, Parity::Odd).unwrap();
        for pair in series.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_empty_iff_first_multiple_exceeds_ceiling() {
        assert!(multiple_series(20001.0, Parity::Odd).unwrap().is_empty());
        // 2 * 10000.5 = 20001 > 20000, but the odd series still holds the base.
        assert!(multiple_series(10000.5, Parity::Even).unwrap().is_empty());
        assert_eq!(
            multiple_series(10000.5, Parity::Odd).unwrap(),
            vec![10000.5]
        );
    }

    #[test]
    fn test_ceiling_is_inclusive() {
        assert_eq!(
            multiple_series(20000.0, Parity::Odd).unwrap(),
            vec![20000.0]
        );
        assert_eq!(
            multiple_series(10000.0, Parity::Even).unwrap(),
            vec![20000.0]
        );
    }

    #[test]
    fn test_invalid_base() {
        for base in [0.0, -220.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                multiple_series(base, Parity::Odd),
                Err(OvertoneError::InvalidBaseFrequency { .. })
            ));
        }
    }
}
