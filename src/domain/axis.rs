// Axis bound rounding for chart scaling
use crate::domain::error::DataError;

/// Gridline spacing for the temperature charts, in degrees.
pub const AXIS_BASE: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundDirection {
    Down,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    /// Compute both bounds of a value axis so the data range sits inside
    /// rounded gridlines.
    pub fn of(values: &[f64], base: f64) -> Result<AxisBounds, DataError> {
        Ok(AxisBounds {
            min: scale_bound(values, base, RoundDirection::Down)?,
            max: scale_bound(values, base, RoundDirection::Up)?,
        })
    }
}

/// Round the series extreme to the nearest multiple of `base`, then nudge
/// it outward if rounding landed inside the data range. The result is
/// always a multiple of `base` enclosing the extreme.
pub fn scale_bound(
    values: &[f64],
    base: f64,
    direction: RoundDirection,
) -> Result<f64, DataError> {
    if values.is_empty() {
        return Err(DataError::EmptySeries);
    }

    let extreme = match direction {
        RoundDirection::Down => values.iter().copied().fold(f64::INFINITY, f64::min),
        RoundDirection::Up => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    };

    let mut bound = (extreme / base).round() * base;
    match direction {
        RoundDirection::Down if bound > extreme => bound -= base,
        RoundDirection::Up if bound < extreme => bound += base,
        _ => {}
    }

    Ok(bound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_enclose_range() {
        let bounds = AxisBounds::of(&[16.2, 23.7], 5.0).unwrap();
        assert_eq!(bounds.min, 15.0);
        assert_eq!(bounds.max, 25.0);
    }

    #[test]
    fn test_exact_multiple_needs_no_adjustment() {
        let bounds = AxisBounds::of(&[20.0], 5.0).unwrap();
        assert_eq!(bounds.min, 20.0);
        assert_eq!(bounds.max, 20.0);
    }

    #[test]
    fn test_halfway_extreme_steps_outward() {
        // 17.5 rounds to 20, which is above the minimum; the lower bound
        // must step back down to 15.
        assert_eq!(
            scale_bound(&[17.5, 19.0], 5.0, RoundDirection::Down).unwrap(),
            15.0
        );
        // 22.5 rounds to 25, already above the maximum.
        assert_eq!(
            scale_bound(&[19.0, 22.5], 5.0, RoundDirection::Up).unwrap(),
            25.0
        );
    }

    #[test]
    fn test_bounds_are_multiples_of_base() {
        let series = [7.3, 11.9, 3.2, 18.6];
        for base in [1.0, 2.0, 5.0, 10.0] {
            let bounds = AxisBounds::of(&series, base).unwrap();
            assert_eq!(bounds.min % base, 0.0);
            assert_eq!(bounds.max % base, 0.0);
            assert!(bounds.min <= 3.2);
            assert!(bounds.max >= 18.6);
        }
    }

    #[test]
    fn test_negative_values() {
        let bounds = AxisBounds::of(&[-7.2, 3.1], 5.0).unwrap();
        assert_eq!(bounds.min, -10.0);
        assert_eq!(bounds.max, 5.0);
    }

    #[test]
    fn test_empty_series_is_an_error() {
        assert!(matches!(
            scale_bound(&[], 5.0, RoundDirection::Down),
            Err(DataError::EmptySeries)
        ));
        assert!(matches!(AxisBounds::of(&[], 5.0), Err(DataError::EmptySeries)));
    }
}
