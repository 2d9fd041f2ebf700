use super::*;

/// absolute resolution of a vector component, 8 decimal places
///
/// also the tolerance band of [`Vector::equals`](super::Vector::equals)
pub const PRECISION: f64 = 1e-8;

const ROUND_SCALE: f64 = 1e8;

/// reject NaN and infinite input, round the rest to [`PRECISION`]
///
/// integral values pass through untouched. every component entering a
/// vector goes through here
pub fn clean(n: f64) -> Result<f64, VecError> {
    if n.is_nan() {
        return Err(VecError::NotANumber);
    }
    if n.is_infinite() {
        return Err(VecError::Infinite);
    }
    if n == n.round() {
        return Ok(n);
    }
    Ok((n * ROUND_SCALE).round() / ROUND_SCALE)
}

#[cfg(test)]
mod test_sanitize {
    use super::*;

    #[test]
    fn test_reject_nan() {
        assert_eq!(clean(f64::NAN), Err(VecError::NotANumber));
    }

    #[test]
    fn test_reject_infinite() {
        assert_eq!(clean(f64::INFINITY), Err(VecError::Infinite));
        assert_eq!(clean(f64::NEG_INFINITY), Err(VecError::Infinite));
    }

    #[test]
    fn test_integral_passes_through() {
        assert_eq!(clean(3.0).unwrap(), 3.0);
        assert_eq!(clean(-42.0).unwrap(), -42.0);
        // large floats are all integral, no rounding applies
        assert_eq!(clean(1e300).unwrap(), 1e300);
    }

    #[test]
    fn test_rounds_to_precision() {
        assert_eq!(clean(0.123456789).unwrap(), 0.12345679);
        assert_eq!(clean(-0.123456789).unwrap(), -0.12345679);
        assert_eq!(clean(1.5).unwrap(), 1.5);
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(clean(0.000000015).unwrap(), 0.00000002);
        assert_eq!(clean(-0.000000015).unwrap(), -0.00000002);
    }

    #[test]
    fn test_below_resolution_becomes_zero() {
        assert_eq!(clean(0.000000004).unwrap(), 0.0);
    }
}
