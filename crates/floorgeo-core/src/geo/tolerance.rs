//! Tolerance-based float comparison.

/// Relative and absolute tolerance used for all approximate comparisons.
pub const TOLERANCE: f64 = 1e-6;

/// Compare two floats with a combined relative and absolute tolerance.
///
/// Values are considered equal when `|a - b| < max(tol, tol * max(|a|, |b|))`.
/// Near zero the absolute bound applies, for large magnitudes the relative one.
#[inline]
pub fn almost_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < TOLERANCE.max(TOLERANCE * a.abs().max(b.abs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_values() {
        assert!(almost_eq(0.0, 0.0));
        assert!(almost_eq(47.188770353504495, 47.188770353504495));
    }

    #[test]
    fn test_absolute_tolerance_near_zero() {
        assert!(almost_eq(0.0, 5e-7));
        assert!(!almost_eq(0.0, 2e-6));
    }

    #[test]
    fn test_relative_tolerance_large_values() {
        // tol * 1000 = 1e-3
        assert!(almost_eq(1000.0, 1000.0005));
        assert!(!almost_eq(1000.0, 1000.002));
    }

    #[test]
    fn test_symmetry() {
        assert_eq!(almost_eq(1.0, 1.0 + 9e-7), almost_eq(1.0 + 9e-7, 1.0));
        assert_eq!(almost_eq(-3.0, 3.0), almost_eq(3.0, -3.0));
    }

    #[test]
    fn test_sign_matters() {
        assert!(!almost_eq(8.68, -8.68));
    }
}
