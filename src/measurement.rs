//! Comparing measurements against theory.

use crate::math::{ratio_or_unbounded, Scalar};

/// Percent error `|(measured − theoretical) / theoretical| · 100`.
///
/// A zero `theoretical` yields [`crate::math::UNBOUNDED`].
#[must_use]
pub fn percent_error(measured: Scalar, theoretical: Scalar) -> Scalar {
    ratio_or_unbounded(measured - theoretical, theoretical).abs() * 100.0
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn exact_measurement_has_no_error() {
        for m in [-3.0, 0.5, 1.0e-9, 470.0] {
            assert_eq!(percent_error(m, m), 0.0);
        }
    }

    #[test]
    fn error_is_relative_to_theory() {
        assert_relative_eq!(percent_error(105.0, 100.0), 5.0, max_relative = 1e-12);
        assert_relative_eq!(percent_error(95.0, 100.0), 5.0, max_relative = 1e-12);
        assert_relative_eq!(percent_error(-9.0, -10.0), 10.0, max_relative = 1e-12);
    }

    #[test]
    fn zero_theory_is_unbounded() {
        assert_eq!(percent_error(3.3, 0.0), f64::INFINITY);
        assert_eq!(percent_error(-3.3, 0.0), f64::INFINITY);
    }
}
