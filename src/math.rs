//! Shared numerical primitives and the degenerate-input conventions.

use log::trace;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Primary complex scalar type used for transfer values.
pub type CScalar = num_complex::Complex<Scalar>;

/// Value returned when a zero denominator makes a physical quantity unbounded
/// (open circuit, short-circuit current, undefined relative error).
pub const UNBOUNDED: Scalar = Scalar::INFINITY;

/// Reciprocal of the sum of reciprocals of the nonzero entries of `values`.
///
/// Shared by parallel resistance and series capacitance:
/// - empty input yields `0.0`;
/// - zero entries are skipped while accumulating;
/// - a zero reciprocal sum (every entry zero) yields [`UNBOUNDED`].
#[must_use]
pub fn reciprocal_sum_inverse(values: &[Scalar]) -> Scalar {
    if values.is_empty() {
        return 0.0;
    }
    let reciprocal_sum: Scalar = values
        .iter()
        .filter(|&&v| v != 0.0)
        .map(|&v| 1.0 / v)
        .sum();
    if reciprocal_sum == 0.0 {
        trace!("reciprocal sum of {} values is zero, returning +inf", values.len());
        return UNBOUNDED;
    }
    1.0 / reciprocal_sum
}

/// Divides `numerator` by `denominator`, mapping an exactly zero denominator
/// to [`UNBOUNDED`].
#[inline]
#[must_use]
pub fn ratio_or_unbounded(numerator: Scalar, denominator: Scalar) -> Scalar {
    if denominator == 0.0 {
        trace!("zero denominator for numerator {numerator}, returning +inf");
        UNBOUNDED
    } else {
        numerator / denominator
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn reciprocal_sum_inverse_of_equal_values_halves() {
        assert_relative_eq!(reciprocal_sum_inverse(&[100.0, 100.0]), 50.0);
    }

    #[test]
    fn reciprocal_sum_inverse_skips_zero_entries() {
        assert_relative_eq!(reciprocal_sum_inverse(&[0.0, 100.0]), 100.0);
    }

    #[test]
    fn reciprocal_sum_inverse_edge_cases() {
        assert_eq!(reciprocal_sum_inverse(&[]), 0.0);
        assert_eq!(reciprocal_sum_inverse(&[0.0, 0.0]), UNBOUNDED);
    }

    #[test]
    fn ratio_or_unbounded_guards_zero() {
        assert_eq!(ratio_or_unbounded(5.0, 0.0), UNBOUNDED);
        assert_eq!(ratio_or_unbounded(0.0, 0.0), UNBOUNDED);
        assert_relative_eq!(ratio_or_unbounded(5.0, 2.0), 2.5);
    }
}
