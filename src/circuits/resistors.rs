//! Resistor combination and dissipation.

use crate::math::{ratio_or_unbounded, reciprocal_sum_inverse, Scalar};

/// Equivalent resistance in ohms of `resistors` connected in parallel.
///
/// Empty input yields `0.0`. Zero-valued entries are left out of the
/// reciprocal sum, so a list made only of zeros evaluates to
/// [`crate::math::UNBOUNDED`] (open circuit) rather than a short.
#[must_use]
pub fn parallel_resistors(resistors: &[Scalar]) -> Scalar {
    reciprocal_sum_inverse(resistors)
}

/// Equivalent resistance in ohms of `resistors` connected in series.
#[must_use]
pub fn series_resistors(resistors: &[Scalar]) -> Scalar {
    resistors.iter().sum()
}

/// Power in watts dissipated by `resistance` ohms with `voltage` volts across it.
///
/// A zero resistance yields [`crate::math::UNBOUNDED`].
#[must_use]
pub fn resistor_power(voltage: Scalar, resistance: Scalar) -> Scalar {
    ratio_or_unbounded(voltage.powi(2), resistance)
}
