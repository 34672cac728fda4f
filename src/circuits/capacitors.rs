//! Capacitor combination. Series and parallel rules are the resistor rules
//! swapped.

use crate::math::{reciprocal_sum_inverse, Scalar};

/// Equivalent capacitance in farads of `capacitors` connected in parallel.
#[must_use]
pub fn parallel_capacitors(capacitors: &[Scalar]) -> Scalar {
    capacitors.iter().sum()
}

/// Equivalent capacitance in farads of `capacitors` connected in series.
///
/// Empty input yields `0.0`; zero entries are skipped and an all-zero list
/// yields [`crate::math::UNBOUNDED`].
#[must_use]
pub fn series_capacitors(capacitors: &[Scalar]) -> Scalar {
    reciprocal_sum_inverse(capacitors)
}
