//! Resistive voltage dividers.
//!
//! Resistors are listed from the input node toward ground. A chain of `n`
//! resistors has `n + 1` nodes; the functions here report the `n - 1`
//! intermediate nodes, leaving out both the input node and ground.

use crate::circuits::resistors::series_resistors;
use crate::math::{ratio_or_unbounded, Scalar};

/// Node voltages in volts below each resistor except the last one.
///
/// For every resistor `r` but the last, the drop `r / remaining * v_in` is
/// subtracted from the running voltage and recorded, then `r` is removed from
/// `remaining`, which starts as the total chain resistance. A single resistor
/// (or none) yields an empty vector.
#[must_use]
pub fn voltage_divider(v_in: Scalar, resistors: &[Scalar]) -> Vec<Scalar> {
    let Some((_, upper)) = resistors.split_last() else {
        return Vec::new();
    };
    let mut remaining = series_resistors(resistors);
    let mut v_out = v_in;
    let mut voltages = Vec::with_capacity(upper.len());
    for &r in upper {
        v_out -= (r / remaining) * v_in;
        voltages.push(v_out);
        remaining -= r;
    }
    voltages
}

/// Current in amperes through the chain.
///
/// Zero total resistance yields [`crate::math::UNBOUNDED`].
#[must_use]
pub fn current_through_voltage_divider(v_in: Scalar, resistors: &[Scalar]) -> Scalar {
    ratio_or_unbounded(v_in, series_resistors(resistors))
}

/// Voltage ratios for every resistor after the first.
///
/// Each ratio is `r / remaining`, where `remaining` starts at the total chain
/// resistance and shrinks by each resistor once it has been used.
#[must_use]
pub fn transfer_function_voltage_divider(resistors: &[Scalar]) -> Vec<Scalar> {
    let mut remaining = series_resistors(resistors);
    resistors
        .iter()
        .skip(1)
        .map(|&r| {
            let ratio = r / remaining;
            remaining -= r;
            ratio
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn equal_pair_halves_input() {
        let v = voltage_divider(10.0, &[1_000.0, 1_000.0]);
        assert_eq!(v.len(), 1);
        assert_relative_eq!(v[0], 5.0);
    }

    #[test]
    fn unequal_pair_matches_ratio() {
        let v = voltage_divider(12.0, &[2_000.0, 1_000.0]);
        assert_eq!(v.len(), 1);
        assert_relative_eq!(v[0], 4.0, max_relative = 1.0e-12);
    }

    #[test]
    fn output_arity_drops_ground_node() {
        assert!(voltage_divider(5.0, &[]).is_empty());
        assert!(voltage_divider(5.0, &[1_000.0]).is_empty());
        assert_eq!(voltage_divider(5.0, &[1.0, 2.0, 3.0, 4.0]).len(), 3);
    }

    #[test]
    fn drop_is_scaled_by_input_voltage() {
        let v = voltage_divider(3.0, &[1.0, 1.0, 1.0]);
        assert_eq!(v.len(), 2);
        assert_relative_eq!(v[0], 2.0, max_relative = 1.0e-12);
        assert_relative_eq!(v[1], 0.5, max_relative = 1.0e-12);
    }

    #[test]
    fn current_is_input_over_total() {
        assert_relative_eq!(
            current_through_voltage_divider(9.0, &[1_000.0, 2_000.0]),
            0.003
        );
        assert_eq!(current_through_voltage_divider(9.0, &[0.0, 0.0]), f64::INFINITY);
        assert_eq!(current_through_voltage_divider(9.0, &[]), f64::INFINITY);
    }

    #[test]
    fn transfer_ratios_skip_first_resistor() {
        let tf = transfer_function_voltage_divider(&[1_000.0, 2_000.0, 3_000.0]);
        assert_eq!(tf.len(), 2);
        assert_relative_eq!(tf[0], 2_000.0 / 6_000.0, max_relative = 1.0e-12);
        assert_relative_eq!(tf[1], 3_000.0 / 4_000.0, max_relative = 1.0e-12);
    }

    #[test]
    fn transfer_ratios_of_short_chains_are_empty() {
        assert!(transfer_function_voltage_divider(&[]).is_empty());
        assert!(transfer_function_voltage_divider(&[100.0]).is_empty());
    }
}
