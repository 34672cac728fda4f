use num_complex::Complex;

use crate::constants::{angular_frequency, TWO_PI};
use crate::math::{CScalar, Scalar};

use super::FrequencyResponse;

/// Transfer function H(f) = 1 / (1 + jωRC).
#[must_use]
pub fn lowpass_transfer_function(r: Scalar, c: Scalar, f: Scalar) -> CScalar {
    let omega = angular_frequency(f);
    1.0 / Complex::new(1.0, omega * r * c)
}

/// Gain 1 / √(1 + (ωRC)²).
#[must_use]
pub fn lowpass_gain(r: Scalar, c: Scalar, f: Scalar) -> Scalar {
    let omega = angular_frequency(f);
    1.0 / (1.0 + (omega * r * c).powi(2)).sqrt()
}

/// Phase shift −atan(ωRC) in radians.
#[must_use]
pub fn lowpass_delta_angle(r: Scalar, c: Scalar, f: Scalar) -> Scalar {
    let omega = angular_frequency(f);
    -(omega * r * c).atan()
}

/// −3 dB frequency 1 / (2πRC) in hertz.
#[must_use]
pub fn lowpass_cutoff_frequency(r: Scalar, c: Scalar) -> Scalar {
    1.0 / (TWO_PI * r * c)
}

/// RC lowpass with the output taken across the capacitor.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RcLowpass {
    /// Series resistance in ohms.
    pub resistance: Scalar,
    /// Shunt capacitance in farads.
    pub capacitance: Scalar,
}

impl RcLowpass {
    /// Creates a lowpass from `resistance` ohms and `capacitance` farads.
    #[must_use]
    pub const fn new(resistance: Scalar, capacitance: Scalar) -> Self {
        Self {
            resistance,
            capacitance,
        }
    }
}

impl FrequencyResponse for RcLowpass {
    fn transfer(&self, f_hz: Scalar) -> CScalar {
        lowpass_transfer_function(self.resistance, self.capacitance, f_hz)
    }

    fn gain(&self, f_hz: Scalar) -> Scalar {
        lowpass_gain(self.resistance, self.capacitance, f_hz)
    }

    fn phase(&self, f_hz: Scalar) -> Scalar {
        lowpass_delta_angle(self.resistance, self.capacitance, f_hz)
    }

    fn characteristic_frequency(&self) -> Scalar {
        lowpass_cutoff_frequency(self.resistance, self.capacitance)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_4};

    use super::*;

    const R: f64 = 1_000.0;
    const C: f64 = 100e-9;

    #[test]
    fn cutoff_matches_closed_form() {
        assert_relative_eq!(
            lowpass_cutoff_frequency(R, C),
            1_591.549_430_918_953_4,
            max_relative = 1.0e-12
        );
    }

    #[test]
    fn half_power_at_cutoff() {
        let fc = lowpass_cutoff_frequency(R, C);
        assert_relative_eq!(lowpass_gain(R, C, fc), FRAC_1_SQRT_2, max_relative = 1.0e-12);
        assert_relative_eq!(lowpass_delta_angle(R, C, fc), -FRAC_PI_4, max_relative = 1.0e-12);
    }

    #[test]
    fn dc_passes_unchanged() {
        let h = lowpass_transfer_function(R, C, 0.0);
        assert_relative_eq!(h.re, 1.0);
        assert_relative_eq!(h.im, 0.0);
        assert_relative_eq!(lowpass_gain(R, C, 0.0), 1.0);
    }

    #[test]
    fn complex_magnitude_and_angle_agree_with_closed_forms() {
        for f in [10.0, 500.0, 1_591.5, 20_000.0, 1.0e6] {
            let h = lowpass_transfer_function(R, C, f);
            assert_relative_eq!(h.norm(), lowpass_gain(R, C, f), max_relative = 1.0e-9);
            assert_relative_eq!(h.arg(), lowpass_delta_angle(R, C, f), max_relative = 1.0e-9);
        }
    }

    #[test]
    fn value_type_delegates_to_free_functions() {
        let filter = RcLowpass::new(R, C);
        let point = filter.sample(2_000.0);
        assert_eq!(point.gain, lowpass_gain(R, C, 2_000.0));
        assert_eq!(point.phase_rad, lowpass_delta_angle(R, C, 2_000.0));
        assert_eq!(filter.characteristic_frequency(), lowpass_cutoff_frequency(R, C));
    }
}
