use num_complex::Complex;

use crate::constants::{angular_frequency, TWO_PI};
use crate::math::{CScalar, Scalar};

use super::FrequencyResponse;

/// Transfer function H(f) = jωRC / (1 + jωRC).
#[must_use]
pub fn highpass_transfer_function(r: Scalar, c: Scalar, f: Scalar) -> CScalar {
    let omega = angular_frequency(f);
    let jwrc = Complex::new(0.0, omega * r * c);
    jwrc / (1.0 + jwrc)
}

/// Gain ωRC / √(1 + (ωRC)²).
#[must_use]
pub fn highpass_gain(r: Scalar, c: Scalar, f: Scalar) -> Scalar {
    let omega = angular_frequency(f);
    (omega * r * c) / (1.0 + (omega * r * c).powi(2)).sqrt()
}

/// Phase shift atan(1 / ωRC) in radians.
#[must_use]
pub fn highpass_delta_angle(r: Scalar, c: Scalar, f: Scalar) -> Scalar {
    let omega = angular_frequency(f);
    (1.0 / (omega * r * c)).atan()
}

/// −3 dB frequency 1 / (2πRC) in hertz, shared with the lowpass.
#[must_use]
pub fn highpass_cutoff_frequency(r: Scalar, c: Scalar) -> Scalar {
    1.0 / (TWO_PI * r * c)
}

/// RC highpass with the output taken across the resistor.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RcHighpass {
    /// Shunt resistance in ohms.
    pub resistance: Scalar,
    /// Series capacitance in farads.
    pub capacitance: Scalar,
}

impl RcHighpass {
    /// Creates a highpass from `resistance` ohms and `capacitance` farads.
    #[must_use]
    pub const fn new(resistance: Scalar, capacitance: Scalar) -> Self {
        Self {
            resistance,
            capacitance,
        }
    }
}

impl FrequencyResponse for RcHighpass {
    fn transfer(&self, f_hz: Scalar) -> CScalar {
        highpass_transfer_function(self.resistance, self.capacitance, f_hz)
    }

    fn gain(&self, f_hz: Scalar) -> Scalar {
        highpass_gain(self.resistance, self.capacitance, f_hz)
    }

    fn phase(&self, f_hz: Scalar) -> Scalar {
        highpass_delta_angle(self.resistance, self.capacitance, f_hz)
    }

    fn characteristic_frequency(&self) -> Scalar {
        highpass_cutoff_frequency(self.resistance, self.capacitance)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_4};

    use super::*;
    use crate::filters::lowpass::{lowpass_cutoff_frequency, lowpass_gain};

    const R: f64 = 4_700.0;
    const C: f64 = 22e-9;

    #[test]
    fn shares_cutoff_with_lowpass() {
        assert_eq!(highpass_cutoff_frequency(R, C), lowpass_cutoff_frequency(R, C));
    }

    #[test]
    fn half_power_at_cutoff() {
        let fc = highpass_cutoff_frequency(R, C);
        assert_relative_eq!(highpass_gain(R, C, fc), FRAC_1_SQRT_2, max_relative = 1.0e-12);
        assert_relative_eq!(highpass_delta_angle(R, C, fc), FRAC_PI_4, max_relative = 1.0e-12);
    }

    #[test]
    fn blocks_dc() {
        assert_eq!(highpass_gain(R, C, 0.0), 0.0);
        assert_relative_eq!(highpass_delta_angle(R, C, 0.0), FRAC_PI_2);
    }

    #[test]
    fn complementary_with_lowpass() {
        for f in [1.0, 120.0, 1_539.0, 48_000.0, 2.0e6] {
            let sum = lowpass_gain(R, C, f).powi(2) + highpass_gain(R, C, f).powi(2);
            assert_relative_eq!(sum, 1.0, max_relative = 1.0e-12);
        }
    }

    #[test]
    fn complex_magnitude_and_angle_agree_with_closed_forms() {
        for f in [10.0, 500.0, 1_539.0, 20_000.0, 1.0e6] {
            let h = highpass_transfer_function(R, C, f);
            assert_relative_eq!(h.norm(), highpass_gain(R, C, f), max_relative = 1.0e-9);
            assert_relative_eq!(h.arg(), highpass_delta_angle(R, C, f), max_relative = 1.0e-9);
        }
    }
}
