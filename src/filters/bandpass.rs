use num_complex::Complex;

use crate::constants::{angular_frequency, TWO_PI};
use crate::math::{CScalar, Scalar};

use super::FrequencyResponse;

/// Transfer function H(f) = (jωL/R) / (1 − ω²LC + jωL/R).
#[must_use]
pub fn bandpass_transfer_function(r: Scalar, l: Scalar, c: Scalar, f: Scalar) -> CScalar {
    let omega = angular_frequency(f);
    let numerator = Complex::new(0.0, omega * l / r);
    let denominator = Complex::new(1.0 - omega.powi(2) * l * c, omega * l / r);
    numerator / denominator
}

/// Gain (ωL/R) / √((1 − ω²LC)² + (ωL/R)²).
#[must_use]
pub fn bandpass_gain(r: Scalar, l: Scalar, c: Scalar, f: Scalar) -> Scalar {
    let omega = angular_frequency(f);
    let numerator = omega * l / r;
    let denominator = ((1.0 - omega.powi(2) * l * c).powi(2) + (omega * l / r).powi(2)).sqrt();
    numerator / denominator
}

/// Phase shift atan((ωL/R) / (1 − ω²LC)) in radians.
///
/// This is a single-argument arctangent, so the result stays within
/// (−π/2, π/2) and flips sign when crossing the center frequency.
#[must_use]
pub fn bandpass_delta_angle(r: Scalar, l: Scalar, c: Scalar, f: Scalar) -> Scalar {
    let omega = angular_frequency(f);
    ((omega * l / r) / (1.0 - omega.powi(2) * l * c)).atan()
}

/// Center (resonant) frequency 1 / (2π√(LC)) in hertz.
#[must_use]
pub fn bandpass_center_frequency(l: Scalar, c: Scalar) -> Scalar {
    1.0 / (TWO_PI * (l * c).sqrt())
}

/// Series RLC bandpass.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RlcBandpass {
    /// Resistance in ohms.
    pub resistance: Scalar,
    /// Inductance in henrys.
    pub inductance: Scalar,
    /// Capacitance in farads.
    pub capacitance: Scalar,
}

impl RlcBandpass {
    /// Creates a bandpass from `resistance` ohms, `inductance` henrys and
    /// `capacitance` farads.
    #[must_use]
    pub const fn new(resistance: Scalar, inductance: Scalar, capacitance: Scalar) -> Self {
        Self {
            resistance,
            inductance,
            capacitance,
        }
    }
}

impl FrequencyResponse for RlcBandpass {
    fn transfer(&self, f_hz: Scalar) -> CScalar {
        bandpass_transfer_function(self.resistance, self.inductance, self.capacitance, f_hz)
    }

    fn gain(&self, f_hz: Scalar) -> Scalar {
        bandpass_gain(self.resistance, self.inductance, self.capacitance, f_hz)
    }

    fn phase(&self, f_hz: Scalar) -> Scalar {
        bandpass_delta_angle(self.resistance, self.inductance, self.capacitance, f_hz)
    }

    fn characteristic_frequency(&self) -> Scalar {
        bandpass_center_frequency(self.inductance, self.capacitance)
    }
}
