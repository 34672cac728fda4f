//! Frequency conventions shared by the filter formulas.
//!
//! Every filter in this crate evaluates its response at the angular
//! frequency ω = 2π·f, with `f` given in hertz.

use std::f64::consts::PI;

use crate::math::Scalar;

/// Full turn in radians (2π).
pub const TWO_PI: Scalar = 2.0 * PI;

/// Floor applied to linear magnitudes before taking a logarithm.
pub const MAGNITUDE_FLOOR: Scalar = 1.0e-30;

/// Returns the angular frequency corresponding to a linear frequency `hz`.
#[inline]
#[must_use]
pub fn angular_frequency(hz: Scalar) -> Scalar {
    2.0 * PI * hz
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn angular_frequency_of_one_hertz_is_two_pi() {
        assert_relative_eq!(angular_frequency(1.0), TWO_PI, max_relative = 1.0e-15);
    }
}
