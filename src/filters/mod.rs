//! RC and RLC filter frequency responses.
//!
//! Each family exposes four free functions (transfer function, gain, phase,
//! characteristic frequency) evaluated at ω = 2π·f. Gain and phase come from
//! their closed forms rather than from the complex transfer value. Zero
//! component values are not guarded: the IEEE result (∞ or NaN) propagates.
//!
//! The [`FrequencyResponse`] trait wraps the same formulas behind small value
//! types so sweeps can be written once for every family.

use crate::math::{CScalar, Scalar};

/// Series RLC bandpass filter.
pub mod bandpass;
/// First-order RC highpass filter.
pub mod highpass;
/// First-order RC lowpass filter.
pub mod lowpass;

pub use bandpass::{
    bandpass_center_frequency, bandpass_delta_angle, bandpass_gain, bandpass_transfer_function,
    RlcBandpass,
};
pub use highpass::{
    highpass_cutoff_frequency, highpass_delta_angle, highpass_gain, highpass_transfer_function,
    RcHighpass,
};
pub use lowpass::{
    lowpass_cutoff_frequency, lowpass_delta_angle, lowpass_gain, lowpass_transfer_function,
    RcLowpass,
};

/// Response of a linear filter evaluated at a single frequency.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponsePoint {
    /// Frequency in hertz.
    pub frequency_hz: Scalar,
    /// Complex transfer value H(f).
    pub response: CScalar,
    /// Closed-form gain |H(f)|.
    pub gain: Scalar,
    /// Closed-form phase shift in radians.
    pub phase_rad: Scalar,
}

/// Trait implemented by every filter family in this crate.
pub trait FrequencyResponse {
    /// Complex transfer value H(f) at `f_hz` hertz.
    fn transfer(&self, f_hz: Scalar) -> CScalar;

    /// Gain |H(f)| at `f_hz` hertz.
    fn gain(&self, f_hz: Scalar) -> Scalar;

    /// Phase shift in radians at `f_hz` hertz.
    fn phase(&self, f_hz: Scalar) -> Scalar;

    /// Cutoff (first order) or center (bandpass) frequency in hertz.
    fn characteristic_frequency(&self) -> Scalar;

    /// Evaluates every quantity at `f_hz`.
    fn sample(&self, f_hz: Scalar) -> ResponsePoint {
        ResponsePoint {
            frequency_hz: f_hz,
            response: self.transfer(f_hz),
            gain: self.gain(f_hz),
            phase_rad: self.phase(f_hz),
        }
    }
}
