//! Convenience re-exports for lab calculations.

pub use crate::bode::{
    decade_ticks, format_frequency_label, magnitude_db, BodeDataset, BodeLayout, BodeOptions,
    BodePlot, MagnitudeScale,
};
pub use crate::circuits::{
    current_through_voltage_divider, equivalent_capacitance, equivalent_resistance,
    parallel_capacitors, parallel_resistors, resistor_power, series_capacitors, series_resistors,
    transfer_function_voltage_divider, voltage_divider, ConnectionKind,
};
pub use crate::constants::angular_frequency;
pub use crate::errors::{CircuitError, Result};
pub use crate::filters::{
    bandpass_center_frequency, bandpass_delta_angle, bandpass_gain, bandpass_transfer_function,
    highpass_cutoff_frequency, highpass_delta_angle, highpass_gain, highpass_transfer_function,
    lowpass_cutoff_frequency, lowpass_delta_angle, lowpass_gain, lowpass_transfer_function,
    FrequencyResponse, RcHighpass, RcLowpass, ResponsePoint, RlcBandpass,
};
pub use crate::math::{CScalar, Scalar, UNBOUNDED};
pub use crate::measurement::percent_error;
pub use crate::sweep::{bode_dataset, frequency_sweep, logspace_hz};
