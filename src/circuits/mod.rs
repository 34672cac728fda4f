//! Resistor and capacitor networks and resistive dividers.

/// Capacitor combination rules.
pub mod capacitors;
/// Resistive voltage dividers.
pub mod dividers;
/// Series/parallel dispatch by connection kind.
pub mod network;
/// Resistor combination and power.
pub mod resistors;

pub use capacitors::{parallel_capacitors, series_capacitors};
pub use dividers::{
    current_through_voltage_divider, transfer_function_voltage_divider, voltage_divider,
};
pub use network::{equivalent_capacitance, equivalent_resistance, ConnectionKind};
pub use resistors::{parallel_resistors, resistor_power, series_resistors};
