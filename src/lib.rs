#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Frequency conventions and numeric floors.
pub mod constants;
/// Scalar aliases and the zero-denominator conventions.
pub mod math;
/// Resistor and capacitor networks, voltage dividers.
pub mod circuits;
/// RC lowpass/highpass and RLC bandpass responses.
pub mod filters;
/// Frequency grids and filter sweeps.
pub mod sweep;
/// Bode plot preparation and rendering.
pub mod bode;
/// Percent error between measurement and theory.
pub mod measurement;
/// Error types shared across modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
