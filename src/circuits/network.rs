use crate::math::Scalar;

use super::capacitors::{parallel_capacitors, series_capacitors};
use super::resistors::{parallel_resistors, series_resistors};

/// Connection topology for a collection of like components.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionKind {
    /// Series connection (resistances add, elastances add).
    Series,
    /// Parallel connection (conductances add, capacitances add).
    Parallel,
}

impl ConnectionKind {
    /// Returns the other topology. Capacitors combine like resistors under
    /// the dual connection.
    #[must_use]
    pub const fn dual(self) -> Self {
        match self {
            Self::Series => Self::Parallel,
            Self::Parallel => Self::Series,
        }
    }
}

/// Equivalent resistance in ohms of `resistors` joined by `connection`.
#[must_use]
pub fn equivalent_resistance(connection: ConnectionKind, resistors: &[Scalar]) -> Scalar {
    match connection {
        ConnectionKind::Series => series_resistors(resistors),
        ConnectionKind::Parallel => parallel_resistors(resistors),
    }
}

/// Equivalent capacitance in farads of `capacitors` joined by `connection`.
#[must_use]
pub fn equivalent_capacitance(connection: ConnectionKind, capacitors: &[Scalar]) -> Scalar {
    match connection {
        ConnectionKind::Series => series_capacitors(capacitors),
        ConnectionKind::Parallel => parallel_capacitors(capacitors),
    }
}
