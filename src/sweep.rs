//! Frequency grids and filter sweeps.

use crate::bode::BodeDataset;
use crate::errors::Result;
use crate::filters::{FrequencyResponse, ResponsePoint};
use crate::math::Scalar;

/// Generates `n` logarithmically spaced samples between `start_hz` and `stop_hz`.
///
/// # Panics
///
/// Panics unless both bounds are strictly positive.
#[must_use]
pub fn logspace_hz(start_hz: Scalar, stop_hz: Scalar, n: usize) -> Vec<Scalar> {
    assert!(start_hz > 0.0 && stop_hz > 0.0);
    match n {
        0 => Vec::new(),
        1 => vec![start_hz],
        _ => {
            let log_start = start_hz.log10();
            let log_stop = stop_hz.log10();
            let step = (log_stop - log_start) / (n as Scalar - 1.0);
            (0..n)
                .map(|i| 10f64.powf(log_start + step * i as Scalar))
                .collect()
        }
    }
}

/// Samples `filter` at every frequency in `freqs_hz`.
#[must_use]
pub fn frequency_sweep<F, I>(filter: &F, freqs_hz: I) -> Vec<ResponsePoint>
where
    F: FrequencyResponse + ?Sized,
    I: IntoIterator<Item = Scalar>,
{
    freqs_hz.into_iter().map(|f| filter.sample(f)).collect()
}

/// Sweeps `filter` over `freqs_hz` and packages linear gain and phase in
/// degrees for [`crate::bode::BodePlot`].
pub fn bode_dataset<F>(filter: &F, freqs_hz: &[Scalar]) -> Result<BodeDataset>
where
    F: FrequencyResponse + ?Sized,
{
    let points = frequency_sweep(filter, freqs_hz.iter().copied());
    let gains: Vec<Scalar> = points.iter().map(|p| p.gain).collect();
    let phases: Vec<Scalar> = points.iter().map(|p| p.phase_rad.to_degrees()).collect();
    BodeDataset::new(freqs_hz, &gains, Some(&phases))
}
