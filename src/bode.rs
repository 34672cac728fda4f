//! Bode plot preparation and rendering.
//!
//! [`BodeDataset`] validates and orders the samples, [`BodePlot`] derives
//! everything the chart needs (scaled magnitudes, decade ticks, axis labels)
//! and, with the `plot` feature, draws it to SVG through `plotters`.

use log::warn;

use crate::constants::MAGNITUDE_FLOOR;
use crate::errors::{CircuitError, Result};
use crate::math::Scalar;

/// Converts a linear magnitude to decibels, clamping at [`MAGNITUDE_FLOOR`].
#[inline]
#[must_use]
pub fn magnitude_db(magnitude: Scalar) -> Scalar {
    20.0 * magnitude.max(MAGNITUDE_FLOOR).log10()
}

/// Powers of ten covering `[min_hz, max_hz]`, one per decade.
///
/// Returns no ticks when `max_hz` is not a finite positive frequency.
#[must_use]
pub fn decade_ticks(min_hz: Scalar, max_hz: Scalar) -> Vec<Scalar> {
    if !(max_hz.is_finite() && max_hz > 0.0) || min_hz.is_nan() {
        warn!("no decade ticks for frequency range {min_hz}..{max_hz}");
        return Vec::new();
    }
    let min_dec = min_hz.max(MAGNITUDE_FLOOR).log10().floor() as i32;
    let max_dec = max_hz.log10().ceil() as i32;
    (min_dec..=max_dec).map(|d| 10f64.powi(d)).collect()
}

/// Human-readable tick label (`Hz`, `kHz` or `MHz`).
#[must_use]
pub fn format_frequency_label(hz: Scalar) -> String {
    if hz >= 1.0e6 {
        format!("{} MHz", format_general(hz / 1.0e6))
    } else if hz >= 1.0e3 {
        format!("{} kHz", format_general(hz / 1.0e3))
    } else if hz >= 1.0 {
        format!("{} Hz", hz.trunc())
    } else {
        format!("{} Hz", format_general(hz))
    }
}

/// Six significant digits with trailing zeros removed, like printf's `%g`.
fn format_general(value: Scalar) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }
    let exponent = value.abs().log10().floor() as i32;
    if !(-4..6).contains(&exponent) {
        let text = format!("{value:.5e}");
        let (mantissa, exp) = text.split_once('e').unwrap_or((text.as_str(), "0"));
        let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
        let exp: i32 = exp.parse().unwrap_or(0);
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{:02}", exp.abs());
    }
    let decimals = (5 - exponent).max(0) as usize;
    let text = format!("{value:.decimals$}");
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

/// How magnitudes are drawn on the y axis.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MagnitudeScale {
    /// 20·log10 of the linear magnitude.
    #[default]
    Decibels,
    /// Linear magnitude as supplied.
    Linear,
}

/// Presentation options for [`BodePlot`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct BodeOptions {
    /// Chart title.
    pub title: String,
    /// Frequency axis label.
    pub x_label: String,
    /// Magnitude axis label; derived from `scale` when `None`.
    pub magnitude_label: Option<String>,
    /// Phase axis label; `"Phase (deg)"` when `None`.
    pub phase_label: Option<String>,
    /// Magnitude scale.
    pub scale: MagnitudeScale,
    /// Draw a marker at every sample.
    pub marker: bool,
    /// Join samples with a line.
    pub line: bool,
    /// Draw grid lines.
    pub grid: bool,
    /// Image size in pixels.
    pub size: (u32, u32),
}

impl Default for BodeOptions {
    fn default() -> Self {
        Self {
            title: String::from("Bode Plot"),
            x_label: String::from("Frequency (Hz)"),
            magnitude_label: None,
            phase_label: None,
            scale: MagnitudeScale::Decibels,
            marker: true,
            line: true,
            grid: true,
            size: (800, 600),
        }
    }
}

/// Frequency, magnitude and optional phase samples in ascending frequency order.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct BodeDataset {
    frequencies: Vec<Scalar>,
    magnitudes: Vec<Scalar>,
    phases: Option<Vec<Scalar>>,
}

impl BodeDataset {
    /// Validates the samples and sorts every series by frequency.
    ///
    /// `magnitudes` are linear; `phases` are in degrees. Frequencies must be
    /// finite and strictly positive to fit a logarithmic axis.
    pub fn new(
        frequencies: &[Scalar],
        magnitudes: &[Scalar],
        phases: Option<&[Scalar]>,
    ) -> Result<Self> {
        if magnitudes.len() != frequencies.len() {
            return Err(CircuitError::LengthMismatch {
                series: "mags",
                expected: frequencies.len(),
                found: magnitudes.len(),
            });
        }
        if let Some(phases) = phases {
            if phases.len() != frequencies.len() {
                return Err(CircuitError::LengthMismatch {
                    series: "phase",
                    expected: frequencies.len(),
                    found: phases.len(),
                });
            }
        }
        if frequencies.is_empty() {
            return Err(CircuitError::EmptyDataset);
        }
        if let Some((index, &value)) = frequencies
            .iter()
            .enumerate()
            .find(|(_, f)| !(f.is_finite() && **f > 0.0))
        {
            return Err(CircuitError::InvalidFrequency { index, value });
        }

        let mut order: Vec<usize> = (0..frequencies.len()).collect();
        order.sort_by(|&a, &b| frequencies[a].total_cmp(&frequencies[b]));
        let reorder = |values: &[Scalar]| order.iter().map(|&i| values[i]).collect::<Vec<_>>();

        Ok(Self {
            frequencies: reorder(frequencies),
            magnitudes: reorder(magnitudes),
            phases: phases.map(reorder),
        })
    }

    /// Frequencies in hertz, ascending.
    #[must_use]
    pub fn frequencies(&self) -> &[Scalar] {
        &self.frequencies
    }

    /// Linear magnitudes matching [`Self::frequencies`].
    #[must_use]
    pub fn magnitudes(&self) -> &[Scalar] {
        &self.magnitudes
    }

    /// Phases in degrees, when supplied.
    #[must_use]
    pub fn phases(&self) -> Option<&[Scalar]> {
        self.phases.as_deref()
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Always false: construction rejects empty datasets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

/// Panel arrangement of a Bode plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodeLayout {
    /// A single magnitude chart.
    Magnitude,
    /// Magnitude above phase, sharing the frequency axis, heights 2:1.
    MagnitudePhase,
}

/// A prepared Bode plot.
#[derive(Debug, Clone, PartialEq)]
pub struct BodePlot {
    dataset: BodeDataset,
    options: BodeOptions,
}

impl BodePlot {
    /// Creates a plot of `dataset` using `options`.
    #[must_use]
    pub fn new(dataset: BodeDataset, options: BodeOptions) -> Self {
        Self { dataset, options }
    }

    /// The samples being plotted.
    #[must_use]
    pub fn dataset(&self) -> &BodeDataset {
        &self.dataset
    }

    /// Presentation options.
    #[must_use]
    pub fn options(&self) -> &BodeOptions {
        &self.options
    }

    /// One panel without phase data, two with it.
    #[must_use]
    pub fn layout(&self) -> BodeLayout {
        if self.dataset.phases().is_some() {
            BodeLayout::MagnitudePhase
        } else {
            BodeLayout::Magnitude
        }
    }

    /// Magnitudes converted to the configured scale.
    #[must_use]
    pub fn magnitude_series(&self) -> Vec<Scalar> {
        match self.options.scale {
            MagnitudeScale::Decibels => self
                .dataset
                .magnitudes()
                .iter()
                .map(|&m| magnitude_db(m))
                .collect(),
            MagnitudeScale::Linear => self.dataset.magnitudes().to_vec(),
        }
    }

    /// Magnitude axis label.
    #[must_use]
    pub fn magnitude_label(&self) -> String {
        self.options.magnitude_label.clone().unwrap_or_else(|| match self.options.scale {
            MagnitudeScale::Decibels => String::from("Magnitude (dB)"),
            MagnitudeScale::Linear => String::from("Magnitude"),
        })
    }

    /// Phase axis label.
    #[must_use]
    pub fn phase_label(&self) -> String {
        self.options
            .phase_label
            .clone()
            .unwrap_or_else(|| String::from("Phase (deg)"))
    }

    /// Decade tick positions on the frequency axis.
    #[must_use]
    pub fn x_ticks(&self) -> Vec<Scalar> {
        let (lo, hi) = self.frequency_bounds();
        decade_ticks(lo, hi)
    }

    /// Labels for [`Self::x_ticks`].
    #[must_use]
    pub fn x_tick_labels(&self) -> Vec<String> {
        self.x_ticks().into_iter().map(format_frequency_label).collect()
    }

    fn frequency_bounds(&self) -> (Scalar, Scalar) {
        let freqs = self.dataset.frequencies();
        // sorted and non-empty
        (freqs[0], freqs[freqs.len() - 1])
    }

    /// Visible frequency range: the sample span, widened to a decade either
    /// side when it collapses to a point.
    #[cfg_attr(not(feature = "plot"), allow(dead_code))]
    fn x_range(&self) -> (Scalar, Scalar) {
        match self.frequency_bounds() {
            (lo, hi) if lo < hi => (lo, hi),
            (lo, _) => (lo / 10.0, lo * 10.0),
        }
    }
}

/// Finite min/max of `values` padded by 5%, or a unit span around a constant.
#[cfg_attr(not(feature = "plot"), allow(dead_code))]
fn value_range(values: &[Scalar]) -> (Scalar, Scalar) {
    let finite = values.iter().copied().filter(|v| v.is_finite());
    let (lo, hi) = finite.fold((Scalar::INFINITY, Scalar::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !lo.is_finite() {
        return (-1.0, 1.0);
    }
    if lo == hi {
        return (lo - 1.0, hi + 1.0);
    }
    let pad = (hi - lo) * 0.05;
    (lo - pad, hi + pad)
}

#[cfg(feature = "plot")]
mod render {
    use log::debug;
    use plotters::coord::Shift;
    use plotters::prelude::*;

    use super::{format_frequency_label, value_range, BodeLayout, BodePlot};
    use crate::errors::{CircuitError, Result};
    use crate::math::Scalar;

    const MAGNITUDE_COLOR: RGBColor = RGBColor(31, 119, 180);
    const PHASE_COLOR: RGBColor = RGBColor(255, 127, 14);

    fn plot_error<E: std::fmt::Display>(err: E) -> CircuitError {
        CircuitError::Plot(err.to_string())
    }

    struct Panel<'a> {
        values: &'a [Scalar],
        y_label: String,
        caption: Option<&'a str>,
        x_label: Option<&'a str>,
        color: RGBColor,
    }

    impl BodePlot {
        /// Draws the plot and returns it as an SVG document.
        pub fn render_svg(&self) -> Result<String> {
            let (width, height) = self.options.size;
            debug!(
                "rendering {:?} bode plot of {} samples at {}x{}",
                self.layout(),
                self.dataset.len(),
                width,
                height
            );
            let magnitudes = self.magnitude_series();
            let mut buffer = String::new();
            {
                let root = SVGBackend::with_string(&mut buffer, (width, height)).into_drawing_area();
                root.fill(&WHITE).map_err(plot_error)?;

                let magnitude = Panel {
                    values: &magnitudes,
                    y_label: self.magnitude_label(),
                    caption: Some(self.options.title.as_str()),
                    x_label: None,
                    color: MAGNITUDE_COLOR,
                };
                match (self.layout(), self.dataset.phases()) {
                    (BodeLayout::MagnitudePhase, Some(phases)) => {
                        let (upper, lower) = root.split_vertically(height * 2 / 3);
                        self.draw_panel(&upper, magnitude)?;
                        self.draw_panel(
                            &lower,
                            Panel {
                                values: phases,
                                y_label: self.phase_label(),
                                caption: None,
                                x_label: Some(self.options.x_label.as_str()),
                                color: PHASE_COLOR,
                            },
                        )?;
                    }
                    _ => {
                        self.draw_panel(
                            &root,
                            Panel {
                                x_label: Some(self.options.x_label.as_str()),
                                ..magnitude
                            },
                        )?;
                    }
                }
                root.present().map_err(plot_error)?;
            }
            Ok(buffer)
        }

        fn draw_panel<DB: DrawingBackend>(
            &self,
            area: &DrawingArea<DB, Shift>,
            panel: Panel<'_>,
        ) -> Result<()> {
            let (x_lo, x_hi) = self.x_range();
            let (y_lo, y_hi) = value_range(panel.values);

            let mut builder = ChartBuilder::on(area);
            builder
                .margin(10)
                .x_label_area_size(if panel.x_label.is_some() { 40 } else { 20 })
                .y_label_area_size(60);
            if let Some(caption) = panel.caption {
                builder.caption(caption, ("sans-serif", 20.0).into_font());
            }
            let mut chart = builder
                .build_cartesian_2d((x_lo..x_hi).log_scale(), y_lo..y_hi)
                .map_err(plot_error)?;

            let tick_label = |hz: &Scalar| format_frequency_label(*hz);
            let blank = |_: &Scalar| String::new();
            {
                let mut mesh = chart.configure_mesh();
                mesh.y_desc(panel.y_label.as_str())
                    .x_labels(self.x_ticks().len().max(2));
                match panel.x_label {
                    Some(label) => {
                        mesh.x_desc(label).x_label_formatter(&tick_label);
                    }
                    None => {
                        mesh.x_label_formatter(&blank);
                    }
                }
                if !self.options.grid {
                    mesh.disable_mesh();
                }
                mesh.draw().map_err(plot_error)?;
            }

            let points: Vec<(Scalar, Scalar)> = self
                .dataset
                .frequencies()
                .iter()
                .copied()
                .zip(panel.values.iter().copied())
                .filter(|&(_, v)| v.is_finite())
                .collect();
            if self.options.line {
                chart
                    .draw_series(LineSeries::new(points.iter().copied(), panel.color))
                    .map_err(plot_error)?;
            }
            if self.options.marker {
                chart
                    .draw_series(
                        points
                            .iter()
                            .map(|&p| Circle::new(p, 3, panel.color.filled())),
                    )
                    .map_err(plot_error)?;
            }
            Ok(())
        }
    }
}
