use phasesim_core::LineWaveforms;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotSeries {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

/// One time-series chart: a title, labelled axes and one series per phase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotPanel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    pub grid: bool,
    pub series: Vec<PlotSeries>,
}

impl PlotPanel {
    /// Grid rules through the midpoint ticks: one horizontal, one vertical.
    /// Empty when grid lines are off.
    pub fn grid_rules(&self) -> Vec<[(f64, f64); 2]> {
        if !self.grid {
            return Vec::new();
        }
        let [x0, x1] = self.x_bounds;
        let [y0, y1] = self.y_bounds;
        let (x_mid, y_mid) = ((x0 + x1) / 2.0, (y0 + y1) / 2.0);
        vec![[(x0, y_mid), (x1, y_mid)], [(x_mid, y0), (x_mid, y1)]]
    }
}

/// Line voltages stacked over line currents on a shared time axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaveformPlot {
    pub panels: Vec<PlotPanel>,
}

impl Default for WaveformPlot {
    fn default() -> Self {
        Self { panels: Vec::new() }
    }
}

/// Glyph used to draw the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotMarker {
    #[default]
    Braille,
    Dot,
    Block,
}

/// Builds the two-panel plot from any simulation result.
pub fn waveform_plot<W: LineWaveforms + ?Sized>(waveforms: &W) -> WaveformPlot {
    let time = waveforms.time();
    if time.is_empty() {
        return WaveformPlot::default();
    }
    let x_bounds = bounds(time);

    let voltages = panel(
        "Line Voltages",
        "Voltage (V)",
        "V_line",
        time,
        x_bounds,
        &waveforms.line_voltages(),
    );
    let currents = panel(
        "Line Currents",
        "Current (A)",
        "I_line",
        time,
        x_bounds,
        &waveforms.line_currents(),
    );

    WaveformPlot {
        panels: vec![voltages, currents],
    }
}

fn panel(
    title: &str,
    y_label: &str,
    prefix: &str,
    time: &[f64],
    x_bounds: [f64; 2],
    phases: &[Vec<f64>; 3],
) -> PlotPanel {
    let series: Vec<PlotSeries> = phases
        .iter()
        .enumerate()
        .map(|(k, values)| PlotSeries {
            label: format!("{prefix}{}", k + 1),
            points: time.iter().copied().zip(values.iter().copied()).collect(),
        })
        .collect();

    let all_values: Vec<f64> = phases.iter().flatten().copied().collect();
    let [lo, hi] = bounds(&all_values);
    let pad = (hi - lo) * 0.05;

    PlotPanel {
        title: title.to_string(),
        x_label: "Time (s)".to_string(),
        y_label: y_label.to_string(),
        x_bounds,
        y_bounds: [lo - pad, hi + pad],
        grid: true,
        series,
    }
}

/// `[min, max]` over the finite values, widened when the range is empty.
fn bounds(values: &[f64]) -> [f64; 2] {
    let (lo, hi) = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if lo > hi {
        return [-1.0, 1.0];
    }
    if (hi - lo).abs() < f64::EPSILON {
        return [lo - 1.0, hi + 1.0];
    }
    [lo, hi]
}
