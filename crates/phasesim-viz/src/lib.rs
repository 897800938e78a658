//! Presentation of phasesim results: a serializable plot model, `ratatui`
//! terminal charts and CSV export.

pub mod plot;
pub mod table;
pub mod terminal;

pub use plot::{waveform_plot, PlotMarker, PlotPanel, PlotSeries, WaveformPlot};
