//! Terminal rendering of a [`WaveformPlot`] with `ratatui` charts.

use std::io;

use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Widget};
use ratatui::{DefaultTerminal, Frame};
use tracing::debug;

use crate::plot::{PlotMarker, PlotPanel, WaveformPlot};

const PHASE_COLORS: [Color; 3] = [Color::LightRed, Color::LightYellow, Color::LightBlue];
const GRID_COLOR: Color = Color::DarkGray;

impl From<PlotMarker> for Marker {
    fn from(marker: PlotMarker) -> Self {
        match marker {
            PlotMarker::Braille => Marker::Braille,
            PlotMarker::Dot => Marker::Dot,
            PlotMarker::Block => Marker::Block,
        }
    }
}

/// Grid rules go first so the phase series draw over them.
fn chart<'a>(panel: &'a PlotPanel, rules: &'a [[(f64, f64); 2]], marker: Marker) -> Chart<'a> {
    let grid = rules.iter().map(|rule| {
        Dataset::default()
            .marker(marker)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(GRID_COLOR))
            .data(rule)
    });
    let series = panel
        .series
        .iter()
        .zip(PHASE_COLORS.iter().cycle())
        .map(|(series, &color)| {
            Dataset::default()
                .name(series.label.as_str())
                .marker(marker)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(color))
                .data(&series.points)
        });
    let datasets = grid.chain(series).collect();

    Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(panel.title.as_str()),
        )
        .x_axis(
            Axis::default()
                .title(panel.x_label.as_str())
                .bounds(panel.x_bounds)
                .labels(axis_labels(panel.x_bounds, panel.grid)),
        )
        .y_axis(
            Axis::default()
                .title(panel.y_label.as_str())
                .bounds(panel.y_bounds)
                .labels(axis_labels(panel.y_bounds, panel.grid)),
        )
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)))
}

/// Tick labels at both ends, plus the midpoint when grid lines are on.
fn axis_labels(bounds: [f64; 2], grid: bool) -> Vec<String> {
    let [lo, hi] = bounds;
    let ticks = if grid {
        vec![lo, (lo + hi) / 2.0, hi]
    } else {
        vec![lo, hi]
    };
    ticks.into_iter().map(format_tick).collect()
}

fn format_tick(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && magnitude < 0.1 {
        format!("{value:.3}")
    } else {
        format!("{value:.1}")
    }
}

/// Renders every panel, stacked vertically, into `area` of `buf`.
pub fn render(plot: &WaveformPlot, area: Rect, buf: &mut Buffer, marker: Marker) {
    if plot.panels.is_empty() {
        return;
    }
    let count = plot.panels.len() as u32;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, count); plot.panels.len()])
        .split(area);
    for (panel, rect) in plot.panels.iter().zip(rows.iter()) {
        let rules = panel.grid_rules();
        chart(panel, &rules, marker).render(*rect, buf);
    }
}

pub fn draw(frame: &mut Frame, plot: &WaveformPlot, marker: Marker) {
    let area = frame.area();
    render(plot, area, frame.buffer_mut(), marker);
}

/// Renders into an off-screen buffer and returns its rows as text.
pub fn render_snapshot(plot: &WaveformPlot, width: u16, height: u16, marker: Marker) -> String {
    let area = Rect::new(0, 0, width.max(1), height.max(1));
    let mut buffer = Buffer::empty(area);
    render(plot, area, &mut buffer, marker);
    buffer
        .content
        .chunks(area.width as usize)
        .map(|row| {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Interactive full-screen view; returns when `q` or `Esc` is pressed.
pub fn show(plot: &WaveformPlot, marker: Marker) -> io::Result<()> {
    let mut terminal = ratatui::try_init()?;
    let result = event_loop(&mut terminal, plot, marker);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, plot: &WaveformPlot, marker: Marker) -> io::Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, plot, marker))?;
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press
                && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
            {
                debug!("closing waveform view");
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::waveform_plot;
    use phasesim_core::units::{Hertz, Ohms, Seconds, Volts};
    use phasesim_core::simulate_balanced;

    fn plot() -> WaveformPlot {
        let w = simulate_balanced(Volts(230.0), Ohms(10.0), 0.9, Hertz(50.0), Seconds(0.02));
        waveform_plot(&w)
    }

    #[test]
    fn test_snapshot_shows_both_panel_titles() {
        let text = render_snapshot(&plot(), 100, 40, Marker::Braille);
        assert!(text.contains("Line Voltages"));
        assert!(text.contains("Line Currents"));
        assert!(text.lines().count() <= 40);
    }

    #[test]
    fn test_voltage_panel_sits_above_current_panel() {
        let text = render_snapshot(&plot(), 100, 40, Marker::Dot);
        let voltages = text.find("Line Voltages").unwrap();
        let currents = text.find("Line Currents").unwrap();
        assert!(voltages < currents);
    }

    #[test]
    fn test_grid_rules_are_drawn() {
        let with_grid = plot();
        let mut without_grid = with_grid.clone();
        for panel in &mut without_grid.panels {
            panel.grid = false;
        }
        let drawn = render_snapshot(&with_grid, 100, 40, Marker::Dot);
        let bare = render_snapshot(&without_grid, 100, 40, Marker::Dot);
        assert_ne!(drawn, bare);
        assert!(drawn.matches('•').count() > bare.matches('•').count());
    }

    #[test]
    fn test_empty_plot_renders_blank() {
        let text = render_snapshot(&WaveformPlot::default(), 20, 5, Marker::Block);
        assert!(text.chars().all(|c| c == '\n'));
    }

    #[test]
    fn test_axis_labels() {
        assert_eq!(axis_labels([0.0, 0.02], true), vec!["0.0", "0.010", "0.020"]);
        assert_eq!(axis_labels([-250.0, 250.0], false).len(), 2);
    }

    #[test]
    fn test_marker_conversion() {
        assert_eq!(Marker::from(PlotMarker::Dot), Marker::Dot);
        assert_eq!(Marker::from(PlotMarker::Braille), Marker::Braille);
    }
}
