//! Waveform line charts for the simulator panel.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition};

use amlab_core::{Trace, WaveformView};

use crate::app::ChartKind;
use crate::theme;

/// Render one chart for `kind` over the display window.
pub fn render(f: &mut Frame, area: Rect, view: &WaveformView<'_>, kind: ChartKind) {
    let traces = kind.traces();
    let series: Vec<(Trace, Vec<(f64, f64)>)> =
        traces.iter().map(|t| (*t, view.points(*t))).collect();

    let datasets: Vec<Dataset> = series
        .iter()
        .map(|(trace, data)| {
            Dataset::default()
                .name(trace.label())
                .marker(symbols::Marker::Braille)
                .style(Style::default().fg(trace_color(*trace)))
                .graph_type(GraphType::Line)
                .data(data)
        })
        .collect();

    let (y_min, y_max) = y_bounds(view, traces);
    let x_max = view.time.last().copied().unwrap_or(0.0).max(f64::EPSILON);

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme::muted())
        .title(Span::styled(format!(" {} ", kind.label()), theme::accent_bold()));

    // Only the AM chart has more than one dataset worth a legend.
    let legend = if traces.len() > 1 {
        Some(LegendPosition::TopRight)
    } else {
        None
    };

    let chart = Chart::new(datasets)
        .block(block)
        .legend_position(legend)
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)))
        .x_axis(
            Axis::default()
                .title(Span::styled("t (s)", theme::muted()))
                .style(theme::muted())
                .bounds([0.0, x_max])
                .labels(vec![
                    Span::styled("0", theme::muted()),
                    Span::styled(format!("{:.2}", x_max / 2.0), theme::muted()),
                    Span::styled(format!("{x_max:.2}"), theme::muted()),
                ]),
        )
        .y_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::styled(format!("{y_min:.1}"), theme::muted()),
                    Span::styled(format!("{y_max:.1}"), theme::muted()),
                ]),
        );

    f.render_widget(chart, area);
}

fn trace_color(trace: Trace) -> ratatui::style::Color {
    match trace {
        Trace::Message => theme::MESSAGE,
        Trace::Carrier => theme::CARRIER,
        Trace::Modulated => theme::MODULATED,
        Trace::UpperEnvelope | Trace::LowerEnvelope => theme::ENVELOPE,
    }
}

/// Y-axis range with 10% headroom. A flat trace gets a unit span.
pub fn y_bounds(view: &WaveformView<'_>, traces: &[Trace]) -> (f64, f64) {
    let (lo, hi) = view.bounds(traces).unwrap_or((-1.0, 1.0));
    let span = hi - lo;
    if span <= f64::EPSILON {
        return (lo - 1.0, hi + 1.0);
    }
    let pad = span * 0.1;
    (lo - pad, hi + pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use amlab_core::{AmParams, SignalConfig, Waveforms};

    #[test]
    fn bounds_pad_the_envelope() {
        let w = Waveforms::generate(&AmParams::default(), &SignalConfig::default());
        let view = w.view(100);
        let (lo, hi) = y_bounds(&view, ChartKind::Modulated.traces());
        // Envelope peaks at Ac + Am = 2.
        assert!((hi - 2.4).abs() < 1e-9);
        assert!((lo + 2.4).abs() < 1e-9);
    }

    #[test]
    fn flat_message_gets_unit_span() {
        let params = AmParams::clamped(2.0, 0.0, 1.0);
        let w = Waveforms::generate(&params, &SignalConfig::default());
        let view = w.view(100);
        assert_eq!(y_bounds(&view, ChartKind::Message.traces()), (-1.0, 1.0));
    }
}
