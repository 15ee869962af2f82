//! Simulator panel: parameter sliders, modulation index, chart switches
//! and the waveform charts.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use amlab_core::{AmAnalysis, Param};

use crate::app::{AppState, ChartKind, Visibility};
use crate::theme;
use crate::ui::chart_panel;
use crate::ui::widgets::Slider;

/// Rows used by the controls above the charts.
const CONTROLS_HEIGHT: u16 = 8;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CONTROLS_HEIGHT), Constraint::Min(0)])
        .split(area);

    render_controls(f, chunks[0], app);
    render_charts(f, chunks[1], app);
}

fn render_controls(f: &mut Frame, area: Rect, app: &AppState) {
    let sim = &app.sim;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // hints
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1), // index
            Constraint::Length(1), // switches
            Constraint::Length(1), // analysis
            Constraint::Min(0),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Span::styled(
            "[j/k]select [h/l]adjust [H/L]x10 [m/c/a]charts [r]reset [x]export",
            theme::muted(),
        )),
        rows[0],
    );

    for (i, param) in Param::ALL.into_iter().enumerate() {
        let slider = Slider::new(param, sim.params.get(param)).active(param == sim.selected);
        f.render_widget(slider, rows[1 + i]);
    }

    f.render_widget(Paragraph::new(index_line(&sim.analysis)), rows[4]);
    f.render_widget(Paragraph::new(switches_line(&sim.visibility)), rows[5]);
    f.render_widget(Paragraph::new(summary_line(&sim.analysis)), rows[6]);
}

fn index_line(analysis: &AmAnalysis) -> Line<'static> {
    let kind = analysis.kind;
    Line::from(vec![
        Span::styled("Modulation Index (μ): ", theme::muted()),
        Span::styled(format!("{}", analysis.index), theme::accent_bold()),
        Span::raw("  "),
        Span::styled(format!(" {} ", kind.label()), theme::modulation_badge(kind)),
        Span::raw("  "),
        Span::styled(kind.condition(), theme::muted()),
    ])
}

fn switches_line(visibility: &Visibility) -> Line<'static> {
    let mut spans = vec![Span::styled("Show: ", theme::muted())];
    for chart in ChartKind::ALL {
        let on = visibility.is_visible(chart);
        let mark = if on { "[x]" } else { "[ ]" };
        spans.push(Span::styled(
            format!("{mark} {} ({})  ", chart.label(), chart.key()),
            theme::switch(on),
        ));
    }
    Line::from(spans)
}

fn summary_line(analysis: &AmAnalysis) -> Line<'static> {
    let s = &analysis.spectrum;
    let mut spans = vec![Span::styled(
        format!(
            "Sidebands {:.1} / {:.1} Hz   Bandwidth {:.1} Hz   Efficiency {:.1}%",
            s.lower_sideband,
            s.upper_sideband,
            s.bandwidth,
            analysis.power.efficiency * 100.0
        ),
        theme::text(),
    )];
    if analysis.envelope.crosses_zero {
        spans.push(Span::styled(
            "   envelope crosses zero: phase reversal",
            theme::negative(),
        ));
    }
    Line::from(spans)
}

fn render_charts(f: &mut Frame, area: Rect, app: &AppState) {
    let visible = app.sim.visibility.visible();
    if visible.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled(
                "All charts hidden. Press m, c or a to show one.",
                theme::muted(),
            )),
            area,
        );
        return;
    }

    let view = app.sim.waveforms.display(&app.config.signal);
    let constraints: Vec<Constraint> = visible
        .iter()
        .map(|_| Constraint::Ratio(1, visible.len() as u32))
        .collect();
    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (chart, slot) in visible.into_iter().zip(slots.iter()) {
        chart_panel::render(f, *slot, &view, chart);
    }
}
