//! Help panel: keyboard shortcuts.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use amlab_core::ModulationKind;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Global Navigation");
    key(&mut lines, "1-3", "Switch to panel by number");
    key(&mut lines, "Tab / Shift+Tab", "Cycle panels forward / back");
    key(&mut lines, "q / Ctrl+C", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 1: Simulator");
    key(&mut lines, "j / k", "Select next / previous slider");
    key(&mut lines, "h / l", "Decrease / increase by one step");
    key(&mut lines, "H / L", "Decrease / increase by ten steps");
    key(&mut lines, "m", "Show / hide the message chart");
    key(&mut lines, "c", "Show / hide the carrier chart");
    key(&mut lines, "a", "Show / hide the AM signal chart");
    key(&mut lines, "r", "Reset parameters to defaults");
    key(&mut lines, "x", "Export the full waveform grid as CSV");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 2: Explore");
    key(&mut lines, "j / k", "Scroll down / up");
    key(&mut lines, "PgDn / PgUp", "Scroll a page");
    key(&mut lines, "g / Home", "Back to top");
    lines.push(Line::from(""));

    section(&mut lines, "Modulation Regimes");
    for kind in ModulationKind::ALL {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{:>22}", kind.label()), theme::modulation_badge(kind)),
            Span::styled(format!("  {}", kind.condition()), theme::muted()),
        ]));
    }
    lines.push(Line::from(""));

    section(&mut lines, "Signal");
    let signal = &app.config.signal;
    key(&mut lines, "Carrier", &format!("{} Hz", signal.carrier_freq));
    key(
        &mut lines,
        "Samples",
        &format!("{} over 1 s, first {} drawn", signal.sample_count, signal.display_window),
    );

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}

fn section(lines: &mut Vec<Line<'_>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key(lines: &mut Vec<Line<'_>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>20}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
