//! Bottom status bar: panel hints, last status message.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{AppState, Panel, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    f.render_widget(Paragraph::new(line(app)), area);
}

fn line(app: &AppState) -> Line<'_> {
    let mut spans: Vec<Span> = vec![Span::raw(" ")];

    for panel in [Panel::Simulator, Panel::Explore, Panel::Help] {
        let style = if panel == app.active_panel {
            theme::accent_bold()
        } else {
            theme::muted()
        };
        spans.push(Span::styled(format!("{}:{} ", panel.index() + 1, panel.label()), style));
    }

    spans.push(Span::raw("| "));

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
            StatusLevel::Error => theme::negative(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    } else {
        spans.push(Span::styled("q:quit", theme::muted()));
    }

    Line::from(spans)
}
