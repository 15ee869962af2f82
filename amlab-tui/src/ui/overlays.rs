//! Overlay widgets: first-run welcome.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::theme;
use crate::ui::centered_rect;

/// First-run welcome overlay.
pub fn render_welcome(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 50, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Amplitude Modulation Visualizer ")
        .title_style(theme::accent_bold());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Explore how a message wave shapes the amplitude of a carrier.",
            theme::text(),
        )),
        Line::from(""),
        Line::from(Span::styled("Getting started:", theme::accent_bold())),
        Line::from(""),
        Line::from(Span::styled("  1. Pick a slider with j / k", theme::muted())),
        Line::from(Span::styled("  2. Move it with h / l (H / L for big steps)", theme::muted())),
        Line::from(Span::styled(
            "  3. Push Am above Ac to see over-modulation",
            theme::muted(),
        )),
        Line::from(Span::styled("  4. Press 2 to read about AM, 3 for all keys", theme::muted())),
        Line::from(""),
        Line::from(Span::styled("Press any key to dismiss...", theme::text())),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}
