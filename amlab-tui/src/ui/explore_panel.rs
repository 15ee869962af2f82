//! Explore panel: educational topics, scrollable.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use amlab_core::content::{Block, Topic, TOPICS};

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled("[j/k]scroll [PgUp/PgDn]page [g]top", theme::muted())),
        Line::from(""),
    ];
    for topic in TOPICS {
        topic_lines(&mut lines, topic);
    }

    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.explore.scroll, 0));
    f.render_widget(para, area);
}

fn topic_lines(lines: &mut Vec<Line<'static>>, topic: &Topic) {
    lines.push(Line::from(Span::styled(
        topic.title,
        theme::accent_bold().add_modifier(Modifier::UNDERLINED),
    )));
    lines.push(Line::from(""));

    for block in topic.blocks {
        match block {
            Block::Paragraph(text) => {
                lines.push(Line::from(Span::styled(*text, theme::text())));
            }
            Block::Formula(text) => {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(format!("    {text}"), theme::accent_bold())));
                lines.push(Line::from(""));
            }
            Block::Bullet(text) => {
                lines.push(Line::from(vec![
                    Span::styled("  • ", theme::accent()),
                    Span::styled(*text, theme::text()),
                ]));
            }
            Block::Regime(kind) => {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(format!(" {} ", kind.label()), theme::modulation_badge(*kind)),
                    Span::styled(format!(" {}  ", kind.condition()), theme::accent()),
                    Span::styled(kind.description(), theme::muted()),
                ]));
            }
            Block::Application { title, text } => {
                lines.push(Line::from(Span::styled(format!("  {title}"), theme::accent())));
                lines.push(Line::from(Span::styled(format!("    {text}"), theme::muted())));
            }
            Block::Comparison(rows) => {
                lines.push(Line::from(Span::styled(
                    format!("  {:<20} {:<10} {:<10}", "Feature", "AM", "FM"),
                    theme::accent_bold(),
                )));
                for row in rows.iter() {
                    lines.push(Line::from(Span::styled(
                        format!("  {:<20} {:<10} {:<10}", row.feature, row.am, row.fm),
                        theme::text(),
                    )));
                }
            }
        }
    }
    lines.push(Line::from(""));
}
