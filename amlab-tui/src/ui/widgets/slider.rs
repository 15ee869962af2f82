//! Labeled horizontal slider widget.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use amlab_core::Param;

use crate::theme;

const LABEL_WIDTH: usize = 22;
const VALUE_WIDTH: usize = 10;

/// One parameter slider: `label [=====     ] value unit`.
pub struct Slider {
    param: Param,
    value: f64,
    active: bool,
}

impl Slider {
    pub fn new(param: Param, value: f64) -> Self {
        Self {
            param,
            value,
            active: false,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    fn line(&self, width: usize) -> Line<'static> {
        let range = self.param.range();
        let bar_width = width.saturating_sub(LABEL_WIDTH + VALUE_WIDTH + 2).max(4);
        let label_style = if self.active {
            theme::accent().add_modifier(Modifier::REVERSED)
        } else {
            theme::muted()
        };
        let bar_style = if self.active { theme::accent() } else { theme::muted() };
        let unit = self.param.unit();
        let value = if unit.is_empty() {
            format!("{:.1}", self.value)
        } else {
            format!("{:.1} {unit}", self.value)
        };

        Line::from(vec![
            Span::styled(
                format!("{:>width$} ", self.param.label(), width = LABEL_WIDTH - 1),
                label_style,
            ),
            Span::styled(bar(range.fraction(self.value), bar_width), bar_style),
            Span::styled(format!(" {value:<w$}", w = VALUE_WIDTH - 1), text_style(self.active)),
        ])
    }
}

fn text_style(active: bool) -> Style {
    if active {
        theme::accent_bold()
    } else {
        theme::text()
    }
}

impl Widget for Slider {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let line = self.line(area.width as usize);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

/// `[====      ]` with `width` cells between the brackets.
pub fn bar(fraction: f64, width: usize) -> String {
    let frac = if fraction.is_finite() { fraction.clamp(0.0, 1.0) } else { 0.0 };
    let filled = (frac * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "=".repeat(filled), " ".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_fill() {
        assert_eq!(bar(0.0, 4), "[    ]");
        assert_eq!(bar(0.5, 4), "[==  ]");
        assert_eq!(bar(1.0, 4), "[====]");
        assert_eq!(bar(2.0, 4), "[====]");
        assert_eq!(bar(f64::NAN, 4), "[    ]");
    }

    #[test]
    fn renders_label_and_value() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        Slider::new(Param::MessageFreq, 2.0).active(true).render(area, &mut buf);

        let row: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert!(row.contains("Message Frequency"));
        assert!(row.contains("2.0 Hz"));
        assert!(row.contains('['));
    }
}
