//! Colour tokens and style helpers.
//!
//! Blue primary for signals and focus, red for the envelope and
//! over-modulation, orange for critical modulation and warnings, green for
//! under-modulation.

use ratatui::style::{Color, Modifier, Style};

use amlab_core::ModulationKind;

pub const PRIMARY: Color = Color::Rgb(52, 152, 219);
pub const SECONDARY: Color = Color::Rgb(41, 128, 185);
pub const DANGER: Color = Color::Rgb(231, 76, 60);
pub const WARNING: Color = Color::Rgb(243, 156, 18);
pub const SUCCESS: Color = Color::Rgb(46, 204, 113);
pub const TEXT: Color = Color::Rgb(236, 240, 241);
pub const MUTED: Color = Color::Rgb(127, 140, 141);
pub const BORDER: Color = Color::Rgb(99, 110, 114);

/// Message trace colour.
pub const MESSAGE: Color = PRIMARY;
/// Carrier trace colour.
pub const CARRIER: Color = SECONDARY;
/// Modulated trace colour.
pub const MODULATED: Color = PRIMARY;
/// Envelope colour.
pub const ENVELOPE: Color = DANGER;

pub fn accent() -> Style {
    Style::default().fg(PRIMARY)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn text() -> Style {
    Style::default().fg(TEXT)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn negative() -> Style {
    Style::default().fg(DANGER)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        Style::default().fg(PRIMARY)
    } else {
        Style::default().fg(BORDER)
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

/// Badge colour for a modulation regime.
pub fn modulation_color(kind: ModulationKind) -> Color {
    match kind {
        ModulationKind::UnderModulated => SUCCESS,
        ModulationKind::Critical => WARNING,
        ModulationKind::OverModulated => DANGER,
    }
}

/// Filled badge: dark text on the regime colour.
pub fn modulation_badge(kind: ModulationKind) -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(modulation_color(kind))
        .add_modifier(Modifier::BOLD)
}

/// On/off switch label.
pub fn switch(on: bool) -> Style {
    if on {
        accent_bold()
    } else {
        muted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regime_colours() {
        assert_eq!(modulation_color(ModulationKind::UnderModulated), SUCCESS);
        assert_eq!(modulation_color(ModulationKind::Critical), WARNING);
        assert_eq!(modulation_color(ModulationKind::OverModulated), DANGER);
        assert_eq!(modulation_badge(ModulationKind::Critical).bg, Some(WARNING));
    }

    #[test]
    fn active_border_is_primary() {
        assert_eq!(panel_border(true).fg, Some(PRIMARY));
        assert_eq!(panel_border(false).fg, Some(BORDER));
    }
}
