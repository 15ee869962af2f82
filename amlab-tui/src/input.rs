//! Keyboard input dispatch: overlays, then global keys, then panel-specific handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, ChartKind, Overlay, Panel};

/// Slider steps moved by `H` / `L`.
const COARSE_STEPS: i32 = 10;

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    if app.overlay == Overlay::Welcome {
        app.overlay = Overlay::None;
        return;
    }

    // 2. Global keys (always available).
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Char('1') => { app.active_panel = Panel::Simulator; return; }
        KeyCode::Char('2') => { app.active_panel = Panel::Explore; return; }
        KeyCode::Char('3') => { app.active_panel = Panel::Help; return; }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_panel = app.active_panel.prev();
            } else {
                app.active_panel = app.active_panel.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.active_panel = app.active_panel.prev();
            return;
        }
        _ => {}
    }

    // 3. Panel-specific keys.
    match app.active_panel {
        Panel::Simulator => handle_simulator_key(app, key),
        Panel::Explore => handle_explore_key(app, key),
        Panel::Help => {} // display only
    }
}

fn handle_simulator_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.sim.selected = app.sim.selected.next();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.sim.selected = app.sim.selected.prev();
        }
        KeyCode::Char('h') | KeyCode::Left => adjust(app, -1),
        KeyCode::Char('l') | KeyCode::Right => adjust(app, 1),
        KeyCode::Char('H') => adjust(app, -COARSE_STEPS),
        KeyCode::Char('L') => adjust(app, COARSE_STEPS),
        KeyCode::Char('r') => app.reset_params(),
        KeyCode::Char('x') => app.export_csv(),
        KeyCode::Char(c) => {
            if let Some(chart) = ChartKind::ALL.into_iter().find(|k| k.key() == c) {
                app.toggle_chart(chart);
            }
        }
        _ => {}
    }
}

fn adjust(app: &mut AppState, steps: i32) {
    let param = app.sim.selected;
    let before = app.sim.params.get(param);
    app.adjust_selected(steps);
    if app.sim.params.get(param) == before {
        let edge = if steps > 0 { "maximum" } else { "minimum" };
        app.set_warning(format!("{} is at its {edge}", param.symbol()));
    } else {
        app.status_message = None;
    }
}

fn handle_explore_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.explore.scroll = app.explore.scroll.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.explore.scroll = app.explore.scroll.saturating_sub(1);
        }
        KeyCode::PageDown | KeyCode::Char(' ') => {
            app.explore.scroll = app.explore.scroll.saturating_add(10);
        }
        KeyCode::PageUp => {
            app.explore.scroll = app.explore.scroll.saturating_sub(10);
        }
        KeyCode::Char('g') | KeyCode::Home => {
            app.explore.scroll = 0;
        }
        _ => {}
    }
}
