//! amlab TUI: interactive amplitude modulation simulator.
//!
//! Panels:
//! 1. Simulator: parameter sliders, modulation index, waveform charts
//! 2. Explore: what AM is, the math, the modulation index, applications
//! 3. Help: keyboard shortcuts

pub mod app;
pub mod input;
pub mod persistence;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use input::handle_key;
