//! Application state: single-owner, main-thread only.
//!
//! Every parameter change regenerates the waveforms and the analysis in full.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use amlab_core::export;
use amlab_core::{AmAnalysis, AmParams, LabConfig, Param, Trace, Waveforms};

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Panel {
    Simulator,
    Explore,
    Help,
}

impl Panel {
    const COUNT: usize = 3;

    pub fn index(self) -> usize {
        match self {
            Panel::Simulator => 0,
            Panel::Explore => 1,
            Panel::Help => 2,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Simulator),
            1 => Some(Panel::Explore),
            2 => Some(Panel::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Simulator => "Simulator",
            Panel::Explore => "Explore",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        Panel::from_index((self.index() + 1) % Self::COUNT).unwrap_or(Panel::Simulator)
    }

    pub fn prev(self) -> Panel {
        Panel::from_index((self.index() + Self::COUNT - 1) % Self::COUNT)
            .unwrap_or(Panel::Simulator)
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// One of the three charts on the simulator panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Message,
    Carrier,
    Modulated,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Message, ChartKind::Carrier, ChartKind::Modulated];

    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Message => "Message",
            ChartKind::Carrier => "Carrier",
            ChartKind::Modulated => "AM Signal",
        }
    }

    pub fn key(self) -> char {
        match self {
            ChartKind::Message => 'm',
            ChartKind::Carrier => 'c',
            ChartKind::Modulated => 'a',
        }
    }

    /// Traces drawn on this chart, primary trace first.
    pub fn traces(self) -> &'static [Trace] {
        match self {
            ChartKind::Message => &[Trace::Message],
            ChartKind::Carrier => &[Trace::Carrier],
            ChartKind::Modulated => &[Trace::Modulated, Trace::UpperEnvelope, Trace::LowerEnvelope],
        }
    }
}

/// Per-chart visibility switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visibility {
    pub message: bool,
    pub carrier: bool,
    pub modulated: bool,
}

impl Default for Visibility {
    fn default() -> Self {
        Self {
            message: true,
            carrier: true,
            modulated: true,
        }
    }
}

impl Visibility {
    pub fn is_visible(&self, chart: ChartKind) -> bool {
        match chart {
            ChartKind::Message => self.message,
            ChartKind::Carrier => self.carrier,
            ChartKind::Modulated => self.modulated,
        }
    }

    pub fn toggle(&mut self, chart: ChartKind) {
        match chart {
            ChartKind::Message => self.message = !self.message,
            ChartKind::Carrier => self.carrier = !self.carrier,
            ChartKind::Modulated => self.modulated = !self.modulated,
        }
    }

    pub fn visible(&self) -> Vec<ChartKind> {
        ChartKind::ALL
            .into_iter()
            .filter(|c| self.is_visible(*c))
            .collect()
    }
}

/// Simulator panel state: sliders, switches and derived signals.
pub struct SimulatorState {
    pub params: AmParams,
    pub selected: Param,
    pub visibility: Visibility,
    pub waveforms: Waveforms,
    pub analysis: AmAnalysis,
}

impl SimulatorState {
    pub fn new(params: AmParams, config: &LabConfig) -> Self {
        Self {
            waveforms: Waveforms::generate(&params, &config.signal),
            analysis: AmAnalysis::of(&params, &config.signal),
            params,
            selected: Param::MessageFreq,
            visibility: Visibility::default(),
        }
    }

    pub fn recompute(&mut self, config: &LabConfig) {
        self.waveforms = Waveforms::generate(&self.params, &config.signal);
        self.analysis = AmAnalysis::of(&self.params, &config.signal);
    }
}

/// Explore panel state.
#[derive(Debug, Default)]
pub struct ExploreState {
    pub scroll: u16,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Welcome,
}

/// Top-level application state.
pub struct AppState {
    // Navigation
    pub active_panel: Panel,
    pub running: bool,

    // Panel states
    pub sim: SimulatorState,
    pub explore: ExploreState,

    // Cross-cutting
    pub config: LabConfig,
    pub status_message: Option<(String, StatusLevel)>,
    pub overlay: Overlay,

    /// Directory that `x` exports into.
    pub export_dir: PathBuf,
}

impl AppState {
    pub fn new(config: LabConfig, export_dir: PathBuf) -> Self {
        Self {
            active_panel: Panel::Simulator,
            running: true,
            sim: SimulatorState::new(config.defaults, &config),
            explore: ExploreState::default(),
            config,
            status_message: None,
            overlay: Overlay::None,
            export_dir,
        }
    }

    /// Move the selected slider by `steps` and recompute.
    pub fn adjust_selected(&mut self, steps: i32) {
        let param = self.sim.selected;
        let before = self.sim.params.get(param);
        self.sim.params.adjust(param, steps);
        if self.sim.params.get(param) != before {
            self.sim.recompute(&self.config);
        }
    }

    /// Replace all parameters (clamped) and recompute.
    pub fn set_params(&mut self, params: AmParams) {
        self.sim.params =
            AmParams::clamped(params.message_freq, params.message_amp, params.carrier_amp);
        self.sim.recompute(&self.config);
    }

    pub fn reset_params(&mut self) {
        self.set_params(self.config.defaults);
        self.set_status("Parameters reset to defaults");
    }

    pub fn toggle_chart(&mut self, chart: ChartKind) {
        self.sim.visibility.toggle(chart);
        let state = if self.sim.visibility.is_visible(chart) { "shown" } else { "hidden" };
        self.set_status(format!("{} chart {state}", chart.label()));
    }

    /// Write the full-grid CSV of the current waveforms into `export_dir`.
    pub fn export_csv(&mut self) {
        let path = self.export_path();
        let result = export::export_csv(&self.sim.waveforms)
            .and_then(|csv| export::write_to(&path, &csv));
        match result {
            Ok(()) => self.set_status(format!("Exported {}", path.display())),
            Err(e) => {
                tracing::warn!(error = %e, "csv export failed");
                self.set_error(format!("Export failed: {e}"));
            }
        }
    }

    pub fn export_path(&self) -> PathBuf {
        export_file_name(&self.export_dir, &self.sim.params)
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }
}

fn export_file_name(dir: &Path, p: &AmParams) -> PathBuf {
    dir.join(format!(
        "am_fm{:.1}_am{:.1}_ac{:.1}.csv",
        p.message_freq, p.message_amp, p.carrier_amp
    ))
}
