//! AM Lab Core: amplitude modulation signal generation and theory.
//!
//! This crate contains everything that is not presentation:
//! - Simulation parameters with slider ranges and clamping
//! - Sample grid and closed-form waveform generation
//! - Modulation index and under/critical/over classification
//! - Derived AM quantities (sidebands, power split, envelope extremes)
//! - Educational content shared by the TUI and CLI
//! - TOML configuration, CSV/JSON export, logging setup

pub mod analysis;
pub mod config;
pub mod content;
pub mod error;
pub mod export;
pub mod logging;
pub mod modulation;
pub mod params;
pub mod signal;

pub use analysis::AmAnalysis;
pub use config::LabConfig;
pub use error::SignalError;
pub use modulation::{ModulationIndex, ModulationKind};
pub use params::{AmParams, Param, ParamRange};
pub use signal::{SignalConfig, Trace, WaveformView, Waveforms};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: types handed across threads by front-ends are Send + Sync.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<AmParams>();
        require_sync::<AmParams>();
        require_send::<SignalConfig>();
        require_sync::<SignalConfig>();
        require_send::<Waveforms>();
        require_sync::<Waveforms>();
        require_send::<AmAnalysis>();
        require_sync::<AmAnalysis>();
        require_send::<LabConfig>();
        require_sync::<LabConfig>();
        require_send::<export::WaveformReport>();
        require_sync::<export::WaveformReport>();
        require_send::<SignalError>();
        require_sync::<SignalError>();
    }

    #[test]
    fn default_simulation_end_to_end() {
        let config = LabConfig::default();
        let waveforms = Waveforms::generate(&config.defaults, &config.signal);
        let analysis = AmAnalysis::of(&config.defaults, &config.signal);
        assert_eq!(waveforms.len(), config.signal.sample_count);
        assert_eq!(analysis.kind, ModulationKind::Critical);
        assert_eq!(waveforms.display(&config.signal).len(), 100);
    }
}
