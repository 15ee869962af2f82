//! App state persistence: JSON save/load across restarts.

use std::path::Path;

use serde::{Deserialize, Serialize};

use amlab_core::{AmParams, Param};

use crate::app::{AppState, Overlay, Panel, Visibility};

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    pub params: Option<AmParams>,
    pub selected: Param,
    pub visibility: Visibility,
    pub active_panel: Panel,
    pub welcome_dismissed: bool,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            params: None,
            selected: Param::MessageFreq,
            visibility: Visibility::default(),
            active_panel: Panel::Simulator,
            welcome_dismissed: false,
        }
    }
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "ignoring corrupt state file");
            PersistedState::default()
        }),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from AppState.
pub fn extract(app: &AppState) -> PersistedState {
    PersistedState {
        params: Some(app.sim.params),
        selected: app.sim.selected,
        visibility: app.sim.visibility,
        active_panel: app.active_panel,
        welcome_dismissed: app.overlay != Overlay::Welcome,
    }
}

/// Apply persisted state to AppState. Saved parameters are clamped, since
/// the file may have been edited by hand.
pub fn apply(app: &mut AppState, state: PersistedState) {
    if let Some(params) = state.params {
        app.set_params(params);
    }
    app.sim.selected = state.selected;
    app.sim.visibility = state.visibility;
    app.active_panel = state.active_panel;
    if !state.welcome_dismissed {
        app.overlay = Overlay::Welcome;
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use amlab_core::LabConfig;

    #[test]
    fn roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("amlab").join("state.json");

        let mut app = AppState::new(LabConfig::default(), PathBuf::from("."));
        app.sim.selected = Param::CarrierAmp;
        app.adjust_selected(3);
        app.sim.visibility.carrier = false;
        app.active_panel = Panel::Explore;

        save(&path, &extract(&app)).unwrap();
        let loaded = load(&path);

        let mut restored = AppState::new(LabConfig::default(), PathBuf::from("."));
        apply(&mut restored, loaded);
        assert_eq!(restored.sim.params.carrier_amp, 1.3);
        assert_eq!(restored.sim.selected, Param::CarrierAmp);
        assert!(!restored.sim.visibility.carrier);
        assert_eq!(restored.active_panel, Panel::Explore);
        assert_eq!(restored.overlay, Overlay::None);
        assert!((restored.sim.waveforms.carrier[0] - 1.3).abs() < 1e-12);
    }

    #[test]
    fn missing_file_returns_defaults() {
        let loaded = load(Path::new("/nonexistent/path/state.json"));
        assert!(loaded.params.is_none());
        assert!(!loaded.welcome_dismissed);
    }

    #[test]
    fn corrupt_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "not valid json {{{").unwrap();

        let loaded = load(&path);
        assert!(loaded.params.is_none());
    }

    #[test]
    fn first_run_shows_welcome() {
        let mut app = AppState::new(LabConfig::default(), PathBuf::from("."));
        apply(&mut app, PersistedState::default());
        assert_eq!(app.overlay, Overlay::Welcome);
        assert_eq!(app.sim.params, AmParams::default());
    }

    #[test]
    fn edited_params_are_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(
            &path,
            r#"{"params":{"message_freq":2.0,"message_amp":1.0,"carrier_amp":0.0},"welcome_dismissed":true}"#,
        )
        .unwrap();

        let mut app = AppState::new(LabConfig::default(), PathBuf::from("."));
        apply(&mut app, load(&path));
        assert_eq!(app.sim.params.carrier_amp, 0.1);
        assert_eq!(app.overlay, Overlay::None);
    }
}
