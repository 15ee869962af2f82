//! End-to-end checks of a simulation session: parameters in, traces,
//! analysis and exports out.

use amlab_core::content::{self, Block};
use amlab_core::export::{self, WaveformReport};
use amlab_core::{
    AmAnalysis, AmParams, LabConfig, ModulationKind, Param, SignalConfig, Trace, Waveforms,
};

#[test]
fn slider_session_recomputes_every_trace() {
    let config = SignalConfig::default();
    let mut params = AmParams::default();
    let before = Waveforms::generate(&params, &config);

    // Push Am two steps up: 1.0 -> 1.2, now over-modulated.
    params.adjust(Param::MessageAmp, 2);
    let after = Waveforms::generate(&params, &config);

    assert_eq!(params.message_amp, 1.2);
    assert_eq!(after.carrier, before.carrier);
    assert_ne!(after.message, before.message);
    assert_ne!(after.modulated, before.modulated);
    assert_eq!(
        AmAnalysis::of(&params, &config).kind,
        ModulationKind::OverModulated
    );
}

#[test]
fn overmodulation_flips_carrier_phase() {
    // Am = 2, Ac = 1, fm = 1: the envelope is negative around t = 0.5.
    let params = AmParams::clamped(1.0, 2.0, 1.0);
    let config = SignalConfig::default();
    let w = Waveforms::generate(&params, &config);

    assert!(w.upper_envelope[500] < 0.0);
    assert!((w.upper_envelope[500] + 1.0).abs() < 1e-12);
    // At t = 0.5 the 20 Hz carrier is at a crest, so the AM sample is
    // the (negative) envelope itself.
    assert!((w.modulated[500] - w.upper_envelope[500]).abs() < 1e-9);
    assert!(AmAnalysis::of(&params, &config).envelope.crosses_zero);
}

#[test]
fn configured_grid_drives_generation() {
    let config = LabConfig::from_toml(
        r#"
[signal]
carrier_freq = 50.0
sample_count = 200
display_window = 20

[defaults]
message_freq = 5.0
message_amp = 0.5
carrier_amp = 2.0
"#,
    )
    .unwrap();

    let w = Waveforms::generate(&config.defaults, &config.signal);
    assert_eq!(w.len(), 200);
    assert_eq!(w.display(&config.signal).len(), 20);

    let a = AmAnalysis::of(&config.defaults, &config.signal);
    assert_eq!(a.index.value(), 0.25);
    assert_eq!(a.kind, ModulationKind::UnderModulated);
    assert_eq!(a.spectrum.upper_sideband, 55.0);
    assert_eq!(a.spectrum.bandwidth, 10.0);
}

#[test]
fn csv_export_covers_full_grid() {
    let config = SignalConfig::default();
    let w = Waveforms::generate(&AmParams::default(), &config);
    let csv = export::export_csv(&w).unwrap();
    assert_eq!(csv.lines().count(), config.sample_count + 1);
}

#[test]
fn json_report_written_and_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");

    let report = WaveformReport::generate(AmParams::default(), SignalConfig::default());
    export::write_to(&path, &export::export_json(&report).unwrap()).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let back = export::import_json(&text).unwrap();
    assert_eq!(back.schema_version, export::SCHEMA_VERSION);
    assert_eq!(back.analysis.kind, ModulationKind::Critical);
    assert_eq!(back.waveforms.trace(Trace::Carrier).len(), 1000);
}

#[test]
fn content_formula_matches_generator() {
    let math = content::topic("math").unwrap();
    let formula = math
        .blocks
        .iter()
        .find_map(|b| match b {
            Block::Formula(f) => Some(*f),
            _ => None,
        })
        .unwrap();
    assert!(formula.contains("Ac + Am·cos(2π·fm·t)"));
    assert!(formula.contains("cos(2π·fc·t)"));
}
