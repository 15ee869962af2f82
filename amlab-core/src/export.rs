//! Waveform export: CSV sample table and JSON report.
//!
//! JSON reports carry a `schema_version`; newer versions are rejected on load.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analysis::AmAnalysis;
use crate::params::AmParams;
use crate::signal::{SignalConfig, Trace, Waveforms};

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv buffer error: {0}")]
    CsvBuffer(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unsupported schema version {found} (max supported: {supported})")]
    UnsupportedSchema { found: u32, supported: u32 },
}

/// A complete, self-describing snapshot of one simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveformReport {
    pub schema_version: u32,
    pub generated_at: DateTime<Utc>,
    pub params: AmParams,
    /// The grid the traces were sampled on.
    pub config: SignalConfig,
    pub analysis: AmAnalysis,
    /// Either the full grid or a leading window of it, so
    /// `waveforms.len() <= config.sample_count` and
    /// `time[i] == i / config.sample_count`.
    pub waveforms: Waveforms,
}

impl WaveformReport {
    /// True when `waveforms` holds fewer samples than the grid.
    pub fn is_windowed(&self) -> bool {
        self.waveforms.len() < self.config.sample_count
    }
}

impl WaveformReport {
    pub fn new(params: AmParams, config: SignalConfig, waveforms: Waveforms) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            generated_at: Utc::now(),
            analysis: AmAnalysis::of(&params, &config),
            params,
            config,
            waveforms,
        }
    }

    /// Generate the full grid for `params` and wrap it in a report.
    pub fn generate(params: AmParams, config: SignalConfig) -> Self {
        let waveforms = Waveforms::generate(&params, &config);
        Self::new(params, config, waveforms)
    }
}

/// One row per sample: `t` followed by every trace.
pub fn export_csv(waveforms: &Waveforms) -> Result<String, ExportError> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    let mut header = vec!["t"];
    header.extend(Trace::ALL.iter().map(|t| t.column()));
    wtr.write_record(&header)?;

    for i in 0..waveforms.len() {
        let mut row = Vec::with_capacity(Trace::ALL.len() + 1);
        row.push(waveforms.time[i].to_string());
        for trace in Trace::ALL {
            row.push(waveforms.trace(trace)[i].to_string());
        }
        wtr.write_record(&row)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| ExportError::CsvBuffer(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::CsvBuffer(e.to_string()))
}

pub fn export_json(report: &WaveformReport) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn import_json(json: &str) -> Result<WaveformReport, ExportError> {
    let report: WaveformReport = serde_json::from_str(json)?;
    if report.schema_version > SCHEMA_VERSION {
        return Err(ExportError::UnsupportedSchema {
            found: report.schema_version,
            supported: SCHEMA_VERSION,
        });
    }
    Ok(report)
}

/// Write `contents` to `path`, creating parent directories if needed.
pub fn write_to(path: &Path, contents: &str) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, contents)?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "exported waveforms");
    Ok(())
}
