//! Derived quantities of a DSB full-carrier AM signal.
//!
//! For a single-tone message the spectrum has three lines (carrier and two
//! sidebands), and the power split between them depends only on μ.

use serde::{Deserialize, Serialize};

use crate::modulation::{ModulationIndex, ModulationKind};
use crate::params::AmParams;
use crate::signal::{SignalConfig, Waveforms};

/// Spectral lines of single-tone AM, in Hz.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spectrum {
    pub carrier: f64,
    pub lower_sideband: f64,
    pub upper_sideband: f64,
    pub bandwidth: f64,
}

impl Spectrum {
    pub fn of(params: &AmParams, carrier_freq: f64) -> Self {
        let fm = params.message_freq;
        Self {
            carrier: carrier_freq,
            lower_sideband: carrier_freq - fm,
            upper_sideband: carrier_freq + fm,
            bandwidth: 2.0 * fm,
        }
    }
}

/// Average power into a 1 Ω load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerBudget {
    /// `Ac² / 2`
    pub carrier: f64,
    /// `Am² / 4`, both sidebands together.
    pub sidebands: f64,
    pub total: f64,
    /// Fraction of the total power carried by the sidebands, `μ² / (2 + μ²)`.
    pub efficiency: f64,
}

impl PowerBudget {
    pub fn of(params: &AmParams) -> Self {
        let carrier = params.carrier_amp.powi(2) / 2.0;
        let sidebands = params.message_amp.powi(2) / 4.0;
        let total = carrier + sidebands;
        let efficiency = if total > 0.0 { sidebands / total } else { 0.0 };
        Self {
            carrier,
            sidebands,
            total,
            efficiency,
        }
    }
}

/// Extremes of the upper envelope `Ac + Am·cos(2π·fm·t)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeStats {
    pub peak: f64,
    pub trough: f64,
    /// The envelope goes negative, so the carrier phase flips.
    pub crosses_zero: bool,
}

impl EnvelopeStats {
    pub fn of(params: &AmParams) -> Self {
        let peak = params.carrier_amp + params.message_amp;
        let trough = params.carrier_amp - params.message_amp;
        Self {
            peak,
            trough,
            crosses_zero: trough < 0.0,
        }
    }
}

/// Everything the simulator reports next to the charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmAnalysis {
    pub index: ModulationIndex,
    pub kind: ModulationKind,
    pub spectrum: Spectrum,
    pub power: PowerBudget,
    pub envelope: EnvelopeStats,
}

impl AmAnalysis {
    pub fn of(params: &AmParams, config: &SignalConfig) -> Self {
        let index = ModulationIndex::from_params(params);
        Self {
            index,
            kind: index.kind(),
            spectrum: Spectrum::of(params, config.carrier_freq),
            power: PowerBudget::of(params),
            envelope: EnvelopeStats::of(params),
        }
    }
}

/// Largest `|modulated|` over the sampled grid.
pub fn measured_peak(waveforms: &Waveforms) -> f64 {
    waveforms
        .modulated
        .iter()
        .fold(0.0_f64, |acc, v| acc.max(v.abs()))
}
