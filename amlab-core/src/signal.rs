//! Sample grid and waveform generation.
//!
//! All traces are evaluated over the same grid `t_i = i / n` for `i in 0..n`,
//! which covers one second. Every call to [`Waveforms::generate`] recomputes
//! the traces in full; nothing is cached between parameter changes.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::error::SignalError;
use crate::params::AmParams;

/// Fixed carrier frequency in Hz.
pub const DEFAULT_CARRIER_FREQ: f64 = 20.0;
/// Samples per one-second grid.
pub const DEFAULT_SAMPLE_COUNT: usize = 1000;
/// Leading samples shown in charts.
pub const DEFAULT_DISPLAY_WINDOW: usize = 100;

/// Sampling configuration shared by every trace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalConfig {
    /// Carrier frequency `fc` in Hz.
    pub carrier_freq: f64,
    /// Number of samples over `[0, 1)`.
    pub sample_count: usize,
    /// Number of leading samples handed to charts.
    pub display_window: usize,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            carrier_freq: DEFAULT_CARRIER_FREQ,
            sample_count: DEFAULT_SAMPLE_COUNT,
            display_window: DEFAULT_DISPLAY_WINDOW,
        }
    }
}

impl SignalConfig {
    pub fn validate(&self) -> Result<(), SignalError> {
        if !self.carrier_freq.is_finite() || self.carrier_freq <= 0.0 {
            return Err(SignalError::InvalidConfig(format!(
                "carrier_freq must be positive, got {}",
                self.carrier_freq
            )));
        }
        if self.sample_count == 0 {
            return Err(SignalError::InvalidConfig("sample_count must be at least 1".into()));
        }
        if self.display_window == 0 || self.display_window > self.sample_count {
            return Err(SignalError::InvalidConfig(format!(
                "display_window must be in 1..={}, got {}",
                self.sample_count, self.display_window
            )));
        }
        Ok(())
    }

    pub fn grid(&self) -> SampleGrid {
        SampleGrid::new(self.sample_count)
    }
}

/// Uniform time grid over one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleGrid {
    len: usize,
}

impl SampleGrid {
    pub fn new(len: usize) -> Self {
        Self { len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Time of sample `i` in seconds.
    pub fn time(&self, i: usize) -> f64 {
        i as f64 / self.len as f64
    }

    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len).map(move |i| self.time(i))
    }
}

/// `Am·cos(2π·fm·t)`
pub fn message(params: &AmParams, t: f64) -> f64 {
    params.message_amp * (TAU * params.message_freq * t).cos()
}

/// `Ac·cos(2π·fc·t)`
pub fn carrier(params: &AmParams, carrier_freq: f64, t: f64) -> f64 {
    params.carrier_amp * (TAU * carrier_freq * t).cos()
}

/// Upper envelope `Ac + Am·cos(2π·fm·t)`.
pub fn envelope(params: &AmParams, t: f64) -> f64 {
    params.carrier_amp + message(params, t)
}

/// `(Ac + Am·cos(2π·fm·t))·cos(2π·fc·t)`
pub fn modulated(params: &AmParams, carrier_freq: f64, t: f64) -> f64 {
    envelope(params, t) * (TAU * carrier_freq * t).cos()
}

/// Selector for one of the generated traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trace {
    Message,
    Carrier,
    Modulated,
    UpperEnvelope,
    LowerEnvelope,
}

impl Trace {
    pub const ALL: [Trace; 5] = [
        Trace::Message,
        Trace::Carrier,
        Trace::Modulated,
        Trace::UpperEnvelope,
        Trace::LowerEnvelope,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Trace::Message => "Message Signal",
            Trace::Carrier => "Carrier Signal",
            Trace::Modulated => "AM Signal",
            Trace::UpperEnvelope => "Upper Envelope",
            Trace::LowerEnvelope => "Lower Envelope",
        }
    }

    /// Column name used in CSV export.
    pub fn column(self) -> &'static str {
        match self {
            Trace::Message => "message",
            Trace::Carrier => "carrier",
            Trace::Modulated => "modulated",
            Trace::UpperEnvelope => "upper_envelope",
            Trace::LowerEnvelope => "lower_envelope",
        }
    }
}

/// Every trace sampled over the same grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waveforms {
    pub time: Vec<f64>,
    pub message: Vec<f64>,
    pub carrier: Vec<f64>,
    pub modulated: Vec<f64>,
    pub upper_envelope: Vec<f64>,
    pub lower_envelope: Vec<f64>,
}

impl Waveforms {
    pub fn generate(params: &AmParams, config: &SignalConfig) -> Self {
        let grid = config.grid();
        let fc = config.carrier_freq;
        let n = grid.len();

        let mut w = Self {
            time: Vec::with_capacity(n),
            message: Vec::with_capacity(n),
            carrier: Vec::with_capacity(n),
            modulated: Vec::with_capacity(n),
            upper_envelope: Vec::with_capacity(n),
            lower_envelope: Vec::with_capacity(n),
        };

        for t in grid.times() {
            let m = message(params, t);
            let upper = params.carrier_amp + m;
            let carrier_phase = (TAU * fc * t).cos();
            w.time.push(t);
            w.message.push(m);
            w.carrier.push(params.carrier_amp * carrier_phase);
            w.modulated.push(upper * carrier_phase);
            w.upper_envelope.push(upper);
            w.lower_envelope.push(-upper);
        }

        tracing::debug!(
            fm = params.message_freq,
            am = params.message_amp,
            ac = params.carrier_amp,
            fc,
            samples = n,
            "generated waveforms"
        );
        w
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn trace(&self, trace: Trace) -> &[f64] {
        match trace {
            Trace::Message => &self.message,
            Trace::Carrier => &self.carrier,
            Trace::Modulated => &self.modulated,
            Trace::UpperEnvelope => &self.upper_envelope,
            Trace::LowerEnvelope => &self.lower_envelope,
        }
    }

    /// Borrow the first `n` samples of every trace (`n` is clamped to `len`).
    pub fn view(&self, n: usize) -> WaveformView<'_> {
        let n = n.min(self.len());
        WaveformView {
            time: &self.time[..n],
            message: &self.message[..n],
            carrier: &self.carrier[..n],
            modulated: &self.modulated[..n],
            upper_envelope: &self.upper_envelope[..n],
            lower_envelope: &self.lower_envelope[..n],
        }
    }

    /// The configured display window.
    pub fn display(&self, config: &SignalConfig) -> WaveformView<'_> {
        self.view(config.display_window)
    }
}

/// Borrowed prefix of a [`Waveforms`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveformView<'a> {
    pub time: &'a [f64],
    pub message: &'a [f64],
    pub carrier: &'a [f64],
    pub modulated: &'a [f64],
    pub upper_envelope: &'a [f64],
    pub lower_envelope: &'a [f64],
}

impl<'a> WaveformView<'a> {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn trace(&self, trace: Trace) -> &'a [f64] {
        match trace {
            Trace::Message => self.message,
            Trace::Carrier => self.carrier,
            Trace::Modulated => self.modulated,
            Trace::UpperEnvelope => self.upper_envelope,
            Trace::LowerEnvelope => self.lower_envelope,
        }
    }

    /// `(t, y)` pairs for plotting.
    pub fn points(&self, trace: Trace) -> Vec<(f64, f64)> {
        self.time
            .iter()
            .copied()
            .zip(self.trace(trace).iter().copied())
            .collect()
    }

    /// Smallest and largest value over the given traces, or `None` if all are empty.
    pub fn bounds(&self, traces: &[Trace]) -> Option<(f64, f64)> {
        let mut values = traces.iter().flat_map(|t| self.trace(*t).iter().copied());
        let first = values.next()?;
        Some(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }

    /// Copy the window out, e.g. to export only what is displayed.
    pub fn to_waveforms(&self) -> Waveforms {
        Waveforms {
            time: self.time.to_vec(),
            message: self.message.to_vec(),
            carrier: self.carrier.to_vec(),
            modulated: self.modulated.to_vec(),
            upper_envelope: self.upper_envelope.to_vec(),
            lower_envelope: self.lower_envelope.to_vec(),
        }
    }
}
