//! Modulation index `μ = Am / Ac` and its distortion regime.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SignalError;
use crate::params::AmParams;

/// Distortion regime implied by the modulation index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModulationKind {
    UnderModulated,
    Critical,
    OverModulated,
}

impl ModulationKind {
    pub const ALL: [ModulationKind; 3] = [
        ModulationKind::UnderModulated,
        ModulationKind::Critical,
        ModulationKind::OverModulated,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ModulationKind::UnderModulated => "Under-modulated",
            ModulationKind::Critical => "Critically modulated",
            ModulationKind::OverModulated => "Over-modulated",
        }
    }

    pub fn condition(self) -> &'static str {
        match self {
            ModulationKind::UnderModulated => "μ < 1",
            ModulationKind::Critical => "μ = 1",
            ModulationKind::OverModulated => "μ > 1",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ModulationKind::UnderModulated => {
                "The carrier has more power than needed, but the signal quality is good."
            }
            ModulationKind::Critical => {
                "The optimal condition for maximum efficiency without distortion."
            }
            ModulationKind::OverModulated => {
                "The envelope crosses zero, which distorts the demodulated signal and should be avoided."
            }
        }
    }
}

impl fmt::Display for ModulationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ratio of message amplitude to carrier amplitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModulationIndex {
    value: f64,
}

impl ModulationIndex {
    /// `μ = am / ac`. A zero, negative or non-finite carrier is an error.
    pub fn from_amplitudes(message_amp: f64, carrier_amp: f64) -> Result<Self, SignalError> {
        if !carrier_amp.is_finite() || carrier_amp <= 0.0 {
            return Err(SignalError::ZeroCarrier(carrier_amp));
        }
        if !message_amp.is_finite() {
            return Err(SignalError::NonFinite {
                param: "Am",
                value: message_amp,
            });
        }
        if message_amp < 0.0 {
            return Err(SignalError::Negative(message_amp));
        }
        Ok(Self {
            value: message_amp / carrier_amp,
        })
    }

    /// Infallible for clamped parameters, whose carrier is at least 0.1.
    pub fn from_params(params: &AmParams) -> Self {
        let ac = params.carrier_amp.max(crate::params::CARRIER_AMP_RANGE.min);
        Self {
            value: params.message_amp.max(0.0) / ac,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// μ rounded to two decimals, the precision shown to the user.
    ///
    /// Parsed back from the `{:.2}` rendering, so it matches the displayed
    /// digits exactly.
    pub fn rounded(&self) -> f64 {
        format!("{:.2}", self.value)
            .parse()
            .unwrap_or(self.value)
    }

    /// Classify on the rounded value, so the badge always agrees with the
    /// number displayed next to it.
    pub fn kind(&self) -> ModulationKind {
        let r = self.rounded();
        if r > 1.0 {
            ModulationKind::OverModulated
        } else if r == 1.0 {
            ModulationKind::Critical
        } else {
            ModulationKind::UnderModulated
        }
    }

    /// Modulation depth as a percentage.
    pub fn percent(&self) -> f64 {
        self.value * 100.0
    }
}

impl fmt::Display for ModulationIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.value)
    }
}
