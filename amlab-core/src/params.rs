//! Simulation parameters: message frequency, message amplitude, carrier amplitude.
//!
//! Each parameter has a fixed range and slider step. Values set through
//! [`AmParams::set`] and [`AmParams::adjust`] are always clamped, so the
//! carrier amplitude can never reach zero through interactive input.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SignalError;

/// One adjustable parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Param {
    MessageFreq,
    MessageAmp,
    CarrierAmp,
}

impl Param {
    /// Slider order.
    pub const ALL: [Param; 3] = [Param::MessageFreq, Param::MessageAmp, Param::CarrierAmp];

    pub fn label(self) -> &'static str {
        match self {
            Param::MessageFreq => "Message Frequency",
            Param::MessageAmp => "Message Amplitude",
            Param::CarrierAmp => "Carrier Amplitude",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Param::MessageFreq => "fm",
            Param::MessageAmp => "Am",
            Param::CarrierAmp => "Ac",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Param::MessageFreq => "Hz",
            Param::MessageAmp | Param::CarrierAmp => "",
        }
    }

    pub fn range(self) -> ParamRange {
        match self {
            Param::MessageFreq => MESSAGE_FREQ_RANGE,
            Param::MessageAmp => MESSAGE_AMP_RANGE,
            Param::CarrierAmp => CARRIER_AMP_RANGE,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Param::MessageFreq => 0,
            Param::MessageAmp => 1,
            Param::CarrierAmp => 2,
        }
    }

    pub fn next(self) -> Param {
        Param::ALL[(self.index() + 1) % Param::ALL.len()]
    }

    pub fn prev(self) -> Param {
        Param::ALL[(self.index() + Param::ALL.len() - 1) % Param::ALL.len()]
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.symbol())
    }
}

/// Bounds, step and default of a parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

pub const MESSAGE_FREQ_RANGE: ParamRange = ParamRange {
    min: 1.0,
    max: 10.0,
    step: 0.1,
    default: 2.0,
};

pub const MESSAGE_AMP_RANGE: ParamRange = ParamRange {
    min: 0.0,
    max: 5.0,
    step: 0.1,
    default: 1.0,
};

pub const CARRIER_AMP_RANGE: ParamRange = ParamRange {
    min: 0.1,
    max: 5.0,
    step: 0.1,
    default: 1.0,
};

impl ParamRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Bound a value to the range. Non-finite input yields the default.
    pub fn clamp(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.default;
        }
        value.clamp(self.min, self.max)
    }

    /// Snap to the step grid anchored at `min`, then clamp.
    ///
    /// The result is rounded to 1e-9 so repeated stepping does not drift
    /// (0.1 has no exact binary representation).
    pub fn quantize(&self, value: f64) -> f64 {
        let v = self.clamp(value);
        let steps = ((v - self.min) / self.step).round();
        let snapped = self.min + steps * self.step;
        let tidy = (snapped * 1e9).round() / 1e9;
        tidy.clamp(self.min, self.max)
    }

    /// Position of `value` inside the range as a fraction in `[0, 1]`.
    pub fn fraction(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }
}

/// The three user-controlled quantities of the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmParams {
    /// Message frequency `fm` in Hz.
    pub message_freq: f64,
    /// Message amplitude `Am`.
    pub message_amp: f64,
    /// Carrier amplitude `Ac`.
    pub carrier_amp: f64,
}

impl Default for AmParams {
    fn default() -> Self {
        Self {
            message_freq: MESSAGE_FREQ_RANGE.default,
            message_amp: MESSAGE_AMP_RANGE.default,
            carrier_amp: CARRIER_AMP_RANGE.default,
        }
    }
}

impl AmParams {
    /// Strict constructor: every value must be finite and inside its range.
    pub fn new(message_freq: f64, message_amp: f64, carrier_amp: f64) -> Result<Self, SignalError> {
        let params = Self {
            message_freq,
            message_amp,
            carrier_amp,
        };
        params.validate()?;
        Ok(params)
    }

    /// Lenient constructor: out-of-range values are clamped.
    pub fn clamped(message_freq: f64, message_amp: f64, carrier_amp: f64) -> Self {
        Self {
            message_freq: MESSAGE_FREQ_RANGE.clamp(message_freq),
            message_amp: MESSAGE_AMP_RANGE.clamp(message_amp),
            carrier_amp: CARRIER_AMP_RANGE.clamp(carrier_amp),
        }
    }

    pub fn validate(&self) -> Result<(), SignalError> {
        for param in Param::ALL {
            let value = self.get(param);
            if !value.is_finite() {
                return Err(SignalError::NonFinite {
                    param: param.symbol(),
                    value,
                });
            }
            let range = param.range();
            if !range.contains(value) {
                return Err(SignalError::OutOfRange {
                    param,
                    value,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        Ok(())
    }

    pub fn get(&self, param: Param) -> f64 {
        match param {
            Param::MessageFreq => self.message_freq,
            Param::MessageAmp => self.message_amp,
            Param::CarrierAmp => self.carrier_amp,
        }
    }

    /// Set a parameter, clamping to its range.
    pub fn set(&mut self, param: Param, value: f64) {
        let v = param.range().clamp(value);
        match param {
            Param::MessageFreq => self.message_freq = v,
            Param::MessageAmp => self.message_amp = v,
            Param::CarrierAmp => self.carrier_amp = v,
        }
    }

    /// Move a parameter by `steps` slider steps (negative moves down).
    pub fn adjust(&mut self, param: Param, steps: i32) {
        let range = param.range();
        let target = self.get(param) + range.step * f64::from(steps);
        self.set(param, range.quantize(target));
    }
}
