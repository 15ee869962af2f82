//! Property tests for the signal math.
//!
//! Uses proptest to verify:
//! 1. Closed forms: every sample equals its closed-form expression
//! 2. Envelope: the modulated signal never escapes its envelope
//! 3. Classification: μ < 1 / = 1 / > 1 maps to under / critical / over
//! 4. Slider quantization: adjusted values stay on the step grid and in range

use std::f64::consts::TAU;

use proptest::prelude::*;

use amlab_core::analysis::PowerBudget;
use amlab_core::params::{CARRIER_AMP_RANGE, MESSAGE_AMP_RANGE, MESSAGE_FREQ_RANGE};
use amlab_core::{AmParams, ModulationIndex, ModulationKind, Param, SignalConfig, Waveforms};

const EPS: f64 = 1e-9;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_params() -> impl Strategy<Value = AmParams> {
    (
        MESSAGE_FREQ_RANGE.min..=MESSAGE_FREQ_RANGE.max,
        MESSAGE_AMP_RANGE.min..=MESSAGE_AMP_RANGE.max,
        CARRIER_AMP_RANGE.min..=CARRIER_AMP_RANGE.max,
    )
        .prop_map(|(fm, am, ac)| AmParams::clamped(fm, am, ac))
}

fn arb_slider_value() -> impl Strategy<Value = f64> {
    (1u32..=50).prop_map(|i| f64::from(i) / 10.0)
}

fn arb_param() -> impl Strategy<Value = Param> {
    prop_oneof![
        Just(Param::MessageFreq),
        Just(Param::MessageAmp),
        Just(Param::CarrierAmp),
    ]
}

// ── 1. Closed forms ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn samples_follow_closed_forms(p in arb_params(), i in 0usize..1000) {
        let config = SignalConfig::default();
        let w = Waveforms::generate(&p, &config);
        let t = w.time[i];
        let fc = config.carrier_freq;

        prop_assert!((0.0..1.0).contains(&t));
        prop_assert!((w.message[i] - p.message_amp * (TAU * p.message_freq * t).cos()).abs() < EPS);
        prop_assert!((w.carrier[i] - p.carrier_amp * (TAU * fc * t).cos()).abs() < EPS);
        let expected = (p.carrier_amp + p.message_amp * (TAU * p.message_freq * t).cos())
            * (TAU * fc * t).cos();
        prop_assert!((w.modulated[i] - expected).abs() < EPS);
    }

    #[test]
    fn time_grid_is_strictly_increasing(n in 1usize..2000) {
        let config = SignalConfig { sample_count: n, display_window: 1, ..Default::default() };
        let w = Waveforms::generate(&AmParams::default(), &config);
        prop_assert_eq!(w.len(), n);
        prop_assert_eq!(w.time[0], 0.0);
        prop_assert!(w.time.windows(2).all(|p| p[0] < p[1]));
        prop_assert!(*w.time.last().unwrap() < 1.0);
    }
}

// ── 2. Envelope ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn modulated_stays_inside_envelope(p in arb_params()) {
        let w = Waveforms::generate(&p, &SignalConfig::default());
        for i in 0..w.len() {
            prop_assert!(w.modulated[i].abs() <= w.upper_envelope[i].abs() + EPS);
            prop_assert_eq!(w.lower_envelope[i], -w.upper_envelope[i]);
        }
    }

    #[test]
    fn efficiency_matches_index(p in arb_params()) {
        let mu = ModulationIndex::from_params(&p).value();
        let eff = PowerBudget::of(&p).efficiency;
        prop_assert!((eff - mu * mu / (2.0 + mu * mu)).abs() < EPS);
        prop_assert!((0.0..1.0).contains(&eff));
    }
}

// ── 3. Classification ────────────────────────────────────────────────

proptest! {
    #[test]
    fn classification_on_slider_grid(am in arb_slider_value(), ac in arb_slider_value()) {
        let idx = ModulationIndex::from_amplitudes(am, ac).unwrap();
        let expected = if (am - ac).abs() < 1e-9 {
            ModulationKind::Critical
        } else if am > ac {
            ModulationKind::OverModulated
        } else {
            ModulationKind::UnderModulated
        };
        // Distinct slider values differ by at least 0.1, so μ is never within
        // rounding distance of 1 unless am == ac.
        prop_assert_eq!(idx.kind(), expected);
    }

    #[test]
    fn nonpositive_carrier_never_divides(am in 0.0..5.0_f64, ac in -5.0..=0.0_f64) {
        prop_assert!(ModulationIndex::from_amplitudes(am, ac).is_err());
    }
}

// ── 4. Slider quantization ───────────────────────────────────────────

proptest! {
    #[test]
    fn adjust_stays_in_range_and_on_grid(
        param in arb_param(),
        moves in prop::collection::vec(-30i32..=30, 1..20),
    ) {
        let mut p = AmParams::default();
        let range = param.range();
        for steps in moves {
            p.adjust(param, steps);
            let v = p.get(param);
            prop_assert!(range.contains(v));
            let k = (v - range.min) / range.step;
            prop_assert!((k - k.round()).abs() < 1e-6);
        }
    }
}
