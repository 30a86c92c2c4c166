//! Property tests for the converter, delta ring, and engine gating.
//!
//! Runs on host (x86_64) only — proptest is not available for ESP32
//! targets. On ESP32, these tests are compiled out.

#![cfg(not(target_os = "espidf"))]

use proptest::prelude::*;
use thermgrad::config::EngineConfig;
use thermgrad::convert::raw_to_fahrenheit;
use thermgrad::engine::GradientEngine;
use thermgrad::history::DeltaHistory;
use thermgrad::ports::RawSource;

// ── Converter ─────────────────────────────────────────────────

proptest! {
    /// Strictly increasing across the whole 10-bit ADC domain.
    #[test]
    fn convert_monotonic(a in 0u16..=1023, b in 0u16..=1023) {
        prop_assume!(a < b);
        prop_assert!(raw_to_fahrenheit(a) < raw_to_fahrenheit(b));
    }

    /// Repeated conversion of the same reading is bit-identical.
    #[test]
    fn convert_deterministic(raw in 0u16..=1023) {
        prop_assert_eq!(
            raw_to_fahrenheit(raw).to_bits(),
            raw_to_fahrenheit(raw).to_bits()
        );
    }
}

// ── Delta ring ────────────────────────────────────────────────

proptest! {
    /// After any push sequence, the ring's valid slots are exactly the
    /// most recent `window` values (as a multiset — storage order may
    /// have wrapped).
    #[test]
    fn ring_retains_most_recent_window(
        window in 1usize..=16,
        deltas in proptest::collection::vec(-1000.0f32..1000.0, 0..=64),
    ) {
        let mut ring = DeltaHistory::new(window);
        for &d in &deltas {
            ring.push(d);
        }

        let valid = ring.len();
        prop_assert_eq!(valid, deltas.len().min(window));

        let mut stored: Vec<u32> =
            ring.slots()[..valid].iter().map(|f| f.to_bits()).collect();
        let mut expected: Vec<u32> = deltas[deltas.len() - valid..]
            .iter()
            .map(|f| f.to_bits())
            .collect();
        stored.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(stored, expected);
    }

    /// The mean never leaves the closed interval of the stored values.
    #[test]
    fn ring_mean_bounded_by_window(
        window in 1usize..=16,
        deltas in proptest::collection::vec(-1000.0f32..1000.0, 1..=64),
    ) {
        let mut ring = DeltaHistory::new(window);
        for &d in &deltas {
            ring.push(d);
        }

        let valid = &ring.slots()[..ring.len()];
        let lo = valid.iter().copied().fold(f32::INFINITY, f32::min);
        let hi = valid.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let mean = ring.mean();
        // Small tolerance for summation rounding.
        let slack = 1e-3 * (1.0 + hi.abs().max(lo.abs()));
        prop_assert!(mean >= lo - slack && mean <= hi + slack);
    }
}

// ── Engine gating ─────────────────────────────────────────────

struct Replay {
    values: Vec<u16>,
    pos: usize,
}

impl RawSource for Replay {
    fn read_raw(&mut self) -> u16 {
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }
}

proptest! {
    /// For any raw stream, the gradient appears exactly once the
    /// bootstrap tick plus a full window of deltas have elapsed, and
    /// never disappears afterwards.
    #[test]
    fn gradient_gated_on_full_window(
        window in 1u8..=8,
        raws in proptest::collection::vec(0u16..=1023, 1..=32),
        extra_ticks in 0usize..=8,
    ) {
        let config = EngineConfig { window, ..EngineConfig::default() };
        let source = Replay { values: raws, pos: 0 };
        let mut engine = GradientEngine::new(&config, source).unwrap();

        let total = 1 + window as usize + extra_ticks;
        for tick in 1..=total {
            let sample = engine.update();
            let expect_grad = tick > window as usize;
            prop_assert_eq!(
                sample.gradient.is_some(),
                expect_grad,
                "tick {} of window {}",
                tick,
                window
            );
        }
    }
}
