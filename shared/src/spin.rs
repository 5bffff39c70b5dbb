//! Spin animation state machine.
//!
//! A spin samples a provisional index only to pick a pleasing target angle.
//! The reported winner is always decoded from the rotation the wheel actually
//! stops at, so the pointer and the result cannot disagree.

use std::f64::consts::TAU;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::entry::Entry;
use crate::geometry::{decode_winner, segment_angle};
use crate::random::{pick_index, RandomSource, SecureRandom};

pub const SPIN_DURATION_MS: f64 = 3000.0;
pub const EXTRA_SPINS: u32 = 5;
/// Stop position jitter as a fraction of one segment, either side.
pub const JITTER_FRACTION: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinConfig {
    pub duration_ms: f64,
    pub extra_spins: u32,
    pub jitter_fraction: f64,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            duration_ms: SPIN_DURATION_MS,
            extra_spins: EXTRA_SPINS,
            jitter_fraction: JITTER_FRACTION,
        }
    }
}

impl SpinConfig {
    /// Clamps values that would break the animation.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        Self {
            duration_ms: if self.duration_ms.is_finite() && self.duration_ms >= 0.0 {
                self.duration_ms
            } else {
                defaults.duration_ms
            },
            extra_spins: self.extra_spins.min(50),
            jitter_fraction: if self.jitter_fraction.is_finite() {
                self.jitter_fraction.clamp(0.0, 0.5)
            } else {
                defaults.jitter_fraction
            },
        }
    }
}

pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Rotation delta that brings the middle of segment `index` (shifted by
/// `offset`) under the pointer after `extra_spins` full turns.
pub fn sample_target(index: usize, offset: f64, n: usize, extra_spins: u32) -> f64 {
    let theta = segment_angle(n);
    -(index as f64 * theta + theta / 2.0 + offset) - f64::from(extra_spins) * TAU
}

/// Random offset in `[-jitter·θ, jitter·θ)`.
pub fn sample_offset<R: RandomSource + ?Sized>(source: &mut R, n: usize, jitter_fraction: f64) -> f64 {
    (source.next_unit() * 2.0 - 1.0) * jitter_fraction * segment_angle(n)
}

/// Owned randomness and configuration for a wheel.
pub struct SpinContext {
    random: Box<dyn RandomSource>,
    config: SpinConfig,
}

impl SpinContext {
    pub fn new(random: impl RandomSource + 'static, config: SpinConfig) -> Self {
        Self {
            random: Box::new(random),
            config: config.sanitized(),
        }
    }

    /// Secure source; `fallback_seed` seeds the generator used if the
    /// platform source fails.
    pub fn secure(fallback_seed: u64, config: SpinConfig) -> Self {
        Self::new(SecureRandom::new(fallback_seed), config)
    }

    pub fn config(&self) -> SpinConfig {
        self.config
    }

    pub fn set_config(&mut self, config: SpinConfig) {
        self.config = config.sanitized();
    }

    pub fn random_mut(&mut self) -> &mut dyn RandomSource {
        self.random.as_mut()
    }
}

impl std::fmt::Debug for SpinContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpinContext").field("config", &self.config).finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpinOutcome {
    pub index: usize,
    pub label: String,
    pub rotation: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinRequest {
    Started {
        provisional_index: usize,
        target_rotation: f64,
    },
    NoEntries,
    AlreadySpinning,
}

impl SpinRequest {
    pub fn is_started(&self) -> bool {
        matches!(self, SpinRequest::Started { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub rotation: f64,
    pub progress: f64,
    /// The segment under the pointer changed since the previous frame.
    pub crossed_segment: bool,
    pub outcome: Option<SpinOutcome>,
}

#[derive(Debug, Clone)]
struct SpinAnimation {
    from: f64,
    to: f64,
    started_at: f64,
    duration_ms: f64,
    entries: Vec<Entry>,
    last_index: Option<usize>,
}

impl SpinAnimation {
    fn progress_at(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.started_at) / self.duration_ms).clamp(0.0, 1.0)
    }

    fn rotation_at(&self, progress: f64) -> f64 {
        if progress >= 1.0 {
            self.to
        } else {
            self.from + (self.to - self.from) * ease_out_cubic(progress)
        }
    }
}

#[derive(Debug, Clone)]
enum Phase {
    Idle,
    Spinning(SpinAnimation),
}

/// Drives one wheel: `Idle -> Spinning -> Idle`.
#[derive(Debug)]
pub struct WheelController {
    context: SpinContext,
    rotation: f64,
    phase: Phase,
}

impl WheelController {
    pub fn new(context: SpinContext) -> Self {
        Self::with_rotation(context, 0.0)
    }

    pub fn with_rotation(context: SpinContext, rotation: f64) -> Self {
        Self {
            context,
            rotation: if rotation.is_finite() { rotation } else { 0.0 },
            phase: Phase::Idle,
        }
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.phase, Phase::Spinning(_))
    }

    pub fn context(&self) -> &SpinContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut SpinContext {
        &mut self.context
    }

    /// Index currently under the pointer for a wheel of `n` entries.
    pub fn current_index(&self, n: usize) -> Option<usize> {
        decode_winner(self.rotation, n)
    }

    pub fn request_spin(&mut self, entries: &[Entry], now_ms: f64) -> SpinRequest {
        if entries.is_empty() {
            debug!("Spin ignored: no entries");
            return SpinRequest::NoEntries;
        }
        if self.is_spinning() {
            debug!("Spin ignored: already spinning");
            return SpinRequest::AlreadySpinning;
        }

        let n = entries.len();
        let config = self.context.config();
        let random = self.context.random_mut();
        let Some(provisional_index) = pick_index(&mut *random, n) else {
            return SpinRequest::NoEntries;
        };
        let offset = sample_offset(random, n, config.jitter_fraction);
        let target_rotation = sample_target(provisional_index, offset, n, config.extra_spins);

        debug!(
            "Spin started: {} entries, provisional index {}, target {:.4}",
            n, provisional_index, target_rotation
        );

        self.phase = Phase::Spinning(SpinAnimation {
            from: self.rotation,
            to: self.rotation + target_rotation,
            started_at: now_ms,
            duration_ms: config.duration_ms,
            entries: entries.to_vec(),
            last_index: decode_winner(self.rotation, n),
        });

        SpinRequest::Started {
            provisional_index,
            target_rotation,
        }
    }

    /// Advances the animation to `now_ms`. When the spin completes the
    /// controller returns to idle and the frame carries the outcome.
    pub fn tick(&mut self, now_ms: f64) -> Frame {
        let Phase::Spinning(animation) = &mut self.phase else {
            return Frame {
                rotation: self.rotation,
                progress: 1.0,
                crossed_segment: false,
                outcome: None,
            };
        };

        let progress = animation.progress_at(now_ms);
        let rotation = animation.rotation_at(progress);
        let n = animation.entries.len();
        let index = decode_winner(rotation, n);
        let crossed_segment = index != animation.last_index;
        animation.last_index = index;
        self.rotation = rotation;

        if progress < 1.0 {
            return Frame {
                rotation,
                progress,
                crossed_segment,
                outcome: None,
            };
        }

        let entries = match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Spinning(finished) => finished.entries,
            Phase::Idle => Vec::new(),
        };
        let outcome = decode_winner(rotation, n).and_then(|index| {
            entries.get(index).map(|entry| SpinOutcome {
                index,
                label: entry.label().to_string(),
                rotation,
            })
        });
        if let Some(outcome) = &outcome {
            debug!("Spin finished on index {} ({})", outcome.index, outcome.label);
        }

        Frame {
            rotation,
            progress,
            crossed_segment,
            outcome,
        }
    }

    /// Abandons an in-flight spin; the wheel stays where the last frame left it.
    pub fn cancel(&mut self) {
        if self.is_spinning() {
            debug!("Spin cancelled at rotation {:.4}", self.rotation);
            self.phase = Phase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededRandom;
    use std::f64::consts::PI;

    /// Replays a fixed list of raw values.
    struct Scripted {
        values: Vec<u32>,
        next: usize,
    }

    impl Scripted {
        fn new(values: &[u32]) -> Self {
            Self {
                values: values.to_vec(),
                next: 0,
            }
        }
    }

    impl RandomSource for Scripted {
        fn next_u32(&mut self) -> u32 {
            let v = self.values[self.next % self.values.len()];
            self.next += 1;
            v
        }
    }

    fn entries(labels: &[&str]) -> Vec<Entry> {
        labels
            .iter()
            .enumerate()
            .map(|(i, l)| Entry::with_id(format!("e{}", i), *l, "#f97316"))
            .collect()
    }

    fn seeded(seed: u64) -> WheelController {
        WheelController::new(SpinContext::new(SeededRandom::new(seed), SpinConfig::default()))
    }

    fn run_spin(controller: &mut WheelController, list: &[Entry], start: f64) -> SpinOutcome {
        assert!(controller.request_spin(list, start).is_started());
        let frame = controller.tick(start + SPIN_DURATION_MS);
        frame.outcome.expect("spin should finish")
    }

    #[test]
    fn test_ease_out_cubic() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
        assert_eq!(ease_out_cubic(-3.0), 0.0);
        assert_eq!(ease_out_cubic(7.0), 1.0);
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease_out_cubic(i as f64 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn test_sample_target_formula() {
        let theta = PI / 2.0;
        let target = sample_target(2, 0.1, 4, 5);
        let expected = -(2.0 * theta + theta / 2.0 + 0.1) - 5.0 * TAU;
        assert!((target - expected).abs() < 1e-12);
    }

    #[test]
    fn test_target_lands_on_sampled_index_from_zero() {
        for n in 1..15 {
            for index in 0..n {
                let jitter = segment_angle(n) * 0.19;
                for offset in [-jitter, 0.0, jitter] {
                    let target = sample_target(index, offset, n, EXTRA_SPINS);
                    assert_eq!(decode_winner(target, n), Some(index));
                }
            }
        }
    }

    #[test]
    fn test_offset_within_jitter() {
        let mut rng = SeededRandom::new(3);
        let n = 6;
        let bound = JITTER_FRACTION * segment_angle(n);
        for _ in 0..1000 {
            let offset = sample_offset(&mut rng, n, JITTER_FRACTION);
            assert!(offset >= -bound && offset < bound);
        }
    }

    #[test]
    fn test_target_deterministic_for_seed() {
        let list = entries(&["A", "B", "C", "D", "E"]);
        let mut a = seeded(99);
        let mut b = seeded(99);
        for i in 0..20 {
            let t = i as f64 * 5000.0;
            assert_eq!(a.request_spin(&list, t), b.request_spin(&list, t));
            assert_eq!(a.tick(t + 3000.0), b.tick(t + 3000.0));
        }
    }

    #[test]
    fn test_scripted_source_picks_expected_target() {
        // u32::MAX / 2 + 1 -> unit 0.5 -> index 2 of 4, offset 0
        let half = u32::MAX / 2 + 1;
        let mut controller = WheelController::new(SpinContext::new(Scripted::new(&[half]), SpinConfig::default()));
        let list = entries(&["A", "B", "C", "D"]);
        let request = controller.request_spin(&list, 0.0);
        let expected = sample_target(2, 0.0, 4, EXTRA_SPINS);
        match request {
            SpinRequest::Started {
                provisional_index,
                target_rotation,
            } => {
                assert_eq!(provisional_index, 2);
                assert!((target_rotation - expected).abs() < 1e-12);
            }
            other => panic!("unexpected {:?}", other),
        }
        let outcome = controller.tick(SPIN_DURATION_MS).outcome.unwrap();
        assert_eq!(outcome.label, "C");
    }

    #[test]
    fn test_empty_entries_never_spin() {
        let mut controller = seeded(1);
        assert_eq!(controller.request_spin(&[], 0.0), SpinRequest::NoEntries);
        assert!(!controller.is_spinning());
        let frame = controller.tick(10_000.0);
        assert!(frame.outcome.is_none());
        assert_eq!(frame.rotation, 0.0);
    }

    #[test]
    fn test_second_request_ignored_while_spinning() {
        let list = entries(&["A", "B"]);
        let mut controller = seeded(2);
        let first = controller.request_spin(&list, 0.0);
        assert!(first.is_started());
        assert_eq!(controller.request_spin(&list, 100.0), SpinRequest::AlreadySpinning);
        controller.tick(1000.0);
        assert_eq!(controller.request_spin(&list, 1000.0), SpinRequest::AlreadySpinning);
        assert!(controller.tick(3000.0).outcome.is_some());
        assert!(controller.request_spin(&list, 3100.0).is_started());
    }

    #[test]
    fn test_animation_progress_and_completion() {
        let list = entries(&["A", "B", "C"]);
        let mut controller = seeded(5);
        let SpinRequest::Started { target_rotation, .. } = controller.request_spin(&list, 1000.0) else {
            panic!("spin should start");
        };

        let start = controller.tick(1000.0);
        assert_eq!(start.progress, 0.0);
        assert_eq!(start.rotation, 0.0);
        assert!(start.outcome.is_none());

        let mid = controller.tick(2500.0);
        assert!((mid.progress - 0.5).abs() < 1e-12);
        assert!((mid.rotation - target_rotation * 0.875).abs() < 1e-9);
        assert!(controller.is_spinning());

        let end = controller.tick(4000.0);
        assert_eq!(end.progress, 1.0);
        assert_eq!(end.rotation, target_rotation);
        assert!(!controller.is_spinning());
        let outcome = end.outcome.unwrap();
        assert_eq!(Some(outcome.index), decode_winner(end.rotation, 3));
        assert_eq!(outcome.label, list[outcome.index].label());
    }

    #[test]
    fn test_rotation_accumulates_across_spins() {
        let list = entries(&["A", "B", "C"]);
        let mut controller = seeded(8);
        let first = run_spin(&mut controller, &list, 0.0);
        let second = run_spin(&mut controller, &list, 10_000.0);
        assert!(second.rotation < first.rotation - f64::from(EXTRA_SPINS) * TAU + 1e-9);
        assert_eq!(controller.rotation(), second.rotation);
    }

    #[test]
    fn test_outcome_matches_final_rotation_not_sample() {
        // Start from an arbitrary angle so the provisional index and the
        // landing segment differ.
        let list = entries(&["A", "B", "C", "D"]);
        let half = u32::MAX / 2 + 1;
        let context = SpinContext::new(Scripted::new(&[half]), SpinConfig::default());
        let mut controller = WheelController::with_rotation(context, -PI / 2.0);
        let SpinRequest::Started { provisional_index, .. } = controller.request_spin(&list, 0.0) else {
            panic!("spin should start");
        };
        let outcome = controller.tick(SPIN_DURATION_MS).outcome.unwrap();
        assert_eq!(provisional_index, 2);
        assert_eq!(outcome.index, 3);
        assert_eq!(Some(outcome.index), decode_winner(controller.rotation(), 4));
    }

    #[test]
    fn test_single_entry_always_wins() {
        let list = entries(&["Only"]);
        let mut controller = seeded(11);
        for i in 0..50 {
            let outcome = run_spin(&mut controller, &list, i as f64 * 4000.0);
            assert_eq!(outcome.index, 0);
            assert_eq!(outcome.label, "Only");
        }
    }

    #[test]
    fn test_winners_uniform_over_many_spins() {
        let list = entries(&["A", "B", "C", "D", "E"]);
        let mut controller = seeded(2024);
        let spins = 50_000;
        let mut counts = vec![0u32; list.len()];
        for i in 0..spins {
            let outcome = run_spin(&mut controller, &list, i as f64 * 4000.0);
            counts[outcome.index] += 1;
        }
        let expected = spins as f64 / list.len() as f64;
        for (i, count) in counts.iter().enumerate() {
            let deviation = (*count as f64 - expected).abs() / expected;
            assert!(deviation < 0.05, "segment {} won {} times, expected ~{}", i, count, expected);
        }
    }

    #[test]
    fn test_crossed_segment_reported() {
        let list = entries(&["A", "B", "C", "D", "E", "F"]);
        let mut controller = seeded(4);
        controller.request_spin(&list, 0.0);
        let mut crossings = 0;
        let mut t = 0.0;
        while controller.is_spinning() {
            t += 16.0;
            if controller.tick(t).crossed_segment {
                crossings += 1;
            }
        }
        // at least one crossing per segment per extra turn
        assert!(crossings >= (EXTRA_SPINS as usize) * list.len() / 2);
    }

    #[test]
    fn test_cancel_keeps_rotation_and_drops_outcome() {
        let list = entries(&["A", "B"]);
        let mut controller = seeded(6);
        controller.request_spin(&list, 0.0);
        let mid = controller.tick(1500.0);
        controller.cancel();
        assert!(!controller.is_spinning());
        assert_eq!(controller.rotation(), mid.rotation);
        let frame = controller.tick(5000.0);
        assert!(frame.outcome.is_none());
        assert_eq!(frame.rotation, mid.rotation);
    }

    #[test]
    fn test_zero_duration_finishes_on_first_tick() {
        let config = SpinConfig {
            duration_ms: 0.0,
            ..SpinConfig::default()
        };
        let mut controller = WheelController::new(SpinContext::new(SeededRandom::new(1), config));
        let list = entries(&["A", "B", "C"]);
        controller.request_spin(&list, 500.0);
        assert!(controller.tick(500.0).outcome.is_some());
    }

    #[test]
    fn test_config_defaults_and_sanitize() {
        let config: SpinConfig = serde_json::from_str(r#"{"extra_spins": 3}"#).unwrap();
        assert_eq!(config.extra_spins, 3);
        assert_eq!(config.duration_ms, SPIN_DURATION_MS);
        assert_eq!(config.jitter_fraction, JITTER_FRACTION);

        let wild = SpinConfig {
            duration_ms: -1.0,
            extra_spins: 1000,
            jitter_fraction: 3.0,
        }
        .sanitized();
        assert_eq!(wild.duration_ms, SPIN_DURATION_MS);
        assert_eq!(wild.extra_spins, 50);
        assert_eq!(wild.jitter_fraction, 0.5);
    }
}
