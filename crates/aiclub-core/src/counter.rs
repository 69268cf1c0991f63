//! Count-up display driven by frame callbacks.

use crate::frames::{FrameRequestId, FrameScheduler};
use std::time::Duration;

pub const DEFAULT_DURATION_SECS: f64 = 2.0;

/// Inputs of an [`AnimatedCounter`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterSpec {
    pub start: i64,
    pub end: i64,
    pub duration_secs: f64,
}

impl CounterSpec {
    /// Count from zero to `end` over the default two seconds.
    pub fn to(end: i64) -> Self {
        Self {
            start: 0,
            end,
            duration_secs: DEFAULT_DURATION_SECS,
        }
    }

    pub fn starting_at(mut self, start: i64) -> Self {
        self.start = start;
        self
    }

    pub fn over(mut self, duration_secs: f64) -> Self {
        self.duration_secs = duration_secs;
        self
    }

    /// Value shown `elapsed` after the first frame.
    pub fn value_at(&self, elapsed: Duration) -> i64 {
        let progress = self.progress(elapsed);
        if progress >= 1.0 {
            return self.end;
        }
        let span = self.end as f64 - self.start as f64;
        let raw = (self.start as f64 + span * progress).floor() as i64;
        raw.clamp(self.start.min(self.end), self.start.max(self.end))
    }

    /// Fraction of the duration covered by `elapsed`. Durations that are not
    /// finite and positive finish immediately.
    fn progress(&self, elapsed: Duration) -> f64 {
        if !(self.duration_secs.is_finite() && self.duration_secs > 0.0) {
            return 1.0;
        }
        elapsed.as_secs_f64() / self.duration_secs
    }
}

#[derive(Debug, Clone)]
pub struct AnimatedCounter {
    spec: CounterSpec,
    value: i64,
    started_at: Option<Duration>,
    pending: Option<FrameRequestId>,
    complete: bool,
}

impl AnimatedCounter {
    pub fn new(spec: CounterSpec) -> Self {
        Self {
            spec,
            value: spec.start,
            started_at: None,
            pending: None,
            complete: false,
        }
    }

    pub fn spec(&self) -> CounterSpec {
        self.spec
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// (Re)start the animation from `start`.
    pub fn activate(&mut self, frames: &mut FrameScheduler) {
        self.cancel(frames);
        self.value = self.spec.start;
        self.started_at = None;
        self.complete = false;
        self.pending = Some(frames.request());
    }

    /// Input change. A different spec cancels the running animation and
    /// restarts from the new start; an identical spec is a no-op.
    pub fn set_spec(&mut self, spec: CounterSpec, frames: &mut FrameScheduler) {
        if spec == self.spec {
            return;
        }
        let was_active = self.pending.is_some() || self.complete;
        self.cancel(frames);
        self.spec = spec;
        self.value = spec.start;
        self.complete = false;
        if was_active {
            self.activate(frames);
        }
    }

    /// Teardown. Safe to call repeatedly.
    pub fn cancel(&mut self, frames: &mut FrameScheduler) {
        if let Some(id) = self.pending.take() {
            frames.cancel(id);
            tracing::debug!(end = self.spec.end, value = self.value, "counter cancelled");
        }
    }

    /// Frame callback. Ignores requests this counter does not own and returns
    /// whether the displayed value changed.
    pub fn on_frame(
        &mut self,
        frames: &mut FrameScheduler,
        id: FrameRequestId,
        now: Duration,
    ) -> bool {
        if self.pending != Some(id) {
            return false;
        }
        self.pending = None;

        let started_at = *self.started_at.get_or_insert(now);
        let elapsed = now.saturating_sub(started_at);
        let previous = self.value;
        self.value = self.spec.value_at(elapsed);

        if self.spec.progress(elapsed) >= 1.0 {
            self.complete = true;
            tracing::debug!(end = self.spec.end, "counter complete");
        } else {
            self.pending = Some(frames.request());
        }

        previous != self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    /// Drive a counter to completion, collecting the value after every frame.
    fn run(counter: &mut AnimatedCounter, frames: &mut FrameScheduler, step: Duration) -> Vec<i64> {
        let mut values = Vec::new();
        let mut now = Duration::from_secs(10);
        for _ in 0..10_000 {
            let due = frames.begin_frame();
            if due.is_empty() {
                break;
            }
            for id in due {
                counter.on_frame(frames, id, now);
            }
            values.push(counter.value());
            now += step;
        }
        values
    }

    #[test]
    fn test_first_frame_shows_start() {
        let mut frames = FrameScheduler::new();
        let mut counter = AnimatedCounter::new(CounterSpec::to(500).starting_at(20));
        counter.activate(&mut frames);
        let id = frames.begin_frame()[0];
        counter.on_frame(&mut frames, id, Duration::from_millis(1234));
        assert_eq!(counter.value(), 20);
        assert!(counter.is_running());
    }

    #[test]
    fn test_counts_to_500_in_two_seconds() {
        let mut frames = FrameScheduler::new();
        let mut counter = AnimatedCounter::new(CounterSpec::to(500).over(2.0));
        counter.activate(&mut frames);
        let values = run(&mut counter, &mut frames, FRAME);
        assert_eq!(values.first(), Some(&0));
        assert_eq!(values.last(), Some(&500));
        assert_eq!(counter.value(), 500);
        assert!(counter.is_complete());
        assert!(!counter.is_running());
        assert_eq!(frames.pending_count(), 0);
        // 2s at 16ms per frame is 125 frames, plus the starting frame
        assert_eq!(values.len(), 126);
    }

    #[test]
    fn test_value_at_elapsed() {
        let spec = CounterSpec::to(500).over(2.0);
        assert_eq!(spec.value_at(Duration::ZERO), 0);
        assert_eq!(spec.value_at(Duration::from_millis(1000)), 250);
        assert_eq!(spec.value_at(Duration::from_millis(1999)), 499);
        assert_eq!(spec.value_at(Duration::from_secs(2)), 500);
        assert_eq!(spec.value_at(Duration::from_secs(60)), 500);
    }

    #[test]
    fn test_monotonic_counting_up() {
        let mut frames = FrameScheduler::new();
        let mut counter = AnimatedCounter::new(CounterSpec::to(97).starting_at(3).over(0.7));
        counter.activate(&mut frames);
        let values = run(&mut counter, &mut frames, Duration::from_millis(7));
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert!(values.iter().all(|v| (3..=97).contains(v)));
        assert_eq!(values.last(), Some(&97));
    }

    #[test]
    fn test_monotonic_counting_down() {
        let mut frames = FrameScheduler::new();
        let mut counter = AnimatedCounter::new(CounterSpec::to(-40).starting_at(100).over(1.3));
        counter.activate(&mut frames);
        let values = run(&mut counter, &mut frames, Duration::from_millis(11));
        assert_eq!(values.first(), Some(&100));
        assert!(values.windows(2).all(|w| w[0] >= w[1]));
        assert!(values.iter().all(|v| (-40..=100).contains(v)));
        assert_eq!(values.last(), Some(&-40));
    }

    #[test]
    fn test_final_value_exact_with_coarse_frames() {
        let mut frames = FrameScheduler::new();
        let mut counter = AnimatedCounter::new(CounterSpec::to(7).over(1.0));
        counter.activate(&mut frames);
        let values = run(&mut counter, &mut frames, Duration::from_millis(900));
        assert_eq!(values, vec![0, 6, 7]);
    }

    #[test]
    fn test_zero_duration_completes_on_first_frame() {
        let mut frames = FrameScheduler::new();
        let mut counter = AnimatedCounter::new(CounterSpec::to(50).over(0.0));
        counter.activate(&mut frames);
        let values = run(&mut counter, &mut frames, FRAME);
        assert_eq!(values, vec![50]);
        assert!(counter.is_complete());
    }

    #[test]
    fn test_nan_and_infinite_durations_complete_on_first_frame() {
        for duration in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut frames = FrameScheduler::new();
            let mut counter = AnimatedCounter::new(CounterSpec::to(500).over(duration));
            counter.activate(&mut frames);
            let values = run(&mut counter, &mut frames, Duration::from_secs(1));
            assert_eq!(values, vec![500]);
            assert!(counter.is_complete());
            assert!(!counter.is_running());
            assert_eq!(frames.pending_count(), 0);
        }
    }

    #[test]
    fn test_full_i64_range_stays_in_bounds() {
        let spec = CounterSpec::to(i64::MAX).starting_at(i64::MIN).over(2.0);
        assert_eq!(spec.value_at(Duration::ZERO), i64::MIN);
        assert_eq!(spec.value_at(Duration::from_secs(1)), 0);
        assert_eq!(spec.value_at(Duration::from_secs(2)), i64::MAX);

        let down = CounterSpec::to(i64::MIN).starting_at(i64::MAX).over(2.0);
        assert_eq!(down.value_at(Duration::from_secs(1)), 0);
        assert_eq!(down.value_at(Duration::from_secs(3)), i64::MIN);

        let mut frames = FrameScheduler::new();
        let mut counter = AnimatedCounter::new(spec);
        counter.activate(&mut frames);
        let values = run(&mut counter, &mut frames, Duration::from_millis(250));
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(values.last(), Some(&i64::MAX));
    }

    #[test]
    fn test_cancel_stops_updates() {
        let mut frames = FrameScheduler::new();
        let mut counter = AnimatedCounter::new(CounterSpec::to(100));
        counter.activate(&mut frames);
        let id = frames.begin_frame()[0];
        counter.on_frame(&mut frames, id, Duration::ZERO);
        counter.cancel(&mut frames);
        assert_eq!(frames.pending_count(), 0);
        assert!(frames.begin_frame().is_empty());
        assert!(!counter.is_running());
        assert!(!counter.is_complete());
    }

    #[test]
    fn test_stale_request_is_ignored() {
        let mut frames = FrameScheduler::new();
        let mut counter = AnimatedCounter::new(CounterSpec::to(100));
        counter.activate(&mut frames);
        let stale = frames.begin_frame()[0];
        counter.activate(&mut frames);
        assert!(!counter.on_frame(&mut frames, stale, Duration::from_secs(5)));
        assert_eq!(counter.value(), 0);
        assert_eq!(frames.pending_count(), 1);
    }

    #[test]
    fn test_input_change_restarts() {
        let mut frames = FrameScheduler::new();
        let mut counter = AnimatedCounter::new(CounterSpec::to(100).over(1.0));
        counter.activate(&mut frames);
        let id = frames.begin_frame()[0];
        counter.on_frame(&mut frames, id, Duration::ZERO);
        let id = frames.begin_frame()[0];
        counter.on_frame(&mut frames, id, Duration::from_millis(500));
        assert_eq!(counter.value(), 50);

        counter.set_spec(CounterSpec::to(10).starting_at(5).over(1.0), &mut frames);
        assert_eq!(counter.value(), 5);
        assert_eq!(frames.pending_count(), 1);
        let values = run(&mut counter, &mut frames, Duration::from_millis(100));
        assert_eq!(values.first(), Some(&5));
        assert_eq!(values.last(), Some(&10));
    }

    #[test]
    fn test_same_spec_is_noop() {
        let mut frames = FrameScheduler::new();
        let spec = CounterSpec::to(100);
        let mut counter = AnimatedCounter::new(spec);
        counter.activate(&mut frames);
        let before = frames.pending_count();
        counter.set_spec(spec, &mut frames);
        assert_eq!(frames.pending_count(), before);
        assert!(counter.is_running());
    }

    #[test]
    fn test_spec_change_on_idle_counter_stays_idle() {
        let mut frames = FrameScheduler::new();
        let mut counter = AnimatedCounter::new(CounterSpec::to(100));
        counter.set_spec(CounterSpec::to(3).starting_at(1), &mut frames);
        assert_eq!(counter.value(), 1);
        assert!(!counter.is_running());
        assert_eq!(frames.pending_count(), 0);
    }
}
