//! Scroll position of the page viewport, with animated jumps to anchors.

use crate::counter::{AnimatedCounter, CounterSpec};
use crate::frames::{FrameRequestId, FrameScheduler};
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct Viewport {
    offset: u16,
    max_offset: u16,
    animation: Option<AnimatedCounter>,
}

impl Viewport {
    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn max_offset(&self) -> u16 {
        self.max_offset
    }

    pub fn is_animating(&self) -> bool {
        self.animation
            .as_ref()
            .is_some_and(|animation| animation.is_running())
    }

    /// Update the scrollable range after a resize or content change.
    pub fn set_max_offset(&mut self, max_offset: u16, frames: &mut FrameScheduler) {
        self.max_offset = max_offset;
        if self.offset > max_offset {
            self.stop(frames);
            self.offset = max_offset;
        }
    }

    /// Manual scroll. Interrupts any running animation.
    pub fn scroll_by(&mut self, delta: i32, frames: &mut FrameScheduler) {
        self.stop(frames);
        self.offset = self.clamp(self.offset as i64 + delta as i64);
    }

    pub fn scroll_to_top(&mut self, frames: &mut FrameScheduler) {
        self.stop(frames);
        self.offset = 0;
    }

    /// Smoothly scroll so `target` becomes the top row.
    pub fn scroll_to(&mut self, target: u16, duration_secs: f64, frames: &mut FrameScheduler) {
        self.stop(frames);
        let target = self.clamp(target as i64);
        if target == self.offset {
            return;
        }
        let mut animation = AnimatedCounter::new(
            CounterSpec::to(target as i64)
                .starting_at(self.offset as i64)
                .over(duration_secs),
        );
        animation.activate(frames);
        self.animation = Some(animation);
    }

    /// Frame callback. Returns true when the offset moved.
    pub fn on_frame(
        &mut self,
        frames: &mut FrameScheduler,
        id: FrameRequestId,
        now: Duration,
    ) -> bool {
        let Some(animation) = self.animation.as_mut() else {
            return false;
        };
        animation.on_frame(frames, id, now);
        let (value, complete) = (animation.value(), animation.is_complete());
        if complete {
            self.animation = None;
        }
        let next = self.clamp(value);
        let moved = next != self.offset;
        self.offset = next;
        moved
    }

    /// Cancel the running animation, leaving the offset where it is.
    pub fn stop(&mut self, frames: &mut FrameScheduler) {
        if let Some(mut animation) = self.animation.take() {
            animation.cancel(frames);
        }
    }

    fn clamp(&self, offset: i64) -> u16 {
        offset.clamp(0, self.max_offset as i64) as u16
    }
}
