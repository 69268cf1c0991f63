//! Frame-callback scheduling.
//!
//! Animations ask for "the next frame" instead of running their own timers,
//! so every animation advances in lock-step with the render loop. A request
//! fires at most once; the owner must request again to keep animating.

use std::collections::BTreeSet;

/// Handle for a pending frame request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameRequestId(u64);

#[derive(Debug, Default)]
pub struct FrameScheduler {
    next_id: u64,
    pending: BTreeSet<FrameRequestId>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask to be called back on the next frame.
    pub fn request(&mut self) -> FrameRequestId {
        let id = FrameRequestId(self.next_id);
        self.next_id += 1;
        self.pending.insert(id);
        id
    }

    /// Drop a pending request. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: FrameRequestId) -> bool {
        self.pending.remove(&id)
    }

    pub fn is_pending(&self, id: FrameRequestId) -> bool {
        self.pending.contains(&id)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Start a frame: hands back every request registered so far, in request
    /// order. Requests made while handling them belong to the next frame.
    pub fn begin_frame(&mut self) -> Vec<FrameRequestId> {
        std::mem::take(&mut self.pending).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_fire_once() {
        let mut frames = FrameScheduler::new();
        let id = frames.request();
        assert!(frames.is_pending(id));
        assert_eq!(frames.begin_frame(), vec![id]);
        assert!(!frames.is_pending(id));
        assert!(frames.begin_frame().is_empty());
    }

    #[test]
    fn test_cancelled_request_never_fires() {
        let mut frames = FrameScheduler::new();
        let kept = frames.request();
        let dropped = frames.request();
        assert!(frames.cancel(dropped));
        assert!(!frames.cancel(dropped));
        assert_eq!(frames.begin_frame(), vec![kept]);
    }

    #[test]
    fn test_requests_during_frame_wait_for_next_frame() {
        let mut frames = FrameScheduler::new();
        frames.request();
        let due = frames.begin_frame();
        assert_eq!(due.len(), 1);
        let follow_up = frames.request();
        assert_eq!(frames.pending_count(), 1);
        assert_eq!(frames.begin_frame(), vec![follow_up]);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut frames = FrameScheduler::new();
        let a = frames.request();
        frames.begin_frame();
        let b = frames.request();
        assert_ne!(a, b);
    }
}
