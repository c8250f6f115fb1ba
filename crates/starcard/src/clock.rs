//! Frame scheduling for the terminal event loop.

use std::time::{Duration, Instant};

use starcard_sky::{FrameId, FrameScheduler};

/// Stands in for the display's repaint callback: one frame can be pending,
/// due one interval after it was requested. The event loop sleeps until the
/// due time and then fires it.
#[derive(Debug)]
pub struct FrameClock {
    interval: Duration,
    next_id: u64,
    pending: Option<(FrameId, Instant)>,
}

impl FrameClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_id: 0,
            pending: None,
        }
    }

    /// Time left until the pending frame is due, if one is pending.
    pub fn timeout(&self, now: Instant) -> Option<Duration> {
        self.pending.map(|(_, due)| due.saturating_duration_since(now))
    }

    /// Take the pending frame if it is due at `now`.
    pub fn take_due(&mut self, now: Instant) -> Option<FrameId> {
        match self.pending {
            Some((id, due)) if due <= now => {
                self.pending = None;
                Some(id)
            }
            _ => None,
        }
    }

    fn request_at(&mut self, now: Instant) -> FrameId {
        self.next_id += 1;
        let id = FrameId(self.next_id);
        self.pending = Some((id, now + self.interval));
        id
    }
}

impl FrameScheduler for FrameClock {
    fn request_frame(&mut self) -> FrameId {
        self.request_at(Instant::now())
    }

    fn cancel(&mut self, id: FrameId) {
        if matches!(self.pending, Some((pending, _)) if pending == id) {
            self.pending = None;
        }
    }
}
