//! Fixed-cadence frame pacing
//!
//! `poll` is called from `about_to_wait` and marks a frame due once per
//! interval. Redraws consume the mark with `take_due`; redraws the OS asks
//! for in between (expose, live resize) find nothing due and only
//! re-present.

use std::time::{Duration, Instant};

/// Time between simulation frames at 60 Hz
pub const FRAME_INTERVAL: Duration = Duration::from_nanos(1_000_000_000 / 60);

#[derive(Debug)]
pub struct FramePacer {
    interval: Duration,
    next_frame: Instant,
    due: bool,
}

impl FramePacer {
    /// First frame is due immediately
    pub fn new(now: Instant, interval: Duration) -> Self {
        Self {
            interval,
            next_frame: now + interval,
            due: true,
        }
    }

    /// Deadline the event loop should wake up for
    pub fn next_frame(&self) -> Instant {
        self.next_frame
    }

    /// Mark a frame due if its deadline has passed. Returns true when a
    /// redraw should be requested.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_frame {
            return false;
        }

        self.due = true;
        self.next_frame += self.interval;
        // Fell far behind (e.g. window dragged); don't burst to catch up
        if self.next_frame < now {
            self.next_frame = now + self.interval;
        }
        true
    }

    /// Consume the pending frame, if any
    pub fn take_due(&mut self) -> bool {
        std::mem::take(&mut self.due)
    }
}
