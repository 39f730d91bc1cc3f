//! Frame-gated coalescing of bursty notifications.

/// Allows at most one pending unit of work per frame.
///
/// Any number of [`request`](Self::request) calls between two frames collapse
/// into a single [`take`](Self::take) returning true at the next frame.
#[derive(Debug, Default, Clone)]
pub struct FrameThrottle {
    pending: bool,
    coalesced: u32,
}

impl FrameThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for work at the next frame. Returns true if this call scheduled
    /// it, false if it was already pending.
    pub fn request(&mut self) -> bool {
        if self.pending {
            self.coalesced += 1;
            return false;
        }
        self.pending = true;
        true
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Called at the frame boundary. Returns true exactly once per batch of
    /// requests.
    pub fn take(&mut self) -> bool {
        if !self.pending {
            return false;
        }
        if self.coalesced > 0 {
            log::trace!("[throttle] coalesced {} requests", self.coalesced);
        }
        self.pending = false;
        self.coalesced = 0;
        true
    }
}
