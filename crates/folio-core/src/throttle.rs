//! Throttle-by-frame.
//!
//! Scroll events can arrive many times per rendered frame. Each scroll
//! handler owns a [`FrameThrottle`]; the handler asks it before scheduling an
//! animation frame and clears it when the frame runs, so at most one update
//! is queued per handler at a time.

/// Pending-frame flag for a single handler.
#[derive(Debug, Default, Clone)]
pub struct FrameThrottle {
    pending: bool,
}

impl FrameThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the caller should schedule a frame now.
    ///
    /// Returns `false` while a previously scheduled frame has not run yet.
    pub fn try_schedule(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Mark the scheduled frame as done.
    pub fn frame_done(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_schedules_once() {
        let mut throttle = FrameThrottle::new();
        let scheduled = (0..20).filter(|_| throttle.try_schedule()).count();
        assert_eq!(scheduled, 1);
        assert!(throttle.is_pending());
    }

    #[test]
    fn test_schedules_again_after_frame() {
        let mut throttle = FrameThrottle::new();
        assert!(throttle.try_schedule());
        throttle.frame_done();
        assert!(!throttle.is_pending());
        assert!(throttle.try_schedule());
    }
}
