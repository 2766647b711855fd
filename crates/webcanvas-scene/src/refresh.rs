//! Per-item auto-refresh timing.
//!
//! A `RefreshTimer` is pure deadline arithmetic: the event loop feeds it
//! `Instant`s and fires a reload whenever `poll` reports due. No threads,
//! no callbacks. A deadline exists iff the interval is non-zero.

use std::time::{Duration, Instant};

/// Upper bound on the configurable refresh interval, in seconds.
pub const MAX_REFRESH_SECS: u32 = 3600;

#[derive(Debug, Clone, Copy)]
pub struct RefreshTimer {
    interval_secs: u32,
    next_fire: Option<Instant>,
}

impl RefreshTimer {
    /// A disabled timer.
    pub fn new() -> Self {
        Self {
            interval_secs: 0,
            next_fire: None,
        }
    }

    pub fn interval_secs(&self) -> u32 {
        self.interval_secs
    }

    pub fn is_active(&self) -> bool {
        self.next_fire.is_some()
    }

    /// The next pending deadline, if the timer is armed.
    pub fn next_fire(&self) -> Option<Instant> {
        self.next_fire
    }

    /// Set the repeat interval. Any pending deadline is dropped; a new one
    /// is armed one full period from `now` when `seconds > 0`. Values above
    /// [`MAX_REFRESH_SECS`] are clamped.
    pub fn set_interval(&mut self, seconds: u32, now: Instant) {
        let seconds = seconds.min(MAX_REFRESH_SECS);
        self.interval_secs = seconds;
        self.next_fire = if seconds > 0 {
            Some(now + Duration::from_secs(seconds as u64))
        } else {
            None
        };
    }

    /// Check the deadline against `now`. Returns true when a refresh is
    /// due; the next deadline is re-armed a full period after `now`, so
    /// consecutive fires are never closer than the interval even if the
    /// event loop serviced this one late.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_fire {
            Some(deadline) if now >= deadline => {
                self.next_fire = Some(now + Duration::from_secs(self.interval_secs as u64));
                true
            }
            _ => false,
        }
    }
}

impl Default for RefreshTimer {
    fn default() -> Self {
        Self::new()
    }
}
