//! Auto-refresh servicing on the event loop.
//!
//! Timers are deadlines owned by the scene items; the event loop polls
//! them from `about_to_wait` and fires reloads for the ones that are due.
//! No separate timer threads exist, so destroying an item (which removes
//! it from the scene) cancels its schedule synchronously.

use std::time::{Duration, Instant};

use webcanvas_common::types::PageId;

use super::core::CanvasApp;

/// Baseline wake-up cadence for servicing webview events and timers.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);

impl CanvasApp {
    /// Fire reloads for every item whose refresh deadline has passed.
    pub(super) fn poll_refresh_timers(&mut self, now: Instant) {
        let due: Vec<PageId> = self
            .scene
            .pages_mut()
            .iter_mut()
            .filter_map(|item| item.refresh.poll(now).then_some(item.id))
            .collect();

        for page in due {
            tracing::debug!(%page, "Auto-refresh fired");
            self.refresh_page(page);
        }
    }

    /// The earliest pending refresh deadline across all items.
    pub(super) fn next_refresh_deadline(&self) -> Option<Instant> {
        self.scene
            .pages()
            .iter()
            .filter_map(|item| item.refresh.next_fire())
            .min()
    }
}
