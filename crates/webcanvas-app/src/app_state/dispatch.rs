//! Dispatch a resolved [`Action`] to the appropriate subsystem.

use std::time::Instant;

use webcanvas_common::actions::Action;
use webcanvas_common::events::Event;
use webcanvas_common::types::PageId;

use super::core::CanvasApp;
use super::url_bar::normalize_url;

impl CanvasApp {
    pub(super) fn dispatch(&mut self, action: Action) {
        match action {
            Action::AddPage(raw) => match normalize_url(&raw) {
                Some(url) => self.add_page(url),
                None => tracing::debug!("ignoring empty URL submission"),
            },
            Action::RefreshPage(page) => {
                self.refresh_page(page);
            }
            Action::OpenRefreshSettings(page) => {
                self.open_refresh_dialog(page);
            }
            Action::ClosePage(page) => {
                self.close_page(page);
            }
            Action::ReloadConfig => match webcanvas_config::load_config() {
                Ok(c) => {
                    self.config = c;
                    self.event_bus.publish(Event::ConfigReloaded);
                    tracing::info!("Config reloaded");
                }
                Err(e) => {
                    tracing::warn!("Config reload failed: {e}");
                }
            },
            Action::Quit => {
                self.event_bus.publish(Event::Shutdown);
                self.should_exit = true;
            }
            Action::None => {}
        }
    }

    /// Place a new page on the canvas. `url` is already normalized.
    pub(super) fn add_page(&mut self, url: String) {
        let visible = self.visible_scene_size();
        let page = self.scene.add_page(url.clone(), visible, &mut self.rng);
        self.create_webview_for_page(page, &url);
        self.event_bus.publish(Event::PageAdded(page));
        tracing::info!(%page, url, "Page added to canvas");
    }

    /// Force the embedded view to reload its current URL.
    pub(super) fn refresh_page(&mut self, page: PageId) {
        if let Some(ref registry) = self.webviews {
            if let Some(handle) = registry.get(page.0) {
                if let Err(e) = handle.reload() {
                    tracing::warn!(%page, error = %e, "Reload failed");
                }
            }
        }
    }

    /// Remove a page item and its resources: webview, timer, selection.
    pub(super) fn close_page(&mut self, page: PageId) {
        // Overlays keyed to this page go first
        if self.menu.as_ref().is_some_and(|m| m.page == page) {
            self.close_context_menu();
        }
        if self.dialog.as_ref().is_some_and(|d| d.page == page) {
            self.close_dialog();
        }

        // Destroying the webview drops the handle and with it any chance
        // of a pending refresh firing on this page.
        self.destroy_webview_for_page(page);
        if self.scene.remove_page(page) {
            self.event_bus.publish(Event::PageClosed(page));
            tracing::info!(%page, "Page closed");
        }
    }

    /// Apply a confirmed refresh interval to a page item.
    pub(super) fn set_page_refresh_interval(&mut self, page: PageId, secs: u32) {
        if let Some(item) = self.scene.page_mut(page) {
            item.refresh.set_interval(secs, Instant::now());
            tracing::info!(%page, secs, "Refresh interval set");
        }
    }
}
