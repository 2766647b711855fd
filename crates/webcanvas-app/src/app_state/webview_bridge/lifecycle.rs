//! WebView lifecycle management: create, destroy, sync bounds, poll events.

use webcanvas_common::types::{PageId, Rect};
use webcanvas_webview::{WebViewConfig, WebViewEvent};

use crate::app_state::core::CanvasApp;
use crate::app_state::settings_dialog::DIALOG_VIEW_ID;

use super::bounds::rect_to_wry;

/// Panel ids live at the top of the id space; everything below is a page.
fn is_panel(view_id: u32) -> bool {
    view_id >= DIALOG_VIEW_ID
}

impl CanvasApp {
    /// The full on-screen rect of an item (frame included), in window
    /// coordinates.
    pub(in crate::app_state) fn page_screen_rect(&self, item_rect: &Rect) -> Rect {
        let region = self.canvas_region();
        self.viewport
            .to_screen_rect(item_rect)
            .translated(region.x, region.y)
    }

    /// The on-screen rect of an item's web content: the item rect inset
    /// by the drag frame, in window coordinates.
    pub(in crate::app_state) fn page_content_rect(&self, item_rect: &Rect) -> Rect {
        let inset = item_rect.inset(self.config.canvas.frame_width);
        self.page_screen_rect(&inset)
    }

    /// Create the webview for a newly placed page item.
    pub(in crate::app_state) fn create_webview_for_page(&mut self, page: PageId, url: &str) {
        let window = match &self.window {
            Some(w) => w.clone(),
            None => {
                tracing::warn!(%page, "Cannot create webview: no window");
                return;
            }
        };
        let registry = match &mut self.webviews {
            Some(r) => r,
            None => {
                tracing::warn!(%page, "Cannot create webview: registry not initialized");
                return;
            }
        };

        let content = match self.scene.page(page) {
            Some(item) => {
                let inset = item.rect.inset(self.config.canvas.frame_width);
                let region_y = self.config.canvas.url_bar_height;
                self.viewport.to_screen_rect(&inset).translated(0.0, region_y)
            }
            None => return,
        };

        let config = WebViewConfig::page(url);
        if let Err(e) = registry.create(page.0, window.as_ref(), rect_to_wry(&content), config) {
            tracing::error!(%page, error = %e, "Failed to create webview");
        } else {
            tracing::info!(%page, url, "WebView created for page");
        }
    }

    /// Destroy the webview for a page item. Dropping the handle tears the
    /// engine view down synchronously.
    pub(in crate::app_state) fn destroy_webview_for_page(&mut self, page: PageId) {
        if let Some(ref mut registry) = self.webviews {
            if registry.destroy(page.0) {
                tracing::info!(%page, "WebView destroyed for page");
            }
        }
    }

    /// Sync all page webview bounds to the current scene and viewport.
    /// Items panned fully outside the canvas region are hidden.
    pub(in crate::app_state) fn sync_webview_bounds(&mut self) {
        if self.window.is_none() {
            return;
        }

        let region = self.canvas_region();
        let updates: Vec<(PageId, Rect, bool)> = self
            .scene
            .pages()
            .iter()
            .map(|item| {
                let full = self.page_screen_rect(&item.rect);
                let content = self.page_content_rect(&item.rect);
                (item.id, content, full.intersects(&region))
            })
            .collect();

        if let Some(ref registry) = self.webviews {
            for (page, content, visible) in updates {
                if let Some(handle) = registry.get(page.0) {
                    if let Err(e) = handle.set_visible(visible) {
                        tracing::warn!(%page, error = %e, "Failed to toggle webview visibility");
                    }
                    if let Err(e) = handle.set_bounds(rect_to_wry(&content)) {
                        tracing::warn!(%page, error = %e, "Failed to update webview bounds");
                    }
                }
            }
        }
    }

    /// Echo the scene selection into the page webviews as an outline.
    pub(in crate::app_state) fn apply_selection_styles(&mut self) {
        let styles: Vec<(PageId, bool)> = self
            .scene
            .pages()
            .iter()
            .map(|item| (item.id, self.scene.is_selected(item.id)))
            .collect();

        if let Some(ref registry) = self.webviews {
            for (page, selected) in styles {
                if let Some(handle) = registry.get(page.0) {
                    let script = if selected {
                        "document.documentElement.style.outline = '3px solid #89b4fa';"
                    } else {
                        "document.documentElement.style.outline = '';"
                    };
                    if let Err(e) = handle.evaluate_script(script) {
                        tracing::debug!(%page, error = %e, "selection style injection failed");
                    }
                }
            }
        }
    }

    /// Process pending webview events (IPC messages, page loads, titles).
    pub(in crate::app_state) fn poll_webview_events(&mut self) {
        let events: Vec<WebViewEvent> = match &self.webviews {
            Some(registry) => registry.drain_events(),
            None => return,
        };

        for event in events {
            match event {
                WebViewEvent::IpcMessage { view_id, body } => {
                    self.handle_ipc_message(view_id, &body);
                }
                WebViewEvent::TitleChanged { view_id, title } => {
                    if is_panel(view_id) {
                        continue;
                    }
                    let page = PageId(view_id);
                    tracing::debug!(%page, title = %title, "WebView title changed");
                    if let Some(ref mut registry) = self.webviews {
                        if let Some(handle) = registry.get_mut(view_id) {
                            handle.set_title(title.clone());
                        }
                    }
                    self.scene.set_title(page, title);
                }
                WebViewEvent::PageLoad {
                    view_id,
                    state,
                    url,
                } => {
                    tracing::debug!(view_id, ?state, url = %url, "WebView page load event");
                }
                WebViewEvent::Closed { view_id } => {
                    tracing::debug!(view_id, "WebView closed event");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_ids_are_recognized() {
        assert!(is_panel(u32::MAX));
        assert!(is_panel(u32::MAX - 1));
        assert!(is_panel(u32::MAX - 2));
        assert!(!is_panel(1));
        assert!(!is_panel(1000));
    }
}
