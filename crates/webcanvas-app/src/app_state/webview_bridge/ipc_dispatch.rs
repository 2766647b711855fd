//! Routing of IPC messages from the panels and embedded pages.

use webcanvas_common::actions::Action;
use webcanvas_common::types::{PageId, Point};
use webcanvas_webview::{IpcMessage, IpcPayload};

use crate::app_state::context_menu::{action_for_kind, CONTEXT_MENU_VIEW_ID};
use crate::app_state::core::CanvasApp;
use crate::app_state::settings_dialog::DIALOG_VIEW_ID;
use crate::app_state::url_bar::URL_BAR_VIEW_ID;

impl CanvasApp {
    /// Handle a raw IPC message from a webview, keyed by its view id.
    pub(in crate::app_state) fn handle_ipc_message(&mut self, view_id: u32, body: &str) {
        let msg = match IpcMessage::from_json(body) {
            Some(m) => m,
            None => {
                tracing::warn!(view_id, body, "Unparseable IPC message");
                return;
            }
        };

        match view_id {
            URL_BAR_VIEW_ID => self.handle_url_bar_ipc(&msg),
            CONTEXT_MENU_VIEW_ID => self.handle_menu_ipc(&msg),
            DIALOG_VIEW_ID => self.handle_dialog_ipc(&msg),
            page_id => self.handle_page_ipc(PageId(page_id), &msg),
        }
    }

    fn handle_url_bar_ipc(&mut self, msg: &IpcMessage) {
        match (msg.kind.as_str(), &msg.payload) {
            ("open-url", IpcPayload::Text(url)) => {
                self.dispatch(Action::AddPage(url.clone()));
            }
            _ => tracing::debug!(kind = %msg.kind, "unhandled URL bar IPC"),
        }
    }

    fn handle_menu_ipc(&mut self, msg: &IpcMessage) {
        let page = match &self.menu {
            Some(menu) => menu.page,
            None => return,
        };

        match (msg.kind.as_str(), &msg.payload) {
            ("menu-action", IpcPayload::Text(kind)) => {
                self.close_context_menu();
                match action_for_kind(kind, page) {
                    Some(action) => self.dispatch(action),
                    None => tracing::warn!(kind = %kind, "unknown menu command"),
                }
            }
            _ => tracing::debug!(kind = %msg.kind, "unhandled menu IPC"),
        }
    }

    fn handle_dialog_ipc(&mut self, msg: &IpcMessage) {
        let dialog = match self.dialog.as_mut() {
            Some(d) => d,
            None => return,
        };

        match (msg.kind.as_str(), &msg.payload) {
            ("dialog-confirm", IpcPayload::Text(raw)) => {
                let value = raw.parse::<i64>().unwrap_or(0);
                dialog.confirm(value);
                let page = dialog.page;
                let interval = dialog.interval();
                self.close_dialog();
                if let Some(secs) = interval {
                    self.set_page_refresh_interval(page, secs);
                }
            }
            ("dialog-cancel", _) => {
                dialog.cancel();
                tracing::debug!(page = %dialog.page, "Refresh settings cancelled");
                self.close_dialog();
            }
            _ => tracing::debug!(kind = %msg.kind, "unhandled dialog IPC"),
        }
    }

    /// IPC from an embedded page: the suppression script forwards
    /// right-clicks so the app menu can open over page content.
    fn handle_page_ipc(&mut self, page: PageId, msg: &IpcMessage) {
        if !self.scene.contains(page) {
            return;
        }

        match (msg.kind.as_str(), &msg.payload) {
            ("context-menu", IpcPayload::Json(pos)) => {
                let (x, y) = match (pos["x"].as_f64(), pos["y"].as_f64()) {
                    (Some(x), Some(y)) => (x, y),
                    _ => return,
                };
                // Click coordinates are CSS pixels relative to the page
                // webview, which renders 1:1 regardless of canvas zoom.
                let origin = match self.scene.page(page) {
                    Some(item) => self.page_content_rect(&item.rect),
                    None => return,
                };
                let anchor = Point::new(origin.x + x, origin.y + y);
                self.open_context_menu(page, anchor);
            }
            _ => tracing::debug!(%page, kind = %msg.kind, "unhandled page IPC"),
        }
    }
}
