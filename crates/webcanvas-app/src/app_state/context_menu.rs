//! The right-click context menu for a page item.
//!
//! Presented as a small popup webview anchored at the click. The menu
//! offers exactly the commands from `Action::context_menu_actions`; a
//! click posts a `menu-action` IPC message and the dispatcher takes over.

use tracing::error;

use webcanvas_common::actions::Action;
use webcanvas_common::types::{PageId, Point, Rect};
use webcanvas_webview::WebViewConfig;

use super::core::CanvasApp;
use super::webview_bridge::bounds::rect_to_wry;

/// Registry id of the context menu panel.
pub const CONTEXT_MENU_VIEW_ID: u32 = u32::MAX - 1;

const MENU_WIDTH: f64 = 200.0;
const MENU_ITEM_HEIGHT: f64 = 30.0;
const MENU_PADDING: f64 = 8.0;

/// An open context menu, keyed to the page item it was opened over.
#[derive(Debug, Clone)]
pub struct ContextMenu {
    pub page: PageId,
    pub bounds: Rect,
}

/// The stable IPC kind for a menu command.
pub fn menu_kind(action: &Action) -> Option<&'static str> {
    match action {
        Action::RefreshPage(_) => Some("refresh"),
        Action::OpenRefreshSettings(_) => Some("settings"),
        Action::ClosePage(_) => Some("close"),
        _ => None,
    }
}

/// Resolve a `menu-action` IPC payload back into an action for the page
/// the menu was opened over.
pub fn action_for_kind(kind: &str, page: PageId) -> Option<Action> {
    match kind {
        "refresh" => Some(Action::RefreshPage(page)),
        "settings" => Some(Action::OpenRefreshSettings(page)),
        "close" => Some(Action::ClosePage(page)),
        _ => None,
    }
}

/// Build the popup HTML for a page's menu commands.
pub fn menu_html(page: PageId) -> String {
    let items: String = Action::context_menu_actions(page)
        .iter()
        .filter_map(|action| {
            menu_kind(action).map(|kind| {
                format!(
                    "<div class=\"item\" data-kind=\"{kind}\">{}</div>",
                    action.label()
                )
            })
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head><style>
  body {{ margin: 0; padding: 4px 0; background: #1e1e2e; color: #cdd6f4;
         font-family: sans-serif; font-size: 13px; border: 1px solid #45475a;
         box-sizing: border-box; height: 100vh; }}
  .item {{ padding: 0 12px; line-height: {MENU_ITEM_HEIGHT}px; cursor: default; }}
  .item:hover {{ background: #45475a; }}
</style></head>
<body>
  {items}
  <script>
    document.querySelectorAll('.item').forEach(function(el) {{
      el.addEventListener('click', function() {{
        window.webcanvas.ipc.send('menu-action', el.dataset.kind);
      }});
    }});
  </script>
</body>
</html>"#
    )
}

/// Where to place the menu: at the anchor, nudged inside the window.
pub fn menu_bounds(anchor: Point, window_size: (f64, f64)) -> Rect {
    let height = MENU_ITEM_HEIGHT * 3.0 + MENU_PADDING * 2.0;
    let x = anchor.x.min((window_size.0 - MENU_WIDTH).max(0.0));
    let y = anchor.y.min((window_size.1 - height).max(0.0));
    Rect::new(x, y, MENU_WIDTH, height)
}

impl CanvasApp {
    /// Open the context menu for a page item at a window position,
    /// replacing any menu already open.
    pub(super) fn open_context_menu(&mut self, page: PageId, anchor: Point) {
        self.close_context_menu();

        let window = match &self.window {
            Some(w) => w.clone(),
            None => return,
        };
        let registry = match &mut self.webviews {
            Some(r) => r,
            None => return,
        };

        let size = window.inner_size();
        let bounds = menu_bounds(anchor, (size.width as f64, size.height as f64));
        let config = WebViewConfig::panel(menu_html(page));

        match registry.create(
            CONTEXT_MENU_VIEW_ID,
            window.as_ref(),
            rect_to_wry(&bounds),
            config,
        ) {
            Ok(()) => {
                tracing::debug!(%page, "Context menu opened");
                self.menu = Some(ContextMenu { page, bounds });
            }
            Err(e) => error!(error = %e, "Failed to create context menu"),
        }
    }

    /// Tear the menu panel down, if open.
    pub(super) fn close_context_menu(&mut self) {
        if self.menu.take().is_some() {
            if let Some(ref mut registry) = self.webviews {
                registry.destroy(CONTEXT_MENU_VIEW_ID);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_kinds_cover_all_menu_actions() {
        for action in Action::context_menu_actions(PageId(1)) {
            assert!(menu_kind(&action).is_some(), "no kind for {action:?}");
        }
        assert_eq!(menu_kind(&Action::Quit), None);
    }

    #[test]
    fn kinds_round_trip_to_actions() {
        let page = PageId(5);
        for action in Action::context_menu_actions(page) {
            let kind = menu_kind(&action).unwrap();
            assert_eq!(action_for_kind(kind, page), Some(action));
        }
        assert_eq!(action_for_kind("bogus", page), None);
    }

    #[test]
    fn html_lists_the_three_commands() {
        let html = menu_html(PageId(1));
        assert!(html.contains("Refresh Now"));
        assert!(html.contains("Auto-Refresh Settings..."));
        assert!(html.contains("Close Page"));
        assert!(html.contains("data-kind=\"refresh\""));
        assert!(html.contains("data-kind=\"settings\""));
        assert!(html.contains("data-kind=\"close\""));
    }

    #[test]
    fn bounds_anchor_at_click() {
        let b = menu_bounds(Point::new(100.0, 200.0), (1280.0, 800.0));
        assert_eq!(b.x, 100.0);
        assert_eq!(b.y, 200.0);
        assert_eq!(b.width, MENU_WIDTH);
    }

    #[test]
    fn bounds_clamp_to_window_edges() {
        let b = menu_bounds(Point::new(1270.0, 790.0), (1280.0, 800.0));
        assert!(b.right() <= 1280.0);
        assert!(b.bottom() <= 800.0);
    }
}
