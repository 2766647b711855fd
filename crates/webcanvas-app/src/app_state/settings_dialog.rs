//! The auto-refresh settings dialog.
//!
//! A small modal webview seeded with the target item's current interval.
//! While it is open, canvas mouse interaction is suppressed; the event
//! loop keeps running. Confirm posts `dialog-confirm` with the final
//! value, cancel posts `dialog-cancel`. Only a confirm mutates the item,
//! and that happens in the dispatcher, never here.

use tracing::error;

use webcanvas_common::types::{PageId, Rect};
use webcanvas_scene::MAX_REFRESH_SECS;
use webcanvas_webview::WebViewConfig;

use super::core::CanvasApp;
use super::webview_bridge::bounds::rect_to_wry;

/// Registry id of the settings dialog panel.
pub const DIALOG_VIEW_ID: u32 = u32::MAX - 2;

const DIALOG_WIDTH: f64 = 320.0;
const DIALOG_HEIGHT: f64 = 150.0;

/// Lifecycle of the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    Open,
    Confirmed(u32),
    Cancelled,
}

/// An open refresh-settings dialog for one page item.
#[derive(Debug, Clone)]
pub struct RefreshDialog {
    pub page: PageId,
    pub seed: u32,
    pub state: DialogState,
}

impl RefreshDialog {
    /// Seed values outside the valid range are clamped up front.
    pub fn new(page: PageId, seed: u32) -> Self {
        Self {
            page,
            seed: seed.min(MAX_REFRESH_SECS),
            state: DialogState::Open,
        }
    }

    pub fn confirm(&mut self, raw_value: i64) {
        self.state = DialogState::Confirmed(clamp_interval(raw_value));
    }

    pub fn cancel(&mut self) {
        self.state = DialogState::Cancelled;
    }

    /// The confirmed interval, or `None` when cancelled or still open.
    pub fn interval(&self) -> Option<u32> {
        match self.state {
            DialogState::Confirmed(v) => Some(v),
            _ => None,
        }
    }
}

/// Clamp a raw field value into `[0, 3600]`.
pub fn clamp_interval(raw: i64) -> u32 {
    raw.clamp(0, MAX_REFRESH_SECS as i64) as u32
}

/// Build the dialog HTML, seeded with the current interval.
pub fn dialog_html(seed: u32) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><style>
  body {{ margin: 0; padding: 16px; background: #1e1e2e; color: #cdd6f4;
         font-family: sans-serif; font-size: 13px; border: 1px solid #45475a;
         box-sizing: border-box; height: 100vh; }}
  label {{ display: block; margin-bottom: 8px; }}
  input {{ width: 100px; padding: 4px; border: 1px solid #45475a;
          border-radius: 4px; background: #313244; color: #cdd6f4; }}
  .buttons {{ margin-top: 16px; text-align: right; }}
  button {{ padding: 4px 14px; margin-left: 8px; border: 1px solid #45475a;
           border-radius: 4px; background: #45475a; color: #cdd6f4; }}
</style></head>
<body>
  <label for="interval">Refresh Interval:</label>
  <input id="interval" type="number" min="0" max="{MAX_REFRESH_SECS}" value="{seed}"> seconds
  <div class="buttons">
    <button id="ok">OK</button>
    <button id="cancel">Cancel</button>
  </div>
  <script>
    var field = document.getElementById('interval');
    function confirmDialog() {{
      var v = parseInt(field.value, 10);
      if (isNaN(v)) v = 0;
      v = Math.min({MAX_REFRESH_SECS}, Math.max(0, v));
      window.webcanvas.ipc.send('dialog-confirm', String(v));
    }}
    function cancelDialog() {{
      window.webcanvas.ipc.send('dialog-cancel', null);
    }}
    document.getElementById('ok').addEventListener('click', confirmDialog);
    document.getElementById('cancel').addEventListener('click', cancelDialog);
    window.addEventListener('keydown', function(e) {{
      if (e.key === 'Enter') confirmDialog();
      if (e.key === 'Escape') cancelDialog();
    }});
    field.focus();
    field.select();
  </script>
</body>
</html>"#
    )
}

/// The dialog sits centered in the window.
pub fn dialog_bounds(window_size: (f64, f64)) -> Rect {
    Rect::new(
        ((window_size.0 - DIALOG_WIDTH) / 2.0).max(0.0),
        ((window_size.1 - DIALOG_HEIGHT) / 2.0).max(0.0),
        DIALOG_WIDTH,
        DIALOG_HEIGHT,
    )
}

impl CanvasApp {
    /// Open the refresh-settings dialog for a page item, seeded with its
    /// current interval. Any open menu is dismissed first.
    pub(super) fn open_refresh_dialog(&mut self, page: PageId) {
        self.close_context_menu();
        if self.dialog.is_some() {
            return;
        }

        let seed = match self.scene.page(page) {
            Some(item) => item.refresh.interval_secs(),
            None => return,
        };

        let window = match &self.window {
            Some(w) => w.clone(),
            None => return,
        };
        let registry = match &mut self.webviews {
            Some(r) => r,
            None => return,
        };

        let size = window.inner_size();
        let bounds = dialog_bounds((size.width as f64, size.height as f64));
        let config = WebViewConfig::panel(dialog_html(seed));

        match registry.create(
            DIALOG_VIEW_ID,
            window.as_ref(),
            rect_to_wry(&bounds),
            config,
        ) {
            Ok(()) => {
                tracing::debug!(%page, seed, "Refresh settings dialog opened");
                self.dialog = Some(RefreshDialog::new(page, seed));
            }
            Err(e) => error!(error = %e, "Failed to create settings dialog"),
        }
    }

    /// Tear the dialog panel down, if open. The terminal state was set
    /// by the IPC handler before calling this.
    pub(super) fn close_dialog(&mut self) {
        if self.dialog.take().is_some() {
            if let Some(ref mut registry) = self.webviews {
                registry.destroy(DIALOG_VIEW_ID);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialog_opens_in_open_state() {
        let dialog = RefreshDialog::new(PageId(1), 30);
        assert_eq!(dialog.state, DialogState::Open);
        assert_eq!(dialog.interval(), None);
    }

    #[test]
    fn confirm_without_edits_returns_the_seed() {
        let mut dialog = RefreshDialog::new(PageId(1), 42);
        dialog.confirm(dialog.seed as i64);
        assert_eq!(dialog.state, DialogState::Confirmed(42));
        assert_eq!(dialog.interval(), Some(42));
    }

    #[test]
    fn cancel_yields_no_interval() {
        let mut dialog = RefreshDialog::new(PageId(1), 42);
        dialog.cancel();
        assert_eq!(dialog.state, DialogState::Cancelled);
        assert_eq!(dialog.interval(), None);
    }

    #[test]
    fn confirm_clamps_out_of_range_values() {
        let mut dialog = RefreshDialog::new(PageId(1), 0);
        dialog.confirm(99_999);
        assert_eq!(dialog.interval(), Some(MAX_REFRESH_SECS));

        let mut dialog = RefreshDialog::new(PageId(1), 0);
        dialog.confirm(-5);
        assert_eq!(dialog.interval(), Some(0));
    }

    #[test]
    fn seed_is_clamped_on_construction() {
        let dialog = RefreshDialog::new(PageId(1), 90_000);
        assert_eq!(dialog.seed, MAX_REFRESH_SECS);
    }

    #[test]
    fn clamp_interval_bounds() {
        assert_eq!(clamp_interval(-1), 0);
        assert_eq!(clamp_interval(0), 0);
        assert_eq!(clamp_interval(1800), 1800);
        assert_eq!(clamp_interval(3600), 3600);
        assert_eq!(clamp_interval(3601), 3600);
    }

    #[test]
    fn html_seeds_the_field() {
        let html = dialog_html(42);
        assert!(html.contains("value=\"42\""));
        assert!(html.contains("max=\"3600\""));
        assert!(html.contains("Refresh Interval:"));
        assert!(html.contains("dialog-confirm"));
        assert!(html.contains("dialog-cancel"));
    }

    #[test]
    fn dialog_is_centered() {
        let b = dialog_bounds((1280.0, 800.0));
        assert_eq!(b.x, (1280.0 - DIALOG_WIDTH) / 2.0);
        assert_eq!(b.y, (800.0 - DIALOG_HEIGHT) / 2.0);
    }
}
