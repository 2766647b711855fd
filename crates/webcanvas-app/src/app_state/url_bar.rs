//! The URL bar: a fixed panel webview across the top of the window.
//!
//! The panel is plain inline HTML; submitting the input posts an
//! `open-url` IPC message back to the app, which normalizes the string
//! and places a new page.

use tracing::error;

use webcanvas_webview::WebViewConfig;

use super::core::CanvasApp;
use super::webview_bridge::bounds::rect_to_wry;
use webcanvas_common::types::Rect;

/// Registry id of the URL bar panel. Page items use their scene ids
/// (low integers), panels count down from the top of the id space.
pub const URL_BAR_VIEW_ID: u32 = u32::MAX;

const URL_BAR_HTML: &str = r#"<!DOCTYPE html>
<html>
<head><style>
  body { margin: 0; display: flex; align-items: center; gap: 8px;
         padding: 0 8px; height: 100vh; box-sizing: border-box;
         background: #1e1e2e; font-family: sans-serif; }
  input { flex: 1; height: 24px; padding: 0 8px; border: 1px solid #45475a;
          border-radius: 4px; background: #313244; color: #cdd6f4; }
  button { height: 26px; padding: 0 12px; border: 1px solid #45475a;
           border-radius: 4px; background: #45475a; color: #cdd6f4; }
</style></head>
<body>
  <input id="url" type="text" placeholder="Enter URL and press Enter" autofocus>
  <button id="add">Add Page</button>
  <script>
    var input = document.getElementById('url');
    function submit() {
      window.webcanvas.ipc.send('open-url', input.value);
      input.value = '';
    }
    input.addEventListener('keydown', function(e) {
      if (e.key === 'Enter') submit();
    });
    document.getElementById('add').addEventListener('click', submit);
  </script>
</body>
</html>"#;

/// Prefix a scheme when missing; empty or whitespace-only input is
/// rejected so no page is created for it.
pub fn normalize_url(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Some(trimmed.to_string())
    } else {
        Some(format!("https://{trimmed}"))
    }
}

impl CanvasApp {
    /// The screen rect of the URL bar strip.
    pub(super) fn url_bar_rect(&self) -> Rect {
        let width = match &self.window {
            Some(w) => w.inner_size().width as f64,
            None => 0.0,
        };
        Rect::new(0.0, 0.0, width, self.config.canvas.url_bar_height)
    }

    /// Create the URL bar panel webview. Called once at startup.
    pub(super) fn create_url_bar(&mut self) {
        let window = match &self.window {
            Some(w) => w.clone(),
            None => return,
        };
        let bounds = rect_to_wry(&self.url_bar_rect());

        let registry = match &mut self.webviews {
            Some(r) => r,
            None => return,
        };
        let config = WebViewConfig::panel(URL_BAR_HTML);
        if let Err(e) = registry.create(URL_BAR_VIEW_ID, window.as_ref(), bounds, config) {
            error!(error = %e, "Failed to create URL bar panel");
        }
    }

    /// Keep the URL bar spanning the window width after a resize.
    pub(super) fn sync_url_bar_bounds(&mut self) {
        let bounds = rect_to_wry(&self.url_bar_rect());
        if let Some(ref registry) = self.webviews {
            if let Some(handle) = registry.get(URL_BAR_VIEW_ID) {
                if let Err(e) = handle.set_bounds(bounds) {
                    tracing::warn!(error = %e, "Failed to update URL bar bounds");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_host_gets_https() {
        assert_eq!(
            normalize_url("example.com").as_deref(),
            Some("https://example.com")
        );
    }

    #[test]
    fn existing_schemes_are_kept() {
        assert_eq!(
            normalize_url("http://example.com").as_deref(),
            Some("http://example.com")
        );
        assert_eq!(
            normalize_url("https://example.com/a?b=c").as_deref(),
            Some("https://example.com/a?b=c")
        );
    }

    #[test]
    fn empty_and_whitespace_are_rejected() {
        assert_eq!(normalize_url(""), None);
        assert_eq!(normalize_url("   "), None);
        assert_eq!(normalize_url("\t\n"), None);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(
            normalize_url("  example.com  ").as_deref(),
            Some("https://example.com")
        );
    }

    #[test]
    fn url_bar_html_wires_the_ipc_bridge() {
        assert!(URL_BAR_HTML.contains("window.webcanvas.ipc.send('open-url'"));
        assert!(URL_BAR_HTML.contains("Enter URL and press Enter"));
        assert!(URL_BAR_HTML.contains("Add Page"));
    }
}
