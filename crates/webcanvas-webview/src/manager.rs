//! WebView lifecycle management.
//!
//! `WebViewManager` creates, tracks, and destroys `wry::WebView` instances,
//! one per canvas item plus one per UI panel (URL bar, context menu,
//! settings dialog).

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::debug;
use wry::raw_window_handle;
use wry::{WebView, WebViewBuilder};

use crate::events::{PageLoadState, WebViewEvent};
use crate::ipc::{CONTEXT_MENU_FORWARD_SCRIPT, IPC_INIT_SCRIPT};

/// Configuration for creating a new WebView instance.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial URL to load (mutually exclusive with `html`).
    pub url: Option<String>,
    /// Initial HTML content to render (mutually exclusive with `url`).
    pub html: Option<String>,
    /// Whether the WebView background should be transparent.
    pub transparent: bool,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    /// Disable the engine's own context menu and forward right-clicks
    /// to the host over IPC. On for embedded pages, off for UI panels.
    pub suppress_context_menu: bool,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: None,
            html: None,
            transparent: false,
            devtools: cfg!(debug_assertions),
            user_agent: Some("WebCanvas/0.1".to_string()),
            suppress_context_menu: false,
        }
    }
}

impl WebViewConfig {
    /// Config for an embedded page item: loads a URL with the engine
    /// context menu suppressed.
    pub fn page(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            suppress_context_menu: true,
            ..Default::default()
        }
    }

    /// Config for a UI panel rendered from inline HTML.
    pub fn panel(html: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            ..Default::default()
        }
    }
}

/// Handle to a managed WebView instance. Provides methods to interact
/// with the underlying WebView (navigate, reload, resize, etc.).
pub struct WebViewHandle {
    /// The underlying wry WebView.
    webview: WebView,
    /// The view ID this WebView belongs to.
    view_id: u32,
    /// Current URL (best-effort tracking).
    current_url: String,
    /// Current title.
    current_title: String,
}

impl WebViewHandle {
    /// Get the view ID.
    pub fn view_id(&self) -> u32 {
        self.view_id
    }

    /// Get the current URL.
    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    /// Get the current title.
    pub fn current_title(&self) -> &str {
        &self.current_title
    }

    /// Navigate to a URL.
    pub fn load_url(&mut self, url: &str) -> Result<(), wry::Error> {
        self.current_url = url.to_string();
        self.webview.load_url(url)
    }

    /// Reload the current URL.
    pub fn reload(&self) -> Result<(), wry::Error> {
        self.webview.reload()
    }

    /// Execute JavaScript in the WebView context.
    pub fn evaluate_script(&self, js: &str) -> Result<(), wry::Error> {
        self.webview.evaluate_script(js)
    }

    /// Send a typed IPC message to JavaScript.
    pub fn send_ipc(&self, kind: &str, payload: &serde_json::Value) -> Result<(), wry::Error> {
        let script = crate::ipc::js_dispatch_message(kind, payload);
        self.webview.evaluate_script(&script)
    }

    /// Set the WebView bounds (position + size) within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    /// Show or hide the WebView.
    pub fn set_visible(&self, visible: bool) -> Result<(), wry::Error> {
        self.webview.set_visible(visible)
    }

    /// Update the tracked title.
    pub fn set_title(&mut self, title: String) {
        self.current_title = title;
    }
}

/// Builds WebView instances and collects their events.
pub struct WebViewManager {
    /// Event sink — events are pushed here for the main event loop to consume.
    events: Arc<Mutex<Vec<WebViewEvent>>>,
}

impl WebViewManager {
    /// Create a new WebView manager.
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        let mut events = self.events.lock().unwrap();
        std::mem::take(&mut *events)
    }

    /// Create a new WebView as a child of the given window.
    ///
    /// The `window` must implement `raw_window_handle::HasWindowHandle`.
    /// The WebView is positioned at `bounds` within the parent window.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        view_id: u32,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let events = Arc::clone(&self.events);
        let vid = view_id;

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_focused(false);

        // Initialization script for IPC bridge
        builder = builder.with_initialization_script(IPC_INIT_SCRIPT);

        if config.suppress_context_menu {
            builder = builder.with_initialization_script(CONTEXT_MENU_FORWARD_SCRIPT);
        }

        // User agent
        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        // IPC handler: JS -> Rust
        let ipc_events = Arc::clone(&events);
        builder = builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();
            debug!(view_id = vid, body = %body, "IPC message from JS");
            if let Ok(mut evts) = ipc_events.lock() {
                evts.push(WebViewEvent::IpcMessage { view_id: vid, body });
            }
        });

        // Page load handler
        let load_events = Arc::clone(&events);
        builder = builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(view_id = vid, ?state, url = %url, "page load");
            if let Ok(mut evts) = load_events.lock() {
                evts.push(WebViewEvent::PageLoad {
                    view_id: vid,
                    state,
                    url,
                });
            }
        });

        // Title change handler
        let title_events = Arc::clone(&events);
        builder = builder.with_document_title_changed_handler(move |title| {
            debug!(view_id = vid, title = %title, "title changed");
            if let Ok(mut evts) = title_events.lock() {
                evts.push(WebViewEvent::TitleChanged {
                    view_id: vid,
                    title,
                });
            }
        });

        // Set initial content
        let initial_url;
        if let Some(url) = &config.url {
            builder = builder.with_url(url);
            initial_url = url.clone();
        } else if let Some(html) = &config.html {
            builder = builder.with_html(html);
            initial_url = "about:blank".to_string();
        } else {
            builder = builder.with_html("<html><body></body></html>");
            initial_url = "about:blank".to_string();
        }

        // Build as child WebView
        let webview = builder.build_as_child(window)?;

        debug!(view_id, url = %initial_url, "WebView created");

        Ok(WebViewHandle {
            webview,
            view_id,
            current_url: initial_url,
            current_title: String::new(),
        })
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}

/// A registry that maps view IDs to WebView handles.
/// This is a higher-level convenience over `WebViewManager` for
/// managing the full lifecycle.
pub struct WebViewRegistry {
    manager: WebViewManager,
    handles: HashMap<u32, WebViewHandle>,
}

impl WebViewRegistry {
    pub fn new(manager: WebViewManager) -> Self {
        Self {
            manager,
            handles: HashMap::new(),
        }
    }

    /// Create a WebView for a view ID and register it.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &mut self,
        view_id: u32,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<(), wry::Error> {
        let handle = self.manager.create(view_id, window, bounds, config)?;
        self.handles.insert(view_id, handle);
        Ok(())
    }

    /// Get a handle to a WebView by view ID.
    pub fn get(&self, view_id: u32) -> Option<&WebViewHandle> {
        self.handles.get(&view_id)
    }

    /// Get a mutable handle to a WebView by view ID.
    pub fn get_mut(&mut self, view_id: u32) -> Option<&mut WebViewHandle> {
        self.handles.get_mut(&view_id)
    }

    /// Destroy a WebView by view ID. Dropping the handle tears down the
    /// underlying engine view synchronously.
    pub fn destroy(&mut self, view_id: u32) -> bool {
        if self.handles.remove(&view_id).is_some() {
            debug!(view_id, "WebView destroyed");
            if let Ok(mut evts) = self.manager.events.lock() {
                evts.push(WebViewEvent::Closed { view_id });
            }
            true
        } else {
            false
        }
    }

    /// Get all active view IDs.
    pub fn active_views(&self) -> Vec<u32> {
        self.handles.keys().copied().collect()
    }

    /// Drain all pending events from all WebViews.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        self.manager.drain_events()
    }

    /// How many WebViews are active.
    pub fn count(&self) -> usize {
        self.handles.len()
    }
}
