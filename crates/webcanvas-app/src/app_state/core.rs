//! CanvasApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::window::Window;

use webcanvas_common::events::EventBus;
use webcanvas_common::types::{Point, Rect};
use webcanvas_config::WebCanvasConfig;
use webcanvas_scene::{CanvasScene, PageDefaults, Viewport};
use webcanvas_webview::WebViewRegistry;

use crate::cli::Args;

use super::context_menu::ContextMenu;
use super::drag::DragState;
use super::settings_dialog::RefreshDialog;

/// Top-level application state.
pub struct CanvasApp {
    pub(super) config: WebCanvasConfig,
    pub(super) event_bus: EventBus,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // WebViews (page items + UI panels)
    pub(super) webviews: Option<WebViewRegistry>,

    // Canvas model
    pub(super) scene: CanvasScene,
    pub(super) viewport: Viewport,
    pub(super) rng: StdRng,

    // Mouse interaction
    pub(super) cursor_pos: (f64, f64),
    pub(super) drag: Option<DragState>,

    // Overlays
    pub(super) menu: Option<ContextMenu>,
    pub(super) dialog: Option<RefreshDialog>,

    // Modifier tracking (winit sends these separately)
    pub(super) modifiers: winit::keyboard::ModifiersState,

    // URLs from the CLI, placed once the window exists
    pub(super) startup_urls: Vec<String>,

    // Whether the app should exit
    pub(super) should_exit: bool,

    pub(super) last_poll: Instant,
}

impl CanvasApp {
    pub fn new(config: WebCanvasConfig, args: Args) -> Self {
        let defaults = PageDefaults {
            width: config.canvas.default_page_width,
            height: config.canvas.default_page_height,
            min_width: config.canvas.min_page_width,
            min_height: config.canvas.min_page_height,
        };
        let rng = match args.placement_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            event_bus: EventBus::new(256),
            window: None,
            webviews: None,
            scene: CanvasScene::with_defaults(defaults),
            viewport: Viewport::new(),
            rng,
            cursor_pos: (0.0, 0.0),
            drag: None,
            menu: None,
            dialog: None,
            modifiers: winit::keyboard::ModifiersState::empty(),
            startup_urls: args.urls,
            should_exit: false,
            last_poll: Instant::now(),
        }
    }

    /// The screen-space region below the URL bar where the canvas lives.
    pub(super) fn canvas_region(&self) -> Rect {
        let bar = self.config.canvas.url_bar_height;
        match &self.window {
            Some(w) => {
                let size = w.inner_size();
                Rect::new(
                    0.0,
                    bar,
                    size.width as f64,
                    (size.height as f64 - bar).max(0.0),
                )
            }
            None => Rect::new(0.0, bar, 0.0, 0.0),
        }
    }

    /// Map a window cursor position into scene coordinates.
    pub(super) fn scene_point(&self, x: f64, y: f64) -> Point {
        let region = self.canvas_region();
        self.viewport
            .to_scene_point(Point::new(x - region.x, y - region.y))
    }

    /// The currently visible canvas size in scene units, used for page
    /// placement.
    pub(super) fn visible_scene_size(&self) -> (f64, f64) {
        let region = self.canvas_region();
        (
            region.width / self.viewport.scale,
            region.height / self.viewport.scale,
        )
    }
}
