//! Configuration schema. All sections use serde defaults so partial
//! configs work out of the box.

use serde::{Deserialize, Serialize};

pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Window appearance and startup geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial inner width in logical pixels.
    pub width: u32,
    /// Initial inner height in logical pixels.
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "WebCanvas".into(),
            width: 1280,
            height: 800,
        }
    }
}

/// Canvas item sizing, in scene units.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Size given to newly placed pages.
    pub default_page_width: f64,
    pub default_page_height: f64,
    /// Resize floor; items never shrink below this.
    pub min_page_width: f64,
    pub min_page_height: f64,
    /// Width of the drag frame around each page; its corner squares are
    /// the resize handles.
    pub frame_width: f64,
    /// Height of the URL bar panel at the top of the window.
    pub url_bar_height: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            default_page_width: 640.0,
            default_page_height: 480.0,
            min_page_width: 50.0,
            min_page_height: 50.0,
            frame_width: 14.0,
            url_bar_height: 40.0,
        }
    }
}

/// Logging defaults; overridable from the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing filter directive.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "webcanvas=info".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WebCanvasConfig {
    pub window: WindowConfig,
    pub canvas: CanvasConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
