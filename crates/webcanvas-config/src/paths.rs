//! Config path resolution and default file creation.

use std::path::Path;

use tracing::info;

use webcanvas_common::ConfigError;

/// Get the platform-specific default config file path.
pub fn default_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("webcanvas").join("config.toml"))
}

/// The TOML written on first run.
pub fn default_config_toml() -> String {
    r#"# WebCanvas configuration.
# Missing keys fall back to built-in defaults.

[window]
title = "WebCanvas"
width = 1280
height = 800

[canvas]
# Size given to newly placed pages (scene units).
default_page_width = 640.0
default_page_height = 480.0
# Resize floor; items never shrink below this.
min_page_width = 50.0
min_page_height = 50.0
# Width of the drag frame around each page.
frame_width = 14.0
url_bar_height = 40.0

[logging]
level = "webcanvas=info"
"#
    .to_string()
}

/// Create a default TOML config file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}
