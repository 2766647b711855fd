//! Core TOML config loading: read from path or platform default.

use std::path::Path;

use tracing::{info, warn};

use webcanvas_common::ConfigError;

use crate::paths::{create_default_config, default_config_path};
use crate::schema::WebCanvasConfig;
use crate::validation;

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// After loading, the config is validated; if validation fails, a warning
/// is logged and the parsed config is returned as-is.
pub fn load_from_path(path: &Path) -> Result<WebCanvasConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: WebCanvasConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!(
            "config validation warning: {e} — using parsed config with potentially invalid values"
        );
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/webcanvas/config.toml`
/// On Linux: `~/.config/webcanvas/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<WebCanvasConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::ParseError(msg)) if msg.contains("failed to read") => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(WebCanvasConfig::default())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_from_path_reads_partial_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[window]\nwidth = 1920\n").unwrap();

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.window.width, 1920);
        assert_eq!(config.window.height, 800); // default
    }

    #[test]
    fn load_from_missing_path_is_parse_error() {
        let err = load_from_path(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(ref msg) if msg.contains("failed to read")));
    }

    #[test]
    fn load_from_bad_toml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not = [valid").unwrap();

        let err = load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(ref msg) if msg.contains("parse TOML")));
    }

    #[test]
    fn invalid_values_still_load_with_warning() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[canvas]\nmin_page_width = -5.0\n").unwrap();

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.canvas.min_page_width, -5.0);
    }
}
