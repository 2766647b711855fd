//! WebCanvas configuration system.
//!
//! TOML-based configuration with full serde defaults so partial configs
//! work out of the box. The file lives in the OS config directory and is
//! created on first run.

pub mod loader;
pub mod paths;
pub mod schema;
pub mod validation;

pub use schema::{WebCanvasConfig, CONFIG_SCHEMA_VERSION};

use webcanvas_common::ConfigError;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<WebCanvasConfig, ConfigError> {
    let config = loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}
