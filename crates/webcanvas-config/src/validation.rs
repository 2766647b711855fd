//! Config validation: range checks on geometry values.

use webcanvas_common::ConfigError;

use crate::schema::WebCanvasConfig;

pub fn validate(config: &WebCanvasConfig) -> Result<(), ConfigError> {
    let canvas = &config.canvas;

    if config.window.width == 0 || config.window.height == 0 {
        return Err(ConfigError::ValidationError(
            "window.width and window.height must be non-zero".into(),
        ));
    }

    if canvas.min_page_width <= 0.0 || canvas.min_page_height <= 0.0 {
        return Err(ConfigError::ValidationError(
            "canvas.min_page_width and canvas.min_page_height must be positive".into(),
        ));
    }

    if canvas.default_page_width < canvas.min_page_width
        || canvas.default_page_height < canvas.min_page_height
    {
        return Err(ConfigError::ValidationError(
            "canvas.default_page_size must not be below canvas.min_page_size".into(),
        ));
    }

    if canvas.frame_width <= 0.0 || canvas.frame_width * 2.0 >= canvas.min_page_width {
        return Err(ConfigError::ValidationError(format!(
            "canvas.frame_width must be in (0, {})",
            canvas.min_page_width / 2.0
        )));
    }

    if canvas.url_bar_height < 16.0 || canvas.url_bar_height > 200.0 {
        return Err(ConfigError::ValidationError(
            "canvas.url_bar_height must be within [16, 200]".into(),
        ));
    }

    Ok(())
}
