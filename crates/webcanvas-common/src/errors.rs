use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum WebCanvasError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("webview error: {0}")]
    WebView(String),

    #[error("window error: {0}")]
    Window(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("min_page_size is zero".into());
        assert_eq!(
            err.to_string(),
            "config validation error: min_page_size is zero"
        );
    }

    #[test]
    fn webcanvas_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: WebCanvasError = config_err.into();
        assert!(matches!(err, WebCanvasError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn webcanvas_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: WebCanvasError = io_err.into();
        assert!(matches!(err, WebCanvasError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn webcanvas_error_other_variants() {
        let err = WebCanvasError::WebView("js error".into());
        assert_eq!(err.to_string(), "webview error: js error");

        let err = WebCanvasError::Window("no window".into());
        assert_eq!(err.to_string(), "window error: no window");

        let err = WebCanvasError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
