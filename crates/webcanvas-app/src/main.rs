mod app_state;
mod cli;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use webcanvas_config::WebCanvasConfig;

/// Load the config file named on the CLI, or the platform default.
fn load_startup_config(args: &cli::Args) -> webcanvas_common::Result<WebCanvasConfig> {
    let config = match args.config {
        Some(ref path) => webcanvas_config::loader::load_from_path(std::path::Path::new(path))?,
        None => webcanvas_config::load_config()?,
    };
    Ok(config)
}

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Load config before logging so the configured level can be applied;
    // the CLI flag wins over the file.
    let config = load_startup_config(&args).unwrap_or_else(|e| {
        eprintln!("config load failed, using defaults: {e}");
        WebCanvasConfig::default()
    });

    // Initialize logging
    let log_directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "webcanvas=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("WebCanvas v{} starting...", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Config loaded ({}x{} window)",
        config.window.width,
        config.window.height
    );

    // Create event loop and run
    let event_loop = EventLoop::new().expect("failed to create event loop");
    let mut app = app_state::CanvasApp::new(config, args);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
