use clap::Parser;

/// WebCanvas — a pannable canvas of embedded web pages.
#[derive(Parser, Debug)]
#[command(name = "webcanvas", version, about)]
pub struct Args {
    /// URLs to place on the canvas at startup.
    pub urls: Vec<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Seed for the page placement RNG, for reproducible layouts.
    #[arg(long)]
    pub placement_seed: Option<u64>,
}

pub fn parse() -> Args {
    Args::parse()
}
