use clap::Parser;
use mars_photos::core::config::{self, CliOverrides};
use mars_photos::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "mars-photos", about = "Browse photos from the Mars rover photo service")]
struct Args {
    /// Override the photo service origin
    #[arg(long)]
    base_url: Option<String>,

    /// Number of grid columns (1-8)
    #[arg(short, long)]
    columns: Option<u16>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - the TUI owns the terminal
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("mars-photos.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        config::MarsConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            base_url: args.base_url.as_deref(),
            columns: args.columns,
        },
    );

    log::info!("Mars Photos starting up: {:?}", resolved);

    let source = tui::build_source(&resolved).map_err(std::io::Error::other)?;
    tui::run(resolved, source)
}
