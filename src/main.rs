use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use dungeon::app::App;
use dungeon::config::{Cli, Config};
use dungeon::formatter::TickFormatter;
use tracing::{error, info};
use tracing_error::ErrorLayer;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter};

/// The terminal frontend owns the screen, so it always logs to a file.
#[cfg(not(feature = "sdl"))]
fn log_destination(config: &Config) -> Option<PathBuf> {
    Some(config.log_file.clone().unwrap_or_else(|| PathBuf::from("dungeon.log")))
}

#[cfg(feature = "sdl")]
fn log_destination(config: &Config) -> Option<PathBuf> {
    config.log_file.clone()
}

fn init_tracing(config: &Config) -> Result<()> {
    let (writer, ansi) = match log_destination(config) {
        Some(path) => {
            let file = File::create(&path).with_context(|| format!("Failed to create log file {}", path.display()))?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None => (BoxMakeWriter::new(std::io::stderr), true),
    };

    let subscriber = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(writer).with_ansi(ansi).event_format(TickFormatter))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber).context("Could not set global default subscriber")?;
    Ok(())
}

pub fn main() -> Result<()> {
    let config = Config::from(Cli::parse());
    init_tracing(&config)?;
    info!(seed = ?config.seed, muted = config.muted, "Starting dungeon");

    let result = App::new(&config).and_then(|mut app| app.run());
    if let Err(e) = &result {
        error!("Game aborted: {:#}", e);
    }
    info!("Exiting");
    result
}
