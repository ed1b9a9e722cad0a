use anyhow::Context;
use clap::{Parser, Subcommand};
use clima_core::{Config, Coordinate, ErrorKind, WeatherProvider, WeatherView, provider_from_config};

use crate::surface::TerminalSurface;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "clima", version, about = "Current weather for a coordinate")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key in the local config file.
    Configure,

    /// Show current weather for a latitude/longitude.
    Show {
        /// Latitude in degrees.
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in degrees.
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { lat, lon } => show(lat, lon).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key);
    config.save()?;

    println!("Saved API key to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(lat: f64, lon: f64) -> anyhow::Result<()> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;

    let coordinate = Coordinate {
        latitude: lat,
        longitude: lon,
    };

    let mut view = WeatherView::new(Box::new(TerminalSurface));
    match provider.current_weather(coordinate).await {
        Ok(snapshot) => view.apply(snapshot),
        Err(err) => view.fail(ErrorKind::from(&err)),
    }

    Ok(())
}
