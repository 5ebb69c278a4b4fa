use anyhow::Context;
use clap::{Parser, Subcommand};
use dashboard_core::{Config, WeatherSession, provider_from_config};
use inquire::{Password, PasswordDisplayMode, Select};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "dashboard", version, about = "Weather dashboard CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com key in the config file.
    Configure,

    /// Show current, hourly, and daily conditions for a location.
    Show {
        /// Location name; defaults to the session default.
        location: Option<String>,
    },

    /// Search for a location, pick one, and show its forecast.
    Search {
        /// Free-text location query.
        query: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { location } => show(location).await,
            Command::Search { query } => search(&query).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("WeatherAPI key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key);
    config.save()?;

    println!("Saved {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(location: Option<String>) -> anyhow::Result<()> {
    let mut session = new_session()?;

    match location {
        Some(name) => session.select_location(&name).await,
        None => session.fetch_weather(None).await,
    }

    if let Some(err) = session.last_error() {
        anyhow::bail!("{err}");
    }

    render::render(&session);
    Ok(())
}

async fn search(query: &str) -> anyhow::Result<()> {
    let mut session = new_session()?;

    session.search_locations(query).await;
    if session.search_results().is_empty() {
        println!("No locations found for '{query}'.");
        return Ok(());
    }

    let labels: Vec<String> = session
        .search_results()
        .iter()
        .map(|l| format!("{}, {}, {}", l.name, l.region, l.country))
        .collect();

    let choice = Select::new("Select a location:", labels)
        .raw_prompt()
        .context("Selection cancelled")?;

    let picked = session.search_results()[choice.index].clone();
    session.clear_search_results();
    session.add_saved_location(picked).await;

    if let Some(err) = session.last_error() {
        anyhow::bail!("{err}");
    }

    render::render(&session);
    Ok(())
}

fn new_session() -> anyhow::Result<WeatherSession> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;
    Ok(WeatherSession::new(provider))
}
