use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clima_core::{Config, WeatherFetcher, WeatherQuery, config::DEFAULT_BASE_URL};
use inquire::{Password, PasswordDisplayMode, Text};
use tracing::debug;

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "clima", version, about = "Current weather for a city or a location")]
pub struct Cli {
    /// Print the reading as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and endpoint.
    Configure,

    /// Show current weather for a city.
    City {
        /// City name, e.g. `London` or `New York`.
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Show current weather at a coordinate pair.
    Coords {
        /// Latitude in degrees, -90..=90.
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in degrees, -180..=180.
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },
}

impl Command {
    /// The query this command asks for, if it fetches weather at all.
    pub fn query(&self) -> Option<WeatherQuery> {
        match self {
            Command::Configure => None,
            Command::City { name } => Some(WeatherQuery::city(name.join(" "))),
            Command::Coords { lat, lon } => Some(WeatherQuery::coordinates(*lat, *lon)),
        }
    }
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let Some(query) = self.command.query() else {
            return configure();
        };

        let config = Config::load_with_env()?;
        let fetcher = WeatherFetcher::from_config(&config)?;
        debug!(?query, "fetching weather");

        let reading = fetcher
            .fetch(&query)
            .await
            .with_context(|| format!("Could not get weather for {}", output::describe(&query)))?;

        if self.json {
            println!("{}", output::json(&reading)?);
        } else {
            println!("{}", output::human(&reading));
        }

        Ok(())
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .with_help_message("Create one at https://home.openweathermap.org/api_keys")
        .prompt()
        .context("Failed to read API key")?;

    let current_url = config.base_url.clone().unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let base_url = Text::new("Endpoint URL:")
        .with_default(&current_url)
        .prompt()
        .context("Failed to read endpoint URL")?;

    config.api_key = Some(api_key.trim().to_string());
    config.base_url = Some(base_url.trim().to_string()).filter(|u| u != DEFAULT_BASE_URL);

    // Refuse to save something `clima city` couldn't use.
    config.endpoint()?;
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_words_are_joined() {
        let cli = Cli::try_parse_from(["clima", "city", "New", "York"]).expect("valid args");
        assert!(!cli.json);
        assert_eq!(cli.command.query(), Some(WeatherQuery::city("New York")));
    }

    #[test]
    fn city_requires_a_name() {
        assert!(Cli::try_parse_from(["clima", "city"]).is_err());
    }

    #[test]
    fn coords_accept_negative_values() {
        let cli = Cli::try_parse_from(["clima", "coords", "--lat", "-33.86882", "--lon", "-70.6693"])
            .expect("valid args");
        assert_eq!(
            cli.command.query(),
            Some(WeatherQuery::coordinates(-33.86882, -70.6693))
        );
    }

    #[test]
    fn json_flag_is_global() {
        let cli = Cli::try_parse_from(["clima", "city", "Oslo", "--json"]).expect("valid args");
        assert!(cli.json);

        let cli = Cli::try_parse_from(["clima", "--json", "coords", "--lat", "1", "--lon", "2"])
            .expect("valid args");
        assert!(cli.json);
    }

    #[test]
    fn configure_has_no_query() {
        let cli = Cli::try_parse_from(["clima", "configure"]).expect("valid args");
        assert!(cli.command.query().is_none());
    }

    #[test]
    fn non_numeric_coordinates_are_rejected() {
        assert!(Cli::try_parse_from(["clima", "coords", "--lat", "north", "--lon", "2"]).is_err());
    }
}
