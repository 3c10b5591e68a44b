use std::{
    io::{self, IsTerminal, Read},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use forecast_core::{Config, HttpForecastApi, Submission, Trigger, WeatherRequestClient};
use tracing::debug;

use crate::terminal::{OutputFormat, TerminalUi};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Multi-city weather forecast client")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch weather for a list of cities.
    Show {
        /// City names. If neither cities nor --file are given, stdin is read,
        /// one city per line.
        cities: Vec<String>,

        /// Read cities from a file, one per line.
        #[arg(long, conflicts_with = "cities")]
        file: Option<PathBuf>,

        /// Print the table body as HTML rows instead of a text table.
        #[arg(long)]
        html: bool,

        /// Override the configured forecast endpoint.
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// Set the forecast endpoint.
    Configure {
        /// New endpoint URL; prompts when absent.
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// Print the location of the config file.
    ConfigPath,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Command::Show { cities, file, html, endpoint } => {
                let config = Config::load()?;
                let endpoint = match endpoint {
                    Some(endpoint) => {
                        forecast_core::config::validate_endpoint(&endpoint)?;
                        endpoint
                    }
                    None => config.endpoint().to_string(),
                };
                let api = HttpForecastApi::new(endpoint);
                debug!(endpoint = api.endpoint(), "resolved forecast endpoint");

                let input = read_input(cities, file)?;
                let format = if html { OutputFormat::Html } else { OutputFormat::Table };

                let client = WeatherRequestClient::new(api, TerminalUi::new(input, format));

                match client.trigger(Trigger::Button).await {
                    Ok(Submission::Rendered(_) | Submission::Busy) => Ok(ExitCode::SUCCESS),
                    Err(_) => Ok(ExitCode::FAILURE),
                }
            }
            Command::Configure { endpoint } => {
                let mut config = Config::load()?;

                let endpoint = match endpoint {
                    Some(endpoint) => endpoint,
                    None => inquire::Text::new("Forecast endpoint:")
                        .with_default(config.endpoint())
                        .prompt()
                        .context("Failed to read endpoint")?,
                };

                config.set_endpoint(&endpoint)?;
                config.save()?;

                println!("Endpoint set to {}", config.endpoint());
                Ok(ExitCode::SUCCESS)
            }
            Command::ConfigPath => {
                println!("{}", Config::config_file_path()?.display());
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

/// Newline-separated city text from args, a file, or stdin.
fn read_input(cities: Vec<String>, file: Option<PathBuf>) -> anyhow::Result<String> {
    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read cities file: {}", path.display()));
    }

    if !cities.is_empty() {
        return Ok(cities.join("\n"));
    }

    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("Enter one city per line, finish with Ctrl+D:");
    }

    let mut input = String::new();
    stdin.read_to_string(&mut input).context("Failed to read cities from stdin")?;
    Ok(input)
}
