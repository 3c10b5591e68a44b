//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - Parsing of the city input and the forecast report payload
//! - The HTTP client for the forecast aggregation endpoint
//! - Rendering of a report into table rows (plain text and HTML)
//! - A UI port and the request client that drives it
//! - Configuration handling
//!
//! Hosts implement [`UiPort`]; everything else is reusable as is.

pub mod api;
pub mod client;
pub mod config;
pub mod entry;
pub mod error;
pub mod model;
pub mod render;
pub mod ui;

pub use api::{DEFAULT_ENDPOINT, ForecastApi, HttpForecastApi};
pub use client::{Submission, WeatherRequestClient};
pub use config::Config;
pub use entry::ProcessedEntry;
pub use error::SubmitError;
pub use model::{CityQuery, CityWeather, WeatherReport};
pub use render::{RenderedResults, ResultRow, WeatherRow, render_results};
pub use ui::{Trigger, UiPort, is_submit_shortcut};
