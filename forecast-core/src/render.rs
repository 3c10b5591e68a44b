//! Turning a [`WeatherReport`] into table rows.
//!
//! Rows keep their cell text unescaped; [`ResultRow::to_html`] escapes every
//! server-supplied value when producing markup.

use std::fmt::Write as _;

use crate::{
    entry::ProcessedEntry,
    model::{CityWeather, WeatherReport},
};

pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_DATA: &str = "Данные не получены";

const ERROR_COLOR: &str = "#c33";
const MUTED_COLOR: &str = "#999";
/// Cells to the right of the city column.
const SPAN: usize = 6;

/// Fully formatted row of the weather table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRow {
    pub city: String,
    pub temperature: String,
    pub feels_like: String,
    pub description: String,
    pub humidity: String,
    pub pressure: String,
    pub wind_speed: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultRow {
    Weather(WeatherRow),
    /// The server flagged the city as failed; `detail` is the entry verbatim.
    Failed { city: String, detail: String },
    /// The city was processed but `weatherData` has nothing for it.
    Missing { city: String },
}

impl ResultRow {
    pub fn city(&self) -> &str {
        match self {
            ResultRow::Weather(row) => &row.city,
            ResultRow::Failed { city, .. } | ResultRow::Missing { city } => city,
        }
    }

    pub fn to_html(&self) -> String {
        match self {
            ResultRow::Weather(row) => {
                let mut html = String::from("<tr>");
                for cell in [
                    &row.city,
                    &row.temperature,
                    &row.feels_like,
                    &row.description,
                    &row.humidity,
                    &row.pressure,
                    &row.wind_speed,
                ] {
                    let _ = write!(html, "<td>{}</td>", escape_html(cell));
                }
                html.push_str("</tr>");
                html
            }
            ResultRow::Failed { city, detail } => format!(
                r#"<tr class="error-row"><td>{}</td><td colspan="{SPAN}" style="color: {ERROR_COLOR};">{}</td></tr>"#,
                escape_html(city),
                escape_html(detail),
            ),
            ResultRow::Missing { city } => format!(
                r#"<tr><td>{}</td><td colspan="{SPAN}" style="color: {MUTED_COLOR};">{NO_DATA}</td></tr>"#,
                escape_html(city),
            ),
        }
    }
}

/// Stats line plus rows, ready for the results section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedResults {
    pub stats: String,
    pub rows: Vec<ResultRow>,
}

impl RenderedResults {
    /// Table body markup, one `<tr>` per line.
    pub fn to_html(&self) -> String {
        self.rows.iter().map(ResultRow::to_html).collect::<Vec<_>>().join("\n")
    }
}

pub fn render_results(report: &WeatherReport) -> RenderedResults {
    let stats = format!(
        "Обработано городов: {} из {}",
        report.processed_count, report.total_cities
    );

    let rows = report
        .processed_cities
        .iter()
        .map(|entry| match ProcessedEntry::parse(entry) {
            ProcessedEntry::Failed { name, raw } => {
                ResultRow::Failed { city: name.to_owned(), detail: raw.to_owned() }
            }
            ProcessedEntry::City(city) => match report.city_weather(city) {
                Some(weather) => ResultRow::Weather(weather_row(city, weather)),
                None => ResultRow::Missing { city: city.to_owned() },
            },
        })
        .collect();

    RenderedResults { stats, rows }
}

fn weather_row(city: &str, weather: &CityWeather) -> WeatherRow {
    WeatherRow {
        city: city.to_owned(),
        temperature: format_temperature(weather.temperature),
        feels_like: format_temperature(weather.feels_like),
        description: weather.description.clone().unwrap_or_else(|| NOT_AVAILABLE.to_owned()),
        humidity: format!("{}%", format_plain(weather.humidity)),
        pressure: format!("{} hPa", format_plain(weather.pressure)),
        wind_speed: format_wind_speed(weather.wind_speed),
    }
}

/// Whole degrees, halves rounded up: `20.5` → `21°C`, `-0.5` → `0°C`.
pub fn format_temperature(value: Option<f64>) -> String {
    match value {
        Some(t) => format!("{}°C", round_half_up(t) as i64),
        None => NOT_AVAILABLE.to_owned(),
    }
}

/// One decimal, exact ties rounded away from zero: `3.25` → `3.3 m/s`.
pub fn format_wind_speed(value: Option<f64>) -> String {
    match value {
        Some(speed) if is_tenths_tie(speed) => {
            format!("{:.1} m/s", (speed * 10.0).round() / 10.0)
        }
        Some(speed) => format!("{speed:.1} m/s"),
        None => NOT_AVAILABLE.to_owned(),
    }
}

/// Nearest integer, ties toward +∞.
fn round_half_up(t: f64) -> f64 {
    let r = t.round();
    if t - r == 0.5 { r + 1.0 } else { r }
}

/// A double sits exactly halfway between two tenths only when it is an odd
/// number of quarters (`x.25`, `x.75`); `{:.1}` would round those to even.
fn is_tenths_tie(value: f64) -> bool {
    let quarters = value * 4.0;
    quarters.fract() == 0.0 && quarters % 2.0 != 0.0
}

fn format_plain(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_owned(), |v| v.to_string())
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
