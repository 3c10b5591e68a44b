use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

use crate::error::SubmitError;

/// Ordered, non-empty list of city names to ask the server about.
///
/// Built from free-form text: one city per line, surrounding whitespace
/// trimmed, blank lines dropped. Order is kept and duplicates are not removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityQuery {
    cities: Vec<String>,
}

impl CityQuery {
    pub fn parse(raw_input: &str) -> Result<Self, SubmitError> {
        let trimmed = raw_input.trim();
        if trimmed.is_empty() {
            return Err(SubmitError::EmptyInput);
        }

        let cities: Vec<String> = trimmed
            .split('\n')
            .map(str::trim)
            .filter(|city| !city.is_empty())
            .map(str::to_owned)
            .collect();

        if cities.is_empty() {
            return Err(SubmitError::EmptyInput);
        }

        Ok(Self { cities })
    }

    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

/// Response payload of the forecast endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeatherReport {
    #[serde(deserialize_with = "null_as_default")]
    pub total_cities: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub processed_count: u64,
    /// A `null` entry means the server had nothing for that city.
    #[serde(deserialize_with = "null_as_default")]
    pub weather_data: HashMap<String, Option<CityWeather>>,
    /// Plain city names, or names carrying an `(error: ...)` suffix.
    #[serde(deserialize_with = "null_as_default")]
    pub processed_cities: Vec<String>,
}

impl WeatherReport {
    /// Weather for a city, if the server sent any.
    pub fn city_weather(&self, city: &str) -> Option<&CityWeather> {
        self.weather_data.get(city).and_then(Option::as_ref)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CityWeather {
    pub temperature: Option<f64>,
    pub feels_like: Option<f64>,
    pub description: Option<String>,
    pub humidity: Option<f64>,
    pub pressure: Option<f64>,
    pub wind_speed: Option<f64>,
}
