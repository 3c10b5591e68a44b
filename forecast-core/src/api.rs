use async_trait::async_trait;
use reqwest::{Client, header::CONTENT_TYPE};
use std::fmt::Debug;
use tracing::{debug, instrument};

use crate::{
    error::SubmitError,
    model::{CityQuery, WeatherReport},
};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/api/weather/forecast";

/// Remote side of a submission: one query in, one report out.
#[async_trait]
pub trait ForecastApi: Send + Sync + Debug {
    async fn fetch_report(&self, query: &CityQuery) -> Result<WeatherReport, SubmitError>;
}

/// Posts the query as JSON to the aggregation endpoint.
#[derive(Debug, Clone)]
pub struct HttpForecastApi {
    endpoint: String,
    http: Client,
}

impl HttpForecastApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into(), http: Client::new() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ForecastApi for HttpForecastApi {
    #[instrument(skip_all, fields(endpoint = %self.endpoint, cities = query.len()))]
    async fn fetch_report(&self, query: &CityQuery) -> Result<WeatherReport, SubmitError> {
        let body = serde_json::to_vec(query)?;

        let res = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = res.status();
        debug!(%status, "forecast endpoint responded");

        if !status.is_success() {
            return Err(SubmitError::Http { status: status.as_u16() });
        }

        let bytes = res.bytes().await?;
        let report: WeatherReport = serde_json::from_slice(&bytes)?;

        Ok(report)
    }
}
