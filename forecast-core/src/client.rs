use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, warn};

use crate::{
    api::ForecastApi,
    error::SubmitError,
    model::CityQuery,
    render::{RenderedResults, render_results},
    ui::{Trigger, UiPort},
};

/// How a submission ended when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Rendered(RenderedResults),
    /// Another request was still in flight; nothing was sent or shown.
    Busy,
}

/// Reads cities from a [`UiPort`], asks a [`ForecastApi`] about them and
/// puts the outcome back on the port.
///
/// At most one request is in flight per client, whichever trigger started it.
#[derive(Debug)]
pub struct WeatherRequestClient<A, U> {
    api: A,
    ui: U,
    in_flight: AtomicBool,
}

impl<A, U> WeatherRequestClient<A, U>
where
    A: ForecastApi,
    U: UiPort,
{
    pub fn new(api: A, ui: U) -> Self {
        Self { api, ui, in_flight: AtomicBool::new(false) }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Single entry point for the submit button and the Ctrl+Enter shortcut.
    pub async fn trigger(&self, trigger: Trigger) -> Result<Submission, SubmitError> {
        if self.is_busy() {
            debug!(?trigger, "request already in flight, trigger ignored");
            return Ok(Submission::Busy);
        }

        let raw_input = self.ui.input();
        self.submit_query(&raw_input).await
    }

    pub async fn submit_query(&self, raw_input: &str) -> Result<Submission, SubmitError> {
        if self.is_busy() {
            return Ok(Submission::Busy);
        }

        let query = match CityQuery::parse(raw_input) {
            Ok(query) => query,
            Err(err) => {
                self.ui.show_error(&err.banner_text());
                return Err(err);
            }
        };

        let outcome = {
            let Some(_loading) = LoadingGuard::acquire(&self.in_flight, &self.ui) else {
                return Ok(Submission::Busy);
            };
            debug!(cities = ?query.cities(), "submitting city query");
            self.api.fetch_report(&query).await
        };

        match outcome {
            Ok(report) => {
                let rendered = render_results(&report);
                info!(
                    rows = rendered.rows.len(),
                    processed = report.processed_count,
                    total = report.total_cities,
                    "forecast report rendered"
                );
                self.ui.show_results(&rendered);
                Ok(Submission::Rendered(rendered))
            }
            Err(err) => {
                warn!(error = %err, "forecast request failed");
                self.ui.show_error(&err.banner_text());
                Err(err)
            }
        }
    }
}

/// Holds the loading state; dropping it restores an interactive form.
struct LoadingGuard<'a, U: UiPort> {
    flag: &'a AtomicBool,
    ui: &'a U,
}

impl<'a, U: UiPort> LoadingGuard<'a, U> {
    fn acquire(flag: &'a AtomicBool, ui: &'a U) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire).ok()?;
        ui.set_loading(true);
        Some(Self { flag, ui })
    }
}

impl<U: UiPort> Drop for LoadingGuard<'_, U> {
    fn drop(&mut self) {
        self.ui.set_loading(false);
        self.flag.store(false, Ordering::Release);
    }
}
