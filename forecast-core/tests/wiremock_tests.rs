//! HTTP contract tests for the forecast endpoint client.

use std::sync::Mutex;

use forecast_core::{
    CityQuery, ForecastApi, HttpForecastApi, RenderedResults, ResultRow, Submission, SubmitError,
    Trigger, UiPort, WeatherRequestClient,
};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FORECAST_PATH: &str = "/api/weather/forecast";

fn api_for(server: &MockServer) -> HttpForecastApi {
    HttpForecastApi::new(format!("{}{FORECAST_PATH}", server.uri()))
}

#[derive(Debug, Default)]
struct BannerUi {
    input: String,
    loading: Mutex<bool>,
    banner: Mutex<Option<String>>,
    results: Mutex<Option<RenderedResults>>,
}

impl UiPort for BannerUi {
    fn input(&self) -> String {
        self.input.clone()
    }

    fn set_loading(&self, loading: bool) {
        *self.loading.lock().unwrap() = loading;
        if loading {
            *self.banner.lock().unwrap() = None;
            *self.results.lock().unwrap() = None;
        }
    }

    fn show_error(&self, text: &str) {
        *self.banner.lock().unwrap() = Some(text.to_string());
    }

    fn show_results(&self, results: &RenderedResults) {
        *self.results.lock().unwrap() = Some(results.clone());
    }
}

#[tokio::test]
async fn posts_cities_as_json() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(FORECAST_PATH))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({ "cities": ["Paris", "London", "Paris"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "totalCities": 3,
            "processedCount": 2,
            "weatherData": {
                "Paris": { "temperature": 20.6, "humidity": 55 }
            },
            "processedCities": ["Paris", "London(error: city not found)", "Paris"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let query = CityQuery::parse("Paris\nLondon\nParis").unwrap();
    let report = api_for(&server).fetch_report(&query).await.unwrap();

    assert_eq!(report.total_cities, 3);
    assert_eq!(report.processed_count, 2);
    assert_eq!(report.processed_cities.len(), 3);
    assert_eq!(report.city_weather("Paris").and_then(|w| w.temperature), Some(20.6));
}

#[tokio::test]
async fn null_fields_still_render() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(FORECAST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "totalCities": 1,
            "processedCount": null,
            "weatherData": { "Paris": null },
            "processedCities": ["Paris"]
        })))
        .mount(&server)
        .await;

    let client = WeatherRequestClient::new(api_for(&server), BannerUi::default());
    let submission = client.submit_query("Paris").await.unwrap();

    let Submission::Rendered(rendered) = submission else {
        panic!("expected rendered submission");
    };
    assert_eq!(rendered.stats, "Обработано городов: 0 из 1");
    assert_eq!(rendered.rows, vec![ResultRow::Missing { city: "Paris".into() }]);
    assert!(client.ui().banner.lock().unwrap().is_none());
}

#[tokio::test]
async fn non_success_status_is_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(FORECAST_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let query = CityQuery::parse("Paris").unwrap();
    let err = api_for(&server).fetch_report(&query).await.unwrap_err();

    assert_eq!(err, SubmitError::Http { status: 500 });
}

#[tokio::test]
async fn invalid_body_is_network_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(FORECAST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let query = CityQuery::parse("Paris").unwrap();
    let err = api_for(&server).fetch_report(&query).await.unwrap_err();

    assert!(matches!(err, SubmitError::Network { .. }), "got {err:?}");
}

#[tokio::test]
async fn unreachable_endpoint_is_network_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let api = HttpForecastApi::new(format!("http://127.0.0.1:{port}{FORECAST_PATH}"));

    let query = CityQuery::parse("Paris").unwrap();
    let err = api.fetch_report(&query).await.unwrap_err();

    assert!(matches!(err, SubmitError::Network { .. }), "got {err:?}");
    assert!(err.banner_text().starts_with("Ошибка при получении данных: "));
}

#[tokio::test]
async fn http_500_ends_with_banner_and_enabled_form() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(FORECAST_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let ui = BannerUi { input: "Paris".into(), ..Default::default() };
    let client = WeatherRequestClient::new(api_for(&server), ui);

    client.trigger(Trigger::Button).await.unwrap_err();

    assert_eq!(
        client.ui().banner.lock().unwrap().as_deref(),
        Some("Ошибка при получении данных: HTTP error! status: 500")
    );
    assert!(!*client.ui().loading.lock().unwrap());
}

#[tokio::test]
async fn successive_reports_replace_rows() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_json(serde_json::json!({ "cities": ["Paris"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "totalCities": 1,
            "processedCount": 1,
            "weatherData": { "Paris": { "temperature": 18.0 } },
            "processedCities": ["Paris"]
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(body_json(serde_json::json!({ "cities": ["Oslo", "Rome"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "totalCities": 2,
            "processedCount": 0,
            "processedCities": ["Oslo", "Rome(error: timeout)"]
        })))
        .mount(&server)
        .await;

    let client = WeatherRequestClient::new(api_for(&server), BannerUi::default());

    client.submit_query("Paris").await.unwrap();
    let second = client.submit_query("Oslo\nRome").await.unwrap();

    let shown = client.ui().results.lock().unwrap().clone().expect("results shown");
    assert_eq!(Submission::Rendered(shown.clone()), second);
    assert_eq!(shown.stats, "Обработано городов: 0 из 2");
    assert_eq!(
        shown.rows,
        vec![
            ResultRow::Missing { city: "Oslo".into() },
            ResultRow::Failed { city: "Rome".into(), detail: "Rome(error: timeout)".into() },
        ]
    );
}
