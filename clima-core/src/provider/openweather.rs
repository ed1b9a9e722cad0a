use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::FetchError,
    model::{Coordinate, Snapshot},
};

use super::WeatherProvider;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    http: Client,
    base_url: String,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the provider at a different endpoint, e.g. a mock server.
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn fetch_current(&self, coordinate: Coordinate) -> Result<Snapshot, FetchError> {
        let url = format!("{}/data/2.5/weather", self.base_url);

        debug!(
            lat = coordinate.latitude,
            lon = coordinate.longitude,
            "requesting current weather"
        );

        let res = self
            .http
            .get(&url)
            .query(&[
                ("lat", coordinate.latitude.to_string()),
                ("lon", coordinate.longitude.to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Network(format!(
                "OpenWeather request failed with status {}: {}",
                status,
                truncate_body(&body),
            )));
        }

        let parsed: OwCurrentResponse = serde_json::from_str(&body)
            .map_err(|err| FetchError::Network(format!("response body was not valid JSON: {err}")))?;

        // `main.temp` is the one field the display cannot do without.
        let kelvin = parsed
            .main
            .as_ref()
            .and_then(|main| main.temp)
            .ok_or(FetchError::DataUnavailable)?;

        let city = parsed.name.unwrap_or_default();
        let condition_code = parsed.weather.first().and_then(|w| w.id).unwrap_or(0);
        let observed_at = parsed.dt.and_then(unix_to_utc).unwrap_or_else(Utc::now);

        // Kelvin to Celsius, truncated toward zero.
        let temperature_c = (kelvin - 273.15) as i32;

        Ok(Snapshot::new(city, temperature_c, condition_code, observed_at))
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    id: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: Option<String>,
    dt: Option<i64>,
    main: Option<OwMain>,
    #[serde(default)]
    weather: Vec<OwWeather>,
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, coordinate: Coordinate) -> Result<Snapshot, FetchError> {
        self.fetch_current(coordinate).await
    }
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        // Back off to a char boundary so multibyte bodies cannot panic.
        let mut cut = MAX;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::WeatherIcon;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn coordinate() -> Coordinate {
        Coordinate {
            latitude: 51.5,
            longitude: -0.12,
        }
    }

    fn mock_provider(server: &MockServer) -> OpenWeatherProvider {
        OpenWeatherProvider::with_base_url("KEY".to_string(), server.uri())
    }

    #[tokio::test]
    async fn parses_current_weather_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("appid", "KEY"))
            .and(query_param("lat", "51.5"))
            .and(query_param("lon", "-0.12"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "main": { "temp": 300.0 },
                "name": "London",
                "weather": [{ "id": 800 }],
                "dt": 1_700_000_000i64,
            })))
            .mount(&server)
            .await;

        let provider = mock_provider(&server);
        let snapshot = provider
            .current_weather(coordinate())
            .await
            .expect("fetch should succeed");

        assert_eq!(snapshot.city, "London");
        // 300.0 K = 26.85 C, truncated toward zero.
        assert_eq!(snapshot.temperature_c, 26);
        assert_eq!(snapshot.condition_code, 800);
        assert_eq!(snapshot.icon(), WeatherIcon::Clear);
        assert_eq!(snapshot.observed_at.timestamp(), 1_700_000_000);
    }

    #[tokio::test]
    async fn negative_temperatures_truncate_toward_zero() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "main": { "temp": 263.0 },
                "name": "Oslo",
                "weather": [{ "id": 600 }],
            })))
            .mount(&server)
            .await;

        let provider = mock_provider(&server);
        let snapshot = provider
            .current_weather(coordinate())
            .await
            .expect("fetch should succeed");

        // 263.0 K = -10.15 C; toward zero gives -10, not -11.
        assert_eq!(snapshot.temperature_c, -10);
        assert_eq!(snapshot.icon(), WeatherIcon::Snow);
    }

    #[tokio::test]
    async fn missing_temp_field_is_data_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "London",
                "weather": [{ "id": 800 }],
            })))
            .mount(&server)
            .await;

        let provider = mock_provider(&server);
        let err = provider.current_weather(coordinate()).await.unwrap_err();

        assert!(matches!(err, FetchError::DataUnavailable));
    }

    #[tokio::test]
    async fn non_json_body_is_a_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let provider = mock_provider(&server);
        let err = provider.current_weather(coordinate()).await.unwrap_err();

        assert!(matches!(err, FetchError::Network(_)));
    }

    #[tokio::test]
    async fn error_status_is_a_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(
                ResponseTemplate::new(500).set_body_string("internal server error"),
            )
            .mount(&server)
            .await;

        let provider = mock_provider(&server);
        let err = provider.current_weather(coordinate()).await.unwrap_err();

        match err {
            FetchError::Network(msg) => assert!(msg.contains("500")),
            other => panic!("expected Network error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn multibyte_error_body_is_truncated_without_panicking() {
        let server = MockServer::start().await;
        // 100 euro signs are 300 bytes; byte 200 falls inside a char.
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(500).set_body_string("€".repeat(100)))
            .mount(&server)
            .await;

        let provider = mock_provider(&server);
        let err = provider.current_weather(coordinate()).await.unwrap_err();

        match err {
            FetchError::Network(msg) => {
                assert!(msg.contains("500"));
                assert!(msg.ends_with("..."));
            }
            other => panic!("expected Network error, got {other:?}"),
        }
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let body = "€".repeat(100);
        let truncated = truncate_body(&body);
        // 198 bytes of euro signs (66 chars) plus the ellipsis.
        assert_eq!(truncated, format!("{}...", "€".repeat(66)));

        assert_eq!(truncate_body("short"), "short");
    }

    #[tokio::test]
    async fn absent_name_and_weather_fall_back_to_defaults() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "main": { "temp": 280.0 },
            })))
            .mount(&server)
            .await;

        let provider = mock_provider(&server);
        let snapshot = provider
            .current_weather(coordinate())
            .await
            .expect("fetch should succeed");

        assert_eq!(snapshot.city, "");
        assert_eq!(snapshot.condition_code, 0);
        assert_eq!(snapshot.icon(), WeatherIcon::Unknown);
    }
}
