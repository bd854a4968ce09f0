//! OpenWeatherMap current-conditions client

use futures_util::future::join_all;
use reqwest::Client;
use serde::Deserialize;

use crate::config::WeatherConfig;
use crate::i18n;
use crate::state::WeatherReport;

// ============================================================================
// Response shape
// ============================================================================

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    name: String,
    sys: Sys,
    main: Main,
    weather: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
struct Sys {
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct Main {
    temp: f32,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
    icon: String,
}

/// Why a lookup failed. Callers of [`OpenWeatherClient::fetch_report`] only
/// see "not found"; the cause goes to the log.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("response has no weather condition")]
    MissingCondition,
}

fn report_from_response(data: CurrentResponse) -> Result<WeatherReport, FetchError> {
    let condition = data
        .weather
        .into_iter()
        .next()
        .ok_or(FetchError::MissingCondition)?;

    Ok(WeatherReport {
        city: data.name,
        country: data.sys.country,
        temperature_celsius: data.main.temp,
        description: i18n::translate_description(&condition.description),
        humidity_percent: data.main.humidity.min(100),
        icon_id: condition.icon,
    })
}

// ============================================================================
// Client
// ============================================================================

/// Cheap to clone; clones share the connection pool.
#[derive(Clone, Debug)]
pub struct OpenWeatherClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenWeatherClient {
    pub fn new(config: WeatherConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn current_url(&self, city: &str) -> String {
        format!(
            "{}/weather?q={}&units={}&appid={}",
            self.config.base_url,
            urlencoding::encode(city),
            self.config.units,
            urlencoding::encode(&self.config.api_key)
        )
    }

    /// Fetch and normalize one city, keeping the failure cause
    pub async fn try_fetch_report(&self, city: &str) -> Result<WeatherReport, FetchError> {
        let response = self.client.get(self.current_url(city)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await?;
        let data: CurrentResponse = serde_json::from_slice(&body)?;
        report_from_response(data)
    }

    /// Fetch and normalize one city. Any failure is logged and becomes `None`.
    pub async fn fetch_report(&self, city: &str) -> Option<WeatherReport> {
        match self.try_fetch_report(city).await {
            Ok(report) => {
                tracing::debug!(city, description = %report.description, "weather loaded");
                Some(report)
            }
            Err(error) => {
                tracing::warn!(city, %error, "error fetching weather data");
                None
            }
        }
    }

    /// Fetch every city concurrently and wait for all of them. Failed cities
    /// are dropped; the rest keep their position in `cities`.
    pub async fn fetch_many(&self, cities: &[String]) -> Vec<WeatherReport> {
        let results = join_all(cities.iter().map(|city| self.fetch_report(city))).await;
        let reports: Vec<_> = results.into_iter().flatten().collect();
        tracing::info!(
            requested = cities.len(),
            loaded = reports.len(),
            "default cities loaded"
        );
        reports
    }
}
