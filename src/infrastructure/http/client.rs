use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::config::Config;
use crate::domain::ports::HolidayApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{Holiday, Lob, Loc, NewHoliday};

/// Reqwest-backed client for the holiday backend API
pub struct HttpHolidayApi {
    base_url: String,
    http_client: Client,
}

impl HttpHolidayApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(30))
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_timeout(
            config.api_base_url.clone(),
            Duration::from_secs(config.http_timeout_secs),
        )
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode a success body, or map a non-2xx response to an `ApiError`
    /// carrying the body's `message` field when one is present.
    async fn decode<T: DeserializeOwned>(response: Response, fallback: &str) -> ApiResult<T> {
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return Ok(serde_json::from_str(&body)?);
        }

        Err(ApiError::Api {
            status: status.as_u16(),
            message: extract_message(&body, fallback),
        })
    }
}

/// Best-effort extraction of the `message` field from an error body.
fn extract_message(body: &str, fallback: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .unwrap_or_else(|| fallback.to_string())
}

#[async_trait]
impl HolidayApi for HttpHolidayApi {
    async fn list_lobs(&self) -> ApiResult<Vec<Lob>> {
        debug!("Fetching lines of business");
        let response = self.http_client.get(self.url("/api/lobs")).send().await?;
        Self::decode(response, "Failed to load lines of business").await
    }

    async fn list_locs(&self) -> ApiResult<Vec<Loc>> {
        debug!("Fetching locations");
        let response = self.http_client.get(self.url("/api/locs")).send().await?;
        Self::decode(response, "Failed to load locations").await
    }

    async fn list_holidays(&self) -> ApiResult<Vec<Holiday>> {
        debug!("Fetching holiday list");
        let response = self
            .http_client
            .get(self.url("/api/holidays"))
            .send()
            .await?;
        Self::decode(response, "Failed to load holidays").await
    }

    async fn create_holiday(&self, holiday: &NewHoliday) -> ApiResult<Holiday> {
        info!("Creating holiday {} on {}", holiday.name, holiday.date);
        let response = self
            .http_client
            .post(self.url("/api/holidays"))
            .json(holiday)
            .send()
            .await?;
        Self::decode(response, "Failed to create holiday").await
    }
}
