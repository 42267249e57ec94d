///! ELD API client
///!
///! Fetches the driver telemetry dataset via
///! `GET {base_url}/api/v1/driver/eld/` with the tenant API key in the
///! `X-Api-Key` header. Offered in an async and a blocking variant with
///! identical semantics; both run the same decode path, so callers see
///! the same output shape either way.

use chrono::Utc;
use serde::Deserialize;
use std::time::Duration;

use crate::config::EldConfig;
use crate::error::FetchError;
use crate::types::{EldBatch, RawEntry};

const ELD_ENDPOINT: &str = "api/v1/driver/eld/";

/// Top-level response envelope. The feed wraps everything in a `Data`
/// array; anything else in the object is ignored.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "Data", default)]
    data: Vec<Option<RawEntry>>,
}

/// Decode a response body into raw entries.
///
/// An empty body, a JSON `null`, or an object without `Data` all decode
/// to an empty list – an empty upstream dataset is not an error.
fn decode_batch(body: &str) -> Result<Vec<Option<RawEntry>>, FetchError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let envelope: Option<Envelope> = serde_json::from_str(body)?;
    Ok(envelope.map(|e| e.data).unwrap_or_default())
}

fn endpoint_url(base_url: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), ELD_ENDPOINT)
}

/// Async ELD API client
pub struct EldClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl EldClient {
    pub fn new(config: &EldConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Fetch one full snapshot of the driver telemetry feed.
    ///
    /// No retry: a transport failure, non-2xx status, or undecodable body
    /// fails the operation with no partial data.
    pub async fn fetch_drivers(&self) -> Result<EldBatch, FetchError> {
        let url = endpoint_url(&self.base_url);
        tracing::debug!("Fetching ELD drivers from {}", url);

        let response = self
            .http
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        let entries = decode_batch(&body)?;
        tracing::debug!("Fetched {} raw ELD entries", entries.len());

        Ok(EldBatch {
            fetched_at: Utc::now(),
            entries,
        })
    }
}

/// Blocking ELD API client, for strictly single-threaded hosts.
pub struct BlockingEldClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

impl BlockingEldClient {
    pub fn new(config: &EldConfig) -> Result<Self, FetchError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Blocking counterpart of [`EldClient::fetch_drivers`].
    pub fn fetch_drivers(&self) -> Result<EldBatch, FetchError> {
        let url = endpoint_url(&self.base_url);
        tracing::debug!("Fetching ELD drivers from {}", url);

        let response = self
            .http
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .header("Content-Type", "application/json")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text()?;
        let entries = decode_batch(&body)?;
        tracing::debug!("Fetched {} raw ELD entries", entries.len());

        Ok(EldBatch {
            fetched_at: Utc::now(),
            entries,
        })
    }
}
