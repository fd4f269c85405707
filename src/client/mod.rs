//! HTTP client for the attrition prediction service.
//!
//! One request per operation: a form snapshot is POSTed as JSON and the
//! decoded result comes back unmodified. No retries, no caching, and no
//! request-identity bookkeeping — when callers overlap submissions, the
//! last response to arrive is simply the last one rendered.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::telemetry;
use crate::{
    AttriskError, FeatureInfo, FormState, HealthStatus, PredictionGateway, PredictionResult,
    Result,
};

/// Default base URL for a locally-run prediction service.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Client for the prediction service.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct PredictClient {
    http: Client,
    base_url: String,
}

impl PredictClient {
    /// Create a client against the default local service address.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client with a custom base URL (also used for testing with
    /// wiremock).
    ///
    /// No request timeout is set; the transport's default applies.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::build(base_url, None)
    }

    /// Create a client with an explicit request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self::build(base_url, Some(timeout))
    }

    fn build(base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().expect("failed to build HTTP client");

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self { http, base_url }
    }

    /// The base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post_predict(&self, form: &FormState) -> Result<PredictionResult> {
        let url = format!("{}/api/predict", self.base_url);
        tracing::debug!(%url, fields = form.len(), "submitting prediction request");

        let response = self
            .http
            .post(&url)
            .json(form)
            .send()
            .await
            .map_err(|e| AttriskError::Network(e.to_string()))?;

        Self::decode(response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "fetching");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AttriskError::Network(e.to_string()))?;

        Self::decode(response).await
    }

    /// Map the response uniformly: any non-2xx status is a failure (the
    /// code is kept for the log, nothing branches on it), and a body that
    /// does not match the expected shape is a decode failure.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AttriskError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| AttriskError::Network(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| AttriskError::Decode(e.to_string()))
    }

    fn observe(operation: &'static str, start: Instant, ok: bool) {
        let status = if ok { "ok" } else { "error" };
        metrics::counter!(
            telemetry::REQUESTS_TOTAL,
            "operation" => operation,
            "status" => status,
        )
        .increment(1);
        metrics::histogram!(
            telemetry::REQUEST_DURATION_SECONDS,
            "operation" => operation,
        )
        .record(start.elapsed().as_secs_f64());
    }
}

impl Default for PredictClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PredictionGateway for PredictClient {
    async fn submit(&self, form: &FormState) -> Result<PredictionResult> {
        let start = Instant::now();
        let result = self.post_predict(form).await;
        Self::observe("predict", start, result.is_ok());
        result
    }

    async fn feature_info(&self) -> Result<FeatureInfo> {
        let start = Instant::now();
        let result = self.get_json("/api/feature-info").await;
        Self::observe("feature_info", start, result.is_ok());
        result
    }

    async fn health(&self) -> Result<HealthStatus> {
        let start = Instant::now();
        let result = self.get_json("/health").await;
        Self::observe("health", start, result.is_ok());
        result
    }
}
