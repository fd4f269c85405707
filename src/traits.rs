//! Core PredictionGateway trait

use async_trait::async_trait;

use crate::{AttriskError, FeatureInfo, FormState, HealthStatus, PredictionResult, Result};

/// The seam between transport and presentation.
///
/// The render layer and the CLI talk to this trait, never to a concrete
/// HTTP client, so tests can drive them with stubs.
#[async_trait]
pub trait PredictionGateway: Send + Sync {
    /// Submit one form snapshot and return the decoded prediction.
    ///
    /// One POST, no retries, no caching; the result comes back unmodified.
    async fn submit(&self, form: &FormState) -> Result<PredictionResult>;

    /// Field metadata for building and validating forms.
    async fn feature_info(&self) -> Result<FeatureInfo> {
        Err(AttriskError::NotImplemented("feature_info"))
    }

    /// Service health probe.
    async fn health(&self) -> Result<HealthStatus> {
        Err(AttriskError::NotImplemented("health"))
    }
}
