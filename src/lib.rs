//! Attrisk - typed client for the HR attrition prediction API
//!
//! This crate wraps the prediction service's HTTP interface in a typed
//! client: slider inputs bucket into the categorical labels the model
//! expects, one form snapshot is POSTed per submission, and the decoded
//! result maps onto display-ready view state.
//!
//! # Prediction Example
//!
//! ```rust,no_run
//! use attrisk::{EmployeeProfile, PredictClient, PredictionGateway, render};
//!
//! #[tokio::main]
//! async fn main() -> attrisk::Result<()> {
//!     let client = PredictClient::with_base_url("http://127.0.0.1:8000");
//!
//!     let profile = EmployeeProfile {
//!         age: 41,
//!         monthly_income: 12_000,
//!         over_time: "Yes".to_string(),
//!         ..EmployeeProfile::default()
//!     };
//!
//!     let result = client.submit(&profile.to_form()).await?;
//!     let view = render(&result);
//!
//!     println!("{} ({})", view.probability_label, view.risk);
//!     Ok(())
//! }
//! ```
//!
//! # Bucketing Example
//!
//! ```rust
//! use attrisk::{AgeGroup, SalarySlab};
//!
//! assert_eq!(AgeGroup::from_age(41).as_str(), "36-45");
//! assert_eq!(SalarySlab::from_monthly_income(12_000).as_str(), "10k-15k");
//! ```

pub mod buckets;
pub mod client;
pub mod config;
pub mod error;
pub mod render;
pub mod telemetry;
pub mod traits;
pub mod types;

mod version;

// Re-export main types at crate root
pub use buckets::{AgeGroup, SalarySlab};
pub use client::{DEFAULT_BASE_URL, PredictClient};
pub use config::{Config, ServiceConfig};
pub use error::{AttriskError, GENERIC_FAILURE_MESSAGE, Result};
pub use render::{ResultView, ViewState, render, run_submission};
pub use traits::PredictionGateway;
pub use version::{BuildInfo, PKG_VERSION, version_string};

// Re-export all wire types
pub use types::{
    EmployeeProfile, FeatureInfo, FieldRange, FieldValue, FormState, HealthStatus, Outcome,
    PredictionResult, RiskLevel, WILL_STAY,
};
