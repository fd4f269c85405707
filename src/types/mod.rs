//! Wire and form types for the attrition prediction API.

mod form;
mod prediction;
mod profile;

pub use form::{FieldValue, FormState};
pub use prediction::{
    FeatureInfo, FieldRange, HealthStatus, Outcome, PredictionResult, RiskLevel, WILL_STAY,
};
pub use profile::EmployeeProfile;
