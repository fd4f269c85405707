//! Response-side wire types for the prediction service.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::form::{FieldValue, FormState};
use crate::{AttriskError, Result};

/// The exact prediction string the service uses for the positive outcome.
/// Anything else is treated as the negative outcome.
pub const WILL_STAY: &str = "Will Stay";

/// Risk classification returned by the predictor.
///
/// Closed enumeration: a label outside these three fails decoding, which
/// surfaces as a decode error at the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Binary outcome derived from the prediction string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Stay,
    Leave,
}

/// One prediction, exactly as decoded from the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Attrition probability as a percentage in [0, 100].
    pub attrition_probability: f64,
    pub attrition_risk: RiskLevel,
    /// Free-form prediction string; compared against [`WILL_STAY`] by
    /// exact equality, everything else reads as the negative outcome.
    pub prediction: String,
}

impl PredictionResult {
    pub fn outcome(&self) -> Outcome {
        if self.prediction == WILL_STAY {
            Outcome::Stay
        } else {
            Outcome::Leave
        }
    }
}

/// Allowed range for a numeric form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRange {
    pub min: i64,
    pub max: i64,
    pub default: i64,
}

/// Field metadata served by `GET /api/feature-info`: the options of each
/// categorical selector and the range of each numeric slider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeatureInfo {
    #[serde(default)]
    pub business_travel: Vec<String>,
    #[serde(default)]
    pub department: Vec<String>,
    #[serde(default)]
    pub education_field: Vec<String>,
    #[serde(default)]
    pub gender: Vec<String>,
    #[serde(default)]
    pub job_role: Vec<String>,
    #[serde(default)]
    pub marital_status: Vec<String>,
    #[serde(default)]
    pub over_time: Vec<String>,
    #[serde(rename = "ranges", default)]
    pub ranges: BTreeMap<String, FieldRange>,
}

impl FeatureInfo {
    fn options_for(&self, field: &str) -> Option<&[String]> {
        match field {
            "BusinessTravel" => Some(&self.business_travel),
            "Department" => Some(&self.department),
            "EducationField" => Some(&self.education_field),
            "Gender" => Some(&self.gender),
            "JobRole" => Some(&self.job_role),
            "MaritalStatus" => Some(&self.marital_status),
            "OverTime" => Some(&self.over_time),
            _ => None,
        }
    }

    /// Check a form snapshot against these ranges and option lists.
    ///
    /// Advisory only — submission itself never validates. Fields the info
    /// does not describe are ignored, as are the derived bucket fields.
    pub fn check(&self, form: &FormState) -> Result<()> {
        for (name, value) in form.iter() {
            match value {
                FieldValue::Int(v) => {
                    if let Some(range) = self.ranges.get(name) {
                        if *v < range.min || *v > range.max {
                            return Err(AttriskError::InvalidInput(format!(
                                "{name} = {v} outside [{}, {}]",
                                range.min, range.max
                            )));
                        }
                    }
                }
                FieldValue::Text(s) => {
                    if let Some(options) = self.options_for(name) {
                        if !options.is_empty() && !options.iter().any(|o| o == s) {
                            return Err(AttriskError::InvalidInput(format!(
                                "{name} = {s:?} is not one of the allowed options"
                            )));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

/// Service health as reported by `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub model_loaded: bool,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
