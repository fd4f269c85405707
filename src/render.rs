//! Presentation mapping from prediction results to view state.
//!
//! `render` is a pure function of the decoded result; the surrounding
//! `ViewState` lifecycle is the whole of the UI's state machine:
//! idle → loading → success | failed, each terminal until the next
//! submission. Failures collapse to one generic user-facing message with
//! the cause logged for diagnostics only.

use crate::error::GENERIC_FAILURE_MESSAGE;
use crate::{FormState, Outcome, PredictionGateway, PredictionResult, RiskLevel};

/// Style class for each risk severity, mirroring the web UI stylesheet.
pub fn severity_class(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Low => "risk-low",
        RiskLevel::Medium => "risk-medium",
        RiskLevel::High => "risk-high",
    }
}

/// Style class for each outcome.
pub fn outcome_class(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Stay => "prediction-stay",
        Outcome::Leave => "prediction-leave",
    }
}

/// Everything the result panel needs, precomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    /// Probability rendered to one decimal place, e.g. "73.5%".
    pub probability_label: String,
    /// Width of the probability fill, same one-decimal rounding, clamped
    /// to [0, 100].
    pub fill_percent: f64,
    pub risk: RiskLevel,
    pub severity_class: &'static str,
    /// The prediction string verbatim.
    pub prediction_text: String,
    pub outcome: Outcome,
    pub outcome_class: &'static str,
}

/// Map a decoded prediction onto its display form.
pub fn render(result: &PredictionResult) -> ResultView {
    let fill_percent = ((result.attrition_probability * 10.0).round() / 10.0).clamp(0.0, 100.0);
    let outcome = result.outcome();

    ResultView {
        probability_label: format!("{fill_percent:.1}%"),
        fill_percent,
        risk: result.attrition_risk,
        severity_class: severity_class(result.attrition_risk),
        prediction_text: result.prediction.clone(),
        outcome,
        outcome_class: outcome_class(outcome),
    }
}

/// The submission lifecycle as seen by the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Idle,
    Loading,
    Success(ResultView),
    Failed { message: String },
}

impl ViewState {
    /// Whether the results region should be shown.
    pub fn results_visible(&self) -> bool {
        matches!(self, ViewState::Success(_))
    }

    /// Whether the error region should be shown.
    pub fn error_visible(&self) -> bool {
        matches!(self, ViewState::Failed { .. })
    }

    /// Whether the loading indicator should be shown.
    pub fn loading_visible(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}

/// Drive one full submission cycle against a gateway.
///
/// The caller renders [`ViewState::Loading`] while this is in flight; the
/// returned state is terminal until the next submission. Overlapping calls
/// are independent — there is no cancellation or request identity, so the
/// last one to resolve is the last one rendered.
pub async fn run_submission(gateway: &dyn PredictionGateway, form: &FormState) -> ViewState {
    match gateway.submit(form).await {
        Ok(result) => ViewState::Success(render(&result)),
        Err(err) => {
            tracing::error!(error = %err, "prediction request failed");
            ViewState::Failed {
                message: GENERIC_FAILURE_MESSAGE.to_string(),
            }
        }
    }
}
