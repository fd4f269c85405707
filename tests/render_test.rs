//! Display-mapping and view-lifecycle properties.

use async_trait::async_trait;

use attrisk::{
    AttriskError, FormState, GENERIC_FAILURE_MESSAGE, Outcome, PredictionGateway,
    PredictionResult, Result, RiskLevel, ViewState, render, run_submission,
};

fn prediction(probability: f64, risk: RiskLevel, prediction: &str) -> PredictionResult {
    PredictionResult {
        attrition_probability: probability,
        attrition_risk: risk,
        prediction: prediction.to_string(),
    }
}

// ============================================================================
// render()
// ============================================================================

#[test]
fn high_risk_leaver_renders_with_negative_styles() {
    let view = render(&prediction(73.456, RiskLevel::High, "Will Leave"));

    assert_eq!(view.probability_label, "73.5%");
    assert!((view.fill_percent - 73.5).abs() < 1e-9);
    assert_eq!(view.severity_class, "risk-high");
    assert_eq!(view.outcome, Outcome::Leave);
    assert_eq!(view.outcome_class, "prediction-leave");
    assert_eq!(view.prediction_text, "Will Leave");
}

#[test]
fn low_risk_stayer_renders_with_positive_styles() {
    let view = render(&prediction(12.0, RiskLevel::Low, "Will Stay"));

    assert_eq!(view.probability_label, "12.0%");
    assert!((view.fill_percent - 12.0).abs() < 1e-9);
    assert_eq!(view.severity_class, "risk-low");
    assert_eq!(view.outcome, Outcome::Stay);
    assert_eq!(view.outcome_class, "prediction-stay");
}

#[test]
fn medium_risk_has_its_own_style() {
    let view = render(&prediction(45.0, RiskLevel::Medium, "Will Stay"));
    assert_eq!(view.severity_class, "risk-medium");
}

#[test]
fn outcome_comparison_is_exact() {
    // Anything other than the exact positive string is the negative outcome
    assert_eq!(
        render(&prediction(10.0, RiskLevel::Low, "will stay")).outcome,
        Outcome::Leave
    );
    assert_eq!(
        render(&prediction(10.0, RiskLevel::Low, "Will Stay ")).outcome,
        Outcome::Leave
    );
    assert_eq!(
        render(&prediction(10.0, RiskLevel::Low, "Will Stay")).outcome,
        Outcome::Stay
    );
}

#[test]
fn fill_width_is_clamped() {
    assert_eq!(render(&prediction(104.2, RiskLevel::High, "x")).fill_percent, 100.0);
    assert_eq!(render(&prediction(-3.0, RiskLevel::Low, "x")).fill_percent, 0.0);
}

#[test]
fn label_rounds_half_up_at_one_decimal() {
    assert_eq!(
        render(&prediction(0.05, RiskLevel::Low, "x")).probability_label,
        "0.1%"
    );
    assert_eq!(
        render(&prediction(99.99, RiskLevel::High, "x")).probability_label,
        "100.0%"
    );
}

// ============================================================================
// ViewState lifecycle
// ============================================================================

struct StubGateway {
    response: std::result::Result<PredictionResult, fn() -> AttriskError>,
}

#[async_trait]
impl PredictionGateway for StubGateway {
    async fn submit(&self, _form: &FormState) -> Result<PredictionResult> {
        match &self.response {
            Ok(result) => Ok(result.clone()),
            Err(make_err) => Err(make_err()),
        }
    }
}

#[tokio::test]
async fn successful_submission_shows_results_only() {
    let gateway = StubGateway {
        response: Ok(prediction(30.0, RiskLevel::Medium, "Will Stay")),
    };

    let state = run_submission(&gateway, &FormState::new()).await;

    assert!(state.results_visible());
    assert!(!state.error_visible());
    assert!(!state.loading_visible());
}

#[tokio::test]
async fn failed_submission_collapses_to_generic_message() {
    for make_err in [
        (|| AttriskError::Network("connection refused".into())) as fn() -> AttriskError,
        || AttriskError::Api {
            status: 503,
            message: "unavailable".into(),
        },
        || AttriskError::Decode("missing field".into()),
    ] {
        let gateway = StubGateway {
            response: Err(make_err),
        };
        let state = run_submission(&gateway, &FormState::new()).await;

        match &state {
            ViewState::Failed { message } => assert_eq!(message, GENERIC_FAILURE_MESSAGE),
            other => panic!("expected Failed, got {other:?}"),
        }
        assert!(state.error_visible());
        assert!(!state.results_visible());
        assert!(!state.loading_visible());
    }
}

#[test]
fn only_loading_shows_the_spinner() {
    assert!(ViewState::Loading.loading_visible());
    assert!(!ViewState::Idle.loading_visible());
    assert!(!ViewState::Idle.results_visible());
    assert!(!ViewState::Idle.error_visible());
}
