//! The parameterized prediction form: input state, submission state machine
//! and result slot.
//!
//! ```text
//!  idle ──submit──▶ in-flight ──2xx──▶ succeeded ──▶ idle
//!                       │
//!                       └──error/!2xx──▶ failed ──▶ idle
//! ```
//!
//! Succeeded and failed are settled states: they accept the next submission
//! exactly like idle does. Only in-flight blocks it.

use serde_json::Value;

use crate::client::PredictionClient;
use crate::config::DashboardConfig;
use crate::dashboard::FormKind;
use crate::error::{FormError, PredictionError};
use crate::features::FeatureSet;
use crate::input::InputState;
use crate::payload::Payload;
use crate::response::{ResponseExtractor, ResultFormatter};

/// Label shown on the submit control while a request is in flight.
pub const IN_FLIGHT_LABEL: &str = "Predicting...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

impl SubmissionState {
    pub fn is_in_flight(self) -> bool {
        self == SubmissionState::InFlight
    }
}

/// Everything that distinguishes one form instance from another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSpec {
    pub kind: FormKind,
    pub features: FeatureSet,
    pub endpoint: String,
    pub extractor: ResponseExtractor,
    pub formatter: ResultFormatter,
}

impl FormSpec {
    pub fn new(kind: FormKind, config: &DashboardConfig) -> Self {
        let endpoint = match kind {
            FormKind::Regression => config.regression_endpoint.clone(),
            FormKind::Classification => config.classification_endpoint.clone(),
        };
        Self {
            kind,
            features: kind.features(),
            endpoint,
            extractor: kind.extractor(),
            formatter: kind.formatter(),
        }
    }
}

/// What a POST is about to send.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitRequest {
    pub endpoint: String,
    pub payload: Payload,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The result slot now holds this display text.
    Updated(String),
    /// 2xx, but none of the extractor's fields were present. Not an error for
    /// the user; the slot keeps its previous value.
    NoPrediction,
    /// Transport or service failure; the slot keeps its previous value.
    Failed(PredictionError),
}

#[derive(Debug, Clone)]
pub struct PredictionForm {
    spec: FormSpec,
    inputs: InputState,
    state: SubmissionState,
    result: Option<String>,
}

impl PredictionForm {
    pub fn new(spec: FormSpec) -> Self {
        let inputs = InputState::new(spec.features);
        Self {
            spec,
            inputs,
            state: SubmissionState::Idle,
            result: None,
        }
    }

    pub fn spec(&self) -> &FormSpec {
        &self.spec
    }

    pub fn kind(&self) -> FormKind {
        self.spec.kind
    }

    pub fn inputs(&self) -> &InputState {
        &self.inputs
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Edits are allowed at any time, including while a request is in flight;
    /// the in-flight payload was already captured.
    pub fn edit(&mut self, id: &str, text: impl Into<String>) -> Result<(), FormError> {
        self.inputs.set(id, text)
    }

    pub fn submit_disabled(&self) -> bool {
        self.state.is_in_flight()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.state.is_in_flight() {
            IN_FLIGHT_LABEL
        } else {
            self.spec.kind.submit_label()
        }
    }

    /// Moves to in-flight and captures the payload to send.
    pub fn begin_submit(&mut self) -> Result<SubmitRequest, FormError> {
        if self.state.is_in_flight() {
            return Err(FormError::InFlight);
        }
        self.state = SubmissionState::InFlight;
        Ok(SubmitRequest {
            endpoint: self.spec.endpoint.clone(),
            payload: Payload::from_inputs(&self.inputs),
        })
    }

    /// Applies the response of the request started by `begin_submit`.
    pub fn finish(&mut self, response: Result<Value, PredictionError>) -> SubmitOutcome {
        let form = self.spec.kind.label();
        match response {
            Ok(body) => {
                self.state = SubmissionState::Succeeded;
                match self.spec.extractor.extract(&body) {
                    Some(value) => {
                        let text = self.spec.formatter.format(value);
                        tracing::info!(form, result = %text, "prediction received");
                        self.result = Some(text.clone());
                        SubmitOutcome::Updated(text)
                    }
                    None => {
                        tracing::warn!(
                            form,
                            expected = ?self.spec.extractor.fields(),
                            "prediction response has no recognized field"
                        );
                        SubmitOutcome::NoPrediction
                    }
                }
            }
            Err(err) => {
                self.state = SubmissionState::Failed;
                tracing::error!(form, error = %err, "Prediction error");
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Notice to surface to the user for an outcome, if any.
    pub fn notice_for(&self, outcome: &SubmitOutcome) -> Option<&'static str> {
        match outcome {
            SubmitOutcome::Failed(_) => Some(self.spec.kind.failure_notice()),
            _ => None,
        }
    }

    /// Full submission against `client`. The browser app drives
    /// `begin_submit`/`finish` itself so the form is not borrowed across the
    /// await.
    pub async fn submit(&mut self, client: &PredictionClient) -> Result<SubmitOutcome, FormError> {
        let request = self.begin_submit()?;
        let response = client.predict(&request.endpoint, &request.payload).await;
        Ok(self.finish(response))
    }
}
