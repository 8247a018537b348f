use serde_json::Value;

use crate::error::PredictionError;
use crate::payload::Payload;

/// Thin JSON-over-HTTP client for the prediction services.
///
/// Natively this runs on tokio; on wasm32 reqwest drives the browser's
/// `fetch`, so the same code serves the dashboard and the host tests. No
/// timeout is set and requests are never cancelled.
#[derive(Debug, Clone, Default)]
pub struct PredictionClient {
    http: reqwest::Client,
}

impl PredictionClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// POSTs `payload` to `endpoint` and returns the decoded body.
    ///
    /// A 2xx body that is not JSON decodes to `Value::Null`, which the
    /// extractors treat as "no recognized field".
    pub async fn predict(&self, endpoint: &str, payload: &Payload) -> Result<Value, PredictionError> {
        let transport = |e: reqwest::Error| PredictionError::Transport {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        };

        tracing::debug!(endpoint, fields = payload.len(), nulls = payload.null_count(), "posting prediction request");

        let response = self
            .http
            .post(endpoint)
            .json(payload)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictionError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(transport)?;
        match serde_json::from_str(&body) {
            Ok(v) => Ok(v),
            Err(e) => {
                tracing::warn!(endpoint, error = %e, "prediction response is not JSON");
                Ok(Value::Null)
            }
        }
    }
}
