use serde::{Deserialize, Serialize};

pub const DEFAULT_REGRESSION_ENDPOINT: &str = "http://localhost:5000/predict";
pub const DEFAULT_CLASSIFICATION_ENDPOINT: &str = "http://localhost:5001/predict";

/// Where the two prediction services live.
///
/// Nothing is read from the environment or persisted; a page may embed a
/// partial JSON override and every missing key keeps its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_regression_endpoint")]
    pub regression_endpoint: String,
    #[serde(default = "default_classification_endpoint")]
    pub classification_endpoint: String,
}

fn default_regression_endpoint() -> String {
    DEFAULT_REGRESSION_ENDPOINT.to_string()
}

fn default_classification_endpoint() -> String {
    DEFAULT_CLASSIFICATION_ENDPOINT.to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            regression_endpoint: default_regression_endpoint(),
            classification_endpoint: default_classification_endpoint(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
