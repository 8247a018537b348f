use thiserror::Error;

/// A submission that did not produce a usable HTTP response.
///
/// Both variants surface to the user as the same notice; the split only
/// matters for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictionError {
    /// The POST never completed (connection refused, DNS, offline).
    #[error("transport failure posting to {endpoint}: {message}")]
    Transport { endpoint: String, message: String },

    /// The service answered with a non-2xx status.
    #[error("prediction service at {endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: u16 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown feature field: {0}")]
    UnknownField(String),

    #[error("a prediction request is already in flight")]
    InFlight,
}
