use thiserror::Error;

/// Failures crossing the advisory-service boundary.
///
/// Every operation is at-most-one-attempt: no retry, no timeout, no
/// idempotency key. Callers degrade to a static fallback message.
#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("service returned no usable candidates")]
    EmptyResponse,

    #[error("could not parse recommendation payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}
