use std::time::Duration;
use thiserror::Error;

/// Failure taxonomy for a single upstream call. Every variant is caught
/// at the gateway boundary and converted into a fallback response; none
/// of them reach the HTTP client as a stack trace.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream unavailable: {0}")]
    Unavailable(String),

    #[error("upstream call timed out after {0:?}")]
    Timeout(Duration),

    #[error("upstream returned status {0}")]
    BadStatus(u16),

    #[error("malformed upstream payload: {0}")]
    MalformedPayload(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("missing configuration: {0} is not set")]
    ConfigMissing(&'static str),
}

impl UpstreamError {
    /// Classify a reqwest error into the taxonomy. `timeout` is the
    /// bound that was applied to the call.
    pub fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            UpstreamError::Timeout(timeout)
        } else if err.is_decode() {
            UpstreamError::MalformedPayload(err.to_string())
        } else if let Some(status) = err.status() {
            UpstreamError::BadStatus(status.as_u16())
        } else {
            UpstreamError::Unavailable(err.to_string())
        }
    }
}
