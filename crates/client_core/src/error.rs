use thiserror::Error;

/// The one failure kind the API client produces. Transport errors and non-2xx
/// statuses both collapse into it; callers pick the user-facing wording.
#[derive(Debug, Clone, Error)]
#[error("request failed: {reason}")]
pub struct RequestError {
    reason: String,
    status: Option<reqwest::StatusCode>,
}

impl RequestError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            status: None,
        }
    }

    /// HTTP status of the rejected response, if the request got that far.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        self.status
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            status: err.status(),
            reason: err.to_string(),
        }
    }
}
