use thiserror::Error;

/// Errors from the backend API boundary.
///
/// `Api` carries the message extracted from the error body; its `Display`
/// output is surfaced verbatim in failure notifications.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;
