use thiserror::Error;

/// Failures the API client can report.
///
/// Every variant ends up in the diagnostic log and a flag reset; none of
/// them reaches the user interface.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("serialize error: {0}")]
    Serialize(String),

    #[error("decode error: {0}")]
    Decode(String),
}
