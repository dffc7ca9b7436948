use strum_macros::Display;

/// Everything a single dispatch can fail with.
///
/// The taxonomy is flat and final: nothing in this crate retries or
/// recovers, every failure travels to the caller through the one `Result` a
/// call produces. Underlying causes are kept in the variant payloads and
/// reachable through [`std::error::Error::source`].
#[derive(Debug, Display)]
pub enum FetchError {
    /// The base URL (or the method token) could not be turned into a request.
    InvalidUrl(String),
    /// The transport reported success but the response carried no body.
    NoData,
    /// The body was not valid JSON or did not match the expected shape.
    Decoding(serde_json::Error),
    /// Status 1xx.
    Informational(u16),
    /// Status 3xx.
    Redirection(u16),
    /// Status 4xx.
    Client(u16),
    /// Status 5xx, or anything the other ranges do not claim.
    Server(u16),
    /// Network-level failure, including per-request timeout expiry.
    Transport(reqwest::Error),
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Decoding(e) => Some(e),
            FetchError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(value: reqwest::Error) -> Self { FetchError::Transport(value) }
}

impl From<serde_json::Error> for FetchError {
    fn from(value: serde_json::Error) -> Self { FetchError::Decoding(value) }
}
