use thiserror::Error;

/// Failure of a forecast fetch. Surfaced to the user through the
/// session's error field; the previous payload is left in place.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The API answered with a non-success status.
    #[error("failed to fetch weather data: {0}")]
    Status(String),

    /// The request never completed (DNS, TLS, connection, body read).
    #[error("weather request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered 2xx but the body did not match the expected shape.
    #[error("failed to parse weather data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure of a location search. Never surfaced to the user; the session
/// logs it and clears the candidate list.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("location search failed: {0}")]
    Status(String),

    #[error("location search request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to parse search results: {0}")]
    Parse(#[from] serde_json::Error),
}
