///! Error types for the fetch path

use thiserror::Error;

/// Failure of one fetch operation.
///
/// Only complete request failures are errors; an empty dataset, a missing
/// `Data` field, or partial entries inside a decoded batch are all
/// successful outcomes.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to reach ELD API: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("ELD API returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("failed to decode ELD response body: {0}")]
    Decode(#[from] serde_json::Error),
}
