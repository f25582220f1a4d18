use thiserror::Error;

/// Failures that keep a lookup from producing a [`crate::api::LookupOutcome`].
#[derive(Error, Debug)]
pub enum LookupError {
    /// The request never completed or the body could not be read.
    #[error("request to movie database failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body was not a recognizable OMDb payload.
    #[error("malformed movie database response: {0}")]
    Decode(#[from] serde_json::Error),
}
