use thiserror::Error;

/// Errors raised while talking to the listings store or the model
#[derive(Debug, Error)]
pub enum AireError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("listings store returned {status}: {body}")]
    Store {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("completion endpoint returned {status}: {body}")]
    Completion {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("completion endpoint returned no candidates")]
    EmptyCompletion,

    #[error("No listings available from database.")]
    NoListings,

    #[error("failed to encode listings: {0}")]
    Encode(serde_json::Error),

    /// Model output that could not be decoded; displays the parser error only
    #[error("{0}")]
    MalformedReply(serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AireError>;
