//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Favorites store error: {0}")]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// API-client errors, one variant per way a single fetch attempt can fail.
///
/// The client performs exactly one attempt per call — the caller decides
/// whether to retry.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[cfg(feature = "http")]
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// Body decoded fine but the API itself reported a non-success status.
    #[error("API reported status {0:?}")]
    ErrorStatus(Option<String>),
}

/// Wire-to-domain decode errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A coin record without a uuid has no identity and cannot be kept.
    #[error("coin record is missing its uuid")]
    MissingId,
}

/// Favorites persistence errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("backend read failed: {0}")]
    Load(String),

    #[error("backend write failed: {0}")]
    Save(String),
}

/// Environment configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config could not be parsed: {0}")]
    Parse(String),

    #[error("config could not be read: {0}")]
    Io(#[from] std::io::Error),

    #[error("no environment is flagged active")]
    NoActiveEnvironment,

    #[error("{0} environments are flagged active, expected exactly one")]
    MultipleActiveEnvironments(usize),
}

/// State-manager level fetch failure.
///
/// Wraps any client error; surfaced to the presentation layer as a
/// human-readable message. Never fatal — the list stays retryable.
#[derive(Error, Debug)]
#[error("fetch failed: {source}")]
pub struct FetchError {
    #[from]
    pub source: ApiError,
}
