use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error as ThisError;

/// Error returned by user-supplied response transforms.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

///
/// ClientError
///
/// Everything a submission can fail with. Transport and decode failures are
/// passed through as-is; nothing is retried.
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum ClientError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("AQL: query parameter is invalid!")]
    InvalidQuery,

    #[error("AQL endpoint returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("response transform failed: {0}")]
    Transform(#[source] BoxError),
}

impl ClientError {
    /// HTTP status of a non-2xx response, if that is what failed.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

///
/// ConfigError
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum ConfigError {
    #[error("invalid header `{name}`")]
    InvalidHeader { name: String },

    #[error("invalid HTTP method `{method}`")]
    InvalidMethod { method: String },

    #[error("invalid AQL endpoint url `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("request timeout must be greater than zero")]
    ZeroTimeout,
}
