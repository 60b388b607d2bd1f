use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientInitError {
    #[error("invalid server url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("server url '{0}' cannot carry a path")]
    NotABase(String),
}

/// Roster retrieval failed. The page shows a single inline error for every variant.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to reach activities endpoint: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("activities endpoint returned {0}")]
    Status(StatusCode),
    #[error("malformed activities payload: {0}")]
    Decode(#[source] serde_json::Error),
}

/// A signup or unregister request did not succeed.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("request failed before a response arrived: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("server rejected request with {status}")]
    Rejected {
        status: StatusCode,
        detail: Option<String>,
    },
    #[error("unreadable {status} response: {source}")]
    MalformedResponse {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },
}

impl SubmitError {
    /// Server-supplied detail, if the rejection carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            SubmitError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SubmitError::Transport(err) => err.status(),
            SubmitError::Rejected { status, .. } | SubmitError::MalformedResponse { status, .. } => {
                Some(*status)
            }
        }
    }
}
