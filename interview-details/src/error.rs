//! Error types
//!
//! Every failure a request can hit is one variant of [`LookupError`]. Each
//! variant renders to exactly one status code and one `{"error": ...}` body,
//! see [`crate::response`].

use http::StatusCode;
use thiserror::Error;

/// Failures while resolving configuration at start-up.
///
/// Messages name the missing setting, never its value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Supabase credentials are not set in environment variables.")]
    MissingCredentials,
    #[error("Invalid value for INTERVIEW_STORE_TIMEOUT_SECS: {0}")]
    InvalidTimeout(String),
    #[error("Supabase client could not be initialised: {0}")]
    Client(String),
}

/// Failures reported by an [`InterviewStore`](crate::store::InterviewStore).
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store answered, but with a non-success status.
    #[error("store rejected the query with status {status}: {message}")]
    Rejected { status: u16, message: String },
    /// The request never produced a response.
    #[error("store request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The store answered with a body that is not an interview row.
    #[error("store returned an unexpected row shape: {0}")]
    Decode(String),
}

/// The reasons a single lookup can fail.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("{0}")]
    MalformedRequest(&'static str),
    #[error("Interview ID is missing from the request body.")]
    MissingIdentifier,
    #[error("{0}")]
    MisconfiguredService(#[from] ConfigError),
    #[error("Interview not found.")]
    NotFound,
    #[error("{0}")]
    UnexpectedFault(String),
}

impl LookupError {
    pub(crate) const BODY_MISSING: &'static str = "Request body is missing.";
    pub(crate) const BODY_NOT_JSON: &'static str = "Request body is not valid JSON.";

    /// Status code sent back for this failure
    pub fn status(&self) -> StatusCode {
        match self {
            LookupError::MalformedRequest(_) | LookupError::MissingIdentifier | LookupError::NotFound => {
                StatusCode::BAD_REQUEST
            }
            LookupError::MisconfiguredService(_) | LookupError::UnexpectedFault(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<StoreError> for LookupError {
    fn from(err: StoreError) -> Self {
        match err {
            // store detail, including its URL, stays in the log
            StoreError::Rejected { .. } | StoreError::Transport(_) => LookupError::NotFound,
            err @ StoreError::Decode(_) => LookupError::UnexpectedFault(err.to_string()),
        }
    }
}
