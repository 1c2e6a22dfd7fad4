//! Error types for the Encore client.

use encore_core::validation::ValidationError;
use encore_core::CoreError;
use thiserror::Error;

/// Errors that can occur when talking to the Encore backend or the
/// generative-text service.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Backend returned an error response
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Authentication required but no token available, or token rejected
    #[error("Authentication required")]
    AuthRequired,

    /// Invalid base URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse a response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Backend is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),

    /// Story generation requested without an API key
    #[error("No API key configured for story generation")]
    MissingApiKey,

    /// Input rejected before sending
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// File to upload does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// IO error while reading a file to upload
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Map a transport error, singling out connection failures
    pub(crate) fn from_send(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            ClientError::ServerUnreachable(e.to_string())
        } else {
            ClientError::Request(e)
        }
    }

    /// Whether the same request could succeed when sent again
    ///
    /// Transport failures and 5xx answers are transient. Rejections such as
    /// 404 or a missing token are not.
    pub fn is_transient(&self) -> bool {
        match self {
            ClientError::ServerUnreachable(_) | ClientError::Request(_) => true,
            ClientError::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

impl From<ClientError> for CoreError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::Api { status: 404, message } => CoreError::NotFound {
                entity: "resource".to_string(),
                id: message,
            },
            ClientError::Api { status, message } => CoreError::Api { status, message },
            ClientError::AuthRequired => CoreError::Unauthorized,
            ClientError::ParseError(msg) => CoreError::Parse(msg),
            ClientError::Request(e) => CoreError::Network(e.to_string()),
            ClientError::ServerUnreachable(msg) => CoreError::Network(msg),
            ClientError::Io(e) => CoreError::Network(e.to_string()),
            ClientError::InvalidUrl(_)
            | ClientError::MissingApiKey
            | ClientError::Validation(_)
            | ClientError::FileNotFound(_) => CoreError::Api {
                status: 0,
                message: e.to_string(),
            },
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
