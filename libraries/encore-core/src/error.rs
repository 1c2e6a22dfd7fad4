/// Core error types for Encore
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Error returned by collaborator calls
///
/// Implementations of the traits in [`crate::traits`] translate their own
/// transport errors into this type so that consumers never depend on a
/// particular HTTP stack.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The collaborator could not be reached or did not answer
    #[error("Network error: {0}")]
    Network(String),

    /// The collaborator answered with an error response
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Missing or rejected credentials
    #[error("Unauthorized")]
    Unauthorized,

    /// The response could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),
}

impl CoreError {
    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Whether retrying the same call could succeed
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_classification() {
        assert!(CoreError::network("timeout").is_transient());
        assert!(CoreError::Api {
            status: 503,
            message: "busy".into()
        }
        .is_transient());
        assert!(!CoreError::Api {
            status: 404,
            message: "missing".into()
        }
        .is_transient());
        assert!(!CoreError::Unauthorized.is_transient());
    }

    #[test]
    fn not_found_message() {
        let err = CoreError::not_found("Song", "42");
        assert_eq!(err.to_string(), "Song not found: 42");
    }
}
