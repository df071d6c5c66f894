//! Error types for the release-pr crate.

use thiserror::Error;

/// Main error type.
#[derive(Error, Debug)]
pub enum Error {
    /// The webhook payload is not valid JSON or is missing required fields.
    #[error("Malformed event payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// Bad base64, bad UTF-8, or an encoding other than "base64".
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Configuration error (missing or invalid environment variables).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO error (reading the event file).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Network failure or an unparseable response body.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The event does not carry a release payload.
    #[error("Event does not carry a release payload")]
    NotRelease,

    /// GitHub API error.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Typed errors for non-2xx GitHub API responses.
///
/// Each variant carries the response status and body verbatim; there is no
/// local recovery and no retry, the caller sees exactly what the API said.
#[derive(Error, Debug, Clone)]
pub enum ApiError {
    /// Authentication or authorization failure (401/403).
    #[error("Authentication failed ({status}): {body}")]
    Auth { status: u16, body: String },

    /// The requested resource does not exist (404).
    #[error("Not found: {body}")]
    NotFound { body: String },

    /// The working branch already exists (422 on ref creation).
    #[error("Branch already exists: {body}")]
    BranchExists { body: String },

    /// The file sha no longer matches the remote HEAD (409/422 on commit).
    #[error("Stale sha conflict ({status}): {body}")]
    Conflict { status: u16, body: String },

    /// Catch-all for any other non-2xx response.
    #[error("Request failed ({status}): {body}")]
    Transport { status: u16, body: String },
}

impl ApiError {
    /// Get the HTTP status code, if the error carries one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Auth { status, .. }
            | Self::Conflict { status, .. }
            | Self::Transport { status, .. } => Some(*status),
            Self::NotFound { .. } => Some(404),
            Self::BranchExists { .. } => Some(422),
        }
    }

    /// Get the raw response body.
    #[must_use]
    pub fn body(&self) -> &str {
        match self {
            Self::Auth { body, .. }
            | Self::NotFound { body }
            | Self::BranchExists { body }
            | Self::Conflict { body, .. }
            | Self::Transport { body, .. } => body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_status() {
        let err = ApiError::Auth {
            status: 401,
            body: "Bad credentials".to_string(),
        };
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.body(), "Bad credentials");

        let err = ApiError::NotFound {
            body: "Not Found".to_string(),
        };
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_conflict_carries_original_status() {
        let err = ApiError::Conflict {
            status: 409,
            body: "sha mismatch".to_string(),
        };
        assert_eq!(err.status(), Some(409));

        let err = ApiError::Conflict {
            status: 422,
            body: "sha mismatch".to_string(),
        };
        assert_eq!(err.status(), Some(422));
    }

    #[test]
    fn test_error_display_includes_detail() {
        let err = Error::Api(ApiError::Transport {
            status: 500,
            body: "server exploded".to_string(),
        });
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("server exploded"));
    }
}
