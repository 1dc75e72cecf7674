//! Error types for admin API calls.

use thiserror::Error;

/// Errors returned by [`AdminClient`](crate::AdminClient) operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The call-site arguments were malformed: a variadic query-parameter
    /// list had an odd number of strings, or a path placeholder was left
    /// without a value. Raised before any request is sent.
    #[error("invalid parameter count: {reason}")]
    InvalidParameterCount {
        /// What was wrong with the supplied parameters.
        reason: String,
    },

    /// The request never produced a response: connection refused, DNS or
    /// TLS failure, timeout, or the connection dropped mid-transfer.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status. The body is kept
    /// verbatim; Keycloak usually returns a JSON error description but is
    /// not obliged to.
    #[error("API error: status {status}: {body}")]
    Api {
        /// Numeric HTTP status code.
        status: u16,
        /// Response body exactly as received.
        body: String,
    },

    /// A request body could not be encoded as JSON, or a response body
    /// could not be decoded into the requested type.
    #[error("JSON decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// The client could not be built from the given configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// HTTP status code for [`Error::Api`], `None` for every other kind.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn invalid_params(reason: impl Into<String>) -> Self {
        Self::InvalidParameterCount {
            reason: reason.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_exposes_status() {
        let err = Error::Api {
            status: 404,
            body: "{\"error\":\"not found\"}".to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(
            err.to_string(),
            "API error: status 404: {\"error\":\"not found\"}"
        );
    }

    #[test]
    fn non_api_errors_have_no_status() {
        let err = Error::invalid_params("query parameters must be key/value pairs, got 3 strings");
        assert_eq!(err.status(), None);
        assert!(err.to_string().starts_with("invalid parameter count:"));
    }
}
