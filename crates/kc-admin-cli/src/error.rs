//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Error reported by the admin API client.
    #[error(transparent)]
    Admin(#[from] kc_admin_client::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_errors_pass_through_unwrapped() {
        let inner = kc_admin_client::Error::Api {
            status: 404,
            body: "{\"error\":\"not found\"}".to_string(),
        };
        let err = CliError::from(inner);
        assert_eq!(err.to_string(), "API error: status 404: {\"error\":\"not found\"}");
    }

    #[test]
    fn invalid_argument_names_the_problem() {
        let err = CliError::InvalidArgument("realm is required".to_string());
        assert_eq!(err.to_string(), "invalid argument: realm is required");
    }
}
