//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// The calculation engines themselves never fail (missing data degrades to
/// zero or empty output); errors arise only at the seams around them, when
/// loading configuration or talking to the hosted backend.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or is missing required keys.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The hosted backend rejected or failed a request.
    #[error("Backend error: {0}")]
    Backend(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::Config("msg".into()).to_string(),
            "Configuration error: msg"
        );
        assert_eq!(
            AppError::Backend("msg".into()).to_string(),
            "Backend error: msg"
        );
        assert_eq!(
            AppError::NotFound("msg".into()).to_string(),
            "Not found: msg"
        );
        assert_eq!(
            AppError::Validation("msg".into()).to_string(),
            "Validation error: msg"
        );
    }

    #[test]
    fn test_config_error_converts() {
        let err = config::ConfigError::NotFound("backend.url".to_string());
        let app: AppError = err.into();
        assert!(matches!(app, AppError::Config(_)));
    }
}
