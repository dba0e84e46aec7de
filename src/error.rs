//! Error types for the Heroes API SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use heroes_api::{BaseUrl, ConfigError};
//!
//! let result = BaseUrl::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyBaseUrl)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Base URL cannot be empty.
    #[error("Base URL cannot be empty. Please provide the host the heroes API is served from.")]
    EmptyBaseUrl,

    /// Resource path cannot be empty.
    #[error("Resource path cannot be empty. Expected a path like 'api/heroes'.")]
    EmptyResourcePath,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_base_url_error_message() {
        let error = ConfigError::EmptyBaseUrl;
        let message = error.to_string();
        assert!(message.contains("Base URL cannot be empty"));
    }

    #[test]
    fn test_empty_resource_path_error_message() {
        let error = ConfigError::EmptyResourcePath;
        let message = error.to_string();
        assert!(message.contains("api/heroes"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "base_url" };
        let message = error.to_string();
        assert!(message.contains("base_url"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyBaseUrl;
        // Verify it implements std::error::Error by using it as a dyn Error
        let _: &dyn std::error::Error = &error;
    }
}
