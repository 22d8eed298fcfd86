//! Error types for client configuration.
//!
//! This module contains error types used for configuration and validation
//! errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation.
//!
//! # Example
//!
//! ```rust
//! use wpgraphql_fetch::{AuthToken, ConfigError};
//!
//! let result = AuthToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAuthToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The GraphQL endpoint URL is invalid.
    #[error("Invalid GraphQL endpoint '{url}'. Please provide a URL with scheme and host (e.g., 'https://example.com/graphql').")]
    InvalidEndpoint {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Auth token cannot be empty.
    #[error("Auth token cannot be empty. Omit the token for unauthenticated requests.")]
    EmptyAuthToken,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
