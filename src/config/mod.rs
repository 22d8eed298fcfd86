//! Configuration types for the WPGraphQL client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`WordPressConfig`]: The configuration consumed by [`GraphqlClient`](crate::GraphqlClient)
//! - [`WordPressConfigBuilder`]: A builder for constructing [`WordPressConfig`] instances
//! - [`GraphqlEndpoint`]: A validated endpoint URL
//! - [`AuthToken`]: A bearer token with masked debug output
//!
//! # Example
//!
//! ```rust
//! use wpgraphql_fetch::{GraphqlEndpoint, WordPressConfig};
//!
//! let config = WordPressConfig::builder()
//!     .endpoint(GraphqlEndpoint::new("https://cms.example.com/graphql").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{AuthToken, GraphqlEndpoint};

use crate::error::ConfigError;

/// Configuration for talking to a WPGraphQL endpoint.
///
/// # Thread Safety
///
/// `WordPressConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use wpgraphql_fetch::{AuthToken, GraphqlEndpoint, WordPressConfig};
///
/// let config = WordPressConfig::builder()
///     .endpoint(GraphqlEndpoint::new("https://cms.example.com/graphql").unwrap())
///     .auth_token(AuthToken::new("token").unwrap())
///     .tries(3)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.tries(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct WordPressConfig {
    endpoint: GraphqlEndpoint,
    auth_token: Option<AuthToken>,
    user_agent_prefix: Option<String>,
    tries: u32,
}

impl WordPressConfig {
    /// Creates a new builder for constructing a `WordPressConfig`.
    #[must_use]
    pub fn builder() -> WordPressConfigBuilder {
        WordPressConfigBuilder::new()
    }

    /// Returns the GraphQL endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &GraphqlEndpoint {
        &self.endpoint
    }

    /// Returns the auth token, if configured.
    #[must_use]
    pub const fn auth_token(&self) -> Option<&AuthToken> {
        self.auth_token.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the default number of attempts per query.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }
}

// Verify WordPressConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WordPressConfig>();
};

/// Builder for constructing [`WordPressConfig`] instances.
///
/// `endpoint` is required. Defaults:
///
/// - `auth_token`: `None` (unauthenticated requests)
/// - `user_agent_prefix`: `None`
/// - `tries`: `1` (no retries)
#[derive(Debug, Default)]
pub struct WordPressConfigBuilder {
    endpoint: Option<GraphqlEndpoint>,
    auth_token: Option<AuthToken>,
    user_agent_prefix: Option<String>,
    tries: Option<u32>,
}

impl WordPressConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the GraphQL endpoint (required).
    #[must_use]
    pub fn endpoint(mut self, endpoint: GraphqlEndpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the bearer token sent with every request.
    #[must_use]
    pub fn auth_token(mut self, token: AuthToken) -> Self {
        self.auth_token = Some(token);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets how many times a query is attempted on 429 and 500 responses.
    ///
    /// Values below 1 are treated as 1.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = Some(tries);
        self
    }

    /// Builds the [`WordPressConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `endpoint` is not set.
    pub fn build(self) -> Result<WordPressConfig, ConfigError> {
        let endpoint = self
            .endpoint
            .ok_or(ConfigError::MissingRequiredField { field: "endpoint" })?;

        Ok(WordPressConfig {
            endpoint,
            auth_token: self.auth_token,
            user_agent_prefix: self.user_agent_prefix,
            tries: self.tries.unwrap_or(1).max(1),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint() -> GraphqlEndpoint {
        GraphqlEndpoint::new("https://cms.example.com/graphql").unwrap()
    }

    #[test]
    fn test_builder_requires_endpoint() {
        let result = WordPressConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "endpoint" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = WordPressConfig::builder().endpoint(endpoint()).build().unwrap();

        assert_eq!(config.endpoint(), &endpoint());
        assert!(config.auth_token().is_none());
        assert!(config.user_agent_prefix().is_none());
        assert_eq!(config.tries(), 1);
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = WordPressConfig::builder()
            .endpoint(endpoint())
            .auth_token(AuthToken::new("token").unwrap())
            .user_agent_prefix("MySite/1.0")
            .tries(4)
            .build()
            .unwrap();

        assert_eq!(config.auth_token().unwrap().as_ref(), "token");
        assert_eq!(config.user_agent_prefix(), Some("MySite/1.0"));
        assert_eq!(config.tries(), 4);
    }

    #[test]
    fn test_zero_tries_is_clamped_to_one() {
        let config = WordPressConfig::builder()
            .endpoint(endpoint())
            .tries(0)
            .build()
            .unwrap();

        assert_eq!(config.tries(), 1);
    }

    #[test]
    fn test_config_debug_masks_token() {
        let config = WordPressConfig::builder()
            .endpoint(endpoint())
            .auth_token(AuthToken::new("super-secret").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("WordPressConfig"));
        assert!(!debug_str.contains("super-secret"));
    }
}
