//! GraphQL client error types.
//!
//! Only transport-level failures are errors here. GraphQL-level errors are
//! returned with HTTP 200 inside the response body's `errors` field; the
//! [`WordPressFetch`](crate::WordPressFetch) facade turns those into
//! [`FetchError::Response`](crate::FetchError::Response).

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for GraphQL query execution.
///
/// # Example
///
/// ```rust
/// use wpgraphql_fetch::clients::graphql::GraphqlError;
/// use wpgraphql_fetch::clients::{HttpError, HttpResponseError};
///
/// let http_error = HttpError::Response(HttpResponseError {
///     code: 401,
///     message: r#"{"message":"Unauthorized"}"#.to_string(),
///     error_reference: None,
/// });
/// let graphql_error: GraphqlError = http_error.into();
/// assert!(graphql_error.to_string().contains("Unauthorized"));
/// ```
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// An HTTP-level error occurred: network errors, non-2xx responses,
    /// and retry exhaustion.
    #[error(transparent)]
    Http(#[from] HttpError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpResponseError, MaxHttpRetriesExceededError};

    #[test]
    fn test_graphql_error_http_variant_wraps_http_error() {
        let graphql_error = GraphqlError::Http(HttpError::Response(HttpResponseError {
            code: 404,
            message: r#"{"message":"Not Found"}"#.to_string(),
            error_reference: Some("abc-123".to_string()),
        }));

        assert!(graphql_error.to_string().contains("Not Found"));
    }

    #[test]
    fn test_http_error_wraps_max_retries_exceeded() {
        let graphql_error: GraphqlError = HttpError::MaxRetries(MaxHttpRetriesExceededError {
            code: 429,
            tries: 3,
            message: r#"{"message":"Too Many Requests"}"#.to_string(),
            error_reference: None,
        })
        .into();

        let message = graphql_error.to_string();
        assert!(message.contains("Exceeded maximum retry count"));
        assert!(message.contains("3"));
    }
}
