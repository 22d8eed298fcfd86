//! Fetch facade error types.

use crate::clients::GraphqlError;
use thiserror::Error;

/// Error type for [`WordPressFetch`](crate::WordPressFetch) operations.
///
/// Unsupported node types are not errors: they resolve to `Ok(None)`.
///
/// # Example
///
/// ```rust,ignore
/// use wpgraphql_fetch::FetchError;
///
/// match fetch.fetch_node_by_uri("/about").await {
///     Ok(Some(page)) => println!("{}", page["id"]),
///     Ok(None) => println!("not a page"),
///     Err(FetchError::Response { errors }) => println!("GraphQL errors: {errors}"),
///     Err(e) => println!("request failed: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum FetchError {
    /// The query could not be executed.
    #[error(transparent)]
    Graphql(#[from] GraphqlError),

    /// The server executed the query and reported GraphQL errors.
    #[error("GraphQL response contained errors: {errors}")]
    Response {
        /// The `errors` member of the response body.
        errors: serde_json::Value,
    },

    /// The payload did not match the requested type.
    #[error("Failed to deserialize response payload: {0}")]
    Deserialize(#[from] serde_json::Error),
}
