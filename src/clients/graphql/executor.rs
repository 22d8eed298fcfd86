//! The query execution seam used by [`WordPressFetch`](crate::WordPressFetch).

use std::future::Future;

use crate::clients::graphql::GraphqlError;

/// Executes a GraphQL document with variables and returns the response body.
///
/// The returned value is the raw body (`data`, `errors`, `extensions`).
/// Implementations own transport, headers, caching and authentication.
/// [`GraphqlClient`](crate::GraphqlClient) is the HTTP implementation; tests
/// and applications with their own transport can provide another.
///
/// # Example
///
/// ```rust
/// use std::future::Future;
/// use serde_json::{json, Value};
/// use wpgraphql_fetch::{GraphqlError, QueryExecutor};
///
/// struct Offline;
///
/// impl QueryExecutor for Offline {
///     fn execute(
///         &self,
///         _query: &str,
///         _variables: Value,
///     ) -> impl Future<Output = Result<Value, GraphqlError>> + Send {
///         async { Ok(json!({ "data": null })) }
///     }
/// }
/// ```
pub trait QueryExecutor {
    /// Executes `query` with `variables` (a JSON object).
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] when the query could not be executed.
    fn execute(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> impl Future<Output = Result<serde_json::Value, GraphqlError>> + Send;
}

impl<E: QueryExecutor + Sync> QueryExecutor for &E {
    fn execute(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> impl Future<Output = Result<serde_json::Value, GraphqlError>> + Send {
        (**self).execute(query, variables)
    }
}
