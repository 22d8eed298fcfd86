//! GraphQL client implementation for WPGraphQL endpoints.
//!
//! This module provides the [`GraphqlClient`] type for executing GraphQL
//! queries over HTTP.

use std::collections::HashMap;
use std::future::Future;

use crate::clients::graphql::{GraphqlError, QueryExecutor};
use crate::clients::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::WordPressConfig;

/// GraphQL client for a WPGraphQL endpoint.
///
/// Sends `{"query": ..., "variables": ...}` as a JSON POST to the configured
/// endpoint.
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use wpgraphql_fetch::{GraphqlClient, GraphqlEndpoint, WordPressConfig};
/// use serde_json::json;
///
/// let config = WordPressConfig::builder()
///     .endpoint(GraphqlEndpoint::new("https://cms.example.com/graphql").unwrap())
///     .build()
///     .unwrap();
///
/// let client = GraphqlClient::new(&config);
///
/// let response = client.query(
///     "query ($uri: String!) { nodeByUri(uri: $uri) { id __typename } }",
///     Some(json!({ "uri": "/about" })),
///     None,
///     None,
/// ).await?;
///
/// println!("Type: {}", response.body["data"]["nodeByUri"]["__typename"]);
/// ```
#[derive(Debug)]
pub struct GraphqlClient {
    http_client: HttpClient,
    tries: u32,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL client for the configured endpoint.
    #[must_use]
    pub fn new(config: &WordPressConfig) -> Self {
        Self {
            http_client: HttpClient::new(config),
            tries: config.tries(),
        }
    }

    /// Returns the endpoint URL queries are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.http_client.endpoint()
    }

    /// Executes a GraphQL query.
    ///
    /// # Arguments
    ///
    /// * `query` - The GraphQL query string
    /// * `variables` - Optional variables for the query
    /// * `headers` - Optional extra headers to include in the request
    /// * `tries` - Optional number of attempts; defaults to the configured value
    ///
    /// # Returns
    ///
    /// Returns the raw [`HttpResponse`]. GraphQL-level errors come back with
    /// HTTP 200 and are contained in `response.body["errors"]`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Http`] for HTTP-level errors (network errors,
    /// non-2xx responses, retry exhaustion).
    pub async fn query(
        &self,
        query: &str,
        variables: Option<serde_json::Value>,
        headers: Option<HashMap<String, String>>,
        tries: Option<u32>,
    ) -> Result<HttpResponse, GraphqlError> {
        let body = serde_json::json!({
            "query": query,
            "variables": variables
        });

        let mut builder = HttpRequest::builder(HttpMethod::Post)
            .body(body)
            .tries(tries.unwrap_or(self.tries));

        if let Some(extra_headers) = headers {
            builder = builder.extra_headers(extra_headers);
        }

        let request = builder.build().map_err(|e| GraphqlError::Http(e.into()))?;
        let response = self.http_client.request(request).await?;

        if let Some(errors) = response.graphql_errors() {
            tracing::debug!(%errors, "GraphQL response contains errors");
        }

        Ok(response)
    }

    /// Executes a GraphQL query as an HTTP GET.
    ///
    /// The document is sent in the `query` URL parameter and the variables,
    /// JSON-encoded, in `variables`. WPGraphQL accepts GET for queries (not
    /// mutations), which lets caching proxies in front of WordPress serve
    /// repeated page fetches.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Http`] for HTTP-level errors (network errors,
    /// non-2xx responses, retry exhaustion).
    pub async fn query_get(
        &self,
        query: &str,
        variables: Option<serde_json::Value>,
        headers: Option<HashMap<String, String>>,
        tries: Option<u32>,
    ) -> Result<HttpResponse, GraphqlError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get)
            .query_param("query", query)
            .tries(tries.unwrap_or(self.tries));

        if let Some(variables) = variables {
            builder = builder.query_param("variables", variables.to_string());
        }
        if let Some(extra_headers) = headers {
            builder = builder.extra_headers(extra_headers);
        }

        let request = builder.build().map_err(|e| GraphqlError::Http(e.into()))?;
        let response = self.http_client.request(request).await?;

        if let Some(errors) = response.graphql_errors() {
            tracing::debug!(%errors, "GraphQL response contains errors");
        }

        Ok(response)
    }
}

impl QueryExecutor for GraphqlClient {
    fn execute(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> impl Future<Output = Result<serde_json::Value, GraphqlError>> + Send {
        async move {
            let response = self.query(query, Some(variables), None, None).await?;
            Ok(response.body)
        }
    }
}
