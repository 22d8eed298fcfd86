//! HTTP and GraphQL client types.
//!
//! This module provides the transport layer that executes rendered queries
//! against a WPGraphQL endpoint.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client for endpoint communication
//! - [`HttpRequest`]: A request to be sent to the endpoint
//! - [`HttpResponse`]: A parsed response from the endpoint
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST)
//! - [`graphql::GraphqlClient`]: GraphQL client built on [`HttpClient`]
//! - [`graphql::QueryExecutor`]: The execution seam used by the fetch facade
//!
//! # Retry Behavior
//!
//! - **429 (Rate Limited)**: Retries using `Retry-After` header value, or 1 second if not present
//! - **500 (Server Error)**: Retries with fixed 1-second delay
//! - **Other errors**: Returns immediately without retry
//!
//! The default `tries` is 1, meaning no automatic retries.

mod errors;
pub mod graphql;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub(crate) use http_response::graphql_errors_in;

pub use graphql::{GraphqlClient, GraphqlError, QueryExecutor};
