//! GraphQL execution for WPGraphQL endpoints.
//!
//! # Overview
//!
//! - [`QueryExecutor`]: The trait the fetch facade executes queries through
//! - [`GraphqlClient`]: The HTTP implementation of [`QueryExecutor`]
//! - [`GraphqlError`]: Error type for query execution
//!
//! # Response Structure
//!
//! GraphQL responses contain these fields in the body:
//!
//! - `data`: The query result data
//! - `errors`: Any GraphQL errors (still HTTP 200)
//! - `extensions`: Debug information, when the server provides it
//!
//! # Retry Behavior
//!
//! Requests are attempted [`WordPressConfig::tries`](crate::WordPressConfig::tries)
//! times (default 1) on 429 and 500 responses.

mod client;
mod errors;
mod executor;

pub use client::GraphqlClient;
pub use errors::GraphqlError;
pub use executor::QueryExecutor;
