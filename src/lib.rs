//! # WPGraphQL Fetch
//!
//! A Rust client for building WPGraphQL query documents and fetching
//! WordPress pages together with their editor blocks.
//!
//! ## Overview
//!
//! This crate provides:
//! - A query document builder via [`QueryBuilder`] and [`FieldSelection`]
//! - Named fragments with inline type conditions via [`query::Fragment`]
//! - A content facade, [`WordPressFetch`], that resolves URIs to pages and
//!   injects caller-registered editor blocks
//! - An async HTTP GraphQL client, [`GraphqlClient`], with retry handling
//! - Type-safe configuration via [`WordPressConfig`] and validated newtypes
//!
//! ## Building Queries
//!
//! ```rust
//! use serde_json::json;
//! use wpgraphql_fetch::{FieldSelection, QueryBuilder};
//!
//! let query = QueryBuilder::new("posts")
//!     .select(FieldSelection::nested("nodes", vec!["id", "title", "uri"]))
//!     .with_options(json!({ "first": 10, "where": { "categoryName": "news" } }))
//!     .render();
//!
//! assert!(query.contains(r#"posts ( first: 10, where: { categoryName: "news" } ) {"#));
//! ```
//!
//! ## Fetching Pages
//!
//! ```rust,ignore
//! use wpgraphql_fetch::{
//!     FieldSelection, GraphqlClient, GraphqlEndpoint, WordPressConfig, WordPressFetch,
//! };
//!
//! let config = WordPressConfig::builder()
//!     .endpoint(GraphqlEndpoint::new("https://cms.example.com/graphql")?)
//!     .build()?;
//!
//! let mut fetch = WordPressFetch::new(GraphqlClient::new(&config));
//! fetch.register_block(
//!     "CoreParagraph",
//!     FieldSelection::nested("attributes", vec!["content"]),
//! );
//!
//! // Resolves the URI, then fetches the page with its blocks
//! let page = fetch.fetch_node_by_uri("/about").await?;
//! ```
//!
//! ## Custom Transports
//!
//! [`WordPressFetch`] executes through the [`QueryExecutor`] trait. Implement
//! it to route queries through your own client, cache or test double.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Configuration newtypes validate on construction
//! - **No query validation**: Rendered documents are not checked against a schema
//! - **Stable output**: Rendering the same builder twice yields identical text
//! - **Async-first**: Designed for use with the Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod fetch;
pub mod query;

pub use config::{AuthToken, GraphqlEndpoint, WordPressConfig, WordPressConfigBuilder};
pub use error::ConfigError;

pub use query::{FieldSelection, Fragment, FragmentContent, QueryBuilder};

pub use fetch::{FetchError, WordPressFetch};

pub use clients::{
    GraphqlClient, GraphqlError, HttpClient, HttpError, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponse, HttpResponseError, InvalidHttpRequestError,
    MaxHttpRetriesExceededError, QueryExecutor,
};
