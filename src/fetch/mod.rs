//! High-level fetching of WordPress content.
//!
//! [`WordPressFetch`] knows two content shapes, "node by URI" and "page by
//! id". It composes [`QueryBuilder`](crate::QueryBuilder) calls for them,
//! injects the editor blocks registered by the caller, and unwraps the
//! response payload.
//!
//! # Error Handling
//!
//! - Execution failures surface as [`FetchError::Graphql`] and are never retried
//!   by the facade (retries belong to the executor)
//! - GraphQL `errors` in the response body surface as [`FetchError::Response`]
//! - Nodes that are not pages resolve to `Ok(None)`

mod errors;
mod wordpress;

pub use errors::FetchError;
pub use wordpress::{WordPressFetch, EDITOR_BLOCK_TYPE, PAGE_BLOCKS_FRAGMENT, PAGE_TYPENAME};
