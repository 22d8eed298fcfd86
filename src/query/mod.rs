//! GraphQL query document construction.
//!
//! This module turns a declarative description of a query into GraphQL text.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`QueryBuilder`]: Accumulates operation, fields, variables, arguments and fragments
//! - [`FieldSelection`]: The recursive description of requested fields
//! - [`VariableSet`] and [`Variable`]: Query variables and their declared types
//! - [`Fragment`] and [`FragmentContent`]: Named fragments made of inline type conditions
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use wpgraphql_fetch::query::{FieldSelection, FragmentContent, QueryBuilder};
//!
//! let query = QueryBuilder::new("page")
//!     .select(FieldSelection::list([
//!         FieldSelection::leaf("id"),
//!         FieldSelection::nested("editorBlocks", vec!["...pageBlocks"]),
//!     ]))
//!     .with_fragment(
//!         "pageBlocks",
//!         "EditorBlock",
//!         vec![FragmentContent::new("CoreParagraph", "renderedHtml")],
//!     )
//!     .with_variables(json!({ "id": "cG9zdDox" }))
//!     .render();
//!
//! assert!(query.starts_with("query ($id: ID!) {"));
//! assert!(query.contains("fragment pageBlocks on EditorBlock {"));
//! ```
//!
//! # Output Layout
//!
//! The rendered layout, including its indentation, is stable: the same
//! configuration always renders byte-identical text.

mod arguments;
mod builder;
mod fragment;
mod selection;
mod variables;

pub use arguments::render_arguments;
pub use builder::QueryBuilder;
pub use fragment::{Fragment, FragmentContent};
pub use selection::FieldSelection;
pub use variables::{infer_graphql_type, Variable, VariableSet};
