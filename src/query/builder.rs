//! The query document builder.
//!
//! This module provides [`QueryBuilder`], which accumulates an operation name,
//! a field selection, variables, arguments and fragments, and renders them into
//! a single GraphQL query document.

use std::fmt;

use serde_json::{Map, Value};

use crate::query::arguments::render_arguments;
use crate::query::{FieldSelection, Fragment, FragmentContent, VariableSet};

/// Indentation of the operation line and its closing brace.
const OPERATION_INDENT: &str = "                ";

/// Indentation of the first line of the field selection.
const FIELDS_INDENT: &str = "                  ";

/// Indentation of the document's closing brace and of the fragment block.
const DOCUMENT_INDENT: &str = "              ";

/// Builds a GraphQL query document for a single root field.
///
/// Configuration methods consume the builder and return it, so calls chain.
/// [`render`](Self::render) borrows the builder and never mutates it, so
/// rendering twice yields identical text.
///
/// No validation is performed: the builder trusts that field names, argument
/// keys and fragment names are valid GraphQL.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use wpgraphql_fetch::{FieldSelection, QueryBuilder};
///
/// let query = QueryBuilder::new("nodeByUri")
///     .select(FieldSelection::list(["id", "__typename"]))
///     .with_variables(json!({ "uri": "/about" }))
///     .render();
///
/// assert!(query.starts_with("query ($uri: String!) {"));
/// assert!(query.contains("nodeByUri (  uri: $uri) {"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct QueryBuilder {
    operation: String,
    fields: FieldSelection,
    variables: VariableSet,
    fragments: Vec<Fragment>,
    options: Map<String, Value>,
}

impl QueryBuilder {
    /// Creates a builder for the given root field (e.g. `page`, `nodeByUri`).
    #[must_use]
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            fields: FieldSelection::default(),
            variables: VariableSet::new(),
            fragments: Vec::new(),
            options: Map::new(),
        }
    }

    /// Replaces the field selection. Earlier selections are discarded.
    #[must_use]
    pub fn select(mut self, fields: impl Into<FieldSelection>) -> Self {
        self.fields = fields.into();
        self
    }

    /// Merges arguments into the root field's argument list.
    ///
    /// Keys already present are overwritten in place. Values that are not a JSON
    /// object are ignored.
    #[doc(alias = "where")]
    #[must_use]
    pub fn with_options(mut self, options: Value) -> Self {
        if let Value::Object(options) = options {
            for (key, value) in options {
                self.options.insert(key, value);
            }
        }
        self
    }

    /// Merges variables whose GraphQL types are inferred from their values.
    ///
    /// Keys already present are overwritten in place. Values that are not a JSON
    /// object are ignored.
    #[must_use]
    pub fn with_variables(mut self, variables: Value) -> Self {
        if let Value::Object(variables) = variables {
            for (name, value) in variables {
                self.variables.insert(name, value, None);
            }
        }
        self
    }

    /// Sets a variable with an explicitly declared GraphQL type.
    ///
    /// ```rust
    /// use serde_json::json;
    /// use wpgraphql_fetch::QueryBuilder;
    ///
    /// let query = QueryBuilder::new("posts")
    ///     .with_typed_variable("first", "Int!", json!(10))
    ///     .render();
    ///
    /// assert!(query.starts_with("query ($first: Int!) {"));
    /// ```
    #[must_use]
    pub fn with_typed_variable(
        mut self,
        name: impl Into<String>,
        graphql_type: impl Into<String>,
        value: Value,
    ) -> Self {
        self.variables
            .insert(name, value, Some(graphql_type.into()));
        self
    }

    /// Appends a fragment definition. Fragments are not deduplicated by name.
    #[must_use]
    pub fn with_fragment(
        mut self,
        name: impl Into<String>,
        on_type: impl Into<String>,
        content: Vec<FragmentContent>,
    ) -> Self {
        self.fragments.push(Fragment::new(name, on_type, content));
        self
    }

    /// Returns the root field name.
    #[must_use]
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Returns the current field selection.
    #[must_use]
    pub const fn fields(&self) -> &FieldSelection {
        &self.fields
    }

    /// Returns the fragment definitions in the order they were added.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Returns the variable values as a JSON object, ready to send with the query.
    #[must_use]
    pub fn variables(&self) -> Value {
        self.variables.to_json()
    }

    /// Renders the query document.
    #[must_use]
    pub fn render(&self) -> String {
        let declarations = self.variables.declarations();
        let arguments = render_arguments(&self.options);
        let fields = self.fields.to_string();
        let fragments = self
            .fragments
            .iter()
            .map(Fragment::render)
            .collect::<Vec<_>>()
            .join("\n");
        let operation = &self.operation;

        if declarations.is_empty() && arguments.is_empty() {
            // The empty declaration list still leaves its separator space.
            return format!(
                "query {declarations} {{\n{OPERATION_INDENT}{operation}  {{\n{FIELDS_INDENT}{fields}\n{OPERATION_INDENT}}}\n{DOCUMENT_INDENT}}}\n{DOCUMENT_INDENT}{fragments}"
            );
        }

        let declarations = if declarations.is_empty() {
            String::new()
        } else {
            format!("({declarations})")
        };
        let assignments = self.variables.assignments();
        format!(
            "query {declarations} {{\n{OPERATION_INDENT}{operation} ( {arguments} {assignments}) {{\n{FIELDS_INDENT}{fields}\n{OPERATION_INDENT}}}\n{DOCUMENT_INDENT}}}\n{DOCUMENT_INDENT}{fragments}"
        )
    }
}

impl fmt::Display for QueryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
