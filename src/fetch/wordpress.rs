//! The WordPress content facade.

use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::clients::{graphql_errors_in, QueryExecutor};
use crate::fetch::FetchError;
use crate::query::{FieldSelection, FragmentContent, QueryBuilder};

/// Name of the fragment that carries registered block selections.
pub const PAGE_BLOCKS_FRAGMENT: &str = "pageBlocks";

/// The WPGraphQL interface every editor block implements.
pub const EDITOR_BLOCK_TYPE: &str = "EditorBlock";

/// `__typename` of nodes that [`WordPressFetch::fetch_node_by_uri`] resolves.
pub const PAGE_TYPENAME: &str = "Page";

/// Fetches WordPress pages and their editor blocks through a [`QueryExecutor`].
///
/// Blocks are opted into with [`register_block`](Self::register_block); each
/// registration adds an inline `... on <BlockType> { ... }` condition to the
/// `pageBlocks` fragment spread inside `editorBlocks`.
///
/// Only `Page` nodes are resolved by URI. Other node types yield `Ok(None)`.
///
/// # Example
///
/// ```rust,ignore
/// use wpgraphql_fetch::{FieldSelection, GraphqlClient, GraphqlEndpoint, WordPressConfig, WordPressFetch};
///
/// let config = WordPressConfig::builder()
///     .endpoint(GraphqlEndpoint::new("https://cms.example.com/graphql")?)
///     .build()?;
///
/// let mut fetch = WordPressFetch::new(GraphqlClient::new(&config));
/// fetch
///     .register_block("CoreHeading", FieldSelection::nested("attributes", vec!["content", "level"]))
///     .register_block("CoreParagraph", FieldSelection::nested("attributes", vec!["content"]));
///
/// if let Some(page) = fetch.fetch_node_by_uri("/about").await? {
///     println!("{}", page["editorBlocks"]);
/// }
/// ```
#[derive(Debug)]
pub struct WordPressFetch<E> {
    executor: E,
    page_fields: FieldSelection,
    editor_blocks: Vec<FragmentContent>,
}

impl<E: QueryExecutor> WordPressFetch<E> {
    /// Creates a facade with no registered blocks.
    #[must_use]
    pub fn new(executor: E) -> Self {
        Self {
            executor,
            page_fields: FieldSelection::list([
                FieldSelection::leaf("id"),
                FieldSelection::nested(
                    "editorBlocks",
                    vec![format!("...{PAGE_BLOCKS_FRAGMENT}")],
                ),
            ]),
            editor_blocks: Vec::new(),
        }
    }

    /// Returns the executor queries are sent through.
    #[must_use]
    pub const fn executor(&self) -> &E {
        &self.executor
    }

    /// Returns the selection used for pages.
    #[must_use]
    pub const fn page_fields(&self) -> &FieldSelection {
        &self.page_fields
    }

    /// Returns the registered blocks in registration order.
    #[must_use]
    pub fn registered_blocks(&self) -> &[FragmentContent] {
        &self.editor_blocks
    }

    /// Registers the fields to request for one editor block type.
    ///
    /// Registering the same block name twice adds a second condition; it does
    /// not replace the first.
    pub fn register_block(
        &mut self,
        block_name: impl Into<String>,
        fields: impl Into<FieldSelection>,
    ) -> &mut Self {
        self.editor_blocks
            .push(FragmentContent::new(block_name, fields));
        self
    }

    /// Attaches the registered blocks to `builder` as the `pageBlocks` fragment.
    #[must_use]
    pub fn activate_blocks(&self, builder: QueryBuilder) -> QueryBuilder {
        builder.with_fragment(
            PAGE_BLOCKS_FRAGMENT,
            EDITOR_BLOCK_TYPE,
            self.editor_blocks.clone(),
        )
    }

    /// Builds the lookup query that resolves a URI to its node id and type.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn node_by_uri_query(&self, uri: &str) -> QueryBuilder {
        QueryBuilder::new("nodeByUri")
            .select(FieldSelection::list(["id", "__typename"]))
            .with_variables(json!({ "uri": uri }))
    }

    /// Builds the page query, including every registered block.
    #[must_use]
    pub fn page_query(&self, id: &str) -> QueryBuilder {
        self.activate_blocks(QueryBuilder::new("page"))
            .select(self.page_fields.clone())
            .with_variables(json!({ "id": id }))
    }

    /// Fetches the node at `uri`, resolving it to a page when it is one.
    ///
    /// Issues a lookup query first. When the node is a `Page`, a second query
    /// fetches it by id and its `page` payload is returned. Any other node type,
    /// or a URI that resolves to no node, returns `Ok(None)` without a second
    /// query.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when either query fails or the response carries
    /// GraphQL errors.
    pub async fn fetch_node_by_uri(&self, uri: &str) -> Result<Option<Value>, FetchError> {
        let data = self.run(&self.node_by_uri_query(uri)).await?;
        let node = &data["nodeByUri"];

        match node["__typename"].as_str() {
            Some(PAGE_TYPENAME) => {
                let Some(id) = node_id(&node["id"]) else {
                    tracing::warn!(uri, "Page node resolved without an id");
                    return Ok(None);
                };
                self.fetch_page_by_id(&id).await
            }
            Some(typename) => {
                tracing::debug!(uri, typename, "Skipping unsupported node type");
                Ok(None)
            }
            None => {
                tracing::debug!(uri, "No node found for URI");
                Ok(None)
            }
        }
    }

    /// Fetches a page and its registered blocks by id.
    ///
    /// Returns the `page` payload, or `None` when the server returns `null`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the query fails or the response carries
    /// GraphQL errors.
    pub async fn fetch_page_by_id(&self, id: &str) -> Result<Option<Value>, FetchError> {
        let mut data = self.run(&self.page_query(id)).await?;
        let page = data.get_mut("page").map(Value::take).unwrap_or_default();
        Ok(if page.is_null() { None } else { Some(page) })
    }

    /// Like [`fetch_page_by_id`](Self::fetch_page_by_id), deserializing the payload.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Deserialize`] when the payload does not match `T`,
    /// or any error of [`fetch_page_by_id`](Self::fetch_page_by_id).
    pub async fn fetch_page_by_id_as<T: DeserializeOwned>(
        &self,
        id: &str,
    ) -> Result<Option<T>, FetchError> {
        self.fetch_page_by_id(id)
            .await?
            .map(serde_json::from_value)
            .transpose()
            .map_err(Into::into)
    }

    /// Like [`fetch_node_by_uri`](Self::fetch_node_by_uri), deserializing the payload.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Deserialize`] when the payload does not match `T`,
    /// or any error of [`fetch_node_by_uri`](Self::fetch_node_by_uri).
    pub async fn fetch_node_by_uri_as<T: DeserializeOwned>(
        &self,
        uri: &str,
    ) -> Result<Option<T>, FetchError> {
        self.fetch_node_by_uri(uri)
            .await?
            .map(serde_json::from_value)
            .transpose()
            .map_err(Into::into)
    }

    /// Executes a built query and returns its `data` member.
    async fn run(&self, builder: &QueryBuilder) -> Result<Value, FetchError> {
        let query = builder.render();
        tracing::debug!(operation = builder.operation(), %query, "Executing WPGraphQL query");

        let mut body = self.executor.execute(&query, builder.variables()).await?;

        if let Some(errors) = graphql_errors_in(&body) {
            return Err(FetchError::Response {
                errors: errors.clone(),
            });
        }

        Ok(body.get_mut("data").map(Value::take).unwrap_or_default())
    }
}

/// Reads a node id, accepting WPGraphQL's global string ids and numeric ids.
fn node_id(value: &Value) -> Option<String> {
    match value {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}
