//! Integration tests for the WordPress fetch facade.
//!
//! The facade is driven against a mock WPGraphQL endpoint through the real
//! [`GraphqlClient`] as well as through a custom [`QueryExecutor`].

use std::future::Future;
use std::sync::Mutex;

use serde::Deserialize;
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wpgraphql_fetch::{
    FetchError, FieldSelection, GraphqlClient, GraphqlEndpoint, GraphqlError, QueryExecutor,
    WordPressConfig, WordPressFetch,
};

fn client_for(server: &MockServer) -> GraphqlClient {
    let config = WordPressConfig::builder()
        .endpoint(GraphqlEndpoint::new(format!("{}/graphql", server.uri())).unwrap())
        .build()
        .unwrap();
    GraphqlClient::new(&config)
}

/// Records queries and answers every one with the same body.
struct RecordingExecutor {
    response: Value,
    queries: Mutex<Vec<String>>,
}

impl QueryExecutor for RecordingExecutor {
    fn execute(
        &self,
        query: &str,
        _variables: Value,
    ) -> impl Future<Output = Result<Value, GraphqlError>> + Send {
        self.queries.lock().unwrap().push(query.to_string());
        let response = self.response.clone();
        async move { Ok(response) }
    }
}

// ============================================================================
// End-to-End Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_node_by_uri_resolves_page_over_http() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({ "variables": { "uri": "/about" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "nodeByUri": { "id": "42", "__typename": "Page" } }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({ "variables": { "id": "42" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "page": {
                    "id": "42",
                    "editorBlocks": [
                        { "name": "core/heading", "attributes": { "content": "About us" } }
                    ]
                }
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut fetch = WordPressFetch::new(client_for(&mock_server));
    fetch.register_block(
        "CoreHeading",
        FieldSelection::nested("attributes", vec!["content"]),
    );

    let page = fetch.fetch_node_by_uri("/about").await.unwrap().unwrap();

    assert_eq!(page["id"], "42");
    assert_eq!(page["editorBlocks"][0]["attributes"]["content"], "About us");
}

#[tokio::test]
async fn test_page_query_is_sent_verbatim() {
    let mock_server = MockServer::start().await;

    let mut fetch = WordPressFetch::new(client_for(&mock_server));
    fetch
        .register_block("hero", "title")
        .register_block("gallery", FieldSelection::nested("images", vec!["url"]));

    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "query": fetch.page_query("42").render(),
            "variables": { "id": "42" }
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "page": { "id": "42" } } })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let page = fetch.fetch_page_by_id("42").await.unwrap();
    assert_eq!(page, Some(json!({ "id": "42" })));
}

#[tokio::test]
async fn test_non_page_nodes_issue_no_second_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "nodeByUri": { "id": "7", "__typename": "Post" } }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetch = WordPressFetch::new(client_for(&mock_server));
    let result = fetch.fetch_node_by_uri("/hello-world").await.unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_server_errors_propagate_without_retry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({ "message": "down" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetch = WordPressFetch::new(client_for(&mock_server));
    let error = fetch.fetch_node_by_uri("/about").await.unwrap_err();

    assert!(matches!(error, FetchError::Graphql(GraphqlError::Http(_))));
}

#[tokio::test]
async fn test_graphql_errors_surface_as_response_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{ "message": "Cannot query field \"hero\" on type \"EditorBlock\"." }],
            "data": null
        })))
        .mount(&mock_server)
        .await;

    let fetch = WordPressFetch::new(client_for(&mock_server));
    let error = fetch.fetch_page_by_id("42").await.unwrap_err();

    match error {
        FetchError::Response { errors } => {
            assert_eq!(
                errors[0]["message"],
                "Cannot query field \"hero\" on type \"EditorBlock\"."
            );
        }
        other => panic!("unexpected error: {other}"),
    }
}

// ============================================================================
// Typed Payload Tests
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Page {
    id: String,
    editor_blocks: Vec<Block>,
}

#[derive(Debug, Deserialize)]
struct Block {
    name: String,
}

#[tokio::test]
async fn test_fetch_page_by_id_as_deserializes_payload() {
    let executor = RecordingExecutor {
        response: json!({
            "data": { "page": { "id": "42", "editorBlocks": [{ "name": "core/paragraph" }] } }
        }),
        queries: Mutex::default(),
    };
    let fetch = WordPressFetch::new(executor);

    let page: Page = fetch.fetch_page_by_id_as("42").await.unwrap().unwrap();

    assert_eq!(page.id, "42");
    assert_eq!(page.editor_blocks[0].name, "core/paragraph");
}

#[tokio::test]
async fn test_fetch_page_by_id_as_reports_shape_mismatch() {
    let executor = RecordingExecutor {
        response: json!({ "data": { "page": { "id": 42 } } }),
        queries: Mutex::default(),
    };
    let fetch = WordPressFetch::new(executor);

    let error = fetch.fetch_page_by_id_as::<Page>("42").await.unwrap_err();
    assert!(matches!(error, FetchError::Deserialize(_)));
}

// ============================================================================
// Block Registration Tests
// ============================================================================

#[test]
fn test_registered_blocks_become_inline_conditions_in_order() {
    let executor = RecordingExecutor {
        response: json!({ "data": { "page": null } }),
        queries: Mutex::default(),
    };
    let mut fetch = WordPressFetch::new(executor);
    fetch.register_block("hero", "title");
    fetch.register_block("gallery", "images");

    let page = tokio_test::block_on(fetch.fetch_page_by_id("1")).unwrap();
    assert!(page.is_none());

    let queries = fetch.executor().queries.lock().unwrap().clone();
    assert_eq!(queries.len(), 1);

    let query = &queries[0];
    assert_eq!(query.matches("fragment pageBlocks on EditorBlock {").count(), 1);
    assert_eq!(query.matches("... on ").count(), 2);
    let hero = query.find("... on hero {").unwrap();
    let gallery = query.find("... on gallery {").unwrap();
    assert!(hero < gallery);
}

#[test]
fn test_shared_executor_by_reference() {
    let executor = RecordingExecutor {
        response: json!({ "data": { "nodeByUri": null } }),
        queries: Mutex::default(),
    };

    {
        let fetch = WordPressFetch::new(&executor);
        let result = tokio_test::block_on(fetch.fetch_node_by_uri("/missing")).unwrap();
        assert!(result.is_none());
    }

    assert_eq!(executor.queries.lock().unwrap().len(), 1);
}
