//! Integration tests for query document rendering.
//!
//! These tests exercise the public builder API the way a caller composes
//! WPGraphQL documents.

use serde_json::json;
use wpgraphql_fetch::query::{infer_graphql_type, FragmentContent};
use wpgraphql_fetch::{FieldSelection, QueryBuilder};

fn indent(n: usize) -> String {
    " ".repeat(n)
}

// ============================================================================
// Field Selection Tests
// ============================================================================

#[test]
fn test_string_leaves_in_a_list_join_with_newlines() {
    let query = QueryBuilder::new("generalSettings")
        .select(vec!["title", "description", "url"])
        .render();

    assert!(query.contains("title\ndescription\nurl"));
}

#[test]
fn test_string_leaves_in_a_group_render_as_bare_keys() {
    let query = QueryBuilder::new("generalSettings")
        .select(FieldSelection::group([("title", "title"), ("url", "url")]))
        .render();

    assert!(query.contains("title\nurl"));
    assert!(!query.contains("String"));
}

// ============================================================================
// Variable Declaration Tests
// ============================================================================

#[test]
fn test_id_variable_is_always_declared_as_id() {
    for value in [json!("cG9zdDox"), json!(42), json!(true), json!(null)] {
        let query = QueryBuilder::new("page")
            .select("title")
            .with_variables(json!({ "id": value }))
            .render();

        assert!(
            query.starts_with("query ($id: ID!) {"),
            "unexpected declaration for {value}: {query}"
        );
    }
}

#[test]
fn test_non_id_variable_types_are_inferred_from_values() {
    let query = QueryBuilder::new("posts")
        .select("id")
        .with_variables(json!({
            "first": 10,
            "ratio": 1.5,
            "draft": false,
            "search": "hello"
        }))
        .render();

    assert!(query.starts_with(
        "query ($first: Int, $ratio: Float, $draft: Boolean, $search: String!) {"
    ));
    assert!(query.contains("first: $first, ratio: $ratio, draft: $draft, search: $search)"));
}

#[test]
fn test_infer_graphql_type_matches_builder_declarations() {
    assert_eq!(infer_graphql_type(&json!(3)), "Int");
    assert_eq!(infer_graphql_type(&json!(3.25)), "Float");
    assert_eq!(infer_graphql_type(&json!(true)), "Boolean");
    assert_eq!(infer_graphql_type(&json!("text")), "String!");
    assert_eq!(infer_graphql_type(&json!(["a"])), "String");
}

#[test]
fn test_typed_variable_overrides_inference() {
    let builder = QueryBuilder::new("post")
        .select("title")
        .with_typed_variable("id", "Int!", json!(7))
        .with_typed_variable("idType", "PostIdType", json!("DATABASE_ID"));

    assert!(builder
        .render()
        .starts_with("query ($id: Int!, $idType: PostIdType) {"));
    assert_eq!(builder.variables(), json!({ "id": 7, "idType": "DATABASE_ID" }));
}

// ============================================================================
// Document Form Tests
// ============================================================================

#[test]
fn test_no_variables_and_no_options_uses_simple_form() {
    let query = QueryBuilder::new("viewer").select("name").render();

    let expected = format!(
        "query  {{\n{o}viewer  {{\n{f}name\n{o}}}\n{d}}}\n{d}",
        o = indent(16),
        f = indent(18),
        d = indent(14),
    );
    assert_eq!(query, expected);
}

#[test]
fn test_options_and_variables_share_the_argument_list() {
    let query = QueryBuilder::new("menuItems")
        .select(FieldSelection::nested("nodes", vec!["label", "uri"]))
        .with_options(json!({ "first": 20 }))
        .with_variables(json!({ "location": "PRIMARY" }))
        .render();

    let expected = format!(
        "query ($location: String!) {{\n{o}menuItems ( first: 20 location: $location) {{\n{f}nodes {{\nlabel\nuri\n}}\n{o}}}\n{d}}}\n{d}",
        o = indent(16),
        f = indent(18),
        d = indent(14),
    );
    assert_eq!(query, expected);
}

#[test]
fn test_whole_number_float_options_render_as_integers() {
    let query = QueryBuilder::new("posts")
        .select("id")
        .with_options(json!({ "n": 2.0, "where": { "minPrice": 10.0 } }))
        .render();

    assert!(query.contains("posts ( n: 2, where: { minPrice: 10 } ) {"));
}

// ============================================================================
// Fragment Tests
// ============================================================================

#[test]
fn test_fragments_follow_the_operation_in_order() {
    let query = QueryBuilder::new("page")
        .select(vec!["id", "...pageBlocks"])
        .with_variables(json!({ "id": "42" }))
        .with_fragment(
            "pageBlocks",
            "EditorBlock",
            vec![
                FragmentContent::new("hero", "title"),
                FragmentContent::new("gallery", FieldSelection::nested("images", vec!["url"])),
            ],
        )
        .render();

    let fragment = format!(
        "fragment pageBlocks on EditorBlock {{\n{outer}... on hero {{\n{inner}title\n{outer}}}\n... on gallery {{\n{inner}images {{\nurl\n}}\n{outer}}}\n{outer}}}",
        outer = indent(16),
        inner = indent(20),
    );
    assert!(query.ends_with(&format!("}}\n{}{fragment}", indent(14))));
}

#[test]
fn test_multiple_fragments_are_joined_with_newlines() {
    let query = QueryBuilder::new("page")
        .select("id")
        .with_fragment("a", "EditorBlock", vec![FragmentContent::new("One", "x")])
        .with_fragment("b", "EditorBlock", vec![FragmentContent::new("Two", "y")])
        .render();

    let first = query.find("fragment a on EditorBlock").unwrap();
    let second = query.find("fragment b on EditorBlock").unwrap();
    assert!(first < second);
    assert!(query[first..second].ends_with("}\n"));
}

// ============================================================================
// Stability Tests
// ============================================================================

#[test]
fn test_rendering_twice_is_byte_identical() {
    let builder = QueryBuilder::new("posts")
        .select(FieldSelection::group([
            ("id", FieldSelection::leaf("id")),
            (
                "author",
                FieldSelection::nested("node", vec!["name", "slug"]),
            ),
        ]))
        .with_options(json!({ "where": { "search": "rust", "status": "PUBLISH" } }))
        .with_variables(json!({ "first": 3 }))
        .with_fragment("blocks", "EditorBlock", vec![FragmentContent::new("CoreList", "ordered")]);

    assert_eq!(builder.render(), builder.render());
    assert_eq!(builder.to_string(), builder.render());
}
