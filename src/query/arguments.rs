//! Free-form operation arguments (`where`, `first`, `after`, ...).

use serde_json::{Map, Value};

/// Renders an argument map as a GraphQL argument list.
///
/// Scalar and array values are JSON-encoded (`first: 10`, `status: "PUBLISH"`).
/// Object values render one level deep as `key: { sub: <json>, ... }`, which is
/// how WPGraphQL `where` inputs are written.
///
/// Numbers follow JavaScript's `JSON.stringify`: a float with no fractional
/// part is written as an integer, so `2.0` renders as `2`.
///
/// Arrays are written as GraphQL lists (`in: [1,2]`). The JavaScript builder
/// this output format comes from expanded arrays like objects, keyed by index
/// (`in: { 0: 1, 1: 2 }`); that form is not reproduced.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use wpgraphql_fetch::query::render_arguments;
///
/// let args = json!({ "first": 5, "where": { "status": "PUBLISH" } });
/// assert_eq!(
///     render_arguments(args.as_object().unwrap()),
///     r#"first: 5, where: { status: "PUBLISH" }"#
/// );
/// ```
#[must_use]
pub fn render_arguments(options: &Map<String, Value>) -> String {
    options
        .iter()
        .map(|(key, value)| match value {
            Value::Object(nested) => {
                let inner = nested
                    .iter()
                    .map(|(sub_key, sub_value)| format!("{sub_key}: {}", encode(sub_value)))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{key}: {{ {inner} }}")
            }
            other => format!("{key}: {}", encode(other)),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Largest magnitude at which every whole `f64` is an exact integer.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Compact JSON text, with whole-number floats written as integers.
fn encode(value: &Value) -> String {
    with_integral_floats(value).to_string()
}

#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn with_integral_floats(value: &Value) -> Value {
    match value {
        Value::Number(number) if number.is_f64() => match number.as_f64() {
            Some(float) if float.fract() == 0.0 && float.abs() <= MAX_SAFE_INTEGER => {
                Value::from(float as i64)
            }
            _ => value.clone(),
        },
        Value::Array(items) => Value::Array(items.iter().map(with_integral_floats).collect()),
        Value::Object(entries) => Value::Object(
            entries
                .iter()
                .map(|(key, item)| (key.clone(), with_integral_floats(item)))
                .collect(),
        ),
        other => other.clone(),
    }
}
