//! Query variables and their GraphQL type declarations.

use serde_json::Value;

/// Type declared for a variable named `id` when no explicit type is given.
const ID_TYPE: &str = "ID!";

/// A single query variable.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    /// The variable name, without the leading `$`.
    pub name: String,
    /// The runtime value sent alongside the query.
    pub value: Value,
    /// An explicit GraphQL type. When `None`, the type is inferred from `value`.
    pub declared_type: Option<String>,
}

impl Variable {
    /// Returns the GraphQL type used in the variable declaration.
    ///
    /// An explicit type always wins. Otherwise `id` declares `ID!` and every
    /// other name is inferred with [`infer_graphql_type`].
    #[must_use]
    pub fn graphql_type(&self) -> &str {
        match &self.declared_type {
            Some(declared) => declared.as_str(),
            None if self.name == "id" => ID_TYPE,
            None => infer_graphql_type(&self.value),
        }
    }
}

/// Infers a GraphQL scalar type from a JSON value.
///
/// | value                               | type      |
/// |-------------------------------------|-----------|
/// | string                              | `String!` |
/// | number with no fractional part      | `Int`     |
/// | any other number                    | `Float`   |
/// | boolean                             | `Boolean` |
/// | null, array, object                 | `String`  |
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use wpgraphql_fetch::query::infer_graphql_type;
///
/// assert_eq!(infer_graphql_type(&json!("hello")), "String!");
/// assert_eq!(infer_graphql_type(&json!(3)), "Int");
/// assert_eq!(infer_graphql_type(&json!(2.5)), "Float");
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn infer_graphql_type(value: &Value) -> &'static str {
    match value {
        Value::String(_) => "String!",
        Value::Number(number) => {
            if number.is_i64() || number.is_u64() {
                return "Int";
            }
            match number.as_f64() {
                Some(float) if float.is_finite() && float.fract() == 0.0 => "Int",
                _ => "Float",
            }
        }
        Value::Bool(_) => "Boolean",
        Value::Null | Value::Array(_) | Value::Object(_) => "String",
    }
}

/// An ordered set of query variables.
///
/// Inserting a name that already exists replaces its value and type in place,
/// so declaration order is the order in which names were first seen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VariableSet {
    entries: Vec<Variable>,
}

impl VariableSet {
    /// Creates an empty variable set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a variable.
    pub fn insert(&mut self, name: impl Into<String>, value: Value, declared_type: Option<String>) {
        let name = name.into();
        if let Some(existing) = self.entries.iter_mut().find(|v| v.name == name) {
            existing.value = value;
            existing.declared_type = declared_type;
            return;
        }
        self.entries.push(Variable {
            name,
            value,
            declared_type,
        });
    }

    /// Returns the variable with the given name, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.entries.iter().find(|v| v.name == name)
    }

    /// Returns `true` if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over the variables in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.entries.iter()
    }

    /// Renders the declaration list, e.g. `$id: ID!, $first: Int`.
    #[must_use]
    pub fn declarations(&self) -> String {
        self.entries
            .iter()
            .map(|v| format!("${}: {}", v.name, v.graphql_type()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Renders the argument assignments, e.g. `id: $id, first: $first`.
    #[must_use]
    pub fn assignments(&self) -> String {
        self.entries
            .iter()
            .map(|v| format!("{0}: ${0}", v.name))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Returns the variable values as a JSON object in declaration order.
    #[must_use]
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.entries
                .iter()
                .map(|v| (v.name.clone(), v.value.clone()))
                .collect(),
        )
    }
}
