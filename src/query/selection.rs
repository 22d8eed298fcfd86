//! Recursive field selections.
//!
//! This module provides [`FieldSelection`], the declarative description of the
//! fields a query requests, and its text renderer.

use std::fmt;

/// Indentation unit added per nesting level of a [`FieldSelection::Group`].
const INDENT: &str = "  ";

/// A nested description of the fields a GraphQL query requests.
///
/// A selection is either a single field name, a list of selections, or a
/// group mapping field names to their sub-selections.
///
/// Inside a group, an entry whose value is a [`FieldSelection::Leaf`] renders
/// as the bare key; the leaf's own text is ignored. Entries whose value is a
/// list or a group render as `key { ... }` with the children one level deeper.
///
/// # Example
///
/// ```rust
/// use wpgraphql_fetch::FieldSelection;
///
/// let selection = FieldSelection::list([
///     FieldSelection::leaf("id"),
///     FieldSelection::nested("author", FieldSelection::nested(
///         "node",
///         FieldSelection::group([("name", FieldSelection::leaf("name"))]),
///     )),
/// ]);
///
/// assert_eq!(
///     selection.to_string(),
///     "id\nauthor {\n  node {\n    name\n  }\n}"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldSelection {
    /// A single field name, or a fragment spread such as `...pageBlocks`.
    Leaf(String),
    /// Selections rendered one after another, separated by newlines.
    List(Vec<FieldSelection>),
    /// Field names mapped to their sub-selections, in insertion order.
    Group(Vec<(String, FieldSelection)>),
}

impl FieldSelection {
    /// Creates a selection for a single field.
    #[must_use]
    pub fn leaf(name: impl Into<String>) -> Self {
        Self::Leaf(name.into())
    }

    /// Creates a list selection from any iterator of selections.
    #[must_use]
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Self>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Creates a group selection from `(field, sub-selection)` pairs.
    #[must_use]
    pub fn group<I, K, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, S)>,
        K: Into<String>,
        S: Into<Self>,
    {
        Self::Group(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Creates a group with a single field holding a sub-selection.
    ///
    /// `FieldSelection::nested("editorBlocks", ...)` is shorthand for a one-entry
    /// [`FieldSelection::group`].
    #[must_use]
    pub fn nested(field: impl Into<String>, children: impl Into<Self>) -> Self {
        Self::Group(vec![(field.into(), children.into())])
    }

    /// Returns `true` if this selection renders a `{ ... }` block when used as
    /// the value of a group entry.
    #[must_use]
    pub const fn is_composite(&self) -> bool {
        matches!(self, Self::List(_) | Self::Group(_))
    }

    /// Renders the selection starting at the given nesting level.
    pub(crate) fn format_with_indent(&self, indent_level: usize) -> String {
        match self {
            Self::Leaf(name) => name.clone(),
            Self::List(items) => items
                .iter()
                .map(|item| item.format_with_indent(indent_level))
                .collect::<Vec<_>>()
                .join("\n"),
            Self::Group(entries) => {
                let indent = INDENT.repeat(indent_level);
                entries
                    .iter()
                    .map(|(key, value)| {
                        if value.is_composite() {
                            format!(
                                "{indent}{key} {{\n{}\n{indent}}}",
                                value.format_with_indent(indent_level + 1)
                            )
                        } else {
                            format!("{indent}{key}")
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
    }
}

impl Default for FieldSelection {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl fmt::Display for FieldSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_indent(0))
    }
}

impl From<&str> for FieldSelection {
    fn from(name: &str) -> Self {
        Self::Leaf(name.to_string())
    }
}

impl From<String> for FieldSelection {
    fn from(name: String) -> Self {
        Self::Leaf(name)
    }
}

impl<S: Into<Self>> From<Vec<S>> for FieldSelection {
    fn from(items: Vec<S>) -> Self {
        Self::list(items)
    }
}
