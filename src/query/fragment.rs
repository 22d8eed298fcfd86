//! Named fragments built from inline type conditions.

use crate::query::FieldSelection;

/// Indentation of inline conditions and closing braces inside a fragment.
const CONDITION_INDENT: &str = "                ";

/// Indentation of the field selection inside an inline condition.
const CONTENT_INDENT: &str = "                    ";

/// One inline type condition (`... on CoreParagraph { ... }`) of a fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FragmentContent {
    /// The concrete type the condition applies to.
    pub target_type: String,
    /// The fields requested when the value is of `target_type`.
    pub content_fields: FieldSelection,
}

impl FragmentContent {
    /// Creates a new inline condition.
    #[must_use]
    pub fn new(target_type: impl Into<String>, content_fields: impl Into<FieldSelection>) -> Self {
        Self {
            target_type: target_type.into(),
            content_fields: content_fields.into(),
        }
    }

    fn render(&self) -> String {
        format!(
            "... on {} {{\n{CONTENT_INDENT}{}\n{CONDITION_INDENT}}}",
            self.target_type, self.content_fields
        )
    }
}

/// A named fragment on an interface or union type.
///
/// # Example
///
/// ```rust
/// use wpgraphql_fetch::query::{Fragment, FragmentContent};
///
/// let fragment = Fragment::new(
///     "pageBlocks",
///     "EditorBlock",
///     vec![FragmentContent::new("CoreParagraph", "renderedHtml")],
/// );
///
/// assert!(fragment.render().starts_with("fragment pageBlocks on EditorBlock {"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    /// The fragment name used in spreads (`...name`).
    pub name: String,
    /// The interface or union the fragment applies to.
    pub on_type: String,
    /// Inline type conditions, rendered in order.
    pub content: Vec<FragmentContent>,
}

impl Fragment {
    /// Creates a new fragment definition.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        on_type: impl Into<String>,
        content: Vec<FragmentContent>,
    ) -> Self {
        Self {
            name: name.into(),
            on_type: on_type.into(),
            content,
        }
    }

    /// Renders the fragment definition.
    #[must_use]
    pub fn render(&self) -> String {
        let conditions = self
            .content
            .iter()
            .map(FragmentContent::render)
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "fragment {} on {} {{\n{CONDITION_INDENT}{conditions}\n{CONDITION_INDENT}}}",
            self.name, self.on_type
        )
    }
}
