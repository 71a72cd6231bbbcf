//! Rich-text bodies and the tag check container builders rely on.

use crate::domain::{Content, Node, QName};
use thiserror::Error;

/// Error raised when a macro block is handed a structurally invalid
/// argument.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A container builder was given a body whose tag is not
    /// `ac:rich-text-body`.
    #[error("rich text body expected, found <{found}>")]
    RichTextBodyExpected {
        /// Qualified tag of the rejected node.
        found: QName,
    },
}

/// Wraps arbitrary content in a rich-text body.
///
/// Container macros (info, section, column) only accept bodies built here;
/// anything else fails their tag check.
///
/// # Examples
///
/// ```
/// use macrodoc::domain::{Content, Node, QName};
/// use macrodoc::markup::{build_body, build_info};
///
/// let body = build_body([
///     Node::with(QName::plain("p"), [Content::from("Builds are green.")]).into(),
/// ]);
/// assert!(build_info(body).is_ok());
/// ```
pub fn build_body(content: impl IntoIterator<Item = Content>) -> Node {
    Node::with(rich_text_body(), content)
}

/// The qualified tag marking a subtree as valid macro body content.
pub(crate) fn rich_text_body() -> QName {
    QName::structure("rich-text-body")
}

/// Verifies `body` carries the rich-text-body tag.
pub(crate) fn check_body(body: &Node) -> Result<(), BuildError> {
    if *body.name() != rich_text_body() {
        return Err(BuildError::RichTextBodyExpected {
            found: body.name().clone(),
        });
    }
    Ok(())
}
