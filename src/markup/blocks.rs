//! Leaf and container macro blocks.

use crate::domain::{Attribute, Content, Node, QName, StatusColor};

use super::body::{BuildError, check_body};
use super::{macro_block, name_attr, parameter};

/// Builds a "status" badge block.
///
/// Parameters are emitted in the order the renderer expects: `subtle`,
/// `colour`, `title`. With `outline` set the badge renders as an outlined
/// (subtle) lozenge.
///
/// # Examples
///
/// ```
/// use macrodoc::domain::StatusColor;
/// use macrodoc::markup::build_status;
///
/// let badge = build_status("Stable", StatusColor::Green, false);
/// assert_eq!(badge.name().to_string(), "ac:structured-macro");
/// ```
pub fn build_status(title: &str, color: StatusColor, outline: bool) -> Node {
    macro_block(
        "status",
        [
            parameter("subtle", outline.to_string()),
            parameter("colour", color.as_str()),
            parameter("title", title),
        ],
    )
}

/// Builds a "table of contents" block.
pub fn build_toc() -> Node {
    macro_block("toc", [])
}

/// Builds an "info" box around a rich-text body.
///
/// # Errors
///
/// Returns [`BuildError::RichTextBodyExpected`] if `body` was not built by
/// [`build_body`](super::build_body).
pub fn build_info(body: Node) -> Result<Node, BuildError> {
    check_body(&body)?;

    Ok(macro_block("info", [body.into()]))
}

/// Builds a "section" block around a rich-text body.
///
/// # Errors
///
/// Returns [`BuildError::RichTextBodyExpected`] if `body` was not built by
/// [`build_body`](super::build_body).
pub fn build_section(body: Node) -> Result<Node, BuildError> {
    check_body(&body)?;

    Ok(macro_block("section", [body.into()]))
}

/// Builds a "column" block around a rich-text body.
///
/// A present `width` becomes a `width` parameter ahead of the body; an
/// absent one is omitted entirely.
///
/// # Errors
///
/// Returns [`BuildError::RichTextBodyExpected`] if `body` was not built by
/// [`build_body`](super::build_body).
pub fn build_column(width: Option<&str>, body: Node) -> Result<Node, BuildError> {
    check_body(&body)?;

    Ok(macro_block(
        "column",
        [
            width.map(|w| parameter("width", w)).into(),
            body.into(),
        ],
    ))
}

/// Builds an "image" block referencing an external URL.
///
/// The URL is passed through untouched; well-formedness is the caller's
/// concern.
pub fn build_image(image_url: &str) -> Node {
    Node::with(
        QName::structure("image"),
        [Node::with(
            QName::resource("url"),
            [Content::from(Attribute::new(
                QName::resource("value"),
                image_url,
            ))],
        )
        .into()],
    )
}

/// Builds a link to a user profile, keyed by the directory user key.
pub fn build_user_link(user_key: &str) -> Node {
    Node::with(
        QName::structure("link"),
        [Node::with(
            QName::resource("user"),
            [Content::from(Attribute::new(
                QName::resource("userkey"),
                user_key,
            ))],
        )
        .into()],
    )
}

/// Builds an emoticon.
///
/// Any symbol string is accepted; see
/// [`symbols::emoticon`](crate::domain::symbols::emoticon) for predefined
/// names.
pub fn build_emoticon(symbol: &str) -> Node {
    Node::with(
        QName::structure("emoticon"),
        [Content::from(name_attr(symbol))],
    )
}
