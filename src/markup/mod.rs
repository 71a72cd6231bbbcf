//! Builders for the macro blocks of the storage format.
//!
//! Blocks are assembled bottom-up: build leaf content first, wrap it in a
//! rich-text body with [`build_body`], then hand the body to a container
//! builder. Container builders verify the body tag and fail fast on anything
//! else; the consuming renderer treats macro bodies positionally, so a
//! mis-tagged body would corrupt the page silently downstream.

mod blocks;
mod body;
mod page_link;

pub use blocks::{
    build_column, build_emoticon, build_image, build_info, build_section, build_status, build_toc,
    build_user_link,
};
pub use body::{BuildError, build_body};
pub use page_link::{
    build_page_link, build_page_link_with_anchor, build_page_link_with_body,
    build_page_link_with_text,
};

use crate::domain::{Attribute, Content, Node, QName};

/// Builds a `structured-macro` element carrying the given macro name and
/// ordered parameter/body content.
pub(crate) fn macro_block(name: &str, content: impl IntoIterator<Item = Content>) -> Node {
    let mut parts = vec![Content::from(name_attr(name))];
    parts.extend(content);
    Node::with(QName::structure("structured-macro"), parts)
}

/// Builds an `ac:name` attribute.
pub(crate) fn name_attr(value: &str) -> Attribute {
    Attribute::new(QName::structure("name"), value)
}

/// Builds a named macro parameter element.
pub(crate) fn parameter(name: &str, value: impl Into<String>) -> Content {
    Node::with(
        QName::structure("parameter"),
        [Content::from(name_attr(name)), Content::from(value.into())],
    )
    .into()
}
