//! Links to wiki pages, in their four shapes.

use crate::domain::{Attribute, Content, Node, QName};

/// Builds a page link rendered with the target page's own title as the link
/// text.
pub fn build_page_link(page_title: &str) -> Node {
    link_to_page(page_title, None, None)
}

/// Builds a page link displaying `link_text` instead of the page title.
///
/// The text is carried as a literal block, so markup characters in it reach
/// the page verbatim rather than escaped.
///
/// # Examples
///
/// ```
/// use macrodoc::markup::build_page_link_with_text;
///
/// let link = build_page_link_with_text("Release Notes", "latest release");
/// assert_eq!(link.name().to_string(), "ac:link");
/// ```
pub fn build_page_link_with_text(page_title: &str, link_text: &str) -> Node {
    link_to_page(page_title, None, Some(plain_text_body(link_text)))
}

/// Builds a page link pointing at an anchor within the target page.
///
/// An empty anchor behaves exactly like no anchor: the attribute is omitted
/// entirely, never emitted with an empty value.
pub fn build_page_link_with_anchor(page_title: &str, anchor: &str, link_text: &str) -> Node {
    link_to_page(page_title, Some(anchor), Some(plain_text_body(link_text)))
}

/// Builds a page link whose visible content is arbitrary rich content, such
/// as an image.
pub fn build_page_link_with_body(
    page_title: &str,
    content: impl IntoIterator<Item = Content>,
) -> Node {
    let body = Node::with(QName::structure("link-body"), content);
    link_to_page(page_title, None, Some(body))
}

/// Shared core for every page-link shape. The page reference and the
/// anchor-omission rule are defined here and nowhere else.
fn link_to_page(page_title: &str, anchor: Option<&str>, body: Option<Node>) -> Node {
    let anchor = anchor.filter(|a| !a.is_empty());

    Node::with(
        QName::structure("link"),
        [
            anchor
                .map(|a| Attribute::new(QName::structure("anchor"), a))
                .into(),
            Node::with(
                QName::resource("page"),
                [Content::from(Attribute::new(
                    QName::resource("content-title"),
                    page_title,
                ))],
            )
            .into(),
            body.into(),
        ],
    )
}

fn plain_text_body(text: &str) -> Node {
    Node::with(
        QName::structure("plain-text-link-body"),
        [Content::cdata(text)],
    )
}
