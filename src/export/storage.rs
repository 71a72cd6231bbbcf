//! Storage-format XML writer.

use std::io;
use std::string::FromUtf8Error;

use quick_xml::Writer;
use quick_xml::events::{BytesCData, BytesEnd, BytesStart, BytesText, Event};
use thiserror::Error;

use crate::domain::{Child, Node, Ns};

/// Errors while rendering a tree to storage-format text.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying writer failed.
    #[error("failed to write storage format: {0}")]
    Write(#[from] io::Error),

    /// The XML writer rejected an event.
    #[error("failed to serialize storage format: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The serialized output was not valid UTF-8.
    #[error("storage output was not valid UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),
}

/// Renders a node to compact storage-format XML.
///
/// Text and attribute values are escaped, CDATA blocks are emitted verbatim,
/// and childless elements are self-closed. The output uses the `ac:`/`ri:`
/// prefixes without declaring them: the embedding document owns the
/// declarations.
///
/// # Examples
///
/// ```
/// use macrodoc::export::to_storage;
/// use macrodoc::markup::build_toc;
///
/// let xml = to_storage(&build_toc()).unwrap();
/// assert_eq!(xml, r#"<ac:structured-macro ac:name="toc"/>"#);
/// ```
pub fn to_storage(node: &Node) -> Result<String, StorageError> {
    render(node, &[])
}

/// Renders a node as a standalone document.
///
/// Identical to [`to_storage`], except both namespace declarations are
/// placed on the root element so the output parses on its own.
pub fn to_standalone(node: &Node) -> Result<String, StorageError> {
    render(node, &[Ns::Structure, Ns::Resource])
}

fn render(node: &Node, declare: &[Ns]) -> Result<String, StorageError> {
    let mut writer = Writer::new(Vec::new());
    write_node(node, &mut writer, declare)?;
    Ok(String::from_utf8(writer.into_inner())?)
}

fn write_node<W: io::Write>(
    node: &Node,
    writer: &mut Writer<W>,
    declare: &[Ns],
) -> Result<(), StorageError> {
    let name = node.name().to_string();
    let mut start = BytesStart::new(name.as_str());

    for ns in declare {
        let declaration = format!("xmlns:{}", ns.prefix());
        start.push_attribute((declaration.as_str(), ns.uri()));
    }
    for attr in node.attributes() {
        let attr_name = attr.name().to_string();
        start.push_attribute((attr_name.as_str(), attr.value()));
    }

    if node.children().is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for child in node.children() {
        match child {
            Child::Element(element) => write_node(element, writer, &[])?,
            Child::Text(text) => writer.write_event(Event::Text(BytesText::new(text.as_str())))?,
            Child::Cdata(text) => writer.write_event(Event::CData(BytesCData::new(text.as_str())))?,
        }
    }
    writer.write_event(Event::End(BytesEnd::new(name.as_str())))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Attribute, Content, QName, StatusColor};
    use crate::markup::{
        build_body, build_column, build_emoticon, build_image, build_page_link,
        build_page_link_with_anchor, build_status, build_toc,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn childless_elements_self_close() {
        let xml = to_storage(&build_toc()).unwrap();
        assert_eq!(xml, r#"<ac:structured-macro ac:name="toc"/>"#);
    }

    #[test]
    fn status_serializes_with_ordered_parameters() {
        let xml = to_storage(&build_status("Passed", StatusColor::Green, false)).unwrap();
        assert_eq!(
            xml,
            "<ac:structured-macro ac:name=\"status\">\
             <ac:parameter ac:name=\"subtle\">false</ac:parameter>\
             <ac:parameter ac:name=\"colour\">Green</ac:parameter>\
             <ac:parameter ac:name=\"title\">Passed</ac:parameter>\
             </ac:structured-macro>"
        );
    }

    #[test]
    fn text_children_are_escaped() {
        let node = Node::with(QName::plain("p"), [Content::from("5 < 10 && 10 > 5")]);
        let xml = to_storage(&node).unwrap();
        assert_eq!(xml, "<p>5 &lt; 10 &amp;&amp; 10 &gt; 5</p>");
    }

    #[test]
    fn attribute_values_are_escaped() {
        let node = Node::with(
            QName::plain("span"),
            [Attribute::new(QName::plain("title"), "a & b").into()],
        );
        let xml = to_storage(&node).unwrap();
        assert_eq!(xml, r#"<span title="a &amp; b"/>"#);
    }

    #[test]
    fn cdata_is_emitted_verbatim() {
        let link = build_page_link_with_anchor("Home", "Section1", "<b>Click</b>");
        let xml = to_storage(&link).unwrap();
        assert_eq!(
            xml,
            "<ac:link ac:anchor=\"Section1\">\
             <ri:page ri:content-title=\"Home\"/>\
             <ac:plain-text-link-body><![CDATA[<b>Click</b>]]></ac:plain-text-link-body>\
             </ac:link>"
        );
    }

    #[test]
    fn bare_page_link_serializes_reference_only() {
        let xml = to_storage(&build_page_link("Home")).unwrap();
        assert_eq!(
            xml,
            r#"<ac:link><ri:page ri:content-title="Home"/></ac:link>"#
        );
    }

    #[test]
    fn image_serializes_resource_reference() {
        let xml = to_storage(&build_image("http://example.com/icon.png")).unwrap();
        assert_eq!(
            xml,
            r#"<ac:image><ri:url ri:value="http://example.com/icon.png"/></ac:image>"#
        );
    }

    #[test]
    fn column_body_follows_width_parameter() {
        let body = build_body([Node::with(QName::plain("p"), [Content::from("x")]).into()]);
        let xml = to_storage(&build_column(Some("300px"), body).unwrap()).unwrap();
        assert_eq!(
            xml,
            "<ac:structured-macro ac:name=\"column\">\
             <ac:parameter ac:name=\"width\">300px</ac:parameter>\
             <ac:rich-text-body><p>x</p></ac:rich-text-body>\
             </ac:structured-macro>"
        );
    }

    #[test]
    fn standalone_declares_both_namespaces_on_root_only() {
        let xml = to_standalone(&build_emoticon("yellow-star")).unwrap();
        assert_eq!(
            xml,
            "<ac:emoticon \
             xmlns:ac=\"http://www.atlassian.com/schema/confluence/4/ac/\" \
             xmlns:ri=\"http://www.atlassian.com/schema/confluence/4/ri/\" \
             ac:name=\"yellow-star\"/>"
        );

        let nested = to_standalone(&build_image("u")).unwrap();
        assert_eq!(nested.matches("xmlns:ac").count(), 1);
    }
}
