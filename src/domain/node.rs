//! The immutable element/attribute tree the builders assemble.

use crate::domain::QName;

/// A namespace-qualified name/value pair attached to exactly one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: QName,
    value: String,
}

impl Attribute {
    /// Creates a new attribute.
    pub fn new(name: QName, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }

    /// Returns the qualified attribute name.
    pub fn name(&self) -> &QName {
        &self.name
    }

    /// Returns the attribute value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A child of an element: a nested element, escaped text, or a literal CDATA
/// block that reaches the output verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    Element(Node),
    Text(String),
    Cdata(String),
}

/// Ordered content fed to [`Node::with`].
///
/// `Nothing` marks an omitted optional argument; it is dropped during
/// assembly, so callers pass conditional attributes and children directly
/// instead of branching around them. `From` conversions exist for nodes,
/// attributes, strings, and `Option`s of any of those.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Element(Node),
    Text(String),
    Cdata(String),
    Attr(Attribute),
    Nothing,
}

impl Content {
    /// A literal CDATA block; markup characters inside are preserved
    /// verbatim rather than escaped.
    pub fn cdata(text: impl Into<String>) -> Self {
        Content::Cdata(text.into())
    }
}

impl From<Node> for Content {
    fn from(node: Node) -> Self {
        Content::Element(node)
    }
}

impl From<Attribute> for Content {
    fn from(attr: Attribute) -> Self {
        Content::Attr(attr)
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl<C: Into<Content>> From<Option<C>> for Content {
    fn from(opt: Option<C>) -> Self {
        match opt {
            Some(content) => content.into(),
            None => Content::Nothing,
        }
    }
}

/// A namespace-qualified element with ordered attributes and ordered
/// children.
///
/// Nodes are built bottom-up and never mutated after being returned;
/// embedding a node in a parent moves it there. Equality is structural
/// (deep).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: QName,
    attributes: Vec<Attribute>,
    children: Vec<Child>,
}

impl Node {
    /// Creates an element with no attributes and no children.
    pub fn new(name: QName) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates an element from ordered content.
    ///
    /// Attributes are pulled out of the stream in order; `Nothing` entries
    /// and empty text are dropped silently; the order of the remaining
    /// children is preserved. This lets callers pass optional arguments
    /// inline:
    ///
    /// ```
    /// use macrodoc::domain::{Attribute, Content, Node, QName};
    ///
    /// let width: Option<&str> = None;
    /// let cell = Node::with(
    ///     QName::plain("td"),
    ///     [
    ///         width.map(|w| Attribute::new(QName::plain("width"), w)).into(),
    ///         Content::from("total"),
    ///     ],
    /// );
    /// assert!(cell.attributes().is_empty());
    /// assert_eq!(cell.text(), "total");
    /// ```
    pub fn with(name: QName, content: impl IntoIterator<Item = Content>) -> Self {
        let mut attributes = Vec::new();
        let mut children = Vec::new();

        for part in content {
            match part {
                Content::Element(node) => children.push(Child::Element(node)),
                Content::Text(text) if text.is_empty() => {}
                Content::Text(text) => children.push(Child::Text(text)),
                Content::Cdata(text) => children.push(Child::Cdata(text)),
                Content::Attr(attr) => attributes.push(attr),
                Content::Nothing => {}
            }
        }

        Self {
            name,
            attributes,
            children,
        }
    }

    /// Returns the qualified element name.
    pub fn name(&self) -> &QName {
        &self.name
    }

    /// Returns the attributes in insertion order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Returns the children in insertion order.
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// Returns the value of the named attribute, if present.
    pub fn attribute(&self, name: &QName) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name() == name)
            .map(|attr| attr.value())
    }

    /// Returns the child elements, skipping text and CDATA leaves.
    pub fn child_elements(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter_map(|child| match child {
            Child::Element(node) => Some(node),
            _ => None,
        })
    }

    /// Returns the concatenated text of the direct text and CDATA children.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                Child::Text(text) | Child::Cdata(text) => out.push_str(text),
                Child::Element(_) => {}
            }
        }
        out
    }
}
