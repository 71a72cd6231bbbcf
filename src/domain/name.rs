//! Namespace bindings and qualified names for the storage format.

use std::fmt;

/// A namespace binding used by the storage format.
///
/// The format qualifies its vocabulary with two fixed prefixes: `ac` for
/// macro-structure elements and `ri` for resource-reference elements. The
/// embedding document declares both bindings; this crate only emits names
/// already qualified with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ns {
    /// Macro-structure vocabulary (`ac`).
    Structure,
    /// Resource-reference vocabulary (`ri`).
    Resource,
}

impl Ns {
    /// Returns the prefix as written in the storage format.
    pub fn prefix(self) -> &'static str {
        match self {
            Ns::Structure => "ac",
            Ns::Resource => "ri",
        }
    }

    /// Returns the namespace URI the embedding document declares for this
    /// prefix.
    pub fn uri(self) -> &'static str {
        match self {
            Ns::Structure => "http://www.atlassian.com/schema/confluence/4/ac/",
            Ns::Resource => "http://www.atlassian.com/schema/confluence/4/ri/",
        }
    }
}

/// A namespace-qualified element or attribute name.
///
/// Builders construct these through [`QName::structure`], [`QName::resource`]
/// and [`QName::plain`], so prefix bookkeeping never leaks into higher-level
/// code. Unqualified names cover the XHTML portion of rich content.
///
/// # Examples
///
/// ```
/// use macrodoc::domain::QName;
///
/// let name = QName::structure("structured-macro");
/// assert_eq!(name.to_string(), "ac:structured-macro");
///
/// let plain = QName::plain("p");
/// assert_eq!(plain.to_string(), "p");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct QName {
    ns: Option<Ns>,
    local: String,
}

impl QName {
    /// Creates a macro-structure (`ac:`) name.
    pub fn structure(local: impl Into<String>) -> Self {
        Self {
            ns: Some(Ns::Structure),
            local: local.into(),
        }
    }

    /// Creates a resource-reference (`ri:`) name.
    pub fn resource(local: impl Into<String>) -> Self {
        Self {
            ns: Some(Ns::Resource),
            local: local.into(),
        }
    }

    /// Creates an unqualified name.
    pub fn plain(local: impl Into<String>) -> Self {
        Self {
            ns: None,
            local: local.into(),
        }
    }

    /// Returns the namespace binding, if any.
    pub fn ns(&self) -> Option<Ns> {
        self.ns
    }

    /// Returns the local part of the name.
    pub fn local(&self) -> &str {
        &self.local
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ns {
            Some(ns) => write!(f, "{}:{}", ns.prefix(), self.local),
            None => write!(f, "{}", self.local),
        }
    }
}

impl fmt::Debug for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QName(\"{}\")", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn structure_prefix_is_ac() {
        assert_eq!(Ns::Structure.prefix(), "ac");
    }

    #[test]
    fn resource_prefix_is_ri() {
        assert_eq!(Ns::Resource.prefix(), "ri");
    }

    #[test]
    fn uris_are_distinct() {
        assert_ne!(Ns::Structure.uri(), Ns::Resource.uri());
    }

    #[test]
    fn qualified_name_display() {
        assert_eq!(QName::structure("link").to_string(), "ac:link");
        assert_eq!(QName::resource("page").to_string(), "ri:page");
    }

    #[test]
    fn plain_name_display_has_no_prefix() {
        assert_eq!(QName::plain("td").to_string(), "td");
    }

    #[test]
    fn accessors() {
        let name = QName::resource("content-title");
        assert_eq!(name.ns(), Some(Ns::Resource));
        assert_eq!(name.local(), "content-title");
        assert_eq!(QName::plain("p").ns(), None);
    }

    #[test]
    fn equality_includes_namespace() {
        assert_eq!(QName::structure("link"), QName::structure("link"));
        assert_ne!(QName::structure("link"), QName::resource("link"));
        assert_ne!(QName::structure("link"), QName::plain("link"));
    }

    #[test]
    fn debug_format() {
        let name = QName::structure("parameter");
        assert_eq!(format!("{:?}", name), "QName(\"ac:parameter\")");
    }
}
