//! XML element structures

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An element of a parsed XML document.
///
/// Attribute order is preserved so transition tables keep their
/// declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmlElement {
    /// Element tag name.
    pub name: String,
    /// Attributes, unescaped, in declaration order.
    pub attributes: IndexMap<String, String>,
    /// Child elements in document order.
    pub children: Vec<XmlElement>,
    /// Concatenated text content (trimmed).
    pub text: String,
}

impl XmlElement {
    /// Creates an empty element with the given tag name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    #[cfg(test)]
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    #[cfg(test)]
    #[must_use]
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    /// Get an attribute value by name
    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Iterate over direct children with the given tag name
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// First direct child with the given tag name
    #[must_use]
    pub fn first_child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_named_filters_by_tag() {
        let el = XmlElement::new("task-node")
            .with_child(XmlElement::new("transition").with_attr("to", "a"))
            .with_child(XmlElement::new("task").with_attr("name", "x"))
            .with_child(XmlElement::new("transition").with_attr("to", "b"));

        let targets: Vec<_> = el
            .children_named("transition")
            .filter_map(|t| t.attr("to"))
            .collect();
        assert_eq!(targets, vec!["a", "b"]);
        assert_eq!(el.first_child("task").and_then(|t| t.attr("name")), Some("x"));
        assert!(el.first_child("decision").is_none());
    }
}
