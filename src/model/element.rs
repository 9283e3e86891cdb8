//! Input element tree types.

use std::collections::HashMap;

/// A content node directly inside an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentNode {
    /// Character data as written in the source, entity references still escaped.
    Text(String),
    /// The inside of a `<![CDATA[ ... ]]>` section, never entity-decoded.
    CData(String),
}

/// One element of the markup tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    /// Qualified tag name (e.g. `line`, `svg:rect`)
    pub name: String,

    /// Attribute values, entity-decoded
    pub attributes: HashMap<String, String>,

    /// Child elements in document order
    pub children: Vec<Element>,

    /// Text and CDATA nodes in document order
    pub content: Vec<ContentNode>,
}

impl Element {
    /// Create an element with no attributes or content.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Builder-style attribute setter.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Builder-style child appender.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Builder-style text node appender.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.push_text(&text.into());
        self
    }

    /// Builder-style CDATA node appender.
    pub fn with_cdata(mut self, text: impl Into<String>) -> Self {
        self.content.push(ContentNode::CData(text.into()));
        self
    }

    /// Get an attribute value.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Check if an attribute is present.
    pub fn has_attribute(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    /// Append raw text, merging with a trailing text node.
    pub fn push_text(&mut self, raw: &str) {
        if let Some(ContentNode::Text(last)) = self.content.last_mut() {
            last.push_str(raw);
        } else {
            self.content.push(ContentNode::Text(raw.to_string()));
        }
    }

    /// Total number of elements in this subtree, including self.
    pub fn subtree_len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(element) = stack.pop() {
            count += 1;
            stack.extend(element.children.iter());
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_text_merges() {
        let mut element = Element::new("style");
        element.push_text("a ");
        element.push_text("&gt;");
        element.content.push(ContentNode::CData("x".to_string()));
        element.push_text("b");

        assert_eq!(
            element.content,
            vec![
                ContentNode::Text("a &gt;".to_string()),
                ContentNode::CData("x".to_string()),
                ContentNode::Text("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_builder_and_lookup() {
        let element = Element::new("g")
            .with_attribute("id", "layer")
            .with_child(Element::new("line"))
            .with_child(Element::new("rect").with_child(Element::new("title")));

        assert_eq!(element.attribute("id"), Some("layer"));
        assert!(!element.has_attribute("class"));
        assert_eq!(element.subtree_len(), 4);
    }
}
