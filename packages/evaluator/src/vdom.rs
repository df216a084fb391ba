use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Virtual DOM node
///
/// Inert description of a UI element. Attributes are ordered so the same
/// input always serializes to the same output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VNode {
    /// HTML element
    Element {
        tag: String,
        attributes: BTreeMap<String, String>,
        children: Vec<VNode>,
    },

    /// Text node
    Text { content: String },
}

impl VNode {
    pub fn element(tag: impl Into<String>) -> Self {
        VNode::Element {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        VNode::Text {
            content: content.into(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element {
            ref mut attributes, ..
        } = self
        {
            attributes.insert(key.into(), value.into());
        }
        self
    }

    /// Append a class to the `class` attribute
    pub fn with_class(mut self, class: impl AsRef<str>) -> Self {
        if let VNode::Element {
            ref mut attributes, ..
        } = self
        {
            let class = class.as_ref();
            attributes
                .entry("class".to_string())
                .and_modify(|existing| {
                    if !existing.split_whitespace().any(|c| c == class) {
                        existing.push(' ');
                        existing.push_str(class);
                    }
                })
                .or_insert_with(|| class.to_string());
        }
        self
    }

    pub fn with_child(mut self, child: VNode) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: impl IntoIterator<Item = VNode>) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.extend(new_children);
        }
        self
    }

    /// Append the child when present
    pub fn with_optional_child(self, child: Option<VNode>) -> Self {
        match child {
            Some(child) => self.with_child(child),
            None => self,
        }
    }
}

/// Virtual Document (collection of root nodes)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VirtualDomDocument {
    pub nodes: Vec<VNode>,
}

impl VirtualDomDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: VNode) {
        self.nodes.push(node);
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_class_appends() {
        let node = VNode::element("div")
            .with_class("info")
            .with_class("extra")
            .with_class("info");

        match node {
            VNode::Element { attributes, .. } => {
                assert_eq!(attributes.get("class").map(String::as_str), Some("info extra"));
            }
            _ => panic!("Expected element"),
        }
    }

    #[test]
    fn test_builders_ignore_text_nodes() {
        let node = VNode::text("hello").with_attr("id", "x").with_child(VNode::text("y"));
        assert_eq!(node, VNode::text("hello"));
    }

    #[test]
    fn test_serializes_with_type_tag() {
        let node = VNode::element("a").with_attr("href", "/x").with_child(VNode::text("x"));
        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(json["type"], "Element");
        assert_eq!(json["tag"], "a");
        assert_eq!(json["attributes"]["href"], "/x");
        assert_eq!(json["children"][0]["type"], "Text");
    }
}
