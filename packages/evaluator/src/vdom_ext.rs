//! # VDOM helpers
//!
//! Pattern-matching and query helpers over [`VNode`] trees, built on the
//! [`Visitor`] trait.
//!
//! ```rust,ignore
//! use apiview_evaluator::vdom_ext::{collect_links, find_by_class};
//!
//! let footer = find_by_class(&vdom.nodes, "footer").unwrap();
//! for link in collect_links(std::slice::from_ref(footer)) {
//!     println!("{} -> {}", link.label, link.href);
//! }
//! ```

use crate::vdom::VNode;
use crate::visitor::{walk_nodes, Visitor};
use std::collections::BTreeMap;

/// Borrowed view of an element node
#[derive(Debug, Clone, Copy)]
pub struct ElementRef<'a> {
    pub tag: &'a str,
    pub attributes: &'a BTreeMap<String, String>,
    pub children: &'a [VNode],
}

impl<'a> ElementRef<'a> {
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }
}

/// A rendered anchor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRef {
    pub href: String,
    pub label: String,
}

pub fn as_element(node: &VNode) -> Option<ElementRef<'_>> {
    match node {
        VNode::Element {
            tag,
            attributes,
            children,
        } => Some(ElementRef {
            tag,
            attributes,
            children,
        }),
        VNode::Text { .. } => None,
    }
}

struct TextCollector {
    buffer: String,
}

impl Visitor for TextCollector {
    fn visit_text(&mut self, content: &str) {
        self.buffer.push_str(content);
    }
}

/// Concatenated text of a subtree
pub fn text_content(node: &VNode) -> String {
    let mut collector = TextCollector {
        buffer: String::new(),
    };
    collector.visit_node(node);
    collector.buffer
}

/// First element (depth-first) carrying `class`
pub fn find_by_class<'a>(nodes: &'a [VNode], class: &str) -> Option<&'a VNode> {
    for node in nodes {
        if as_element(node).is_some_and(|el| el.has_class(class)) {
            return Some(node);
        }
        if let VNode::Element { children, .. } = node {
            if let Some(found) = find_by_class(children, class) {
                return Some(found);
            }
        }
    }
    None
}

/// Every element (depth-first) with the given tag
pub fn find_all_by_tag<'a>(nodes: &'a [VNode], tag: &str) -> Vec<&'a VNode> {
    let mut found = Vec::new();
    for node in nodes {
        if let VNode::Element {
            tag: node_tag,
            children,
            ..
        } = node
        {
            if node_tag == tag {
                found.push(node);
            }
            found.extend(find_all_by_tag(children, tag));
        }
    }
    found
}

struct LinkCollector {
    links: Vec<LinkRef>,
}

impl Visitor for LinkCollector {
    fn visit_element(
        &mut self,
        tag: &str,
        attributes: &BTreeMap<String, String>,
        children: &[VNode],
    ) {
        if tag == "a" {
            if let Some(href) = attributes.get("href") {
                let label = children.iter().map(text_content).collect();
                self.links.push(LinkRef {
                    href: href.clone(),
                    label,
                });
            }
        }
        walk_nodes(self, children);
    }
}

/// Every anchor with an `href`, in document order
pub fn collect_links(nodes: &[VNode]) -> Vec<LinkRef> {
    let mut collector = LinkCollector { links: Vec::new() };
    walk_nodes(&mut collector, nodes);
    collector.links
}
