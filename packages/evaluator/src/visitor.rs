use crate::vdom::VNode;
use std::collections::BTreeMap;

/// Visitor pattern for traversing VDOM trees immutably
///
/// Default implementations walk the entire tree. Override specific
/// visit_* methods to act on nodes.
pub trait Visitor: Sized {
    fn visit_node(&mut self, node: &VNode) {
        walk_node(self, node);
    }

    fn visit_element(
        &mut self,
        _tag: &str,
        _attributes: &BTreeMap<String, String>,
        children: &[VNode],
    ) {
        for child in children {
            self.visit_node(child);
        }
    }

    fn visit_text(&mut self, _content: &str) {
        // Leaf node, no children to walk
    }
}

pub fn walk_node<V: Visitor>(visitor: &mut V, node: &VNode) {
    match node {
        VNode::Element {
            tag,
            attributes,
            children,
        } => visitor.visit_element(tag, attributes, children),
        VNode::Text { content } => visitor.visit_text(content),
    }
}

pub fn walk_nodes<V: Visitor>(visitor: &mut V, nodes: &[VNode]) {
    for node in nodes {
        visitor.visit_node(node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TagCounter {
        tags: Vec<String>,
    }

    impl Visitor for TagCounter {
        fn visit_element(
            &mut self,
            tag: &str,
            _attributes: &BTreeMap<String, String>,
            children: &[VNode],
        ) {
            self.tags.push(tag.to_string());
            walk_nodes(self, children);
        }
    }

    #[test]
    fn test_walks_depth_first() {
        let tree = VNode::element("div")
            .with_child(VNode::element("h2").with_child(VNode::text("T")))
            .with_child(VNode::element("ul").with_child(VNode::element("li")));

        let mut counter = TagCounter { tags: Vec::new() };
        counter.visit_node(&tree);

        assert_eq!(counter.tags, vec!["div", "h2", "ul", "li"]);
    }
}
