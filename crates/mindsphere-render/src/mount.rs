//! Containers that rendered sections are appended to.

use crate::node::{Element, Node};

/// A root container accepting rendered nodes.
pub trait Mount {
    /// Append a node after any existing content.
    fn append(&mut self, node: Node);
}

impl Mount for Vec<Node> {
    fn append(&mut self, node: Node) {
        self.push(node);
    }
}

impl Mount for Element {
    fn append(&mut self, node: Node) {
        self.children.push(node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_mount_keeps_existing_children() {
        let mut root = Element::new("main").child(Element::with_text("header", "static"));
        root.append(Element::with_text("section", "rendered").into());

        assert_eq!(root.children.len(), 2);
        assert_eq!(root.text_content(), "staticrendered");
    }
}
