// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Whole-tree queries.
//!
//! Candidates are the leaves of the tree in pre-order: a node with children
//! contributes only its descendants, never itself. An empty root is its own
//! single leaf.

use crate::model::ComponentNode;

fn visit_leaves<'a, F>(node: &'a ComponentNode, visit: &mut F)
where
    F: FnMut(&'a ComponentNode),
{
    if node.is_leaf() {
        visit(node);
        return;
    }
    for child in &node.children {
        visit_leaves(child, visit);
    }
}

/// Every leaf component whose `type` equals `kind`, in pre-order, in one walk.
pub fn components_by_type<'a>(root: &'a ComponentNode, kind: &str) -> Vec<&'a ComponentNode> {
    let mut matches = Vec::new();
    visit_leaves(root, &mut |node| {
        if node.kind.as_deref() == Some(kind) {
            matches.push(node);
        }
    });
    matches
}

/// Names of the leaf components in pre-order. Unnamed leaves are skipped.
pub fn component_names(root: &ComponentNode) -> Vec<&str> {
    let mut names = Vec::new();
    visit_leaves(root, &mut |node| {
        if let Some(name) = node.name.as_deref() {
            names.push(name);
        }
    });
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ComponentDescriptor;

    fn leaf(name: &str, kind: &str) -> ComponentNode {
        ComponentNode::from_descriptor(name, ComponentDescriptor::new(kind))
    }

    fn group(name: &str, children: Vec<ComponentNode>) -> ComponentNode {
        let mut node = leaf(name, "Container");
        node.children = children;
        node
    }

    // root
    // ├── title (Text)
    // ├── form
    // │   ├── ok (Button)
    // │   └── row
    // │       └── cancel (Button)
    // └── spacer (Container, empty)
    fn tree() -> ComponentNode {
        let mut root = ComponentNode::root();
        root.children = vec![
            leaf("title", "Text"),
            group(
                "form",
                vec![leaf("ok", "Button"), group("row", vec![leaf("cancel", "Button")])],
            ),
            leaf("spacer", "Container"),
        ];
        root
    }

    #[test]
    fn buttons_at_different_depths_in_pre_order() {
        let root = tree();
        let names: Vec<_> = components_by_type(&root, "Button")
            .into_iter()
            .filter_map(|node| node.name.as_deref())
            .collect();
        assert_eq!(names, vec!["ok", "cancel"]);
    }

    #[test]
    fn containers_with_children_are_not_candidates() {
        let root = tree();
        let names: Vec<_> = components_by_type(&root, "Container")
            .into_iter()
            .filter_map(|node| node.name.as_deref())
            .collect();
        assert_eq!(names, vec!["spacer"]);
    }

    #[test]
    fn unknown_type_yields_nothing() {
        assert!(components_by_type(&tree(), "Slider").is_empty());
    }

    #[test]
    fn names_are_leaves_in_pre_order() {
        assert_eq!(component_names(&tree()), vec!["title", "ok", "cancel", "spacer"]);
    }

    #[test]
    fn empty_root_is_its_own_leaf() {
        let root = ComponentNode::root();
        assert_eq!(components_by_type(&root, "Container").len(), 1);
        assert!(component_names(&root).is_empty());
    }
}
