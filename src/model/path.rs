// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Name-based path resolution over the component tree.
//!
//! A [`ComponentPath`] is a sequence of typed steps from the root to a node,
//! optionally ending in the field that was asked for. Resolution is a
//! depth-first, pre-order search over `children` in insertion order, and the
//! first node whose name matches wins.
//!
//! # Duplicate names
//! Names are expected to be unique. When they are not, the pre-order-first node
//! shadows every later one: nothing can reach the others by name.
//!
//! # Example
//! ```
//! use remote_model::ComponentNode;
//! use remote_model::model::path::{resolve, PathStep};
//! use remote_model::model::FieldKey;
//!
//! let root: ComponentNode = serde_json::from_str(r#"{
//!     "type": "Container",
//!     "children": [
//!         { "compName": "header", "type": "Text" },
//!         { "compName": "form", "type": "Container", "children": [
//!             { "compName": "save", "type": "Button" }
//!         ]}
//!     ]
//! }"#).unwrap();
//!
//! let path = resolve(&root, "save", Some(FieldKey::State)).unwrap();
//! assert_eq!(
//!     path.steps(),
//!     &[PathStep::Child(1), PathStep::Child(0), PathStep::Field(FieldKey::State)]
//! );
//! assert!(resolve(&root, "missing", None).is_none());
//! ```

use crate::model::ComponentNode;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// The closed set of node fields reachable through the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    State,
    Data,
    Props,
    Layout,
    Events,
}

impl FieldKey {
    pub const ALL: [FieldKey; 5] = [
        FieldKey::State,
        FieldKey::Data,
        FieldKey::Props,
        FieldKey::Layout,
        FieldKey::Events,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::State => "state",
            FieldKey::Data => "data",
            FieldKey::Props => "props",
            FieldKey::Layout => "layout",
            FieldKey::Events => "events",
        }
    }

    /// `true` for fields merged by appending rather than by key.
    pub fn is_sequence(&self) -> bool {
        matches!(self, FieldKey::Events)
    }
}

impl Display for FieldKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step of a resolved path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStep {
    /// Descend into `children[index]`.
    Child(usize),
    /// Select a field on the node reached so far. Only ever the last step.
    Field(FieldKey),
}

/// Location of a node (and optionally one of its fields) relative to the root.
///
/// An empty path addresses the root itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentPath(Vec<PathStep>);

impl ComponentPath {
    pub fn steps(&self) -> &[PathStep] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The field addressed by this path, if one was requested.
    pub fn field(&self) -> Option<FieldKey> {
        match self.0.last() {
            Some(PathStep::Field(field)) => Some(*field),
            _ => None,
        }
    }

    /// Child indices from the root down to the addressed node.
    pub fn child_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().filter_map(|step| match step {
            PathStep::Child(index) => Some(*index),
            PathStep::Field(_) => None,
        })
    }

    /// Nesting depth of the addressed node; the root is at depth 0.
    pub fn depth(&self) -> usize {
        self.child_indices().count()
    }
}

impl Display for ComponentPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<root>");
        }
        for (i, step) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            match step {
                PathStep::Child(index) => write!(f, "children[{}]", index)?,
                PathStep::Field(field) => write!(f, "{}", field)?,
            }
        }
        Ok(())
    }
}

/// Find the path to the component called `target`, optionally extended by `field`.
///
/// Returns `None` when no node at any depth carries that name.
pub fn resolve(root: &ComponentNode, target: &str, field: Option<FieldKey>) -> Option<ComponentPath> {
    let mut steps = Vec::new();
    if !locate(root, target, &mut steps) {
        return None;
    }
    if let Some(field) = field {
        steps.push(PathStep::Field(field));
    }
    Some(ComponentPath(steps))
}

// Pre-order: the node itself first, then each child subtree left to right.
// `steps` holds the child indices of the current descent and is unwound on a miss.
fn locate(node: &ComponentNode, target: &str, steps: &mut Vec<PathStep>) -> bool {
    if node.is_named(target) {
        return true;
    }
    for (index, child) in node.children.iter().enumerate() {
        steps.push(PathStep::Child(index));
        if locate(child, target, steps) {
            return true;
        }
        steps.pop();
    }
    false
}

/// Follow the child steps of `path` from `root`.
pub fn node_at<'a>(root: &'a ComponentNode, path: &ComponentPath) -> Option<&'a ComponentNode> {
    path.child_indices()
        .try_fold(root, |node, index| node.children.get(index))
}

pub fn node_at_mut<'a>(
    root: &'a mut ComponentNode,
    path: &ComponentPath,
) -> Option<&'a mut ComponentNode> {
    let mut node = root;
    for index in path.child_indices() {
        node = node.children.get_mut(index)?;
    }
    Some(node)
}
