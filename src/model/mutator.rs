// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Read and partially merge values at a resolved path.
//!
//! Both operations resolve the target by name through [`crate::model::path`].
//! A name that does not resolve is never an error: `read` returns `None` and
//! `merge` reports [`MergeOutcome::NotFound`] without touching the tree or
//! notifying anyone.
//!
//! # Merge semantics
//! * Mapping fields (`state`, `data`, `props`, `layout`) are shallow-merged key
//!   by key: new keys are added, existing keys overwritten, untouched keys kept.
//! * The `events` sequence is appended to.

use crate::events::EventBinding;
use crate::model::path::{node_at, node_at_mut, resolve};
use crate::model::{ComponentNode, FieldKey, Mapping};
use crate::observability::messages::model::{ComponentNotFound, FieldMerged};
use crate::observability::messages::StructuredLog;
use serde::Serialize;

/// A borrowed view of whatever a read resolved to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldRef<'a> {
    /// No field was requested: the whole node.
    Node(&'a ComponentNode),
    Mapping(&'a Mapping),
    Events(&'a [EventBinding]),
}

impl<'a> FieldRef<'a> {
    pub fn as_node(self) -> Option<&'a ComponentNode> {
        match self {
            FieldRef::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_mapping(self) -> Option<&'a Mapping> {
        match self {
            FieldRef::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    pub fn as_events(self) -> Option<&'a [EventBinding]> {
        match self {
            FieldRef::Events(events) => Some(events),
            _ => None,
        }
    }
}

/// A partial value destined for one field of a node.
///
/// The variant fixes both the target field and the merge rule, so a mapping can
/// never be appended to `events` nor a binding merged into `state`. Serializes
/// as the bare partial value, which is what a host forwards to the remote surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldPatch {
    State(Mapping),
    Data(Mapping),
    Props(Mapping),
    Layout(Mapping),
    Events(EventBinding),
}

impl FieldPatch {
    /// Wrap `entries` as a patch for the mapping field `field`.
    ///
    /// Returns `None` for `FieldKey::Events`, which only takes a binding.
    pub fn entries(field: FieldKey, entries: Mapping) -> Option<Self> {
        match field {
            FieldKey::State => Some(FieldPatch::State(entries)),
            FieldKey::Data => Some(FieldPatch::Data(entries)),
            FieldKey::Props => Some(FieldPatch::Props(entries)),
            FieldKey::Layout => Some(FieldPatch::Layout(entries)),
            FieldKey::Events => None,
        }
    }

    pub fn field(&self) -> FieldKey {
        match self {
            FieldPatch::State(_) => FieldKey::State,
            FieldPatch::Data(_) => FieldKey::Data,
            FieldPatch::Props(_) => FieldKey::Props,
            FieldPatch::Layout(_) => FieldKey::Layout,
            FieldPatch::Events(_) => FieldKey::Events,
        }
    }

    fn apply_to(&self, node: &mut ComponentNode) {
        match self {
            FieldPatch::Events(binding) => node.events.push(binding.clone()),
            FieldPatch::State(entries)
            | FieldPatch::Data(entries)
            | FieldPatch::Props(entries)
            | FieldPatch::Layout(entries) => {
                if let Some(target) = node.mapping_mut(self.field()) {
                    shallow_merge(target, entries);
                }
            }
        }
    }
}

/// Result of a merge.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The partial value was written and the listener notified.
    Applied,
    /// No component carries the requested name; nothing changed.
    NotFound,
}

impl MergeOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, MergeOutcome::Applied)
    }
}

fn shallow_merge(target: &mut Mapping, entries: &Mapping) {
    for (key, value) in entries {
        target.insert(key.clone(), value.clone());
    }
}

/// Read the component called `target`, or one of its fields.
pub fn read<'a>(root: &'a ComponentNode, target: &str, field: Option<FieldKey>) -> Option<FieldRef<'a>> {
    let Some(path) = resolve(root, target, field) else {
        ComponentNotFound {
            component: target,
            field,
        }
        .log();
        return None;
    };
    let node = node_at(root, &path)?;

    match path.field() {
        None => Some(FieldRef::Node(node)),
        Some(FieldKey::Events) => Some(FieldRef::Events(&node.events)),
        Some(key) => node.mapping(key).map(FieldRef::Mapping),
    }
}

/// Merge `patch` into the component called `target`.
///
/// On success `notify` is called once, synchronously, with the component name,
/// the field and the patch. On a miss it is not called at all.
pub fn merge<F>(root: &mut ComponentNode, target: &str, patch: &FieldPatch, notify: F) -> MergeOutcome
where
    F: FnOnce(&str, FieldKey, &FieldPatch),
{
    let field = patch.field();
    let Some(path) = resolve(root, target, Some(field)) else {
        ComponentNotFound {
            component: target,
            field: Some(field),
        }
        .log();
        return MergeOutcome::NotFound;
    };
    let Some(node) = node_at_mut(root, &path) else {
        return MergeOutcome::NotFound;
    };

    patch.apply_to(node);

    FieldMerged {
        component: target,
        field,
        depth: path.depth(),
    }
    .log();

    notify(target, field, patch);
    MergeOutcome::Applied
}
