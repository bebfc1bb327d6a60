// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the component tree.
//!
//! This module contains message types for logging events related to:
//! * Name resolution misses
//! * Applied merges
//! * Component insertion at the root
//! * Duplicate component names

use crate::model::FieldKey;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A component name did not resolve anywhere in the tree.
///
/// # Log Level
/// `debug!` - Misses are part of the normal contract and never surfaced as errors
///
/// # Example
/// ```
/// use remote_model::observability::messages::model::ComponentNotFound;
/// use remote_model::model::FieldKey;
///
/// let msg = ComponentNotFound {
///     component: "save",
///     field: Some(FieldKey::State),
/// };
///
/// assert_eq!(msg.to_string(), "Component 'save' not found (field state)");
/// ```
pub struct ComponentNotFound<'a> {
    pub component: &'a str,
    pub field: Option<FieldKey>,
}

impl Display for ComponentNotFound<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.field {
            Some(field) => write!(
                f,
                "Component '{}' not found (field {})",
                self.component, field
            ),
            None => write!(f, "Component '{}' not found", self.component),
        }
    }
}

impl StructuredLog for ComponentNotFound<'_> {
    fn log(&self) {
        tracing::debug!(
            component = self.component,
            field = ?self.field,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "component_not_found",
            span_name = name,
            component = self.component,
            field = ?self.field,
        )
    }
}

/// A partial value was merged into a component field.
///
/// # Log Level
/// `trace!` - Fires on every mutation
///
/// # Example
/// ```
/// use remote_model::observability::messages::model::FieldMerged;
/// use remote_model::model::FieldKey;
///
/// let msg = FieldMerged {
///     component: "save",
///     field: FieldKey::Props,
///     depth: 2,
/// };
///
/// tracing::trace!("{}", msg);
/// ```
pub struct FieldMerged<'a> {
    pub component: &'a str,
    pub field: FieldKey,
    pub depth: usize,
}

impl Display for FieldMerged<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Merged {} of component '{}' at depth {}",
            self.field, self.component, self.depth
        )
    }
}

impl StructuredLog for FieldMerged<'_> {
    fn log(&self) {
        tracing::trace!(
            component = self.component,
            field = %self.field,
            depth = self.depth,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "field_merged",
            span_name = name,
            component = self.component,
            field = %self.field,
            depth = self.depth,
        )
    }
}

/// A component was appended to the root.
///
/// # Log Level
/// `debug!` - Routine structural change
pub struct ComponentAdded<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub kind: Option<&'a str>,
    pub position: usize,
}

impl Display for ComponentAdded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Added component '{}' (id '{}', type {}) at root position {}",
            self.name,
            self.id,
            self.kind.unwrap_or("<none>"),
            self.position
        )
    }
}

impl StructuredLog for ComponentAdded<'_> {
    fn log(&self) {
        tracing::debug!(
            id = self.id,
            component = self.name,
            kind = self.kind.unwrap_or_default(),
            position = self.position,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "component_added",
            span_name = name,
            id = self.id,
            component = self.name,
            position = self.position,
        )
    }
}

/// A component was added under a name that already resolves; the new node is shadowed.
///
/// # Log Level
/// `warn!` - The new component cannot be reached by name
///
/// # Example
/// ```
/// use remote_model::observability::messages::model::DuplicateComponentName;
///
/// let msg = DuplicateComponentName {
///     id: "comp-9",
///     name: "save",
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct DuplicateComponentName<'a> {
    pub id: &'a str,
    pub name: &'a str,
}

impl Display for DuplicateComponentName<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Component '{}' reuses name '{}'; lookups will keep returning the earlier component",
            self.id, self.name
        )
    }
}

impl StructuredLog for DuplicateComponentName<'_> {
    fn log(&self) {
        tracing::warn!(
            id = self.id,
            component = self.name,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "duplicate_component_name",
            span_name = name,
            id = self.id,
            component = self.name,
        )
    }
}

/// A component was refused because its name already resolves.
///
/// # Log Level
/// `error!` - The insertion failed
pub struct DuplicateComponentRejected<'a> {
    pub id: &'a str,
    pub name: &'a str,
}

impl Display for DuplicateComponentRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Rejected component '{}': name '{}' is already in use",
            self.id, self.name
        )
    }
}

impl StructuredLog for DuplicateComponentRejected<'_> {
    fn log(&self) {
        tracing::error!(
            id = self.id,
            component = self.name,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "duplicate_component_rejected",
            span_name = name,
            id = self.id,
            component = self.name,
        )
    }
}
