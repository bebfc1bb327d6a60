// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::DEFAULT_ROOT_TYPE;
use crate::events::EventBinding;
use crate::model::FieldKey;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Key/value storage for the `state`, `data`, `props` and `layout` fields.
pub type Mapping = Map<String, Value>;

/// A single component in the document tree.
///
/// Nodes serialize with the keys the rendering runtime reads (`compId`,
/// `compName`, `type`, ...). Missing mapping fields deserialize as empty
/// mappings and missing `events`/`children` as empty sequences, so a partial
/// document loads cleanly. An explicit `null` is treated the same as a
/// missing key. `children` is always serialized, so an empty root still ships
/// `children: []`.
///
/// `name` is the lookup key for every getter and setter and is expected to be
/// unique across the tree. The root is a container that normally carries
/// neither an id nor a name.
///
/// # Example
/// ```
/// use remote_model::ComponentNode;
///
/// let node: ComponentNode = serde_json::from_str(
///     r#"{ "compId": "comp-1", "compName": "title", "type": "Text" }"#,
/// ).unwrap();
///
/// assert_eq!(node.name.as_deref(), Some("title"));
/// assert!(node.props.is_empty());
/// assert!(node.children.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentNode {
    #[serde(rename = "compId", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "compName", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: Mapping,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Mapping,
    #[serde(default, deserialize_with = "null_as_default")]
    pub props: Mapping,
    #[serde(default, deserialize_with = "null_as_default")]
    pub layout: Mapping,
    #[serde(default, deserialize_with = "null_as_default")]
    pub events: Vec<EventBinding>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<ComponentNode>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ComponentNode {
    /// An empty, unnamed container of the given type.
    pub fn container(kind: impl Into<String>) -> Self {
        Self {
            id: None,
            name: None,
            kind: Some(kind.into()),
            state: Mapping::new(),
            data: Mapping::new(),
            props: Mapping::new(),
            layout: Mapping::new(),
            events: Vec::new(),
            children: Vec::new(),
        }
    }

    /// The default document root: an empty `Container`.
    pub fn root() -> Self {
        Self::container(DEFAULT_ROOT_TYPE)
    }

    /// Build a node from an `add_component` descriptor.
    ///
    /// `name` falls back to `id`; absent mappings and events become empty. The
    /// type is copied as given and may be `None`.
    pub fn from_descriptor(id: impl Into<String>, descriptor: ComponentDescriptor) -> Self {
        let id = id.into();
        Self {
            name: Some(descriptor.name.unwrap_or_else(|| id.clone())),
            id: Some(id),
            kind: descriptor.kind,
            state: descriptor.state.unwrap_or_default(),
            data: descriptor.data.unwrap_or_default(),
            props: descriptor.props.unwrap_or_default(),
            layout: descriptor.layout.unwrap_or_default(),
            events: descriptor.events.unwrap_or_default(),
            children: Vec::new(),
        }
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The mapping behind `field`, or `None` for `events`.
    pub fn mapping(&self, field: FieldKey) -> Option<&Mapping> {
        match field {
            FieldKey::State => Some(&self.state),
            FieldKey::Data => Some(&self.data),
            FieldKey::Props => Some(&self.props),
            FieldKey::Layout => Some(&self.layout),
            FieldKey::Events => None,
        }
    }

    pub fn mapping_mut(&mut self, field: FieldKey) -> Option<&mut Mapping> {
        match field {
            FieldKey::State => Some(&mut self.state),
            FieldKey::Data => Some(&mut self.data),
            FieldKey::Props => Some(&mut self.props),
            FieldKey::Layout => Some(&mut self.layout),
            FieldKey::Events => None,
        }
    }

    /// Number of nodes below this one, at any depth.
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }
}

/// Caller-supplied description of a component to add at the root.
///
/// Only `type` is expected by convention; everything else is optional and
/// defaulted by [`ComponentNode::from_descriptor`]. Nothing is validated.
///
/// # Example
/// ```
/// use remote_model::ComponentDescriptor;
/// use serde_json::json;
///
/// let descriptor = ComponentDescriptor::new("Button")
///     .with_name("submit")
///     .with_props(json!({ "label": "Save" }).as_object().cloned().unwrap());
///
/// assert_eq!(descriptor.kind.as_deref(), Some("Button"));
/// assert_eq!(descriptor.name.as_deref(), Some("submit"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    #[serde(rename = "compName", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<Mapping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Mapping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<Mapping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Mapping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<EventBinding>>,
}

impl ComponentDescriptor {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_state(mut self, state: Mapping) -> Self {
        self.state = Some(state);
        self
    }

    pub fn with_data(mut self, data: Mapping) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_props(mut self, props: Mapping) -> Self {
        self.props = Some(props);
        self
    }

    pub fn with_layout(mut self, layout: Mapping) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn with_events(mut self, events: Vec<EventBinding>) -> Self {
        self.events = Some(events);
        self
    }
}
