// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::{load_document, DuplicateNamePolicy, ModelConfig};
use crate::errors::{ConfigError, ModelError};
use crate::events::{CallbackRegistry, EventBinding};
use crate::model::introspect;
use crate::model::mutator::{self, FieldRef};
use crate::model::path::resolve;
use crate::model::{ComponentDescriptor, ComponentNode, FieldKey, FieldPatch, Mapping, MergeOutcome};
use crate::observability::messages::model::{
    ComponentAdded, DuplicateComponentName, DuplicateComponentRejected,
};
use crate::observability::messages::StructuredLog;
use crate::traits::UpdateListener;
use std::fmt;

/// The live component document plus everything scoped to one model instance.
///
/// Components are addressed by name wherever they sit in the tree. Getters return
/// `None` for a name that does not resolve; setters report
/// [`MergeOutcome::NotFound`] and change nothing.
///
/// # Examples
///
/// ## Building and querying a model
/// ```
/// use remote_model::{ComponentDescriptor, RemoteModel};
/// use serde_json::json;
///
/// let mut model = RemoteModel::new();
/// model.add_component("comp-1", ComponentDescriptor::new("Button").with_name("save")).unwrap();
///
/// let outcome = model.set_state("save", json!({ "disabled": true }).as_object().cloned().unwrap());
/// assert!(outcome.is_applied());
/// assert_eq!(model.state("save").unwrap()["disabled"], true);
/// assert_eq!(model.kind("save"), Some("Button"));
/// assert!(model.kind("cancel").is_none());
/// ```
///
/// ## Starting from an existing document
/// ```
/// use remote_model::{ComponentNode, RemoteModel};
///
/// let root: ComponentNode = serde_json::from_str(r#"{
///     "type": "Container",
///     "children": [{ "compId": "c1", "compName": "title", "type": "Text" }]
/// }"#).unwrap();
///
/// let model = RemoteModel::with_document(root);
/// assert_eq!(model.comp_id("title"), Some("c1"));
/// ```
pub struct RemoteModel {
    pub(crate) root: ComponentNode,
    pub(crate) listener: Option<Box<dyn UpdateListener>>,
    pub(crate) callbacks: CallbackRegistry,
    pub(crate) duplicate_names: DuplicateNamePolicy,
}

impl RemoteModel {
    /// An empty `Container` root with default options.
    pub fn new() -> Self {
        Self::with_document(ComponentNode::root())
    }

    /// Wrap an existing document with default options.
    pub fn with_document(root: ComponentNode) -> Self {
        Self::build(root, &ModelConfig::default())
    }

    /// Build a model from options, loading `cfg.document` when one is named.
    pub fn from_config(cfg: &ModelConfig) -> Result<Self, ConfigError> {
        let root = match &cfg.document {
            Some(path) => load_document(path)?,
            None => ComponentNode::container(cfg.root_type.clone()),
        };
        Ok(Self::build(root, cfg))
    }

    /// Wrap an existing document with the given options; `cfg.document` is ignored.
    pub fn with_document_and_config(root: ComponentNode, cfg: &ModelConfig) -> Self {
        Self::build(root, cfg)
    }

    fn build(root: ComponentNode, cfg: &ModelConfig) -> Self {
        Self {
            root,
            listener: None,
            callbacks: CallbackRegistry::new(cfg.callback_ids),
            duplicate_names: cfg.duplicate_names,
        }
    }

    /// Install the change listener, replacing any previous one.
    pub fn set_update_listener<L>(&mut self, listener: L)
    where
        L: UpdateListener + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    pub fn with_update_listener<L>(mut self, listener: L) -> Self
    where
        L: UpdateListener + 'static,
    {
        self.set_update_listener(listener);
        self
    }

    pub fn clear_update_listener(&mut self) {
        self.listener = None;
    }

    // Getters

    /// Resolve `name` (and optionally a field) anywhere in the tree.
    pub fn read(&self, name: &str, field: Option<FieldKey>) -> Option<FieldRef<'_>> {
        mutator::read(&self.root, name, field)
    }

    pub fn comp(&self, name: &str) -> Option<&ComponentNode> {
        self.read(name, None).and_then(FieldRef::as_node)
    }

    pub fn state(&self, name: &str) -> Option<&Mapping> {
        self.mapping(name, FieldKey::State)
    }

    pub fn data(&self, name: &str) -> Option<&Mapping> {
        self.mapping(name, FieldKey::Data)
    }

    pub fn props(&self, name: &str) -> Option<&Mapping> {
        self.mapping(name, FieldKey::Props)
    }

    pub fn layout(&self, name: &str) -> Option<&Mapping> {
        self.mapping(name, FieldKey::Layout)
    }

    pub fn events(&self, name: &str) -> Option<&[EventBinding]> {
        self.read(name, Some(FieldKey::Events))
            .and_then(FieldRef::as_events)
    }

    /// The component's `type`. `None` both for a miss and for a node added without one.
    pub fn kind(&self, name: &str) -> Option<&str> {
        self.comp(name).and_then(|node| node.kind.as_deref())
    }

    pub fn comp_id(&self, name: &str) -> Option<&str> {
        self.comp(name).and_then(|node| node.id.as_deref())
    }

    fn mapping(&self, name: &str, field: FieldKey) -> Option<&Mapping> {
        self.read(name, Some(field)).and_then(FieldRef::as_mapping)
    }

    // Setters

    /// Append a new component to the root's children.
    ///
    /// Insertion always happens at the root, never inside a subtree. When the
    /// resulting name already resolves, the configured [`DuplicateNamePolicy`]
    /// decides: `Shadow` inserts anyway (the earlier node keeps winning lookups),
    /// `Reject` returns [`ModelError::DuplicateName`] and leaves the tree unchanged.
    pub fn add_component(
        &mut self,
        id: impl Into<String>,
        descriptor: ComponentDescriptor,
    ) -> Result<&ComponentNode, ModelError> {
        let node = ComponentNode::from_descriptor(id, descriptor);
        let id = node.id.as_deref().unwrap_or_default();
        let name = node.name.as_deref().unwrap_or_default();

        if resolve(&self.root, name, None).is_some() {
            match self.duplicate_names {
                DuplicateNamePolicy::Reject => {
                    DuplicateComponentRejected { id, name }.log();
                    return Err(ModelError::DuplicateName {
                        id: id.to_string(),
                        name: name.to_string(),
                    });
                }
                DuplicateNamePolicy::Shadow => DuplicateComponentName { id, name }.log(),
            }
        }

        ComponentAdded {
            id,
            name,
            kind: node.kind.as_deref(),
            position: self.root.children.len(),
        }
        .log();

        self.root.children.push(node);
        let index = self.root.children.len() - 1;
        Ok(&self.root.children[index])
    }

    /// Merge `patch` into the named component and notify the listener on success.
    pub fn merge(&mut self, name: &str, patch: FieldPatch) -> MergeOutcome {
        let listener = &mut self.listener;
        mutator::merge(&mut self.root, name, &patch, |component, field, partial| {
            if let Some(listener) = listener.as_mut() {
                listener.on_update(component, field, partial);
            }
        })
    }

    pub fn set_state(&mut self, name: &str, partial: Mapping) -> MergeOutcome {
        self.merge(name, FieldPatch::State(partial))
    }

    pub fn set_data(&mut self, name: &str, partial: Mapping) -> MergeOutcome {
        self.merge(name, FieldPatch::Data(partial))
    }

    pub fn set_props(&mut self, name: &str, partial: Mapping) -> MergeOutcome {
        self.merge(name, FieldPatch::Props(partial))
    }

    pub fn set_layout(&mut self, name: &str, partial: Mapping) -> MergeOutcome {
        self.merge(name, FieldPatch::Layout(partial))
    }

    // Introspection

    /// Components of type `kind`, in pre-order. See [`introspect::components_by_type`].
    pub fn components_by_type(&self, kind: &str) -> Vec<&ComponentNode> {
        introspect::components_by_type(&self.root, kind)
    }

    pub fn component_names(&self) -> Vec<&str> {
        introspect::component_names(&self.root)
    }

    // Serialization

    /// A view of the live tree. Clones and [`Self::to_json_value`] snapshots are detached.
    pub fn to_json(&self) -> &ComponentNode {
        &self.root
    }

    /// An owned JSON snapshot of the tree.
    pub fn to_json_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(&self.root)
    }
}

impl Default for RemoteModel {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RemoteModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteModel")
            .field("component_count", &self.root.descendant_count())
            .field("callbacks", &self.callbacks)
            .field("duplicate_names", &self.duplicate_names)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CallbackIdStrategy;
    use serde_json::{json, Value};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn mapping(value: Value) -> Mapping {
        value.as_object().cloned().unwrap()
    }

    type Log = Rc<RefCell<Vec<(String, FieldKey, Value)>>>;

    fn recording_model() -> (RemoteModel, Log) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let model = RemoteModel::new().with_update_listener(
            move |name: &str, field: FieldKey, partial: &FieldPatch| {
                sink.borrow_mut().push((
                    name.to_string(),
                    field,
                    serde_json::to_value(partial).unwrap(),
                ));
            },
        );
        (model, log)
    }

    #[test]
    fn new_model_is_empty_container() {
        let model = RemoteModel::new();
        assert_eq!(model.to_json().kind.as_deref(), Some("Container"));
        assert!(model.to_json().children.is_empty());
        assert!(model.component_names().is_empty());
    }

    #[test]
    fn empty_model_serializes_children_array() {
        let value = RemoteModel::new().to_json_value().unwrap();
        assert_eq!(value["type"], "Container");
        assert_eq!(value["children"], json!([]));
    }

    #[test]
    fn add_component_then_get_applies_defaults() {
        struct TestCase {
            name: &'static str,
            id: &'static str,
            descriptor: ComponentDescriptor,
            lookup: &'static str,
            expected_state: Value,
            expected_events: Vec<EventBinding>,
        }

        let click = EventBinding::run_code(
            Some("comp-4".to_string()),
            "apply",
            "click",
            "widget-1",
            "cb-1",
        );

        let test_cases = vec![
            TestCase {
                name: "name defaults to id",
                id: "comp-1",
                descriptor: ComponentDescriptor::new("Button"),
                lookup: "comp-1",
                expected_state: json!({}),
                expected_events: Vec::new(),
            },
            TestCase {
                name: "explicit name",
                id: "comp-2",
                descriptor: ComponentDescriptor::new("Input").with_name("email"),
                lookup: "email",
                expected_state: json!({}),
                expected_events: Vec::new(),
            },
            TestCase {
                name: "initial state kept",
                id: "comp-3",
                descriptor: ComponentDescriptor::new("Checkbox")
                    .with_name("terms")
                    .with_state(mapping(json!({ "checked": false }))),
                lookup: "terms",
                expected_state: json!({ "checked": false }),
                expected_events: Vec::new(),
            },
            TestCase {
                name: "initial events kept",
                id: "comp-4",
                descriptor: ComponentDescriptor::new("Button")
                    .with_name("apply")
                    .with_events(vec![click.clone()]),
                lookup: "apply",
                expected_state: json!({}),
                expected_events: vec![click.clone()],
            },
        ];

        for test_case in test_cases {
            let mut model = RemoteModel::new();
            let kind = test_case.descriptor.kind.clone();
            model.add_component(test_case.id, test_case.descriptor).unwrap();

            let node = model.comp(test_case.lookup).unwrap_or_else(|| {
                panic!("Test case '{}': component not found", test_case.name)
            });
            assert_eq!(node.id.as_deref(), Some(test_case.id), "Test case '{}'", test_case.name);
            assert_eq!(node.kind, kind, "Test case '{}'", test_case.name);
            assert_eq!(
                Value::Object(node.state.clone()),
                test_case.expected_state,
                "Test case '{}'",
                test_case.name
            );
            assert!(node.data.is_empty() && node.props.is_empty() && node.layout.is_empty());
            assert_eq!(
                model.events(test_case.lookup),
                Some(test_case.expected_events.as_slice()),
                "Test case '{}'",
                test_case.name
            );
        }
    }

    #[test]
    fn add_component_always_appends_to_root() {
        let mut root = ComponentNode::root();
        let mut nested = ComponentNode::from_descriptor("group", ComponentDescriptor::new("Container"));
        nested.children.push(ComponentNode::from_descriptor("inner", ComponentDescriptor::new("Text")));
        root.children.push(nested);

        let mut model = RemoteModel::with_document(root);
        model.add_component("late", ComponentDescriptor::new("Text")).unwrap();

        let children = &model.to_json().children;
        assert_eq!(children.len(), 2);
        assert_eq!(children[1].name.as_deref(), Some("late"));
        assert_eq!(children[0].children.len(), 1);
    }

    #[test]
    fn set_state_merges_rather_than_replaces() {
        let mut model = RemoteModel::new();
        model.add_component("c", ComponentDescriptor::new("Text")).unwrap();

        assert!(model.set_state("c", mapping(json!({ "a": 1 }))).is_applied());
        assert!(model.set_state("c", mapping(json!({ "b": 2 }))).is_applied());

        assert_eq!(Value::Object(model.state("c").unwrap().clone()), json!({ "a": 1, "b": 2 }));
    }

    #[test]
    fn every_setter_targets_its_own_field() {
        let (mut model, log) = recording_model();
        model.add_component("c", ComponentDescriptor::new("Text")).unwrap();

        let _ = model.set_state("c", mapping(json!({ "s": 1 })));
        let _ = model.set_data("c", mapping(json!({ "d": 2 })));
        let _ = model.set_props("c", mapping(json!({ "p": 3 })));
        let _ = model.set_layout("c", mapping(json!({ "l": 4 })));

        assert_eq!(model.state("c").unwrap()["s"], 1);
        assert_eq!(model.data("c").unwrap()["d"], 2);
        assert_eq!(model.props("c").unwrap()["p"], 3);
        assert_eq!(model.layout("c").unwrap()["l"], 4);

        let fields: Vec<FieldKey> = log.borrow().iter().map(|(_, field, _)| *field).collect();
        assert_eq!(
            fields,
            vec![FieldKey::State, FieldKey::Data, FieldKey::Props, FieldKey::Layout]
        );
    }

    #[test]
    fn listener_receives_name_field_and_partial() {
        let (mut model, log) = recording_model();
        model.add_component("c", ComponentDescriptor::new("Text")).unwrap();

        let _ = model.set_props("c", mapping(json!({ "text": "hi" })));

        assert_eq!(
            *log.borrow(),
            vec![("c".to_string(), FieldKey::Props, json!({ "text": "hi" }))]
        );
    }

    #[test]
    fn unknown_names_never_panic() {
        let (mut model, log) = recording_model();

        assert!(model.comp("x").is_none());
        assert!(model.state("x").is_none());
        assert!(model.data("x").is_none());
        assert!(model.props("x").is_none());
        assert!(model.layout("x").is_none());
        assert!(model.events("x").is_none());
        assert!(model.kind("x").is_none());
        assert!(model.comp_id("x").is_none());

        assert_eq!(model.set_state("x", mapping(json!({ "a": 1 }))), MergeOutcome::NotFound);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn clearing_listener_stops_notifications() {
        let (mut model, log) = recording_model();
        model.add_component("c", ComponentDescriptor::new("Text")).unwrap();
        model.clear_update_listener();

        assert!(model.set_state("c", mapping(json!({ "a": 1 }))).is_applied());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn duplicate_name_shadowed_by_default() {
        let mut model = RemoteModel::new();
        model.add_component("first", ComponentDescriptor::new("Text").with_name("dup")).unwrap();
        model.add_component("second", ComponentDescriptor::new("Button").with_name("dup")).unwrap();

        assert_eq!(model.to_json().children.len(), 2);
        assert_eq!(model.comp_id("dup"), Some("first"));

        let _ = model.set_state("dup", mapping(json!({ "hit": true })));
        assert_eq!(model.to_json().children[0].state["hit"], true);
        assert!(model.to_json().children[1].state.is_empty());
    }

    #[test]
    fn duplicate_name_rejected_when_configured() {
        let cfg = ModelConfig {
            duplicate_names: DuplicateNamePolicy::Reject,
            ..ModelConfig::default()
        };
        let mut model = RemoteModel::with_document_and_config(ComponentNode::root(), &cfg);
        model.add_component("first", ComponentDescriptor::new("Text").with_name("dup")).unwrap();

        let err = model
            .add_component("second", ComponentDescriptor::new("Button").with_name("dup"))
            .unwrap_err();

        assert_eq!(
            err,
            ModelError::DuplicateName {
                id: "second".to_string(),
                name: "dup".to_string()
            }
        );
        assert_eq!(model.to_json().children.len(), 1);
    }

    #[test]
    fn from_config_uses_root_type() {
        let cfg = ModelConfig {
            root_type: "Page".to_string(),
            callback_ids: CallbackIdStrategy::Sequential,
            ..ModelConfig::default()
        };
        let model = RemoteModel::from_config(&cfg).unwrap();
        assert_eq!(model.to_json().kind.as_deref(), Some("Page"));
    }

    #[test]
    fn to_json_value_snapshot_is_detached() {
        let mut model = RemoteModel::new();
        model.add_component("c", ComponentDescriptor::new("Text")).unwrap();

        let snapshot = model.to_json_value().unwrap();
        let _ = model.set_state("c", mapping(json!({ "a": 1 })));

        assert_eq!(snapshot["children"][0]["state"], json!({}));
        assert_eq!(model.to_json().children[0].state["a"], 1);
    }
}
