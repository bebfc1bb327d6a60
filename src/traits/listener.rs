// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::model::{FieldKey, FieldPatch};

/// Receives a change notification after every successful mutation.
///
/// The model invokes the listener synchronously, once per applied merge, with the
/// name of the component that changed, the field that was touched, and the partial
/// value that was merged (or appended, for `events`). Misses never notify.
///
/// Any `FnMut(&str, FieldKey, &FieldPatch)` closure is a listener:
///
/// ```
/// use remote_model::{RemoteModel, ComponentDescriptor};
/// use remote_model::model::{FieldKey, FieldPatch};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
///
/// let mut model = RemoteModel::new();
/// model.set_update_listener(move |name: &str, field: FieldKey, _: &FieldPatch| {
///     sink.borrow_mut().push(format!("{}.{}", name, field));
/// });
///
/// model.add_component("button1", ComponentDescriptor::new("Button")).unwrap();
/// let _ = model.set_state("button1", serde_json::Map::new());
///
/// assert_eq!(*seen.borrow(), vec!["button1.state".to_string()]);
/// ```
pub trait UpdateListener {
    fn on_update(&mut self, component: &str, field: FieldKey, partial: &FieldPatch);
}

impl<F> UpdateListener for F
where
    F: FnMut(&str, FieldKey, &FieldPatch),
{
    fn on_update(&mut self, component: &str, field: FieldKey, partial: &FieldPatch) {
        self(component, field, partial)
    }
}
