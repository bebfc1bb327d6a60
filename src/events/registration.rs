// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::events::{CallbackRegistry, EventBinding};
use crate::model::{FieldPatch, MergeOutcome, RemoteModel};
use crate::observability::messages::events::EventBound;
use crate::observability::messages::StructuredLog;
use crate::traits::EventHandler;
use std::fmt;
use std::sync::Arc;

/// What `register_event` should point the binding at.
#[derive(Clone)]
pub enum EventCallback {
    /// An executable handler; the model mints an id and stores it.
    Handler(Arc<dyn EventHandler>),
    /// An id the runtime already knows; nothing is stored.
    Existing(String),
}

impl EventCallback {
    pub fn handler<H>(handler: H) -> Self
    where
        H: EventHandler + 'static,
    {
        EventCallback::Handler(Arc::new(handler))
    }
}

impl From<String> for EventCallback {
    fn from(callback_id: String) -> Self {
        EventCallback::Existing(callback_id)
    }
}

impl From<&str> for EventCallback {
    fn from(callback_id: &str) -> Self {
        EventCallback::Existing(callback_id.to_string())
    }
}

impl From<Arc<dyn EventHandler>> for EventCallback {
    fn from(handler: Arc<dyn EventHandler>) -> Self {
        EventCallback::Handler(handler)
    }
}

impl fmt::Debug for EventCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventCallback::Handler(_) => f.write_str("Handler(..)"),
            EventCallback::Existing(id) => f.debug_tuple("Existing").field(id).finish(),
        }
    }
}

/// Result of `register_event`.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRegistration {
    /// The id recorded in the binding (minted or passed through).
    pub callback_id: String,
    /// Whether the binding reached the component's `events`.
    pub outcome: MergeOutcome,
}

impl RemoteModel {
    /// Bind `event_type` on component `comp_name` to a callback run on `target_id`.
    ///
    /// A handler is stored under a new id before the binding is merged, so it stays
    /// retrievable through [`RemoteModel::callback_by_id`] even when `comp_name`
    /// does not resolve; in that case the outcome is `NotFound` and no binding or
    /// notification is produced.
    ///
    /// # Example
    /// ```
    /// use remote_model::{ComponentDescriptor, RemoteModel};
    /// use remote_model::events::EventCallback;
    /// use serde_json::Value;
    ///
    /// let mut model = RemoteModel::new();
    /// model.add_component("comp-1", ComponentDescriptor::new("Button").with_name("save")).unwrap();
    ///
    /// let registration = model.register_event(
    ///     "widget-7",
    ///     "save",
    ///     "click",
    ///     EventCallback::handler(|_: &Value| {}),
    /// );
    ///
    /// assert!(registration.outcome.is_applied());
    /// assert!(model.callback_by_id(&registration.callback_id).is_some());
    /// assert_eq!(model.events("save").unwrap()[0].callback_id(), registration.callback_id);
    /// ```
    pub fn register_event(
        &mut self,
        target_id: &str,
        comp_name: &str,
        event_type: &str,
        callback: impl Into<EventCallback>,
    ) -> EventRegistration {
        let source_id = self.comp_id(comp_name).map(str::to_string);

        let callback_id = match callback.into() {
            EventCallback::Handler(handler) => self.callbacks.register(handler),
            EventCallback::Existing(callback_id) => callback_id,
        };

        let binding = EventBinding::run_code(
            source_id,
            comp_name,
            event_type,
            target_id,
            callback_id.clone(),
        );
        let outcome = self.merge(comp_name, FieldPatch::Events(binding));

        if outcome.is_applied() {
            EventBound {
                component: comp_name,
                event_type,
                target_id,
                callback_id: &callback_id,
            }
            .log();
        }

        EventRegistration {
            callback_id,
            outcome,
        }
    }

    /// The handler stored under `callback_id`, for the runtime to invoke.
    pub fn callback_by_id(&self, callback_id: &str) -> Option<Arc<dyn EventHandler>> {
        self.callbacks.get(callback_id)
    }

    pub fn callbacks(&self) -> &CallbackRegistry {
        &self.callbacks
    }
}
