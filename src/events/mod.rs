// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Event bindings and the callbacks they point at.
//!
//! `register_event` records an [`EventBinding`] on a component. The binding tells
//! the rendering runtime to run the callback behind `params.callbackId` on the
//! target widget instance whenever the component fires the event. When the caller
//! hands over an executable handler, the model mints a fresh callback id and keeps
//! the handler in its own [`CallbackRegistry`]; a plain id is recorded as-is.

mod binding;
mod callback_id;
mod registration;
mod registry;

pub use binding::{BehaviorParams, EventAction, EventBehavior, EventBinding};
pub use callback_id::CallbackIdGenerator;
pub use registration::{EventCallback, EventRegistration};
pub use registry::CallbackRegistry;
