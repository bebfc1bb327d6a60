// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;

/// An executable event callback held by the model on behalf of the rendering runtime.
///
/// The model only stores handlers and hands them back by callback id; invoking them
/// is up to whoever receives the event from the remote surface.
pub trait EventHandler: Send + Sync {
    fn handle(&self, payload: &Value);
}

impl<F> EventHandler for F
where
    F: Fn(&Value) + Send + Sync,
{
    fn handle(&self, payload: &Value) {
        self(payload)
    }
}
