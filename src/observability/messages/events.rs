// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for event registration.
//!
//! This module contains message types for logging events related to:
//! * Callback handlers stored under a minted id
//! * Event bindings recorded on a component

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A handler was stored under a freshly minted callback id.
///
/// # Log Level
/// `debug!` - Routine registration
///
/// # Example
/// ```
/// use remote_model::observability::messages::events::CallbackRegistered;
///
/// let msg = CallbackRegistered {
///     callback_id: "00000000-0000-0000-0000-000000000001",
///     handler_count: 1,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct CallbackRegistered<'a> {
    pub callback_id: &'a str,
    pub handler_count: usize,
}

impl Display for CallbackRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Registered callback '{}' ({} handlers stored)",
            self.callback_id, self.handler_count
        )
    }
}

impl StructuredLog for CallbackRegistered<'_> {
    fn log(&self) {
        tracing::debug!(
            callback_id = self.callback_id,
            handler_count = self.handler_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "callback_registered",
            span_name = name,
            callback_id = self.callback_id,
            handler_count = self.handler_count,
        )
    }
}

/// An event binding was appended to a component.
///
/// # Log Level
/// `debug!` - Routine registration
pub struct EventBound<'a> {
    pub component: &'a str,
    pub event_type: &'a str,
    pub target_id: &'a str,
    pub callback_id: &'a str,
}

impl Display for EventBound<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Bound '{}' on component '{}' to callback '{}' on target '{}'",
            self.event_type, self.component, self.callback_id, self.target_id
        )
    }
}

impl StructuredLog for EventBound<'_> {
    fn log(&self) {
        tracing::debug!(
            component = self.component,
            event_type = self.event_type,
            target_id = self.target_id,
            callback_id = self.callback_id,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "event_bound",
            span_name = name,
            component = self.component,
            event_type = self.event_type,
            target_id = self.target_id,
            callback_id = self.callback_id,
        )
    }
}
