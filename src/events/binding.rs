// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{ACTION_KIND_COMPONENT, BEHAVIOR_KIND_WIDGET, BEHAVIOR_RUN_CODE};
use serde::{Deserialize, Serialize};

/// One entry of a component's `events` sequence.
///
/// Serialized shape:
/// ```json
/// {
///   "action":   { "type": "comp", "name": "click", "sourceId": "comp-1" },
///   "behavior": {
///     "type": "widget", "compName": "save", "targetId": "widget-7",
///     "params": { "callbackId": "…", "compName": "save" },
///     "name": "runCode"
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventBinding {
    pub action: EventAction,
    pub behavior: EventBehavior,
}

/// The event side of a binding: which component fires what.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventAction {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    #[serde(rename = "sourceId", default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
}

/// The reaction side of a binding: what the runtime runs, and where.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventBehavior {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "compName")]
    pub comp_name: String,
    #[serde(rename = "targetId")]
    pub target_id: String,
    pub params: BehaviorParams,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviorParams {
    #[serde(rename = "callbackId")]
    pub callback_id: String,
    #[serde(rename = "compName")]
    pub comp_name: String,
}

impl EventBinding {
    /// A `runCode` binding from `comp_name`'s `event_type` to `callback_id` on `target_id`.
    pub fn run_code(
        source_id: Option<String>,
        comp_name: impl Into<String>,
        event_type: impl Into<String>,
        target_id: impl Into<String>,
        callback_id: impl Into<String>,
    ) -> Self {
        let comp_name = comp_name.into();
        Self {
            action: EventAction {
                kind: ACTION_KIND_COMPONENT.to_string(),
                name: event_type.into(),
                source_id,
            },
            behavior: EventBehavior {
                kind: BEHAVIOR_KIND_WIDGET.to_string(),
                comp_name: comp_name.clone(),
                target_id: target_id.into(),
                params: BehaviorParams {
                    callback_id: callback_id.into(),
                    comp_name,
                },
                name: BEHAVIOR_RUN_CODE.to_string(),
            },
        }
    }

    pub fn callback_id(&self) -> &str {
        &self.behavior.params.callback_id
    }

    pub fn event_type(&self) -> &str {
        &self.action.name
    }
}
