// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::CallbackIdStrategy;
use crate::events::CallbackIdGenerator;
use crate::observability::messages::events::CallbackRegistered;
use crate::observability::messages::StructuredLog;
use crate::traits::EventHandler;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Callback id → handler table owned by a single model.
///
/// Each `RemoteModel` carries its own registry, so ids minted by one model never
/// resolve in another.
pub struct CallbackRegistry {
    handlers: HashMap<String, Arc<dyn EventHandler>>,
    ids: CallbackIdGenerator,
}

impl CallbackRegistry {
    pub fn new(strategy: CallbackIdStrategy) -> Self {
        Self {
            handlers: HashMap::new(),
            ids: CallbackIdGenerator::new(strategy),
        }
    }

    /// Store `handler` under a freshly minted id and return the id.
    pub fn register(&mut self, handler: Arc<dyn EventHandler>) -> String {
        let callback_id = self.ids.next_id();
        self.handlers.insert(callback_id.clone(), handler);

        CallbackRegistered {
            callback_id: &callback_id,
            handler_count: self.handlers.len(),
        }
        .log();

        callback_id
    }

    /// Get a handler by callback id
    pub fn get(&self, callback_id: &str) -> Option<Arc<dyn EventHandler>> {
        self.handlers.get(callback_id).cloned()
    }

    pub fn contains(&self, callback_id: &str) -> bool {
        self.handlers.contains_key(callback_id)
    }

    /// Get all callback ids
    pub fn ids(&self) -> impl Iterator<Item = &String> {
        self.handlers.keys()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("handler_count", &self.handlers.len())
            .field("callback_ids", &self.handlers.keys().collect::<Vec<_>>())
            .field("ids", &self.ids)
            .finish()
    }
}
