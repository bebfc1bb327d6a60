// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::CallbackIdStrategy;
use uuid::Uuid;

/// Mints callback identifiers in the lowercase hyphenated 8-4-4-4-12 form.
#[derive(Debug, Clone)]
pub enum CallbackIdGenerator {
    /// Version 4 (random) UUIDs.
    Random,
    /// A counter rendered as a UUID; the last value handed out is kept.
    Sequential { last: u128 },
}

impl CallbackIdGenerator {
    pub fn new(strategy: CallbackIdStrategy) -> Self {
        match strategy {
            CallbackIdStrategy::Random => CallbackIdGenerator::Random,
            CallbackIdStrategy::Sequential => CallbackIdGenerator::Sequential { last: 0 },
        }
    }

    pub fn next_id(&mut self) -> String {
        match self {
            CallbackIdGenerator::Random => Uuid::new_v4().to_string(),
            CallbackIdGenerator::Sequential { last } => {
                *last = last.wrapping_add(1);
                Uuid::from_u128(*last).to_string()
            }
        }
    }
}
