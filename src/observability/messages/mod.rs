// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable line and
//! [`StructuredLog`] to emit it through `tracing` at the level documented on
//! the type.
//!
//! * `model` - resolver misses, merges, insertion and duplicate names
//! * `events` - callback registration and event bindings
//! * `config` - config and document loading

use std::fmt::Display;
use tracing::Span;

pub mod config;
pub mod events;
pub mod model;

/// A message that knows its own level and structured fields.
pub trait StructuredLog: Display {
    /// Emit the message as a `tracing` event.
    fn log(&self);

    /// A span carrying the same fields, for wrapping related work.
    fn span(&self, name: &str) -> Span;
}
