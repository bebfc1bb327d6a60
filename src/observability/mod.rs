// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging.
//!
//! This module provides centralized message types for diagnostic logging across
//! the model. Message types follow a struct-based pattern with a `Display`
//! implementation plus [`messages::StructuredLog`], which emits the message at
//! its fixed level with every field attached:
//!
//! * No magic strings scattered through the resolver and mutator
//! * One place to change wording
//! * Consistent structured fields for subscribers that index them
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::model` - resolution misses, merges, component insertion
//! * `messages::events` - callback registration and event bindings
//! * `messages::config` - config and document loading
//!
//! # Usage
//!
//! ```rust
//! use remote_model::observability::messages::model::ComponentNotFound;
//! use remote_model::observability::messages::StructuredLog;
//!
//! ComponentNotFound {
//!     component: "save",
//!     field: None,
//! }
//! .log();
//! ```

pub mod messages;
