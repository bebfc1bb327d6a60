// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;         // options + document loading
pub mod errors;         // error handling
pub mod events;         // event bindings + callback registry
pub mod model;          // component tree, resolver, mutator
pub mod observability;
pub mod traits;         // listener + handler abstractions

pub use model::{ComponentDescriptor, ComponentNode, FieldKey, FieldPatch, MergeOutcome, RemoteModel};
