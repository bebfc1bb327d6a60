// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod node;
mod store;

pub mod introspect;
pub mod mutator;
pub mod path;

#[cfg(test)]
mod integration_tests;

pub use mutator::{FieldPatch, FieldRef, MergeOutcome};
pub use node::{ComponentDescriptor, ComponentNode, Mapping};
pub use path::{ComponentPath, FieldKey, PathStep};
pub use store::RemoteModel;
