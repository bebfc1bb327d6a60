// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors raised by the model store itself.
///
/// Lookups and merges never fail; a name that does not resolve is reported as
/// `None` or `MergeOutcome::NotFound`. The only hard failure is an insertion
/// refused by `DuplicateNamePolicy::Reject`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A component with this name already exists somewhere in the tree.
    #[error("Cannot add component '{id}': name '{name}' is already in use")]
    DuplicateName { id: String, name: String },
}
