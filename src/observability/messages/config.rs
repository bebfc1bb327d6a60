// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for loading options and documents from disk.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::path::Path;
use tracing::Span;

/// Model options were read from a file.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ConfigLoaded<'a> {
    pub path: &'a Path,
    pub has_document: bool,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.has_document {
            write!(f, "Loaded model config from {} (with initial document)", self.path.display())
        } else {
            write!(f, "Loaded model config from {}", self.path.display())
        }
    }
}

impl StructuredLog for ConfigLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = %self.path.display(),
            has_document = self.has_document,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "config_loaded",
            span_name = name,
            path = %self.path.display(),
            has_document = self.has_document,
        )
    }
}

/// A component document was read from a file.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use remote_model::observability::messages::config::DocumentLoaded;
/// use std::path::Path;
///
/// let msg = DocumentLoaded {
///     path: Path::new("panel.json"),
///     component_count: 12,
/// };
///
/// assert_eq!(msg.to_string(), "Loaded document panel.json with 12 components");
/// ```
pub struct DocumentLoaded<'a> {
    pub path: &'a Path,
    pub component_count: usize,
}

impl Display for DocumentLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded document {} with {} components",
            self.path.display(),
            self.component_count
        )
    }
}

impl StructuredLog for DocumentLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = %self.path.display(),
            component_count = self.component_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "document_loaded",
            span_name = name,
            path = %self.path.display(),
            component_count = self.component_count,
        )
    }
}
