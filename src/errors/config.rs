// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for loading model options and component documents from disk.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a config or document file.
///
/// Every variant carries the offending path so the message can be shown to a user
/// without further context.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid YAML for the expected shape.
    #[error("Invalid YAML in '{}': {source}", path.display())]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// The file is not valid JSON for the expected shape.
    #[error("Invalid JSON in '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The file is not valid TOML for the expected shape.
    #[error("Invalid TOML in '{}': {source}", path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// The extension does not name a supported format.
    #[error("Unsupported file format for '{}'. Expected one of: {expected}", path.display())]
    UnsupportedFormat {
        path: PathBuf,
        expected: &'static str,
    },
}
