// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{CONFIG_EXTENSIONS, DEFAULT_ROOT_TYPE, DOCUMENT_EXTENSIONS};
use crate::errors::ConfigError;
use crate::model::ComponentNode;
use crate::observability::messages::config::{ConfigLoaded, DocumentLoaded};
use crate::observability::messages::StructuredLog;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Options for a single model instance.
///
/// Every field is optional in the file and falls back to the behavior of a bare
/// `RemoteModel::new()`.
///
/// # Fields
/// * `root_type` - Type of the implicit root container (defaults to `Container`)
/// * `duplicate_names` - What `add_component` does with a name that already resolves
/// * `callback_ids` - How fresh callback identifiers are generated
/// * `document` - Initial component tree to load instead of an empty root
///
/// # Example
/// ```yaml
/// root_type: Container
/// duplicate_names: reject
/// callback_ids: sequential
/// document: widgets/settings-panel.json
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ModelConfig {
    #[serde(default = "default_root_type")]
    pub root_type: String,
    #[serde(default)]
    pub duplicate_names: DuplicateNamePolicy,
    #[serde(default)]
    pub callback_ids: CallbackIdStrategy,
    #[serde(default)]
    pub document: Option<PathBuf>,
}

fn default_root_type() -> String {
    DEFAULT_ROOT_TYPE.to_string()
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            root_type: default_root_type(),
            duplicate_names: DuplicateNamePolicy::default(),
            callback_ids: CallbackIdStrategy::default(),
            document: None,
        }
    }
}

/// Behavior of `add_component` when the new node's name already resolves.
///
/// # Variants
/// * `Shadow` - Insert anyway; lookups keep returning the pre-order-first node
/// * `Reject` - Refuse the insertion with `ModelError::DuplicateName`
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateNamePolicy {
    #[default]
    Shadow,
    Reject,
}

/// Source of callback identifiers minted by `register_event`.
///
/// Both variants render as a lowercase hyphenated 128-bit value
/// (`xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`).
///
/// # Variants
/// * `Random` - Version 4 UUIDs
/// * `Sequential` - A per-model counter starting at 1, useful for reproducible output
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CallbackIdStrategy {
    #[default]
    Random,
    Sequential,
}

/// Serialization format of a config or document file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
    Toml,
}

impl DocumentFormat {
    /// Detect the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(DocumentFormat::Json),
            "yaml" | "yml" => Some(DocumentFormat::Yaml),
            "toml" => Some(DocumentFormat::Toml),
            _ => None,
        }
    }

    fn parse<T: DeserializeOwned>(self, path: &Path, content: &str) -> Result<T, ConfigError> {
        match self {
            DocumentFormat::Json => {
                serde_json::from_str(content).map_err(|source| ConfigError::Json {
                    path: path.to_path_buf(),
                    source,
                })
            }
            DocumentFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|source| ConfigError::Yaml {
                    path: path.to_path_buf(),
                    source,
                })
            }
            DocumentFormat::Toml => toml::from_str(content).map_err(|source| ConfigError::Toml {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load model options from a YAML, TOML or JSON file.
///
/// A relative `document` path is resolved against the directory holding the
/// config file, so a config and its document can be moved together.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ModelConfig, ConfigError> {
    let path = path.as_ref();
    let format = DocumentFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
        path: path.to_path_buf(),
        expected: CONFIG_EXTENSIONS,
    })?;

    let content = read_file(path)?;
    let mut cfg: ModelConfig = format.parse(path, &content)?;

    if let Some(document) = cfg.document.take() {
        let resolved = match path.parent() {
            Some(dir) if document.is_relative() => dir.join(document),
            _ => document,
        };
        cfg.document = Some(resolved);
    }

    ConfigLoaded {
        path,
        has_document: cfg.document.is_some(),
    }
    .log();

    Ok(cfg)
}

/// Load a component tree from a JSON or YAML file.
///
/// The file holds the root node itself, in the same shape `RemoteModel::to_json`
/// serializes to.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<ComponentNode, ConfigError> {
    let path = path.as_ref();
    let format = match DocumentFormat::from_path(path) {
        Some(format @ (DocumentFormat::Json | DocumentFormat::Yaml)) => format,
        _ => {
            return Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
                expected: DOCUMENT_EXTENSIONS,
            })
        }
    };

    let content = read_file(path)?;
    let root: ComponentNode = format.parse(path, &content)?;

    DocumentLoaded {
        path,
        component_count: root.descendant_count(),
    }
    .log();

    Ok(root)
}
