use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML content: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON content: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported content format: {0} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),

    #[error("Section {index} has an empty id")]
    EmptySectionId { index: usize },

    #[error("Duplicate section id: {0}")]
    DuplicateSectionId(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FullscreenError {
    #[error("the display does not report fullscreen support")]
    Unsupported,

    #[error("fullscreen request was denied")]
    Denied,
}

pub type Result<T> = std::result::Result<T, ContentError>;
