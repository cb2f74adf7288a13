use std::path::PathBuf;
use thiserror::Error;

/// Failures while building the knowledge tables.
#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("failed to read knowledge file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed knowledge file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("condition name must not be empty")]
    EmptyConditionName,

    #[error("duplicate condition '{0}'")]
    DuplicateCondition(String),

    #[error("weight for '{phrase}' must be a finite non-negative number, got {weight}")]
    InvalidWeight { phrase: String, weight: f64 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {var}")]
    InvalidValue { var: &'static str, value: String },
}
