// File: crates/viz-core/src/error.rs
// Summary: Library error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VizError {
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("unknown template field `{0}`")]
    TemplateField(String),
}
