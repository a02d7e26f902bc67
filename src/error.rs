use crate::config::ConfigError;
use thiserror::Error;

/// Top-level error type for the xml-confnode library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("unsupported operation ConfigNode::{method}({})", .args.join(", "))]
    UnsupportedOperation { method: String, args: Vec<String> },
}
