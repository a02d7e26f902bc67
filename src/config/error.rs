use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("required config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        source: roxmltree::Error,
    },

    #[error("failed to parse XML document: {0}")]
    InvalidXml(#[from] roxmltree::Error),

    #[error("no configuration document could be loaded")]
    NoDocument,

    #[error("environment separator must not be empty")]
    InvalidEnvSeparator,
}
