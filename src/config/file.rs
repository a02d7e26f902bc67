//! File-based configuration source.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::source::DocumentSource;
use super::ConfigError;
use crate::node::ConfigNode;

/// A configuration source that loads from an XML file.
///
/// Files can be marked as required or optional. Required files that don't exist
/// cause an error; optional files that don't exist are silently skipped.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    required: bool,
}

impl FileSource {
    /// Creates a new file source.
    ///
    /// If `required` is true, the build will fail if the file doesn't exist.
    pub fn new(path: impl AsRef<Path>, required: bool) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            required,
        }
    }
}

impl DocumentSource for FileSource {
    fn load(&self) -> Result<Option<ConfigNode>, ConfigError> {
        let Some(contents) = load_config_file(&self.path, self.required)? else {
            debug!(path = %self.path.display(), "optional config file missing");
            return Ok(None);
        };

        let document =
            roxmltree::Document::parse(&contents).map_err(|e| ConfigError::ParseError {
                path: self.path.clone(),
                source: e,
            })?;

        let mut root = ConfigNode::unnamed();
        root.init_from_document(&document);
        debug!(path = %self.path.display(), "loaded config file");
        Ok(Some(root))
    }
}

/// Reads a config file to a string.
///
/// Returns `Ok(None)` if the file doesn't exist and `required` is false.
pub(crate) fn load_config_file(path: &Path, required: bool) -> Result<Option<String>, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            if required {
                Err(ConfigError::FileNotFound(path.to_path_buf()))
            } else {
                Ok(None)
            }
        }
        Err(e) => Err(ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
