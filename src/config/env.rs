//! Attribute overrides taken from environment variables.
//!
//! `MYAPP__DB__HOST=db.internal` with prefix `MYAPP` and separator `__`
//! sets attribute `host` on the first `db` child of the root node. A `db`
//! child is appended when none exists, which adds to what path queries find.

use tracing::{debug, trace};

use super::ConfigError;
use crate::node::ConfigNode;

#[derive(Debug, Clone)]
pub struct EnvSource {
    prefix: String,
    separator: String,
}

/// One attribute assignment below the root node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvOverride {
    /// Child names to descend through, starting below the root.
    pub path: Vec<String>,
    pub key: String,
    pub value: String,
}

impl EnvSource {
    pub fn new(prefix: impl Into<String>, separator: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            separator: separator.into(),
        }
    }

    /// Collects overrides from the process environment.
    pub fn overrides(&self) -> Result<Vec<EnvOverride>, ConfigError> {
        self.overrides_from(std::env::vars())
    }

    /// Collects overrides from `vars`, ordered by variable name.
    pub fn overrides_from(
        &self,
        vars: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Vec<EnvOverride>, ConfigError> {
        if self.separator.is_empty() {
            return Err(ConfigError::InvalidEnvSeparator);
        }

        let prefix_with_sep = format!("{}{}", self.prefix, self.separator);
        let mut matching: Vec<(String, String)> = vars
            .into_iter()
            .filter(|(key, _)| key.starts_with(&prefix_with_sep))
            .collect();
        matching.sort();

        let mut overrides = Vec::new();
        for (key, value) in matching {
            let path_str = &key[prefix_with_sep.len()..];
            let mut segments: Vec<String> = path_str
                .split(&self.separator)
                .map(|s| s.to_lowercase())
                .collect();

            if segments.iter().any(|s| s.is_empty()) {
                trace!(var = %key, "skipping variable with empty path segment");
                continue;
            }

            // split always yields at least one segment
            let Some(attr) = segments.pop() else { continue };
            overrides.push(EnvOverride {
                path: segments,
                key: attr,
                value,
            });
        }

        Ok(overrides)
    }
}

impl EnvOverride {
    /// Sets the attribute, creating missing children along the path.
    ///
    /// Created children become visible to later path queries.
    pub fn apply(&self, root: &mut ConfigNode) {
        let mut node = root;
        for name in &self.path {
            node = node.child_named_mut(name);
        }
        debug!(path = ?self.path, key = %self.key, "applying environment override");
        node.set_attribute(self.key.clone(), self.value.clone());
    }
}
