use std::path::Path;

use tracing::{debug, instrument};

use super::env::EnvSource;
use super::file::FileSource;
use super::source::{DocumentSource, XmlSource};
use super::ConfigError;
use crate::node::ConfigNode;

/// A configuration source in the loading pipeline.
#[derive(Debug)]
enum ConfigSource {
    Document(Box<dyn DocumentSource>),
    Env(EnvSource),
}

/// Builder for loading a [`ConfigNode`] tree from XML.
///
/// Document sources are loaded in registration order and the first one that
/// produces a document becomes the tree; later documents are still loaded,
/// so a missing required file or a malformed document always fails the
/// build. Environment overrides are applied to the chosen tree afterwards,
/// in registration order.
///
/// ## Example
///
/// ```no_run
/// use xml_confnode::Config;
///
/// // local file if present, otherwise the shipped defaults
/// let root = Config::builder()
///     .with_file("config/local.xml", false)
///     .with_file("config/default.xml", true)
///     .with_env("MYAPP", "__")
///     .build()?;
///
/// let db = root.child_at("/app/db");
/// # Ok::<(), xml_confnode::ConfigError>(())
/// ```
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct Config {
    sources: Vec<ConfigSource>,
}

impl Config {
    /// Creates a new configuration builder.
    pub fn builder() -> Self {
        Self::default()
    }

    /// Adds an XML file to be loaded.
    ///
    /// If `required` is `true`, the build will fail if the file doesn't exist.
    /// Optional files that are missing are silently skipped.
    pub fn with_file(mut self, path: impl AsRef<Path>, required: bool) -> Self {
        self.sources
            .push(ConfigSource::Document(Box::new(FileSource::new(path, required))));
        self
    }

    /// Adds an in-memory XML document.
    pub fn with_xml(mut self, xml: impl Into<String>) -> Self {
        self.sources
            .push(ConfigSource::Document(Box::new(XmlSource::new(xml))));
        self
    }

    /// Overrides attributes from environment variables with the given prefix.
    ///
    /// Variables are mapped to the tree by:
    /// 1. Removing the prefix and separator
    /// 2. Splitting remaining segments on the separator
    /// 3. Converting segments to lowercase
    ///
    /// The last segment names the attribute, the ones before it name the
    /// children to descend through below the root. Values stay strings.
    ///
    /// Missing children are created, so an override can add nodes that later
    /// path queries return.
    pub fn with_env(mut self, prefix: impl Into<String>, separator: impl Into<String>) -> Self {
        self.sources
            .push(ConfigSource::Env(EnvSource::new(prefix, separator)));
        self
    }

    /// Loads the document, applies overrides, and returns the root node.
    #[instrument(level = "debug", skip_all, fields(sources = self.sources.len()))]
    pub fn build(self) -> Result<ConfigNode, ConfigError> {
        let mut root: Option<ConfigNode> = None;
        let mut env_sources = Vec::new();

        for source in self.sources {
            match source {
                ConfigSource::Document(document) => {
                    match document.load()? {
                        Some(node) if root.is_none() => root = Some(node),
                        Some(_) => debug!(?document, "shadowed by earlier document"),
                        None => {}
                    }
                }
                ConfigSource::Env(env) => env_sources.push(env),
            }
        }

        let mut root = root.ok_or(ConfigError::NoDocument)?;
        for env in env_sources {
            for entry in env.overrides()? {
                entry.apply(&mut root);
            }
        }

        Ok(root)
    }
}
