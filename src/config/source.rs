use crate::node::ConfigNode;

use super::ConfigError;

/// Something that can produce a configuration document.
pub trait DocumentSource: Send + Sync + std::fmt::Debug {
    /// Loads and parses the document. `Ok(None)` means an optional source was absent.
    fn load(&self) -> Result<Option<ConfigNode>, ConfigError>;
}

/// An XML document held in memory.
#[derive(Debug, Clone)]
pub struct XmlSource {
    xml: String,
}

impl XmlSource {
    pub fn new(xml: impl Into<String>) -> Self {
        Self { xml: xml.into() }
    }
}

impl DocumentSource for XmlSource {
    fn load(&self) -> Result<Option<ConfigNode>, ConfigError> {
        let mut root = ConfigNode::unnamed();
        root.init_from_str(&self.xml)?;
        Ok(Some(root))
    }
}
