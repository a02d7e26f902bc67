//! The configuration tree.
//!
//! A [`ConfigNode`] mirrors one XML element: its name, optional text value,
//! attributes and child elements in document order. There is no schema; the
//! tree describes itself through its own names, which is what the path
//! queries in [`path`] and the field resolver in [`accessor`] rely on.

mod accessor;
mod markup;
mod path;

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, instrument, trace};

use crate::config::{load_config_file, ConfigError};

pub use accessor::{Accessor, Field};
pub use markup::MarkupElement;
pub use path::{PathMatch, PathMatchMut};

/// A node of the configuration tree.
///
/// Equality is identity: `a == b` holds only when both refer to the same
/// node. Use [`structural_eq`](Self::structural_eq) to compare contents.
///
/// ## Example
///
/// ```
/// use xml_confnode::ConfigNode;
///
/// let mut root = ConfigNode::unnamed();
/// root.init_from_str(r#"<app name="demo"><db host="localhost"/></app>"#)?;
///
/// assert_eq!(root.attribute("name"), Some("demo"));
/// let db = root.child_at("/app/db").unwrap();
/// assert_eq!(db.attribute("host"), Some("localhost"));
/// # Ok::<(), xml_confnode::ConfigError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigNode {
    name: Option<String>,
    value: Option<String>,
    attributes: HashMap<String, String>,
    children: Vec<ConfigNode>,
}

impl ConfigNode {
    /// Creates an empty node with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Creates an empty node whose name is filled in later by [`init`](Self::init).
    pub fn unnamed() -> Self {
        Self::default()
    }

    /// Creates a leaf node carrying only a name and a value.
    pub fn leaf(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// Recursively initializes this node from a parsed markup element.
    ///
    /// Takes the element's tag as name, its trimmed text as value (left
    /// absent when the text is empty or whitespace only), copies every
    /// attribute, and appends one freshly built child per child element in
    /// document order.
    pub fn init<E: MarkupElement>(&mut self, element: &E) -> &mut Self {
        self.name = Some(element.tag_name().to_string());

        if let Some(text) = element.text() {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                self.value = Some(trimmed.to_string());
            }
        }

        for (key, value) in element.attributes() {
            self.attributes.insert(key, value);
        }

        for child_element in element.child_elements() {
            let mut child = ConfigNode::unnamed();
            child.init(&child_element);
            self.children.push(child);
        }

        trace!(
            name = element.tag_name(),
            children = self.children.len(),
            "initialized node"
        );
        self
    }

    /// Initializes this node from the root element of a parsed document.
    pub fn init_from_document(&mut self, document: &roxmltree::Document<'_>) -> &mut Self {
        self.init(&document.root_element())
    }

    /// Parses `xml` and initializes this node from its root element.
    pub fn init_from_str(&mut self, xml: &str) -> Result<&mut Self, ConfigError> {
        let document = roxmltree::Document::parse(xml)?;
        Ok(self.init_from_document(&document))
    }

    /// Loads and parses the XML file at `path` and initializes this node from it.
    #[instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
    pub fn init_from_file(&mut self, path: impl AsRef<Path>) -> Result<&mut Self, ConfigError> {
        let path = path.as_ref();
        let contents = load_config_file(path, true)?.ok_or_else(|| {
            ConfigError::FileNotFound(path.to_path_buf())
        })?;
        let document =
            roxmltree::Document::parse(&contents).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        debug!("parsed configuration document");
        Ok(self.init_from_document(&document))
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Renames the node.
    ///
    /// Path lookups match on names, so renaming a node that callers already
    /// query by path changes what those queries find.
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    /// The node's trimmed text, e.g. `VALUE` in `<node>VALUE</node>`.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: Option<String>) -> &mut Self {
        self.value = value;
        self
    }

    pub fn children(&self) -> &[ConfigNode] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [ConfigNode] {
        &mut self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Appends `child`. No de-duplication and no reordering.
    pub fn add_child(&mut self, child: ConfigNode) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Appends a leaf child built from `name` and `value`.
    pub fn add_child_with_name_and_value(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.add_child(ConfigNode::leaf(name, value))
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Inserts or overwrites an attribute.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Removes an attribute, returning its previous value.
    pub fn remove_attribute(&mut self, key: &str) -> Option<String> {
        self.attributes.remove(key)
    }

    /// All attributes.
    ///
    /// A `setX` accessor call without an argument removes the attribute, so
    /// such keys do not appear here.
    pub fn attributes(&self) -> &HashMap<String, String> {
        &self.attributes
    }

    /// Returns `true` if `self` and `other` are the same node.
    pub fn identity_eq(&self, other: &ConfigNode) -> bool {
        std::ptr::eq(self, other)
    }

    /// Compares name, value, attributes and children recursively.
    pub fn structural_eq(&self, other: &ConfigNode) -> bool {
        self.name == other.name
            && self.value == other.value
            && self.attributes == other.attributes
            && self.children.len() == other.children.len()
            && self
                .children
                .iter()
                .zip(&other.children)
                .all(|(a, b)| a.structural_eq(b))
    }

    /// First child named `name`, created and appended if there is none.
    pub(crate) fn child_named_mut(&mut self, name: &str) -> &mut ConfigNode {
        let index = match self.children.iter().position(|c| c.name() == Some(name)) {
            Some(index) => index,
            None => {
                self.children.push(ConfigNode::new(name));
                self.children.len() - 1
            }
        };
        &mut self.children[index]
    }
}

impl PartialEq for ConfigNode {
    fn eq(&self, other: &Self) -> bool {
        self.identity_eq(other)
    }
}

impl Eq for ConfigNode {}
