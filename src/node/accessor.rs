//! Field resolution by name, and the `getX` / `setX` accessor protocol on top of it.

use super::ConfigNode;
use crate::Error;

/// What a field name resolved to on a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field<'a> {
    Child(&'a ConfigNode),
    Attribute(&'a str),
}

impl<'a> Field<'a> {
    pub fn as_child(&self) -> Option<&'a ConfigNode> {
        match self {
            Field::Child(node) => Some(*node),
            Field::Attribute(_) => None,
        }
    }

    pub fn as_attribute(&self) -> Option<&'a str> {
        match self {
            Field::Child(_) => None,
            Field::Attribute(value) => Some(*value),
        }
    }
}

/// An accessor-style method name such as `getHost` or `setPort`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Accessor {
    Get(String),
    Set(String),
}

impl Accessor {
    /// Parses `getFoo` / `setFoo` into the field name `foo`.
    ///
    /// Returns `None` for any other shape, including a bare `get` or `set`.
    pub fn parse(method: &str) -> Option<Self> {
        if let Some(field) = method.strip_prefix("get") {
            return lower_first(field).map(Accessor::Get);
        }
        if let Some(field) = method.strip_prefix("set") {
            return lower_first(field).map(Accessor::Set);
        }
        None
    }

    pub fn field(&self) -> &str {
        match self {
            Accessor::Get(field) | Accessor::Set(field) => field,
        }
    }
}

fn lower_first(s: &str) -> Option<String> {
    let mut chars = s.chars();
    let first = chars.next()?;
    Some(first.to_lowercase().chain(chars).collect())
}

impl ConfigNode {
    /// Resolves `name` against this node: a child reachable as
    /// `/<own name>/<name>` wins, otherwise the attribute `name`.
    pub fn resolve_field(&self, name: &str) -> Option<Field<'_>> {
        if let Some(own) = self.name() {
            if let Some(child) = self.child_at(&format!("/{own}/{name}")) {
                return Some(Field::Child(child));
            }
        }
        self.attribute(name).map(Field::Attribute)
    }

    /// Runs a getter-style call such as `getHost` against this node.
    ///
    /// Resolves the field via [`resolve_field`](Self::resolve_field). Any
    /// name that is not getter-shaped is an [`Error::UnsupportedOperation`].
    pub fn get(&self, method: &str) -> Result<Option<Field<'_>>, Error> {
        match Accessor::parse(method) {
            Some(Accessor::Get(field)) => Ok(self.resolve_field(&field)),
            _ => Err(unsupported(method, &[])),
        }
    }

    /// Runs a setter-style call such as `setHost` against this node.
    ///
    /// Stores the first argument as the attribute, or removes the attribute
    /// when no argument is given. Any name that is not setter-shaped is an
    /// [`Error::UnsupportedOperation`].
    pub fn set(&mut self, method: &str, args: &[&str]) -> Result<(), Error> {
        let Some(Accessor::Set(field)) = Accessor::parse(method) else {
            return Err(unsupported(method, args));
        };
        match args.first() {
            Some(value) => {
                self.set_attribute(field, *value);
            }
            None => {
                self.remove_attribute(&field);
            }
        }
        Ok(())
    }

    /// Dispatches an accessor-style call to [`get`](Self::get) or [`set`](Self::set).
    ///
    /// Setters yield `None`. Any other method name is an
    /// [`Error::UnsupportedOperation`].
    ///
    /// ## Example
    ///
    /// ```
    /// use xml_confnode::{ConfigNode, Field};
    ///
    /// let mut server = ConfigNode::new("server");
    /// server.call("setPort", &["8080"])?;
    ///
    /// assert_eq!(server.get("getPort")?, Some(Field::Attribute("8080")));
    /// assert!(server.call("port", &[]).is_err());
    /// # Ok::<(), xml_confnode::Error>(())
    /// ```
    pub fn call(&mut self, method: &str, args: &[&str]) -> Result<Option<Field<'_>>, Error> {
        match Accessor::parse(method) {
            Some(Accessor::Get(_)) => self.get(method),
            Some(Accessor::Set(_)) => self.set(method, args).map(|()| None),
            None => Err(unsupported(method, args)),
        }
    }
}

fn unsupported(method: &str, args: &[&str]) -> Error {
    Error::UnsupportedOperation {
        method: method.to_string(),
        args: args.iter().map(|arg| arg.to_string()).collect(),
    }
}
