pub mod config;
mod error;
pub mod node;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use node::{Accessor, ConfigNode, Field, MarkupElement, PathMatch, PathMatchMut};
