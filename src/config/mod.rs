//! Configuration loading: XML documents plus environment overrides.

mod builder;
mod env;
mod error;
mod file;
mod source;

pub use builder::Config;
pub use error::ConfigError;
pub(crate) use file::load_config_file;
