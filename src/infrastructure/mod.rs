//! Infrastructure utilities: platform paths.

pub mod paths;

pub use paths::default_config_path;
