#[cfg(feature = "cli")]
pub mod cli;
pub mod seed;
pub mod toml_config;

pub use toml_config::LibraryConfig;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, LogFormat};
