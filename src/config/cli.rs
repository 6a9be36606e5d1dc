use crate::config::LibraryConfig;
use crate::core::middleware::LogFailurePolicy;
use crate::utils::error::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "small-library")]
#[command(about = "Interactive catalog, borrowing and return desk for a small library")]
pub struct CliConfig {
    /// Path to a TOML configuration file; the built-in catalog is used without one
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the action log path from the configuration
    #[arg(long)]
    pub log_file: Option<String>,

    /// Override what happens when the action log cannot be written (warn or fail)
    #[arg(long)]
    pub on_log_failure: Option<LogFailurePolicy>,

    #[arg(long, value_enum, default_value = "compact")]
    pub log_format: LogFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Reads the configuration file (if any) and applies command-line overrides.
    pub fn load_library_config(&self) -> Result<LibraryConfig> {
        let mut config = match &self.config {
            Some(path) => LibraryConfig::from_file(path)?,
            None => LibraryConfig::default(),
        };

        if let Some(path) = &self.log_file {
            tracing::info!("Action log path overridden to: {}", path);
            config.action_log.path = path.clone();
        }
        if let Some(policy) = self.on_log_failure {
            tracing::info!("Action log failure policy overridden to: {}", policy);
            config.action_log.on_write_failure = policy;
        }

        Ok(config)
    }
}
