pub mod toml_config;

pub use toml_config::ServiceConfig;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "number-classifier")]
#[command(about = "HTTP service that classifies integers and attaches a fun fact")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Socket address to listen on (default 0.0.0.0:8000)")]
    pub bind: Option<String>,

    #[arg(long, help = "Base URL of the numbers trivia service")]
    pub trivia_url: Option<String>,

    #[arg(long, help = "Maximum number of cached fun facts")]
    pub cache_capacity: Option<usize>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併設定檔與命令列參數，命令列優先
    pub fn resolve(&self) -> Result<ServiceConfig> {
        let mut config = match &self.config {
            Some(path) => ServiceConfig::from_file(path)?,
            None => ServiceConfig::default(),
        };

        if let Some(bind) = &self.bind {
            config.server.bind = bind.clone();
        }
        if let Some(url) = &self.trivia_url {
            config.trivia.base_url = url.clone();
        }
        if let Some(capacity) = self.cache_capacity {
            config.cache.capacity = capacity;
        }

        config.validate()?;
        Ok(config)
    }
}
