use crate::adapters::numbers_api::DEFAULT_TRIVIA_BASE_URL;
use crate::core::fact_cache::DEFAULT_CACHE_CAPACITY;
use crate::core::ConfigProvider;
use crate::utils::error::{ClassifierError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const MAX_CACHE_CAPACITY: usize = 1_000_000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub server: ServerConfig,
    pub trivia: TriviaConfig,
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriviaConfig {
    pub base_url: String,
}

impl Default for TriviaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_TRIVIA_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl ServiceConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ClassifierError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${TRIVIA_URL})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ClassifierError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for ServiceConfig {
    fn bind_addr(&self) -> &str {
        &self.server.bind
    }

    fn trivia_base_url(&self) -> &str {
        &self.trivia.base_url
    }

    fn cache_capacity(&self) -> usize {
        self.cache.capacity
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_socket_addr("server.bind", &self.server.bind)?;
        validate_url("trivia.base_url", &self.trivia.base_url)?;
        validate_range("cache.capacity", self.cache.capacity, 1, MAX_CACHE_CAPACITY)?;

        Ok(())
    }
}
