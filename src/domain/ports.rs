use crate::utils::error::FactError;
use async_trait::async_trait;

/// Source of short trivia text about an integer.
#[async_trait]
pub trait FactSource: Send + Sync {
    async fn fetch(&self, number: i64) -> std::result::Result<String, FactError>;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_addr(&self) -> &str;
    fn trivia_base_url(&self) -> &str;
    fn cache_capacity(&self) -> usize;
}
