use crate::core::fact_fetcher::FACT_TIMEOUT;
use crate::domain::ports::FactSource;
use crate::utils::error::{FactError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_TRIVIA_BASE_URL: &str = "http://numbersapi.com";

/// Plain-text client for a numbers-trivia endpoint of the form `GET {base}/{n}`.
#[derive(Debug, Clone)]
pub struct NumbersApiClient {
    base_url: String,
    client: Client,
}

impl NumbersApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, FACT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn fact_url(&self, number: i64) -> String {
        format!("{}/{}", self.base_url, number)
    }
}

#[async_trait]
impl FactSource for NumbersApiClient {
    async fn fetch(&self, number: i64) -> std::result::Result<String, FactError> {
        let url = self.fact_url(number);
        tracing::debug!("Requesting fun fact from: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!("Trivia response status: {}", status);

        if !status.is_success() {
            return Err(FactError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn test_fact_url_trims_trailing_slash() {
        let client = NumbersApiClient::new("http://numbersapi.com/").unwrap();
        assert_eq!(client.fact_url(371), "http://numbersapi.com/371");
        assert_eq!(client.fact_url(-5), "http://numbersapi.com/-5");
    }

    #[tokio::test]
    async fn test_fetch_returns_body_verbatim() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/371");
            then.status(200)
                .header("Content-Type", "text/plain")
                .body("371 is a narcissistic number.");
        });

        let client = NumbersApiClient::new(server.base_url()).unwrap();
        let fact = client.fetch(371).await.unwrap();

        api_mock.assert();
        assert_eq!(fact, "371 is a narcissistic number.");
    }

    #[tokio::test]
    async fn test_fetch_maps_non_success_status() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/42");
            then.status(429);
        });

        let client = NumbersApiClient::new(server.base_url()).unwrap();
        let err = client.fetch(42).await.unwrap_err();

        api_mock.assert();
        assert_eq!(err, FactError::Status(429));
    }

    #[tokio::test]
    async fn test_fetch_maps_timeout() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/7");
            then.status(200)
                .body("too slow")
                .delay(Duration::from_millis(500));
        });

        let client =
            NumbersApiClient::with_timeout(server.base_url(), Duration::from_millis(50)).unwrap();
        let err = client.fetch(7).await.unwrap_err();

        assert_eq!(err, FactError::Timeout);
    }

    #[tokio::test]
    async fn test_fetch_maps_transport_error() {
        // nothing listens on port 1
        let client = NumbersApiClient::new("http://127.0.0.1:1").unwrap();
        let err = client.fetch(1).await.unwrap_err();

        assert!(matches!(err, FactError::Transport(_)));
    }
}
