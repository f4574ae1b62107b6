use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::Value;

use crate::error::FetchError;
use crate::models::ResultsSummary;

use super::payload::parse_results;

#[async_trait]
pub trait ResultsSource: Send + Sync {
    async fn fetch(&self) -> Result<ResultsSummary, FetchError>;
}

/// Reads the summary from a running results server.
pub struct HttpResultsSource {
    client: Client,
    url: String,
}

impl HttpResultsSource {
    pub fn new(url: impl Into<String>) -> Self {
        // No request timeout: a slow response only delays this tick
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ResultsSource for HttpResultsSource {
    async fn fetch(&self) -> Result<ResultsSummary, FetchError> {
        debug!("Fetching results from {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body: Value = response.json().await?;
        parse_results(&body)
    }
}
