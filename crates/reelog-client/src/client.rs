use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to load {url} ({})", .status.as_u16())]
    Load { url: String, status: StatusCode },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Fetches the review document from a fixed endpoint. One GET per call, no
/// retry, no timeout beyond the transport's defaults.
pub struct ReviewsClient {
    client: Client,
    endpoint: String,
}

impl ReviewsClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch and decode the document, instructing intermediate caches to be
    /// bypassed. A non-success status is an error carrying the status code.
    pub async fn fetch_document(&self) -> Result<Value, FetchError> {
        debug!(url = %self.endpoint, "fetching review document");

        let response = self
            .client
            .get(&self.endpoint)
            .header("Cache-Control", "no-store")
            .header("Pragma", "no-cache")
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Load {
                url: self.endpoint.clone(),
                status: response.status(),
            });
        }

        let document: Value = response.json().await?;
        info!(url = %self.endpoint, "review document loaded");
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_message_carries_url_and_status() {
        let err = FetchError::Load {
            url: "http://localhost:8000/data/reviews.json".to_string(),
            status: StatusCode::NOT_FOUND,
        };
        assert_eq!(
            err.to_string(),
            "Failed to load http://localhost:8000/data/reviews.json (404)"
        );
    }

    #[test]
    fn test_client_keeps_its_endpoint() {
        let client = ReviewsClient::new("http://example.test/reviews.json");
        assert_eq!(client.endpoint(), "http://example.test/reviews.json");
    }
}
