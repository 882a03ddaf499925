//! Adapter for the government open-data datastore.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::models::RawRecord;
use crate::names;

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Errors from fetching the question bank.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("datastore request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("datastore returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed datastore envelope: {0}")]
    Envelope(#[from] serde_json::Error),
}

/// Anything that can produce the full question record set.
///
/// The production implementation is [`DatastoreClient`]; tests substitute
/// fakes to exercise the cache without network calls.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<RawRecord>, SourceError>;
}

/// CKAN `datastore_search` envelope.
#[derive(Deserialize)]
struct SearchEnvelope {
    result: SearchResult,
}

#[derive(Deserialize)]
struct SearchResult {
    #[serde(default)]
    records: Vec<RawRecord>,
}

/// Client for a CKAN-style datastore holding the theory-test questions.
pub struct DatastoreClient {
    base_url: String,
    resource_id: String,
    client: reqwest::Client,
}

impl DatastoreClient {
    pub fn new(base_url: &str, resource_id: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("failed to build HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            resource_id: resource_id.to_string(),
            client,
        }
    }
}

#[async_trait]
impl QuestionSource for DatastoreClient {
    async fn fetch_all(&self) -> Result<Vec<RawRecord>, SourceError> {
        let url = format!("{}{}", self.base_url, names::DATASTORE_SEARCH_PATH);
        let limit = names::FETCH_LIMIT.to_string();

        let response = self
            .client
            .get(url)
            .query(&[
                ("resource_id", self.resource_id.as_str()),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status));
        }

        let body = response.text().await?;
        let envelope: SearchEnvelope = serde_json::from_str(&body)?;

        Ok(envelope.result.records)
    }
}
