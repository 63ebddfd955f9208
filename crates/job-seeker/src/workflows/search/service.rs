use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tracing::{info, warn};

use super::catalog::sample_result_set;
use super::domain::ResultSet;
use super::parser::SearchQuery;
use super::payload::{parse_payload, PayloadError};

/// Seam between the UI and whatever produces job matches.
#[async_trait]
pub trait JobSearchService: Send + Sync {
    async fn search(&self, query: SearchQuery) -> Result<ResultSet, SearchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("job search backend unreachable: {0}")]
    Transport(String),
    #[error("job search backend answered with status {status}")]
    Status { status: u16 },
    #[error("job search backend returned an unusable document: {0}")]
    InvalidResponse(#[from] PayloadError),
}

/// Deterministic search: waits the configured latency, then answers goal
/// queries from a fixed catalog.
#[derive(Debug, Clone)]
pub struct InMemoryJobSearch {
    catalog: ResultSet,
    delay: Duration,
}

impl InMemoryJobSearch {
    pub fn new(catalog: ResultSet, delay: Duration) -> Self {
        Self { catalog, delay }
    }

    pub fn with_sample_catalog(delay: Duration) -> Result<Self, PayloadError> {
        Ok(Self::new(sample_result_set()?, delay))
    }
}

#[async_trait]
impl JobSearchService for InMemoryJobSearch {
    async fn search(&self, query: SearchQuery) -> Result<ResultSet, SearchError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let results = match query {
            SearchQuery::Pasted(set) => set,
            SearchQuery::Goal(goal) => self.catalog.clone().with_goal(goal),
        };
        info!(matches = results.len(), "in-memory search complete");
        Ok(results)
    }
}

/// Job search backed by an HTTP endpoint that accepts `{"goal": ...}` and
/// answers with the same document format users can paste.
#[derive(Debug, Clone)]
pub struct RemoteJobSearch {
    client: reqwest::Client,
    endpoint: String,
}

impl RemoteJobSearch {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| SearchError::Transport(err.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl JobSearchService for RemoteJobSearch {
    async fn search(&self, query: SearchQuery) -> Result<ResultSet, SearchError> {
        let goal = match query {
            SearchQuery::Pasted(set) => return Ok(set),
            SearchQuery::Goal(goal) => goal,
        };

        info!(endpoint = %self.endpoint, "requesting job matches");
        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "goal": goal }))
            .send()
            .await
            .map_err(|err| SearchError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "job search backend rejected the request");
            return Err(SearchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|err| SearchError::Transport(err.to_string()))?;
        let results = parse_payload(&body)?;
        Ok(results.with_goal(goal))
    }
}
