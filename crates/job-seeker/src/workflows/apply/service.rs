use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::materials::ApplicationPacket;
use crate::workflows::search::JobId;

/// Tracking state reported for a submitted application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Applied,
    Viewed,
    InterviewScheduled,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Viewed => "Application Viewed",
            Self::InterviewScheduled => "Interview Scheduled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub confirmation_id: String,
    pub job_id: JobId,
    pub job_title: String,
    pub company_name: String,
    pub submitted_at: DateTime<Utc>,
    pub status: ApplicationStatus,
}

/// Seam for handing a finished application to whatever processes it.
#[async_trait]
pub trait ApplicationSubmissionService: Send + Sync {
    async fn submit(&self, packet: ApplicationPacket) -> Result<SubmissionReceipt, SubmissionError>;

    /// Submitted applications, newest first.
    async fn history(&self) -> Result<Vec<SubmissionReceipt>, SubmissionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("application backend unreachable: {0}")]
    Transport(String),
    #[error("application backend answered with status {status}")]
    Status { status: u16 },
    #[error("application backend returned an unusable document: {0}")]
    InvalidResponse(String),
}

/// Simulated submissions: waits the configured latency and records receipts
/// in memory.
#[derive(Debug, Default)]
pub struct InMemorySubmissions {
    receipts: Mutex<Vec<SubmissionReceipt>>,
    sequence: AtomicU64,
    delay: Duration,
}

impl InMemorySubmissions {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    fn next_confirmation_id(&self) -> String {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        format!("apl-{id:06}")
    }
}

#[async_trait]
impl ApplicationSubmissionService for InMemorySubmissions {
    async fn submit(&self, packet: ApplicationPacket) -> Result<SubmissionReceipt, SubmissionError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let receipt = SubmissionReceipt {
            confirmation_id: self.next_confirmation_id(),
            job_id: packet.job_id,
            job_title: packet.job_title,
            company_name: packet.company_name,
            submitted_at: Utc::now(),
            status: ApplicationStatus::Applied,
        };
        info!(
            confirmation = %receipt.confirmation_id,
            job_id = %receipt.job_id,
            "application recorded"
        );

        self.receipts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(receipt.clone());
        Ok(receipt)
    }

    async fn history(&self) -> Result<Vec<SubmissionReceipt>, SubmissionError> {
        let receipts = self.receipts.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(receipts.iter().rev().cloned().collect())
    }
}

/// Submissions forwarded to an HTTP endpoint: `POST` the packet, `GET` the
/// history from the same URL.
#[derive(Debug, Clone)]
pub struct RemoteSubmissions {
    client: reqwest::Client,
    endpoint: String,
}

impl RemoteSubmissions {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, SubmissionError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| SubmissionError::Transport(err.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    async fn read_json<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, SubmissionError> {
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "application backend rejected the request");
            return Err(SubmissionError::Status {
                status: status.as_u16(),
            });
        }
        response
            .json::<T>()
            .await
            .map_err(|err| SubmissionError::InvalidResponse(err.to_string()))
    }
}

#[async_trait]
impl ApplicationSubmissionService for RemoteSubmissions {
    async fn submit(&self, packet: ApplicationPacket) -> Result<SubmissionReceipt, SubmissionError> {
        info!(endpoint = %self.endpoint, job_id = %packet.job_id, "submitting application");
        let response = self
            .client
            .post(&self.endpoint)
            .json(&packet)
            .send()
            .await
            .map_err(|err| SubmissionError::Transport(err.to_string()))?;
        Self::read_json(response).await
    }

    async fn history(&self) -> Result<Vec<SubmissionReceipt>, SubmissionError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|err| SubmissionError::Transport(err.to_string()))?;
        Self::read_json(response).await
    }
}
