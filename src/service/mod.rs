mod client;
mod wire;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{ScanPayload, ScanRequest};

pub use client::HttpClassifier;
pub use wire::{InboxScanBody, PredictBody, PREDICT_PATH, SCAN_INBOX_PATH};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("service responded with status {0}")]
    Status(reqwest::StatusCode),
    #[error("response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("service reported an error in the response body")]
    Rejected,
    #[error("invalid endpoint url: {0}")]
    Url(#[from] url::ParseError),
}

/// The remote classifier. Each call is a single request with no retries.
#[async_trait]
pub trait ClassificationService: Send + Sync {
    async fn predict(&self, email: &str, text: &str) -> Result<ScanPayload, ServiceError>;

    async fn scan_inbox(&self, email: &str) -> Result<ScanPayload, ServiceError>;
}

/// Routes a request to the operation matching its mode.
pub async fn dispatch(
    service: &dyn ClassificationService,
    request: &ScanRequest,
) -> Result<ScanPayload, ServiceError> {
    match request {
        ScanRequest::Message { email, text } => service.predict(email, text).await,
        ScanRequest::Inbox { email } => service.scan_inbox(email).await,
    }
}
