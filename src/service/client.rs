use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use url::Url;

use crate::{config::ServiceConfig, domain::ScanPayload};

use super::{
    wire::{parse_payload, InboxScanBody, PredictBody, PREDICT_PATH, SCAN_INBOX_PATH},
    ClassificationService, ServiceError,
};

#[derive(Clone)]
pub struct HttpClassifier {
    http: Client,
    base_url: Url,
}

impl HttpClassifier {
    pub fn new(http: Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(format!("spamzero/{}", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self::new(http, config.base_url.clone()))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ServiceError> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }
        Ok(base.join(path)?)
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ScanPayload, ServiceError> {
        let url = self.endpoint(path)?;
        tracing::debug!(target: "service", url = %url, "sending scan request");

        let response = self.http.post(url).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Status(status));
        }

        let bytes = response.bytes().await?;
        parse_payload(&bytes)
    }
}

#[async_trait]
impl ClassificationService for HttpClassifier {
    async fn predict(&self, email: &str, text: &str) -> Result<ScanPayload, ServiceError> {
        self.post(PREDICT_PATH, &PredictBody { email, text }).await
    }

    async fn scan_inbox(&self, email: &str) -> Result<ScanPayload, ServiceError> {
        self.post(SCAN_INBOX_PATH, &InboxScanBody { email }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier(base: &str) -> HttpClassifier {
        HttpClassifier::new(Client::new(), Url::parse(base).unwrap())
    }

    #[test]
    fn endpoints_join_onto_root() {
        let c = classifier("http://localhost:5000");
        assert_eq!(
            c.endpoint(PREDICT_PATH).unwrap().as_str(),
            "http://localhost:5000/predict"
        );
    }

    #[test]
    fn endpoints_keep_base_path() {
        let c = classifier("https://scanner.example.com/api");
        assert_eq!(
            c.endpoint(SCAN_INBOX_PATH).unwrap().as_str(),
            "https://scanner.example.com/api/scan-inbox"
        );
        let c = classifier("https://scanner.example.com/api/");
        assert_eq!(
            c.endpoint(SCAN_INBOX_PATH).unwrap().as_str(),
            "https://scanner.example.com/api/scan-inbox"
        );
    }
}
