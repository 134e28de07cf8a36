use serde::Serialize;
use serde_json::Value;

use crate::domain::ScanPayload;

use super::ServiceError;

pub const PREDICT_PATH: &str = "predict";
pub const SCAN_INBOX_PATH: &str = "scan-inbox";

#[derive(Debug, Serialize)]
pub struct PredictBody<'a> {
    pub email: &'a str,
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
pub struct InboxScanBody<'a> {
    pub email: &'a str,
}

pub fn parse_payload(body: &[u8]) -> Result<ScanPayload, ServiceError> {
    let value: Value = serde_json::from_slice(body)?;
    let payload = ScanPayload::from_value(value);
    if payload.has_error() {
        return Err(ServiceError::Rejected);
    }
    Ok(payload)
}
