use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const SPAM_LABEL: &str = "SPAM";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    #[default]
    Message,
    Inbox,
}

impl ScanMode {
    /// Fixed user-visible message for any failure of this mode's request.
    pub fn failure_message(self) -> &'static str {
        match self {
            ScanMode::Message => "Prediction failed.",
            ScanMode::Inbox => "Inbox scan failed.",
        }
    }

    pub fn scan_type(self) -> &'static str {
        match self {
            ScanMode::Message => "Single Message",
            ScanMode::Inbox => "Gmail Inbox",
        }
    }

    pub fn tab_title(self) -> &'static str {
        match self {
            ScanMode::Message => "Message Scan",
            ScanMode::Inbox => "Gmail Inbox Scan",
        }
    }
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanMode::Message => f.write_str("message"),
            ScanMode::Inbox => f.write_str("inbox"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanRequest {
    Message { email: String, text: String },
    Inbox { email: String },
}

impl ScanRequest {
    pub fn mode(&self) -> ScanMode {
        match self {
            ScanRequest::Message { .. } => ScanMode::Message,
            ScanRequest::Inbox { .. } => ScanMode::Inbox,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            ScanRequest::Message { email, .. } | ScanRequest::Inbox { email } => email,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailEntry {
    pub from: String,
    pub message: String,
    pub label: String,
}

impl DetailEntry {
    pub fn is_spam(&self) -> bool {
        self.label == SPAM_LABEL
    }
}

/// Raw JSON object returned by the classification service. Fields are read
/// leniently: anything missing or of the wrong type is treated as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanPayload(Map<String, Value>);

impl ScanPayload {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Non-object bodies carry no fields.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self(fields),
            _ => Self::default(),
        }
    }

    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn number_field(&self, key: &str) -> Option<&serde_json::Number> {
        match self.0.get(key) {
            Some(Value::Number(n)) => Some(n),
            _ => None,
        }
    }

    pub fn array_field(&self, key: &str) -> Option<&Vec<Value>> {
        self.0.get(key).and_then(Value::as_array)
    }

    /// A service-reported error. The original UI rendered any non-empty
    /// `error` key as a failure.
    pub fn has_error(&self) -> bool {
        match self.0.get("error") {
            None | Some(Value::Null) | Some(Value::Bool(false)) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        }
    }
}

impl From<Value> for ScanPayload {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}
