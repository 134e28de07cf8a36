use chrono::{DateTime, Utc};
use serde_json::{Number, Value};

use super::types::{DetailEntry, ScanMode, ScanPayload};

/// Mode-specific fields of a successful scan. Fields belonging to the other
/// mode are not carried over.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Message {
        label: Option<String>,
    },
    Inbox {
        spam_detected: Option<Number>,
        details: Option<Vec<DetailEntry>>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScanReport {
    pub mode: ScanMode,
    pub email: String,
    pub scanned_at: DateTime<Utc>,
    pub verdict: Verdict,
}

impl ScanReport {
    /// Normalizes a service payload. The payload's `email` wins over the
    /// locally submitted address when it is present.
    pub fn from_payload(
        mode: ScanMode,
        local_email: &str,
        payload: &ScanPayload,
        scanned_at: DateTime<Utc>,
    ) -> Self {
        let email = payload
            .str_field("email")
            .filter(|e| !e.is_empty())
            .unwrap_or(local_email)
            .to_string();

        let verdict = match mode {
            ScanMode::Message => Verdict::Message {
                label: payload
                    .str_field("label")
                    .filter(|l| !l.is_empty())
                    .map(str::to_string),
            },
            ScanMode::Inbox => Verdict::Inbox {
                spam_detected: payload.number_field("spam_detected").cloned(),
                details: payload
                    .array_field("details")
                    .map(|items| items.iter().filter_map(detail_from_value).collect()),
            },
        };

        Self {
            mode,
            email,
            scanned_at,
            verdict,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match &self.verdict {
            Verdict::Message { label } => label.as_deref(),
            Verdict::Inbox { .. } => None,
        }
    }

    pub fn spam_detected(&self) -> Option<&Number> {
        match &self.verdict {
            Verdict::Inbox { spam_detected, .. } => spam_detected.as_ref(),
            Verdict::Message { .. } => None,
        }
    }

    /// Detail entries labelled SPAM, in service order. Empty when `details`
    /// was absent.
    pub fn spam_entries(&self) -> Vec<&DetailEntry> {
        match &self.verdict {
            Verdict::Inbox {
                details: Some(details),
                ..
            } => details.iter().filter(|d| d.is_spam()).collect(),
            _ => Vec::new(),
        }
    }
}

fn detail_from_value(value: &Value) -> Option<DetailEntry> {
    let fields = value.as_object()?;
    let text = |key: &str| match fields.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    };
    Some(DetailEntry {
        from: text("from"),
        message: text("message"),
        label: text("label"),
    })
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScanResult {
    Success(ScanReport),
    Error {
        mode: ScanMode,
        message: &'static str,
    },
}

impl ScanResult {
    pub fn failure(mode: ScanMode) -> Self {
        ScanResult::Error {
            mode,
            message: mode.failure_message(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ScanResult::Error { .. })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn report(mode: ScanMode, payload: Value) -> ScanReport {
        ScanReport::from_payload(mode, "local@x.com", &ScanPayload::from(payload), Utc::now())
    }

    #[test]
    fn payload_email_is_authoritative() {
        let r = report(ScanMode::Message, json!({"label": "SPAM", "email": "remote@x.com"}));
        assert_eq!(r.email, "remote@x.com");
    }

    #[test]
    fn falls_back_to_local_email() {
        let r = report(ScanMode::Message, json!({"label": "SAFE"}));
        assert_eq!(r.email, "local@x.com");
        let r = report(ScanMode::Inbox, json!({"email": 42}));
        assert_eq!(r.email, "local@x.com");
    }

    #[test]
    fn message_verdict_ignores_inbox_fields() {
        let r = report(
            ScanMode::Message,
            json!({"label": "SPAM", "spam_detected": 4, "details": []}),
        );
        assert_eq!(
            r.verdict,
            Verdict::Message {
                label: Some("SPAM".into())
            }
        );
        assert!(r.spam_detected().is_none());
    }

    #[test]
    fn inbox_verdict_keeps_zero_count() {
        let r = report(ScanMode::Inbox, json!({"spam_detected": 0}));
        assert_eq!(r.spam_detected().map(|n| n.to_string()), Some("0".into()));
        assert!(r.spam_entries().is_empty());
    }

    #[test]
    fn absent_fields_are_tolerated() {
        let r = report(ScanMode::Inbox, json!({}));
        assert_eq!(
            r.verdict,
            Verdict::Inbox {
                spam_detected: None,
                details: None
            }
        );
        let r = report(ScanMode::Message, json!({}));
        assert_eq!(r.label(), None);
    }

    #[test]
    fn spam_entries_keep_service_order() {
        let r = report(
            ScanMode::Inbox,
            json!({
                "spam_detected": 2,
                "details": [
                    {"from": "b@x", "message": "second", "label": "SPAM"},
                    {"from": "c@x", "message": "fine", "label": "SAFE"},
                    "garbage",
                    {"from": "a@x", "message": "first", "label": "SPAM"},
                ]
            }),
        );
        let froms: Vec<&str> = r.spam_entries().iter().map(|d| d.from.as_str()).collect();
        assert_eq!(froms, vec!["b@x", "a@x"]);
    }

    #[test]
    fn failure_uses_fixed_message() {
        assert_eq!(
            ScanResult::failure(ScanMode::Inbox),
            ScanResult::Error {
                mode: ScanMode::Inbox,
                message: "Inbox scan failed."
            }
        );
    }
}
