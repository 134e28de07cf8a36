use chrono_tz::Tz;

use crate::domain::{ScanReport, ScanResult, SPAM_LABEL};

use super::controller::ScanState;

pub const NO_SCAN_NOTICE: &str = "No scan performed yet. Run a scan to view results.";
pub const SCANNING_NOTICE: &str = "Scanning...";
pub const DETECTED_SPAM_HEADING: &str = "Detected Spam Messages";
pub const NO_SPAM_NOTICE: &str = "No spam messages were detected in this scan.";
pub const REPORT_EMAILED_NOTICE: &str =
    "A detailed scan report has been sent to the provided email address.";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    Spam,
    Safe,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub style: BadgeStyle,
    pub text: String,
}

impl Badge {
    pub fn from_label(label: &str) -> Self {
        let style = if label == SPAM_LABEL {
            BadgeStyle::Spam
        } else {
            BadgeStyle::Safe
        };
        Self {
            style,
            text: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpamItem {
    pub from: String,
    pub message: String,
}

/// Absent `details`, an empty list and an all-safe list all collapse into
/// `NoneDetected`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpamList {
    Detected(Vec<SpamItem>),
    NoneDetected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportView {
    pub scan_type: &'static str,
    pub email: String,
    pub scanned_at: String,
    pub badge: Option<Badge>,
    pub spam_count: Option<String>,
    pub spam_list: SpamList,
}

impl ReportView {
    pub fn from_report(report: &ScanReport, tz: Tz) -> Self {
        let spam: Vec<SpamItem> = report
            .spam_entries()
            .into_iter()
            .map(|entry| SpamItem {
                from: entry.from.clone(),
                message: entry.message.clone(),
            })
            .collect();

        Self {
            scan_type: report.mode.scan_type(),
            email: report.email.clone(),
            scanned_at: report
                .scanned_at
                .with_timezone(&tz)
                .format(TIMESTAMP_FORMAT)
                .to_string(),
            badge: report.label().map(Badge::from_label),
            spam_count: report.spam_detected().map(|n| n.to_string()),
            spam_list: if spam.is_empty() {
                SpamList::NoneDetected
            } else {
                SpamList::Detected(spam)
            },
        }
    }
}

/// Render model for the results pane; a pure function of controller state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView {
    NoScanYet,
    Scanning,
    Error(&'static str),
    Report(ReportView),
}

impl ResultView {
    pub fn from_state(state: &ScanState, tz: Tz) -> Self {
        match state {
            ScanState::Idle => ResultView::NoScanYet,
            ScanState::Scanning { .. } => ResultView::Scanning,
            ScanState::Settled(ScanResult::Error { message, .. }) => ResultView::Error(*message),
            ScanState::Settled(ScanResult::Success(report)) => {
                ResultView::Report(ReportView::from_report(report, tz))
            }
        }
    }

    /// Plain-text rendering used by the headless commands.
    pub fn to_lines(&self) -> Vec<String> {
        match self {
            ResultView::NoScanYet => vec![NO_SCAN_NOTICE.to_string()],
            ResultView::Scanning => vec![SCANNING_NOTICE.to_string()],
            ResultView::Error(message) => vec![format!("Error: {message}")],
            ResultView::Report(report) => {
                let mut lines = vec![
                    format!("Scan Type: {}", report.scan_type),
                    format!("Email: {}", report.email),
                    format!("Scanned At: {}", report.scanned_at),
                ];
                if let Some(badge) = &report.badge {
                    lines.push(format!("Prediction Result: {}", badge.text));
                }
                if let Some(count) = &report.spam_count {
                    lines.push(format!("Spam Messages Detected: {count}"));
                }
                lines.push(REPORT_EMAILED_NOTICE.to_string());
                match &report.spam_list {
                    SpamList::Detected(items) => {
                        lines.push(DETECTED_SPAM_HEADING.to_string());
                        for item in items {
                            lines.push(format!("  From: {}", item.from));
                            lines.push(format!("  {}", item.message));
                        }
                    }
                    SpamList::NoneDetected => lines.push(NO_SPAM_NOTICE.to_string()),
                }
                lines
            }
        }
    }
}

pub fn resolve_timezone(name: &str) -> Tz {
    name.parse().unwrap_or_else(|_| {
        tracing::warn!(target: "config", timezone = name, "unknown timezone; using UTC");
        Tz::UTC
    })
}
