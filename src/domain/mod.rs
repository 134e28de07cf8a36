pub mod report;
pub mod types;

pub use report::{ScanReport, ScanResult, Verdict};
pub use types::{DetailEntry, ScanMode, ScanPayload, ScanRequest, SPAM_LABEL};
