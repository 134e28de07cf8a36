use std::sync::Arc;

use chrono::Utc;

use crate::{
    domain::{ScanMode, ScanPayload, ScanReport, ScanRequest, ScanResult},
    service::{dispatch, ClassificationService, ServiceError},
};

use super::input::InputPanel;

/// One issued scan. The sequence number identifies the most recent request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTicket {
    seq: u64,
    request: ScanRequest,
}

impl ScanTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn request(&self) -> &ScanRequest {
        &self.request
    }
}

/// Result of a finished request, handed back to the controller.
#[derive(Debug)]
pub struct ScanCompletion {
    pub ticket: ScanTicket,
    pub outcome: Result<ScanPayload, ServiceError>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ScanState {
    #[default]
    Idle,
    Scanning {
        seq: u64,
        mode: ScanMode,
        email: String,
    },
    Settled(ScanResult),
}

#[derive(Debug, Default)]
pub struct ScanController {
    state: ScanState,
    last_seq: u64,
}

impl ScanController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    pub fn is_scanning(&self) -> bool {
        matches!(self.state, ScanState::Scanning { .. })
    }

    pub fn result(&self) -> Option<&ScanResult> {
        match &self.state {
            ScanState::Settled(result) => Some(result),
            _ => None,
        }
    }

    /// Enters `Scanning`, dropping any settled result in the same step.
    /// Returns `None` when the panel does not allow submission.
    pub fn begin(&mut self, panel: &InputPanel) -> Option<ScanTicket> {
        if !panel.can_submit(self.is_scanning()) {
            return None;
        }
        let request = panel.request()?;

        self.last_seq += 1;
        let seq = self.last_seq;
        self.state = ScanState::Scanning {
            seq,
            mode: request.mode(),
            email: request.email().to_string(),
        };
        tracing::info!(target: "scan", seq, mode = %request.mode(), "scan started");
        Some(ScanTicket { seq, request })
    }

    /// Settles the scan identified by `ticket`. Completions for anything but
    /// the latest issued ticket are dropped; returns whether the state changed.
    pub fn settle(
        &mut self,
        ticket: &ScanTicket,
        outcome: Result<ScanPayload, ServiceError>,
    ) -> bool {
        if ticket.seq != self.last_seq || !self.is_scanning() {
            tracing::debug!(
                target: "scan",
                seq = ticket.seq,
                latest = self.last_seq,
                "ignoring stale scan completion"
            );
            return false;
        }

        let mode = ticket.request.mode();
        let result = match outcome {
            Ok(payload) => {
                let report =
                    ScanReport::from_payload(mode, ticket.request.email(), &payload, Utc::now());
                tracing::info!(target: "scan", seq = ticket.seq, %mode, "scan succeeded");
                ScanResult::Success(report)
            }
            Err(err) => {
                tracing::warn!(target: "scan", seq = ticket.seq, %mode, error = %err, "scan failed");
                ScanResult::failure(mode)
            }
        };
        self.state = ScanState::Settled(result);
        true
    }

    pub fn complete(&mut self, completion: ScanCompletion) -> bool {
        self.settle(&completion.ticket, completion.outcome)
    }

    /// Runs one scan to completion: begin, await the single call, settle.
    /// Returns `false` if submission was not allowed.
    pub async fn submit(
        &mut self,
        panel: &InputPanel,
        service: &dyn ClassificationService,
    ) -> bool {
        let Some(ticket) = self.begin(panel) else {
            return false;
        };
        let outcome = dispatch(service, &ticket.request).await;
        self.settle(&ticket, outcome);
        true
    }

    pub fn reset(&mut self) {
        if !self.is_scanning() {
            self.state = ScanState::Idle;
        }
    }
}

/// Performs the request for `ticket` off the UI loop.
pub async fn run_scan(
    service: Arc<dyn ClassificationService>,
    ticket: ScanTicket,
) -> ScanCompletion {
    let outcome = dispatch(service.as_ref(), &ticket.request).await;
    ScanCompletion { ticket, outcome }
}
