use chrono_tz::Tz;

use crate::{
    scan::{InputPanel, ResultView, ScanController},
    service::ClassificationService,
};

/// Runs a single scan outside the terminal UI. Returns `None` when the
/// inputs do not allow submission.
pub async fn scan_once(
    service: &dyn ClassificationService,
    panel: &InputPanel,
    timezone: Tz,
) -> Option<ResultView> {
    let mut controller = ScanController::new();
    if !controller.submit(panel, service).await {
        return None;
    }
    Some(ResultView::from_state(controller.state(), timezone))
}
