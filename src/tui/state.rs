use chrono_tz::Tz;

use crate::scan::{InputPanel, ResultView, ScanController};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

pub struct AppState {
    pub panel: InputPanel,
    pub controller: ScanController,
    pub theme: Theme,
    pub timezone: Tz,
}

impl AppState {
    pub fn new(timezone: Tz) -> Self {
        Self {
            panel: InputPanel::new(),
            controller: ScanController::new(),
            theme: Theme::default(),
            timezone,
        }
    }

    pub fn can_submit(&self) -> bool {
        self.panel.can_submit(self.controller.is_scanning())
    }

    pub fn result_view(&self) -> ResultView {
        ResultView::from_state(self.controller.state(), self.timezone)
    }
}
