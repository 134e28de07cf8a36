pub mod events;
pub mod state;
pub mod ui;

use std::sync::Arc;

use anyhow::Result;
use chrono_tz::Tz;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;

use crate::{
    scan::{run_scan, ScanCompletion},
    service::ClassificationService,
};

use events::Action;
pub use state::{AppState, Theme};

pub async fn run_tui(service: Arc<dyn ClassificationService>, timezone: Tz) -> Result<()> {
    let mut state = AppState::new(timezone);

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, &mut state, service).await;
    ratatui::restore();

    result
}

async fn run(
    terminal: &mut DefaultTerminal,
    state: &mut AppState,
    service: Arc<dyn ClassificationService>,
) -> Result<()> {
    let (done_tx, mut done_rx) = mpsc::unbounded_channel::<ScanCompletion>();
    let mut input = EventStream::new();

    loop {
        terminal.draw(|f| ui::render(f, state))?;

        tokio::select! {
            maybe_event = input.next() => {
                let Some(event) = maybe_event else {
                    break;
                };
                let Event::Key(key) = event? else {
                    continue;
                };
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match events::handle_key(key, state) {
                    Action::Quit => break,
                    Action::Submit(ticket) => {
                        let service = service.clone();
                        let done_tx = done_tx.clone();
                        tokio::spawn(async move {
                            let completion = run_scan(service, ticket).await;
                            let _ = done_tx.send(completion);
                        });
                    }
                    Action::None => {}
                }
            }
            Some(completion) = done_rx.recv() => {
                state.controller.complete(completion);
            }
        }
    }

    tracing::info!(target: "tui", "terminal UI closed");
    Ok(())
}
