use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{domain::ScanMode, scan::ScanTicket};

use super::state::AppState;

#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    Submit(ScanTicket),
}

pub fn handle_key(key: KeyEvent, state: &mut AppState) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => return Action::Quit,
        KeyCode::Char('c') if ctrl => return Action::Quit,

        KeyCode::F(1) => state.panel.set_mode(ScanMode::Message),
        KeyCode::F(2) => state.panel.set_mode(ScanMode::Inbox),
        KeyCode::F(5) => state.theme = state.theme.toggled(),
        KeyCode::Char('l') if ctrl => state.controller.reset(),
        KeyCode::Char('n') if ctrl => state.panel.insert_newline(),

        KeyCode::Tab | KeyCode::BackTab => state.panel.cycle_focus(),
        KeyCode::Backspace => state.panel.backspace(),

        KeyCode::Enter => {
            // begin() re-checks can_submit, so a disabled button is a no-op.
            if let Some(ticket) = state.controller.begin(&state.panel) {
                return Action::Submit(ticket);
            }
        }

        KeyCode::Char(ch) if !ctrl => state.panel.push_char(ch),
        _ => {}
    }
    Action::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::Field;

    fn press(state: &mut AppState, code: KeyCode) -> Action {
        handle_key(KeyEvent::new(code, KeyModifiers::NONE), state)
    }

    fn ctrl(state: &mut AppState, ch: char) -> Action {
        handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL), state)
    }

    fn type_str(state: &mut AppState, text: &str) {
        for ch in text.chars() {
            press(state, KeyCode::Char(ch));
        }
    }

    #[test]
    fn typing_fills_focused_field() {
        let mut state = AppState::new(chrono_tz::Tz::UTC);
        type_str(&mut state, "u@x.com");
        press(&mut state, KeyCode::Tab);
        type_str(&mut state, "buy");
        ctrl(&mut state, 'n');
        type_str(&mut state, "now");

        assert_eq!(state.panel.email(), "u@x.com");
        assert_eq!(state.panel.text(), "buy\nnow");
        assert_eq!(state.panel.focus(), Field::Text);
    }

    #[test]
    fn enter_submits_only_when_allowed() {
        let mut state = AppState::new(chrono_tz::Tz::UTC);
        type_str(&mut state, "u@x.com");
        assert_eq!(press(&mut state, KeyCode::Enter), Action::None);
        assert!(!state.controller.is_scanning());

        press(&mut state, KeyCode::F(2));
        let Action::Submit(ticket) = press(&mut state, KeyCode::Enter) else {
            panic!("expected submit");
        };
        assert_eq!(ticket.request().mode(), ScanMode::Inbox);
        assert!(state.controller.is_scanning());

        // Disabled while the first scan is in flight.
        assert_eq!(press(&mut state, KeyCode::Enter), Action::None);
    }

    #[test]
    fn panel_stays_editable_while_scanning() {
        let mut state = AppState::new(chrono_tz::Tz::UTC);
        type_str(&mut state, "u@x.com");
        press(&mut state, KeyCode::F(2));
        press(&mut state, KeyCode::Enter);

        press(&mut state, KeyCode::Backspace);
        assert_eq!(state.panel.email(), "u@x.co");
    }

    #[test]
    fn quit_and_theme_keys() {
        let mut state = AppState::new(chrono_tz::Tz::UTC);
        press(&mut state, KeyCode::F(5));
        assert_eq!(state.theme, crate::tui::state::Theme::Dark);
        assert_eq!(ctrl(&mut state, 'c'), Action::Quit);
        assert_eq!(press(&mut state, KeyCode::Esc), Action::Quit);
    }
}
