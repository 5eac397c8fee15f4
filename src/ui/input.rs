use crate::ui::app::{App, CARD_HEIGHT};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Action to take after processing a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// No further action needed (handled internally).
    None,
    /// The user submitted the search box; feed this through the debouncer.
    Submit(String),
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return InputAction::None;
    }

    match key.code {
        KeyCode::Enter => return InputAction::Submit(app.input_value().to_string()),
        KeyCode::Esc => app.clear_input(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Up => app.scroll_up(1),
        KeyCode::Down => app.scroll_down(1),
        KeyCode::PageUp => app.scroll_up(CARD_HEIGHT * 2),
        KeyCode::PageDown => app.scroll_down(CARD_HEIGHT * 2),
        KeyCode::Char(ch) => {
            if !key.modifiers.contains(KeyModifiers::CONTROL) {
                app.insert_char(ch);
            }
        }
        _ => {}
    }
    InputAction::None
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crossterm::event::KeyEventState;

    fn make_app() -> App {
        App::new(&Config::default())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn typing_edits_the_search_box() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('d')));
        handle_key(&mut app, press(KeyCode::Char('u')));
        handle_key(&mut app, press(KeyCode::Backspace));
        assert_eq!(app.input_value(), "d");
    }

    #[test]
    fn enter_submits_the_raw_value() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char(' ')));
        handle_key(&mut app, press(KeyCode::Char('d')));
        let action = handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(action, InputAction::Submit(" d".to_string()));
        // The box keeps its contents after submit.
        assert_eq!(app.input_value(), " d");
    }

    #[test]
    fn esc_clears_the_box() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('x')));
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.input_value(), "");
    }

    #[test]
    fn ctrl_q_and_ctrl_c_quit() {
        for ch in ['q', 'c'] {
            let mut app = make_app();
            handle_key(&mut app, ctrl(ch));
            assert!(app.should_quit());
        }
    }

    #[test]
    fn ctrl_chars_do_not_land_in_the_box() {
        let mut app = make_app();
        handle_key(&mut app, ctrl('a'));
        assert_eq!(app.input_value(), "");
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = make_app();
        let key = KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Release,
            state: KeyEventState::empty(),
        };
        handle_key(&mut app, key);
        assert_eq!(app.input_value(), "");
    }
}
