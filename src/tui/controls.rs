//! Keyboard input handling for the interactive form.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::runtime::App;

/// Maps a key event to a form action.
///
/// Guards on [`KeyEventKind::Press`] to avoid double-fire on some terminals.
/// Numeric fields only accept digits and the decimal point, which leaves
/// the letter keys free for commands.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit = true,
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => app.push_char(c),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        KeyCode::Enter => app.simulate(),
        KeyCode::Char('a') => app.add_tariff_component(),
        KeyCode::Char('m') => app.toggle_demand_mode(),
        KeyCode::Char('c') => app.cycle_connection(),
        KeyCode::Char('b') => app.toggle_budget_mode(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScenarioConfig;
    use crate::tui::runtime::Field;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn digits_feed_the_edit_buffer() {
        let mut app = App::new(ScenarioConfig::baseline());
        app.edit.clear();
        for c in ['4', '2', '0'] {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        assert_eq!(app.edit, "420");
        handle_key(&mut app, press(KeyCode::Backspace));
        assert_eq!(app.edit, "42");
    }

    #[test]
    fn tab_moves_focus() {
        let mut app = App::new(ScenarioConfig::baseline());
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.focused_field(), Field::TariffComponent(0));
        handle_key(&mut app, press(KeyCode::BackTab));
        assert_eq!(app.focused_field(), Field::Consumption);
    }

    #[test]
    fn enter_simulates() {
        let mut app = App::new(ScenarioConfig::baseline());
        handle_key(&mut app, press(KeyCode::Enter));
        assert!(app.session.last_report().is_some());
    }

    #[test]
    fn q_quits() {
        let mut app = App::new(ScenarioConfig::baseline());
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(app.quit);
    }

    #[test]
    fn letters_are_commands_not_input() {
        let mut app = App::new(ScenarioConfig::baseline());
        let before = app.edit.clone();
        handle_key(&mut app, press(KeyCode::Char('a')));
        assert_eq!(app.session.tariff_components().len(), 2);
        assert_ne!(app.edit, before); // focus jumped to the new component
    }
}
