//! Keybindings: Enter submit, Shift/Alt+Enter newline, Tab fill suggestion,
//! Ctrl+L clear chat, Ctrl+U clear input, PgUp/PgDn scroll, Ctrl+C quit.

use crate::actions::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

pub const TICK_RATE: Duration = Duration::from_millis(80);

pub fn key_to_action(
    event: &KeyEvent,
    suggestions_visible: bool,
    input_empty: bool,
) -> Option<Action> {
    // Accept Press and Repeat (hold key); ignore Release so we don't double-handle.
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let (code, mods) = (event.code, event.modifiers);

    if code == KeyCode::Char('c') && mods.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }
    if code == KeyCode::Char('l') && mods.contains(KeyModifiers::CONTROL) {
        return Some(Action::ClearChat);
    }
    if code == KeyCode::Char('u') && mods.contains(KeyModifiers::CONTROL) {
        return Some(Action::ClearInput);
    }
    if code == KeyCode::Esc && mods.is_empty() {
        return Some(Action::SuggestionsHide);
    }

    if code == KeyCode::Enter {
        // Shift+Enter (terminals that report it) and Alt+Enter insert a newline.
        if mods.contains(KeyModifiers::SHIFT) || mods.contains(KeyModifiers::ALT) {
            return Some(Action::NewLine);
        }
        return Some(Action::Submit);
    }
    if code == KeyCode::Backspace {
        return Some(Action::Backspace);
    }
    if code == KeyCode::Left && mods.is_empty() {
        return Some(Action::CursorLeft);
    }
    if code == KeyCode::Right && mods.is_empty() {
        return Some(Action::CursorRight);
    }

    if code == KeyCode::Up && mods.is_empty() && suggestions_visible && input_empty {
        return Some(Action::SuggestionUp);
    }
    if code == KeyCode::Down && mods.is_empty() && suggestions_visible && input_empty {
        return Some(Action::SuggestionDown);
    }
    if code == KeyCode::Tab && mods.is_empty() && suggestions_visible {
        return Some(Action::SuggestionSelect);
    }

    if code == KeyCode::PageUp && mods.is_empty() {
        return Some(Action::ChatScrollPageUp);
    }
    if code == KeyCode::PageDown && mods.is_empty() {
        return Some(Action::ChatScrollPageDown);
    }
    if code == KeyCode::End && mods.is_empty() {
        return Some(Action::ChatScrollBottom);
    }

    // Any other character goes to input (allow Alt/Shift; only block Ctrl/Cmd).
    if let KeyCode::Char(c) = code {
        if !mods.contains(KeyModifiers::CONTROL) && !mods.contains(KeyModifiers::SUPER) {
            return Some(Action::Char(c));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode, mods: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, mods)
    }

    #[test]
    fn enter_submits_and_shift_enter_inserts_newline() {
        let a = key_to_action(&key(KeyCode::Enter, KeyModifiers::NONE), false, true);
        assert!(matches!(a, Some(Action::Submit)));
        let a = key_to_action(&key(KeyCode::Enter, KeyModifiers::SHIFT), false, true);
        assert!(matches!(a, Some(Action::NewLine)));
        let a = key_to_action(&key(KeyCode::Enter, KeyModifiers::ALT), false, true);
        assert!(matches!(a, Some(Action::NewLine)));
    }

    #[test]
    fn arrows_navigate_suggestions_only_while_visible_and_input_empty() {
        let up = key(KeyCode::Up, KeyModifiers::NONE);
        assert!(matches!(key_to_action(&up, true, true), Some(Action::SuggestionUp)));
        assert!(key_to_action(&up, true, false).is_none());
        assert!(key_to_action(&up, false, true).is_none());
    }

    #[test]
    fn control_chords_map_to_clear_and_quit() {
        let a = key_to_action(&key(KeyCode::Char('l'), KeyModifiers::CONTROL), false, true);
        assert!(matches!(a, Some(Action::ClearChat)));
        let a = key_to_action(&key(KeyCode::Char('u'), KeyModifiers::CONTROL), false, false);
        assert!(matches!(a, Some(Action::ClearInput)));
        let a = key_to_action(&key(KeyCode::Char('c'), KeyModifiers::CONTROL), false, true);
        assert!(matches!(a, Some(Action::Quit)));
    }

    #[test]
    fn plain_chars_feed_the_input_but_control_chars_do_not() {
        let a = key_to_action(&key(KeyCode::Char('x'), KeyModifiers::NONE), false, true);
        assert!(matches!(a, Some(Action::Char('x'))));
        let a = key_to_action(&key(KeyCode::Char('x'), KeyModifiers::CONTROL), false, true);
        assert!(a.is_none());
    }

    #[test]
    fn release_events_are_ignored()  {
        let mut e = key(KeyCode::Enter, KeyModifiers::NONE);
        e.kind = KeyEventKind::Release;
        assert!(key_to_action(&e, false, true).is_none());
    }
}
