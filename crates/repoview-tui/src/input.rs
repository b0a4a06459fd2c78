use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use repoview_core::{Action, Keymap};

use crate::app::AppMode;

/// Actions that can result from a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Run a key-bound action.
    Action(Action),
    /// Return to Normal mode.
    EnterNormal,
    /// Append a character to the search query.
    SearchChar(char),
    /// Remove the last character from the search query.
    SearchBackspace,
    /// Keep the query and leave search mode.
    SearchConfirm,
    /// Clear the query and leave search mode.
    SearchCancel,
    /// Quit the application.
    Quit,
    /// No action for this key.
    None,
}

/// Maps a key event to an InputAction based on the current mode.
///
/// In Normal mode every key is resolved through the `Keymap` by its
/// [`key_name`]; Ctrl+C always quits. Search and Help are hardcoded.
pub fn handle_key(key: KeyEvent, mode: AppMode, keymap: &Keymap) -> InputAction {
    if key.kind == KeyEventKind::Release {
        return InputAction::None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return InputAction::Quit;
    }
    match mode {
        AppMode::Normal => handle_normal_key(key, keymap),
        AppMode::Search => handle_search_key(key),
        AppMode::Help => handle_help_key(key),
    }
}

fn handle_normal_key(key: KeyEvent, keymap: &Keymap) -> InputAction {
    key_name(&key)
        .and_then(|name| keymap.action_for_key(&name))
        .map_or(InputAction::None, InputAction::Action)
}

fn handle_search_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc => InputAction::SearchCancel,
        KeyCode::Enter => InputAction::SearchConfirm,
        KeyCode::Backspace => InputAction::SearchBackspace,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            InputAction::SearchChar(c)
        }
        _ => InputAction::None,
    }
}

fn handle_help_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => InputAction::EnterNormal,
        _ => InputAction::None,
    }
}

/// Names a key the way the `[keys]` config table spells it.
///
/// Printable characters are themselves (`"j"`, `"?"`, `"["`); named keys use
/// their crossterm name (`"Enter"`, `"Left"`, `"Space"`). Ctrl and Alt are
/// prefixed as `"Ctrl+"` / `"Alt+"`. Shift is folded into the character.
pub fn key_name(key: &KeyEvent) -> Option<String> {
    let base = match key.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "BackTab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => return None,
    };

    let mut name = String::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        name.push_str("Ctrl+");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        name.push_str("Alt+");
    }
    name.push_str(&base);
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        key_with_mod(code, KeyModifiers::NONE)
    }

    fn key_with_mod(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn normal(code: KeyCode) -> InputAction {
        handle_key(key(code), AppMode::Normal, &Keymap::default())
    }

    // --- Key names ---

    #[test]
    fn key_names_match_config_spelling() {
        assert_eq!(key_name(&key(KeyCode::Char('j'))).as_deref(), Some("j"));
        assert_eq!(key_name(&key(KeyCode::Char(' '))).as_deref(), Some("Space"));
        assert_eq!(key_name(&key(KeyCode::Enter)).as_deref(), Some("Enter"));
        assert_eq!(key_name(&key(KeyCode::F(5))).as_deref(), Some("F5"));
        assert_eq!(
            key_name(&key_with_mod(KeyCode::Left, KeyModifiers::ALT)).as_deref(),
            Some("Alt+Left")
        );
        assert_eq!(
            key_name(&key_with_mod(KeyCode::Char('r'), KeyModifiers::CONTROL)).as_deref(),
            Some("Ctrl+r")
        );
    }

    #[test]
    fn shift_is_folded_into_character() {
        let ev = key_with_mod(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(key_name(&ev).as_deref(), Some("?"));
    }

    #[test]
    fn unnamed_keys_have_no_name() {
        assert_eq!(key_name(&key(KeyCode::Null)), None);
    }

    // --- Normal mode ---

    #[test]
    fn normal_cursor_keys() {
        assert_eq!(normal(KeyCode::Char('j')), InputAction::Action(Action::CursorDown));
        assert_eq!(normal(KeyCode::Down), InputAction::Action(Action::CursorDown));
        assert_eq!(normal(KeyCode::Char('k')), InputAction::Action(Action::CursorUp));
        assert_eq!(normal(KeyCode::Up), InputAction::Action(Action::CursorUp));
    }

    #[test]
    fn normal_navigation_keys() {
        assert_eq!(normal(KeyCode::Enter), InputAction::Action(Action::Open));
        assert_eq!(normal(KeyCode::Char(' ')), InputAction::Action(Action::ToggleNode));
        assert_eq!(normal(KeyCode::Backspace), InputAction::Action(Action::GoUp));
        assert_eq!(normal(KeyCode::Char('[')), InputAction::Action(Action::GoBack));
        assert_eq!(normal(KeyCode::Char(']')), InputAction::Action(Action::GoForward));
        let alt_right = key_with_mod(KeyCode::Right, KeyModifiers::ALT);
        assert_eq!(
            handle_key(alt_right, AppMode::Normal, &Keymap::default()),
            InputAction::Action(Action::GoForward)
        );
    }

    #[test]
    fn normal_unbound_key_is_none() {
        assert_eq!(normal(KeyCode::Char('z')), InputAction::None);
        assert_eq!(normal(KeyCode::Right), InputAction::None);
    }

    #[test]
    fn ctrl_c_quits_in_every_mode() {
        let ev = key_with_mod(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for mode in [AppMode::Normal, AppMode::Search, AppMode::Help] {
            assert_eq!(handle_key(ev, mode, &Keymap::default()), InputAction::Quit);
        }
    }

    #[test]
    fn release_events_are_ignored() {
        let mut ev = key(KeyCode::Char('q'));
        ev.kind = KeyEventKind::Release;
        assert_eq!(
            handle_key(ev, AppMode::Normal, &Keymap::default()),
            InputAction::None
        );
    }

    #[test]
    fn overrides_are_honoured() {
        let overrides = [("x".to_string(), "quit".to_string())].into_iter().collect();
        let keymap = Keymap::with_overrides(&overrides);
        assert_eq!(
            handle_key(key(KeyCode::Char('x')), AppMode::Normal, &keymap),
            InputAction::Action(Action::Quit)
        );
    }

    // --- Search mode ---

    #[test]
    fn search_mode_keys() {
        let km = Keymap::default();
        let search = |code| handle_key(key(code), AppMode::Search, &km);
        assert_eq!(search(KeyCode::Char('q')), InputAction::SearchChar('q'));
        assert_eq!(search(KeyCode::Char(' ')), InputAction::SearchChar(' '));
        assert_eq!(search(KeyCode::Backspace), InputAction::SearchBackspace);
        assert_eq!(search(KeyCode::Enter), InputAction::SearchConfirm);
        assert_eq!(search(KeyCode::Esc), InputAction::SearchCancel);
        assert_eq!(search(KeyCode::Tab), InputAction::None);
    }

    // --- Help mode ---

    #[test]
    fn help_mode_closes_on_esc_q_or_question() {
        let km = Keymap::default();
        for code in [KeyCode::Esc, KeyCode::Char('q'), KeyCode::Char('?')] {
            assert_eq!(handle_key(key(code), AppMode::Help, &km), InputAction::EnterNormal);
        }
        assert_eq!(
            handle_key(key(KeyCode::Char('j')), AppMode::Help, &km),
            InputAction::None
        );
    }
}
