use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{Action, AppMode};

// --- Helpers ---

/// Convert a char index to a byte offset within the string.
pub fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
  s.char_indices().nth(char_idx).map_or(s.len(), |(i, _)| i)
}

// --- Event Handling ---

/// Map a key press to the browser action it triggers in `mode`, if any.
pub fn action_for_key(mode: AppMode, key: KeyEvent) -> Option<Action> {
  match mode {
    AppMode::Navigation => navigation_action(key),
    AppMode::FilterEditing => filter_action(key),
  }
}

fn navigation_action(key: KeyEvent) -> Option<Action> {
  if key.modifiers.contains(KeyModifiers::CONTROL) {
    return match key.code {
      KeyCode::Char('c') => Some(Action::Quit),
      _ => None,
    };
  }

  let action = match key.code {
    KeyCode::Char('q') => Action::Quit,
    KeyCode::Char('/') => Action::EnterFilterMode,
    KeyCode::Up | KeyCode::Char('k') => Action::MoveUp,
    KeyCode::Down | KeyCode::Char('j') => Action::MoveDown,
    KeyCode::PageUp => Action::PageUp,
    KeyCode::PageDown => Action::PageDown,
    KeyCode::Home | KeyCode::Char('g') => Action::JumpTop,
    KeyCode::End | KeyCode::Char('G') => Action::JumpBottom,
    KeyCode::Enter => Action::Confirm,
    _ => return None,
  };
  Some(action)
}

fn filter_action(key: KeyEvent) -> Option<Action> {
  if key.modifiers.contains(KeyModifiers::CONTROL) {
    return match key.code {
      KeyCode::Char('c') => Some(Action::Cancel),
      KeyCode::Char('a') => Some(Action::CursorHome),
      KeyCode::Char('e') => Some(Action::CursorEnd),
      KeyCode::Char('u') => Some(Action::DeleteToStart),
      KeyCode::Char('k') => Some(Action::DeleteToEnd),
      _ => None,
    };
  }

  let action = match key.code {
    KeyCode::Enter => Action::Commit,
    KeyCode::Esc => Action::Cancel,
    KeyCode::Char(c) => Action::Insert(c),
    KeyCode::Backspace => Action::Backspace,
    KeyCode::Delete => Action::Delete,
    KeyCode::Left => Action::CursorLeft,
    KeyCode::Right => Action::CursorRight,
    KeyCode::Home => Action::CursorHome,
    KeyCode::End => Action::CursorEnd,
    _ => return None,
  };
  Some(action)
}
