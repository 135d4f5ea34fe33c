use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::constants::constants;
use crate::input::char_to_byte_index;
use crate::scanner::{contains_all, match_key};

// --- Types ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
  Navigation,
  FilterEditing,
}

/// One discrete input event for the browser. Actions a mode does not handle are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
  /// New terminal height in rows.
  Resize(u16),

  // Navigation
  MoveUp,
  MoveDown,
  PageUp,
  PageDown,
  JumpTop,
  JumpBottom,
  EnterFilterMode,
  Confirm,
  Quit,

  // Filter editing
  Commit,
  Cancel,
  Insert(char),
  Backspace,
  Delete,
  CursorLeft,
  CursorRight,
  CursorHome,
  CursorEnd,
  DeleteToStart,
  DeleteToEnd,
}

/// How the browser finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exit {
  Quit,
  Play(PathBuf),
}

/// Editable single-line text buffer with a char-indexed cursor.
#[derive(Debug, Default, Clone)]
pub struct FilterInput {
  pub text: String,
  /// Cursor position within `text` (char index).
  pub cursor: usize,
}

impl FilterInput {
  fn len(&self) -> usize {
    self.text.chars().count()
  }

  fn insert(&mut self, c: char) {
    if self.len() >= constants().filter_char_limit {
      return;
    }
    let byte_idx = char_to_byte_index(&self.text, self.cursor);
    self.text.insert(byte_idx, c);
    self.cursor += 1;
  }

  fn backspace(&mut self) {
    if self.cursor > 0 {
      self.cursor -= 1;
      let byte_idx = char_to_byte_index(&self.text, self.cursor);
      self.text.remove(byte_idx);
    }
  }

  fn delete(&mut self) {
    if self.cursor < self.len() {
      let byte_idx = char_to_byte_index(&self.text, self.cursor);
      self.text.remove(byte_idx);
    }
  }

  fn delete_to_start(&mut self) {
    let byte_idx = char_to_byte_index(&self.text, self.cursor);
    self.text.replace_range(..byte_idx, "");
    self.cursor = 0;
  }

  fn delete_to_end(&mut self) {
    let byte_idx = char_to_byte_index(&self.text, self.cursor);
    self.text.truncate(byte_idx);
  }

  fn clear(&mut self) {
    self.text.clear();
    self.cursor = 0;
  }
}

// --- Browser ---

/// Interactive list state: candidate paths, the committed filter view over them, a cursor and
/// a scrolling viewport, plus the navigation/filter-editing mode.
pub struct App {
  /// Scan root, used to shorten displayed paths.
  root: PathBuf,
  candidates: Vec<PathBuf>,
  /// Lowercased full path of each candidate, parallel to `candidates`.
  match_keys: Vec<String>,
  /// Indices into `candidates` that passed the last committed filter.
  filtered_indices: Vec<usize>,
  pub mode: AppMode,
  pub filter: FilterInput,
  /// Filter text of the last commit, for display only.
  pub applied_filter: String,
  cursor: usize,
  viewport_top: usize,
  viewport_size: usize,
  exit: Option<Exit>,
}

impl App {
  pub fn new(root: PathBuf, candidates: Vec<PathBuf>) -> Self {
    let match_keys = candidates.iter().map(|p| match_key(p)).collect();
    let filtered_indices = (0..candidates.len()).collect();
    Self {
      root,
      candidates,
      match_keys,
      filtered_indices,
      mode: AppMode::Navigation,
      filter: FilterInput::default(),
      applied_filter: String::new(),
      cursor: 0,
      viewport_top: 0,
      viewport_size: constants().initial_viewport_size,
      exit: None,
    }
  }

  pub fn cursor(&self) -> usize {
    self.cursor
  }

  pub fn viewport_top(&self) -> usize {
    self.viewport_top
  }

  pub fn viewport_size(&self) -> usize {
    self.viewport_size
  }

  pub fn exit(&self) -> Option<&Exit> {
    self.exit.as_ref()
  }

  pub fn filtered_len(&self) -> usize {
    self.filtered_indices.len()
  }

  /// Path at position `i` of the filtered list.
  pub fn filtered(&self, i: usize) -> Option<&Path> {
    self.filtered_indices.get(i).map(|&idx| self.candidates[idx].as_path())
  }

  /// Filtered positions currently inside the viewport.
  pub fn visible_range(&self) -> std::ops::Range<usize> {
    let end = (self.viewport_top + self.viewport_size).min(self.filtered_len());
    self.viewport_top.min(end)..end
  }

  /// Path for display: relative to the scan root when it lies under it.
  pub fn display_path<'a>(&self, path: &'a Path) -> &'a Path {
    path.strip_prefix(&self.root).unwrap_or(path)
  }

  pub fn dispatch(&mut self, action: Action) {
    if self.exit.is_some() {
      return;
    }
    if let Action::Resize(height) = action {
      self.resize(height);
      return;
    }
    match self.mode {
      AppMode::Navigation => self.handle_navigation(action),
      AppMode::FilterEditing => self.handle_filter_editing(action),
    }
  }

  fn resize(&mut self, height: u16) {
    let c = constants();
    self.viewport_size = (height as usize).saturating_sub(c.reserved_rows).max(c.min_viewport_size);
  }

  fn handle_navigation(&mut self, action: Action) {
    match action {
      Action::MoveUp => {
        self.move_cursor(|cursor, _| cursor.saturating_sub(1));
      }
      Action::MoveDown => {
        self.move_cursor(|cursor, _| cursor + 1);
      }
      Action::PageUp => {
        if self.move_cursor(|cursor, size| cursor.saturating_sub(size)) {
          self.viewport_top = self.cursor;
        }
      }
      Action::PageDown => {
        self.move_cursor(|cursor, size| cursor + size);
      }
      Action::JumpTop => {
        if self.filtered_len() > 0 {
          self.cursor = 0;
          self.viewport_top = 0;
        }
      }
      Action::JumpBottom => {
        let len = self.filtered_len();
        if len > 0 {
          self.cursor = len - 1;
          self.viewport_top = len.saturating_sub(self.viewport_size);
        }
      }
      Action::EnterFilterMode => {
        self.mode = AppMode::FilterEditing;
      }
      Action::Confirm => {
        if let Some(path) = self.filtered(self.cursor) {
          let path = path.to_path_buf();
          info!(path = %path.display(), "browser: selected");
          self.exit = Some(Exit::Play(path));
        }
      }
      Action::Quit => {
        debug!("browser: quit without selection");
        self.exit = Some(Exit::Quit);
      }
      _ => {}
    }
  }

  fn handle_filter_editing(&mut self, action: Action) {
    match action {
      Action::Commit => self.commit_filter(),
      Action::Cancel => {
        self.filter.clear();
        self.mode = AppMode::Navigation;
      }
      Action::Insert(c) => self.filter.insert(c),
      Action::Backspace => self.filter.backspace(),
      Action::Delete => self.filter.delete(),
      Action::CursorLeft => {
        self.filter.cursor = self.filter.cursor.saturating_sub(1);
      }
      Action::CursorRight => {
        if self.filter.cursor < self.filter.len() {
          self.filter.cursor += 1;
        }
      }
      Action::CursorHome => {
        self.filter.cursor = 0;
      }
      Action::CursorEnd => {
        self.filter.cursor = self.filter.len();
      }
      Action::DeleteToStart => self.filter.delete_to_start(),
      Action::DeleteToEnd => self.filter.delete_to_end(),
      _ => {}
    }
  }

  /// Rebuild the filtered list from the candidates and the current filter text.
  fn commit_filter(&mut self) {
    let needle = [self.filter.text.to_lowercase()];
    self.filtered_indices = self
      .match_keys
      .iter()
      .enumerate()
      .filter(|(_, key)| contains_all(key, &needle))
      .map(|(i, _)| i)
      .collect();
    self.applied_filter = self.filter.text.clone();
    self.cursor = 0;
    self.viewport_top = 0;
    self.mode = AppMode::Navigation;
    debug!(filter = %self.applied_filter, matches = self.filtered_len(), "browser: filter committed");
  }

  /// Move the cursor to `step(cursor, viewport_size)`, clamped to the list, then scroll the
  /// viewport just enough to contain it. Returns false when the list is empty.
  fn move_cursor(&mut self, step: impl FnOnce(usize, usize) -> usize) -> bool {
    let len = self.filtered_len();
    if len == 0 {
      return false;
    }
    self.cursor = step(self.cursor, self.viewport_size).min(len - 1);
    if self.cursor < self.viewport_top {
      self.viewport_top = self.cursor;
    } else if self.cursor >= self.viewport_top + self.viewport_size {
      self.viewport_top = self.cursor + 1 - self.viewport_size;
    }
    true
  }
}
