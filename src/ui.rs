use ratatui::{
  Frame,
  layout::{Constraint, Layout, Rect},
  style::{Modifier, Style},
  text::{Line, Span},
  widgets::{List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthChar;

use crate::app::{App, AppMode};
use crate::constants::constants;

const HELP: &str = "Video Browser - arrows/jk, PgUp/PgDn, g/G (top/bottom), / to filter, Enter to play, q to quit";

// --- Helpers ---

/// Compute the display width of the first `n` chars (accounting for double-width CJK).
pub fn display_width(s: &str, n: usize) -> usize {
  s.chars().take(n).map(|c| c.width().unwrap_or(0)).sum()
}

/// Slice of `s` that fits in `width` columns starting at column `scroll`.
fn visible_slice(s: &str, scroll: usize, width: usize) -> String {
  s.chars()
    .scan(0usize, |col, c| {
      let w = c.width().unwrap_or(0);
      let start = *col;
      *col += w;
      Some((start, *col, c))
    })
    .skip_while(|(start, _, _)| *start < scroll)
    .take_while(|(_, end, _)| *end <= scroll + width)
    .map(|(_, _, c)| c)
    .collect()
}

// --- UI Rendering ---

/// Draw the whole browser. Reads state only; every frame is derived from `app` alone.
pub fn ui(frame: &mut Frame, app: &App) {
  let [header_area, status_area, filter_area, list_area] =
    Layout::vertical([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
      .areas(frame.area());

  frame.render_widget(Line::from(HELP), header_area);
  render_status(frame, app, status_area);
  render_filter(frame, app, filter_area);
  render_list(frame, app, list_area);
}

fn status_text(app: &App) -> String {
  let total = app.filtered_len();
  let mut text = if total == 0 {
    "Found 0 videos".to_string()
  } else {
    let top = app.viewport_top();
    format!("Found {} videos (showing {}-{})", total, top + 1, (top + app.viewport_size()).min(total))
  };
  if !app.applied_filter.is_empty() {
    text.push_str(&format!("  filter: {}", app.applied_filter));
  }
  text
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
  frame.render_widget(Line::from(status_text(app)), area);
}

fn render_filter(frame: &mut Frame, app: &App, area: Rect) {
  if app.mode != AppMode::FilterEditing {
    return;
  }

  let prompt = Span::styled("/", Style::default().add_modifier(Modifier::BOLD));
  if app.filter.text.is_empty() {
    let placeholder = Span::styled(constants().filter_placeholder.as_str(), Style::default().dim());
    frame.render_widget(Line::from(vec![prompt, placeholder]), area);
    frame.set_cursor_position((area.x + 1, area.y));
    return;
  }

  // Keep the edit cursor on screen by scrolling the text horizontally.
  let inner_w = (area.width as usize).saturating_sub(2).max(1);
  let cursor_col = display_width(&app.filter.text, app.filter.cursor);
  let scroll = if cursor_col >= inner_w { cursor_col + 1 - inner_w } else { 0 };

  let visible = visible_slice(&app.filter.text, scroll, inner_w);
  frame.render_widget(Line::from(vec![prompt, Span::raw(visible)]), area);

  let cursor_x = area.x + 1 + (cursor_col - scroll) as u16;
  frame.set_cursor_position((cursor_x, area.y));
}

fn render_list(frame: &mut Frame, app: &App, area: Rect) {
  if app.filtered_len() == 0 {
    let hint = Paragraph::new("No videos match the filter. Press / to change it.").style(Style::default().dim());
    frame.render_widget(hint, area);
    return;
  }

  let items: Vec<ListItem> = app
    .visible_range()
    .filter_map(|i| app.filtered(i).map(|path| (i, path)))
    .map(|(i, path)| {
      let text = app.display_path(path).to_string_lossy().into_owned();
      let style = if i == app.cursor() { Style::default().add_modifier(Modifier::REVERSED) } else { Style::default() };
      ListItem::new(Line::from(Span::styled(text, style)))
    })
    .collect();

  frame.render_widget(List::new(items), area);
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::app::Action;
  use ratatui::{Terminal, backend::TestBackend, layout::Position};
  use std::path::PathBuf;

  const WIDTH: u16 = 100;

  fn render(app: &App, height: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, height)).unwrap();
    terminal.draw(|frame| ui(frame, app)).unwrap();
    terminal
  }

  fn lines(terminal: &Terminal<TestBackend>) -> Vec<String> {
    terminal
      .backend()
      .buffer()
      .content
      .chunks(WIDTH as usize)
      .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>().trim_end().to_string())
      .collect()
  }

  fn row_is_reversed(terminal: &Terminal<TestBackend>, y: u16) -> bool {
    let idx = y as usize * WIDTH as usize;
    terminal.backend().buffer().content[idx].modifier.contains(Modifier::REVERSED)
  }

  fn app_with(count: usize, height: u16) -> App {
    let paths = (0..count).map(|i| PathBuf::from(format!("/videos/show/ep{:02}.mkv", i))).collect();
    let mut app = App::new(PathBuf::from("/videos"), paths);
    app.dispatch(Action::Resize(height));
    app
  }

  // --- helpers ---

  #[test]
  fn display_width_counts_wide_chars() {
    assert_eq!(display_width("abc", 2), 2);
    assert_eq!(display_width("日本", 2), 4);
    assert_eq!(display_width("日本", 1), 2);
  }

  #[test]
  fn visible_slice_scrolls() {
    assert_eq!(visible_slice("abcdef", 0, 3), "abc");
    assert_eq!(visible_slice("abcdef", 2, 3), "cde");
    assert_eq!(visible_slice("日本語", 2, 4), "本語");
  }

  // --- frames ---

  #[test]
  fn renders_header_status_and_relative_rows() {
    let app = app_with(3, 12);
    let out = lines(&render(&app, 12));
    assert_eq!(out[0], HELP);
    assert_eq!(out[1], "Found 3 videos (showing 1-3)");
    assert_eq!(out[2], "");
    assert_eq!(out[3], "show/ep00.mkv");
    assert_eq!(out[5], "show/ep02.mkv");
    assert_eq!(out[6], "");
  }

  #[test]
  fn cursor_row_is_reverse_video() {
    let mut app = app_with(3, 12);
    app.dispatch(Action::MoveDown);
    let terminal = render(&app, 12);
    assert!(!row_is_reversed(&terminal, 3));
    assert!(row_is_reversed(&terminal, 4));
    assert!(!row_is_reversed(&terminal, 5));
  }

  #[test]
  fn renders_only_the_viewport() {
    let mut app = app_with(25, 15);
    app.dispatch(Action::JumpBottom);
    let out = lines(&render(&app, 15));
    assert_eq!(out[1], "Found 25 videos (showing 16-25)");
    assert_eq!(out[3], "show/ep15.mkv");
    assert_eq!(out[12], "show/ep24.mkv");
    assert_eq!(out[13], "");
  }

  #[test]
  fn filter_line_shows_placeholder_then_text() {
    let mut app = app_with(3, 12);
    app.dispatch(Action::EnterFilterMode);
    let out = lines(&render(&app, 12));
    assert_eq!(out[2], "/filter...");

    for c in "ep01".chars() {
      app.dispatch(Action::Insert(c));
    }
    let mut terminal = render(&app, 12);
    assert_eq!(lines(&terminal)[2], "/ep01");
    assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(5, 2));
  }

  #[test]
  fn committed_filter_shows_in_status() {
    let mut app = app_with(3, 12);
    app.dispatch(Action::EnterFilterMode);
    for c in "ep01".chars() {
      app.dispatch(Action::Insert(c));
    }
    app.dispatch(Action::Commit);
    let out = lines(&render(&app, 12));
    assert_eq!(out[1], "Found 1 videos (showing 1-1)  filter: ep01");
    assert_eq!(out[2], "");
    assert_eq!(out[3], "show/ep01.mkv");
  }

  #[test]
  fn empty_filtered_list_shows_hint() {
    let mut app = app_with(3, 12);
    app.dispatch(Action::EnterFilterMode);
    app.dispatch(Action::Insert('z'));
    app.dispatch(Action::Commit);
    let out = lines(&render(&app, 12));
    assert_eq!(out[1], "Found 0 videos  filter: z");
    assert!(out[3].starts_with("No videos match"));
  }
}
