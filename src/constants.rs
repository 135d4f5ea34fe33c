//! Application constants loaded from `constants.ron` at compile time.
//!
//! The RON file is embedded via `include_str!`, so there is no runtime file I/O.
//! Parsed once on first access via `LazyLock`.

use serde::Deserialize;
use std::sync::LazyLock;

/// All tuneable application constants.
#[derive(Debug, Deserialize)]
pub struct Constants {
  /// Recognized video extensions, lowercase, with the leading dot.
  pub video_extensions: Vec<String>,

  pub default_player: String,

  // Browser viewport
  pub initial_viewport_size: usize,
  pub min_viewport_size: usize,
  /// Terminal rows not available to the list (header, status, filter line and margin).
  pub reserved_rows: usize,

  // Filter input
  pub filter_char_limit: usize,
  pub filter_placeholder: String,

  pub log_file_name: String,
}

static CONSTANTS: LazyLock<Constants> = LazyLock::new(|| {
  // Safety: the RON file is embedded at compile time; a malformed file fails the first access in every test run.
  ron::from_str(include_str!("../constants.ron")).expect("constants.ron must be valid RON (embedded at compile time)")
});

/// Returns a reference to the parsed application constants.
pub fn constants() -> &'static Constants {
  &CONSTANTS
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn embedded_constants_parse() {
    let c = constants();
    assert_eq!(c.video_extensions.len(), 12);
    assert!(c.video_extensions.iter().all(|e| e.starts_with('.') && *e == e.to_lowercase()));
    assert_eq!(c.default_player, "mpv");
    assert!(c.min_viewport_size > 0);
    assert!(c.initial_viewport_size >= c.min_viewport_size);
  }
}
