use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::constants::constants;
use crate::error::{Error, Result};

/// Lowercased extension of `path` including the leading dot, e.g. `".mkv"`.
///
/// Everything from the last `.` of the file name counts, so a bare `.mp4` has extension `.mp4`.
fn dotted_extension(path: &Path) -> Option<String> {
  let name = path.file_name()?.to_str()?;
  let dot = name.rfind('.')?;
  Some(name[dot..].to_lowercase())
}

/// True when every needle is a substring of `haystack`. Needles must already be lowercase.
pub fn contains_all<S: AsRef<str>>(haystack: &str, needles: &[S]) -> bool {
  needles.iter().all(|n| haystack.contains(n.as_ref()))
}

/// Lowercased full path string, the form every keyword and filter match runs against.
pub fn match_key(path: &Path) -> String {
  path.to_string_lossy().to_lowercase()
}

pub struct Scanner {
  pub extensions: Vec<String>,
}

impl Scanner {
  pub fn new() -> Self {
    Self { extensions: constants().video_extensions.clone() }
  }

  pub fn is_video_file(&self, path: &Path) -> bool {
    dotted_extension(path).is_some_and(|ext| self.extensions.contains(&ext))
  }

  /// Walk `root` and return every video file whose path contains all `keywords`.
  ///
  /// Entries are visited in file-name order per directory level, so the result is stable for
  /// a given tree. The first unreadable entry aborts the whole scan.
  pub fn scan<S: AsRef<str>>(&self, root: &Path, keywords: &[S]) -> Result<Vec<PathBuf>> {
    let keywords: Vec<String> = keywords.iter().map(|k| k.as_ref().to_lowercase()).collect();
    info!(root = %root.display(), ?keywords, "scan: starting");

    let mut results = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
      let entry = entry.map_err(|source| Error::Scan { root: root.to_path_buf(), source })?;
      if entry.file_type().is_dir() || !self.is_video_file(entry.path()) {
        continue;
      }
      if contains_all(&match_key(entry.path()), keywords.as_slice()) {
        debug!(path = %entry.path().display(), "scan: match");
        results.push(entry.into_path());
      }
    }

    info!(count = results.len(), "scan: finished");
    Ok(results)
  }
}
