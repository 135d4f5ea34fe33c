//! File logging.
//!
//! The terminal belongs to the browser while it runs, so logs go to
//! `<data dir>/movie-launcher.log` through a non-blocking writer. Verbosity comes from
//! `RUST_LOG` (default `info`).

use std::path::PathBuf;

use directories::ProjectDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt};

use crate::constants::constants;

fn log_dir() -> Option<PathBuf> {
  ProjectDirs::from("", "", "movie-launcher").map(|dirs| dirs.data_local_dir().to_path_buf())
}

/// Install the global subscriber. The returned guard must be held until exit so buffered
/// lines get flushed. Returns `None` (and logs nowhere) when no log directory is usable.
pub fn init() -> Option<WorkerGuard> {
  let dir = log_dir()?;
  std::fs::create_dir_all(&dir).ok()?;

  let appender = tracing_appender::rolling::never(&dir, &constants().log_file_name);
  let (writer, guard) = tracing_appender::non_blocking(appender);

  let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

  fmt().with_env_filter(env_filter).with_writer(writer).with_ansi(false).with_target(false).try_init().ok()?;

  Some(guard)
}
