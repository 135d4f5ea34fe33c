//! Error taxonomy shared by every stage of a run.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Every failure is fatal for the process; each stage is all-or-nothing.
#[derive(Debug, Error)]
pub enum Error {
  /// A required environment variable is missing or empty.
  #[error("{0} environment variable is required")]
  MissingEnv(&'static str),

  /// The directory walk hit an unreadable entry. Carries the walk root.
  #[error("failed to scan {}", root.display())]
  Scan {
    root: PathBuf,
    #[source]
    source: walkdir::Error,
  },

  /// Terminal setup, drawing or event reading failed.
  #[error("terminal UI failed")]
  Ui(#[from] std::io::Error),

  /// The player process could not be started.
  #[error("failed to launch player '{program}'")]
  PlayerLaunch {
    program: String,
    #[source]
    source: std::io::Error,
  },

  /// The player ran but exited unsuccessfully.
  #[error("player '{program}' exited with {status}")]
  PlayerExit { program: String, status: ExitStatus },
}

pub type Result<T> = std::result::Result<T, Error>;
