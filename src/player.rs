use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{error, info};

use crate::error::{Error, Result};

/// Run `program <path>` in the foreground with inherited stdio and wait for it to exit.
///
/// The path is passed as a single argument, never through a shell.
pub fn play(program: &str, path: &Path) -> Result<()> {
  info!(program, path = %path.display(), "player: launching");

  let status = Command::new(program)
    .arg(path)
    .stdin(Stdio::inherit())
    .stdout(Stdio::inherit())
    .stderr(Stdio::inherit())
    .status()
    .map_err(|source| {
      if source.kind() == ErrorKind::NotFound {
        error!(program, "player: executable not found");
      }
      Error::PlayerLaunch { program: program.to_string(), source }
    })?;

  if !status.success() {
    error!(program, %status, "player: exited unsuccessfully");
    return Err(Error::PlayerExit { program: program.to_string(), status });
  }

  info!(program, "player: finished");
  Ok(())
}
