use std::ffi::OsString;
use std::path::PathBuf;

use tracing::debug;

use crate::constants::constants;
use crate::error::{Error, Result};

pub const VIDEO_DIR_VAR: &str = "VIDEO_DIR";
pub const VIDEO_PLAYER_VAR: &str = "VIDEO_PLAYER";

/// Runtime configuration, resolved once at startup and passed down explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  /// Root of the scan.
  pub video_dir: PathBuf,
  /// Executable name or path used to play the selected file.
  pub player: String,
}

impl Config {
  pub fn from_env() -> Result<Self> {
    Self::from_lookup(|name| std::env::var_os(name))
  }

  /// Build the config from an arbitrary variable lookup. Empty values count as unset.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<OsString>) -> Result<Self> {
    let non_empty = |name: &str| lookup(name).filter(|v| !v.is_empty());

    let video_dir = non_empty(VIDEO_DIR_VAR).map(PathBuf::from).ok_or(Error::MissingEnv(VIDEO_DIR_VAR))?;
    let player = non_empty(VIDEO_PLAYER_VAR)
      .map(|v| v.to_string_lossy().into_owned())
      .unwrap_or_else(|| constants().default_player.clone());

    debug!(video_dir = %video_dir.display(), player = %player, "config: resolved");
    Ok(Self { video_dir, player })
  }
}
