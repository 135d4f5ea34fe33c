mod app;
mod config;
mod constants;
mod error;
mod input;
mod logging;
mod player;
mod scanner;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use ratatui::{
  DefaultTerminal,
  crossterm::event::{self, Event, KeyEventKind},
};
use tracing::info;

use app::{Action, App, Exit};
use config::Config;
use scanner::Scanner;

// --- CLI ---

#[derive(Parser, Debug)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
#[command(after_help = "Environment:\n  VIDEO_DIR     directory to search (required)\n  VIDEO_PLAYER  player command (default: mpv)\n\nExample: movie-launcher matrix 1999")]
struct Args {
  /// Keywords every matching path must contain (case-insensitive, any order)
  #[arg(value_name = "KEYWORD", required_unless_present = "completions")]
  keywords: Vec<String>,

  /// Print a shell completion script and exit
  #[arg(long, value_name = "SHELL")]
  completions: Option<Shell>,
}

// --- Main ---

fn main() -> Result<()> {
  let args = Args::parse();

  if let Some(shell) = args.completions {
    clap_complete::generate(shell, &mut Args::command(), env!("CARGO_PKG_NAME"), &mut std::io::stdout());
    return Ok(());
  }

  let config = Config::from_env()?;
  let _log_guard = logging::init();

  println!("Searching for videos matching: {}", args.keywords.join(" "));
  let videos = Scanner::new().scan(&config.video_dir, &args.keywords).context("Error searching videos")?;

  if videos.is_empty() {
    println!("No videos found matching your search.");
    return Ok(());
  }

  let Some(selected) = browse(&config, videos).context("Error running UI")? else {
    info!("no selection, exiting");
    return Ok(());
  };

  println!("Playing: {}", selected.display());
  player::play(&config.player, &selected).context("Error playing video")?;
  Ok(())
}

/// Run the interactive browser on the alternate screen. The terminal is restored before
/// returning, also on error or panic.
fn browse(config: &Config, videos: Vec<PathBuf>) -> error::Result<Option<PathBuf>> {
  let default_hook = std::panic::take_hook();
  std::panic::set_hook(Box::new(move |info| {
    ratatui::restore();
    default_hook(info);
  }));

  let mut app = App::new(config.video_dir.clone(), videos);
  let mut terminal = ratatui::try_init()?;
  let result = run(&mut terminal, &mut app);
  ratatui::try_restore()?;

  Ok(match result? {
    Exit::Play(path) => Some(path),
    Exit::Quit => None,
  })
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> error::Result<Exit> {
  app.dispatch(Action::Resize(terminal.size()?.height));

  loop {
    terminal.draw(|frame| ui::ui(frame, app))?;

    match event::read()? {
      Event::Key(key) if key.kind == KeyEventKind::Press => {
        if let Some(action) = input::action_for_key(app.mode, key) {
          app.dispatch(action);
        }
      }
      Event::Resize(_, height) => app.dispatch(Action::Resize(height)),
      _ => {}
    }

    if let Some(exit) = app.exit() {
      return Ok(exit.clone());
    }
  }
}
