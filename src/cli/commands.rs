use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::Parser;

use crate::archive::loader::{self, ARCHIVE_DIR};
use crate::models::DisplaySettings;
use crate::tui::{Menu, TerminalKeys, Theme, Viewer};

#[derive(Parser)]
#[command(name = "convo-browser")]
#[command(version = "0.1.0")]
#[command(about = "Browse archived chat conversations in the terminal", long_about = None)]
pub struct Cli {
    /// Open a single conversation file directly instead of the menu
    pub conversation: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let theme = Theme::detect();
    let mut keys = TerminalKeys;

    match &cli.conversation {
        Some(path) => view_file(path, &mut keys, &theme),
        None => browse(&mut keys, &theme),
    }
}

/// Viewer mode: `convo-browser <conversation.json>`.
fn view_file(path: &Path, keys: &mut TerminalKeys, theme: &Theme) -> Result<()> {
    if !path.exists() {
        bail!("File not found: {}", path.display());
    }
    let conversation = loader::load_conversation_file(path)?;
    let mut settings = DisplaySettings::default();
    Viewer::new(conversation).run(keys, &mut settings, theme)
}

/// Menu mode: `convo-browser` with no arguments.
fn browse(keys: &mut TerminalKeys, theme: &Theme) -> Result<()> {
    let archive_dir = Path::new(ARCHIVE_DIR);
    let entries = loader::load_catalog(archive_dir)?;
    Menu::new(entries, archive_dir.to_path_buf()).run(keys, theme)
}
