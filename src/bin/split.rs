//! Split a single exported `conversations.json` array into one file per
//! conversation plus a searchable `index.json` catalog.

use std::path::Path;

use anyhow::Result;
use convo_browser::archive::loader::ARCHIVE_DIR;
use convo_browser::archive::splitter::{SOURCE_FILE, split_archive};

fn main() -> Result<()> {
    let index = split_archive(Path::new(SOURCE_FILE), Path::new(ARCHIVE_DIR))?;
    println!("Split {} conversations into {}/", index.len(), ARCHIVE_DIR);
    Ok(())
}
