use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::models::{Conversation, IndexEntry};

/// Directory holding the split archive, relative to the working directory.
pub const ARCHIVE_DIR: &str = "convos";
/// Catalog filename inside the archive directory.
pub const INDEX_FILE: &str = "index.json";
/// Pre-split single-conversation archives kept this name in the working
/// directory; the special case survives for compatibility.
pub const LEGACY_SINGLE_FILE: &str = "test.json";

/// Parse the catalog from `<dir>/index.json`.
pub fn load_index(archive_dir: &Path) -> Result<Vec<IndexEntry>> {
    let path = archive_dir.join(INDEX_FILE);
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let entries: Vec<IndexEntry> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(entries)
}

/// Catalog for a browsing session: the split archive when present,
/// otherwise a single-entry pseudo-index built from a legacy unsplit
/// `test.json` in the working directory.
pub fn load_catalog(archive_dir: &Path) -> Result<Vec<IndexEntry>> {
    if archive_dir.join(INDEX_FILE).exists() {
        return load_index(archive_dir);
    }

    let legacy = Path::new(LEGACY_SINGLE_FILE);
    if legacy.exists() {
        let conversation = load_conversation_file(legacy)?;
        let uuid =
            if conversation.uuid.is_empty() { None } else { Some(conversation.uuid.clone()) };
        return Ok(vec![IndexEntry {
            index: 1,
            name: conversation.name,
            filename: LEGACY_SINGLE_FILE.to_string(),
            uuid,
        }]);
    }

    bail!(
        "No conversation archive found: expected {} or {}",
        archive_dir.join(INDEX_FILE).display(),
        LEGACY_SINGLE_FILE
    )
}

/// Load one conversation file.
pub fn load_conversation_file(path: &Path) -> Result<Conversation> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let conversation: Conversation = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(conversation)
}

/// Resolve a catalog entry to its file and load it. Entries point into the
/// archive directory, except the legacy single-file name, which resolves
/// against the working directory.
pub fn load_conversation(archive_dir: &Path, entry: &IndexEntry) -> Result<Conversation> {
    let path = if entry.filename == LEGACY_SINGLE_FILE {
        PathBuf::from(LEGACY_SINGLE_FILE)
    } else {
        archive_dir.join(&entry.filename)
    };
    load_conversation_file(&path)
}
