use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value;

use super::loader::INDEX_FILE;
use crate::models::IndexEntry;

/// Fixed input path for the splitter, relative to the working directory.
pub const SOURCE_FILE: &str = "source/conversations.json";

const UNTITLED: &str = "Untitled";

/// Replace spaces with underscores and drop every character that is not
/// alphanumeric, underscore, or hyphen.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| if c == ' ' { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}

/// Split a JSON array of conversations into one file per conversation plus
/// an `index.json` catalog, all pretty-printed with 2-space indent.
///
/// Conversations pass through as raw JSON values, so the split files carry
/// every field of the source untouched. Returns the written catalog.
pub fn split_archive(input: &Path, output_dir: &Path) -> Result<Vec<IndexEntry>> {
    let raw = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let parsed: Value = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", input.display()))?;
    let Value::Array(conversations) = parsed else {
        bail!("Input JSON must be an array of conversation objects");
    };

    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let mut index = Vec::with_capacity(conversations.len());
    for (i, conversation) in conversations.iter().enumerate() {
        let number = i + 1;
        let raw_name = conversation.get("name").and_then(Value::as_str).unwrap_or_default();
        let name = if raw_name.trim().is_empty() { UNTITLED } else { raw_name };
        let mut stem = sanitize_filename(name);
        if stem.is_empty() {
            stem = UNTITLED.to_string();
        }
        let filename = format!("{:03}_{}.json", number, stem);

        let path = output_dir.join(&filename);
        write_pretty_json(&path, conversation)?;
        println!("Wrote: {}", path.display());

        index.push(IndexEntry {
            index: number,
            name: name.to_string(),
            filename,
            uuid: conversation.get("uuid").and_then(Value::as_str).map(String::from),
        });
    }

    let index_value = serde_json::to_value(&index).context("Failed to serialize index")?;
    write_pretty_json(&output_dir.join(INDEX_FILE), &index_value)?;

    Ok(index)
}

fn write_pretty_json(path: &Path, value: &Value) -> Result<()> {
    let mut body = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    body.push('\n');
    fs::write(path, body).with_context(|| format!("Failed to write {}", path.display()))
}
