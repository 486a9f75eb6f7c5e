//! Convo Browser - page through archived chat conversations in the terminal
//!
//! This library implements an interactive browser for chat archives that
//! have been split into one JSON file per conversation plus an `index.json`
//! catalog. It supports:
//!
//! - Paging through the catalog with wraparound and fuzzy search
//! - Stepping message-by-message through a conversation, with truncation
//!   and per-message "unfurl"
//! - Configurable sender display names via a settings overlay
//! - Splitting a single exported `conversations.json` array into the
//!   per-conversation archive layout
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use convo_browser::archive::loader;
//!
//! let entries = loader::load_catalog(Path::new("convos"))?;
//! println!("{} conversations in the archive", entries.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod archive;
pub mod cli;
pub mod models;
pub mod search;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use archive::loader::load_catalog;
pub use archive::splitter::split_archive;
pub use models::{Conversation, DisplaySettings, IndexEntry};
pub use search::fuzzy;
