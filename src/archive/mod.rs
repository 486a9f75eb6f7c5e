//! Archive I/O: the split-conversation directory layout and the splitter
//! that produces it.
//!
//! # Error Handling Strategy
//!
//! Archive loading is fail-fast with context: a missing or malformed
//! `index.json` at startup is fatal, since the browser has nothing to show.
//! Opening one conversation from the menu is the exception: that failure
//! is reported to the user, who stays in the menu. Uses `anyhow::Result`
//! throughout; this is a binary crate, so errors are boxed with context
//! rather than typed.

pub mod loader;
pub mod splitter;

pub use loader::{load_catalog, load_conversation, load_conversation_file, load_index};
pub use splitter::{sanitize_filename, split_archive};
