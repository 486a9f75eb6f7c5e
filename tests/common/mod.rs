//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for creating on-disk conversation archives (a `convos/`
/// directory with one file per conversation plus `index.json`).
pub struct ArchiveBuilder {
    temp_dir: TempDir,
    conversations: Vec<ConversationJson>,
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        Self { temp_dir: TempDir::new().expect("Failed to create temp dir"), conversations: Vec::new() }
    }

    /// Root directory (the working directory for spawned binaries).
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn archive_dir(&self) -> PathBuf {
        self.temp_dir.path().join("convos")
    }

    pub fn with_conversation(mut self, conversation: ConversationJson) -> Self {
        self.conversations.push(conversation);
        self
    }

    /// Write the split archive layout and return the temp dir.
    pub fn build(self) -> TempDir {
        let archive = self.archive_dir();
        fs::create_dir_all(&archive).expect("Failed to create archive dir");

        let mut index_rows = Vec::new();
        for (i, conversation) in self.conversations.iter().enumerate() {
            let number = i + 1;
            let filename = format!("{:03}_{}.json", number, conversation.name.replace(' ', "_"));
            fs::write(archive.join(&filename), conversation.to_json())
                .expect("Failed to write conversation file");
            index_rows.push(format!(
                r#"{{"index":{},"name":"{}","filename":"{}","uuid":"{}"}}"#,
                number, conversation.name, filename, conversation.uuid
            ));
        }
        fs::write(archive.join("index.json"), format!("[{}]", index_rows.join(",")))
            .expect("Failed to write index.json");

        self.temp_dir
    }
}

impl Default for ArchiveBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one conversation's JSON document.
pub struct ConversationJson {
    pub name: String,
    pub uuid: String,
    created_at: String,
    messages: Vec<(String, String)>,
}

impl ConversationJson {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            uuid: format!("uuid-{}", name.to_lowercase().replace(' ', "-")),
            created_at: "2024-01-15T10:30:00Z".to_string(),
            messages: Vec::new(),
        }
    }

    pub fn uuid(mut self, uuid: &str) -> Self {
        self.uuid = uuid.to_string();
        self
    }

    pub fn with_message(mut self, sender: &str, text: &str) -> Self {
        self.messages.push((sender.to_string(), text.to_string()));
        self
    }

    pub fn to_json(&self) -> String {
        let messages = self
            .messages
            .iter()
            .map(|(sender, text)| {
                format!(r#"{{"sender":"{}","text":"{}","attachments":[]}}"#, sender, text)
            })
            .collect::<Vec<_>>()
            .join(",");
        format!(
            r#"{{"name":"{}","uuid":"{}","created_at":"{}","updated_at":"{}","chat_messages":[{}]}}"#,
            self.name, self.uuid, self.created_at, self.created_at, messages
        )
    }
}

/// A small archive with three conversations, two messages each.
pub fn sample_archive() -> TempDir {
    ArchiveBuilder::new()
        .with_conversation(
            ConversationJson::new("Rust lifetimes")
                .with_message("human", "What is a lifetime?")
                .with_message("assistant", "A region of code a reference is valid for."),
        )
        .with_conversation(
            ConversationJson::new("Sourdough starter")
                .with_message("human", "My starter smells odd")
                .with_message("assistant", "That is usually fine."),
        )
        .with_conversation(
            ConversationJson::new("Trip planning")
                .with_message("human", "Three days in Lisbon?")
                .with_message("assistant", "Plenty for the center."),
        )
        .build()
}
