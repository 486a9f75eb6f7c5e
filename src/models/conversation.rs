use serde::{Deserialize, Deserializer};

/// An archived conversation, as exported in `conversations.json`.
///
/// Scalar timestamps stay as the raw strings from the export; formatting
/// for display happens at render time.
#[derive(Debug, Clone, Deserialize)]
pub struct Conversation {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default, rename = "chat_messages")]
    pub messages: Vec<ChatMessage>,
}

fn default_name() -> String {
    "Untitled Conversation".to_string()
}

/// One message of a conversation. Attachments are opaque records; only
/// their count is displayed.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatMessage {
    #[serde(default, deserialize_with = "deserialize_sender")]
    pub sender: Sender,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub attachments: Vec<serde_json::Value>,
}

/// Message sender. The archive stores a free-form string; anything other
/// than the two known senders keeps its literal value and renders plain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sender {
    Human,
    Assistant,
    Other(String),
}

impl Default for Sender {
    fn default() -> Self {
        Sender::Other(String::new())
    }
}

impl Sender {
    pub fn is_assistant(&self) -> bool {
        matches!(self, Sender::Assistant)
    }
}

fn deserialize_sender<'de, D>(deserializer: D) -> Result<Sender, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(match raw.to_lowercase().as_str() {
        "human" => Sender::Human,
        "assistant" => Sender::Assistant,
        _ => Sender::Other(raw),
    })
}
