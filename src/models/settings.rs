use super::conversation::Sender;

pub const DEFAULT_ASSISTANT_LABEL: &str = "Assistant";
pub const DEFAULT_HUMAN_LABEL: &str = "User";

/// Sender display-name configuration.
///
/// One value is owned by the menu for the whole session and threaded by
/// reference into the viewer, the settings overlay, and every render call,
/// so rendering stays a pure function of its inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySettings {
    assistant_label: String,
    human_label: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            assistant_label: DEFAULT_ASSISTANT_LABEL.to_string(),
            human_label: DEFAULT_HUMAN_LABEL.to_string(),
        }
    }
}

impl DisplaySettings {
    pub fn assistant_label(&self) -> &str {
        &self.assistant_label
    }

    pub fn human_label(&self) -> &str {
        &self.human_label
    }

    /// Blank input is silently ignored, not stored.
    pub fn set_assistant_label(&mut self, label: &str) {
        let label = label.trim();
        if !label.is_empty() {
            self.assistant_label = label.to_string();
        }
    }

    /// Blank input is silently ignored, not stored.
    pub fn set_human_label(&mut self, label: &str) {
        let label = label.trim();
        if !label.is_empty() {
            self.human_label = label.to_string();
        }
    }

    pub fn reset_defaults(&mut self) {
        *self = Self::default();
    }

    /// Display label for a sender. Unknown senders keep their literal
    /// archive value.
    pub fn label_for<'a>(&'a self, sender: &'a Sender) -> &'a str {
        match sender {
            Sender::Human => &self.human_label,
            Sender::Assistant => &self.assistant_label,
            Sender::Other(raw) => raw,
        }
    }
}
