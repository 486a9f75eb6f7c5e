//! Stateless rendering for the menu and the viewer.
//!
//! Every function here formats into a `String`; the interactive loops do
//! the printing. Color is carried by [`Theme`], truncation by
//! [`short_text`]/[`is_truncated`], which share the same trimming so the
//! "is truncated" check and the rendered text always agree.

use crossterm::style::{Color, Stylize};

use super::timestamps::format_timestamp;
use crate::models::{ChatMessage, Conversation, DisplaySettings, IndexEntry};
use crate::utils::strip_ansi_codes;

/// Messages longer than this many lines are truncated.
pub const MAX_LINES: usize = 15;
/// The viewer shows a sliding window of this many messages.
pub const WINDOW_SIZE: usize = 4;
pub const TRUNCATION_MARKER: &str = "... (truncated)";

const LAVENDER: Color = Color::Rgb { r: 181, g: 126, b: 220 };
const SKY_BLUE: Color = Color::Rgb { r: 135, g: 206, b: 235 };
const PALE_GREEN: Color = Color::Rgb { r: 152, g: 251, b: 152 };

const MESSAGE_SEPARATOR_WIDTH: usize = 30;
const HEADER_RULE_WIDTH: usize = 40;

/// Color configuration for one session. Detection happens once at startup;
/// a disabled theme passes text through untouched.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    enabled: bool,
}

impl Theme {
    pub fn detect() -> Self {
        Self { enabled: crate::utils::supports_color() }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled { text.with(color).to_string() } else { text.to_string() }
    }

    pub fn lavender(&self, text: &str) -> String {
        self.paint(text, LAVENDER)
    }

    pub fn sky_blue(&self, text: &str) -> String {
        self.paint(text, SKY_BLUE)
    }

    pub fn pale_green(&self, text: &str) -> String {
        self.paint(text, PALE_GREEN)
    }
}

/// Whether a message body exceeds the truncation threshold. Uses the same
/// trimming as [`short_text`].
pub fn is_truncated(text: &str) -> bool {
    text.trim().lines().count() > MAX_LINES
}

/// Trimmed message body, capped at [`MAX_LINES`] lines plus a marker.
pub fn short_text(text: &str) -> String {
    let trimmed = text.trim();
    let lines: Vec<&str> = trimmed.lines().collect();
    if lines.len() > MAX_LINES {
        let mut out = lines[..MAX_LINES].join("\n");
        out.push('\n');
        out.push_str(TRUNCATION_MARKER);
        out
    } else {
        trimmed.to_string()
    }
}

/// Trimmed message body with no cap (the unfurled rendering).
pub fn full_text(text: &str) -> String {
    text.trim().to_string()
}

/// Format one message with its position annotation. Assistant messages get
/// the sky-blue header and lavender body; everything else renders plain.
pub fn format_message(
    message: &ChatMessage,
    idx: usize,
    total: usize,
    unfurl: bool,
    settings: &DisplaySettings,
    theme: &Theme,
) -> String {
    let label = settings.label_for(&message.sender);
    let header = format!("[{}/{}] {}:", idx + 1, total, label);
    let text = strip_ansi_codes(&message.text);
    let body = if unfurl { full_text(&text) } else { short_text(&text) };

    let mut out = String::new();
    if message.sender.is_assistant() {
        out.push_str(&theme.sky_blue(&header));
        out.push('\n');
        out.push_str(&theme.lavender(&body));
    } else {
        out.push_str(&header);
        out.push('\n');
        out.push_str(&body);
    }

    if !message.attachments.is_empty() {
        let attachments = format!("  [Attachments: {}]", message.attachments.len());
        out.push('\n');
        if message.sender.is_assistant() {
            out.push_str(&theme.lavender(&attachments));
        } else {
            out.push_str(&attachments);
        }
    }

    out
}

/// The sliding window of the last [`WINDOW_SIZE`] messages ending at the
/// cursor. Only the focused message honors `unfurled`; the rest always
/// truncate.
pub fn format_window(
    conversation: &Conversation,
    cursor: usize,
    unfurled: bool,
    settings: &DisplaySettings,
    theme: &Theme,
) -> String {
    let total = conversation.messages.len();
    if total == 0 {
        return "\n(this conversation has no messages)\n".to_string();
    }

    let start = (cursor + 1).saturating_sub(WINDOW_SIZE);
    let mut out = String::new();
    for i in start..=cursor {
        let unfurl = unfurled && i == cursor;
        out.push('\n');
        out.push_str(&format_message(
            &conversation.messages[i],
            i,
            total,
            unfurl,
            settings,
            theme,
        ));
        out.push('\n');
        out.push_str(&"-".repeat(MESSAGE_SEPARATOR_WIDTH));
        out.push('\n');
    }
    out
}

pub fn conversation_title(conversation: &Conversation) -> &str {
    if conversation.name.is_empty() { "Untitled Conversation" } else { &conversation.name }
}

/// One full viewer frame: header block, message window, key hints.
pub fn format_viewer_frame(
    conversation: &Conversation,
    cursor: usize,
    unfurled: bool,
    settings: &DisplaySettings,
    theme: &Theme,
) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&theme.pale_green(&format!("=== {} ===", conversation_title(conversation))));
    out.push('\n');
    out.push_str(&format!("UUID: {}\n", conversation.uuid));
    out.push_str(&format!("Created: {}\n", format_timestamp(&conversation.created_at)));
    out.push_str(&format!("Updated: {}\n", format_timestamp(&conversation.updated_at)));
    out.push_str(&format!("Messages: {}\n", conversation.messages.len()));
    out.push_str(&"=".repeat(HEADER_RULE_WIDTH));
    out.push('\n');
    out.push_str(&format_window(conversation, cursor, unfurled, settings, theme));
    out.push_str("\n[n]ext, [p]rev, [u]nfurl, [#]jump, [s]ettings, [q]uit\n");
    out
}

/// One full menu frame for the current page of the active entry set.
pub fn format_menu_page(
    visible: &[IndexEntry],
    page: usize,
    num_pages: usize,
    total: usize,
    search: Option<&str>,
    theme: &Theme,
) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&theme.pale_green("=== Conversations ==="));
    out.push('\n');
    if let Some(query) = search {
        out.push_str(&format!("Search: \"{}\" ({} matches)\n", query, total));
    }
    for entry in visible {
        out.push_str(&format!("{:>4}. {}\n", entry.index, entry.name));
    }
    if visible.is_empty() {
        out.push_str("(no conversations)\n");
    }
    out.push_str(&format!("\nPage {}/{} ({} conversations)\n", page + 1, num_pages, total));
    out.push_str("[n]ext page, [p]rev page, [f]ind, [s]ettings, [#]open, [q]uit\n");
    out
}
