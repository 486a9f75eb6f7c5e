//! The conversation viewer: a message cursor with truncation/unfurl state,
//! driven one keypress at a time.

use std::io::Write;

use anyhow::Result;

use super::input::{Key, KeySource, read_number};
use super::render::Theme;
use super::{clear_screen, render, settings_menu};
use crate::models::{Conversation, DisplaySettings};

/// Viewer commands, decoded from single keypresses. Enter advances, like
/// the explicit next key.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Next,
    Prev,
    Quit,
    Unfurl,
    Jump(char),
    Settings,
    Unknown,
}

impl Command {
    fn from_key(key: Key) -> Self {
        match key {
            Key::Enter => Command::Next,
            Key::Char(c) => match c.to_ascii_lowercase() {
                'n' => Command::Next,
                'p' => Command::Prev,
                'q' => Command::Quit,
                'u' => Command::Unfurl,
                's' => Command::Settings,
                d if d.is_ascii_digit() => Command::Jump(d),
                _ => Command::Unknown,
            },
            Key::Other => Command::Unknown,
        }
    }
}

/// Steps through one conversation. Owns the conversation for the duration
/// of the viewing session; the caller gets control back on quit or at the
/// end-of-conversation prompt.
pub struct Viewer {
    conversation: Conversation,
    cursor: usize,
    unfurled: bool,
}

impl Viewer {
    pub fn new(conversation: Conversation) -> Self {
        Self { conversation, cursor: 0, unfurled: false }
    }

    fn total(&self) -> usize {
        self.conversation.messages.len()
    }

    fn at_last_message(&self) -> bool {
        self.cursor + 1 >= self.total()
    }

    /// Advance the cursor; a no-op at the last message (the run loop turns
    /// that into the end-of-conversation prompt).
    fn advance(&mut self) {
        if !self.at_last_message() {
            self.cursor += 1;
            self.unfurled = false;
        }
    }

    fn retreat(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.unfurled = false;
        }
    }

    /// Unfurling only applies to a focused message that is actually
    /// truncated; otherwise nothing changes.
    fn unfurl(&mut self) {
        if let Some(message) = self.conversation.messages.get(self.cursor)
            && render::is_truncated(&message.text)
        {
            self.unfurled = true;
        }
    }

    /// Jump to 1-based message `number`; out-of-range numbers are ignored.
    fn jump_to(&mut self, number: usize) {
        if (1..=self.total()).contains(&number) {
            self.cursor = number - 1;
            self.unfurled = false;
        }
    }

    /// Run the viewing session until quit or end of conversation.
    pub fn run<K: KeySource + ?Sized>(
        &mut self,
        keys: &mut K,
        settings: &mut DisplaySettings,
        theme: &Theme,
    ) -> Result<()> {
        loop {
            clear_screen();
            print!(
                "{}",
                render::format_viewer_frame(
                    &self.conversation,
                    self.cursor,
                    self.unfurled,
                    settings,
                    theme,
                )
            );
            prompt()?;

            match Command::from_key(keys.read_key()?) {
                Command::Next => {
                    if self.at_last_message() {
                        println!("\nEnd of conversation.");
                        println!("Press any key to exit.");
                        keys.read_key()?;
                        return Ok(());
                    }
                    self.advance();
                }
                Command::Prev => self.retreat(),
                Command::Quit => return Ok(()),
                Command::Unfurl => self.unfurl(),
                Command::Jump(first) => {
                    let number = read_number(first, keys)?;
                    self.jump_to(number);
                }
                Command::Settings => settings_menu::run(keys, settings, theme)?,
                Command::Unknown => {
                    println!("\nUnknown command.");
                    println!("Press any key to continue.");
                    keys.read_key()?;
                }
            }
        }
    }
}

fn prompt() -> Result<()> {
    print!("Command: ");
    std::io::stdout().flush()?;
    Ok(())
}
