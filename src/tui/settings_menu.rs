//! The blocking settings overlay. Suspends whichever screen invoked it and
//! mutates the session's [`DisplaySettings`] in place, so new labels show
//! up on the very next frame.

use std::io::Write;

use anyhow::Result;

use super::clear_screen;
use super::input::{Key, KeySource};
use super::render::Theme;
use crate::models::DisplaySettings;

pub fn run<K: KeySource + ?Sized>(
    keys: &mut K,
    settings: &mut DisplaySettings,
    theme: &Theme,
) -> Result<()> {
    loop {
        clear_screen();
        println!("\n{}", theme.pale_green("=== Display Settings ==="));
        println!("  1. Assistant label: {}", settings.assistant_label());
        println!("  2. Human label:     {}", settings.human_label());
        println!("  3. Reset to defaults");
        println!("  4. Return");
        print!("Select: ");
        std::io::stdout().flush()?;

        match keys.read_key()? {
            Key::Char('1') => {
                let label = keys.read_line("New assistant label (blank to keep): ")?;
                settings.set_assistant_label(&label);
            }
            Key::Char('2') => {
                let label = keys.read_line("New human label (blank to keep): ")?;
                settings.set_human_label(&label);
            }
            Key::Char('3') => settings.reset_defaults(),
            Key::Char('4') | Key::Char('q') => return Ok(()),
            _ => {}
        }
    }
}
