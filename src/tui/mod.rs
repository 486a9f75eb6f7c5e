// Interactive navigation: the main menu and the conversation viewer,
// both driven one blocking keypress at a time.
pub mod input;
pub mod menu;
pub mod paginator;
pub mod render;
pub mod settings_menu;
pub mod timestamps;
pub mod viewer;

use std::io::{IsTerminal, stdout};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

pub use input::{Key, KeySource, ScriptedKeys, TerminalKeys};
pub use menu::Menu;
pub use render::Theme;
pub use viewer::Viewer;

/// Clear the screen between frames. Skipped when stdout is not an
/// interactive terminal, so piped sessions and tests keep a linear
/// transcript.
pub(crate) fn clear_screen() {
    let mut out = stdout();
    if out.is_terminal() {
        let _ = execute!(out, Clear(ClearType::All), MoveTo(0, 0));
    }
}
