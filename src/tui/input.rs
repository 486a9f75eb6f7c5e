//! Blocking keyboard input for the interactive loops.
//!
//! Both state machines read one keypress at a time through [`KeySource`],
//! so tests drive them with scripted sequences and no terminal. The real
//! implementation, [`TerminalKeys`], holds the terminal in raw mode only
//! for the duration of each read and always restores it, falling back to
//! line-buffered input when raw mode is unavailable.

use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Result, bail};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// A single decoded keypress. Control sequences collapse to [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Other,
}

impl Key {
    pub fn digit(self) -> Option<char> {
        match self {
            Key::Char(c) if c.is_ascii_digit() => Some(c),
            _ => None,
        }
    }
}

/// Source of interactive input.
pub trait KeySource {
    /// Block until one keypress is available.
    fn read_key(&mut self) -> Result<Key>;

    /// Prompt and read one full line (line-buffered, echoing).
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

/// Reads single keypresses from the controlling terminal.
pub struct TerminalKeys;

/// Scoped raw-mode acquisition; restores the previous terminal mode on
/// every exit path, including errors mid-read.
struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    fn acquire() -> Self {
        Self { active: enable_raw_mode().is_ok() }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.active {
            let _ = disable_raw_mode();
        }
    }
}

impl KeySource for TerminalKeys {
    fn read_key(&mut self) -> Result<Key> {
        if !io::stdin().is_terminal() {
            return read_key_line_buffered();
        }

        let guard = RawModeGuard::acquire();
        if !guard.active {
            drop(guard);
            return read_key_line_buffered();
        }

        loop {
            if let Event::Key(key) = event::read()?
                && key.kind != KeyEventKind::Release
            {
                // Ctrl-C quits the active screen; raw mode swallows the signal.
                if key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return Ok(Key::Char('q'));
                }
                return Ok(match key.code {
                    KeyCode::Enter => Key::Enter,
                    KeyCode::Char(c) => Key::Char(c),
                    _ => Key::Other,
                });
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        print!("{}", prompt);
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Degraded input: one line per keypress, first character wins. Used when
/// stdin is not a terminal or raw mode cannot be enabled.
fn read_key_line_buffered() -> Result<Key> {
    let mut line = String::new();
    let bytes = io::stdin().lock().read_line(&mut line)?;
    if bytes == 0 {
        // Closed stdin: hand back the quit key so piped sessions unwind.
        return Ok(Key::Char('q'));
    }
    let trimmed = line.trim_end_matches(['\r', '\n']);
    Ok(match trimmed.chars().next() {
        Some(c) => Key::Char(c),
        None => Key::Enter,
    })
}

/// Accumulate a number from consecutive digit keys. The first digit has
/// already been read by the caller; further digits are consumed greedily
/// until the first non-digit key, which is discarded rather than handed
/// back as a command. Overflow resolves to `usize::MAX`, which no entry
/// set can contain.
pub fn read_number<K: KeySource + ?Sized>(first: char, keys: &mut K) -> Result<usize> {
    let mut digits = String::from(first);
    print!("{}", first);
    let _ = io::stdout().flush();
    loop {
        match keys.read_key()?.digit() {
            Some(c) => {
                digits.push(c);
                print!("{}", c);
                let _ = io::stdout().flush();
            }
            None => break,
        }
    }
    Ok(digits.parse().unwrap_or(usize::MAX))
}

/// Queue-backed [`KeySource`] for driving the state machines in tests.
pub struct ScriptedKeys {
    keys: VecDeque<Key>,
    lines: VecDeque<String>,
}

impl ScriptedKeys {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self { keys: keys.into_iter().collect(), lines: VecDeque::new() }
    }

    /// Queue responses for `read_line` prompts.
    pub fn with_lines(mut self, lines: impl IntoIterator<Item = &'static str>) -> Self {
        self.lines = lines.into_iter().map(String::from).collect();
        self
    }

    /// Convenience: script plain characters.
    pub fn from_chars(chars: &str) -> Self {
        Self::new(chars.chars().map(Key::Char))
    }

    pub fn is_exhausted(&self) -> bool {
        self.keys.is_empty() && self.lines.is_empty()
    }
}

impl KeySource for ScriptedKeys {
    fn read_key(&mut self) -> Result<Key> {
        match self.keys.pop_front() {
            Some(key) => Ok(key),
            None => bail!("scripted key sequence exhausted"),
        }
    }

    fn read_line(&mut self, _prompt: &str) -> Result<String> {
        match self.lines.pop_front() {
            Some(line) => Ok(line),
            None => bail!("scripted line sequence exhausted"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_digit() {
        assert_eq!(Key::Char('7').digit(), Some('7'));
        assert_eq!(Key::Char('a').digit(), None);
        assert_eq!(Key::Enter.digit(), None);
        assert_eq!(Key::Other.digit(), None);
    }

    #[test]
    fn test_read_number_single_digit() {
        let mut keys = ScriptedKeys::new([Key::Enter]);
        assert_eq!(read_number('5', &mut keys).unwrap(), 5);
        assert!(keys.is_exhausted());
    }

    #[test]
    fn test_read_number_multi_digit_consumes_terminator() {
        let mut keys = ScriptedKeys::new([Key::Char('2'), Key::Enter, Key::Char('q')]);
        assert_eq!(read_number('1', &mut keys).unwrap(), 12);
        // the Enter terminator is gone; the next key is the scripted 'q'
        assert_eq!(keys.read_key().unwrap(), Key::Char('q'));
    }

    #[test]
    fn test_read_number_stops_at_any_non_digit() {
        let mut keys = ScriptedKeys::new([Key::Char('0'), Key::Char('n'), Key::Char('3')]);
        assert_eq!(read_number('3', &mut keys).unwrap(), 30);
        // 'n' was consumed as the terminator; '3' remains
        assert_eq!(keys.read_key().unwrap(), Key::Char('3'));
    }

    #[test]
    fn test_read_number_overflow_is_out_of_range() {
        let mut keys =
            ScriptedKeys::new("9".repeat(30).chars().map(Key::Char).chain([Key::Enter]));
        assert_eq!(read_number('9', &mut keys).unwrap(), usize::MAX);
    }

    #[test]
    fn test_scripted_keys_exhaustion_is_error() {
        let mut keys = ScriptedKeys::new([]);
        assert!(keys.read_key().is_err());
        assert!(keys.read_line("? ").is_err());
    }

    #[test]
    fn test_scripted_lines() {
        let mut keys = ScriptedKeys::new([]).with_lines(["hello", ""]);
        assert_eq!(keys.read_line("? ").unwrap(), "hello");
        assert_eq!(keys.read_line("? ").unwrap(), "");
    }
}
