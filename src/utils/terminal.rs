//! Terminal output sanitization.
//!
//! Archived message text is user-controlled data; escape sequences embedded
//! in it could clear the screen, move the cursor, or restyle the terminal.
//! Everything the viewer prints from the archive goes through
//! [`strip_ansi_codes`] first.

/// Strips ANSI CSI escape sequences and stray control characters from a
/// string. Tab, newline, and carriage return survive, so line counts (and
/// therefore truncation decisions) are unaffected.
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            // CSI sequence: ESC [ ... terminated by the first letter
            if chars.peek() == Some(&'[') {
                chars.next();
                while let Some(&next_ch) = chars.peek() {
                    chars.next();
                    if next_ch.is_ascii_alphabetic() {
                        break;
                    }
                }
                continue;
            }
        }

        if ch.is_control() && ch != '\t' && ch != '\n' && ch != '\r' {
            continue;
        }

        result.push(ch);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_color_codes() {
        let text = "\x1b[31mRed text\x1b[0m normal";
        assert_eq!(strip_ansi_codes(text), "Red text normal");
    }

    #[test]
    fn test_strip_cursor_movement() {
        let text = "\x1b[2J\x1b[H Cleared screen";
        assert_eq!(strip_ansi_codes(text), " Cleared screen");
    }

    #[test]
    fn test_strip_bell_and_backspace() {
        assert_eq!(strip_ansi_codes("Alert! \x07"), "Alert! ");
        assert_eq!(strip_ansi_codes("Test\x08"), "Test");
    }

    #[test]
    fn test_plain_text_unchanged() {
        let text = "Plain text with no codes";
        assert_eq!(strip_ansi_codes(text), text);
    }

    #[test]
    fn test_preserves_line_structure() {
        let text = "Line 1\nLine 2\rLine 3\tTabbed";
        assert_eq!(strip_ansi_codes(text), text);
    }

    #[test]
    fn test_line_count_stable_under_stripping() {
        let text = "a\n\x1b[31mb\x1b[0m\nc";
        assert_eq!(strip_ansi_codes(text).lines().count(), text.lines().count());
    }

    #[test]
    fn test_empty() {
        assert_eq!(strip_ansi_codes(""), "");
    }
}
