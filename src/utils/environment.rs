use std::io::{IsTerminal, stdout};

/// Whether stdout should receive colored output.
///
/// Windows consoles only understand ANSI colors under a capable host
/// (ANSICON, Windows Terminal, or an xterm-compatible TERM); everywhere
/// else color follows whether stdout is an interactive terminal.
pub fn supports_color() -> bool {
    if cfg!(windows) {
        return windows_host_supports_color(
            std::env::var_os("ANSICON").is_some(),
            std::env::var_os("WT_SESSION").is_some(),
            std::env::var("TERM").ok().as_deref(),
        );
    }
    stdout().is_terminal()
}

fn windows_host_supports_color(ansicon: bool, wt_session: bool, term: Option<&str>) -> bool {
    ansicon || wt_session || term == Some("xterm")
}
