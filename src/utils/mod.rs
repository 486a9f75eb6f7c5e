pub mod environment;
pub mod terminal;

pub use environment::supports_color;
pub use terminal::strip_ansi_codes;
