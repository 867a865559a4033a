//! 256-color terminal palette

use std::fmt;

/// ANSI reset sequence
pub const RESET: &str = "\x1b[0m";

/// Colors used by the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Green,
    Lime,
    Yellow,
    Orange,
    Red,
    DimGray,
}

impl Color {
    /// xterm-256 color index
    pub const fn code(self) -> u8 {
        match self {
            Color::Green => 46,
            Color::Lime => 118,
            Color::Yellow => 226,
            Color::Orange => 208,
            Color::Red => 196,
            Color::DimGray => 240,
        }
    }

    /// Foreground escape sequence
    pub fn fg(self) -> String {
        format!("\x1b[38;5;{}m", self.code())
    }

    /// Wrap text in this color, followed by a reset
    pub fn paint(self, text: &str) -> String {
        format!("{}{}{}", self.fg(), text, RESET)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fg())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_sequences() {
        assert_eq!(Color::Green.fg(), "\x1b[38;5;46m");
        assert_eq!(Color::DimGray.to_string(), "\x1b[38;5;240m");
        assert_eq!(Color::Red.paint("x"), "\x1b[38;5;196mx\x1b[0m");
    }
}
