//! Console colors and the level to color mapping

use super::error::{Result, SinkError};
use super::log_level::LogLevel;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The sixteen classic console foreground colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsoleColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkCyan,
    DarkRed,
    DarkMagenta,
    DarkYellow,
    Gray,
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
}

impl ConsoleColor {
    pub const ALL: [ConsoleColor; 16] = [
        ConsoleColor::Black,
        ConsoleColor::DarkBlue,
        ConsoleColor::DarkGreen,
        ConsoleColor::DarkCyan,
        ConsoleColor::DarkRed,
        ConsoleColor::DarkMagenta,
        ConsoleColor::DarkYellow,
        ConsoleColor::Gray,
        ConsoleColor::DarkGray,
        ConsoleColor::Blue,
        ConsoleColor::Green,
        ConsoleColor::Cyan,
        ConsoleColor::Red,
        ConsoleColor::Magenta,
        ConsoleColor::Yellow,
        ConsoleColor::White,
    ];

    /// ANSI color used when writing to a terminal
    pub fn ansi(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            ConsoleColor::Black => Black,
            ConsoleColor::DarkBlue => Blue,
            ConsoleColor::DarkGreen => Green,
            ConsoleColor::DarkCyan => Cyan,
            ConsoleColor::DarkRed => Red,
            ConsoleColor::DarkMagenta => Magenta,
            ConsoleColor::DarkYellow => Yellow,
            ConsoleColor::Gray => White,
            ConsoleColor::DarkGray => BrightBlack,
            ConsoleColor::Blue => BrightBlue,
            ConsoleColor::Green => BrightGreen,
            ConsoleColor::Cyan => BrightCyan,
            ConsoleColor::Red => BrightRed,
            ConsoleColor::Magenta => BrightMagenta,
            ConsoleColor::Yellow => BrightYellow,
            ConsoleColor::White => BrightWhite,
        }
    }
}

impl fmt::Display for ConsoleColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl FromStr for ConsoleColor {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim();
        ConsoleColor::ALL
            .into_iter()
            .find(|color| color.to_string().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Invalid console color: '{}'", s))
    }
}

/// Mapping from every level to the color its token and message are drawn in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelColors {
    colors: BTreeMap<LogLevel, ConsoleColor>,
}

impl LevelColors {
    /// An empty mapping; must be filled for every level before use
    pub fn empty() -> Self {
        Self {
            colors: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with(mut self, level: LogLevel, color: ConsoleColor) -> Self {
        self.colors.insert(level, color);
        self
    }

    pub fn set(&mut self, level: LogLevel, color: ConsoleColor) {
        self.colors.insert(level, color);
    }

    pub fn get(&self, level: LogLevel) -> Option<ConsoleColor> {
        self.colors.get(&level).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Fails unless every level has a color
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<&str> = LogLevel::ALL
            .iter()
            .filter(|level| !self.colors.contains_key(level))
            .map(|level| level.name())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(SinkError::config(
                "level_colors",
                format!("no color configured for {}", missing.join(", ")),
            ))
        }
    }
}

impl Default for LevelColors {
    fn default() -> Self {
        Self::empty()
            .with(LogLevel::Trace, ConsoleColor::Cyan)
            .with(LogLevel::Debug, ConsoleColor::Blue)
            .with(LogLevel::Information, ConsoleColor::Green)
            .with(LogLevel::Warning, ConsoleColor::Yellow)
            .with(LogLevel::Error, ConsoleColor::Red)
            .with(LogLevel::Critical, ConsoleColor::DarkRed)
            .with(LogLevel::None, ConsoleColor::White)
    }
}

impl FromIterator<(LogLevel, ConsoleColor)> for LevelColors {
    fn from_iter<I: IntoIterator<Item = (LogLevel, ConsoleColor)>>(iter: I) -> Self {
        Self {
            colors: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_total() {
        let colors = LevelColors::default();
        assert!(colors.validate().is_ok());
        assert_eq!(colors.len(), 7);
        assert_eq!(colors.get(LogLevel::Critical), Some(ConsoleColor::DarkRed));
    }

    #[test]
    fn test_incomplete_mapping_rejected() {
        let colors = LevelColors::empty()
            .with(LogLevel::Trace, ConsoleColor::Gray)
            .with(LogLevel::Error, ConsoleColor::Red);
        let err = colors.validate().unwrap_err();
        let text = err.to_string();
        assert!(text.contains("Debug"));
        assert!(text.contains("None"));
        assert!(!text.contains("Trace"));
    }

    #[test]
    fn test_color_parse_case_insensitive() {
        assert_eq!("darkred".parse::<ConsoleColor>(), Ok(ConsoleColor::DarkRed));
        assert_eq!(" Yellow".parse::<ConsoleColor>(), Ok(ConsoleColor::Yellow));
        assert!("purple".parse::<ConsoleColor>().is_err());
    }

    #[test]
    fn test_dark_and_bright_variants_differ() {
        assert_ne!(ConsoleColor::Red.ansi(), ConsoleColor::DarkRed.ansi());
        assert_ne!(ConsoleColor::Gray.ansi(), ConsoleColor::DarkGray.ansi());
    }
}
