//! Theme
//!
//! Light or dark presentation. The theme is a plain value handed to whatever
//! renders; nothing reads it from global state.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Errors raised when a theme name is parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
    /// The string names no theme.
    #[error("Unknown theme: {0}")]
    Unknown(String),
}

/// Presentation theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    /// Dark text on a light background.
    #[default]
    Light,

    /// Light text on a dark background.
    Dark,
}

impl Theme {
    /// The other theme.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(ThemeError::Unknown(s.to_string())),
        }
    }
}
