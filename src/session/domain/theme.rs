//! Persisted theme preference.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Named colour theme selectable in the client.
///
/// Only the preference name is modelled; the palettes behind each name are
/// presentation concerns outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Default blue theme.
    #[default]
    Default,
    /// Dark mode.
    Dark,
    /// Ocean breeze.
    Ocean,
    /// Sunset.
    Sunset,
    /// Forest.
    Forest,
    /// Midnight.
    Midnight,
    /// Lavender.
    Lavender,
    /// Autumn.
    Autumn,
}

impl ThemeName {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Dark => "dark",
            Self::Ocean => "ocean",
            Self::Sunset => "sunset",
            Self::Forest => "forest",
            Self::Midnight => "midnight",
            Self::Lavender => "lavender",
            Self::Autumn => "autumn",
        }
    }
}

impl TryFrom<&str> for ThemeName {
    type Error = ParseThemeNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "default" => Ok(Self::Default),
            "dark" => Ok(Self::Dark),
            "ocean" => Ok(Self::Ocean),
            "sunset" => Ok(Self::Sunset),
            "forest" => Ok(Self::Forest),
            "midnight" => Ok(Self::Midnight),
            "lavender" => Ok(Self::Lavender),
            "autumn" => Ok(Self::Autumn),
            _ => Err(ParseThemeNameError(value.to_owned())),
        }
    }
}

/// Error returned while parsing a stored theme name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown theme name: {0}")]
pub struct ParseThemeNameError(pub String);
