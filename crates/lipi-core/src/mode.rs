use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Input scheme selected for a typing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransliterationMode {
    /// Remington (GAIL) typewriter layout.
    Remington,
    /// Inscript layout.
    Inscript,
    /// Romanized input resolved by longest match.
    Phonetic,
    /// Latin script typed as-is.
    English,
}

/// Practice language implied by a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Hindi,
    English,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("unsupported transliteration mode: {0}")]
    UnknownMode(String),
    #[error("layout {0} is not loaded")]
    MissingLayout(String),
    #[error("prompt is empty")]
    EmptyPrompt,
}

impl TransliterationMode {
    pub const ALL: [TransliterationMode; 4] = [
        TransliterationMode::Remington,
        TransliterationMode::Inscript,
        TransliterationMode::Phonetic,
        TransliterationMode::English,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Remington => "remington",
            Self::Inscript => "inscript",
            Self::Phonetic => "phonetic",
            Self::English => "english",
        }
    }

    /// Name of the layout driving this mode, if it is layout-driven.
    pub fn layout_name(&self) -> Option<&'static str> {
        match self {
            Self::Remington | Self::Inscript => Some(self.as_str()),
            Self::Phonetic | Self::English => None,
        }
    }

    pub fn language(&self) -> Language {
        match self {
            Self::English => Language::English,
            Self::Remington | Self::Inscript | Self::Phonetic => Language::Hindi,
        }
    }
}

impl FromStr for TransliterationMode {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == lower)
            .ok_or_else(|| ConfigurationError::UnknownMode(s.to_string()))
    }
}

impl fmt::Display for TransliterationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hindi => "hindi",
            Self::English => "english",
        })
    }
}
