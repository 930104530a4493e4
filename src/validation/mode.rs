//! Validation modes.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::config::ConfigError;

/// How strictly an outbound payload is checked before it is sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// No validation at all.
    None,
    /// Fields that are present must be well formed; absent fields are fine.
    IgnoreMissing,
    /// Format checks plus presence of every field the operation requires.
    #[default]
    All,
}

impl ValidationMode {
    /// Returns true if absent required fields are reported.
    #[must_use]
    pub const fn requires_presence(self) -> bool {
        matches!(self, Self::All)
    }

    /// Returns true if no validation is performed.
    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    /// Lowers `All` to `IgnoreMissing`; other modes are unchanged.
    #[must_use]
    pub const fn relaxed(self) -> Self {
        match self {
            Self::All => Self::IgnoreMissing,
            other => other,
        }
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::IgnoreMissing => "ignore_missing",
            Self::All => "all",
        };
        f.write_str(name)
    }
}

impl FromStr for ValidationMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "none" => Ok(Self::None),
            "ignore_missing" => Ok(Self::IgnoreMissing),
            "all" => Ok(Self::All),
            _ => Err(ConfigError::InvalidValidationMode {
                value: s.to_string(),
            }),
        }
    }
}
