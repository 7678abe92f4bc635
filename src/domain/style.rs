//! Response style taxonomy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::AppError;

/// Response styles accepted by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStyle {
    Concise,
    Detailed,
    Creative,
    Formal,
    Technical,
}

impl ResponseStyle {
    /// All styles, in the order the builder presents them.
    pub const ALL: [ResponseStyle; 5] = [
        ResponseStyle::Concise,
        ResponseStyle::Detailed,
        ResponseStyle::Creative,
        ResponseStyle::Formal,
        ResponseStyle::Technical,
    ];

    /// Wire name used by the backend. Also the word interpolated into
    /// template skeletons.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseStyle::Concise => "concise",
            ResponseStyle::Detailed => "detailed",
            ResponseStyle::Creative => "creative",
            ResponseStyle::Formal => "formal",
            ResponseStyle::Technical => "technical",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ResponseStyle::Concise => "Concise",
            ResponseStyle::Detailed => "Detailed",
            ResponseStyle::Creative => "Creative",
            ResponseStyle::Formal => "Formal",
            ResponseStyle::Technical => "Technical",
        }
    }

    /// One-line description shown in interactive selection.
    pub fn description(&self) -> &'static str {
        match self {
            ResponseStyle::Concise => "Brief and to-the-point responses",
            ResponseStyle::Detailed => "Comprehensive and thorough explanations",
            ResponseStyle::Creative => "Imaginative and innovative approaches",
            ResponseStyle::Formal => "Professional and structured tone",
            ResponseStyle::Technical => "In-depth technical explanations",
        }
    }
}

impl FromStr for ResponseStyle {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "concise" => Ok(ResponseStyle::Concise),
            "detailed" => Ok(ResponseStyle::Detailed),
            "creative" => Ok(ResponseStyle::Creative),
            "formal" => Ok(ResponseStyle::Formal),
            "technical" => Ok(ResponseStyle::Technical),
            other => Err(AppError::InvalidStyle(other.to_string())),
        }
    }
}

impl fmt::Display for ResponseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_wire_names() {
        for style in ResponseStyle::ALL {
            assert_eq!(style.as_str().parse::<ResponseStyle>().unwrap(), style);
        }
    }

    #[test]
    fn rejects_unknown_style() {
        let err = "verbose".parse::<ResponseStyle>().unwrap_err();
        match err {
            AppError::InvalidStyle(name) => assert_eq!(name, "verbose"),
            other => panic!("Expected InvalidStyle, got {:?}", other),
        }
    }
}
